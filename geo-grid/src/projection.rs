//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Coordinate transformations

use crate::error::GridError;
use crate::extent::{Extent, LatLng, LatLngBounds, MAX_MERCATOR_LAT};
use crate::zones::{normalize_lng, unwrap_lng, zone_number};
use std::f64::consts;

/// Mean earth radius in meters
pub const EARTH_RADIUS: f64 = 6371000.0;

/// WGS84 semi-major axis in meters
pub const WGS84_A: f64 = 6378137.0;
const ECC_SQUARED: f64 = 0.00669438;
const K0: f64 = 0.9996;
const FALSE_EASTING: f64 = 500000.0;
const FALSE_NORTHING: f64 = 10000000.0;

/// Southern limit of UTM/MGRS grids
pub const UTM_MIN_LAT: f64 = -80.0;
/// Northern limit of UTM/MGRS grids
pub const UTM_MAX_LAT: f64 = 84.0;

const BAND_LETTERS: &[u8] = b"CDEFGHJKLMNPQRSTUVWX";

/// Projected UTM point
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct ProjectedPoint {
    pub easting: f64,
    pub northing: f64,
    pub zone_number: u8,
    pub zone_letter: char,
}

#[derive(PartialEq, Clone, Copy, Debug, Serialize)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    pub fn of_letter(letter: char) -> Hemisphere {
        if letter < 'N' {
            Hemisphere::South
        } else {
            Hemisphere::North
        }
    }
    pub fn of_lat(lat: f64) -> Hemisphere {
        if lat < 0.0 {
            Hemisphere::South
        } else {
            Hemisphere::North
        }
    }
    pub fn suffix(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
        }
    }
}

impl ProjectedPoint {
    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::of_letter(self.zone_letter)
    }
}

/// Returns the Spherical Mercator (x, y) in meters.
/// Latitudes are clamped to the Mercator world square.
pub fn ll_to_spherical_mercator(lat: f64, lon: f64) -> (f64, f64) {
    let lat = lat.max(-MAX_MERCATOR_LAT).min(MAX_MERCATOR_LAT);
    let x = EARTH_RADIUS * lon.to_radians();
    let y = EARTH_RADIUS * ((consts::PI * 0.25) + (0.5 * lat.to_radians())).tan().ln();
    (x, y)
}

/// Geodetic position of a Spherical Mercator point
pub fn spherical_mercator_to_ll(x: f64, y: f64) -> LatLng {
    let lng = (x / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - consts::PI * 0.5).to_degrees();
    LatLng { lat, lng }
}

/// Projected bounds
pub fn bounds_ll_to_sm(bounds: &LatLngBounds) -> Extent {
    let (minx, miny) = ll_to_spherical_mercator(bounds.south, bounds.west);
    let (maxx, maxy) = ll_to_spherical_mercator(bounds.north, bounds.east);
    Extent {
        minx,
        miny,
        maxx,
        maxy,
    }
}

/// Ground meters per screen pixel at latitude `lat`
pub fn meters_per_pixel(lat: f64, zoom: u8) -> f64 {
    EARTH_RADIUS * lat.to_radians().cos().abs() / (zoom as f64 + 8.0).exp2()
}

/// MGRS latitude band letter. `None` outside of the UTM band.
pub fn zone_letter(lat: f64) -> Option<char> {
    if lat >= 72.0 && lat <= UTM_MAX_LAT {
        Some('X')
    } else if lat >= UTM_MIN_LAT && lat < 72.0 {
        let idx = ((lat - UTM_MIN_LAT) / 8.0).floor() as usize;
        BAND_LETTERS.get(idx).map(|c| *c as char)
    } else {
        None
    }
}

fn check_range(lat: f64) -> Result<(), GridError> {
    if lat >= UTM_MIN_LAT && lat <= UTM_MAX_LAT {
        Ok(())
    } else {
        Err(GridError::OutOfRange {
            lat,
            min: UTM_MIN_LAT,
            max: UTM_MAX_LAT,
        })
    }
}

/// Central meridian of a UTM zone
pub fn central_meridian(zone: u8) -> f64 {
    (zone as f64 - 1.0) * 6.0 - 180.0 + 3.0
}

/// Transverse Mercator projection into `zone` (easting, northing)
fn project(lat: f64, lon: f64, zone: u8, hemisphere: Hemisphere) -> (f64, f64) {
    let e2 = ECC_SQUARED;
    let e4 = e2 * e2;
    let e6 = e4 * e2;
    let ecc_prime_squared = e2 / (1.0 - e2);

    let lat_rad = lat.to_radians();
    let dlon = normalize_lng(lon - central_meridian(zone));

    let n = WGS84_A / (1.0 - e2 * lat_rad.sin().powi(2)).sqrt();
    let t = lat_rad.tan().powi(2);
    let c = ecc_prime_squared * lat_rad.cos().powi(2);
    let a = lat_rad.cos() * dlon.to_radians();

    let m = WGS84_A
        * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * lat_rad
            - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * lat_rad).sin()
            + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * lat_rad).sin()
            - (35.0 * e6 / 3072.0) * (6.0 * lat_rad).sin());

    let easting = K0
        * n
        * (a + (1.0 - t + c) * a.powi(3) / 6.0
            + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ecc_prime_squared) * a.powi(5) / 120.0)
        + FALSE_EASTING;

    let mut northing = K0
        * (m + n
            * lat_rad.tan()
            * (a * a / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c * c) * a.powi(4) / 24.0
                + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ecc_prime_squared) * a.powi(6)
                    / 720.0));
    if hemisphere == Hemisphere::South {
        northing += FALSE_NORTHING;
    }
    (easting, northing)
}

/// Convert a geodetic position to UTM.
///
/// Fails with `OutOfRange` outside of the band [-80, 84].
pub fn ll_to_utm(lat: f64, lon: f64) -> Result<ProjectedPoint, GridError> {
    check_range(lat)?;
    let zone = zone_number(lat, lon);
    let letter = zone_letter(lat).ok_or(GridError::OutOfRange {
        lat,
        min: UTM_MIN_LAT,
        max: UTM_MAX_LAT,
    })?;
    let (easting, northing) = project(lat, lon, zone, Hemisphere::of_lat(lat));
    Ok(ProjectedPoint {
        easting,
        northing,
        zone_number: zone,
        zone_letter: letter,
    })
}

/// Convert a geodetic position to UTM coordinates of a given zone.
///
/// Northings follow the hemisphere of `zone_letter`, so points on the other
/// side of the equator get northings outside of their usual range.
/// Used for building one continuous lattice per zone.
pub fn ll_to_utm_in_zone(
    lat: f64,
    lon: f64,
    zone: u8,
    zone_letter: char,
) -> Result<ProjectedPoint, GridError> {
    check_range(lat)?;
    if zone < 1 || zone > 60 {
        return Err(GridError::Configuration(format!("invalid UTM zone {}", zone)));
    }
    let (easting, northing) = project(lat, lon, zone, Hemisphere::of_letter(zone_letter));
    Ok(ProjectedPoint {
        easting,
        northing,
        zone_number: zone,
        zone_letter,
    })
}

/// Convert a UTM point to a geodetic position
pub fn utm_to_ll(pt: &ProjectedPoint) -> LatLng {
    let ll = inverse(pt);
    LatLng {
        lat: ll.lat,
        lng: normalize_lng(ll.lng),
    }
}

/// Convert a UTM point to a geodetic position with a longitude within
/// 180 degrees of `reference_lng`.
///
/// Points of a zone lattice reaching over the antimeridian stay on the
/// side of the lattice instead of wrapping around the globe.
pub fn utm_to_ll_near(pt: &ProjectedPoint, reference_lng: f64) -> LatLng {
    let ll = inverse(pt);
    LatLng {
        lat: ll.lat,
        lng: unwrap_lng(ll.lng, reference_lng),
    }
}

/// Inverse Transverse Mercator, longitude not wrapped
fn inverse(pt: &ProjectedPoint) -> LatLng {
    let e2 = ECC_SQUARED;
    let ecc_prime_squared = e2 / (1.0 - e2);
    let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());

    let x = pt.easting - FALSE_EASTING;
    let mut y = pt.northing;
    if pt.hemisphere() == Hemisphere::South {
        y -= FALSE_NORTHING;
    }

    let m = y / K0;
    let mu = m / (WGS84_A * (1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2.powi(3) / 256.0));

    let phi1 = mu
        + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
        + (21.0 * e1 * e1 / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
        + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin();

    let n1 = WGS84_A / (1.0 - e2 * phi1.sin().powi(2)).sqrt();
    let t1 = phi1.tan().powi(2);
    let c1 = ecc_prime_squared * phi1.cos().powi(2);
    let r1 = WGS84_A * (1.0 - e2) / (1.0 - e2 * phi1.sin().powi(2)).powf(1.5);
    let d = x / (n1 * K0);

    let lat = phi1
        - (n1 * phi1.tan() / r1)
            * (d * d / 2.0
                - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ecc_prime_squared)
                    * d.powi(4)
                    / 24.0
                + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                    - 252.0 * ecc_prime_squared
                    - 3.0 * c1 * c1)
                    * d.powi(6)
                    / 720.0);

    let lon = (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
        + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ecc_prime_squared + 24.0 * t1 * t1)
            * d.powi(5)
            / 120.0)
        / phi1.cos();

    LatLng {
        lat: lat.to_degrees(),
        lng: central_meridian(pt.zone_number) + lon.to_degrees(),
    }
}
