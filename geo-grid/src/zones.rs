//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! UTM/MGRS zone boundary tables

/// Width of a regular UTM zone in degrees
pub const ZONE_WIDTH: f64 = 6.0;

/// Height of a regular MGRS latitude band in degrees
pub const BAND_HEIGHT: f64 = 8.0;

/// Southern edges of the MGRS latitude bands C..X plus the northern limit
/// of band X, which is 12 degrees tall.
pub static LATITUDE_BAND_EDGES: [f64; 21] = [
    -80.0, -72.0, -64.0, -56.0, -48.0, -40.0, -32.0, -24.0, -16.0, -8.0, 0.0, 8.0, 16.0, 24.0,
    32.0, 40.0, 48.0, 56.0, 64.0, 72.0, 84.0,
];

/// Irregular zone meridians replacing the regular 6 degree meridians
/// between `OVERRIDE_WEST` and `OVERRIDE_EAST` in a latitude band.
#[derive(Debug)]
pub struct ZoneOverride {
    pub name: &'static str,
    pub south: f64,
    pub north: f64,
    pub longitudes: &'static [f64],
}

pub const OVERRIDE_WEST: f64 = 0.0;
pub const OVERRIDE_EAST: f64 = 42.0;

/// Regular meridians inside the override region end at this latitude.
pub const OVERRIDE_SOUTH: f64 = 56.0;

pub static ZONE_OVERRIDES: [ZoneOverride; 3] = [
    ZoneOverride {
        name: "norway",
        south: 56.0,
        north: 64.0,
        longitudes: &[3.0, 12.0, 18.0, 24.0, 30.0, 36.0],
    },
    ZoneOverride {
        name: "scandinavia",
        south: 64.0,
        north: 72.0,
        longitudes: &[6.0, 12.0, 18.0, 24.0, 30.0, 36.0],
    },
    ZoneOverride {
        name: "svalbard",
        south: 72.0,
        north: 84.0,
        longitudes: &[9.0, 21.0, 33.0],
    },
];

/// UTM zone number exception: points with `south <= lat < north` and
/// `west <= lng < east` belong to `zone`.
#[derive(Debug)]
pub struct ZoneException {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
    pub zone: u8,
}

pub static ZONE_NUMBER_EXCEPTIONS: [ZoneException; 5] = [
    // 32V
    ZoneException {
        south: 56.0,
        north: 64.0,
        west: 3.0,
        east: 12.0,
        zone: 32,
    },
    // 31X
    ZoneException {
        south: 72.0,
        north: 84.0,
        west: 0.0,
        east: 9.0,
        zone: 31,
    },
    // 33X
    ZoneException {
        south: 72.0,
        north: 84.0,
        west: 9.0,
        east: 21.0,
        zone: 33,
    },
    // 35X
    ZoneException {
        south: 72.0,
        north: 84.0,
        west: 21.0,
        east: 33.0,
        zone: 35,
    },
    // 37X
    ZoneException {
        south: 72.0,
        north: 84.0,
        west: 33.0,
        east: 42.0,
        zone: 37,
    },
];

/// Whether `lng` is a natural UTM zone edge (multiple of 6 degrees)
pub fn is_zone_edge(lng: f64) -> bool {
    lng % ZONE_WIDTH == 0.0
}

/// Snap `value` down to a multiple of `step`
pub fn snap_to(value: f64, step: f64) -> f64 {
    (value / step).floor() * step
}

/// Regular zone meridians strictly inside `(west, east)`
pub fn zone_breaks(west: f64, east: f64) -> Vec<f64> {
    let mut breaks = Vec::new();
    let mut lng = snap_to(west, ZONE_WIDTH) + ZONE_WIDTH;
    while lng < east {
        breaks.push(lng);
        lng += ZONE_WIDTH;
    }
    breaks
}

/// Latitude band edges covering `[south, north]`, starting with the
/// highest edge at or below `south`.
pub fn band_edges(south: f64, north: f64) -> Vec<f64> {
    let first = LATITUDE_BAND_EDGES
        .iter()
        .rposition(|edge| *edge <= south)
        .unwrap_or(0);
    LATITUDE_BAND_EDGES[first..]
        .iter()
        .cloned()
        .filter(|edge| *edge < north)
        .collect()
}

/// Northern edge of the band starting at `band_south`
pub fn band_north(band_south: f64) -> Option<f64> {
    LATITUDE_BAND_EDGES
        .iter()
        .position(|edge| *edge == band_south)
        .and_then(|idx| LATITUDE_BAND_EDGES.get(idx + 1).cloned())
}

/// Override table for the band starting at `band_south`
pub fn override_for(band_south: f64) -> Option<&'static ZoneOverride> {
    ZONE_OVERRIDES.iter().find(|o| o.south == band_south)
}

/// Northern end of the regular zone meridian at `lng`
pub fn meridian_top(lng: f64) -> f64 {
    if lng <= OVERRIDE_WEST || lng >= OVERRIDE_EAST {
        84.0
    } else {
        OVERRIDE_SOUTH
    }
}

/// Zone meridians of the band starting at `band_south`, irregular zones
/// included, sorted from west to east.
pub fn band_meridians(band_south: f64) -> Vec<f64> {
    let ov = override_for(band_south);
    let mut meridians: Vec<f64> = (0..=60)
        .map(|i| -180.0 + i as f64 * ZONE_WIDTH)
        .filter(|lng| ov.is_none() || *lng <= OVERRIDE_WEST || *lng >= OVERRIDE_EAST)
        .collect();
    if let Some(ov) = ov {
        meridians.extend_from_slice(ov.longitudes);
        meridians.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    }
    meridians
}

/// UTM zone number of a point, special zones included
pub fn zone_number(lat: f64, lng: f64) -> u8 {
    if let Some(exc) = ZONE_NUMBER_EXCEPTIONS.iter().find(|e| {
        lat >= e.south && lat < e.north && lng >= e.west && lng < e.east
    }) {
        return exc.zone;
    }
    let lng = normalize_lng(lng);
    let zone = ((lng + 180.0) / ZONE_WIDTH).floor() as i32 + 1;
    zone.max(1).min(60) as u8
}

/// Longitude wrapped to `[-180, 180]`
pub fn normalize_lng(lng: f64) -> f64 {
    if lng >= -180.0 && lng <= 180.0 {
        lng
    } else {
        (lng + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// `lng` shifted by a multiple of 360 degrees to lie within 180 degrees
/// of `reference`
pub fn unwrap_lng(lng: f64, reference: f64) -> f64 {
    reference + normalize_lng(lng - reference)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(band_edges(-90.0, -70.0), vec![-80.0, -72.0]);
        assert_eq!(band_edges(45.0, 60.0), vec![40.0, 48.0, 56.0]);
        assert_eq!(band_edges(75.0, 90.0), vec![72.0, 84.0]);
        assert_eq!(band_edges(80.0, 83.0), vec![72.0]);
        assert_eq!(band_north(72.0), Some(84.0));
        assert_eq!(band_north(64.0), Some(72.0));
        assert_eq!(band_north(84.0), None);
    }

    #[test]
    fn test_zone_breaks() {
        assert_eq!(zone_breaks(1.0, 20.0), vec![6.0, 12.0, 18.0]);
        assert_eq!(zone_breaks(-7.5, -1.0), vec![-6.0]);
        assert_eq!(zone_breaks(1.0, 5.0), Vec::<f64>::new());
        for lng in zone_breaks(-180.0, 180.0) {
            assert!(is_zone_edge(lng));
        }
        assert!(!is_zone_edge(7.25));
    }

    #[test]
    fn test_override_tables() {
        for ov in ZONE_OVERRIDES.iter() {
            assert!(ov.south >= OVERRIDE_SOUTH, "{}", ov.name);
            assert_eq!(band_north(ov.south), Some(ov.north), "{}", ov.name);
            for lng in ov.longitudes {
                assert!(*lng > OVERRIDE_WEST && *lng < OVERRIDE_EAST, "{}", ov.name);
            }
        }
        assert_eq!(override_for(56.0).map(|o| o.name), Some("norway"));
        assert_eq!(override_for(72.0).map(|o| o.name), Some("svalbard"));
        assert!(override_for(48.0).is_none());
    }

    #[test]
    fn test_band_meridians() {
        let regular = band_meridians(48.0);
        assert_eq!(regular.len(), 61);
        assert!(regular.contains(&6.0));

        let norway = band_meridians(56.0);
        assert!(norway.contains(&3.0));
        assert!(!norway.contains(&6.0));
        assert!(norway.contains(&0.0));
        assert!(norway.contains(&42.0));

        let svalbard = band_meridians(72.0);
        let inside: Vec<f64> = svalbard
            .iter()
            .cloned()
            .filter(|lng| *lng >= 0.0 && *lng <= 42.0)
            .collect();
        assert_eq!(inside, vec![0.0, 9.0, 21.0, 33.0, 42.0]);
    }

    #[test]
    fn test_meridian_top() {
        assert_eq!(meridian_top(-6.0), 84.0);
        assert_eq!(meridian_top(0.0), 84.0);
        assert_eq!(meridian_top(12.0), 56.0);
        assert_eq!(meridian_top(42.0), 84.0);
    }

    #[test]
    fn test_zone_number() {
        assert_eq!(zone_number(0.0, -180.0), 1);
        assert_eq!(zone_number(0.0, 0.0), 31);
        assert_eq!(zone_number(0.0, 179.9), 60);
        assert_eq!(zone_number(0.0, 180.0), 60);
        assert_eq!(zone_number(46.95, 7.45), 32);
        // Norway
        assert_eq!(zone_number(60.0, 5.0), 32);
        assert_eq!(zone_number(60.0, 2.0), 31);
        // Svalbard
        assert_eq!(zone_number(78.0, 8.0), 31);
        assert_eq!(zone_number(78.0, 15.0), 33);
        assert_eq!(zone_number(78.0, 25.0), 35);
        assert_eq!(zone_number(78.0, 40.0), 37);
    }

    #[test]
    fn test_unwrap_lng() {
        assert_eq!(normalize_lng(-180.5), 179.5);
        assert_eq!(unwrap_lng(-180.5, -179.5), -180.5);
        assert_eq!(unwrap_lng(179.5, -179.5), -180.5);
        assert_eq!(unwrap_lng(-179.5, 180.0), 180.5);
        assert_eq!(unwrap_lng(7.0, 8.0), 7.0);
        assert!(is_zone_edge(-180.0));
        assert!(is_zone_edge(180.0));
    }
}
