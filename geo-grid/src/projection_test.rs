//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::GridError;
use crate::extent::{LatLngBounds, Viewport};
use crate::projection::*;
use proptest::prelude::*;

#[test]
fn test_spherical_mercator() {
    let (x, y) = ll_to_spherical_mercator(0.0, 0.0);
    assert_eq!(x, 0.0);
    assert!(y.abs() < 1e-6);

    let (x, _) = ll_to_spherical_mercator(0.0, 180.0);
    assert!((x - EARTH_RADIUS * std::f64::consts::PI).abs() < 1e-6);

    let (x, y) = ll_to_spherical_mercator(46.95, 7.45);
    let ll = spherical_mercator_to_ll(x, y);
    assert!((ll.lat - 46.95).abs() < 1e-9);
    assert!((ll.lng - 7.45).abs() < 1e-9);

    // clamped to the Mercator world square
    let (_, y) = ll_to_spherical_mercator(90.0, 0.0);
    assert!(y.is_finite());
}

#[test]
fn test_bounds_to_sm() {
    let extent = bounds_ll_to_sm(&LatLngBounds::new(-10.0, -10.0, 10.0, 10.0));
    assert!((extent.minx + extent.maxx).abs() < 1e-6);
    assert!((extent.miny + extent.maxy).abs() < 1e-6);
    assert!(extent.maxy > extent.maxx);
}

#[test]
fn test_meters_per_pixel() {
    let at_equator = meters_per_pixel(0.0, 0);
    assert!((at_equator - EARTH_RADIUS / 256.0).abs() < 1e-9);
    assert!((meters_per_pixel(0.0, 1) - at_equator / 2.0).abs() < 1e-9);
    assert!((meters_per_pixel(60.0, 0) - at_equator / 2.0).abs() < 1e-6);
    assert_eq!(meters_per_pixel(-60.0, 5), meters_per_pixel(60.0, 5));
}

#[test]
fn test_zone_letter() {
    assert_eq!(zone_letter(-80.0), Some('C'));
    assert_eq!(zone_letter(-0.1), Some('M'));
    assert_eq!(zone_letter(0.0), Some('N'));
    assert_eq!(zone_letter(46.95), Some('T'));
    assert_eq!(zone_letter(71.9), Some('W'));
    assert_eq!(zone_letter(72.0), Some('X'));
    assert_eq!(zone_letter(84.0), Some('X'));
    assert_eq!(zone_letter(84.1), None);
    assert_eq!(zone_letter(-80.1), None);
}

#[test]
fn test_ll_to_utm() {
    // central meridian of zone 31 on the equator
    let pt = ll_to_utm(0.0, 3.0).unwrap();
    assert_eq!(pt.zone_number, 31);
    assert_eq!(pt.zone_letter, 'N');
    assert!((pt.easting - 500000.0).abs() < 1e-6);
    assert!(pt.northing.abs() < 1e-6);

    // Washington Monument: 18S 323483 4306479
    let pt = ll_to_utm(38.8895, -77.0352).unwrap();
    assert_eq!(pt.zone_number, 18);
    assert_eq!(pt.zone_letter, 'S');
    assert!((pt.easting - 323483.0).abs() < 100.0);
    assert!((pt.northing - 4306479.0).abs() < 100.0);

    let pt = ll_to_utm(-33.9, 18.4).unwrap();
    assert_eq!(pt.zone_number, 34);
    assert_eq!(pt.zone_letter, 'H');
    assert_eq!(pt.hemisphere(), Hemisphere::South);
    assert!(pt.northing > 6000000.0 && pt.northing < 10000000.0);
}

#[test]
fn test_out_of_range() {
    assert!(matches!(
        ll_to_utm(84.5, 0.0),
        Err(GridError::OutOfRange { .. })
    ));
    assert!(matches!(
        ll_to_utm(-80.5, 0.0),
        Err(GridError::OutOfRange { .. })
    ));
    assert!(ll_to_utm(f64::NAN, 0.0).is_err());
    assert!(ll_to_utm(84.0, 0.0).is_ok());
    assert!(ll_to_utm(-80.0, 0.0).is_ok());
}

#[test]
fn test_utm_in_zone() {
    // a point west of zone 32 projected into zone 32
    let natural = ll_to_utm(47.0, 5.9).unwrap();
    assert_eq!(natural.zone_number, 31);
    let forced = ll_to_utm_in_zone(47.0, 5.9, 32, 'T').unwrap();
    assert!(forced.easting < natural.easting);
    let ll = utm_to_ll(&forced);
    assert!((ll.lat - 47.0).abs() < 1e-6);
    assert!((ll.lng - 5.9).abs() < 1e-6);

    // a southern point in a northern lattice
    let pt = ll_to_utm_in_zone(-0.5, 3.0, 31, 'N').unwrap();
    assert!(pt.northing < 0.0);
    let ll = utm_to_ll(&pt);
    assert!((ll.lat + 0.5).abs() < 1e-6);

    assert_eq!(
        ll_to_utm_in_zone(47.0, 5.9, 61, 'T'),
        Err(GridError::Configuration("invalid UTM zone 61".to_string()))
    );
}

#[test]
fn test_utm_to_ll_near() {
    // zone 1 lattice point west of the antimeridian
    let pt = ll_to_utm_in_zone(10.0, -180.2, 1, 'P').unwrap();
    assert!((utm_to_ll(&pt).lng - 179.8).abs() < 1e-6);
    let ll = utm_to_ll_near(&pt, -177.0);
    assert!((ll.lng + 180.2).abs() < 1e-6);
    assert!((ll.lat - 10.0).abs() < 1e-6);

    let pt = ll_to_utm(46.95, 7.45).unwrap();
    assert!((utm_to_ll_near(&pt, 9.0).lng - utm_to_ll(&pt).lng).abs() < 1e-9);
}

#[test]
fn test_viewport_from_center() {
    let vp = Viewport::from_center(crate::LatLng::new(0.0, 0.0), 0, 256, 256);
    assert!((vp.west + 180.0).abs() < 1e-9);
    assert!((vp.east - 180.0).abs() < 1e-9);
    assert!((vp.north - 85.0511287798).abs() < 1e-6);
    assert!((vp.south + 85.0511287798).abs() < 1e-6);

    let vp = Viewport::from_center(crate::LatLng::new(46.95, 7.45), 12, 1024, 768);
    assert!(vp.west < 7.45 && vp.east > 7.45);
    assert!(vp.south < 46.95 && vp.north > 46.95);
    // 1024 px at zoom 12 are 1024 / (256 * 4096) of 360 degrees
    assert!((vp.lng_span() - 0.3515625).abs() < 1e-9);
}

proptest! {
    #[test]
    fn test_utm_roundtrip_property(
        lat in -80.0..=84.0_f64,
        lon in -179.999..179.999_f64
    ) {
        let pt = ll_to_utm(lat, lon)?;
        let ll = utm_to_ll(&pt);
        prop_assert!(
            (ll.lat - lat).abs() < 1e-6,
            "Latitude roundtrip failed: {} -> {} ({:?})",
            lat, ll.lat, pt
        );
        prop_assert!(
            (ll.lng - lon).abs() < 1e-6,
            "Longitude roundtrip failed: {} -> {} ({:?})",
            lon, ll.lng, pt
        );
    }

    #[test]
    fn test_spherical_mercator_roundtrip_property(
        lat in -85.0..85.0_f64,
        lon in -180.0..180.0_f64
    ) {
        let (x, y) = ll_to_spherical_mercator(lat, lon);
        let ll = spherical_mercator_to_ll(x, y);
        prop_assert!((ll.lat - lat).abs() < 1e-9);
        prop_assert!((ll.lng - lon).abs() < 1e-9);
    }
}
