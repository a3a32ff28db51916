//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid::label::*;
use crate::grid::Axis;
use geo_grid::{Hemisphere, LatLng, Viewport};

#[test]
fn test_label_bounds() {
    let viewport = Viewport::new(0.0, 0.0, 10.0, 20.0, 5);
    let bounds = label_bounds(&viewport);
    assert!((bounds.south - 0.25).abs() < 1e-12);
    assert!((bounds.north - 9.75).abs() < 1e-12);
    assert!((bounds.west - 0.5).abs() < 1e-12);
    assert!((bounds.east - 19.5).abs() < 1e-12);
}

#[test]
fn test_format_dd() {
    assert_eq!(format_dd(20.0, 2), "20");
    assert_eq!(format_dd(-40.0, 8), "-40");
    assert_eq!(format_dd(47.5, 9), "47.5");
    assert_eq!(format_dd(47.25, 10), "47.25");
    assert_eq!(format_dd(47.1, 11), "47.1");
    assert_eq!(format_dd(8.05, 13), "8.05");
}

#[test]
fn test_format_dms() {
    assert_eq!(format_dms(20.0, Axis::Lat, 3), "20° N");
    assert_eq!(format_dms(-20.0, Axis::Lat, 3), "20° S");
    assert_eq!(format_dms(-120.0, Axis::Lng, 3), "120° W");
    assert_eq!(format_dms(0.0, Axis::Lng, 3), "0°");
    assert_eq!(format_dms(47.5, Axis::Lat, 9), "47° 30' N");
    assert_eq!(format_dms(8.0 + 25.0 / 60.0, Axis::Lng, 11), "8° 25' E");
    assert_eq!(format_dms(8.0 + 30.0 / 3600.0, Axis::Lng, 15), "8° 0' 30\" E");
}

#[test]
fn test_format_utm() {
    assert_eq!(format_utm(32, Hemisphere::North, 5_200_000.0), "32N 5200000");
    assert_eq!(format_utm(18, Hemisphere::South, 380_000.0), "18S 380000");
}

#[test]
fn test_label_buffer() {
    assert!((label_buffer(111_111.0) - 0.25).abs() < 1e-12);
}

#[test]
fn test_crossings() {
    let line = vec![LatLng::new(0.0, 0.0), LatLng::new(10.0, 2.0), LatLng::new(20.0, 2.0)];
    assert_eq!(crossing_parallel(&line, 5.0), Some(LatLng::new(5.0, 1.0)));
    assert_eq!(crossing_parallel(&line, 25.0), None);
    assert_eq!(crossing_meridian(&line, 1.0), Some(LatLng::new(5.0, 1.0)));
    assert_eq!(crossing_meridian(&line, 3.0), None);
}
