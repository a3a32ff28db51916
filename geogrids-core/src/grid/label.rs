//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Label placement and formatting

use crate::grid::clip::meridian_intersect;
use crate::grid::Axis;
use geo_grid::{Hemisphere, LatLng, LatLngBounds, Viewport};

/// Inset of the label bounds relative to the viewport
pub const LABEL_PADDING: f64 = 0.025;

/// Meters per degree of latitude, rounded
const METERS_PER_DEGREE: f64 = 111_111.0;

/// Viewport inset where axis labels are placed.
pub fn label_bounds(viewport: &Viewport) -> LatLngBounds {
    viewport.bounds().pad(-LABEL_PADDING)
}

/// Distance in degrees a cell label keeps from zone edges.
pub fn label_buffer(spacing: f64) -> f64 {
    spacing / METERS_PER_DEGREE / 4.0
}

/// Decimal degrees with a zoom dependent number of decimals.
pub fn format_dd(coord: f64, zoom: u8) -> String {
    match zoom {
        0..=8 => format!("{:.0}", coord),
        9 | 11 => format!("{:.1}", coord),
        _ => format!("{:.2}", coord),
    }
}

/// Degrees, minutes and seconds with hemisphere suffix.
/// Minutes are shown above zoom 8, seconds above zoom 14.
pub fn format_dms(coord: f64, axis: Axis, zoom: u8) -> String {
    let total = (coord.abs() * 3600.0).round() as u64;
    let degrees = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut text = format!("{}°", degrees);
    if zoom > 8 {
        text.push_str(&format!(" {}'", minutes));
    }
    if zoom > 14 {
        text.push_str(&format!(" {}\"", seconds));
    }
    let suffix = match axis {
        _ if total == 0 => None,
        Axis::Lat if coord > 0.0 => Some('N'),
        Axis::Lat => Some('S'),
        Axis::Lng if coord > 0.0 => Some('E'),
        Axis::Lng => Some('W'),
        Axis::Cell => None,
    };
    if let Some(suffix) = suffix {
        text.push(' ');
        text.push(suffix);
    }
    text
}

/// Projected coordinate prefixed with its UTM zone, e.g. "32N 5200000".
pub fn format_utm(zone: u8, hemisphere: Hemisphere, value: f64) -> String {
    format!("{}{} {}", zone, hemisphere.suffix(), value.round() as i64)
}

/// First point where the polyline crosses the meridian `lng`.
pub fn crossing_meridian(points: &[LatLng], lng: f64) -> Option<LatLng> {
    points
        .windows(2)
        .filter_map(|seg| meridian_intersect(&seg[0], &seg[1], lng))
        .next()
}

/// First point where the polyline crosses the parallel `lat`.
pub fn crossing_parallel(points: &[LatLng], lat: f64) -> Option<LatLng> {
    points.windows(2).find_map(|seg| {
        let (a, b) = (&seg[0], &seg[1]);
        if a.lat == b.lat || lat < a.lat.min(b.lat) || lat > a.lat.max(b.lat) {
            return None;
        }
        let t = (lat - a.lat) / (b.lat - a.lat);
        Some(LatLng::new(lat, a.lng + t * (b.lng - a.lng)))
    })
}
