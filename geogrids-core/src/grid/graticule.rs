//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Latitude/longitude graticules

use crate::grid::label::{format_dd, format_dms, label_bounds};
use crate::grid::{Axis, GridLine, GridOutput, GridSystem, Label, LineClass, Spacing};
use geo_grid::{LatLng, Viewport};

/// Upper limit of lines per axis
const MAX_GRATICULE_LINES: i64 = 10_000;

/// Multiples of `spacing` from the one below `from` up to, excluding, `to`.
/// Values are computed as `k * spacing` so that zero is exact.
fn steps(from: f64, to: f64, spacing: f64) -> Vec<f64> {
    let first = (from / spacing).floor() as i64;
    let last = (to / spacing).ceil() as i64;
    if last - first > MAX_GRATICULE_LINES {
        warn!(
            "Graticule with {} lines per axis skipped",
            last - first
        );
        return Vec::new();
    }
    (first..last)
        .map(|k| k as f64 * spacing)
        .filter(|v| *v < to)
        .collect()
}

fn format(system: GridSystem, coord: f64, axis: Axis, zoom: u8) -> String {
    match system {
        GridSystem::DegreesMinutesSeconds => format_dms(coord, axis, zoom),
        _ => format_dd(coord, zoom),
    }
}

/// Decimal degree or DMS graticule of the viewport.
pub fn graticule(viewport: &Viewport, system: GridSystem, spacing: Option<&Spacing>) -> GridOutput {
    let mut output = GridOutput::default();
    let spacing = match spacing {
        Some(spacing) if spacing.value > 0.0 => spacing.value,
        _ => return output,
    };
    let bounds = viewport.bounds();
    let labels = label_bounds(viewport);

    for lat in steps(bounds.south, bounds.north, spacing) {
        if lat.abs() > 90.0 {
            continue;
        }
        output.lines.push(GridLine::segment(
            LatLng::new(lat, bounds.west),
            LatLng::new(lat, bounds.east),
            LineClass::Normal,
        ));
        output.labels.push(Label::new(
            LatLng::new(lat, labels.west),
            format(system, lat, Axis::Lat, viewport.zoom),
            Axis::Lat,
        ));
    }
    for lng in steps(bounds.west, bounds.east, spacing) {
        output.lines.push(GridLine::segment(
            LatLng::new(bounds.south, lng),
            LatLng::new(bounds.north, lng),
            LineClass::Normal,
        ));
        output.labels.push(Label::new(
            LatLng::new(labels.north, lng),
            format(system, lng, Axis::Lng, viewport.zoom),
            Axis::Lng,
        ));
    }
    output
}
