//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! MGRS grid zones and 100 km / 10 km / 1 km / 100 m squares

use crate::grid::clip::{clip_to_zone, line_segment_intersect};
use crate::grid::label::{label_bounds, label_buffer};
use crate::grid::spacing::mgrs_accuracy;
use crate::grid::utm::{zone_lattice, zone_partition, Lattice};
use crate::grid::{Axis, GridLine, GridOutput, Label, LineClass, Spacing, ZOOMED_OUT_SPAN};
use geo_grid::mgrs::grid_zone_designator;
use geo_grid::zones::{band_edges, band_meridians, band_north, meridian_top, zone_breaks, ZONE_OVERRIDES};
use geo_grid::{ll_to_mgrs, ll_to_utm, LatLng, LatLngBounds, Viewport, UTM_MAX_LAT, UTM_MIN_LAT};

/// No MGRS grid below this zoom level
pub const MIN_ZOOM: u8 = 3;

/// Padding of the viewport for the grid zone lines
const ZONE_PADDING: f64 = 0.5;

/// Padding of the viewport for the square lattice
const LATTICE_PADDING: f64 = 0.1;

/// Latitude band edges and zone meridians, including the Norway and
/// Svalbard irregularities, within `bounds`.
pub fn zone_grid(bounds: &LatLngBounds) -> GridOutput {
    let mut output = GridOutput::default();
    let clamped = match bounds.clamp_lat(UTM_MIN_LAT, UTM_MAX_LAT) {
        Some(clamped) => clamped,
        None => return output,
    };
    // unclamped north to reach the northern limit of band X
    for lat in band_edges(clamped.south, bounds.north) {
        if lat < clamped.south {
            continue;
        }
        output.lines.push(GridLine::segment(
            LatLng::new(lat, bounds.west),
            LatLng::new(lat, bounds.east),
            LineClass::ZoneBoundary,
        ));
    }
    for lng in zone_breaks(bounds.west, bounds.east) {
        let north = clamped.north.min(meridian_top(lng));
        if north > clamped.south {
            output.lines.push(GridLine::segment(
                LatLng::new(clamped.south, lng),
                LatLng::new(north, lng),
                LineClass::ZoneBoundary,
            ));
        }
    }
    for ov in ZONE_OVERRIDES.iter() {
        let south = clamped.south.max(ov.south);
        let north = clamped.north.min(ov.north);
        if south >= north {
            continue;
        }
        for lng in ov.longitudes.iter().filter(|lng| **lng > bounds.west && **lng < bounds.east) {
            output.lines.push(GridLine::segment(
                LatLng::new(south, *lng),
                LatLng::new(north, *lng),
                LineClass::ZoneBoundary,
            ));
        }
    }
    output
}

/// One grid zone designator per zone cell with its center in `bounds`.
pub fn zone_labels(bounds: &LatLngBounds) -> Vec<Label> {
    let mut labels = Vec::new();
    let clamped = match bounds.clamp_lat(UTM_MIN_LAT, UTM_MAX_LAT) {
        Some(clamped) => clamped,
        None => return labels,
    };
    for south in band_edges(clamped.south, clamped.north) {
        let north = match band_north(south) {
            Some(north) => north,
            None => continue,
        };
        let lat = (south + north) / 2.0;
        for cell in band_meridians(south).windows(2) {
            let anchor = LatLng::new(lat, (cell[0] + cell[1]) / 2.0);
            if !bounds.contains(&anchor) {
                continue;
            }
            if let Ok(pt) = ll_to_utm(anchor.lat, anchor.lng) {
                labels.push(Label::new(anchor, grid_zone_designator(&pt), Axis::Cell));
            }
        }
    }
    labels
}

/// Label anchor of the square south-west cornered at lattice index `(row, col)`:
/// the intersection of the guide lines half a square north and east.
fn cell_anchor(lattice: &Lattice, row: usize, col: usize, spacing: f64) -> LatLng {
    let e = lattice.eastings[col];
    let n = lattice.northings[row];
    let half = spacing / 2.0;
    let horz = (lattice.to_ll(e, n + half), lattice.to_ll(e + spacing, n + half));
    let vert = (lattice.to_ll(e + half, n), lattice.to_ll(e + half, n + spacing));
    match line_segment_intersect((&horz.0, &horz.1), (&vert.0, &vert.1)) {
        Some(pt) => pt,
        None => lattice.to_ll(e + half, n + half),
    }
}

fn square_labels(
    lattice: &Lattice,
    left: f64,
    right: f64,
    spacing: f64,
    accuracy: u8,
    labels: &LatLngBounds,
) -> Vec<Label> {
    let buffer = label_buffer(spacing);
    let mut placed = Vec::new();
    for row in 0..lattice.northings.len().saturating_sub(1) {
        for col in 0..lattice.eastings.len().saturating_sub(1) {
            let anchor = cell_anchor(lattice, row, col, spacing);
            if anchor.lng <= left + buffer || anchor.lng >= right - buffer {
                continue;
            }
            if !labels.contains(&anchor) {
                continue;
            }
            if let Ok(text) = ll_to_mgrs(anchor.lat, anchor.lng, accuracy) {
                placed.push(Label::new(anchor, text, Axis::Cell));
            }
        }
    }
    placed
}

/// MGRS grid of the viewport.
///
/// Zoomed out, grid zones are drawn and labeled with their designator.
/// Zoomed in, the squares at `spacing` are drawn per zone with one
/// reference label per square.
pub fn mgrs_grid(viewport: &Viewport, spacing: Option<&Spacing>) -> GridOutput {
    if viewport.zoom < MIN_ZOOM {
        return GridOutput::default();
    }
    let zone_bounds = viewport.bounds().pad(ZONE_PADDING);
    let mut output = zone_grid(&zone_bounds);
    if viewport.lng_span() > ZOOMED_OUT_SPAN {
        output.labels = zone_labels(&zone_bounds);
        return output;
    }
    let (spacing, accuracy) = match (spacing, mgrs_accuracy(viewport.zoom)) {
        (Some(spacing), Some(accuracy)) => (spacing.value, accuracy),
        _ => return output,
    };
    let grid_bounds = match viewport
        .bounds()
        .pad(LATTICE_PADDING)
        .clamp_lat(UTM_MIN_LAT, UTM_MAX_LAT)
    {
        Some(bounds) => bounds,
        None => return output,
    };
    let labels = label_bounds(viewport);
    for zone in zone_partition(&grid_bounds).windows(2) {
        let (left, right) = (zone[0], zone[1]);
        let lattice = match zone_lattice(&grid_bounds, left, right, spacing) {
            Some(lattice) => lattice,
            None => continue,
        };
        for line in lattice.rows().into_iter().chain(lattice.columns()) {
            if let Some(line) = clip_to_zone(line, left, right) {
                output.lines.push(line);
            }
        }
        output
            .labels
            .extend(square_labels(&lattice, left, right, spacing, accuracy, &labels));
    }
    output
}
