//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! UTM zones and projected lattices

use crate::grid::clip::clip_to_zone;
use crate::grid::label::{crossing_meridian, crossing_parallel, format_utm, label_bounds, label_buffer};
use crate::grid::{Axis, GridLine, GridOutput, Label, LineClass, Spacing, ZOOMED_OUT_SPAN};
use geo_grid::zones::{snap_to, zone_breaks};
use geo_grid::{
    central_meridian, ll_to_utm, ll_to_utm_in_zone, utm_to_ll_near, GridError, Hemisphere, LatLng,
    LatLngBounds, ProjectedPoint, Viewport, UTM_MAX_LAT, UTM_MIN_LAT,
};

/// Maximal number of lattice points per zone
pub const MAX_LATTICE_POINTS: usize = 250_000;

/// Keeps lattice corners inside their zone
const EDGE_OFFSET: f64 = 0.000001;

/// Projected points at regular easting/northing steps within one UTM zone.
#[derive(Clone, Debug)]
pub struct Lattice {
    pub zone_number: u8,
    pub zone_letter: char,
    /// Longitude the lattice points are kept continuous with
    pub reference_lng: f64,
    pub eastings: Vec<f64>,
    pub northings: Vec<f64>,
    /// Geodetic points, one row per northing
    pub points: Vec<Vec<LatLng>>,
}

impl Lattice {
    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::of_letter(self.zone_letter)
    }
    /// Lines of constant northing
    pub fn rows(&self) -> Vec<GridLine> {
        self.points
            .iter()
            .map(|row| GridLine::new(row.clone(), LineClass::Normal))
            .collect()
    }
    /// Lines of constant easting
    pub fn columns(&self) -> Vec<GridLine> {
        (0..self.eastings.len())
            .map(|col| {
                let points = self.points.iter().map(|row| row[col]).collect();
                GridLine::new(points, LineClass::Normal)
            })
            .collect()
    }
    /// Geodetic position of a projected coordinate in the lattice zone
    pub fn to_ll(&self, easting: f64, northing: f64) -> LatLng {
        utm_to_ll_near(
            &ProjectedPoint {
                easting,
                northing,
                zone_number: self.zone_number,
                zone_letter: self.zone_letter,
            },
            self.reference_lng,
        )
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values.iter().fold(
        (std::f64::INFINITY, std::f64::NEG_INFINITY),
        |(min, max), v| (min.min(*v), max.max(*v)),
    )
}

/// Lattice covering `bounds` between the meridians `left` and `right`.
///
/// Eastings and northings are projected in the zone of the area's center,
/// snapped to `spacing` and extended by one step. Fails for an empty area
/// or when the lattice would exceed `MAX_LATTICE_POINTS`.
pub fn projected_lattice(
    bounds: &LatLngBounds,
    left: f64,
    right: f64,
    spacing: f64,
) -> Result<Lattice, GridError> {
    if !(spacing > 0.0) {
        return Err(GridError::Degenerate(format!("grid spacing {}", spacing)));
    }
    let bounds = bounds
        .clamp_lat(UTM_MIN_LAT, UTM_MAX_LAT)
        .ok_or(GridError::OutOfRange {
            lat: bounds.south,
            min: UTM_MIN_LAT,
            max: UTM_MAX_LAT,
        })?;
    let west = left + EDGE_OFFSET;
    let east = right - EDGE_OFFSET;
    if west >= east {
        return Err(GridError::Degenerate(format!("empty zone {}..{}", left, right)));
    }
    let center = ll_to_utm((bounds.south + bounds.north) / 2.0, (west + east) / 2.0)?;
    let zone = center.zone_number;
    let letter = center.zone_letter;

    // Extremes of a zone area are at its corners, on the equator or on the central meridian
    let mut lats = vec![bounds.south, bounds.north];
    if bounds.south < 0.0 && bounds.north > 0.0 {
        lats.push(0.0);
    }
    let mut lngs = vec![west, east];
    let cm = central_meridian(zone);
    if cm > west && cm < east {
        lngs.push(cm);
    }
    let mut eastings = Vec::new();
    let mut northings = Vec::new();
    for lat in &lats {
        for lng in &lngs {
            let pt = ll_to_utm_in_zone(*lat, *lng, zone, letter)?;
            eastings.push(pt.easting);
            northings.push(pt.northing);
        }
    }
    let (min_e, max_e) = min_max(&eastings);
    let (min_n, max_n) = min_max(&northings);

    let e0 = snap_to(min_e, spacing);
    let n0 = snap_to(min_n, spacing);
    let cols = ((snap_to(max_e, spacing) + spacing - e0) / spacing).round() as usize + 1;
    let rows = ((snap_to(max_n, spacing) + spacing - n0) / spacing).round() as usize + 1;
    if cols.saturating_mul(rows) > MAX_LATTICE_POINTS {
        return Err(GridError::Configuration(format!(
            "lattice of zone {}{} with {}x{} points exceeds {} points",
            zone, letter, cols, rows, MAX_LATTICE_POINTS
        )));
    }

    let mut lattice = Lattice {
        zone_number: zone,
        zone_letter: letter,
        reference_lng: (west + east) / 2.0,
        eastings: (0..cols).map(|i| e0 + i as f64 * spacing).collect(),
        northings: (0..rows).map(|i| n0 + i as f64 * spacing).collect(),
        points: Vec::with_capacity(rows),
    };
    lattice.points = lattice
        .northings
        .iter()
        .map(|n| lattice.eastings.iter().map(|e| lattice.to_ll(*e, *n)).collect())
        .collect();
    Ok(lattice)
}

/// Lattice of one zone, logging why it is skipped.
pub(crate) fn zone_lattice(bounds: &LatLngBounds, left: f64, right: f64, spacing: f64) -> Option<Lattice> {
    match projected_lattice(bounds, left, right, spacing) {
        Ok(lattice) => Some(lattice),
        Err(e @ GridError::Configuration(_)) => {
            warn!("Lattice skipped: {}", e);
            None
        }
        Err(e) => {
            debug!("Lattice skipped: {}", e);
            None
        }
    }
}

/// Longitudes partitioning `bounds` into zones, including its borders.
pub(crate) fn zone_partition(bounds: &LatLngBounds) -> Vec<f64> {
    let mut edges = vec![bounds.west];
    edges.extend(zone_breaks(bounds.west, bounds.east));
    edges.push(bounds.east);
    edges
}

/// Zone boundary lines with "Zone N" labels.
fn zone_lines(bounds: &LatLngBounds, labels: &LatLngBounds) -> GridOutput {
    let mut output = GridOutput::default();
    for lng in zone_breaks(bounds.west, bounds.east) {
        output.lines.push(GridLine::segment(
            LatLng::new(bounds.north, lng),
            LatLng::new(bounds.south, lng),
            LineClass::ZoneBoundary,
        ));
        let lat = labels.north.min(UTM_MAX_LAT).max(UTM_MIN_LAT);
        // label the zone east of the boundary
        if let Ok(pt) = ll_to_utm(lat, lng + 0.1) {
            output.labels.push(Label::new(
                LatLng::new(labels.north, lng),
                format!("Zone {}", pt.zone_number),
                Axis::Cell,
            ));
        }
    }
    output
}

/// UTM grid of the viewport.
///
/// Zoomed out, only zone boundaries are drawn. Otherwise each zone gets a
/// lattice at `spacing` with easting labels along the top and northing
/// labels along the left side of the view.
pub fn utm_grid(viewport: &Viewport, spacing: Option<&Spacing>) -> GridOutput {
    let bounds = match viewport.bounds().clamp_lat(UTM_MIN_LAT, UTM_MAX_LAT) {
        Some(bounds) => bounds,
        None => {
            debug!("Viewport outside of the UTM band");
            return GridOutput::default();
        }
    };
    let labels = label_bounds(viewport);
    let mut output = zone_lines(&bounds, &labels);
    if viewport.lng_span() > ZOOMED_OUT_SPAN {
        return output;
    }
    output.labels.clear();
    let spacing = match spacing {
        Some(spacing) => spacing.value,
        None => return output,
    };
    let buffer = label_buffer(spacing);

    let edges = zone_partition(&bounds);
    for zone in edges.windows(2) {
        let (left, right) = (zone[0], zone[1]);
        let lattice = match zone_lattice(&bounds, left, right, spacing) {
            Some(lattice) => lattice,
            None => continue,
        };
        let hemisphere = lattice.hemisphere();

        for (row, northing) in lattice.rows().into_iter().zip(lattice.northings.iter()) {
            if left <= labels.west && labels.west < right {
                if let Some(anchor) = crossing_meridian(&row.points, labels.west) {
                    if anchor.lat >= labels.south && anchor.lat <= labels.north {
                        output.labels.push(Label::new(
                            anchor,
                            format_utm(lattice.zone_number, hemisphere, *northing),
                            Axis::Lat,
                        ));
                    }
                }
            }
            if let Some(line) = clip_to_zone(row, left, right) {
                output.lines.push(line);
            }
        }
        for (col, easting) in lattice.columns().into_iter().zip(lattice.eastings.iter()) {
            if let Some(anchor) = crossing_parallel(&col.points, labels.north) {
                if anchor.lng > left + buffer
                    && anchor.lng < right - buffer
                    && anchor.lng >= labels.west
                    && anchor.lng <= labels.east
                {
                    output.labels.push(Label::new(
                        anchor,
                        format_utm(lattice.zone_number, hemisphere, *easting),
                        Axis::Lng,
                    ));
                }
            }
            if let Some(line) = clip_to_zone(col, left, right) {
                output.lines.push(line);
            }
        }
    }
    output
}
