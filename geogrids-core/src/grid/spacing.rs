//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid spacing per zoom level

use crate::grid::GridSystem;

/// Last zoom level with its own table entry
pub const MAX_TABLE_ZOOM: u8 = 18;

/// Feet per meter used by the imperial distance table
const FEET_PER_METER: f64 = 3.28;
const FEET_PER_MILE: f64 = 5280.0;

/// Latitude above which distance grids use the next zoom level
const HIGH_LATITUDE: f64 = 55.0;

/// Decimal degree spacing in degrees
static DD_SPACING: [f64; 19] = [
    20.0, 20.0, 20.0, 10.0, 5.0, 5.0, 2.0, 1.0, 1.0, 0.5, 0.25, 0.1, 0.05, 0.05, 0.01, 0.01, 0.01,
    0.01, 0.01,
];

/// Degrees-minutes-seconds spacing in degrees
static DMS_SPACING: [f64; 19] = [
    20.0,
    20.0,
    20.0,
    10.0,
    5.0,
    5.0,
    2.0,
    1.0,
    1.0,
    0.5,
    0.25,
    5.0 / 60.0,
    3.0 / 60.0,
    2.0 / 60.0,
    1.0 / 60.0,
    30.0 / 3600.0,
    30.0 / 3600.0,
    15.0 / 3600.0,
    15.0 / 3600.0,
];

/// UTM spacing in meters
static UTM_SPACING: [f64; 19] = [
    1_000_000.0,
    1_000_000.0,
    1_000_000.0,
    1_000_000.0,
    1_000_000.0,
    1_000_000.0,
    1_000_000.0,
    100_000.0,
    100_000.0,
    100_000.0,
    10_000.0,
    10_000.0,
    10_000.0,
    10_000.0,
    1_000.0,
    1_000.0,
    1_000.0,
    1_000.0,
    100.0,
];

/// Metric distance spacing in meters
static METRIC_SPACING: [f64; 19] = [
    25_000_000.0,
    10_000_000.0,
    5_000_000.0,
    2_500_000.0,
    1_000_000.0,
    500_000.0,
    250_000.0,
    100_000.0,
    50_000.0,
    25_000.0,
    10_000.0,
    5_000.0,
    2_500.0,
    1_000.0,
    500.0,
    250.0,
    100.0,
    50.0,
    25.0,
];

#[derive(Clone, Copy)]
enum ImperialUnit {
    Mile,
    Foot,
}

/// Imperial distance spacing in miles or feet
static IMPERIAL_SPACING: [(f64, ImperialUnit); 19] = [
    (10000.0, ImperialUnit::Mile),
    (5000.0, ImperialUnit::Mile),
    (2500.0, ImperialUnit::Mile),
    (1000.0, ImperialUnit::Mile),
    (500.0, ImperialUnit::Mile),
    (250.0, ImperialUnit::Mile),
    (100.0, ImperialUnit::Mile),
    (50.0, ImperialUnit::Mile),
    (25.0, ImperialUnit::Mile),
    (10.0, ImperialUnit::Mile),
    (5.0, ImperialUnit::Mile),
    (2.5, ImperialUnit::Mile),
    (1.0, ImperialUnit::Mile),
    (2500.0, ImperialUnit::Foot),
    (1000.0, ImperialUnit::Foot),
    (500.0, ImperialUnit::Foot),
    (250.0, ImperialUnit::Foot),
    (100.0, ImperialUnit::Foot),
    (50.0, ImperialUnit::Foot),
];

/// Grid spacing in the unit of the grid system (degrees or meters)
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct Spacing {
    pub value: f64,
    /// Human readable spacing, e.g. "10 km"
    pub label: String,
}

impl Spacing {
    fn new(value: f64, label: String) -> Spacing {
        Spacing { value, label }
    }
}

fn table_index(zoom: u8) -> usize {
    zoom.min(MAX_TABLE_ZOOM) as usize
}

/// Table index for distance grids. High latitudes use the next zoom level.
pub fn distance_zoom(zoom: u8, center_lat: f64) -> u8 {
    let zoom = if center_lat.abs() > HIGH_LATITUDE {
        zoom.saturating_add(1)
    } else {
        zoom
    };
    zoom.min(MAX_TABLE_ZOOM)
}

/// MGRS lattice spacing in meters. `None` above zoom 20: zone lines only.
pub fn mgrs_spacing(zoom: u8) -> Option<f64> {
    match zoom {
        0..=9 => Some(100_000.0),
        10..=14 => Some(10_000.0),
        15..=17 => Some(1_000.0),
        18..=20 => Some(100.0),
        _ => None,
    }
}

/// Number of MGRS digit pairs used in cell labels.
pub fn mgrs_accuracy(zoom: u8) -> Option<u8> {
    match zoom {
        0..=9 => Some(0),
        10..=14 => Some(1),
        15..=17 => Some(2),
        18..=20 => Some(3),
        _ => None,
    }
}

fn degree_label(degrees: f64) -> String {
    format!("{}°", degrees)
}

fn dms_label(degrees: f64) -> String {
    let seconds = (degrees * 3600.0).round() as u64;
    if seconds % 3600 == 0 {
        format!("{}°", seconds / 3600)
    } else if seconds % 60 == 0 {
        format!("{}'", seconds / 60)
    } else {
        format!("{}\"", seconds)
    }
}

fn meter_label(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{} km", meters / 1000.0)
    } else {
        format!("{} m", meters)
    }
}

fn imperial(entry: &(f64, ImperialUnit)) -> Spacing {
    match entry.1 {
        ImperialUnit::Mile => Spacing::new(
            entry.0 * FEET_PER_MILE / FEET_PER_METER,
            format!("{} mi", entry.0),
        ),
        ImperialUnit::Foot => {
            Spacing::new(entry.0 / FEET_PER_METER, format!("{} ft", entry.0))
        }
    }
}

/// Grid spacing for `system` at `zoom`.
///
/// Zoom levels above the table are clamped to the last entry.
/// Returns `None` when no lattice should be drawn.
pub fn spacing(system: GridSystem, zoom: u8, center_lat: f64) -> Option<Spacing> {
    let idx = table_index(zoom);
    match system {
        GridSystem::DecimalDegrees => Some(Spacing::new(DD_SPACING[idx], degree_label(DD_SPACING[idx]))),
        GridSystem::DegreesMinutesSeconds => {
            Some(Spacing::new(DMS_SPACING[idx], dms_label(DMS_SPACING[idx])))
        }
        GridSystem::Utm => Some(Spacing::new(UTM_SPACING[idx], meter_label(UTM_SPACING[idx]))),
        GridSystem::Mgrs => mgrs_spacing(zoom).map(|value| Spacing::new(value, meter_label(value))),
        GridSystem::DistanceMetric => {
            let value = METRIC_SPACING[distance_zoom(zoom, center_lat) as usize];
            Some(Spacing::new(value, meter_label(value)))
        }
        GridSystem::DistanceImperial => Some(imperial(
            &IMPERIAL_SPACING[distance_zoom(zoom, center_lat) as usize],
        )),
    }
}
