//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Reference grid generators

mod clip;
mod distance;
mod generator;
mod graticule;
mod label;
mod line;
mod mgrs;
mod spacing;
mod system;
mod utm;

pub use self::clip::{clip_to_zone, line_segment_intersect, meridian_intersect, trim};
pub use self::distance::distance_grid;
pub use self::generator::generate;
pub use self::graticule::graticule;
pub use self::label::{
    format_dd, format_dms, format_utm, label_bounds, label_buffer, LABEL_PADDING,
};
pub use self::line::{Axis, GridLine, GridOutput, Label, LineClass};
pub use self::mgrs::{mgrs_grid, zone_grid, zone_labels};
pub use self::spacing::{
    distance_zoom, mgrs_accuracy, mgrs_spacing, spacing, Spacing, MAX_TABLE_ZOOM,
};
pub use self::system::GridSystem;
pub use self::utm::{projected_lattice, utm_grid, Lattice, MAX_LATTICE_POINTS};

/// Longitude span above which zone based grids only show zones.
pub const ZOOMED_OUT_SPAN: f64 = 8.0;

#[cfg(test)]
mod generator_test;
#[cfg(test)]
mod label_test;
