//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid::distance::distance_grid;
use crate::grid::graticule::graticule;
use crate::grid::mgrs::mgrs_grid;
use crate::grid::spacing::spacing;
use crate::grid::utm::utm_grid;
use crate::grid::{GridOutput, GridSystem};
use geo_grid::Viewport;

/// Lines and labels of `system` for one viewport.
///
/// Pure function of its inputs: the same viewport always gives the same output.
pub fn generate(viewport: &Viewport, system: GridSystem) -> GridOutput {
    let spacing = spacing(system, viewport.zoom, viewport.center.lat);
    let mut output = match system {
        GridSystem::DecimalDegrees | GridSystem::DegreesMinutesSeconds => {
            graticule(viewport, system, spacing.as_ref())
        }
        GridSystem::Utm => utm_grid(viewport, spacing.as_ref()),
        GridSystem::Mgrs => mgrs_grid(viewport, spacing.as_ref()),
        GridSystem::DistanceMetric | GridSystem::DistanceImperial => {
            distance_grid(viewport, spacing.as_ref())
        }
    };
    output.spacing = spacing;
    debug!(
        "{} grid at zoom {}: {} lines, {} labels",
        system,
        viewport.zoom,
        output.lines.len(),
        output.labels.len()
    );
    output
}
