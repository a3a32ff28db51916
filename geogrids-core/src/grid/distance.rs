//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Metric and imperial distance grids in Spherical Mercator

use crate::grid::{GridLine, GridOutput, LineClass, Spacing};
use geo_grid::{
    bounds_ll_to_sm, ll_to_spherical_mercator, meters_per_pixel, spherical_mercator_to_ll,
    Viewport,
};

/// Upper limit of line pairs per axis
const MAX_STEPS: usize = 1_000;

/// Offsets `±k·step` from `center`, in pairs, while one of them is within `[min, max]`.
fn symmetric_steps(center: f64, step: f64, min: f64, max: f64) -> Vec<f64> {
    let mut coords = Vec::new();
    for k in 1..=MAX_STEPS {
        let up = center + k as f64 * step;
        let down = center - k as f64 * step;
        if up > max && down < min {
            break;
        }
        coords.push(up);
        coords.push(down);
    }
    coords
}

/// Distance grid through the map center.
///
/// `spacing` is the ground distance at the center latitude. It is scaled
/// by the Mercator stretch of that latitude to get the projected step.
pub fn distance_grid(viewport: &Viewport, spacing: Option<&Spacing>) -> GridOutput {
    let mut output = GridOutput::default();
    let spacing = match spacing {
        Some(spacing) => spacing.value,
        None => return output,
    };
    let zoom = viewport.zoom;
    let center_mpp = meters_per_pixel(viewport.center.lat, zoom);
    let step = spacing * meters_per_pixel(0.0, zoom) / center_mpp;
    if !step.is_finite() || step <= 0.0 {
        debug!(
            "No distance grid at latitude {}",
            viewport.center.lat
        );
        return output;
    }
    let bounds = viewport.bounds();
    let extent = bounds_ll_to_sm(&bounds);
    let center = bounds.center();
    let (cx, _) = ll_to_spherical_mercator(center.lat, center.lng);
    let (_, cy) = ll_to_spherical_mercator(viewport.center.lat, viewport.center.lng);

    let mut ys = vec![cy];
    ys.extend(symmetric_steps(cy, step, extent.miny, extent.maxy));
    for y in ys {
        output.lines.push(GridLine::segment(
            spherical_mercator_to_ll(extent.minx, y),
            spherical_mercator_to_ll(extent.maxx, y),
            LineClass::Normal,
        ));
    }
    let mut xs = vec![cx];
    xs.extend(symmetric_steps(cx, step, extent.minx, extent.maxx));
    for x in xs {
        output.lines.push(GridLine::segment(
            spherical_mercator_to_ll(x, extent.miny),
            spherical_mercator_to_ll(x, extent.maxy),
            LineClass::Normal,
        ));
    }
    output
}
