//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use thiserror::Error;

/// Grid computation errors
///
/// None of them is fatal for a redraw: callers omit the affected geometry,
/// treat it as "no intersection" or clamp to a valid table entry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Latitude outside the valid band of a projection
    #[error("latitude {lat} outside of projection band [{min}, {max}]")]
    OutOfRange { lat: f64, min: f64, max: f64 },
    /// Parallel or non-intersecting segments
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
    /// Zoom level or table index outside of the defined range
    #[error("configuration error: {0}")]
    Configuration(String),
}
