//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

mod scalebar;

pub use self::scalebar::{
    imperial_scale, max_meters, metric_scale, round_down_number, round_number, scale_width,
    ScaleBar, ScaleResult, ScaleUnit,
};
