//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Metric and imperial scale bars

use crate::core::config::ScaleCfg;
use crate::core::Config;
use geo_grid::{Viewport, WGS84_A};
use std::f64::consts;
use std::fmt;

/// Horizontal margin of the scale bar in pixels
pub const SCALE_MARGIN: i32 = 10;

const FEET_PER_METER: f64 = 3.2808399;
const FEET_PER_MILE: f64 = 5280.0;

static ROUND_LADDER: [f64; 6] = [1.0, 2.0, 2.5, 3.0, 5.0, 10.0];

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleUnit {
    Meters,
    Kilometers,
    Feet,
    Miles,
}

impl ScaleUnit {
    pub fn abbrev(&self) -> &'static str {
        match self {
            ScaleUnit::Meters => "m",
            ScaleUnit::Kilometers => "km",
            ScaleUnit::Feet => "ft",
            ScaleUnit::Miles => "mi",
        }
    }
}

/// Scale bar of one unit system
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct ScaleResult {
    pub rounded_value: f64,
    pub unit: ScaleUnit,
    /// Bar width in pixels
    pub pixel_width: i32,
}

impl fmt::Display for ScaleResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.rounded_value, self.unit.abbrev())
    }
}

/// Power of ten with the magnitude of `n`
fn pow10(n: f64) -> f64 {
    if n >= 1.0 {
        let digits = (n.floor() as u64).to_string().len() as i32;
        10f64.powi(digits - 1)
    } else {
        10f64.powf(n.log10().floor())
    }
}

/// `n` rounded down to 1, 2, 3, 5 or 10 times a power of ten.
/// Never exceeds `n`.
pub fn round_down_number(n: f64) -> f64 {
    if !(n > 0.0) {
        return 0.0;
    }
    let pow10 = pow10(n);
    let d = n / pow10;
    let d = if d >= 10.0 {
        10.0
    } else if d >= 5.0 {
        5.0
    } else if d >= 3.0 {
        3.0
    } else if d >= 2.0 {
        2.0
    } else {
        1.0
    };
    pow10 * d
}

/// `n` rounded to the nearest of 1, 2, 2.5, 3, 5 or 10 times a power of ten.
pub fn round_number(n: f64) -> f64 {
    if !(n > 0.0) {
        return 0.0;
    }
    let pow10 = pow10(n);
    let d = n / pow10;
    let nearest = ROUND_LADDER.iter().fold(ROUND_LADDER[0], |best, step| {
        if (d - step).abs() <= (d - best).abs() {
            *step
        } else {
            best
        }
    });
    pow10 * nearest
}

/// Bar width for `ratio` of the maximal width.
pub fn scale_width(max_width: u32, ratio: f64) -> i32 {
    (max_width as f64 * ratio).round() as i32 - SCALE_MARGIN
}

/// Ground distance covered by `max_width` pixels at the viewport center.
/// `None` for a viewport without pixel size.
pub fn max_meters(viewport: &Viewport, max_width: u32) -> Option<f64> {
    if viewport.width == 0 {
        return None;
    }
    let center_lat = viewport.bounds().center().lat;
    let half_world = WGS84_A * consts::PI * center_lat.to_radians().cos();
    let dist = half_world * viewport.lng_span() / 180.0;
    Some(dist * max_width as f64 / viewport.width as f64)
}

pub fn metric_scale(max_meters: f64, max_width: u32) -> ScaleResult {
    let meters = round_down_number(max_meters);
    let (rounded_value, unit) = if meters < 1000.0 {
        (meters, ScaleUnit::Meters)
    } else {
        (meters / 1000.0, ScaleUnit::Kilometers)
    };
    ScaleResult {
        rounded_value,
        unit,
        pixel_width: scale_width(max_width, meters / max_meters),
    }
}

pub fn imperial_scale(max_meters: f64, max_width: u32) -> ScaleResult {
    let max_feet = max_meters * FEET_PER_METER;
    if max_feet > FEET_PER_MILE {
        let max_miles = max_feet / FEET_PER_MILE;
        let miles = round_down_number(max_miles);
        ScaleResult {
            rounded_value: miles,
            unit: ScaleUnit::Miles,
            pixel_width: scale_width(max_width, miles / max_miles),
        }
    } else {
        let feet = round_down_number(max_feet);
        ScaleResult {
            rounded_value: feet,
            unit: ScaleUnit::Feet,
            pixel_width: scale_width(max_width, feet / max_feet),
        }
    }
}

/// Scale bar settings
#[derive(Clone, Debug)]
pub struct ScaleBar {
    pub max_width: u32,
    pub metric: bool,
    pub imperial: bool,
}

impl ScaleBar {
    /// Scales of the enabled unit systems, metric first.
    pub fn compute(&self, viewport: &Viewport) -> Vec<ScaleResult> {
        let mut scales = Vec::new();
        let max = match max_meters(viewport, self.max_width) {
            Some(max) if max > 0.0 => max,
            _ => return scales,
        };
        if self.metric {
            scales.push(metric_scale(max, self.max_width));
        }
        if self.imperial {
            scales.push(imperial_scale(max, self.max_width));
        }
        scales
    }
}

impl Default for ScaleBar {
    fn default() -> Self {
        ScaleBar {
            max_width: 100,
            metric: true,
            imperial: true,
        }
    }
}

impl<'a> Config<'a, ScaleCfg> for ScaleBar {
    fn from_config(scale_cfg: &ScaleCfg) -> Result<Self, String> {
        if scale_cfg.max_width as i32 <= SCALE_MARGIN {
            return Err(format!(
                "Scale bar max_width must exceed {} pixels",
                SCALE_MARGIN
            ));
        }
        Ok(ScaleBar {
            max_width: scale_cfg.max_width,
            metric: scale_cfg.metric,
            imperial: scale_cfg.imperial,
        })
    }
    fn gen_config() -> String {
        let toml = r#"
[scale]
metric = true
imperial = true
# Maximal scale bar width in pixels
max_width = 100
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        format!(
            "\n[scale]\nmetric = {}\nimperial = {}\nmax_width = {}\n",
            self.metric, self.imperial, self.max_width
        )
    }
}
