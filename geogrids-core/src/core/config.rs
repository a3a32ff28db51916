//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
    /// Generate configuration template with runtime information
    fn gen_runtime_config(&self) -> String {
        Self::gen_config()
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub grid: GridCfg,
    #[serde(default)]
    pub scale: ScaleCfg,
    pub viewport: Option<ViewportCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GridCfg {
    /// Grid system (dd, dms, utm, mgrs, metric, imperial)
    pub system: String,
    /// Redraw policy (move: on every view change, moveend: when the view settles)
    #[serde(default = "default_redraw")]
    pub redraw: String,
    #[serde(default = "default_line_style")]
    pub line_style: LineStyleCfg,
    #[serde(default = "default_zone_style")]
    pub zone_style: LineStyleCfg,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct LineStyleCfg {
    pub color: String,
    pub opacity: f32,
    pub weight: u8,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ScaleCfg {
    #[serde(default = "default_true")]
    pub metric: bool,
    #[serde(default = "default_true")]
    pub imperial: bool,
    /// Maximum width of the scale bar, in pixels
    #[serde(default = "default_max_width")]
    pub max_width: u32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ViewportCfg {
    /// Map center as (lat, lng)
    pub center: (f64, f64),
    pub zoom: u8,
    #[serde(default = "default_viewport_width")]
    pub width: u32,
    #[serde(default = "default_viewport_height")]
    pub height: u32,
}

pub fn default_redraw() -> String {
    "move".to_string()
}

pub fn default_line_style() -> LineStyleCfg {
    LineStyleCfg {
        color: "#111".to_string(),
        opacity: 0.6,
        weight: 1,
    }
}

pub fn default_zone_style() -> LineStyleCfg {
    LineStyleCfg {
        color: "#333".to_string(),
        opacity: 0.6,
        weight: 4,
    }
}

fn default_true() -> bool {
    true
}

pub fn default_max_width() -> u32 {
    100
}

fn default_viewport_width() -> u32 {
    1024
}

fn default_viewport_height() -> u32 {
    768
}

impl Default for ScaleCfg {
    fn default() -> Self {
        ScaleCfg {
            metric: true,
            imperial: true,
            max_width: default_max_width(),
        }
    }
}

pub const DEFAULT_CONFIG: &'static str = r##"
[grid]
system = "mgrs"
redraw = "move"

[grid.line_style]
color = "#111"
opacity = 0.6
weight = 1

[grid.zone_style]
color = "#333"
opacity = 0.6
weight = 4

[scale]
metric = true
imperial = true
max_width = 100

[viewport]
center = [46.95, 7.45]
zoom = 12
width = 1024
height = 768
"##;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]_]+)\}").map_err(|e| e.to_string())?;
    if re.is_match(&config_toml) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let mut env = HashMap::new();
    for (key, value) in env::vars() {
        env.insert(key, value);
    }
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
