//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::GridCfg;
use crate::core::Config;
use std::fmt;
use std::str::FromStr;

/// Supported coordinate reference grids.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GridSystem {
    DecimalDegrees,
    DegreesMinutesSeconds,
    Utm,
    Mgrs,
    DistanceMetric,
    DistanceImperial,
}

impl GridSystem {
    pub fn all() -> [GridSystem; 6] {
        [
            GridSystem::DecimalDegrees,
            GridSystem::DegreesMinutesSeconds,
            GridSystem::Utm,
            GridSystem::Mgrs,
            GridSystem::DistanceMetric,
            GridSystem::DistanceImperial,
        ]
    }
    /// Short name used in configuration files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            GridSystem::DecimalDegrees => "dd",
            GridSystem::DegreesMinutesSeconds => "dms",
            GridSystem::Utm => "utm",
            GridSystem::Mgrs => "mgrs",
            GridSystem::DistanceMetric => "metric",
            GridSystem::DistanceImperial => "imperial",
        }
    }
    pub fn is_distance(&self) -> bool {
        match self {
            GridSystem::DistanceMetric | GridSystem::DistanceImperial => true,
            _ => false,
        }
    }
}

impl fmt::Display for GridSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GridSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dd" | "decimal" => Ok(GridSystem::DecimalDegrees),
            "dms" => Ok(GridSystem::DegreesMinutesSeconds),
            "utm" => Ok(GridSystem::Utm),
            "mgrs" => Ok(GridSystem::Mgrs),
            "metric" | "distance" => Ok(GridSystem::DistanceMetric),
            "imperial" => Ok(GridSystem::DistanceImperial),
            _ => Err(format!("Unknown grid system '{}'", s)),
        }
    }
}

impl<'a> Config<'a, GridCfg> for GridSystem {
    fn from_config(grid_cfg: &GridCfg) -> Result<Self, String> {
        grid_cfg.system.parse()
    }
    fn gen_config() -> String {
        let toml = r#"
[grid]
# Grid system: dd, dms, utm, mgrs, metric, imperial
system = "mgrs"
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        format!("\n[grid]\nsystem = \"{}\"\n", self.name())
    }
}
