//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid_service::GridService;
use clap::ArgMatches;
use geo_grid::{LatLng, Viewport};
use geogrids_core::core::config::{ApplicationCfg, ViewportCfg, DEFAULT_CONFIG};
use geogrids_core::core::{parse_config, read_config, Config};
use geogrids_core::grid::GridSystem;
use std::process;

fn float_list(args: &ArgMatches, name: &str) -> Option<Vec<f64>> {
    args.value_of(name).map(|numlist| {
        numlist
            .split(",")
            .map(|v| {
                v.trim().parse().unwrap_or_else(|_| {
                    println!("Error parsing '{}' as list of float values", name);
                    process::exit(1)
                })
            })
            .collect()
    })
}

pub fn config_from_args(args: &ArgMatches) -> ApplicationCfg {
    let mut config: ApplicationCfg = if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        read_config(cfgpath).unwrap_or_else(|err| {
            println!("Error reading configuration - {} ", err);
            process::exit(1)
        })
    } else {
        parse_config(DEFAULT_CONFIG.to_string(), "").unwrap_or_else(|err| {
            println!("Error reading default configuration - {} ", err);
            process::exit(1)
        })
    };
    if let Some(system) = args.value_of("system") {
        config.grid.system = system.to_string();
    }
    config
}

pub fn service_from_args(config: &ApplicationCfg, _args: &ArgMatches) -> GridService {
    GridService::from_config(config).unwrap_or_else(|err| {
        println!("Error reading configuration - {} ", err);
        process::exit(1)
    })
}

/// Viewport from `--bounds` or `--center`/`--zoom`/`--size`, falling back
/// to the `[viewport]` configuration.
pub fn viewport_from_args(config: &ApplicationCfg, args: &ArgMatches) -> Viewport {
    let default_cfg = ViewportCfg {
        center: (0.0, 0.0),
        zoom: 2,
        width: 1024,
        height: 768,
    };
    let cfg = config.viewport.as_ref().unwrap_or(&default_cfg);
    let zoom = args
        .value_of("zoom")
        .map(|s| {
            s.parse::<u8>().unwrap_or_else(|_| {
                println!("Error parsing 'zoom' as integer value");
                process::exit(1)
            })
        })
        .unwrap_or(cfg.zoom);
    let (width, height) = args
        .value_of("size")
        .map(|s| {
            let dims: Vec<u32> = s.split("x").filter_map(|v| v.parse().ok()).collect();
            if dims.len() != 2 {
                println!("Error parsing 'size' as WIDTHxHEIGHT");
                process::exit(1)
            }
            (dims[0], dims[1])
        })
        .unwrap_or((cfg.width, cfg.height));

    if let Some(bounds) = float_list(args, "bounds") {
        if bounds.len() != 4 {
            println!("Expected 'bounds' as south,west,north,east");
            process::exit(1)
        }
        return Viewport::new(bounds[0], bounds[1], bounds[2], bounds[3], zoom)
            .with_size(width, height);
    }
    let center = match float_list(args, "center") {
        Some(ref c) if c.len() == 2 => LatLng::new(c[0], c[1]),
        Some(_) => {
            println!("Expected 'center' as lat,lng");
            process::exit(1)
        }
        None => LatLng::new(cfg.center.0, cfg.center.1),
    };
    Viewport::from_center(center, zoom, width, height)
}

pub fn gen_config(args: &ArgMatches) -> String {
    match args.value_of("system") {
        Some(system) => match system.parse::<GridSystem>() {
            Ok(system) => GridService::new(system).gen_runtime_config(),
            Err(err) => {
                println!("{}", err);
                process::exit(1)
            }
        },
        None => GridService::gen_config(),
    }
}
