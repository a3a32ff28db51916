//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use geogrids_service as service;
use log::Record;
use std::env;
use std::io::Write;
use std::process;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(rust_log)) => rust_log.as_str(),
        (loglevel, _) => loglevel.unwrap_or("info"),
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            println!("Error writing JSON - {}", e);
            process::exit(1)
        }
    }
}

fn grid(args: &ArgMatches<'_>) {
    let config = service::config_from_args(&args);
    let svc = service::service_from_args(&config, &args);
    let viewport = service::viewport_from_args(&config, &args);
    info!(
        "{} grid for {:?} at zoom {}",
        svc.system,
        viewport.bounds(),
        viewport.zoom
    );
    print_json(&svc.render(&viewport));
}

fn scale(args: &ArgMatches<'_>) {
    let config = service::config_from_args(&args);
    let svc = service::service_from_args(&config, &args);
    let viewport = service::viewport_from_args(&config, &args);
    print_json(&svc.scale.compute(&viewport));
}

fn drilldown(args: &ArgMatches<'_>) {
    let config = service::config_from_args(&args);
    let svc = service::service_from_args(&config, &args);
    let viewport = service::viewport_from_args(&config, &args);
    let minzoom = args.value_of("minzoom").map_or(0, |s| {
        s.parse::<u8>()
            .expect("Error parsing 'minzoom' as integer value")
    });
    let maxzoom = args.value_of("maxzoom").map_or(20, |s| {
        s.parse::<u8>()
            .expect("Error parsing 'maxzoom' as integer value")
    });
    let points: Vec<f64> = args
        .value_of("points")
        .map(|numlist| {
            numlist
                .split(",")
                .map(|v| {
                    v.parse()
                        .expect("Error parsing 'point' as pair of float values")
                })
                .collect()
        })
        .expect("Missing 'points' list");
    let progress = args.value_of("progress").map_or(true, |s| {
        s.parse::<bool>()
            .expect("Error parsing 'progress' as boolean value")
    });
    let stats = svc.drilldown(
        minzoom,
        maxzoom,
        points,
        (viewport.width, viewport.height),
        progress,
    );
    print!("{}", stats.as_csv());
}

fn main() {
    dotenv().ok();
    // http://kbknapp.github.io/clap-rs/clap/
    let mut app = App::new("geogrids")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("coordinate reference grids (lat/lng, UTM, MGRS, distance) for web maps")
        .subcommand(SubCommand::with_name("grid")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --system=[dd|dms|utm|mgrs|metric|imperial] 'Grid system'
                                              --bounds=[south,west,north,east] 'Viewport bounds'
                                              --center=[lat,lng] 'Viewport center'
                                              --zoom=[LEVEL] 'Zoom level'
                                              --size=[WIDTHxHEIGHT] 'Viewport size in pixels'")
                        .about("Grid lines and labels of a viewport as JSON"))
        .subcommand(SubCommand::with_name("scale")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --bounds=[south,west,north,east] 'Viewport bounds'
                                              --center=[lat,lng] 'Viewport center'
                                              --zoom=[LEVEL] 'Zoom level'
                                              --size=[WIDTHxHEIGHT] 'Viewport size in pixels'")
                        .about("Scale bars of a viewport as JSON"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("--loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --system=[dd|dms|utm|mgrs|metric|imperial] 'Grid system'")
                        .about("Generate configuration template"))
        .subcommand(SubCommand::with_name("drilldown")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --system=[dd|dms|utm|mgrs|metric|imperial] 'Grid system'
                                              --minzoom=[LEVEL] 'Minimum zoom level'
                                              --maxzoom=[LEVEL] 'Maximum zoom level'
                                              --size=[WIDTHxHEIGHT] 'Viewport size in pixels'
                                              --points=[lng1,lat1,lng2,lat2,..] 'Drilldown points'
                                              --progress=[true|false] 'Show progress bar'")
                        .about("Grid statistics"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("grid", Some(sub_m)) => {
                init_logger(sub_m);
                grid(sub_m);
            }
            ("scale", Some(sub_m)) => {
                init_logger(sub_m);
                scale(sub_m);
            }
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                println!("{}", service::gen_config(sub_m));
            }
            ("drilldown", Some(sub_m)) => {
                init_logger(sub_m);
                drilldown(sub_m);
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
