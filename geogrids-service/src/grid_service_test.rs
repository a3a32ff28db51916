//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid_service::*;
use geo_grid::{LatLng, Viewport};
use geogrids_core::core::config::{parse_config, ApplicationCfg};
use geogrids_core::core::Config;
use geogrids_core::grid::{GridSystem, LineClass};
use geogrids_core::scale::ScaleUnit;

fn service(toml: &str) -> Result<GridService, String> {
    let config: ApplicationCfg = parse_config(toml.to_string(), "")?;
    GridService::from_config(&config)
}

#[test]
fn test_from_config() {
    let svc = service(
        r#"
        [grid]
        system = "utm"
        redraw = "moveend"

        [grid.zone_style]
        color = "red"
        opacity = 1.0
        weight = 5

        [scale]
        imperial = false
        "#,
    )
    .unwrap();
    assert_eq!(svc.system, GridSystem::Utm);
    assert_eq!(svc.redraw, RedrawTrigger::MoveEnd);
    assert_eq!(svc.style(LineClass::ZoneBoundary).color, "red");
    assert_eq!(svc.style(LineClass::Normal).weight, 1);
    assert!(svc.scale.metric);
    assert!(!svc.scale.imperial);
}

#[test]
fn test_config_errors() {
    let err = service("[grid]\nsystem = \"lambert\"\n").err().unwrap();
    assert_eq!(err, "Unknown grid system 'lambert'");
    let err = service("[grid]\nsystem = \"dd\"\nredraw = \"zoom\"\n")
        .err()
        .unwrap();
    assert_eq!(err, "Unknown redraw trigger 'zoom'");
}

#[test]
fn test_redraw_trigger() {
    let mut svc = GridService::new(GridSystem::DecimalDegrees);
    assert!(svc.should_redraw(ViewEvent::Move));
    assert!(svc.should_redraw(ViewEvent::MoveEnd));
    svc.redraw = RedrawTrigger::MoveEnd;
    assert!(!svc.should_redraw(ViewEvent::Move));
    assert!(svc.should_redraw(ViewEvent::MoveEnd));
    assert!(svc.should_redraw(ViewEvent::ViewReset));
}

#[test]
fn test_render_styles() {
    let svc = GridService::new(GridSystem::Utm);
    let viewport = Viewport::new(46.0, 4.0, 48.0, 8.0, 9).with_size(1024, 768);
    let redraw = svc.render(&viewport);
    assert_eq!(redraw.zoom, 9);
    assert!(redraw.grid_label.is_none());
    for line in &redraw.lines {
        let style = svc.style(line.line.class);
        assert_eq!(line.weight, style.weight);
        assert_eq!(line.color, style.color);
    }
    assert!(redraw
        .lines
        .iter()
        .any(|l| l.line.class == LineClass::ZoneBoundary));
    assert_eq!(redraw.scales.len(), 2);
    assert_eq!(redraw.scales[0].unit, ScaleUnit::Kilometers);
}

#[test]
fn test_render_distance_label() {
    let svc = GridService::new(GridSystem::DistanceMetric);
    let viewport = Viewport::from_center(LatLng::new(0.0, 0.0), 10, 800, 600);
    let redraw = svc.render(&viewport);
    assert_eq!(redraw.grid_label, Some("Grid : 10 km".to_string()));
    let json = serde_json::to_string(&redraw).unwrap();
    assert!(json.contains("\"system\":\"distance_metric\""));
    assert!(json.contains("\"class\":\"normal\""));
}

#[test]
fn test_drilldown() {
    let svc = GridService::new(GridSystem::DecimalDegrees);
    let stats = svc.drilldown(2, 4, vec![8.54, 47.37, -77.03, 38.89], (512, 512), false);
    assert_eq!(stats.results("lines.dd.2").len, 2);
    assert_eq!(stats.results("labels.dd.4").len, 2);
    assert!(stats.results("lines.dd.3").min > 0);
    assert!(stats.as_csv().starts_with("key,count,min,max,mean,stddev\n"));
}

#[test]
fn test_gen_config() {
    let config = GridService::gen_config();
    let parsed: ApplicationCfg = parse_config(config, "").unwrap();
    assert_eq!(parsed.grid.system, "mgrs");

    let runtime = GridService::new(GridSystem::Utm).gen_runtime_config();
    let parsed: ApplicationCfg = parse_config(runtime, "").unwrap();
    assert_eq!(parsed.grid.system, "utm");
    assert_eq!(parsed.scale.max_width, 100);
}
