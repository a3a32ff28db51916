//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid::*;
use geo_grid::{GridError, LatLng, LatLngBounds, Viewport};

fn is_vertical(line: &GridLine) -> bool {
    match (line.from(), line.to()) {
        (Some(a), Some(b)) => (a.lng - b.lng).abs() < 1e-9,
        _ => false,
    }
}

#[test]
fn test_determinism() {
    let viewport = Viewport::from_center(LatLng::new(47.37, 8.54), 11, 1024, 768);
    for system in GridSystem::all().iter() {
        let first = generate(&viewport, *system);
        let second = generate(&viewport, *system);
        assert_eq!(first, second, "{} output differs", system);
    }
}

#[test]
fn test_dd_graticule() {
    let viewport = Viewport::new(0.5, 0.5, 9.5, 9.5, 6);
    let output = generate(&viewport, GridSystem::DecimalDegrees);
    assert_eq!(output.spacing.as_ref().map(|s| s.value), Some(2.0));
    // 0, 2, 4, 6, 8 per axis
    assert_eq!(output.lines.len(), 10);
    assert_eq!(output.labels.len(), 10);
    assert_eq!(output.labels[0].text, "0");
    assert_eq!(output.labels[0].axis, Axis::Lat);
    assert_eq!(output.labels[4].text, "8");
    assert!(output.lines.iter().all(|l| l.class == LineClass::Normal));
}

#[test]
fn test_dms_graticule_labels() {
    let viewport = Viewport::new(46.9, 7.4, 47.1, 7.6, 11);
    let output = generate(&viewport, GridSystem::DegreesMinutesSeconds);
    let texts: Vec<&str> = output.labels.iter().map(|l| l.text.as_str()).collect();
    assert!(texts.contains(&"47° 0' N"));
    assert!(texts.contains(&"7° 30' E"));
}

#[test]
fn test_graticule_skips_poles() {
    let viewport = Viewport::new(-89.0, -10.0, 89.0, 10.0, 0);
    let output = generate(&viewport, GridSystem::DecimalDegrees);
    for line in output.lines.iter().filter(|l| !is_vertical(l)) {
        assert!(line.points[0].lat.abs() <= 90.0);
    }
}

#[test]
fn test_mgrs_zoomed_out_empty() {
    let viewport = Viewport::from_center(LatLng::new(0.0, 0.0), 2, 1024, 768);
    let output = generate(&viewport, GridSystem::Mgrs);
    assert!(output.lines.is_empty());
    assert!(output.labels.is_empty());
}

#[test]
fn test_mgrs_zone_cells() {
    let viewport = Viewport::new(40.0, 0.0, 50.0, 20.0, 5);
    let output = generate(&viewport, GridSystem::Mgrs);
    assert!(!output.lines.is_empty());
    assert!(output
        .lines
        .iter()
        .all(|l| l.class == LineClass::ZoneBoundary));
    let texts: Vec<&str> = output.labels.iter().map(|l| l.text.as_str()).collect();
    assert!(texts.contains(&"32T"));
    assert!(texts.contains(&"33T"));
    assert!(output.labels.iter().all(|l| l.axis == Axis::Cell));
}

#[test]
fn test_norway_overrides() {
    let bounds = geo_grid::LatLngBounds::new(57.0, 0.0, 63.0, 20.0);
    let output = zone_grid(&bounds);
    // irregular 32V boundary at 3 degrees
    assert!(output
        .lines
        .iter()
        .any(|l| is_vertical(l) && l.points[0].lng == 3.0));
    // regular meridian at 6 degrees stops at 56
    assert!(!output
        .lines
        .iter()
        .any(|l| is_vertical(l) && l.points[0].lng == 6.0));
    let labels = zone_labels(&geo_grid::LatLngBounds::new(56.0, 0.0, 64.0, 12.0));
    let texts: Vec<&str> = labels.iter().map(|l| l.text.as_str()).collect();
    assert!(texts.contains(&"31V"));
    assert!(texts.contains(&"32V"));
}

#[test]
fn test_band_limits() {
    let horizontal = |bounds: &LatLngBounds| -> Vec<f64> {
        zone_grid(bounds)
            .lines
            .iter()
            .filter(|l| !is_vertical(l))
            .map(|l| l.points[0].lat)
            .collect()
    };
    // band X ends at 84
    assert_eq!(horizontal(&LatLngBounds::new(76.0, 0.0, 88.0, 20.0)), vec![84.0]);
    assert_eq!(horizontal(&LatLngBounds::new(-88.0, 0.0, -76.0, 20.0)), vec![-80.0]);
    assert_eq!(horizontal(&LatLngBounds::new(70.0, 0.0, 80.0, 20.0)), vec![72.0]);
}

#[test]
fn test_mgrs_squares() {
    let viewport = Viewport::from_center(LatLng::new(38.8895, -77.0352), 10, 1024, 768);
    let output = generate(&viewport, GridSystem::Mgrs);
    assert!(output.lines.iter().any(|l| l.class == LineClass::Normal));
    assert!(!output.labels.is_empty());
    for label in &output.labels {
        assert!(label.text.starts_with("18S"), "{}", label.text);
        // accuracy 1: zone, band, square id and two digits
        assert_eq!(label.text.len(), 7, "{}", label.text);
    }
}

#[test]
fn test_mgrs_zone_lines_only_above_zoom_20() {
    let viewport = Viewport::from_center(LatLng::new(38.8895, -77.0352), 21, 1024, 768);
    let output = generate(&viewport, GridSystem::Mgrs);
    assert_eq!(output.spacing, None);
    assert!(output.labels.is_empty());
    assert!(output
        .lines
        .iter()
        .all(|l| l.class == LineClass::ZoneBoundary));
}

#[test]
fn test_utm_zoomed_out() {
    let viewport = Viewport::new(40.0, -10.0, 50.0, 20.0, 5);
    let output = generate(&viewport, GridSystem::Utm);
    // zone boundaries at -6, 0, 6, 12, 18
    assert_eq!(output.lines.len(), 5);
    assert!(output
        .lines
        .iter()
        .all(|l| l.class == LineClass::ZoneBoundary));
    assert_eq!(output.labels[0].text, "Zone 30");
    assert_eq!(output.labels[4].text, "Zone 34");
}

#[test]
fn test_utm_lattice_clipped_to_zones() {
    let viewport = Viewport::new(46.0, 4.0, 48.0, 8.0, 9);
    let output = generate(&viewport, GridSystem::Utm);
    let boundaries: Vec<&GridLine> = output
        .lines
        .iter()
        .filter(|l| l.class == LineClass::ZoneBoundary)
        .collect();
    assert_eq!(boundaries.len(), 1);
    let lattice: Vec<&GridLine> = output
        .lines
        .iter()
        .filter(|l| l.class == LineClass::Normal)
        .collect();
    assert!(!lattice.is_empty());
    for line in lattice {
        let west = line.points.iter().any(|p| p.lng < 6.0 - 1e-6);
        let east = line.points.iter().any(|p| p.lng > 6.0 + 1e-6);
        assert!(!(west && east), "line crosses the zone boundary");
    }
    assert!(output.labels.iter().any(|l| l.text.starts_with("31N ")));
    assert!(output.labels.iter().any(|l| l.text.starts_with("32N ")));
}

#[test]
fn test_antimeridian() {
    let viewport = Viewport::from_center(LatLng::new(10.3, -179.6), 10, 1024, 768);
    assert!(viewport.west < -180.0);
    for system in [GridSystem::Utm, GridSystem::Mgrs].iter() {
        let output = generate(&viewport, *system);
        let lattice: Vec<&GridLine> = output
            .lines
            .iter()
            .filter(|l| l.class == LineClass::Normal)
            .collect();
        assert!(!lattice.is_empty(), "{}", system);
        for line in lattice {
            // no wrap around the globe
            assert!(line.points.iter().all(|p| p.lng < -170.0), "{} {:?}", system, line.points);
            let west = line.points.iter().any(|p| p.lng < -180.0 - 1e-6);
            let east = line.points.iter().any(|p| p.lng > -180.0 + 1e-6);
            assert!(!(west && east), "{} line crosses the antimeridian", system);
        }
    }
}

#[test]
fn test_utm_outside_band() {
    let viewport = Viewport::new(84.5, 0.0, 85.0, 1.0, 9);
    assert!(generate(&viewport, GridSystem::Utm).is_empty());
}

#[test]
fn test_distance_grid_symmetric() {
    let viewport = Viewport::new(-0.1, -0.1, 0.1, 0.1, 10);
    let output = generate(&viewport, GridSystem::DistanceMetric);
    assert_eq!(output.spacing.as_ref().map(|s| s.label.as_str()), Some("10 km"));
    let verticals: Vec<f64> = output
        .lines
        .iter()
        .filter(|l| is_vertical(l))
        .map(|l| l.points[0].lng)
        .collect();
    assert!(verticals.len() >= 3);
    let center = verticals[0];
    assert!(center.abs() < 1e-9);
    assert!((verticals[1] + verticals[2] - 2.0 * center).abs() < 1e-9);
    assert!(verticals[1] > center && verticals[2] < center);
    let expected = 10_000.0 / 6_371_000.0 * 180.0 / std::f64::consts::PI;
    assert!((verticals[1] - expected).abs() < 1e-9);
}

#[test]
fn test_imperial_grid() {
    let viewport = Viewport::new(-0.1, -0.1, 0.1, 0.1, 10);
    let output = generate(&viewport, GridSystem::DistanceImperial);
    assert_eq!(output.spacing.as_ref().map(|s| s.label.as_str()), Some("5 mi"));
    // center line and one pair per axis
    assert_eq!(output.lines.len(), 6);
}

#[test]
fn test_projected_lattice() {
    let bounds = LatLngBounds::new(46.0, 6.0, 48.0, 12.0);
    let lattice = projected_lattice(&bounds, 6.0, 12.0, 100_000.0).unwrap();
    assert_eq!(lattice.zone_number, 32);
    assert_eq!(lattice.zone_letter, 'T');
    assert_eq!(lattice.points.len(), lattice.northings.len());
    assert!(lattice.points.iter().all(|row| row.len() == lattice.eastings.len()));
    assert!(lattice.eastings.iter().all(|e| e % 100_000.0 == 0.0));
    // the lattice extends beyond the zone on both sides
    assert!(lattice.points[0][0].lng < 6.0);
    assert!(lattice.points[0][lattice.eastings.len() - 1].lng > 12.0);

    match projected_lattice(&bounds, 6.0, 6.0, 100_000.0) {
        Err(GridError::Degenerate(_)) => (),
        other => panic!("unexpected {:?}", other.map(|l| l.zone_number)),
    }
    match projected_lattice(&bounds, 6.0, 12.0, 100.0) {
        Err(GridError::Configuration(_)) => (),
        other => panic!("unexpected {:?}", other.map(|l| l.zone_number)),
    }
    let polar = LatLngBounds::new(85.0, 6.0, 89.0, 12.0);
    match projected_lattice(&polar, 6.0, 12.0, 100_000.0) {
        Err(GridError::OutOfRange { .. }) => (),
        other => panic!("unexpected {:?}", other.map(|l| l.zone_number)),
    }
}
