//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Clipping of lattice lines to UTM zones

use crate::grid::GridLine;
use geo_grid::zones::is_zone_edge;
use geo_grid::LatLng;

/// Intersection of two segments, with longitude as x and latitude as y.
///
/// Returns `None` for vertical segments, parallel segments, or when the
/// intersection lies outside the longitude range of either segment.
pub fn line_segment_intersect(seg1: (&LatLng, &LatLng), seg2: (&LatLng, &LatLng)) -> Option<LatLng> {
    let (p1, p2) = seg1;
    let (p3, p4) = seg2;
    let dx1 = p2.lng - p1.lng;
    let dx2 = p4.lng - p3.lng;
    if dx1 == 0.0 || dx2 == 0.0 {
        return None;
    }
    let m1 = (p2.lat - p1.lat) / dx1;
    let m2 = (p4.lat - p3.lat) / dx2;
    if m1 == m2 {
        return None;
    }
    let b1 = p1.lat - m1 * p1.lng;
    let b2 = p3.lat - m2 * p3.lng;
    let x = (b2 - b1) / (m1 - m2);
    let y = m1 * x + b1;
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    let within = |a: &LatLng, b: &LatLng| x > a.lng.min(b.lng) && x < a.lng.max(b.lng);
    if within(p1, p2) && within(p3, p4) {
        Some(LatLng::new(y, x))
    } else {
        None
    }
}

/// Point where the segment `a`-`b` crosses the meridian `lng`.
pub fn meridian_intersect(a: &LatLng, b: &LatLng, lng: f64) -> Option<LatLng> {
    if a.lng == b.lng || lng < a.lng.min(b.lng) || lng > a.lng.max(b.lng) {
        return None;
    }
    let t = (lng - a.lng) / (b.lng - a.lng);
    Some(LatLng::new(a.lat + t * (b.lat - a.lat), lng))
}

fn push_distinct(points: &mut Vec<LatLng>, pt: LatLng) {
    if points.last() != Some(&pt) {
        points.push(pt);
    }
}

/// Trim a polyline to the longitude band `[left, right]`.
///
/// Only band edges on a 6° zone meridian are clipped. Edges elsewhere are
/// viewport borders and leave the line untouched on that side. Crossing the
/// right edge or leaving across the left edge ends the line. If a needed
/// intersection can not be computed the untrimmed line is returned.
pub fn trim(points: &[LatLng], left: f64, right: f64) -> Vec<LatLng> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let clip_left = is_zone_edge(left);
    let clip_right = is_zone_edge(right);
    let keep = |pt: &LatLng| {
        (pt.lng >= left || !clip_left) && (pt.lng <= right || !clip_right)
    };

    let mut trimmed: Vec<LatLng> = Vec::with_capacity(points.len());
    for seg in points.windows(2) {
        let (l, r) = (&seg[0], &seg[1]);
        if keep(l) {
            push_distinct(&mut trimmed, *l);
        } else if l.lng < left && r.lng >= left {
            // entering across the left edge
            match meridian_intersect(l, r, left) {
                Some(pt) => push_distinct(&mut trimmed, pt),
                None => return points.to_vec(),
            }
        } else if l.lng > right && r.lng <= right {
            // entering across the right edge
            match meridian_intersect(l, r, right) {
                Some(pt) => push_distinct(&mut trimmed, pt),
                None => return points.to_vec(),
            }
        } else {
            continue;
        }
        let exit = if clip_right && r.lng > right && l.lng <= right {
            Some(right)
        } else if clip_left && r.lng < left && l.lng >= left {
            Some(left)
        } else {
            None
        };
        if let Some(edge) = exit {
            match meridian_intersect(l, r, edge) {
                Some(pt) => {
                    push_distinct(&mut trimmed, pt);
                    return trimmed;
                }
                None => return points.to_vec(),
            }
        }
    }
    if let Some(last) = points.last() {
        if keep(last) {
            push_distinct(&mut trimmed, *last);
        }
    }
    trimmed
}

/// Trim `line` to the zone between `left` and `right`.
/// Lines with less than two points left are dropped.
pub fn clip_to_zone(line: GridLine, left: f64, right: f64) -> Option<GridLine> {
    let points = trim(&line.points, left, right);
    if points.len() < 2 {
        debug!("line dropped while clipping to {}..{}", left, right);
        return None;
    }
    Some(GridLine::new(points, line.class))
}
