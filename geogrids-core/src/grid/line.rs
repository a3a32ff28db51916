//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use geo_grid::LatLng;

/// Rendering class of a grid line.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineClass {
    Normal,
    ZoneBoundary,
}

/// Polyline in geographic coordinates.
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct GridLine {
    pub points: Vec<LatLng>,
    pub class: LineClass,
}

impl GridLine {
    pub fn new(points: Vec<LatLng>, class: LineClass) -> GridLine {
        GridLine { points, class }
    }
    /// Straight two point line
    pub fn segment(from: LatLng, to: LatLng, class: LineClass) -> GridLine {
        GridLine::new(vec![from, to], class)
    }
    pub fn from(&self) -> Option<&LatLng> {
        self.points.first()
    }
    pub fn to(&self) -> Option<&LatLng> {
        self.points.last()
    }
}

/// What a label annotates.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Line of constant latitude or northing
    Lat,
    /// Line of constant longitude or easting
    Lng,
    /// Grid cell
    Cell,
}

#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct Label {
    pub anchor: LatLng,
    pub text: String,
    pub axis: Axis,
}

impl Label {
    pub fn new(anchor: LatLng, text: String, axis: Axis) -> Label {
        Label { anchor, text, axis }
    }
}

/// Lines and labels of one redraw.
#[derive(PartialEq, Clone, Debug, Default, Serialize)]
pub struct GridOutput {
    pub lines: Vec<GridLine>,
    pub labels: Vec<Label>,
    /// Spacing used for the lattice, if any
    pub spacing: Option<super::Spacing>,
}

impl GridOutput {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.labels.is_empty()
    }
    pub fn append(&mut self, mut other: GridOutput) {
        self.lines.append(&mut other.lines);
        self.labels.append(&mut other.labels);
    }
}
