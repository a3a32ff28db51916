//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use geo_grid::{LatLng, Viewport};
use geogrids_core::core::config::{LineStyleCfg, DEFAULT_CONFIG};
use geogrids_core::core::stats::{Measure, Statistics};
use geogrids_core::core::{ApplicationCfg, Config};
use geogrids_core::grid::{generate, GridLine, GridSystem, Label, LineClass};
use geogrids_core::scale::{ScaleBar, ScaleResult};
use pbr::ProgressBar;
use std::io::{stderr, Stderr};
use std::str::FromStr;
use std::time::Instant;

/// When the host should request a new grid
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum RedrawTrigger {
    /// On every view change, including pan frames
    Move,
    /// Once the view settles
    MoveEnd,
}

impl FromStr for RedrawTrigger {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "move" => Ok(RedrawTrigger::Move),
            "moveend" => Ok(RedrawTrigger::MoveEnd),
            _ => Err(format!("Unknown redraw trigger '{}'", s)),
        }
    }
}

/// View change notification of the host map
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ViewEvent {
    Move,
    MoveEnd,
    ViewReset,
}

/// Line with its resolved style
#[derive(Clone, Debug, Serialize)]
pub struct StyledLine {
    #[serde(flatten)]
    pub line: GridLine,
    pub color: String,
    pub opacity: f32,
    pub weight: u8,
}

/// Everything the host draws for one view.
#[derive(Clone, Debug, Serialize)]
pub struct Redraw {
    pub system: GridSystem,
    pub zoom: u8,
    pub lines: Vec<StyledLine>,
    pub labels: Vec<Label>,
    /// Spacing caption of distance grids, e.g. "Grid : 10 km"
    pub grid_label: Option<String>,
    pub scales: Vec<ScaleResult>,
}

/// Grid layer
#[derive(Clone, Debug)]
pub struct GridService {
    pub system: GridSystem,
    pub redraw: RedrawTrigger,
    pub line_style: LineStyleCfg,
    pub zone_style: LineStyleCfg,
    pub scale: ScaleBar,
}

impl GridService {
    /// Service with default styles
    pub fn new(system: GridSystem) -> GridService {
        GridService {
            system,
            redraw: RedrawTrigger::Move,
            line_style: geogrids_core::core::config::default_line_style(),
            zone_style: geogrids_core::core::config::default_zone_style(),
            scale: ScaleBar::default(),
        }
    }
    pub fn should_redraw(&self, event: ViewEvent) -> bool {
        match (self.redraw, event) {
            (RedrawTrigger::MoveEnd, ViewEvent::Move) => false,
            _ => true,
        }
    }
    pub fn style(&self, class: LineClass) -> &LineStyleCfg {
        match class {
            LineClass::Normal => &self.line_style,
            LineClass::ZoneBoundary => &self.zone_style,
        }
    }
    fn styled(&self, line: GridLine) -> StyledLine {
        let style = self.style(line.class).clone();
        StyledLine {
            line,
            color: style.color,
            opacity: style.opacity,
            weight: style.weight,
        }
    }
    /// Grid lines, labels and scale bars of a viewport
    pub fn render(&self, viewport: &Viewport) -> Redraw {
        let output = generate(viewport, self.system);
        let grid_label = if self.system.is_distance() {
            output
                .spacing
                .as_ref()
                .map(|spacing| format!("Grid : {}", spacing.label))
        } else {
            None
        };
        Redraw {
            system: self.system,
            zoom: viewport.zoom,
            lines: output.lines.into_iter().map(|l| self.styled(l)).collect(),
            labels: output.labels,
            grid_label,
            scales: self.scale.compute(viewport),
        }
    }
    fn progress_bar_drilldown(&self, zoomlevels: u8, points: u64) -> ProgressBar<Stderr> {
        let numviews = zoomlevels as u64 * points;
        let mut pb = ProgressBar::on(stderr(), numviews);
        pb.message("View ");
        pb.show_speed = false;
        pb.show_percent = false;
        pb.show_time_left = false;
        pb
    }
    /// Line and label counts and render times for views centered at
    /// `points` (lng, lat pairs) in the zoom range.
    pub fn drilldown(
        &self,
        minzoom: u8,
        maxzoom: u8,
        points: Vec<f64>,
        size: (u32, u32),
        progress: bool,
    ) -> Statistics {
        let mut stats = Statistics::new();
        if minzoom > maxzoom {
            warn!("Empty zoom range {}..{}", minzoom, maxzoom);
            return stats;
        }
        let mut pb = self.progress_bar_drilldown(maxzoom - minzoom + 1, points.len() as u64 / 2);
        for point in points.chunks(2) {
            if point.len() < 2 {
                warn!("Ignoring incomplete point {:?}", point);
                continue;
            }
            let center = LatLng::new(point[1], point[0]);
            for zoom in minzoom..=maxzoom {
                let viewport = Viewport::from_center(center, zoom, size.0, size.1);
                debug!("level {}: {:?}", zoom, viewport.bounds());
                let start = Instant::now();
                let redraw = self.render(&viewport);
                let elapsed = start.elapsed();
                stats.record(Measure::Lines, self.system, zoom, redraw.lines.len() as u64);
                stats.record(Measure::Labels, self.system, zoom, redraw.labels.len() as u64);
                stats.record(
                    Measure::RenderTime,
                    self.system,
                    zoom,
                    elapsed.as_micros() as u64,
                );
                if progress {
                    pb.inc();
                }
            }
        }
        if progress {
            eprintln!("");
        }
        stats
    }
}

impl<'a> Config<'a, ApplicationCfg> for GridService {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let system = GridSystem::from_config(&config.grid)?;
        let redraw = config.grid.redraw.parse()?;
        let scale = ScaleBar::from_config(&config.scale)?;
        Ok(GridService {
            system,
            redraw,
            line_style: config.grid.line_style.clone(),
            zone_style: config.grid.zone_style.clone(),
            scale,
        })
    }
    fn gen_config() -> String {
        let mut config = String::new();
        config.push_str(TOML_HEADER);
        config.push_str(DEFAULT_CONFIG);
        config
    }
    fn gen_runtime_config(&self) -> String {
        let mut config = String::new();
        config.push_str(TOML_HEADER);
        config.push_str(&self.system.gen_runtime_config());
        config.push_str(&format!(
            "redraw = \"{}\"\n",
            match self.redraw {
                RedrawTrigger::Move => "move",
                RedrawTrigger::MoveEnd => "moveend",
            }
        ));
        for (name, style) in &[("line_style", &self.line_style), ("zone_style", &self.zone_style)] {
            config.push_str(&format!(
                "\n[grid.{}]\ncolor = \"{}\"\nopacity = {}\nweight = {}\n",
                name, style.color, style.opacity, style.weight
            ));
        }
        config.push_str(&self.scale.gen_runtime_config());
        config
    }
}

const TOML_HEADER: &'static str = "# geogrids configuration\n";
