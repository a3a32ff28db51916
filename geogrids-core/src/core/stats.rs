//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Drilldown statistics

use crate::grid::GridSystem;
use stats::{MinMax, OnlineStats};
use std::collections::BTreeMap;
use std::fmt;

/// Quantity measured per rendered viewport
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Measure {
    Lines,
    Labels,
    /// Render time in microseconds
    RenderTime,
}

impl Measure {
    pub fn name(&self) -> &'static str {
        match self {
            Measure::Lines => "lines",
            Measure::Labels => "labels",
            Measure::RenderTime => "render_us",
        }
    }
}

#[derive(Default)]
struct Collector {
    online: OnlineStats,
    minmax: MinMax<u64>,
}

#[derive(PartialEq, Default)]
pub struct StatResults {
    pub len: usize,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub stddev: f64,
}

/// Measurements keyed by `<measure>.<system>.<zoom>`, sorted by key.
#[derive(Default)]
pub struct Statistics {
    collectors: BTreeMap<String, Collector>,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }
    pub fn key(measure: Measure, system: GridSystem, zoom: u8) -> String {
        format!("{}.{}.{}", measure.name(), system, zoom)
    }
    /// Add a measurement of `system` at `zoom`.
    pub fn record(&mut self, measure: Measure, system: GridSystem, zoom: u8, value: u64) {
        self.add(Statistics::key(measure, system, zoom), value);
    }
    pub fn add(&mut self, key: String, value: u64) {
        let collector = self.collectors.entry(key).or_default();
        collector.online.add(value);
        collector.minmax.add(value);
    }
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.collectors.keys()
    }
    /// Results of `key`, all zero for unknown keys.
    pub fn results(&self, key: &str) -> StatResults {
        match self.collectors.get(key) {
            Some(collector) => StatResults {
                len: collector.minmax.len(),
                min: collector.minmax.min().cloned().unwrap_or(0),
                max: collector.minmax.max().cloned().unwrap_or(0),
                mean: collector.online.mean(),
                stddev: collector.online.stddev(),
            },
            None => StatResults::default(),
        }
    }
    /// CSV report with one line per key.
    pub fn as_csv(&self) -> String {
        let mut csv = "key,count,min,max,mean,stddev\n".to_string();
        for key in self.keys() {
            csv.push_str(&format!("{},{:?}\n", key, self.results(key)));
        }
        csv
    }
}

impl fmt::Debug for StatResults {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{},{},{},{:.3},{:.3}",
            self.len, self.min, self.max, self.mean, self.stddev
        )
    }
}

#[test]
fn usage() {
    let mut stats = Statistics::new();
    let key = Statistics::key(Measure::Lines, GridSystem::Mgrs, 10);
    assert_eq!(key, "lines.mgrs.10");
    stats.record(Measure::Lines, GridSystem::Mgrs, 10, 1);
    assert_eq!(stats.results(&key).mean, 1.0);
    stats.record(Measure::Lines, GridSystem::Mgrs, 10, 2);
    assert_eq!(stats.results(&key).mean, 1.5);
    stats.record(Measure::Labels, GridSystem::Mgrs, 10, 2);
    assert_eq!(stats.results("labels.mgrs.10").mean, 2.0);
    stats.record(Measure::Lines, GridSystem::Mgrs, 10, 3);
    let res = stats.results(&key);
    assert_eq!(res.mean, 2.0);
    assert_eq!(res.stddev, 0.816496580927726);
    assert_eq!((res.len, res.min, res.max), (3, 1, 3));

    assert!(stats.results("lines.mgrs.11") == StatResults::default());
    assert_eq!(stats.keys().count(), 2);
}

#[test]
fn csv_report() {
    let mut stats = Statistics::new();
    stats.add("lines.dd.2".to_string(), 4);
    stats.add("lines.dd.2".to_string(), 6);
    stats.record(Measure::RenderTime, GridSystem::DecimalDegrees, 2, 10);
    assert_eq!(
        stats.as_csv(),
        "key,count,min,max,mean,stddev\nlines.dd.2,2,4,6,5.000,1.000\nrender_us.dd.2,1,10,10,10.000,0.000\n"
    );
}
