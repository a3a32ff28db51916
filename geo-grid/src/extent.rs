//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Viewports and extents

use std::f64::consts;

/// Projected extent
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    pub fn center(&self) -> (f64, f64) {
        (
            (self.minx + self.maxx) / 2.0,
            (self.miny + self.maxy) / 2.0,
        )
    }
}

/// Geodetic point in decimal degrees
#[derive(PartialEq, Clone, Copy, Debug, Default, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> LatLng {
        LatLng { lat, lng }
    }
}

/// Geodetic bounds in decimal degrees
#[derive(PartialEq, Clone, Copy, Debug, Serialize)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> LatLngBounds {
        LatLngBounds {
            south,
            west,
            north,
            east,
        }
    }
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
    pub fn lng_span(&self) -> f64 {
        (self.east - self.west).abs()
    }
    pub fn lat_span(&self) -> f64 {
        (self.north - self.south).abs()
    }
    /// Bounds extended by `ratio` of their size in each direction.
    /// Negative ratios shrink the bounds.
    pub fn pad(&self, ratio: f64) -> LatLngBounds {
        let lat_buffer = self.lat_span() * ratio;
        let lng_buffer = self.lng_span() * ratio;
        LatLngBounds {
            south: self.south - lat_buffer,
            west: self.west - lng_buffer,
            north: self.north + lat_buffer,
            east: self.east + lng_buffer,
        }
    }
    pub fn contains(&self, pt: &LatLng) -> bool {
        pt.lat >= self.south && pt.lat <= self.north && pt.lng >= self.west && pt.lng <= self.east
    }
    /// Bounds restricted to the latitude band `[min_lat, max_lat]`.
    /// Returns `None` if nothing of the bounds is left.
    pub fn clamp_lat(&self, min_lat: f64, max_lat: f64) -> Option<LatLngBounds> {
        let south = self.south.max(min_lat);
        let north = self.north.min(max_lat);
        if south >= north {
            return None;
        }
        Some(LatLngBounds {
            south,
            west: self.west,
            north,
            east: self.east,
        })
    }
}

/// Map viewport as seen by the host widget.
///
/// A viewport is a plain value: every redraw works on its own copy.
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct Viewport {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
    pub zoom: u8,
    pub center: LatLng,
    /// Width of the map in pixels
    pub width: u32,
    /// Height of the map in pixels
    pub height: u32,
}

/// Size of a Web Mercator tile in pixels
const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the Web Mercator world square
pub const MAX_MERCATOR_LAT: f64 = 85.0511287798;

impl Viewport {
    /// Viewport from its bounds. The center is the middle of the bounds.
    pub fn new(south: f64, west: f64, north: f64, east: f64, zoom: u8) -> Viewport {
        Viewport {
            south,
            west,
            north,
            east,
            zoom,
            center: LatLng::new((south + north) / 2.0, (west + east) / 2.0),
            width: 0,
            height: 0,
        }
    }
    pub fn with_size(mut self, width: u32, height: u32) -> Viewport {
        self.width = width;
        self.height = height;
        self
    }
    /// Viewport of a `width` x `height` pixel map centered at `center`,
    /// using Web Mercator tile pixel math.
    pub fn from_center(center: LatLng, zoom: u8, width: u32, height: u32) -> Viewport {
        let world = TILE_SIZE * (zoom as f64).exp2();
        let lat = center.lat.max(-MAX_MERCATOR_LAT).min(MAX_MERCATOR_LAT);
        let x = (center.lng + 180.0) / 360.0 * world;
        let y = (1.0 - lat.to_radians().tan().asinh() / consts::PI) / 2.0 * world;
        let half_w = width as f64 / 2.0;
        let half_h = height as f64 / 2.0;
        let pixel_lng = |px: f64| px / world * 360.0 - 180.0;
        let pixel_lat = |py: f64| {
            let py = py.max(0.0).min(world);
            (consts::PI * (1.0 - 2.0 * py / world))
                .sinh()
                .atan()
                .to_degrees()
        };
        Viewport {
            south: pixel_lat(y + half_h),
            west: pixel_lng(x - half_w),
            north: pixel_lat(y - half_h),
            east: pixel_lng(x + half_w),
            zoom,
            center,
            width,
            height,
        }
    }
    pub fn bounds(&self) -> LatLngBounds {
        LatLngBounds::new(self.south, self.west, self.north, self.east)
    }
    /// Longitude span of the viewport in degrees
    pub fn lng_span(&self) -> f64 {
        self.bounds().lng_span()
    }
}
