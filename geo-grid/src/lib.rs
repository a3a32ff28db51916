//! A library for coordinate reference grid calculations
//!
//! ## UTM and MGRS
//!
//! ```rust
//! use geo_grid::{ll_to_mgrs, ll_to_utm, utm_to_ll};
//!
//! let pt = ll_to_utm(0.0, 3.0).unwrap();
//! assert_eq!(pt.zone_number, 31);
//! assert_eq!(pt.zone_letter, 'N');
//! let ll = utm_to_ll(&pt);
//! assert!((ll.lng - 3.0).abs() < 1e-9);
//!
//! assert!(ll_to_mgrs(38.8895, -77.0352, 1).unwrap().starts_with("18SUJ"));
//! ```
//!
//! ## Spherical Mercator
//!
//! ```rust
//! use geo_grid::{ll_to_spherical_mercator, spherical_mercator_to_ll};
//!
//! let (x, y) = ll_to_spherical_mercator(46.95, 7.45);
//! let ll = spherical_mercator_to_ll(x, y);
//! assert!((ll.lat - 46.95).abs() < 1e-9);
//! ```
//!
//! ## Viewports
//!
//! ```rust
//! use geo_grid::{LatLng, Viewport};
//!
//! let viewport = Viewport::from_center(LatLng::new(0.0, 0.0), 0, 256, 256);
//! assert_eq!(viewport.lng_span(), 360.0);
//! ```

#[macro_use]
extern crate serde_derive;

mod error;
mod extent;
pub mod mgrs;
mod projection;
pub mod zones;
#[cfg(test)]
mod projection_test;

pub use error::GridError;
pub use extent::{Extent, LatLng, LatLngBounds, Viewport, MAX_MERCATOR_LAT};
pub use mgrs::ll_to_mgrs;
pub use projection::{
    bounds_ll_to_sm, central_meridian, ll_to_spherical_mercator, ll_to_utm, ll_to_utm_in_zone,
    meters_per_pixel, spherical_mercator_to_ll, utm_to_ll, utm_to_ll_near, zone_letter,
    Hemisphere, ProjectedPoint, EARTH_RADIUS, UTM_MAX_LAT, UTM_MIN_LAT, WGS84_A,
};
