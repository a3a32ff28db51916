//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod grid_service;
#[cfg(test)]
mod grid_service_test;
mod runtime_config;

pub use grid_service::{GridService, Redraw, RedrawTrigger, ViewEvent};
pub use runtime_config::{config_from_args, gen_config, service_from_args, viewport_from_args};
