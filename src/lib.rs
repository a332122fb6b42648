// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(deprecated)]

#[macro_use]
extern crate logger;

mod chart;
mod config;
mod curves;
mod results;
mod scales;

pub use crate::chart::{render, tick_interval, x_bounds};
pub use crate::config::Config;
pub use crate::curves::{build_curves, Curve};
pub use crate::results::{load_results, mean, BenchResult, ResultError, ResultFile, Snapshot};
pub use crate::scales::MultipleCoord;
