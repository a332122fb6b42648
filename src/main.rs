// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_use]
extern crate logger;

use benchgraph::{build_curves, load_results, render, Config};
use logger::Logger;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let config = Config::new();

    Logger::new()
        .label("benchgraph")
        .level(config.logging())
        .init()
        .expect("Failed to initialize logger");

    info!("benchgraph {} initializing...", VERSION);
    config.print();

    let results =
        load_results(config.files()).unwrap_or_else(|e| fatal!("failed to load results: {}", e));
    debug!("loaded {} result file(s)", results.len());

    let curves = build_curves(
        &results,
        config.x_column(),
        config.y_columns(),
        config.y_scales(),
    )
    .unwrap_or_else(|e| fatal!("failed to extract curves: {}", e));
    debug!("extracted {} curve(s)", curves.len());

    render(
        &curves,
        config.x_label(),
        config.y_label(),
        config.title(),
        config.output(),
    )
    .unwrap_or_else(|e| fatal!("failed to render chart: {}", e));

    info!("chart written to {}", config.output());
}
