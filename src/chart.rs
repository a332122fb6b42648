// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use plotters::prelude::*;

use crate::curves::Curve;
use crate::scales::MultipleCoord;

use std::error::Error;
use std::ffi::OsStr;
use std::fs;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            (($colour & 0x0000FF) >> 0) as u8,
        )
    };
}

// red, blue, green, orange, magenta, black, yellow
const COLOURS: &[RGBColor] = &[
    hexcolour!(0xFF0000),
    hexcolour!(0x0000FF),
    hexcolour!(0x008000),
    hexcolour!(0xFFA500),
    hexcolour!(0xFF00FF),
    hexcolour!(0x000000),
    hexcolour!(0xFFFF00),
];

// 20x5 units at 100dpi
const CANVAS_SIZE: (u32, u32) = (2000, 500);

/// X-bounds across all curves, [0, 1] when there are no x-values.
pub fn x_bounds(curves: &[Curve]) -> (f64, f64) {
    let mut min = std::f64::INFINITY;
    let mut max = std::f64::NEG_INFINITY;

    for curve in curves {
        for &x in curve.x() {
            min = min.min(x);
            max = max.max(x);
        }
    }

    if min > max {
        (0.0, 1.0)
    } else {
        (min, max)
    }
}

fn y_bounds(curves: &[Curve]) -> (f64, f64) {
    let mut min = std::f64::INFINITY;
    let mut max = std::f64::NEG_INFINITY;

    for curve in curves {
        for &y in curve.y() {
            min = min.min(y);
            max = max.max(y);
        }
    }

    if min > max {
        (0.0, 1.0)
    } else if min == max {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}

/// Major tick interval for an x-range: one tick every `range / 40` x-units,
/// floored, but never closer than every 2 units.
pub fn tick_interval(range: f64) -> f64 {
    (range / 40.0).floor().max(2.0)
}

/// Draws every curve on a single set of axes and writes the chart to
/// `filename`, creating missing parent directories first.
pub fn render(
    curves: &[Curve],
    x_label: &str,
    y_label: &str,
    title: &str,
    filename: impl AsRef<OsStr>,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = std::path::Path::new(filename.as_ref()).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let (min_x, max_x) = x_bounds(curves);
    let (min_y, max_y) = y_bounds(curves);
    let interval = tick_interval(max_x - min_x);
    let ticks = ((max_x - min_x) / interval) as usize + 1;

    let root = BitMapBackend::new(filename.as_ref(), CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 100)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_ranged(MultipleCoord::new(min_x, max_x, interval), min_y..max_y)?;

    chart
        .configure_mesh()
        .x_labels(ticks)
        .y_desc(y_label)
        .x_desc(x_label)
        .x_label_style(("sans-serif", 20))
        .y_label_style(("sans-serif", 20))
        .draw()?;

    for (i, curve) in curves.iter().enumerate() {
        let colour = i % COLOURS.len();
        chart
            .draw_series(LineSeries::new(
                curve.points(),
                COLOURS[colour].stroke_width(2),
            ))?
            .label(curve.label())
            .legend(move |(x, y)| Path::new(vec![(x, y), (x + 20, y)], &COLOURS[colour]));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.filled())
        .draw()?;

    Ok(())
}
