// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::{App, Arg, ArgMatches};
use logger::Level;

use std::process;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The resolved run parameters. Constructed once from the command line and
/// immutable afterwards.
#[derive(Clone, Debug)]
pub struct Config {
    files: Vec<String>,
    x_column: String,
    x_label: String,
    y_columns: Vec<String>,
    y_scales: Vec<f64>,
    y_label: String,
    title: String,
    output: String,
    logging: Level,
}

fn app() -> App<'static, 'static> {
    App::new(NAME)
        .version(VERSION)
        .author("Brian Martin <bmartin@twitter.com>")
        .about("Plots benchmark result curves")
        .arg(
            Arg::with_name("files")
                .long("files")
                .value_name("GLOB")
                .help("Result files to plot, as one or more glob patterns")
                .multiple(true)
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("x-column")
                .long("x-column")
                .value_name("NAME")
                .help("Snapshot column providing the x-values")
                .takes_value(true)
                .default_value("elapsed_time"),
        )
        .arg(
            Arg::with_name("x-label")
                .long("x-label")
                .value_name("TEXT")
                .help("X-axis label, defaults to the x-column name")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("y-column")
                .long("y-column")
                .value_name("NAME")
                .help("Snapshot columns to plot, one curve per result and column")
                .multiple(true)
                .takes_value(true)
                .default_value("total_out"),
        )
        .arg(
            Arg::with_name("y-scale")
                .long("y-scale")
                .value_name("FLOAT")
                .help("Divisor applied to each y-column, one per y-column")
                .multiple(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("y-label")
                .long("y-label")
                .value_name("TEXT")
                .help("Y-axis label, defaults to the sole y-column name")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("title")
                .long("title")
                .value_name("TEXT")
                .help("Chart title")
                .takes_value(true)
                .default_value("Benchmark result"),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .value_name("FILE")
                .help("Where to write the chart, missing parent directories are created")
                .takes_value(true)
                .default_value("benchmark.png"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Increase verbosity by one level. Can be used more than once")
                .multiple(true),
        )
}

impl Config {
    /// parse command line options and return `Config`
    pub fn new() -> Config {
        let matches = app().get_matches();
        Config::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Config {
        let files: Vec<String> = matches
            .values_of("files")
            .unwrap()
            .map(|v| v.to_string())
            .collect();

        let x_column = matches.value_of("x-column").unwrap().to_string();
        let x_label = matches
            .value_of("x-label")
            .unwrap_or(&x_column)
            .to_string();

        let y_columns: Vec<String> = matches
            .values_of("y-column")
            .unwrap()
            .map(|v| v.to_string())
            .collect();

        let y_scales = if matches.is_present("y-scale") {
            let scales: Vec<f64> = matches
                .values_of("y-scale")
                .unwrap()
                .map(|v| parse_float(v, "y-scale"))
                .collect();
            if scales.len() != y_columns.len() {
                println!(
                    "ERROR: {} y-scale values given for {} y-columns",
                    scales.len(),
                    y_columns.len()
                );
                process::exit(1);
            }
            scales
        } else {
            vec![1.0; y_columns.len()]
        };

        let y_label = match matches.value_of("y-label") {
            Some(label) => label.to_string(),
            None => {
                if y_columns.len() == 1 {
                    y_columns[0].clone()
                } else {
                    "Value".to_string()
                }
            }
        };

        let title = matches.value_of("title").unwrap().to_string();
        let output = matches.value_of("output").unwrap().to_string();

        let logging = match matches.occurrences_of("verbose") {
            0 => Level::Info,
            1 => Level::Debug,
            _ => Level::Trace,
        };

        Config {
            files,
            x_column,
            x_label,
            y_columns,
            y_scales,
            y_label,
            title,
            output,
            logging,
        }
    }

    /// the glob patterns naming the result files to plot
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn x_column(&self) -> &str {
        &self.x_column
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_columns(&self) -> &[String] {
        &self.y_columns
    }

    /// one divisor per y-column, in y-column order
    pub fn y_scales(&self) -> &[f64] {
        &self.y_scales
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// get logging level
    pub fn logging(&self) -> Level {
        self.logging
    }

    pub fn print(&self) {
        info!("-----");
        info!("Config: Files: {}", self.files.join(" "));
        info!(
            "Config: X-Column: {} X-Label: {}",
            self.x_column, self.x_label
        );
        info!(
            "Config: Y-Columns: {} Y-Scales: {:?} Y-Label: {}",
            self.y_columns.join(" "),
            self.y_scales,
            self.y_label
        );
        info!("Config: Title: {} Output: {}", self.title, self.output);
    }
}

/// a helper function to parse a floating point value from the command line
fn parse_float(value: &str, key: &str) -> f64 {
    value.parse().unwrap_or_else(|_| {
        println!("ERROR: could not parse {}", key);
        process::exit(1);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(args: Vec<&str>) -> Config {
        let matches = app().get_matches_from_safe(args).unwrap();
        Config::from_matches(&matches)
    }

    #[test]
    fn files_are_required() {
        assert!(app().get_matches_from_safe(vec![NAME]).is_err());
    }

    #[test]
    fn defaults() {
        let config = resolve(vec![NAME, "--files", "a.json"]);
        assert_eq!(config.files(), &["a.json".to_string()]);
        assert_eq!(config.x_column(), "elapsed_time");
        assert_eq!(config.x_label(), "elapsed_time");
        assert_eq!(config.y_columns(), &["total_out".to_string()]);
        assert_eq!(config.y_scales(), &[1.0]);
        assert_eq!(config.y_label(), "total_out");
        assert_eq!(config.title(), "Benchmark result");
        assert_eq!(config.output(), "benchmark.png");
        assert_eq!(config.logging(), Level::Info);
    }

    #[test]
    fn x_label_follows_x_column() {
        let config = resolve(vec![NAME, "--files", "a.json", "--x-column", "step"]);
        assert_eq!(config.x_label(), "step");
    }

    #[test]
    fn y_label_defaults_to_sole_column() {
        let config = resolve(vec![NAME, "--files", "a.json", "--y-column", "avg_in"]);
        assert_eq!(config.y_label(), "avg_in");
    }

    #[test]
    fn y_label_defaults_to_generic_with_multiple_columns() {
        let config = resolve(vec![
            NAME, "--files", "a.json", "--y-column", "avg_in", "total_out",
        ]);
        assert_eq!(config.y_label(), "Value");
    }

    #[test]
    fn y_scales_default_to_one_per_column() {
        let config = resolve(vec![
            NAME, "--files", "a.json", "--y-column", "avg_in", "total_out",
        ]);
        assert_eq!(config.y_scales(), &[1.0, 1.0]);
    }

    #[test]
    fn y_scales_match_y_columns() {
        let config = resolve(vec![
            NAME, "--files", "a.json", "--y-column", "a", "b", "--y-scale", "2.0", "0.5",
        ]);
        assert_eq!(config.y_scales().len(), config.y_columns().len());
        assert_eq!(config.y_scales(), &[2.0, 0.5]);
    }

    #[test]
    fn verbosity_raises_the_level() {
        let config = resolve(vec![NAME, "--files", "a.json", "-v"]);
        assert_eq!(config.logging(), Level::Debug);
        let config = resolve(vec![NAME, "--files", "a.json", "-v", "-v"]);
        assert_eq!(config.logging(), Level::Trace);
    }
}
