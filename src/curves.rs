// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::results::{ResultError, ResultFile};

/// One plotted line: parallel x/y sequences and a legend label.
#[derive(Clone, Debug)]
pub struct Curve {
    label: String,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Curve {
    pub fn new(label: String, x: Vec<f64>, y: Vec<f64>) -> Curve {
        Curve { label, x, y }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// the (x, y) pairs in plot order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Builds one curve per (result, y-column) pair, result-major and
/// column-minor. Every y-value is divided by the matching scale factor.
/// Labels come from the loaded file stems, so a skipped file drops its
/// labels along with its curves.
pub fn build_curves(
    results: &[ResultFile],
    x_column: &str,
    y_columns: &[String],
    y_scales: &[f64],
) -> Result<Vec<Curve>, ResultError> {
    let mut curves = Vec::with_capacity(results.len() * y_columns.len());

    for result in results {
        let x = result.column(x_column)?;

        for (i, y_column) in y_columns.iter().enumerate() {
            let scale = y_scales[i];
            let y: Vec<f64> = result
                .column(y_column)?
                .iter()
                .map(|value| value / scale)
                .collect();

            let label = if y_columns.len() > 1 {
                format!("{} ({})", result.stem(), y_column)
            } else {
                result.stem()
            };

            curves.push(Curve::new(label, x.clone(), y));
        }
    }

    Ok(curves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::BenchResult;

    use std::path::PathBuf;

    fn result_file(name: &str, json: &str) -> ResultFile {
        let result: BenchResult = serde_json::from_str(json).unwrap();
        ResultFile::new(PathBuf::from(name), result)
    }

    #[test]
    fn scales_divide_y_values() {
        let file = result_file("a.json", r#"{"snapshots":[{"t":0,"v":10},{"t":1,"v":20}]}"#);
        let curves = build_curves(&[file], "t", &["v".to_string()], &[2.0]).unwrap();
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].x(), &[0.0, 1.0]);
        assert_eq!(curves[0].y(), &[5.0, 10.0]);
    }

    #[test]
    fn curves_are_result_major_column_minor() {
        let a = result_file("a.json", r#"{"snapshots":[{"t":0,"v1":1,"v2":2}]}"#);
        let b = result_file("b.json", r#"{"snapshots":[{"t":0,"v1":3,"v2":4}]}"#);
        let columns = vec!["v1".to_string(), "v2".to_string()];

        let curves = build_curves(&[a, b], "t", &columns, &[1.0, 1.0]).unwrap();
        assert_eq!(curves.len(), 4);

        let labels: Vec<&str> = curves.iter().map(|curve| curve.label()).collect();
        assert_eq!(labels, vec!["a (v1)", "a (v2)", "b (v1)", "b (v2)"]);
    }

    #[test]
    fn sole_column_labels_are_the_file_stem() {
        let file = result_file("bench_run_1.json", r#"{"snapshots":[{"t":0,"v":1}]}"#);
        let curves = build_curves(&[file], "t", &["v".to_string()], &[1.0]).unwrap();
        assert_eq!(curves[0].label(), "bench run 1");
    }

    #[test]
    fn missing_x_column_fails() {
        let file = result_file("a.json", r#"{"snapshots":[{"v":1}]}"#);
        assert!(build_curves(&[file], "t", &["v".to_string()], &[1.0]).is_err());
    }
}
