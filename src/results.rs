// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde_derive::*;
use serde_json::Value as JsonValue;
use thiserror::Error;

use std::fs;
use std::path::{Path, PathBuf};

/// One snapshot: a mapping from column name to measured value.
pub type Snapshot = serde_json::Map<String, JsonValue>;

#[derive(Debug, Error)]
pub enum ResultError {
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
    #[error("failed to read result file '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse result file '{}': {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("column '{column}' missing from snapshot {index}")]
    MissingColumn { column: String, index: usize },
    #[error("column '{column}' has a non-numeric value in snapshot {index}")]
    NonNumeric { column: String, index: usize },
}

/// The decoded content of one benchmark result file. Only the `snapshots`
/// field is interpreted; any other keys are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct BenchResult {
    snapshots: Vec<Snapshot>,
}

impl BenchResult {
    /// the ordered values of the named column across all snapshots
    pub fn column(&self, name: &str) -> Result<Vec<f64>, ResultError> {
        let mut values = Vec::with_capacity(self.snapshots.len());

        for (index, snapshot) in self.snapshots.iter().enumerate() {
            let value = snapshot
                .get(name)
                .ok_or_else(|| ResultError::MissingColumn {
                    column: name.to_string(),
                    index,
                })?;
            let value = value.as_f64().ok_or_else(|| ResultError::NonNumeric {
                column: name.to_string(),
                index,
            })?;
            values.push(value);
        }

        Ok(values)
    }
}

/// A result document together with the path it was loaded from.
#[derive(Clone, Debug)]
pub struct ResultFile {
    path: PathBuf,
    result: BenchResult,
}

impl ResultFile {
    pub fn new(path: PathBuf, result: BenchResult) -> ResultFile {
        ResultFile { path, result }
    }

    /// read and decode a single result file
    pub fn load(path: &Path) -> Result<ResultFile, ResultError> {
        let content = fs::read_to_string(path).map_err(|source| ResultError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let result = serde_json::from_str(&content).map_err(|source| ResultError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(ResultFile::new(path.to_path_buf(), result))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn column(&self, name: &str) -> Result<Vec<f64>, ResultError> {
        self.result.column(name)
    }

    /// the file stem with underscores replaced by spaces, used to label
    /// curves
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().replace('_', " "))
            .unwrap_or_default()
    }
}

/// Expands each glob pattern and loads every matching file, in pattern order
/// and alphabetical order within a pattern. A file which vanishes between
/// expansion and read is skipped with a warning; anything else that fails
/// aborts the load.
pub fn load_results(patterns: &[String]) -> Result<Vec<ResultFile>, ResultError> {
    let mut results = Vec::new();

    for pattern in patterns {
        let paths = glob::glob(pattern).map_err(|source| ResultError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        for entry in paths {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!("skipping unreadable path: {}", e);
                    continue;
                }
            };

            // the file can vanish between expansion and read
            if !path.exists() {
                warn!("result file '{}' does not exist, skipping", path.display());
                continue;
            }

            results.push(ResultFile::load(&path)?);
        }
    }

    Ok(results)
}

/// arithmetic mean of a sequence, 0 for an empty sequence
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
