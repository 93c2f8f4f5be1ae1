// Dweve MaxHeap - Instrumented Binary Max-Heap
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Append-only CSV export for benchmark runs.
//!
//! The file carries a single header line, written only when the file is
//! new or empty, followed by one row per run:
//!
//! ```text
//! algorithm,input_type,n,time_ns,comparisons,swaps
//! MaxHeap,random,1000,183250,15362,8791
//! ```

use crate::error::{BenchError, Result};
use crate::runner::RunRecord;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Column names of the results file.
pub const CSV_HEADER: [&str; 6] = [
    "algorithm",
    "input_type",
    "n",
    "time_ns",
    "comparisons",
    "swaps",
];

#[derive(Serialize)]
struct CsvRow<'a> {
    algorithm: &'a str,
    input_type: &'static str,
    n: usize,
    time_ns: u64,
    comparisons: u64,
    swaps: u64,
}

impl<'a> From<&'a RunRecord> for CsvRow<'a> {
    fn from(record: &'a RunRecord) -> Self {
        Self {
            algorithm: &record.algorithm,
            input_type: record.input_type.as_str(),
            n: record.n,
            time_ns: record.time_ns,
            comparisons: record.comparisons,
            swaps: record.swaps,
        }
    }
}

/// Appends run records to a CSV file.
#[derive(Debug, Clone)]
pub struct CsvReporter {
    path: PathBuf,
}

impl CsvReporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `records`, creating parent directories and the header line
    /// as needed.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Io`] if the file or its directories cannot be
    /// created, or [`BenchError::Csv`] if a row cannot be written.
    pub fn append(&self, records: &[RunRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| BenchError::io(parent, e))?;
        }

        let needs_header = fs::metadata(&self.path)
            .map(|meta| meta.len() == 0)
            .unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| BenchError::io(&self.path, e))?;

        let mut wtr = ::csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            debug!(path = %self.path.display(), "writing CSV header");
            wtr.write_record(CSV_HEADER)
                .map_err(|e| BenchError::csv(&self.path, e))?;
        }
        for record in records {
            wtr.serialize(CsvRow::from(record))
                .map_err(|e| BenchError::csv(&self.path, e))?;
        }
        wtr.flush().map_err(|e| BenchError::io(&self.path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::InputKind;
    use tempfile::TempDir;

    fn record(input_type: InputKind, n: usize) -> RunRecord {
        RunRecord {
            algorithm: "MaxHeap".to_string(),
            input_type,
            n,
            time_ns: 1_234,
            comparisons: 56,
            swaps: 7,
            array_accesses: 99,
            memory_allocations: 1,
        }
    }

    #[test]
    fn test_new_file_gets_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        CsvReporter::new(&path)
            .append(&[record(InputKind::Random, 10)])
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "algorithm,input_type,n,time_ns,comparisons,swaps",
                "MaxHeap,random,10,1234,56,7",
            ]
        );
    }

    #[test]
    fn test_header_written_once_across_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        let reporter = CsvReporter::new(&path);
        reporter.append(&[record(InputKind::Sorted, 1)]).unwrap();
        reporter
            .append(&[
                record(InputKind::NearlySorted, 2),
                record(InputKind::Reversed, 3),
            ])
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines.iter().filter(|l| l.starts_with("algorithm,")).count(), 1);
        assert_eq!(lines[2], "MaxHeap,nearly-sorted,2,1234,56,7");
    }

    #[test]
    fn test_empty_existing_file_gets_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        fs::write(&path, "").unwrap();
        CsvReporter::new(&path)
            .append(&[record(InputKind::Random, 5)])
            .unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("algorithm,input_type,n,time_ns,comparisons,swaps"));
    }

    #[test]
    fn test_parent_directories_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docs").join("performance-plots").join("results.csv");
        CsvReporter::new(&path)
            .append(&[record(InputKind::Random, 5)])
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_path_reports_io_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let err = CsvReporter::new(blocker.join("results.csv"))
            .append(&[record(InputKind::Random, 5)])
            .unwrap_err();
        assert!(matches!(err, BenchError::Io { .. }));
    }
}
