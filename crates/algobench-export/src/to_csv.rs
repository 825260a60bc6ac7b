// AlgoBench - Search and Sort Algorithm Benchmarking
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

//! CSV export.
//!
//! One row per result, durations in integer nanoseconds.

use crate::error::{ExportError, Result};
use algobench_core::BenchmarkResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column headers, in output order.
pub const CSV_HEADER: [&str; 9] = [
    "Algorithm",
    "Array Type",
    "Size",
    "Mean Duration (ns)",
    "Std Deviation (ns)",
    "Min Duration (ns)",
    "Max Duration (ns)",
    "Memory Used (bytes)",
    "Runs",
];

/// Writes `results` as CSV to `writer`.
pub fn write_csv<W: Write>(results: &[BenchmarkResult], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for result in results {
        wtr.write_record([
            result.algorithm.clone(),
            result.array_type.clone(),
            result.size.to_string(),
            result.mean_duration.as_nanos().to_string(),
            result.std_deviation.as_nanos().to_string(),
            result.min_duration.as_nanos().to_string(),
            result.max_duration.as_nanos().to_string(),
            result.memory_used.to_string(),
            result.runs.to_string(),
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Renders `results` as a CSV string.
pub fn to_csv_string(results: &[BenchmarkResult]) -> Result<String> {
    let mut buffer = Vec::with_capacity(64 * (results.len() + 1));
    write_csv(results, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ExportError::io("<memory>", e))
}

/// Writes `results` as CSV to the file at `path`, replacing it.
///
/// Refuses to create a file when there is nothing to export.
pub fn export_csv(results: &[BenchmarkResult], path: impl AsRef<Path>) -> Result<()> {
    if results.is_empty() {
        return Err(ExportError::NoResults);
    }

    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    write_csv(results, file)
}
