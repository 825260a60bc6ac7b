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

//! Markdown export.

use crate::error::{ExportError, Result};
use crate::format::{format_bytes, format_duration};
use algobench_core::BenchmarkResult;
use chrono::{DateTime, Local, TimeZone};
use std::fs;
use std::path::Path;

/// Renders `results` as a Markdown report stamped with `generated_at`.
///
/// The report holds a summary table of every result followed by one detail
/// table per algorithm, in the order algorithms first appear.
pub fn render_markdown<Tz: TimeZone>(
    results: &[BenchmarkResult],
    generated_at: &DateTime<Tz>,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut md = String::with_capacity(256 + results.len() * 160);

    md.push_str("# Algorithm Benchmark Results\n\n");
    md.push_str(&format!(
        "Generated on: {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    md.push_str("## Summary\n\n");
    md.push_str(
        "| Algorithm | Array Type | Size | Mean Duration | Std Deviation | Memory Used | Runs |\n",
    );
    md.push_str(
        "|-----------|------------|------|---------------|---------------|-------------|------|\n",
    );

    for result in results {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            result.algorithm,
            result.array_type,
            result.size,
            format_duration(result.mean_duration),
            format_duration(result.std_deviation),
            format_bytes(result.memory_used),
            result.runs
        ));
    }

    md.push_str("\n## Detailed Results\n\n");

    for algorithm in unique_algorithms(results) {
        md.push_str(&format!("### {}\n\n", algorithm));
        md.push_str("| Array Type | Size | Mean | Std Dev | Min | Max | Memory |\n");
        md.push_str("|------------|------|------|---------|-----|-----|--------|\n");

        for result in results.iter().filter(|r| r.algorithm == algorithm) {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                result.array_type,
                result.size,
                format_duration(result.mean_duration),
                format_duration(result.std_deviation),
                format_duration(result.min_duration),
                format_duration(result.max_duration),
                format_bytes(result.memory_used)
            ));
        }
        md.push('\n');
    }

    md
}

/// Writes a Markdown report to the file at `path`, stamped with the local
/// time.
pub fn export_markdown(results: &[BenchmarkResult], path: impl AsRef<Path>) -> Result<()> {
    if results.is_empty() {
        return Err(ExportError::NoResults);
    }

    let path = path.as_ref();
    let content = render_markdown(results, &Local::now());
    fs::write(path, content).map_err(|e| ExportError::io(path, e))
}

fn unique_algorithms(results: &[BenchmarkResult]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for result in results {
        if !seen.contains(&result.algorithm.as_str()) {
            seen.push(&result.algorithm);
        }
    }
    seen
}
