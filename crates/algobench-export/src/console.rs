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

//! Console reporter for benchmark results.

use crate::format::{format_bytes, format_duration};
use algobench_core::BenchmarkResult;
use colored::Colorize;
use std::io::{self, Write};

/// Writes a block report of `results` to `out`.
pub fn write_results<W: Write + ?Sized>(
    results: &[BenchmarkResult],
    out: &mut W,
) -> io::Result<()> {
    if results.is_empty() {
        writeln!(out, "No results to display.")?;
        return Ok(());
    }

    writeln!(out, "\n{}", "=".repeat(80))?;
    writeln!(out, "{}", "BENCHMARK RESULTS".bold())?;
    writeln!(out, "{}", "=".repeat(80))?;

    for result in results {
        writeln!(out, "\nAlgorithm: {}", result.algorithm.cyan().bold())?;
        writeln!(out, "Array Type: {}", result.array_type)?;
        writeln!(out, "Size: {}", result.size)?;
        writeln!(out, "Runs: {}", result.runs)?;
        writeln!(out, "Mean Duration: {}", format_duration(result.mean_duration))?;
        writeln!(out, "Std Deviation: {}", format_duration(result.std_deviation))?;
        writeln!(out, "Min Duration: {}", format_duration(result.min_duration))?;
        writeln!(out, "Max Duration: {}", format_duration(result.max_duration))?;
        writeln!(out, "Memory Used: {}", format_bytes(result.memory_used))?;
        writeln!(out, "{}", "-".repeat(40))?;
    }

    Ok(())
}
