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

//! Run command - benchmark one algorithm or all of them

use crate::commands::new_engine;
use crate::error::CliError;
use algobench_core::{BenchmarkConfig, BenchmarkEngine, Distribution};
use algobench_export::{export_csv, export_markdown, write_results};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Parsed arguments of the `run` command.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Algorithm identifier or `all`.
    pub algorithm: String,
    /// Distribution tag.
    pub array_type: String,
    /// Input size for a single algorithm.
    pub size: usize,
    /// Trials per configuration.
    pub runs: usize,
    /// Sizes swept by `all`.
    pub sizes: Vec<usize>,
    /// Seed for reproducible inputs.
    pub seed: Option<u64>,
    /// CSV output path.
    pub export_csv: Option<PathBuf>,
    /// Markdown output path.
    pub export_md: Option<PathBuf>,
}

/// Run the benchmark described by `options`, print the results and export
/// them when requested.
///
/// Results gathered before a failure are still printed; exports are skipped.
///
/// # Errors
///
/// Returns `Err` if the array type is unknown, a benchmark fails, or an
/// export cannot be written.
pub fn run<W: Write>(options: &RunOptions, out: &mut W) -> Result<(), CliError> {
    let distribution: Distribution = options.array_type.parse()?;
    if options.algorithm == "all" && options.sizes.is_empty() {
        return Err(CliError::invalid_argument("sizes", "must not be empty"));
    }

    let mut engine = new_engine(options.seed);
    engine.clear_results();
    debug!(?options, "running benchmark command");

    let outcome = if options.algorithm == "all" {
        run_all(&mut engine, options, out)
    } else {
        run_single(&mut engine, options, distribution, out)
    };

    write_results(engine.results(), out)?;
    outcome?;

    if let Some(path) = &options.export_csv {
        export_csv(engine.results(), path)?;
        writeln!(out, "Results exported to {}", path.display())?;
    }

    if let Some(path) = &options.export_md {
        export_markdown(engine.results(), path)?;
        writeln!(out, "Results exported to {}", path.display())?;
    }

    Ok(())
}

fn run_single<W: Write>(
    engine: &mut BenchmarkEngine,
    options: &RunOptions,
    distribution: Distribution,
    out: &mut W,
) -> Result<(), CliError> {
    writeln!(
        out,
        "Running benchmark for {} with {} array of size {} ({} runs)...",
        options.algorithm,
        distribution.name(),
        options.size,
        options.runs
    )?;

    let config = BenchmarkConfig::new(options.algorithm.as_str())
        .with_distribution(distribution)
        .with_size(options.size)
        .with_runs(options.runs);
    engine.run_one(&config)?;

    writeln!(out, "Benchmark completed successfully!")?;
    Ok(())
}

fn run_all<W: Write>(
    engine: &mut BenchmarkEngine,
    options: &RunOptions,
    out: &mut W,
) -> Result<(), CliError> {
    writeln!(out, "Running all benchmarks...")?;

    writeln!(out, "Running search benchmarks...")?;
    engine.run_search_sweep(&options.sizes, options.runs)?;

    writeln!(out, "Running sort benchmarks...")?;
    engine.run_sort_sweep(&options.sizes, options.runs)?;

    Ok(())
}
