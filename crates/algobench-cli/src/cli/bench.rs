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

//! One-shot benchmark commands.

use crate::commands::{self, RunOptions};
use crate::error::CliError;
use algobench_core::DEFAULT_SIZES;
use clap::Subcommand;
use std::io;
use std::path::PathBuf;

/// Benchmark commands.
#[derive(Subcommand)]
pub enum BenchCommands {
    /// Benchmark one algorithm, or every algorithm with `--algorithm all`
    ///
    /// A single algorithm is measured against one generated array. `all`
    /// runs every search and sort algorithm over every array type and each
    /// of `--sizes`.
    Run {
        /// Algorithm to benchmark (see `list`), or `all`
        #[arg(short, long)]
        algorithm: String,

        /// Array type (random, sorted, reverse)
        #[arg(short = 't', long, default_value = "random")]
        array_type: String,

        /// Array size
        #[arg(short, long, default_value_t = 1000)]
        size: usize,

        /// Number of benchmark runs
        #[arg(short, long, default_value_t = 5)]
        runs: usize,

        /// Sizes swept by `--algorithm all`
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES.to_vec())]
        sizes: Vec<usize>,

        /// Seed for reproducible inputs
        #[arg(long)]
        seed: Option<u64>,

        /// Export results to a CSV file
        #[arg(long, value_name = "FILE")]
        export_csv: Option<PathBuf>,

        /// Export results to a Markdown file
        #[arg(long, value_name = "FILE")]
        export_md: Option<PathBuf>,
    },

    /// List available algorithms
    List,
}

impl BenchCommands {
    /// Execute the benchmark command.
    pub fn execute(self) -> Result<(), CliError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self {
            BenchCommands::Run {
                algorithm,
                array_type,
                size,
                runs,
                sizes,
                seed,
                export_csv,
                export_md,
            } => {
                let options = RunOptions {
                    algorithm,
                    array_type,
                    size,
                    runs,
                    sizes,
                    seed,
                    export_csv,
                    export_md,
                };
                commands::run(&options, &mut out)
            }
            BenchCommands::List => commands::list(&mut out),
        }
    }
}
