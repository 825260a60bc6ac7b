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

//! CLI command definitions and argument parsing.
//!
//! Commands are split into two categories that are flattened into one
//! top-level list:
//!
//! - [`BenchCommands`]: one-shot benchmarking (run, list)
//! - [`ModeCommands`]: long-running front ends (interactive, serve)

mod bench;
mod modes;

use crate::error::CliError;
use clap::Subcommand;

pub use bench::BenchCommands;
pub use modes::ModeCommands;

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Bench (run, list)
/// └── Mode (interactive, serve)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Benchmark commands - flattened to appear at top level
    #[command(flatten)]
    Bench(BenchCommands),

    // Front-end modes - flattened to appear at top level
    #[command(flatten)]
    Mode(ModeCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a benchmark fails, an export cannot be written, or the
    /// server cannot start.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Bench(cmd) => cmd.execute(),
            Commands::Mode(cmd) => cmd.execute(),
        }
    }
}
