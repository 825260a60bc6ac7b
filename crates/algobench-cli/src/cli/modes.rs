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

//! Long-running front ends.

use crate::commands;
use crate::error::CliError;
use algobench_core::DEFAULT_SIZES;
use clap::Subcommand;

/// Front-end commands.
#[derive(Subcommand)]
pub enum ModeCommands {
    /// Run the interactive menu
    Interactive {
        /// Sizes swept by the multi-algorithm menu entries
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES.to_vec())]
        sizes: Vec<usize>,

        /// Seed for reproducible inputs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Start the HTTP API
    Serve {
        /// Interface to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 8080)]
        port: u16,

        /// Seed for reproducible inputs
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl ModeCommands {
    /// Execute the mode command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ModeCommands::Interactive { sizes, seed } => commands::interactive(sizes, seed),
            ModeCommands::Serve { host, port, seed } => commands::serve(host, port, seed),
        }
    }
}
