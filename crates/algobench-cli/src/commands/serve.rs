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

//! Serve command - start the HTTP API

use crate::commands::new_engine;
use crate::error::CliError;
use algobench_web::{AppState, ServerConfig};
use colored::Colorize;

/// Start the web API on `host:port` and block until it stops.
pub fn serve(host: String, port: u16, seed: Option<u64>) -> Result<(), CliError> {
    let config = ServerConfig::default().with_host(host).with_port(port);
    let state = AppState::new(new_engine(seed));

    println!(
        "{} Starting web server on {}",
        "▸".green(),
        format!("http://{}", config.address()).cyan().underline()
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(algobench_web::serve(&config, state))?;
    Ok(())
}
