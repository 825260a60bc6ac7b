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

//! Structured error types for the AlgoBench CLI.
//!
//! Every command returns `Result<T, CliError>`; `main` prints the error and
//! exits with a failure status.

use algobench_core::BenchError;
use algobench_export::ExportError;
use algobench_web::ServerError;
use std::io;
use thiserror::Error;

/// The main error type for CLI operations.
///
/// # Examples
///
/// ```
/// use algobench_cli::error::CliError;
///
/// let err = CliError::invalid_argument("sizes", "must not be empty");
/// assert_eq!(err.to_string(), "Invalid argument 'sizes': must not be empty");
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// A benchmark could not be run.
    #[error(transparent)]
    Bench(#[from] BenchError),

    /// Results could not be exported.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// The web server failed.
    #[error(transparent)]
    Server(#[from] ServerError),

    /// Terminal or runtime I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A command-line value was rejected.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Argument name
        name: String,
        /// Why it was rejected
        reason: String,
    },
}

impl CliError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_error_is_transparent() {
        let err = CliError::from(BenchError::unknown_algorithm("bogo_sort"));
        assert_eq!(err.to_string(), "unknown algorithm: bogo_sort");
    }

    #[test]
    fn test_export_error_is_transparent() {
        let err = CliError::from(ExportError::NoResults);
        assert_eq!(err.to_string(), "no results to export");
    }
}
