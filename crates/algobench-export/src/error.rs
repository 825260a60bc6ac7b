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

//! Error types for result export.

use thiserror::Error;

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Export error types.
///
/// # Examples
///
/// ```
/// use algobench_export::ExportError;
///
/// let err = ExportError::Io {
///     path: "out/results.csv".to_string(),
///     message: "permission denied".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "failed to write 'out/results.csv': permission denied"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output file could not be created or written.
    #[error("failed to write '{path}': {message}")]
    Io {
        /// Target path.
        path: String,
        /// Underlying I/O error message.
        message: String,
    },

    /// Error from the CSV writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// There is nothing to export.
    #[error("no results to export")]
    NoResults,
}

impl ExportError {
    /// Create an I/O error for `path`.
    pub fn io(path: impl AsRef<std::path::Path>, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_results_display() {
        assert_eq!(ExportError::NoResults.to_string(), "no results to export");
    }

    #[test]
    fn test_io_error_display() {
        let err = ExportError::io("/nope/out.md", "No such file or directory");
        assert_eq!(
            err.to_string(),
            "failed to write '/nope/out.md': No such file or directory"
        );
    }
}
