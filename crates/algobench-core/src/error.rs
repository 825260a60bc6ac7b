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

//! Error types for benchmark operations.
//!
//! Every failure of the measurement engine is reported through [`BenchError`].
//! Errors are terminal for the call that raised them: nothing is retried and
//! no partial result is stored.

use thiserror::Error;

/// Hard upper bound on generated input size (100 million elements).
///
/// Guards against a misconfigured request exhausting memory before the first
/// trial even starts. Can be lowered at runtime through
/// `ALGOBENCH_MAX_INPUT_SIZE`, see [`max_input_size`].
pub const MAX_INPUT_SIZE: usize = 100_000_000;

/// Environment variable overriding [`MAX_INPUT_SIZE`].
pub const MAX_INPUT_SIZE_ENV: &str = "ALGOBENCH_MAX_INPUT_SIZE";

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while measuring an algorithm.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// The configured algorithm is not registered.
    #[error("unknown algorithm: {name}")]
    UnknownAlgorithm {
        /// The offending algorithm identifier
        name: String,
    },

    /// Invalid configuration parameter.
    #[error("invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Requested input size exceeds the configured limit.
    #[error("input size {requested} exceeds maximum allowed limit of {max}")]
    InputTooLarge {
        /// Requested size
        requested: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// A sort algorithm returned something other than the sorted input.
    #[error("sorting verification failed for {algorithm}")]
    VerificationFailed {
        /// Algorithm whose output was rejected
        algorithm: String,
    },

    /// A sweep stopped at its first failing combination.
    #[error("benchmark failed for {algorithm}: {source}")]
    SweepFailed {
        /// Algorithm that was running when the sweep stopped
        algorithm: String,
        /// The underlying failure
        #[source]
        source: Box<BenchError>,
    },
}

impl BenchError {
    /// Create an unknown-algorithm error.
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm { name: name.into() }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an error raised inside a sweep with the algorithm that caused it.
    pub fn sweep(algorithm: impl Into<String>, source: BenchError) -> Self {
        Self::SweepFailed {
            algorithm: algorithm.into(),
            source: Box::new(source),
        }
    }

    /// Returns `true` when the error stems from the caller's configuration
    /// rather than from a measurement.
    ///
    /// Sweep errors are classified by their innermost cause.
    pub fn is_config_error(&self) -> bool {
        match self {
            BenchError::UnknownAlgorithm { .. }
            | BenchError::InvalidConfig { .. }
            | BenchError::InputTooLarge { .. } => true,
            BenchError::VerificationFailed { .. } => false,
            BenchError::SweepFailed { source, .. } => source.is_config_error(),
        }
    }
}

/// Returns the effective maximum input size.
///
/// Reads [`MAX_INPUT_SIZE_ENV`]; falls back to [`MAX_INPUT_SIZE`] when the
/// variable is unset or unparsable.
pub fn max_input_size() -> usize {
    std::env::var(MAX_INPUT_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(MAX_INPUT_SIZE)
}

/// Validate that an input size is within acceptable limits
///
/// # Examples
///
/// ```
/// use algobench_core::error::{validate_input_size, MAX_INPUT_SIZE};
///
/// assert!(validate_input_size(1000, MAX_INPUT_SIZE).is_ok());
/// assert!(validate_input_size(MAX_INPUT_SIZE + 1, MAX_INPUT_SIZE).is_err());
/// ```
#[inline]
pub fn validate_input_size(size: usize, max: usize) -> Result<()> {
    if size > max {
        Err(BenchError::InputTooLarge {
            requested: size,
            max,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input_size() {
        assert!(validate_input_size(0, MAX_INPUT_SIZE).is_ok());
        assert!(validate_input_size(MAX_INPUT_SIZE, MAX_INPUT_SIZE).is_ok());

        match validate_input_size(11, 10) {
            Err(BenchError::InputTooLarge { requested, max }) => {
                assert_eq!(requested, 11);
                assert_eq!(max, 10);
            }
            other => panic!("Expected InputTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_error_display() {
        let err = BenchError::unknown_algorithm("bogo_sort");
        assert_eq!(err.to_string(), "unknown algorithm: bogo_sort");

        let err = BenchError::VerificationFailed {
            algorithm: "heap_sort".to_string(),
        };
        assert_eq!(err.to_string(), "sorting verification failed for heap_sort");

        let err = BenchError::invalid_config("runs", "must be at least 1");
        assert!(err.to_string().contains("runs"));
        assert!(err.to_string().contains("must be at least 1"));
    }

    #[test]
    fn test_sweep_error_wraps_source() {
        let err = BenchError::sweep("merge_sort", BenchError::unknown_algorithm("merge_sort"));
        assert_eq!(
            err.to_string(),
            "benchmark failed for merge_sort: unknown algorithm: merge_sort"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_config_error_classification() {
        assert!(BenchError::unknown_algorithm("x").is_config_error());
        assert!(BenchError::invalid_config("runs", "zero").is_config_error());
        assert!(!BenchError::VerificationFailed {
            algorithm: "x".into()
        }
        .is_config_error());

        let wrapped = BenchError::sweep(
            "bubble_sort",
            BenchError::VerificationFailed {
                algorithm: "bubble_sort".into(),
            },
        );
        assert!(!wrapped.is_config_error());
    }
}
