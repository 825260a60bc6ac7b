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

//! Benchmark configuration.
//!
//! A [`BenchmarkConfig`] names one algorithm and the input it is measured
//! against. It is built once with the `with_*` methods and never mutated
//! afterwards.

use crate::distribution::Distribution;
use crate::error::{BenchError, Result};

/// Input sizes swept by the comprehensive benchmark.
pub const DEFAULT_SIZES: &[usize] = &[1_000, 10_000, 100_000, 1_000_000];

/// Default input size for a single run.
pub const DEFAULT_SIZE: usize = 1_000;

/// Default number of trials per configuration.
pub const DEFAULT_RUNS: usize = 5;

/// Configuration of a single benchmark.
///
/// # Example
///
/// ```
/// use algobench_core::{BenchmarkConfig, Distribution};
///
/// let config = BenchmarkConfig::new("binary_search")
///     .with_distribution(Distribution::Sorted)
///     .with_size(10_000)
///     .with_runs(3);
/// assert_eq!(config.target(), 5_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    algorithm: String,
    distribution: Distribution,
    size: usize,
    runs: usize,
    target: Option<i64>,
}

impl BenchmarkConfig {
    /// Creates a configuration for `algorithm` with default input settings.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            distribution: Distribution::default(),
            size: DEFAULT_SIZE,
            runs: DEFAULT_RUNS,
            target: None,
        }
    }

    /// Sets the input distribution.
    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Sets the input size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the number of trials.
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Sets an explicit search target.
    pub fn with_target(mut self, target: i64) -> Self {
        self.target = Some(target);
        self
    }

    /// Algorithm identifier.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Input distribution.
    pub fn distribution(&self) -> Distribution {
        self.distribution
    }

    /// Input size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of trials.
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Search target; `size / 2` unless set explicitly.
    pub fn target(&self) -> i64 {
        self.target.unwrap_or((self.size / 2) as i64)
    }

    /// Checks the parameters that do not depend on the registry.
    pub fn validate(&self, max_size: usize) -> Result<()> {
        if self.runs == 0 {
            return Err(BenchError::invalid_config("runs", "must be at least 1"));
        }
        crate::error::validate_input_size(self.size, max_size)
    }
}
