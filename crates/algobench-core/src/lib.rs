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

//! AlgoBench measurement engine
//!
//! Measures and compares the runtime and memory behaviour of classic search
//! and sort algorithms over synthetically generated integer arrays.
//!
//! ## Features
//!
//! - **Algorithm registry**: named sort and search algorithms behind one
//!   descriptor type
//! - **Input generators**: random, ascending and descending arrays from a
//!   seedable random source
//! - **Measurement engine**: repeated trials with timing, memory deltas and
//!   sort verification, reduced to summary statistics
//!
//! ## Usage
//!
//! ```
//! use algobench_core::{BenchmarkConfig, BenchmarkEngine, Distribution};
//!
//! let mut engine = BenchmarkEngine::with_seed(42);
//! let config = BenchmarkConfig::new("merge_sort")
//!     .with_distribution(Distribution::ReverseSorted)
//!     .with_size(1_000)
//!     .with_runs(3);
//!
//! let result = engine.run_one(&config).unwrap();
//! assert_eq!(result.runs, 3);
//! assert!(result.min_duration <= result.mean_duration);
//! ```

pub mod algorithms;
pub mod config;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod measurement;
pub mod result;
pub mod statistics;
pub mod store;
pub mod verification;

// Re-export key types for convenience
pub use algorithms::{AlgorithmDescriptor, AlgorithmKind, Outcome, Registry, SearchFn, SortFn};
pub use config::{BenchmarkConfig, DEFAULT_RUNS, DEFAULT_SIZE, DEFAULT_SIZES};
pub use distribution::{generate, is_sorted, Distribution};
pub use engine::BenchmarkEngine;
pub use error::{max_input_size, validate_input_size, BenchError, Result, MAX_INPUT_SIZE};
pub use measurement::{AllocationProbe, CountingAllocator, MemoryProbe, NullProbe};
pub use result::BenchmarkResult;
pub use store::ResultStore;
