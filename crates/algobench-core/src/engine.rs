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

//! The measurement engine.
//!
//! [`BenchmarkEngine`] runs a named algorithm `runs` times against freshly
//! generated inputs, verifies sort outputs, reduces the per-trial
//! observations to a [`BenchmarkResult`] and appends it to its
//! [`ResultStore`]. Trials run sequentially on the calling thread.

use crate::algorithms::{AlgorithmKind, Outcome, Registry};
use crate::config::BenchmarkConfig;
use crate::distribution::{generate, Distribution};
use crate::error::{max_input_size, BenchError, Result};
use crate::measurement::{observe, AllocationProbe, MemoryProbe};
use crate::result::BenchmarkResult;
use crate::statistics::{mean_memory, DurationStats};
use crate::store::ResultStore;
use crate::verification::verify_sorted;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

/// Runs benchmarks and keeps their results.
pub struct BenchmarkEngine {
    registry: Registry,
    store: ResultStore,
    rng: StdRng,
    probe: Box<dyn MemoryProbe>,
    max_input_size: usize,
}

impl BenchmarkEngine {
    /// Creates an engine over the standard registry, seeded from entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates an engine with a fixed seed so inputs are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            registry: Registry::standard(),
            store: ResultStore::new(),
            rng,
            probe: Box::new(AllocationProbe),
            max_input_size: max_input_size(),
        }
    }

    /// Replaces the algorithm registry.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Replaces the memory probe.
    pub fn with_probe(mut self, probe: Box<dyn MemoryProbe>) -> Self {
        self.probe = probe;
        self
    }

    /// Overrides the maximum accepted input size.
    pub fn with_max_input_size(mut self, max: usize) -> Self {
        self.max_input_size = max;
        self
    }

    /// The algorithms this engine can run.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// All stored results in insertion order.
    pub fn results(&self) -> &[BenchmarkResult] {
        self.store.all()
    }

    /// Empties the result store.
    pub fn clear_results(&mut self) {
        self.store.clear();
    }

    /// Measures one configuration and stores the summary.
    ///
    /// Fails without running any trial if the configuration is invalid or
    /// the algorithm is unknown. A sort whose output fails verification
    /// aborts the whole call; nothing is stored in either case.
    pub fn run_one(&mut self, config: &BenchmarkConfig) -> Result<BenchmarkResult> {
        config.validate(self.max_input_size)?;

        let descriptor = self
            .registry
            .get(config.algorithm())
            .ok_or_else(|| BenchError::unknown_algorithm(config.algorithm()))?;

        let distribution = config.distribution();
        let target = config.target();
        let mut durations = Vec::with_capacity(config.runs());
        let mut memory = Vec::with_capacity(config.runs());

        for trial in 0..config.runs() {
            let input = generate(config.size(), distribution, &mut self.rng);
            let rng = &mut self.rng;

            let (outcome, observation) = observe(self.probe.as_mut(), || {
                descriptor.invoke(&input, target, distribution, rng)
            });

            if let Outcome::Sorted(output) = &outcome {
                if !verify_sorted(&input, output) {
                    warn!(
                        algorithm = descriptor.name(),
                        size = config.size(),
                        "sort output failed verification"
                    );
                    return Err(BenchError::VerificationFailed {
                        algorithm: descriptor.name().to_string(),
                    });
                }
            }

            debug!(
                algorithm = descriptor.name(),
                trial,
                duration_ns = observation.duration.as_nanos() as u64,
                memory_delta = observation.memory_delta,
                "trial complete"
            );

            durations.push(observation.duration);
            memory.push(observation.memory_delta);
        }

        let stats = DurationStats::from_samples(&durations);
        let result = BenchmarkResult {
            algorithm: descriptor.name().to_string(),
            array_type: distribution.name().to_string(),
            size: config.size(),
            runs: config.runs(),
            mean_duration: stats.mean,
            std_deviation: stats.std_deviation,
            min_duration: stats.min,
            max_duration: stats.max,
            memory_used: mean_memory(&memory),
        };

        info!(
            algorithm = %result.algorithm,
            array_type = %result.array_type,
            size = result.size,
            runs = result.runs,
            mean_ns = result.mean_duration.as_nanos() as u64,
            "benchmark complete"
        );

        self.store.append(result.clone());
        Ok(result)
    }

    /// Runs every search algorithm over every distribution and size.
    ///
    /// Stops at the first failure; results stored before it remain.
    pub fn run_search_sweep(&mut self, sizes: &[usize], runs: usize) -> Result<()> {
        self.run_sweep(AlgorithmKind::Search, sizes, runs)
    }

    /// Runs every sort algorithm over every distribution and size.
    ///
    /// Stops at the first failure; results stored before it remain.
    pub fn run_sort_sweep(&mut self, sizes: &[usize], runs: usize) -> Result<()> {
        self.run_sweep(AlgorithmKind::Sort, sizes, runs)
    }

    /// Runs the search sweep followed by the sort sweep.
    pub fn run_comprehensive(&mut self, sizes: &[usize], runs: usize) -> Result<()> {
        self.run_search_sweep(sizes, runs)?;
        self.run_sort_sweep(sizes, runs)
    }

    fn run_sweep(&mut self, kind: AlgorithmKind, sizes: &[usize], runs: usize) -> Result<()> {
        let algorithms: Vec<String> = self
            .registry
            .of_kind(kind)
            .map(|d| d.name().to_string())
            .collect();

        info!(
            kind = kind.as_str(),
            algorithms = algorithms.len(),
            sizes = sizes.len(),
            runs,
            "starting sweep"
        );

        for algorithm in &algorithms {
            for &distribution in Distribution::all() {
                for &size in sizes {
                    // Search targets default to size / 2.
                    let config = BenchmarkConfig::new(algorithm.as_str())
                        .with_distribution(distribution)
                        .with_size(size)
                        .with_runs(runs);

                    self.run_one(&config)
                        .map_err(|e| BenchError::sweep(algorithm.as_str(), e))?;
                }
            }
        }

        Ok(())
    }
}

impl Default for BenchmarkEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BenchmarkEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchmarkEngine")
            .field("algorithms", &self.registry.names())
            .field("results", &self.store.len())
            .field("max_input_size", &self.max_input_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::NullProbe;

    fn engine() -> BenchmarkEngine {
        BenchmarkEngine::with_seed(7).with_probe(Box::new(NullProbe))
    }

    #[test]
    fn test_run_one_stores_result() {
        let mut engine = engine();
        let config = BenchmarkConfig::new("insertion_sort").with_size(50).with_runs(2);

        let result = engine.run_one(&config).unwrap();
        assert_eq!(result.algorithm, "insertion_sort");
        assert_eq!(result.array_type, "Random");
        assert_eq!(result.runs, 2);
        assert_eq!(engine.results(), &[result]);
    }

    #[test]
    fn test_zero_runs_rejected() {
        let mut engine = engine();
        let err = engine
            .run_one(&BenchmarkConfig::new("heap_sort").with_runs(0))
            .unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig { .. }));
        assert!(engine.results().is_empty());
    }

    #[test]
    fn test_input_size_limit() {
        let mut engine = engine().with_max_input_size(100);
        let err = engine
            .run_one(&BenchmarkConfig::new("heap_sort").with_size(101))
            .unwrap_err();
        assert_eq!(
            err,
            BenchError::InputTooLarge {
                requested: 101,
                max: 100
            }
        );
    }

    #[test]
    fn test_null_probe_reports_zero_memory() {
        let mut engine = engine();
        let result = engine
            .run_one(&BenchmarkConfig::new("merge_sort").with_size(1_000).with_runs(2))
            .unwrap();
        assert_eq!(result.memory_used, 0);
    }

    #[test]
    fn test_empty_registry_sweep_is_noop() {
        let mut engine = engine().with_registry(Registry::empty());
        engine.run_comprehensive(&[10], 1).unwrap();
        assert!(engine.results().is_empty());
    }
}
