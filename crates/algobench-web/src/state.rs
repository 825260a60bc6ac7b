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

//! Shared server state.
//!
//! Handlers never lock the engine on an async worker. Every engine access
//! goes through [`AppState::with_engine`], which runs on the blocking pool;
//! the algorithm list and the result count are kept outside the lock so
//! `/api/health` and `/api/algorithms` answer while a benchmark is running.

use crate::types::AlgorithmInfo;
use algobench_core::{BenchmarkEngine, BenchmarkResult};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinError;

/// State shared by all handlers.
///
/// The engine sits behind a single mutex: at most one benchmark runs at a
/// time, and appends and clears never interleave.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<Mutex<BenchmarkEngine>>,
    algorithms: Arc<[AlgorithmInfo]>,
    results_count: Arc<AtomicUsize>,
    started: Instant,
}

impl AppState {
    /// Wraps `engine` for sharing across handlers.
    pub fn new(engine: BenchmarkEngine) -> Self {
        let algorithms = engine
            .registry()
            .iter()
            .map(|d| AlgorithmInfo {
                name: d.name().to_string(),
                kind: d.kind().as_str().to_string(),
                description: d.description().to_string(),
            })
            .collect();
        let results_count = Arc::new(AtomicUsize::new(engine.results().len()));

        Self {
            engine: Arc::new(Mutex::new(engine)),
            algorithms,
            results_count,
            started: Instant::now(),
        }
    }

    /// Runs `f` with exclusive access to the engine on the blocking pool.
    ///
    /// The published result count is refreshed before the lock is released.
    pub async fn with_engine<F, T>(&self, f: F) -> Result<T, JoinError>
    where
        F: FnOnce(&mut BenchmarkEngine) -> T + Send + 'static,
        T: Send + 'static,
    {
        let engine = Arc::clone(&self.engine);
        let results_count = Arc::clone(&self.results_count);
        tokio::task::spawn_blocking(move || {
            let mut guard = engine.lock();
            let value = f(&mut *guard);
            results_count.store(guard.results().len(), Ordering::Release);
            value
        })
        .await
    }

    /// Snapshot of the stored results.
    ///
    /// Waits for a running benchmark to finish.
    pub async fn results(&self) -> Result<Vec<BenchmarkResult>, JoinError> {
        self.with_engine(|engine| engine.results().to_vec()).await
    }

    /// Empties the result store.
    pub async fn clear(&self) -> Result<(), JoinError> {
        self.with_engine(|engine| engine.clear_results()).await
    }

    /// Every registered algorithm, in registry order.
    pub fn algorithms(&self) -> Vec<AlgorithmInfo> {
        self.algorithms.to_vec()
    }

    /// Number of stored results as of the last completed engine access.
    pub fn results_count(&self) -> usize {
        self.results_count.load(Ordering::Acquire)
    }

    /// Seconds since the state was created.
    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BenchmarkEngine::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algobench_core::{BenchmarkConfig, NullProbe};

    fn state() -> AppState {
        AppState::new(BenchmarkEngine::with_seed(5).with_probe(Box::new(NullProbe)))
    }

    #[test]
    fn test_algorithms_listed_in_registry_order() {
        let algorithms = state().algorithms();
        assert_eq!(algorithms.len(), 8);
        assert_eq!(algorithms[0].name, "linear_search");
        assert_eq!(algorithms[0].kind, "search");
        assert_eq!(algorithms[7].name, "native_sort");
    }

    #[tokio::test]
    async fn test_results_count_follows_engine() {
        let state = state();
        assert_eq!(state.results_count(), 0);

        let config = BenchmarkConfig::new("heap_sort").with_size(10);
        state
            .with_engine(move |engine| engine.run_one(&config.with_runs(1)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(state.results_count(), 1);
        assert_eq!(state.results().await.unwrap().len(), 1);

        state.clear().await.unwrap();
        assert_eq!(state.results_count(), 0);
        assert!(state.results().await.unwrap().is_empty());
    }
}
