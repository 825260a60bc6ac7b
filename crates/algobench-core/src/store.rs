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

//! In-memory result store.

use crate::result::BenchmarkResult;

/// Ordered, append-only list of completed benchmark results.
///
/// Insertion order is the only ordering guarantee. The only removal is
/// [`ResultStore::clear`].
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    results: Vec<BenchmarkResult>,
}

impl ResultStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn append(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// All results in insertion order.
    pub fn all(&self) -> &[BenchmarkResult] {
        &self.results
    }

    /// Removes every result.
    pub fn clear(&mut self) {
        self.results.clear();
    }

    /// Number of stored results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
