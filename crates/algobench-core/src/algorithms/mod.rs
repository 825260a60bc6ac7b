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

//! Algorithm catalog and registry.
//!
//! Algorithms are looked up by a stable identifier in a [`Registry`] of
//! [`AlgorithmDescriptor`]s. A descriptor records whether the algorithm sorts
//! or searches, and invoking it yields a tagged [`Outcome`] the engine can
//! verify without inspecting types at runtime.
//!
//! # Modules
//!
//! - `sort`: copy-returning sorting algorithms
//! - `search`: linear and distribution-aware binary search

pub mod search;
pub mod sort;

use crate::distribution::Distribution;
use rand::RngCore;

pub use search::{
    binary_search, binary_search_sorted, binary_search_unsorted, linear_search,
};
pub use sort::{bubble_sort, heap_sort, insertion_sort, merge_sort, native_sort, quick_sort};

/// A sort: returns a sorted copy of its input.
pub type SortFn = fn(&[i64], &mut dyn RngCore) -> Vec<i64>;

/// A search: returns the index of `target` in the input, if present.
pub type SearchFn = fn(&[i64], i64, Distribution) -> Option<usize>;

/// Algorithm family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    /// Sorting algorithms.
    Sort,
    /// Searching algorithms.
    Search,
}

impl AlgorithmKind {
    /// Returns the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::Sort => "sort",
            AlgorithmKind::Search => "search",
        }
    }
}

/// The callable behind a descriptor, tagged by family.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// A sorting algorithm.
    Sort(SortFn),
    /// A searching algorithm.
    Search(SearchFn),
}

/// What an algorithm produced for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Output of a sort.
    Sorted(Vec<i64>),
    /// Output of a search: index into the original input, or `None`.
    Found(Option<usize>),
}

/// A registered algorithm.
#[derive(Debug, Clone)]
pub struct AlgorithmDescriptor {
    name: String,
    description: String,
    operation: Operation,
}

impl AlgorithmDescriptor {
    /// Creates a descriptor for a sorting algorithm.
    pub fn sort(name: impl Into<String>, description: impl Into<String>, f: SortFn) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            operation: Operation::Sort(f),
        }
    }

    /// Creates a descriptor for a searching algorithm.
    pub fn search(name: impl Into<String>, description: impl Into<String>, f: SearchFn) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            operation: Operation::Search(f),
        }
    }

    /// Stable identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Algorithm family.
    pub fn kind(&self) -> AlgorithmKind {
        match self.operation {
            Operation::Sort(_) => AlgorithmKind::Sort,
            Operation::Search(_) => AlgorithmKind::Search,
        }
    }

    /// Runs the algorithm on `input`.
    ///
    /// `target` and `distribution` are only consulted by searches; `rng` only
    /// by sorts that need randomness.
    pub fn invoke(
        &self,
        input: &[i64],
        target: i64,
        distribution: Distribution,
        rng: &mut dyn RngCore,
    ) -> Outcome {
        match self.operation {
            Operation::Sort(f) => Outcome::Sorted(f(input, rng)),
            Operation::Search(f) => Outcome::Found(f(input, target, distribution)),
        }
    }
}

fn linear_search_any(values: &[i64], target: i64, _distribution: Distribution) -> Option<usize> {
    linear_search(values, target)
}

/// Ordered collection of algorithm descriptors.
///
/// Registration order is preserved and drives sweep order.
#[derive(Debug, Clone)]
pub struct Registry {
    algorithms: Vec<AlgorithmDescriptor>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn empty() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Creates the registry of built-in algorithms.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(AlgorithmDescriptor::search(
            "linear_search",
            "Sequential scan",
            linear_search_any,
        ));
        registry.register(AlgorithmDescriptor::search(
            "binary_search",
            "Binary search (sorts a private copy unless input is ascending)",
            binary_search,
        ));
        registry.register(AlgorithmDescriptor::sort(
            "bubble_sort",
            "Bubble sort with early exit",
            bubble_sort,
        ));
        registry.register(AlgorithmDescriptor::sort(
            "insertion_sort",
            "Insertion sort",
            insertion_sort,
        ));
        registry.register(AlgorithmDescriptor::sort(
            "merge_sort",
            "Top-down merge sort",
            merge_sort,
        ));
        registry.register(AlgorithmDescriptor::sort(
            "quick_sort",
            "Quick sort with random pivot",
            quick_sort,
        ));
        registry.register(AlgorithmDescriptor::sort(
            "heap_sort",
            "In-place heap sort",
            heap_sort,
        ));
        registry.register(AlgorithmDescriptor::sort(
            "native_sort",
            "Standard library unstable sort",
            native_sort,
        ));
        registry
    }

    /// Registers an algorithm.
    ///
    /// A descriptor with an already-registered name replaces the old one in
    /// place.
    pub fn register(&mut self, descriptor: AlgorithmDescriptor) {
        match self
            .algorithms
            .iter_mut()
            .find(|existing| existing.name == descriptor.name)
        {
            Some(existing) => *existing = descriptor,
            None => self.algorithms.push(descriptor),
        }
    }

    /// Looks up an algorithm by name.
    pub fn get(&self, name: &str) -> Option<&AlgorithmDescriptor> {
        self.algorithms.iter().find(|d| d.name == name)
    }

    /// Iterates all algorithms in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmDescriptor> {
        self.algorithms.iter()
    }

    /// Iterates the algorithms of one family in registration order.
    pub fn of_kind(&self, kind: AlgorithmKind) -> impl Iterator<Item = &AlgorithmDescriptor> {
        self.algorithms.iter().filter(move |d| d.kind() == kind)
    }

    /// Names of all registered algorithms.
    pub fn names(&self) -> Vec<&str> {
        self.algorithms.iter().map(|d| d.name()).collect()
    }

    /// Number of registered algorithms.
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_standard_registry_contents() {
        let registry = Registry::standard();
        assert_eq!(
            registry.names(),
            vec![
                "linear_search",
                "binary_search",
                "bubble_sort",
                "insertion_sort",
                "merge_sort",
                "quick_sort",
                "heap_sort",
                "native_sort",
            ]
        );
        assert_eq!(registry.of_kind(AlgorithmKind::Search).count(), 2);
        assert_eq!(registry.of_kind(AlgorithmKind::Sort).count(), 6);
    }

    #[test]
    fn test_lookup() {
        let registry = Registry::standard();
        assert_eq!(
            registry.get("heap_sort").map(|d| d.kind()),
            Some(AlgorithmKind::Sort)
        );
        assert_eq!(
            registry.get("linear_search").map(|d| d.kind()),
            Some(AlgorithmKind::Search)
        );
        assert!(registry.get("bogo_sort").is_none());
    }

    #[test]
    fn test_invoke_outcomes() {
        let registry = Registry::standard();
        let mut rng = StdRng::seed_from_u64(0);

        let sorted = registry
            .get("merge_sort")
            .unwrap()
            .invoke(&[3, 1, 2], 0, Distribution::Random, &mut rng);
        assert_eq!(sorted, Outcome::Sorted(vec![1, 2, 3]));

        let found = registry
            .get("binary_search")
            .unwrap()
            .invoke(&[3, 1, 2], 2, Distribution::Random, &mut rng);
        assert_eq!(found, Outcome::Found(Some(2)));
    }

    #[test]
    fn test_register_replaces_in_place() {
        fn reverse(input: &[i64], _rng: &mut dyn RngCore) -> Vec<i64> {
            input.iter().rev().copied().collect()
        }

        let mut registry = Registry::standard();
        registry.register(AlgorithmDescriptor::sort("bubble_sort", "broken", reverse));

        assert_eq!(registry.len(), 8);
        assert_eq!(registry.names()[2], "bubble_sort");
        assert_eq!(registry.get("bubble_sort").unwrap().description(), "broken");
    }

    #[test]
    fn test_kind_as_str() {
        assert_eq!(AlgorithmKind::Sort.as_str(), "sort");
        assert_eq!(AlgorithmKind::Search.as_str(), "search");
    }
}
