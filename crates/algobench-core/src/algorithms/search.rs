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

//! Searching algorithms.
//!
//! Found positions always refer to the caller's original array, never to an
//! internally sorted copy.

use crate::distribution::Distribution;

/// Returns the index of the first element equal to `target`.
pub fn linear_search(values: &[i64], target: i64) -> Option<usize> {
    values.iter().position(|&v| v == target)
}

/// Classic binary search over an ascending slice.
///
/// Returns the index of some element equal to `target`; with duplicates it
/// is not necessarily the first.
pub fn binary_search_sorted(values: &[i64], target: i64) -> Option<usize> {
    let (mut low, mut high) = (0usize, values.len());

    while low < high {
        let mid = low + (high - low) / 2;
        match values[mid].cmp(&target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }

    None
}

/// Binary search over an array of unknown order.
///
/// Sorts a private copy, searches it, then maps the hit back to the first
/// position in `values` holding the same value.
pub fn binary_search_unsorted(values: &[i64], target: i64) -> Option<usize> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let found = sorted[binary_search_sorted(&sorted, target)?];
    linear_search(values, found)
}

/// Distribution-aware binary search.
///
/// Only [`Distribution::Sorted`] input is searched directly; every other
/// shape goes through [`binary_search_unsorted`].
pub fn binary_search(values: &[i64], target: i64, distribution: Distribution) -> Option<usize> {
    match distribution {
        Distribution::Sorted => binary_search_sorted(values, target),
        Distribution::Random | Distribution::ReverseSorted => {
            binary_search_unsorted(values, target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASCENDING: [i64; 8] = [1, 3, 5, 7, 9, 11, 13, 15];

    #[test]
    fn test_linear_search() {
        let cases = [(5, Some(2)), (1, Some(0)), (15, Some(7)), (4, None), (20, None)];
        for (target, expected) in cases {
            assert_eq!(linear_search(&ASCENDING, target), expected, "target {}", target);
        }
    }

    #[test]
    fn test_binary_search_sorted() {
        let cases = [(5, Some(2)), (1, Some(0)), (15, Some(7)), (4, None), (20, None)];
        for (target, expected) in cases {
            assert_eq!(
                binary_search_sorted(&ASCENDING, target),
                expected,
                "target {}",
                target
            );
        }
        assert_eq!(binary_search_sorted(&[], 1), None);
    }

    #[test]
    fn test_binary_search_unsorted_maps_to_original_index() {
        let values = [5, 1, 9, 3, 7, 11, 15, 13];
        let cases = [(5, Some(0)), (1, Some(1)), (15, Some(6)), (4, None), (20, None)];
        for (target, expected) in cases {
            assert_eq!(
                binary_search_unsorted(&values, target),
                expected,
                "target {}",
                target
            );
        }
    }

    #[test]
    fn test_binary_search_dispatches_on_distribution() {
        let descending = [9, 7, 5, 3, 1];
        assert_eq!(binary_search(&descending, 3, Distribution::ReverseSorted), Some(3));
        assert_eq!(binary_search(&ASCENDING, 13, Distribution::Sorted), Some(6));
        assert_eq!(binary_search(&[4, 2, 8], 8, Distribution::Random), Some(2));
        assert_eq!(binary_search(&[4, 2, 8], 5, Distribution::Random), None);
    }
}
