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

//! Sorting algorithms.
//!
//! Every sort takes the input by reference and returns a freshly allocated,
//! sorted copy; the caller's slice is never modified. The random source is
//! only consumed by [`quick_sort`] for pivot selection.

use rand::{Rng, RngCore};

/// Bubble sort with early exit once a pass performs no swaps.
pub fn bubble_sort(input: &[i64], _rng: &mut dyn RngCore) -> Vec<i64> {
    let mut result = input.to_vec();
    let n = result.len();

    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if result[j] > result[j + 1] {
                result.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    result
}

/// Insertion sort.
pub fn insertion_sort(input: &[i64], _rng: &mut dyn RngCore) -> Vec<i64> {
    let mut result = input.to_vec();

    for i in 1..result.len() {
        let key = result[i];
        let mut j = i;
        while j > 0 && result[j - 1] > key {
            result[j] = result[j - 1];
            j -= 1;
        }
        result[j] = key;
    }

    result
}

/// Top-down merge sort. Stable.
pub fn merge_sort(input: &[i64], _rng: &mut dyn RngCore) -> Vec<i64> {
    merge_sort_slice(input)
}

fn merge_sort_slice(input: &[i64]) -> Vec<i64> {
    if input.len() <= 1 {
        return input.to_vec();
    }

    let mid = input.len() / 2;
    let left = merge_sort_slice(&input[..mid]);
    let right = merge_sort_slice(&input[mid..]);

    merge(&left, &right)
}

fn merge(left: &[i64], right: &[i64]) -> Vec<i64> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            result.push(left[i]);
            i += 1;
        } else {
            result.push(right[j]);
            j += 1;
        }
    }

    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    result
}

/// Quick sort with a random pivot and Lomuto partitioning.
///
/// Recurses into the smaller partition and loops over the larger one, so the
/// stack depth stays logarithmic even on already-sorted input.
pub fn quick_sort(input: &[i64], rng: &mut dyn RngCore) -> Vec<i64> {
    let mut result = input.to_vec();
    quick_sort_in_place(&mut result, rng);
    result
}

fn quick_sort_in_place(mut slice: &mut [i64], rng: &mut dyn RngCore) {
    while slice.len() > 1 {
        let last = slice.len() - 1;
        let pivot_index = rng.gen_range(0..slice.len());
        slice.swap(pivot_index, last);

        let split = partition(slice);
        let (left, right) = std::mem::take(&mut slice).split_at_mut(split);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort_in_place(left, rng);
            slice = right;
        } else {
            quick_sort_in_place(right, rng);
            slice = left;
        }
    }
}

/// Partitions around the last element and returns the pivot's final index.
fn partition(slice: &mut [i64]) -> usize {
    let high = slice.len() - 1;
    let pivot = slice[high];
    let mut store = 0;

    for j in 0..high {
        if slice[j] <= pivot {
            slice.swap(store, j);
            store += 1;
        }
    }

    slice.swap(store, high);
    store
}

/// In-place max-heap sort.
pub fn heap_sort(input: &[i64], _rng: &mut dyn RngCore) -> Vec<i64> {
    let mut result = input.to_vec();
    let n = result.len();

    for i in (0..n / 2).rev() {
        sift_down(&mut result, n, i);
    }

    for end in (1..n).rev() {
        result.swap(0, end);
        sift_down(&mut result, end, 0);
    }

    result
}

fn sift_down(heap: &mut [i64], len: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && heap[left] > heap[largest] {
            largest = left;
        }
        if right < len && heap[right] > heap[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }

        heap.swap(root, largest);
        root = largest;
    }
}

/// The standard library's unstable sort, as a baseline.
pub fn native_sort(input: &[i64], _rng: &mut dyn RngCore) -> Vec<i64> {
    let mut result = input.to_vec();
    result.sort_unstable();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type SortFn = fn(&[i64], &mut dyn RngCore) -> Vec<i64>;

    const SORTS: &[(&str, SortFn)] = &[
        ("bubble_sort", bubble_sort),
        ("insertion_sort", insertion_sort),
        ("merge_sort", merge_sort),
        ("quick_sort", quick_sort),
        ("heap_sort", heap_sort),
        ("native_sort", native_sort),
    ];

    #[test]
    fn test_sorts_known_input() {
        let input = [64, 34, 25, 12, 22, 11, 90];
        let expected = vec![11, 12, 22, 25, 34, 64, 90];
        let mut rng = StdRng::seed_from_u64(3);

        for (name, sort) in SORTS {
            assert_eq!(sort(&input[..], &mut rng), expected, "{} failed", name);
        }
    }

    #[test]
    fn test_sorts_consistency() {
        let cases: Vec<Vec<i64>> = vec![
            vec![],
            vec![42],
            vec![2, 1],
            vec![3, 1, 2],
            vec![5, 2, 8, 1, 9, 3, 7, 4, 6],
            vec![9, 8, 7, 6, 5, 4, 3, 2, 1],
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
            vec![4, 4, 1, 4, -3, 0, 4],
        ];
        let mut rng = StdRng::seed_from_u64(11);

        for case in &cases {
            let mut expected = case.clone();
            expected.sort();
            for (name, sort) in SORTS {
                assert_eq!(
                    sort(case.as_slice(), &mut rng),
                    expected,
                    "{} failed for {:?}",
                    name,
                    case
                );
            }
        }
    }

    #[test]
    fn test_sorts_leave_input_untouched() {
        let input = vec![3, 1, 2];
        let mut rng = StdRng::seed_from_u64(5);
        for (_, sort) in SORTS {
            let _ = sort(input.as_slice(), &mut rng);
            assert_eq!(input, vec![3, 1, 2]);
        }
    }

    #[test]
    fn test_quick_sort_large_sorted_input() {
        let input: Vec<i64> = (0..200_000).collect();
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(quick_sort(&input, &mut rng), input);

        let reversed: Vec<i64> = (0..200_000).rev().collect();
        assert_eq!(quick_sort(&reversed, &mut rng), input);
    }
}
