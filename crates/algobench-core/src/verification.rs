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

//! Correctness check applied to every sort trial.

/// Returns whether `output` is exactly `original` in ascending order.
///
/// Compares against a canonically sorted copy of the original, so an output
/// that is ordered but drops, duplicates or alters elements is rejected.
pub fn verify_sorted(original: &[i64], output: &[i64]) -> bool {
    if original.len() != output.len() {
        return false;
    }

    let mut expected = original.to_vec();
    expected.sort_unstable();
    expected == output
}
