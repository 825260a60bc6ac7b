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

//! Input distributions and array generation.
//!
//! Provides the distribution tags benchmarks are run against and the generator
//! that turns a size and a tag into a fresh input array.

use crate::error::BenchError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Shape of a generated input array.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    /// Uniformly random values in `[0, 2 * size)`.
    #[default]
    Random,
    /// Ascending values `0, 1, ..., size - 1`.
    Sorted,
    /// Descending values `size - 1, ..., 1, 0`.
    #[serde(rename = "reverse")]
    ReverseSorted,
}

impl Distribution {
    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::Sorted => "Sorted",
            Self::ReverseSorted => "Reverse Sorted",
        }
    }

    /// Returns a short identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::ReverseSorted => "reverse",
        }
    }

    /// Returns all distributions in sweep order.
    pub fn all() -> &'static [Distribution] {
        &[Self::Random, Self::Sorted, Self::ReverseSorted]
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distribution {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "sorted" | "ascending" => Ok(Self::Sorted),
            "reverse" | "reverse-sorted" | "reverse_sorted" | "descending" => {
                Ok(Self::ReverseSorted)
            }
            other => Err(BenchError::invalid_config(
                "array-type",
                format!("unknown distribution '{}' (expected random, sorted or reverse)", other),
            )),
        }
    }
}

/// Generates an input array of `size` elements with the given shape.
///
/// Randomness is drawn from the caller's generator, so a seeded generator
/// yields a reproducible array.
///
/// # Examples
///
/// ```
/// use algobench_core::distribution::{generate, Distribution};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(generate(4, Distribution::ReverseSorted, &mut rng), vec![3, 2, 1, 0]);
/// ```
pub fn generate<R: Rng + ?Sized>(size: usize, distribution: Distribution, rng: &mut R) -> Vec<i64> {
    let n = size as i64;
    match distribution {
        Distribution::Random => (0..size).map(|_| rng.gen_range(0..n * 2)).collect(),
        Distribution::Sorted => (0..n).collect(),
        Distribution::ReverseSorted => (0..n).rev().collect(),
    }
}

/// Returns whether a slice is in non-decreasing order.
pub fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_distribution_names() {
        assert_eq!(Distribution::Random.name(), "Random");
        assert_eq!(Distribution::ReverseSorted.name(), "Reverse Sorted");
        assert_eq!(Distribution::Sorted.id(), "sorted");
        assert_eq!(Distribution::all().len(), 3);
    }

    #[test]
    fn test_parse_distribution() {
        assert_eq!("random".parse::<Distribution>().unwrap(), Distribution::Random);
        assert_eq!("SORTED".parse::<Distribution>().unwrap(), Distribution::Sorted);
        assert_eq!(
            "reverse".parse::<Distribution>().unwrap(),
            Distribution::ReverseSorted
        );
        assert_eq!(
            "descending".parse::<Distribution>().unwrap(),
            Distribution::ReverseSorted
        );
        assert!(matches!(
            "zigzag".parse::<Distribution>(),
            Err(BenchError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_generate_shapes() {
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(generate(5, Distribution::Sorted, &mut rng), vec![0, 1, 2, 3, 4]);
        assert_eq!(
            generate(5, Distribution::ReverseSorted, &mut rng),
            vec![4, 3, 2, 1, 0]
        );

        let random = generate(1_000, Distribution::Random, &mut rng);
        assert_eq!(random.len(), 1_000);
        assert!(random.iter().all(|&v| (0..2_000).contains(&v)));
    }

    #[test]
    fn test_generate_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        for &dist in Distribution::all() {
            assert!(generate(0, dist, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_generate_is_deterministic_for_seed() {
        let a = generate(100, Distribution::Random, &mut StdRng::seed_from_u64(42));
        let b = generate(100, Distribution::Random, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn test_serde_tags() {
        let json = serde_json::to_string(&Distribution::ReverseSorted).unwrap();
        assert_eq!(json, "\"reverse\"");
        let parsed: Distribution = serde_json::from_str("\"sorted\"").unwrap();
        assert_eq!(parsed, Distribution::Sorted);
    }
}
