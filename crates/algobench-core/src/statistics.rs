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

//! Reduction of trial samples to summary statistics.

use std::time::Duration;

/// Summary of a set of duration samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationStats {
    /// Integer-nanosecond mean.
    pub mean: Duration,
    /// Sample standard deviation, truncated to whole microseconds.
    pub std_deviation: Duration,
    /// Shortest sample.
    pub min: Duration,
    /// Longest sample.
    pub max: Duration,
}

impl DurationStats {
    /// Computes all statistics over `samples`.
    ///
    /// An empty slice yields all-zero statistics.
    pub fn from_samples(samples: &[Duration]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        Self {
            mean: mean_duration(samples),
            std_deviation: sample_std_deviation(samples),
            min: samples.iter().copied().min().unwrap_or_default(),
            max: samples.iter().copied().max().unwrap_or_default(),
        }
    }
}

/// Arithmetic mean with integer-nanosecond truncation.
pub fn mean_duration(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }

    let total: u128 = samples.iter().map(Duration::as_nanos).sum();
    nanos_to_duration(total / samples.len() as u128)
}

/// Sample standard deviation (divisor `n - 1`) truncated to whole
/// microseconds.
///
/// Returns zero for fewer than two samples.
///
/// # Examples
///
/// ```
/// use algobench_core::statistics::sample_std_deviation;
/// use std::time::Duration;
///
/// let samples = [Duration::from_micros(10), Duration::from_micros(20), Duration::from_micros(30)];
/// assert_eq!(sample_std_deviation(&samples), Duration::from_micros(10));
/// ```
pub fn sample_std_deviation(samples: &[Duration]) -> Duration {
    if samples.len() < 2 {
        return Duration::ZERO;
    }

    let mean = mean_duration(samples).as_nanos() as f64;
    let sum_sq: f64 = samples
        .iter()
        .map(|d| {
            let diff = d.as_nanos() as f64 - mean;
            diff * diff
        })
        .sum();

    let std_dev_nanos = (sum_sq / (samples.len() - 1) as f64).sqrt();
    let micros = (std_dev_nanos / 1_000.0) as u64;
    Duration::from_micros(micros)
}

/// Integer mean of byte counts.
pub fn mean_memory(samples: &[u64]) -> u64 {
    if samples.is_empty() {
        return 0;
    }

    let total: u128 = samples.iter().map(|&b| b as u128).sum();
    (total / samples.len() as u128) as u64
}

fn nanos_to_duration(nanos: u128) -> Duration {
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nanos(values: &[u64]) -> Vec<Duration> {
        values.iter().map(|&n| Duration::from_nanos(n)).collect()
    }

    #[test]
    fn test_mean_truncates() {
        assert_eq!(mean_duration(&nanos(&[1, 2])), Duration::from_nanos(1));
        assert_eq!(mean_duration(&nanos(&[10, 20, 30])), Duration::from_nanos(20));
        assert_eq!(mean_duration(&[]), Duration::ZERO);
    }

    #[test]
    fn test_std_deviation_single_sample_is_zero() {
        assert_eq!(sample_std_deviation(&nanos(&[5_000_000])), Duration::ZERO);
        assert_eq!(sample_std_deviation(&[]), Duration::ZERO);
    }

    #[test]
    fn test_std_deviation_identical_samples_is_zero() {
        assert_eq!(
            sample_std_deviation(&nanos(&[7_000, 7_000, 7_000])),
            Duration::ZERO
        );
    }

    #[test]
    fn test_std_deviation_uses_sample_divisor() {
        // mean 3ms, squared deviations 4 + 0 + 4 (ms^2), /2 => 4, sqrt => 2ms
        let samples = nanos(&[1_000_000, 3_000_000, 5_000_000]);
        assert_eq!(sample_std_deviation(&samples), Duration::from_millis(2));
    }

    #[test]
    fn test_std_deviation_truncates_to_micros() {
        // 1000ns and 2999ns: mean 1999, deviation sqrt(2 * 999^2) ~= 1412.8ns
        let samples = nanos(&[1_000, 2_999]);
        assert_eq!(sample_std_deviation(&samples), Duration::from_micros(1));

        // sub-microsecond spread truncates to zero
        let samples = nanos(&[100, 900]);
        assert_eq!(sample_std_deviation(&samples), Duration::ZERO);
    }

    #[test]
    fn test_from_samples_bounds() {
        let stats = DurationStats::from_samples(&nanos(&[300, 100, 200]));
        assert_eq!(stats.min, Duration::from_nanos(100));
        assert_eq!(stats.max, Duration::from_nanos(300));
        assert_eq!(stats.mean, Duration::from_nanos(200));
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    }

    #[test]
    fn test_mean_memory() {
        assert_eq!(mean_memory(&[]), 0);
        assert_eq!(mean_memory(&[100, 201]), 150);
        assert_eq!(mean_memory(&[u64::MAX, u64::MAX]), u64::MAX);
    }
}
