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

//! Benchmark summaries.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Summary of all trials of one configuration.
///
/// Serializes with camelCase keys; durations are integer nanoseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    /// Algorithm identifier.
    pub algorithm: String,
    /// Display name of the input distribution.
    pub array_type: String,
    /// Input size.
    pub size: usize,
    /// Number of trials.
    pub runs: usize,
    /// Mean trial duration.
    #[serde(with = "duration_nanos")]
    pub mean_duration: Duration,
    /// Sample standard deviation, truncated to whole microseconds.
    #[serde(with = "duration_nanos")]
    pub std_deviation: Duration,
    /// Fastest trial.
    #[serde(with = "duration_nanos")]
    pub min_duration: Duration,
    /// Slowest trial.
    #[serde(with = "duration_nanos")]
    pub max_duration: Duration,
    /// Mean heap growth per trial in bytes.
    pub memory_used: u64,
}

mod duration_nanos {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_nanos()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_nanos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BenchmarkResult {
        BenchmarkResult {
            algorithm: "merge_sort".to_string(),
            array_type: "Reverse Sorted".to_string(),
            size: 1_000,
            runs: 3,
            mean_duration: Duration::from_micros(120),
            std_deviation: Duration::from_micros(4),
            min_duration: Duration::from_micros(115),
            max_duration: Duration::from_micros(126),
            memory_used: 8_192,
        }
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["algorithm"], "merge_sort");
        assert_eq!(value["arrayType"], "Reverse Sorted");
        assert_eq!(value["meanDuration"], 120_000);
        assert_eq!(value["stdDeviation"], 4_000);
        assert_eq!(value["minDuration"], 115_000);
        assert_eq!(value["maxDuration"], 126_000);
        assert_eq!(value["memoryUsed"], 8_192);
        assert_eq!(value["runs"], 3);
    }

    #[test]
    fn test_json_parse() {
        let json = serde_json::to_string(&sample()).unwrap();
        let parsed: BenchmarkResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }
}
