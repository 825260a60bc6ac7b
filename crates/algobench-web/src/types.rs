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

//! Request and response bodies.

use algobench_core::{BenchmarkResult, DEFAULT_RUNS, DEFAULT_SIZE};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/benchmark`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRequest {
    /// Algorithm identifier.
    pub algorithm: String,
    /// Distribution tag (`random`, `sorted`, `reverse`).
    #[serde(default = "default_array_type")]
    pub array_type: String,
    /// Input size.
    #[serde(default = "default_size")]
    pub size: usize,
    /// Number of trials.
    #[serde(default = "default_runs")]
    pub runs: usize,
}

/// Body of `POST /api/benchmark/all`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkAllRequest {
    /// Number of trials per configuration.
    #[serde(default = "default_runs")]
    pub runs: usize,
    /// Input sizes; the default sweep sizes when absent.
    #[serde(default)]
    pub sizes: Option<Vec<usize>>,
}

fn default_array_type() -> String {
    "random".to_string()
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

fn default_runs() -> usize {
    DEFAULT_RUNS
}

/// Envelope for every JSON benchmark response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResponse {
    /// Whether the request succeeded.
    pub success: bool,
    /// Status or error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Results, when the request produced or listed any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<BenchmarkResult>>,
}

impl BenchmarkResponse {
    /// Successful response carrying results.
    pub fn with_results(results: Vec<BenchmarkResult>) -> Self {
        Self {
            success: true,
            message: None,
            results: Some(results),
        }
    }

    /// Successful response carrying a message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            results: None,
        }
    }

    /// Failed response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            results: None,
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `"healthy"`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since the state was created.
    pub uptime_secs: u64,
    /// Number of stored results.
    pub results_count: usize,
}

/// One entry of `GET /api/algorithms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    /// Algorithm identifier.
    pub name: String,
    /// `sort` or `search`.
    pub kind: String,
    /// One-line description.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: BenchmarkRequest = serde_json::from_str(r#"{"algorithm":"heap_sort"}"#).unwrap();
        assert_eq!(req.array_type, "random");
        assert_eq!(req.size, 1_000);
        assert_eq!(req.runs, 5);

        let req: BenchmarkRequest = serde_json::from_str(
            r#"{"algorithm":"heap_sort","arrayType":"reverse","size":10,"runs":2}"#,
        )
        .unwrap();
        assert_eq!(req.array_type, "reverse");
        assert_eq!(req.size, 10);
    }

    #[test]
    fn test_response_omits_empty_fields() {
        let json = serde_json::to_string(&BenchmarkResponse::ok("Results cleared")).unwrap();
        assert_eq!(json, r#"{"success":true,"message":"Results cleared"}"#);

        let json = serde_json::to_string(&BenchmarkResponse::with_results(vec![])).unwrap();
        assert_eq!(json, r#"{"success":true,"results":[]}"#);
    }
}
