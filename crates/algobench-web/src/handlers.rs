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

//! HTTP request handlers
//!
//! Axum handlers for the benchmark API.

use crate::state::AppState;
use crate::types::{
    AlgorithmInfo, BenchmarkAllRequest, BenchmarkRequest, BenchmarkResponse, HealthResponse,
};
use algobench_core::{BenchError, BenchmarkConfig, BenchmarkResult, Distribution, DEFAULT_SIZES};
use algobench_export::{render_markdown, timestamped_file_name, to_csv_string};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use tracing::{error, info, warn};

type JsonReply = (StatusCode, Json<BenchmarkResponse>);

type SweepOutcome = Result<Vec<BenchmarkResult>, (&'static str, BenchError)>;

fn failure(status: StatusCode, message: impl Into<String>) -> JsonReply {
    (status, Json(BenchmarkResponse::error(message)))
}

fn status_for(err: &BenchError) -> StatusCode {
    if err.is_config_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn join_failure(err: tokio::task::JoinError) -> JsonReply {
    error!("benchmark task failed: {}", err);
    failure(StatusCode::INTERNAL_SERVER_ERROR, "Benchmark task failed")
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let health = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.uptime_secs(),
        results_count: state.results_count(),
    };

    (StatusCode::OK, Json(health))
}

/// List registered algorithms
pub async fn list_algorithms(State(state): State<AppState>) -> Json<Vec<AlgorithmInfo>> {
    Json(state.algorithms())
}

/// Run a single benchmark
pub async fn run_benchmark(
    State(state): State<AppState>,
    payload: Result<Json<BenchmarkRequest>, JsonRejection>,
) -> JsonReply {
    let Ok(Json(req)) = payload else {
        return failure(StatusCode::BAD_REQUEST, "Invalid JSON request");
    };

    let distribution: Distribution = match req.array_type.parse() {
        Ok(d) => d,
        Err(e) => return failure(StatusCode::BAD_REQUEST, format!("Benchmark failed: {}", e)),
    };

    let config = BenchmarkConfig::new(req.algorithm)
        .with_distribution(distribution)
        .with_size(req.size)
        .with_runs(req.runs);

    info!(
        algorithm = config.algorithm(),
        size = config.size(),
        runs = config.runs(),
        "benchmark requested"
    );

    match state.with_engine(move |engine| engine.run_one(&config)).await {
        Ok(Ok(result)) => (
            StatusCode::OK,
            Json(BenchmarkResponse::with_results(vec![result])),
        ),
        Ok(Err(e)) => {
            warn!("benchmark failed: {}", e);
            failure(status_for(&e), format!("Benchmark failed: {}", e))
        }
        Err(e) => join_failure(e),
    }
}

/// Run the comprehensive sweep
pub async fn run_all_benchmarks(
    State(state): State<AppState>,
    payload: Result<Json<BenchmarkAllRequest>, JsonRejection>,
) -> JsonReply {
    let Ok(Json(req)) = payload else {
        return failure(StatusCode::BAD_REQUEST, "Invalid JSON request");
    };

    let sizes = req.sizes.unwrap_or_else(|| DEFAULT_SIZES.to_vec());
    let runs = req.runs;
    info!(runs, sizes = ?sizes, "comprehensive benchmark requested");

    let outcome = state
        .with_engine(move |engine| -> SweepOutcome {
            engine.clear_results();
            engine
                .run_search_sweep(&sizes, runs)
                .map_err(|e| ("Search benchmarks failed", e))?;
            engine
                .run_sort_sweep(&sizes, runs)
                .map_err(|e| ("Sort benchmarks failed", e))?;
            Ok(engine.results().to_vec())
        })
        .await;

    match outcome {
        Ok(Ok(results)) => (
            StatusCode::OK,
            Json(BenchmarkResponse::with_results(results)),
        ),
        Ok(Err((context, e))) => {
            warn!("{}: {}", context, e);
            failure(status_for(&e), format!("{}: {}", context, e))
        }
        Err(e) => join_failure(e),
    }
}

/// List stored results
pub async fn get_results(State(state): State<AppState>) -> JsonReply {
    match state.results().await {
        Ok(results) => (
            StatusCode::OK,
            Json(BenchmarkResponse::with_results(results)),
        ),
        Err(e) => join_failure(e),
    }
}

/// Clear stored results
pub async fn clear_results(State(state): State<AppState>) -> JsonReply {
    if let Err(e) = state.clear().await {
        return join_failure(e);
    }
    info!("results cleared");
    (StatusCode::OK, Json(BenchmarkResponse::ok("Results cleared")))
}

fn attachment(content_type: &str, extension: &str, body: String) -> Response {
    let filename = timestamped_file_name("benchmark_results", extension, &Local::now());
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", filename),
            ),
        ],
        body,
    )
        .into_response()
}

/// Download results as CSV
pub async fn export_csv(State(state): State<AppState>) -> Response {
    let results = match state.results().await {
        Ok(results) => results,
        Err(e) => return join_failure(e).into_response(),
    };
    if results.is_empty() {
        return (StatusCode::BAD_REQUEST, "No results to export").into_response();
    }

    match to_csv_string(&results) {
        Ok(body) => attachment("text/csv", "csv", body),
        Err(e) => {
            error!("CSV export failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Export failed: {}", e),
            )
                .into_response()
        }
    }
}

/// Download results as Markdown
pub async fn export_markdown(State(state): State<AppState>) -> Response {
    let results = match state.results().await {
        Ok(results) => results,
        Err(e) => return join_failure(e).into_response(),
    };
    if results.is_empty() {
        return (StatusCode::BAD_REQUEST, "No results to export").into_response();
    }

    attachment("text/markdown", "md", render_markdown(&results, &Local::now()))
}
