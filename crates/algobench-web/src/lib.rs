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

//! AlgoBench HTTP API
//!
//! A small JSON API over the measurement engine.
//!
//! # Endpoints
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | GET | `/api/health` | liveness and version |
//! | GET | `/api/algorithms` | registered algorithms |
//! | POST | `/api/benchmark` | run one configuration |
//! | POST | `/api/benchmark/all` | clear, then run every algorithm |
//! | GET | `/api/results` | stored results |
//! | POST | `/api/clear` | drop stored results |
//! | GET | `/api/export/csv` | download results as CSV |
//! | GET | `/api/export/md` | download results as Markdown |
//!
//! # Example
//!
//! ```no_run
//! use algobench_web::{serve, AppState, ServerConfig};
//!
//! # async fn run() -> Result<(), algobench_web::ServerError> {
//! serve(&ServerConfig::default(), AppState::default()).await
//! # }
//! ```

pub mod handlers;
pub mod state;
pub mod types;

pub use state::AppState;
pub use types::{AlgorithmInfo, BenchmarkAllRequest, BenchmarkRequest, BenchmarkResponse};

use axum::routing::{get, post};
use axum::Router;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Server errors
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound.
    #[error("failed to bind {address}: {message}")]
    Bind {
        /// Requested address.
        address: String,
        /// Underlying error message.
        message: String,
    },

    /// The server stopped with an I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Sets the interface to bind.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/algorithms", get(handlers::list_algorithms))
        .route("/api/benchmark", post(handlers::run_benchmark))
        .route("/api/benchmark/all", post(handlers::run_all_benchmarks))
        .route("/api/results", get(handlers::get_results))
        .route("/api/clear", post(handlers::clear_results))
        .route("/api/export/csv", get(handlers::export_csv))
        .route("/api/export/md", get(handlers::export_markdown))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `config`'s address and serves the API until the server stops.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<(), ServerError> {
    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| ServerError::Bind {
            address: address.clone(),
            message: e.to_string(),
        })?;

    info!("AlgoBench API listening on http://{}", address);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.address(), "0.0.0.0:8080");

        let config = config.with_host("127.0.0.1").with_port(9000);
        assert_eq!(config.address(), "127.0.0.1:9000");
    }
}
