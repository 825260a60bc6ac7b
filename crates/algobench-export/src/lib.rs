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

//! AlgoBench result presentation
//!
//! Renders [`BenchmarkResult`](algobench_core::BenchmarkResult)s for people
//! and spreadsheets.
//!
//! ## Formats
//!
//! - **Console**: block report with colored headings
//! - **CSV**: one row per result, durations in nanoseconds
//! - **Markdown**: summary table plus per-algorithm detail tables

pub mod console;
pub mod error;
pub mod format;
pub mod markdown;
pub mod to_csv;

pub use console::write_results;
pub use error::{ExportError, Result};
pub use format::{format_bytes, format_duration, timestamped_file_name};
pub use markdown::{export_markdown, render_markdown};
pub use to_csv::{export_csv, to_csv_string, write_csv, CSV_HEADER};
