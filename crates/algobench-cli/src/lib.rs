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

//! AlgoBench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Benchmarking
//!
//! - **run**: benchmark one algorithm, or every algorithm with `--algorithm all`
//! - **list**: list the registered algorithms
//!
//! ## Front Ends
//!
//! - **interactive**: numbered menu on stdin/stdout
//! - **serve**: HTTP JSON API
//!
//! # Examples
//!
//! ```text
//! algobench run --algorithm quick_sort --size 10000 --runs 10
//! algobench run --algorithm all --array-type random --export-csv results.csv
//! algobench interactive
//! algobench serve --port 8080
//! ```

pub mod cli;
pub mod commands;
pub mod error;
