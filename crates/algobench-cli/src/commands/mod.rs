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

//! CLI command implementations

mod interactive;
mod list;
mod run;
mod serve;

pub use interactive::{interactive, Interactive};
pub use list::list;
pub use run::{run, RunOptions};
pub use serve::serve;

use algobench_core::BenchmarkEngine;

/// Creates an engine, seeded when `seed` is given.
pub fn new_engine(seed: Option<u64>) -> BenchmarkEngine {
    match seed {
        Some(seed) => BenchmarkEngine::with_seed(seed),
        None => BenchmarkEngine::new(),
    }
}
