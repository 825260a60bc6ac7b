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

//! List command - show the algorithm registry

use crate::error::CliError;
use algobench_core::Registry;
use colored::Colorize;
use std::io::Write;

/// Print every registered algorithm with its family and description.
pub fn list<W: Write>(out: &mut W) -> Result<(), CliError> {
    let registry = Registry::standard();

    writeln!(out, "{}", "Available algorithms:".bold())?;
    for descriptor in registry.iter() {
        writeln!(
            out,
            "  {:<16} {:<7} {}",
            descriptor.name(),
            descriptor.kind().as_str(),
            descriptor.description().dimmed()
        )?;
    }
    writeln!(out, "  {:<16} {:<7} {}", "all", "", "Every algorithm above".dimmed())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_names_every_algorithm() {
        let mut out = Vec::new();
        list(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        for name in [
            "linear_search",
            "binary_search",
            "bubble_sort",
            "insertion_sort",
            "merge_sort",
            "quick_sort",
            "heap_sort",
            "native_sort",
        ] {
            assert!(text.contains(name), "missing {}", name);
        }
    }
}
