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

//! Interactive command - menu-driven benchmarking session
//!
//! The session reads one answer per line. End of input ends the session the
//! same way as choosing "Exit".

use crate::commands::new_engine;
use crate::error::CliError;
use algobench_core::{BenchmarkConfig, BenchmarkEngine, Distribution, DEFAULT_SIZES};
use algobench_export::{export_csv, export_markdown, timestamped_file_name, write_results};
use chrono::Local;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const ARRAY_TYPES: [Distribution; 3] = [
    Distribution::Random,
    Distribution::Sorted,
    Distribution::ReverseSorted,
];

/// Run the interactive menu on stdin and stdout.
pub fn interactive(sizes: Vec<usize>, seed: Option<u64>) -> Result<(), CliError> {
    if sizes.is_empty() {
        return Err(CliError::invalid_argument("sizes", "must not be empty"));
    }

    let mut session =
        Interactive::new(new_engine(seed), io::stdin().lock(), io::stdout().lock())
            .with_sizes(sizes);
    session.run()
}

/// Menu loop over any line-oriented input and output.
pub struct Interactive<R, W> {
    engine: BenchmarkEngine,
    input: R,
    out: W,
    sizes: Vec<usize>,
    output_dir: PathBuf,
}

impl<R: BufRead, W: Write> Interactive<R, W> {
    /// Create a session using the default sweep sizes and the current
    /// directory for exports.
    pub fn new(engine: BenchmarkEngine, input: R, out: W) -> Self {
        Self {
            engine,
            input,
            out,
            sizes: DEFAULT_SIZES.to_vec(),
            output_dir: PathBuf::from("."),
        }
    }

    /// Sizes swept by the multi-algorithm entries.
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Directory that exported files are written to.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// The engine, with whatever results the session produced.
    pub fn engine(&self) -> &BenchmarkEngine {
        &self.engine
    }

    /// Run the menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), CliError> {
        writeln!(self.out, "Algorithm Benchmark Tool - Interactive Mode")?;
        writeln!(self.out, "{}", "=".repeat(42))?;

        loop {
            writeln!(self.out, "\nAvailable options:")?;
            writeln!(self.out, "1. Run single algorithm benchmark")?;
            writeln!(self.out, "2. Run all search algorithms")?;
            writeln!(self.out, "3. Run all sort algorithms")?;
            writeln!(self.out, "4. Run comprehensive benchmark")?;
            writeln!(self.out, "5. Export results")?;
            writeln!(self.out, "6. Exit")?;

            let Some(choice) = self.prompt("Enter your choice (1-6): ")? else {
                writeln!(self.out)?;
                return Ok(());
            };

            let keep_going = match choice.as_str() {
                "1" => self.single_benchmark()?,
                "2" => self.sweep(Sweep::Search)?,
                "3" => self.sweep(Sweep::Sort)?,
                "4" => self.sweep(Sweep::Comprehensive)?,
                "5" => self.export()?,
                "6" => {
                    writeln!(self.out, "Goodbye!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                    true
                }
            };

            if !keep_going {
                return Ok(());
            }
        }
    }

    fn single_benchmark(&mut self) -> Result<bool, CliError> {
        let names: Vec<String> = self
            .engine
            .registry()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect();

        writeln!(self.out, "\nAvailable algorithms:")?;
        for (i, name) in names.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, name)?;
        }

        let prompt = format!("Select algorithm (1-{}): ", names.len());
        let Some(choice) = self.prompt_number(&prompt)? else {
            return Ok(false);
        };
        let Some(algorithm) = choice
            .and_then(|c| c.checked_sub(1))
            .and_then(|i| names.get(i))
        else {
            writeln!(self.out, "Invalid choice.")?;
            return Ok(true);
        };

        writeln!(self.out, "\nArray types:")?;
        for (i, distribution) in ARRAY_TYPES.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, distribution.name())?;
        }
        let Some(choice) = self.prompt_number("Select array type (1-3): ")? else {
            return Ok(false);
        };
        let Some(&distribution) = choice
            .and_then(|c| c.checked_sub(1))
            .and_then(|i| ARRAY_TYPES.get(i))
        else {
            writeln!(self.out, "Invalid choice.")?;
            return Ok(true);
        };

        let Some(size) = self.prompt_number("Enter array size: ")? else {
            return Ok(false);
        };
        let Some(size) = size else {
            writeln!(self.out, "Invalid number.")?;
            return Ok(true);
        };

        let Some(runs) = self.prompt_number("Enter number of runs: ")? else {
            return Ok(false);
        };
        let Some(runs) = runs else {
            writeln!(self.out, "Invalid number.")?;
            return Ok(true);
        };

        self.engine.clear_results();
        let config = BenchmarkConfig::new(algorithm.as_str())
            .with_distribution(distribution)
            .with_size(size)
            .with_runs(runs);

        if let Err(e) = self.engine.run_one(&config) {
            writeln!(self.out, "Error: {}", e)?;
        }
        write_results(self.engine.results(), &mut self.out)?;

        Ok(true)
    }

    fn sweep(&mut self, sweep: Sweep) -> Result<bool, CliError> {
        let Some(runs) = self.prompt_number("Enter number of runs: ")? else {
            return Ok(false);
        };
        let Some(runs) = runs else {
            writeln!(self.out, "Invalid number.")?;
            return Ok(true);
        };

        self.engine.clear_results();
        let outcome = match sweep {
            Sweep::Search => {
                writeln!(self.out, "Running search benchmarks...")?;
                self.engine.run_search_sweep(&self.sizes, runs)
            }
            Sweep::Sort => {
                writeln!(self.out, "Running sort benchmarks...")?;
                self.engine.run_sort_sweep(&self.sizes, runs)
            }
            Sweep::Comprehensive => {
                writeln!(self.out, "Running all benchmarks...")?;
                self.engine.run_comprehensive(&self.sizes, runs)
            }
        };

        if let Err(e) = outcome {
            writeln!(self.out, "Error: {}", e)?;
        }
        write_results(self.engine.results(), &mut self.out)?;

        Ok(true)
    }

    fn export(&mut self) -> Result<bool, CliError> {
        if self.engine.results().is_empty() {
            writeln!(self.out, "No results to export.")?;
            return Ok(true);
        }

        writeln!(self.out, "\nExport options:")?;
        writeln!(self.out, "1. Export to CSV")?;
        writeln!(self.out, "2. Export to Markdown")?;
        writeln!(self.out, "3. Export to both")?;

        let Some(choice) = self.prompt("Select export format (1-3): ")? else {
            return Ok(false);
        };

        let now = Local::now();
        let (csv, markdown) = match choice.as_str() {
            "1" => (true, false),
            "2" => (false, true),
            "3" => (true, true),
            _ => {
                writeln!(self.out, "Invalid choice.")?;
                return Ok(true);
            }
        };

        if csv {
            let path = self
                .output_dir
                .join(timestamped_file_name("results", "csv", &now));
            match export_csv(self.engine.results(), &path) {
                Ok(()) => writeln!(self.out, "Results exported to {}", path.display())?,
                Err(e) => writeln!(self.out, "Error: {}", e)?,
            }
        }

        if markdown {
            let path = self
                .output_dir
                .join(timestamped_file_name("results", "md", &now));
            match export_markdown(self.engine.results(), &path) {
                Ok(()) => writeln!(self.out, "Results exported to {}", path.display())?,
                Err(e) => writeln!(self.out, "Error: {}", e)?,
            }
        }

        Ok(true)
    }

    /// Prints `text` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, CliError> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Self::prompt`], with the answer parsed as a count. The inner
    /// `None` marks an unparsable answer.
    fn prompt_number(&mut self, text: &str) -> Result<Option<Option<usize>>, CliError> {
        Ok(self.prompt(text)?.map(|answer| answer.parse().ok()))
    }
}

#[derive(Clone, Copy)]
enum Sweep {
    Search,
    Sort,
    Comprehensive,
}

#[cfg(test)]
mod tests {
    use super::*;
    use algobench_core::algorithms::native_sort;
    use algobench_core::{AlgorithmDescriptor, NullProbe, Registry};
    use rand::RngCore;
    use std::io::Cursor;

    fn engine() -> BenchmarkEngine {
        BenchmarkEngine::with_seed(3).with_probe(Box::new(NullProbe))
    }

    fn session_with(
        engine: BenchmarkEngine,
        script: &str,
    ) -> Interactive<Cursor<Vec<u8>>, Vec<u8>> {
        Interactive::new(engine, Cursor::new(script.as_bytes().to_vec()), Vec::new())
            .with_sizes(vec![30])
    }

    fn session(script: &str) -> Interactive<Cursor<Vec<u8>>, Vec<u8>> {
        session_with(engine(), script)
    }

    /// Sorts, then breaks the order.
    fn unsorting_sort(input: &[i64], _rng: &mut dyn RngCore) -> Vec<i64> {
        let mut output = input.to_vec();
        output.sort_unstable();
        output.reverse();
        output
    }

    fn output(session: &Interactive<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.out.clone()).unwrap()
    }

    #[test]
    fn test_exit() {
        let mut s = session("6\n");
        s.run().unwrap();
        let text = output(&s);
        assert!(text.starts_with("Algorithm Benchmark Tool - Interactive Mode"));
        assert!(text.contains("Enter your choice (1-6): "));
        assert!(text.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut s = session("");
        s.run().unwrap();
        assert!(!output(&s).contains("Goodbye!"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let mut s = session("9\nabc\n6\n");
        s.run().unwrap();
        let text = output(&s);
        assert_eq!(text.matches("Invalid choice. Please try again.").count(), 2);
        assert_eq!(text.matches("Enter your choice (1-6): ").count(), 3);
    }

    #[test]
    fn test_single_benchmark() {
        // merge_sort, reverse sorted, size 200, 2 runs
        let mut s = session("1\n5\n3\n200\n2\n6\n");
        s.run().unwrap();

        let results = s.engine().results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].algorithm, "merge_sort");
        assert_eq!(results[0].array_type, "Reverse Sorted");
        assert_eq!(results[0].size, 200);
        assert_eq!(results[0].runs, 2);
        assert!(output(&s).contains("BENCHMARK RESULTS"));
    }

    #[test]
    fn test_single_benchmark_rejects_out_of_range() {
        let mut s = session("1\n0\n1\n9\n6\n");
        s.run().unwrap();
        assert_eq!(output(&s).matches("Invalid choice.\n").count(), 2);
        assert!(s.engine().results().is_empty());
    }

    #[test]
    fn test_single_benchmark_rejects_bad_size() {
        let mut s = session("1\n1\n1\nlots\n6\n");
        s.run().unwrap();
        assert!(output(&s).contains("Invalid number."));
        assert!(s.engine().results().is_empty());
    }

    #[test]
    fn test_zero_runs_reports_error() {
        let mut s = session("1\n1\n1\n10\n0\n6\n");
        s.run().unwrap();
        assert!(output(&s).contains("Error: "));
        assert!(s.engine().results().is_empty());
    }

    #[test]
    fn test_sweeps_replace_results() {
        let mut s = session("2\n1\n");
        s.run().unwrap();
        assert_eq!(s.engine().results().len(), 2 * 3);

        let mut s = session("2\n1\n3\n1\n6\n");
        s.run().unwrap();
        let results = s.engine().results();
        assert_eq!(results.len(), 6 * 3);
        assert_eq!(results[0].algorithm, "bubble_sort");
        assert!(results.iter().all(|r| r.size == 30));
    }

    #[test]
    fn test_failed_sweep_shows_earlier_results() {
        colored::control::set_override(false);
        let mut registry = Registry::empty();
        registry.register(AlgorithmDescriptor::sort(
            "native_sort",
            "baseline",
            native_sort,
        ));
        registry.register(AlgorithmDescriptor::sort(
            "unsorting_sort",
            "broken",
            unsorting_sort,
        ));

        let mut s = session_with(engine().with_registry(registry), "3\n1\n6\n");
        s.run().unwrap();

        assert_eq!(s.engine().results().len(), 3);
        let text = output(&s);
        let error_at = text.find("Error: ").unwrap();
        let report_at = text.find("BENCHMARK RESULTS").unwrap();
        assert!(error_at < report_at);
        assert!(text.contains("unsorting_sort"));
        assert_eq!(text.matches("Algorithm: native_sort").count(), 3);
        assert!(text.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_comprehensive() {
        let mut s = session("4\n1\n6\n");
        s.run().unwrap();
        assert_eq!(s.engine().results().len(), 8 * 3);
        assert!(output(&s).contains("Running all benchmarks..."));
    }

    #[test]
    fn test_export_without_results() {
        let mut s = session("5\n6\n");
        s.run().unwrap();
        assert!(output(&s).contains("No results to export."));
    }

    #[test]
    fn test_export_both() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session("2\n1\n5\n3\n6\n").with_output_dir(dir.path());
        s.run().unwrap();

        let mut names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(names.len(), 2);
        assert!(names[0].starts_with("results_") && names[0].ends_with(".csv"));
        assert!(names[1].starts_with("results_") && names[1].ends_with(".md"));
        assert_eq!(output(&s).matches("Results exported to ").count(), 2);
    }
}
