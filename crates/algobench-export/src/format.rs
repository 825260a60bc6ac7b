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

//! Human-readable formatting of durations, byte counts and file names.

use chrono::{DateTime, TimeZone};
use std::time::Duration;

const BYTE_UNITS: &[u8] = b"KMGTPE";

/// Formats a duration with two decimals in the largest fitting unit.
///
/// # Examples
///
/// ```
/// use algobench_export::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_nanos(999)), "999.00 ns");
/// assert_eq!(format_duration(Duration::from_nanos(1_500)), "1.50 μs");
/// assert_eq!(format_duration(Duration::from_millis(250)), "250.00 ms");
/// assert_eq!(format_duration(Duration::from_millis(2_500)), "2.50 s");
/// ```
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos() as f64;
    if d < Duration::from_micros(1) {
        format!("{:.2} ns", nanos)
    } else if d < Duration::from_millis(1) {
        format!("{:.2} μs", nanos / 1_000.0)
    } else if d < Duration::from_secs(1) {
        format!("{:.2} ms", nanos / 1_000_000.0)
    } else {
        format!("{:.2} s", d.as_secs_f64())
    }
}

/// Formats a byte count in binary units with one decimal.
///
/// # Examples
///
/// ```
/// use algobench_export::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1_536), "1.5 KB");
/// assert_eq!(format_bytes(8 * 1024 * 1024), "8.0 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return format!("{} B", bytes);
    }

    let (mut div, mut exp) = (UNIT, 0usize);
    let mut n = bytes / UNIT;
    while n >= UNIT && exp + 1 < BYTE_UNITS.len() {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!(
        "{:.1} {}B",
        bytes as f64 / div as f64,
        BYTE_UNITS[exp] as char
    )
}

/// Builds `{prefix}_{YYYYmmdd_HHMMSS}.{extension}`.
pub fn timestamped_file_name<Tz: TimeZone>(
    prefix: &str,
    extension: &str,
    at: &DateTime<Tz>,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.{}", prefix, at.format("%Y%m%d_%H%M%S"), extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_duration_boundaries() {
        assert_eq!(format_duration(Duration::ZERO), "0.00 ns");
        assert_eq!(format_duration(Duration::from_nanos(1_000)), "1.00 μs");
        assert_eq!(format_duration(Duration::from_nanos(999_999)), "1000.00 μs");
        assert_eq!(format_duration(Duration::from_millis(1)), "1.00 ms");
        assert_eq!(format_duration(Duration::from_secs(1)), "1.00 s");
        assert_eq!(format_duration(Duration::from_secs(90)), "90.00 s");
    }

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1_023), "1023 B");
        assert_eq!(format_bytes(1_024), "1.0 KB");
        assert_eq!(format_bytes(1_048_575), "1024.0 KB");
        assert_eq!(format_bytes(1 << 30), "1.0 GB");
        assert_eq!(format_bytes(u64::MAX), "16.0 EB");
    }

    #[test]
    fn test_timestamped_file_name() {
        let at = Utc.with_ymd_and_hms(2025, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(
            timestamped_file_name("results", "csv", &at),
            "results_20250307_090501.csv"
        );
    }
}
