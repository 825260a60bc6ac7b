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

//! Timing and memory measurement primitives.
//!
//! Memory is observed through a [`MemoryProbe`]. The default probe,
//! [`AllocationProbe`], reads the live-byte counter maintained by
//! [`CountingAllocator`]. Binaries that want memory figures install it:
//!
//! ```ignore
//! use algobench_core::measurement::CountingAllocator;
//!
//! #[global_allocator]
//! static GLOBAL: CountingAllocator = CountingAllocator;
//! ```
//!
//! Without the allocator installed the counters never move and every memory
//! delta reads zero.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

static LIVE_BYTES: AtomicUsize = AtomicUsize::new(0);
static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

/// Global allocator wrapper that tracks live heap bytes.
///
/// Delegates to [`System`] and keeps process-wide counters.
pub struct CountingAllocator;

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ret = System.alloc(layout);
        if !ret.is_null() {
            LIVE_BYTES.fetch_add(layout.size(), Ordering::Relaxed);
            ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
        }
        ret
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ret = System.alloc_zeroed(layout);
        if !ret.is_null() {
            LIVE_BYTES.fetch_add(layout.size(), Ordering::Relaxed);
            ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
        }
        ret
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        LIVE_BYTES.fetch_sub(layout.size(), Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let ret = System.realloc(ptr, layout, new_size);
        if !ret.is_null() {
            if new_size >= layout.size() {
                LIVE_BYTES.fetch_add(new_size - layout.size(), Ordering::Relaxed);
            } else {
                LIVE_BYTES.fetch_sub(layout.size() - new_size, Ordering::Relaxed);
            }
            ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
        }
        ret
    }
}

/// Bytes currently allocated through [`CountingAllocator`].
pub fn live_bytes() -> u64 {
    LIVE_BYTES.load(Ordering::Relaxed) as u64
}

/// Number of allocations served by [`CountingAllocator`] so far.
pub fn allocation_count() -> u64 {
    ALLOCATIONS.load(Ordering::Relaxed) as u64
}

/// Source of heap snapshots taken around each trial.
pub trait MemoryProbe: Send {
    /// Brings the heap to a quiescent state before a snapshot.
    fn settle(&mut self) {}

    /// Returns the number of live heap bytes.
    fn live_bytes(&self) -> u64;
}

/// Probe backed by the [`CountingAllocator`] counters.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllocationProbe;

impl MemoryProbe for AllocationProbe {
    fn live_bytes(&self) -> u64 {
        live_bytes()
    }
}

/// Probe that always reports an empty heap.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProbe;

impl MemoryProbe for NullProbe {
    fn live_bytes(&self) -> u64 {
        0
    }
}

/// What a single trial observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialObservation {
    /// Wall-clock time spent in the algorithm.
    pub duration: Duration,
    /// Heap growth across the call, floored at zero.
    pub memory_delta: u64,
}

/// Times `f` and records the heap growth it caused.
///
/// The value returned by `f` is still alive when the closing snapshot is
/// taken, so its allocation counts toward the delta.
pub fn observe<T, F>(probe: &mut dyn MemoryProbe, f: F) -> (T, TrialObservation)
where
    F: FnOnce() -> T,
{
    probe.settle();
    let before = probe.live_bytes();

    let start = Instant::now();
    let value = f();
    let duration = start.elapsed();

    let after = probe.live_bytes();

    (
        value,
        TrialObservation {
            duration,
            memory_delta: after.saturating_sub(before),
        },
    )
}
