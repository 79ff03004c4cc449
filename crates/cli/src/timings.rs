// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phase timing instrumentation.
//!
//! Each timed phase emits a `debug` event on the `timings` target, so
//! `-vv` or `RUST_LOG=timings=debug` shows where a run spends its time.

use std::time::Instant;

/// Emit the elapsed time of a phase.
#[inline]
pub fn record_timing(phase: &str, start: Instant) {
    let elapsed = start.elapsed();
    tracing::debug!(target: "timings", phase, elapsed_ms = elapsed.as_millis() as u64);
}

/// Macro for timing a block of code.
///
/// Usage:
/// ```rust,ignore
/// let issues = time_phase!("source::fetch", { source.fetch()? });
/// ```
#[macro_export]
macro_rules! time_phase {
    ($phase:expr, $block:expr) => {{
        let __start = std::time::Instant::now();
        let __result = $block;
        $crate::timings::record_timing($phase, __start);
        __result
    }};
}
