// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the capture timestamp fed into the synthesis formulas.
///
/// The production implementation reads the system clock; tests inject a
/// deterministic clock so the sinusoids and history ordering can be asserted
/// exactly.
pub trait Clock: Send + Sync {
    /// Returns the current time as milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;
}

/// Wall-clock [`Clock`] backed by [`SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        // A system clock before the epoch yields 0 rather than an error;
        // readings never fail to synthesize.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}
