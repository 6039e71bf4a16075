// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error injection for testing stream recovery behavior.

use sensorflux_core::{Reading, Result, SensorId, TelemetryError};
use sensorflux_gen::{SensorSynthesizer, Synthesize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A [`Synthesize`] implementation that fails exactly once, at a specified
/// call position, and otherwise delegates to a real [`SensorSynthesizer`].
///
/// Calls before the failure position append to the underlying history store
/// as usual, so tests can assert what was synthesized before the injected
/// failure.
pub struct FailingSynthesizer {
    inner: SensorSynthesizer,
    fail_at: usize,
    calls: AtomicUsize,
}

impl FailingSynthesizer {
    /// Wraps `inner`, injecting an error on the `fail_at`-th call
    /// (0-indexed).
    pub fn new(inner: SensorSynthesizer, fail_at: usize) -> Self {
        Self {
            inner,
            fail_at,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of synthesize calls observed so far, including the failed one.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Synthesize for FailingSynthesizer {
    fn synthesize(&self, sensor_id: SensorId) -> Result<Reading> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call == self.fail_at {
            return Err(TelemetryError::synthesis_error(format!(
                "Injected test error at call {call}"
            )));
        }
        self.inner.synthesize(sensor_id)
    }
}
