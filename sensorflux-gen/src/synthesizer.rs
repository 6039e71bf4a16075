// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-tick reading synthesis.

use crate::clock::{Clock, SystemClock};
use crate::history::HistoryStore;
use rand::Rng;
use sensorflux_core::{Reading, Result, SensorId};
use std::sync::Arc;
use std::time::Instant;

/// Number of uniform random thresholds drawn per anomaly scan.
const ANOMALY_DRAWS: usize = 100;
/// Absolute distance within which a drawn threshold marks a reading anomalous.
const ANOMALY_TOLERANCE: f64 = 0.5;

/// Seam between the stream layer and reading synthesis.
///
/// The production implementation is [`SensorSynthesizer`] and never fails;
/// the `Result` exists so the stream layer can model a failed tick and so
/// tests can inject errors.
pub trait Synthesize: Send + Sync {
    /// Synthesizes one reading for `sensor_id`.
    fn synthesize(&self, sensor_id: SensorId) -> Result<Reading>;
}

/// Synthesizes readings from wall-clock sinusoids and appends each one to the
/// injected [`HistoryStore`].
///
/// The numeric model is fixed for behavioral parity with the system being
/// simulated:
///
/// - `temperature = 20 + 5 * sin(now_ms / 1000)`
/// - `humidity    = 50 + 20 * cos(now_ms / 2000)`
/// - `pressure    = 1013 + 10 * sin(now_ms / 3000)`
/// - `value       = |(x, y, z)|` where the coordinates use
///   `sensor_id % 360` / `sensor_id % 45` directly as radians
///
/// The modulo results are used as radians, not degrees. That makes the
/// coordinate transform physically meaningless, which is fine: only the
/// resulting magnitude matters, and it must match the original model.
pub struct SensorSynthesizer {
    store: Arc<HistoryStore>,
    clock: Arc<dyn Clock>,
}

impl SensorSynthesizer {
    /// Creates a synthesizer over the given store, using the system clock.
    pub fn new(store: Arc<HistoryStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Creates a synthesizer with an injected clock.
    pub fn with_clock(store: Arc<HistoryStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// The store this synthesizer appends to.
    pub fn store(&self) -> &Arc<HistoryStore> {
        &self.store
    }

    /// Current time according to the injected clock, in epoch milliseconds.
    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }
}

impl Synthesize for SensorSynthesizer {
    /// Always succeeds; `sensor_id` is accepted unchecked.
    fn synthesize(&self, sensor_id: SensorId) -> Result<Reading> {
        let started = Instant::now();
        let now_ms = self.clock.now_ms();

        let temperature = 20.0 + 5.0 * (now_ms as f64 / 1000.0).sin();
        let humidity = 50.0 + 20.0 * (now_ms as f64 / 2000.0).cos();
        let pressure = 1013.0 + 10.0 * (now_ms as f64 / 3000.0).sin();

        let x = temperature * ((sensor_id % 360) as f64).cos();
        let y = humidity * ((sensor_id % 360) as f64).sin();
        let z = pressure * ((sensor_id % 45) as f64).tan();
        let value = (x * x + y * y + z * z).sqrt();

        let mut rng = rand::rng();
        let mut anomaly = false;
        for _ in 0..ANOMALY_DRAWS {
            let threshold = rng.random_range(0.0..100.0);
            for quantity in [temperature, humidity, pressure] {
                if (quantity - threshold).abs() < ANOMALY_TOLERANCE {
                    anomaly = true;
                }
            }
        }

        let reading = Reading {
            sensor_id,
            timestamp: now_ms,
            temperature,
            humidity,
            pressure,
            value,
            anomaly,
        };

        self.store.append(sensor_id, reading.clone());

        crate::debug!(
            "Generated sensor data for sensor_id={}, took={}ms, total_generated={}",
            sensor_id,
            started.elapsed().as_millis(),
            self.store.generation()
        );

        Ok(reading)
    }
}
