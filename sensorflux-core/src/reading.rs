// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};

/// Identifier of a virtual sensor.
///
/// Accepted unchecked everywhere: there is no valid range, and negative ids
/// feed the same trigonometric transform as positive ones.
pub type SensorId = i64;

/// One synthesized sensor data point.
///
/// A `Reading` is created exactly once per synthesis call and never mutated
/// afterwards. The history store keeps its own clone, independent of the copy
/// that travels down a stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Sensor this reading was synthesized for.
    pub sensor_id: SensorId,
    /// Capture time, milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Simulated temperature, bounded to `[15, 25]` by its sinusoid.
    pub temperature: f64,
    /// Simulated relative humidity, bounded to `[30, 70]`.
    pub humidity: f64,
    /// Simulated pressure, bounded to `[1003, 1023]`.
    pub pressure: f64,
    /// Derived composite magnitude, always non-negative.
    pub value: f64,
    /// Probabilistic anomaly marker, not a statistical detector.
    pub anomaly: bool,
}
