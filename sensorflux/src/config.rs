// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensorflux_core::RecoveryMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of readings for a single-sensor stream.
pub const DEFAULT_LIMIT: usize = 10;
/// Default number of sensors in a fan-out.
pub const DEFAULT_SENSOR_COUNT: usize = 5;
/// Default total emission budget for a fan-out.
pub const DEFAULT_TOTAL_LIMIT: usize = 20;
/// Default tick period.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// Tunables for the streaming facade.
///
/// Absent or non-positive request parameters are never rejected; they are
/// silently substituted with the defaults configured here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Interval between ticks of every stream.
    pub period: Duration,
    /// Emission count for a single-sensor stream when the caller supplies
    /// none (or a non-positive one).
    pub default_limit: usize,
    /// Sensor count for a fan-out when the caller supplies none.
    pub default_sensor_count: usize,
    /// Total emission budget for a fan-out when the caller supplies none.
    pub default_total_limit: usize,
    /// What a consumer observes when a stream fails internally.
    pub recovery: RecoveryMode,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            default_limit: DEFAULT_LIMIT,
            default_sensor_count: DEFAULT_SENSOR_COUNT,
            default_total_limit: DEFAULT_TOTAL_LIMIT,
            recovery: RecoveryMode::default(),
        }
    }
}
