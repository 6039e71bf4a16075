// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};

/// Controls what a consumer observes when a stream fails internally.
///
/// The legacy contract of this system is that a failed stream ends quietly,
/// indistinguishable from normal completion. That hides operational problems,
/// so the behavior is a configuration flag rather than a hard-coded rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryMode {
    /// Log the error and terminate the stream as if it had completed
    /// normally. No error item ever reaches the consumer.
    #[default]
    CompleteOnError,
    /// Deliver the error item downstream before the stream terminates.
    Surface,
}
