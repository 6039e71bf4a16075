// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # sensorflux
//!
//! A synthetic sensor telemetry generator: periodic single- and multi-sensor
//! reading streams, synchronous bulk generation, and an unbounded in-memory
//! history of everything ever synthesized.
//!
//! This is a simulation and demo tool, not a telemetry ingestion system:
//! there is no persistence, no authentication, and no clustering. History
//! grows without bound until explicitly cleared — that is a feature of the
//! simulated system, kept on purpose.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use sensorflux::{StreamConfig, TelemetryService};
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = TelemetryService::new(StreamConfig::default());
//!
//!     // One reading per second for sensor 1, ten readings total.
//!     let mut stream = Box::pin(service.stream(1, None));
//!     while let Some(item) = stream.next().await {
//!         if let Some(reading) = item.ok() {
//!             println!("{}: value={:.2}", reading.sensor_id, reading.value);
//!         }
//!     }
//! }
//! ```

pub mod config;
pub mod service;

pub use self::config::StreamConfig;
pub use self::service::{BulkData, TelemetryService};

// Re-export the types clients handle directly
pub use sensorflux_core::{Reading, RecoveryMode, Result, SensorId, StreamItem, TelemetryError};
pub use sensorflux_gen::{Clock, HistoryStore, SensorSynthesizer, Synthesize, SystemClock};
pub use sensorflux_stream::{fan_out, ReadingStream, RecoverExt};
pub use tokio_util::sync::CancellationToken;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::StreamConfig;
    pub use crate::service::{BulkData, TelemetryService};
    pub use crate::CancellationToken;
    pub use sensorflux_core::{Reading, RecoveryMode, SensorId, StreamItem};
    pub use sensorflux_stream::RecoverExt;
}
