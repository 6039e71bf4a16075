// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for the sensorflux synthetic telemetry workspace.
//!
//! This crate defines the [`Reading`] value emitted by every stream, the
//! [`StreamItem`] element type carried by those streams, the
//! [`TelemetryError`] taxonomy, and the [`RecoveryMode`] flag that controls
//! how stream-internal failures are presented to consumers.

pub mod error;
pub mod reading;
pub mod recovery;
pub mod stream_item;

pub use self::error::{Result, TelemetryError};
pub use self::reading::{Reading, SensorId};
pub use self::recovery::RecoveryMode;
pub use self::stream_item::StreamItem;
