// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timer-driven sensor reading streams.
//!
//! A [`ReadingStream`] emits one synthesized reading per period for a single
//! sensor, up to a bounded count, and stops promptly when its cancellation
//! token fires. [`fan_out`] runs several of those concurrently and merges
//! their emissions in arrival order. [`RecoverExt::recover`] decides whether
//! a stream-internal failure reaches the consumer or ends the stream quietly.
//!
//! Ordering guarantees: within one sensor's stream, emissions are strictly
//! tick-ordered; across sensors in a fan-out there is no ordering guarantee.

mod logging;

pub mod fan_out;
pub mod reading_stream;
pub mod recover;

pub use self::fan_out::fan_out;
pub use self::reading_stream::ReadingStream;
pub use self::recover::RecoverExt;
