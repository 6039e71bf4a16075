// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reading synthesis and history storage.
//!
//! This crate holds the stateful heart of sensorflux: the
//! [`SensorSynthesizer`] that turns a sensor id and the current wall-clock
//! time into a [`Reading`](sensorflux_core::Reading), and the unbounded
//! [`HistoryStore`] every synthesized reading is appended to.
//!
//! Both are explicit component instances passed by `Arc` to whoever needs
//! them; there are no process-wide singletons here.

mod logging;

pub mod clock;
pub mod history;
pub mod synthesizer;

pub use self::clock::{Clock, SystemClock};
pub use self::history::HistoryStore;
pub use self::synthesizer::{SensorSynthesizer, Synthesize};
