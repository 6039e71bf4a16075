// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the sensorflux workspace.
//!
//! This crate provides a deterministic clock, an error-injecting synthesizer,
//! and stream assertion helpers. It is for development and testing only, not
//! for production code.

pub mod failing_synthesizer;
pub mod fixed_clock;
pub mod helpers;

pub use self::failing_synthesizer::FailingSynthesizer;
pub use self::fixed_clock::FixedClock;
pub use self::helpers::{assert_no_element_emitted, collect_values, next_value};
