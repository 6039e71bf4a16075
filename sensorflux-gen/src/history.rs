// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Unbounded, append-only per-sensor reading log.
//!
//! Growth is intentionally unbounded: no eviction, no capping, no rotation.
//! The only way entries leave the store is [`HistoryStore::clear_all`]. This
//! mirrors the system being simulated and is covered by tests; do not add a
//! bound here.

use parking_lot::RwLock;
use sensorflux_core::{Reading, SensorId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Concurrency-safe map from sensor id to every reading ever synthesized for
/// that sensor, in insertion order.
///
/// The store also carries the global generation counter: one increment per
/// appended reading, shared across all sensors, never reset (not even by
/// [`clear_all`](Self::clear_all)).
#[derive(Debug, Default)]
pub struct HistoryStore {
    histories: RwLock<HashMap<SensorId, Vec<Reading>>>,
    generation: AtomicU64,
}

impl HistoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a reading to the log for `sensor_id`, creating the log if this
    /// is the sensor's first reading.
    ///
    /// Safe to call concurrently for the same or different sensor ids; no
    /// append is ever lost.
    pub fn append(&self, sensor_id: SensorId, reading: Reading) {
        self.histories
            .write()
            .entry(sensor_id)
            .or_default()
            .push(reading);
        self.generation.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns an independent copy of the readings for `sensor_id`, sorted
    /// ascending by timestamp.
    ///
    /// When `limit > 0` the result is truncated to the first `limit` entries
    /// of the sorted sequence; `limit == 0` returns everything. A sensor with
    /// no history yields an empty vector.
    ///
    /// Entries are already in insertion order, but concurrent high-frequency
    /// appends can interleave timestamps across writers, so a stable sort is
    /// applied on every read.
    pub fn get(&self, sensor_id: SensorId, limit: usize) -> Vec<Reading> {
        let mut readings = self
            .histories
            .read()
            .get(&sensor_id)
            .cloned()
            .unwrap_or_default();

        readings.sort_by_key(|r| r.timestamp);
        if limit > 0 && readings.len() > limit {
            readings.truncate(limit);
        }
        readings
    }

    /// Removes every sensor's history. The generation counter is unaffected.
    pub fn clear_all(&self) {
        self.histories.write().clear();
        crate::info!("Cleared sensor history store");
    }

    /// Total number of readings ever appended, across all sensors.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Relaxed)
    }

    /// Number of sensors that currently have at least one reading.
    pub fn sensor_count(&self) -> usize {
        self.histories.read().len()
    }
}
