// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Streaming and generation facade.

use crate::config::StreamConfig;
use futures::Stream;
use sensorflux_core::{Reading, Result, SensorId, StreamItem};
use sensorflux_gen::{Clock, HistoryStore, SensorSynthesizer, Synthesize, SystemClock};
use sensorflux_stream::{fan_out, ReadingStream, RecoverExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Response of [`TelemetryService::generate_bulk`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkData {
    /// One reading per requested sensor id, in ascending id order.
    pub data: Vec<Reading>,
    /// Number of readings in `data`.
    pub count: usize,
    /// Time the bulk response was assembled, epoch milliseconds.
    pub timestamp: i64,
}

/// Entry point for clients: periodic streams, bulk generation, and history
/// access over one shared synthesizer and history store.
///
/// The service owns no background tasks; every stream it hands out drives its
/// own timer and stops it on completion, cancellation, or drop.
pub struct TelemetryService {
    store: Arc<HistoryStore>,
    synthesizer: Arc<dyn Synthesize>,
    clock: Arc<dyn Clock>,
    config: StreamConfig,
}

impl Default for TelemetryService {
    fn default() -> Self {
        Self::new(StreamConfig::default())
    }
}

impl TelemetryService {
    /// Creates a service with a fresh history store and the system clock.
    pub fn new(config: StreamConfig) -> Self {
        let store = Arc::new(HistoryStore::new());
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let synthesizer: Arc<dyn Synthesize> = Arc::new(SensorSynthesizer::with_clock(
            store.clone(),
            clock.clone(),
        ));
        Self {
            store,
            synthesizer,
            clock,
            config,
        }
    }

    /// Assembles a service from explicit parts. This is the seam tests use to
    /// inject a deterministic clock or a misbehaving synthesizer.
    pub fn with_parts(
        store: Arc<HistoryStore>,
        synthesizer: Arc<dyn Synthesize>,
        clock: Arc<dyn Clock>,
        config: StreamConfig,
    ) -> Self {
        Self {
            store,
            synthesizer,
            clock,
            config,
        }
    }

    /// The history store backing this service.
    pub fn store(&self) -> &Arc<HistoryStore> {
        &self.store
    }

    /// The configuration this service resolves defaults from.
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Streams one reading per period for `sensor_id`, up to `limit`
    /// readings (default when absent or non-positive), with the configured
    /// recovery applied. Dropping the stream stops its timer.
    pub fn stream(
        &self,
        sensor_id: SensorId,
        limit: Option<usize>,
    ) -> impl Stream<Item = StreamItem<Reading>> + Send + 'static {
        self.stream_with_token(sensor_id, limit, CancellationToken::new())
    }

    /// Like [`stream`](Self::stream), cancellable through a caller-owned
    /// token.
    pub fn stream_with_token(
        &self,
        sensor_id: SensorId,
        limit: Option<usize>,
        token: CancellationToken,
    ) -> impl Stream<Item = StreamItem<Reading>> + Send + 'static {
        let limit = resolve(limit, self.config.default_limit);
        ReadingStream::new(
            self.synthesizer.clone(),
            sensor_id,
            limit,
            self.config.period,
            token,
        )
        .recover(self.config.recovery)
    }

    /// Streams `sensor_count` sensors concurrently (default 5) against a
    /// total budget of `limit` readings (default 20), merged in arrival
    /// order.
    pub fn stream_multi(
        &self,
        sensor_count: Option<usize>,
        limit: Option<usize>,
    ) -> impl Stream<Item = StreamItem<Reading>> + Send + 'static {
        self.stream_multi_with_token(sensor_count, limit, CancellationToken::new())
    }

    /// Like [`stream_multi`](Self::stream_multi), cancellable as a unit
    /// through a caller-owned token: cancelling it cancels every per-sensor
    /// sub-stream.
    pub fn stream_multi_with_token(
        &self,
        sensor_count: Option<usize>,
        limit: Option<usize>,
        token: CancellationToken,
    ) -> impl Stream<Item = StreamItem<Reading>> + Send + 'static {
        let sensor_count = resolve(sensor_count, self.config.default_sensor_count);
        let total_limit = resolve(limit, self.config.default_total_limit);
        fan_out(
            self.synthesizer.clone(),
            sensor_count,
            total_limit,
            self.config.period,
            self.config.recovery,
            token,
        )
    }

    /// Synthesizes one reading per id synchronously, ids sorted ascending
    /// with duplicates preserved.
    pub fn generate_bulk(&self, sensor_ids: &[SensorId]) -> Result<BulkData> {
        let mut sorted_ids = sensor_ids.to_vec();
        sorted_ids.sort_unstable();

        let mut data = Vec::with_capacity(sorted_ids.len());
        for sensor_id in sorted_ids {
            data.push(self.synthesizer.synthesize(sensor_id)?);
        }

        Ok(BulkData {
            count: data.len(),
            data,
            timestamp: self.clock.now_ms(),
        })
    }

    /// Readings recorded for `sensor_id`, ascending by timestamp, truncated
    /// to `limit` entries when `limit > 0`.
    pub fn history(&self, sensor_id: SensorId, limit: usize) -> Vec<Reading> {
        self.store.get(sensor_id, limit)
    }

    /// Wipes every sensor's history.
    pub fn clear_history(&self) {
        self.store.clear_all();
    }

    /// Total number of readings ever synthesized through this service.
    pub fn generation(&self) -> u64 {
        self.store.generation()
    }
}

/// Absent and non-positive parameters silently fall back to the default.
fn resolve(value: Option<usize>, default: usize) -> usize {
    match value {
        Some(v) if v > 0 => v,
        _ => default,
    }
}
