// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concurrent multi-sensor fan-out.

use crate::reading_stream::ReadingStream;
use crate::recover::RecoverExt;
use futures::stream::select_all;
use futures::Stream;
use sensorflux_core::{Reading, RecoveryMode, SensorId, StreamItem};
use sensorflux_gen::Synthesize;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Runs one [`ReadingStream`] per sensor id `1..=sensor_count` concurrently
/// and merges their emissions in arrival order.
///
/// Each sub-stream gets a per-sensor budget of `total_limit / sensor_count`.
/// The integer division is deliberate: the remainder is silently dropped,
/// never redistributed, so a fan-out can emit fewer than `total_limit`
/// readings in total.
///
/// Recovery applies per sub-stream: a failing sensor ends (or surfaces its
/// error, per `recovery`) without affecting the other sensors' streams.
///
/// Every sub-stream runs on its own timer off a child of `token`; cancelling
/// `token` cancels all of them, timers included. The merged stream completes
/// once every sub-stream has completed. There is no ordering guarantee
/// across sensor ids.
pub fn fan_out(
    synthesizer: Arc<dyn Synthesize>,
    sensor_count: usize,
    total_limit: usize,
    period: Duration,
    recovery: RecoveryMode,
    token: CancellationToken,
) -> impl Stream<Item = StreamItem<Reading>> + Send {
    let per_sensor_limit = if sensor_count == 0 {
        0
    } else {
        total_limit / sensor_count
    };
    crate::info!(
        "Starting multi-sensor stream with sensor_count={}, total_limit={}, per_sensor_limit={}",
        sensor_count,
        total_limit,
        per_sensor_limit
    );

    let streams = (1..=sensor_count as SensorId).map(|sensor_id| {
        let stream = ReadingStream::new(
            synthesizer.clone(),
            sensor_id,
            per_sensor_limit,
            period,
            token.child_token(),
        )
        .recover(recovery);
        Box::pin(stream) as Pin<Box<dyn Stream<Item = StreamItem<Reading>> + Send>>
    });

    select_all(streams)
}
