// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use sensorflux_core::RecoveryMode;
use sensorflux_gen::{HistoryStore, SensorSynthesizer};
use sensorflux_stream::fan_out;
use sensorflux_test_utils::{collect_values, next_value, FailingSynthesizer};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{pause, Instant};
use tokio_util::sync::CancellationToken;

const PERIOD: Duration = Duration::from_secs(1);

fn synthesizer() -> (Arc<HistoryStore>, Arc<SensorSynthesizer>) {
    let store = Arc::new(HistoryStore::new());
    let synthesizer = Arc::new(SensorSynthesizer::new(store.clone()));
    (store, synthesizer)
}

#[tokio::test]
async fn test_fan_out_divides_the_budget_across_sensors() {
    // Arrange
    pause();
    let (store, synthesizer) = synthesizer();
    let stream = fan_out(
        synthesizer,
        4,
        20,
        PERIOD,
        RecoveryMode::CompleteOnError,
        CancellationToken::new(),
    );

    // Act
    let readings = collect_values(stream).await;

    // Assert: 4 sub-streams, 5 readings each
    assert_eq!(readings.len(), 20);
    let mut per_sensor: HashMap<i64, usize> = HashMap::new();
    for reading in &readings {
        *per_sensor.entry(reading.sensor_id).or_default() += 1;
    }
    assert_eq!(per_sensor.len(), 4);
    for sensor_id in 1..=4 {
        assert_eq!(per_sensor[&sensor_id], 5);
        assert_eq!(store.get(sensor_id, 0).len(), 5);
    }
    assert_eq!(store.generation(), 20);
}

#[tokio::test]
async fn test_fan_out_truncates_the_division_remainder() {
    // Arrange: 20 / 3 = 6, remainder 2 silently dropped
    pause();
    let (_store, synthesizer) = synthesizer();
    let stream = fan_out(
        synthesizer,
        3,
        20,
        PERIOD,
        RecoveryMode::CompleteOnError,
        CancellationToken::new(),
    );

    // Act
    let readings = collect_values(stream).await;

    // Assert
    assert_eq!(readings.len(), 18);
}

#[tokio::test(start_paused = true)]
async fn test_fan_out_sub_streams_run_concurrently() {
    // Arrange
    let (_store, synthesizer) = synthesizer();
    let stream = fan_out(
        synthesizer,
        4,
        20,
        PERIOD,
        RecoveryMode::CompleteOnError,
        CancellationToken::new(),
    );
    let started = Instant::now();

    // Act
    let readings = collect_values(stream).await;

    // Assert: 5 ticks of wall time, not 20 - the sub-streams share each tick
    assert_eq!(readings.len(), 20);
    assert_eq!(started.elapsed(), Duration::from_secs(5));
}

#[tokio::test]
async fn test_fan_out_uses_sensor_ids_one_through_count() {
    // Arrange
    pause();
    let (_store, synthesizer) = synthesizer();
    let stream = fan_out(
        synthesizer,
        5,
        5,
        PERIOD,
        RecoveryMode::CompleteOnError,
        CancellationToken::new(),
    );

    // Act
    let readings = collect_values(stream).await;

    // Assert
    let mut ids: Vec<i64> = readings.iter().map(|r| r.sensor_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_cancelling_the_fan_out_cancels_every_sub_stream() {
    // Arrange
    pause();
    let (store, synthesizer) = synthesizer();
    let token = CancellationToken::new();
    let mut stream = Box::pin(fan_out(
        synthesizer,
        4,
        400,
        PERIOD,
        RecoveryMode::CompleteOnError,
        token.clone(),
    ));

    // Act: drain the first tick (one reading per sensor), then cancel the unit
    for _ in 0..4 {
        next_value(&mut stream).await;
    }
    token.cancel();

    // Assert: all sub-streams stop, no orphaned timers keep emitting
    let cancelled_at = Instant::now();
    assert!(stream.next().await.is_none());
    assert_eq!(cancelled_at.elapsed(), Duration::ZERO);
    let total: usize = (1..=4).map(|id| store.get(id, 0).len()).sum();
    assert_eq!(total, 4);
}

#[tokio::test]
async fn test_a_failing_sub_stream_does_not_stop_its_siblings() {
    // Arrange: the third synthesize call overall fails, killing one
    // sub-stream during the first tick
    pause();
    let store = Arc::new(HistoryStore::new());
    let failing = Arc::new(FailingSynthesizer::new(
        SensorSynthesizer::new(store.clone()),
        2,
    ));
    let stream = fan_out(
        failing,
        4,
        20,
        PERIOD,
        RecoveryMode::CompleteOnError,
        CancellationToken::new(),
    );

    // Act
    let readings = collect_values(stream).await;

    // Assert: the failed sensor emitted nothing, the other three ran to
    // completion with 5 readings each
    assert_eq!(readings.len(), 15);
    let mut per_sensor: HashMap<i64, usize> = HashMap::new();
    for reading in &readings {
        *per_sensor.entry(reading.sensor_id).or_default() += 1;
    }
    assert_eq!(per_sensor.len(), 3);
    assert!(per_sensor.values().all(|&count| count == 5));
}
