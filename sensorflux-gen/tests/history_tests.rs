// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensorflux_core::Reading;
use sensorflux_gen::HistoryStore;

fn reading(sensor_id: i64, timestamp: i64, value: f64) -> Reading {
    Reading {
        sensor_id,
        timestamp,
        temperature: 20.0,
        humidity: 50.0,
        pressure: 1013.0,
        value,
        anomaly: false,
    }
}

#[test]
fn test_get_on_unknown_sensor_returns_empty() {
    let store = HistoryStore::new();
    assert!(store.get(99, 0).is_empty());
}

#[test]
fn test_get_sorts_ascending_by_timestamp() {
    // Arrange: appends arrive out of timestamp order
    let store = HistoryStore::new();
    store.append(1, reading(1, 300, 0.0));
    store.append(1, reading(1, 100, 0.0));
    store.append(1, reading(1, 200, 0.0));

    // Act
    let history = store.get(1, 0);

    // Assert
    let timestamps: Vec<i64> = history.iter().map(|r| r.timestamp).collect();
    assert_eq!(timestamps, vec![100, 200, 300]);
}

#[test]
fn test_get_sort_is_stable_for_equal_timestamps() {
    // Arrange: same timestamp, distinguishable by value
    let store = HistoryStore::new();
    store.append(1, reading(1, 100, 1.0));
    store.append(1, reading(1, 100, 2.0));
    store.append(1, reading(1, 50, 3.0));
    store.append(1, reading(1, 100, 4.0));

    // Act
    let history = store.get(1, 0);

    // Assert: equal-timestamp entries keep insertion order
    let values: Vec<f64> = history.iter().map(|r| r.value).collect();
    assert_eq!(values, vec![3.0, 1.0, 2.0, 4.0]);
}

#[test]
fn test_limit_truncates_to_prefix() {
    // Arrange
    let store = HistoryStore::new();
    for ts in [500, 100, 400, 200, 300] {
        store.append(1, reading(1, ts, 0.0));
    }

    // Act & Assert: limit > 0 returns the first entries by timestamp
    let limited = store.get(1, 3);
    let timestamps: Vec<i64> = limited.iter().map(|r| r.timestamp).collect();
    assert_eq!(timestamps, vec![100, 200, 300]);

    // limit of 0 returns everything
    assert_eq!(store.get(1, 0).len(), 5);

    // limit larger than the history returns everything
    assert_eq!(store.get(1, 50).len(), 5);
}

#[test]
fn test_get_returns_an_independent_copy() {
    // Arrange
    let store = HistoryStore::new();
    store.append(1, reading(1, 100, 0.0));

    // Act: mutating the returned vector must not affect the store
    let mut copy = store.get(1, 0);
    copy.clear();

    // Assert
    assert_eq!(store.get(1, 0).len(), 1);
}

#[test]
fn test_clear_all_empties_every_sensor() {
    // Arrange
    let store = HistoryStore::new();
    for sensor_id in 1..=4 {
        for ts in 0..3 {
            store.append(sensor_id, reading(sensor_id, ts, 0.0));
        }
    }
    assert_eq!(store.sensor_count(), 4);
    let generation_before = store.generation();

    // Act
    store.clear_all();

    // Assert
    assert_eq!(store.sensor_count(), 0);
    for sensor_id in 1..=4 {
        assert!(store.get(sensor_id, 0).is_empty());
    }
    // The generation counter survives a clear
    assert_eq!(store.generation(), generation_before);
}

#[test]
fn test_store_repopulates_after_clear() {
    // Arrange
    let store = HistoryStore::new();
    store.append(1, reading(1, 100, 0.0));
    store.clear_all();

    // Act
    store.append(1, reading(1, 200, 0.0));

    // Assert
    let history = store.get(1, 0);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].timestamp, 200);
}

#[test]
fn test_concurrent_appends_and_reads_are_safe() {
    // Arrange
    let store = std::sync::Arc::new(HistoryStore::new());
    let writers = 4;
    let appends_per_writer = 100;

    // Act: concurrent appends to the same sensor while a reader polls
    let mut handles: Vec<_> = (0..writers)
        .map(|w| {
            let store = store.clone();
            std::thread::spawn(move || {
                for i in 0..appends_per_writer {
                    store.append(5, reading(5, (w * appends_per_writer + i) as i64, 0.0));
                }
            })
        })
        .collect();
    handles.push({
        let store = store.clone();
        std::thread::spawn(move || {
            for _ in 0..50 {
                let snapshot = store.get(5, 0);
                // Snapshots are always consistent: sorted, never corrupt
                assert!(snapshot.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
            }
        })
    });
    for handle in handles {
        handle.join().unwrap();
    }

    // Assert
    assert_eq!(store.get(5, 0).len(), writers * appends_per_writer);
}
