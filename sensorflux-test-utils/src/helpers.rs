// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use sensorflux_core::StreamItem;
use std::time::Duration;
use tokio::time::sleep;

/// Panics if `stream` emits anything within `timeout_ms` milliseconds.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        item = stream.next() => {
            if item.is_some() {
                panic!("Unexpected element emitted, expected no output.");
            }
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Returns the next value from the stream, panicking on completion or on an
/// error item.
pub async fn next_value<S, T>(stream: &mut S) -> T
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    stream
        .next()
        .await
        .expect("expected next item")
        .expect("expected value, got error item")
}

/// Drains the stream to completion, unwrapping every item into a value.
pub async fn collect_values<S, T>(stream: S) -> Vec<T>
where
    S: Stream<Item = StreamItem<T>>,
{
    stream
        .map(|item| item.expect("expected value, got error item"))
        .collect()
        .await
}
