// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-sensor periodic reading stream.

use futures::Stream;
use pin_project::pin_project;
use sensorflux_core::{Reading, SensorId, StreamItem};
use sensorflux_gen::Synthesize;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::time::{sleep, sleep_until, Sleep};
use tokio_util::sync::{CancellationToken, WaitForCancellationFutureOwned};

/// A timer-driven producer that synthesizes one reading per period for a
/// single sensor and completes after a bounded number of emissions.
///
/// State machine: idle until the first period elapses, then one synthesis and
/// emission per tick until either the emission budget is exhausted
/// (completion), the cancellation token fires (cancellation), or synthesis
/// fails (the error is emitted as a terminal [`StreamItem::Error`]; pair with
/// [`RecoverExt`](crate::RecoverExt) to control what the consumer sees).
/// Every terminal transition drops the timer.
///
/// The timer is armed lazily on first poll, so a stream can be constructed
/// outside a runtime. Tick deadlines derive from the previous deadline, not
/// from poll time, so emission spacing does not drift under a slow consumer.
///
/// Cancellation is observed at poll time, before the timer: a cancelled
/// stream never emits again, even if a tick was already due.
#[pin_project]
pub struct ReadingStream {
    synthesizer: Arc<dyn Synthesize>,
    sensor_id: SensorId,
    period: Duration,
    remaining: usize,
    tick: u64,
    done: bool,
    #[pin]
    sleep: Option<Sleep>,
    #[pin]
    cancelled: WaitForCancellationFutureOwned,
}

impl ReadingStream {
    /// Creates a stream that emits `limit` readings for `sensor_id`, one per
    /// `period`, cancellable through `token`.
    pub fn new(
        synthesizer: Arc<dyn Synthesize>,
        sensor_id: SensorId,
        limit: usize,
        period: Duration,
        token: CancellationToken,
    ) -> Self {
        crate::info!(
            "Starting sensor stream for sensor_id={}, limit={}",
            sensor_id,
            limit
        );
        Self {
            synthesizer,
            sensor_id,
            period,
            remaining: limit,
            tick: 0,
            done: false,
            sleep: None,
            cancelled: token.cancelled_owned(),
        }
    }

    /// Sensor this stream is bound to.
    pub fn sensor_id(&self) -> SensorId {
        self.sensor_id
    }

    /// Emissions left before the stream completes.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl Stream for ReadingStream {
    type Item = StreamItem<Reading>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        // Cancellation wins over a due tick.
        if this.cancelled.as_mut().poll(cx).is_ready() {
            crate::warn!("Sensor stream cancelled for sensor_id={}", this.sensor_id);
            *this.done = true;
            this.sleep.set(None);
            return Poll::Ready(None);
        }

        if *this.remaining == 0 {
            crate::info!("Sensor stream completed for sensor_id={}", this.sensor_id);
            *this.done = true;
            this.sleep.set(None);
            return Poll::Ready(None);
        }

        loop {
            match this.sleep.as_mut().as_pin_mut() {
                None => {
                    this.sleep.set(Some(sleep(*this.period)));
                }
                Some(sleep_fut) => {
                    let deadline = sleep_fut.deadline();
                    match sleep_fut.poll(cx) {
                        Poll::Pending => return Poll::Pending,
                        Poll::Ready(()) => {
                            this.sleep.set(Some(sleep_until(deadline + *this.period)));
                            crate::debug!("Emitting sensor data at tick={}", this.tick);
                            *this.tick += 1;
                            *this.remaining -= 1;

                            return match this.synthesizer.synthesize(*this.sensor_id) {
                                Ok(reading) => Poll::Ready(Some(StreamItem::Value(reading))),
                                Err(err) => {
                                    crate::error!(
                                        "Error in sensor stream for sensor_id={}: {}",
                                        this.sensor_id,
                                        err
                                    );
                                    // A failed tick is terminal for the producer.
                                    *this.done = true;
                                    this.sleep.set(None);
                                    Poll::Ready(Some(StreamItem::Error(err)))
                                }
                            };
                        }
                    }
                }
            }
        }
    }
}
