// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Boundary error recovery for reading streams.

use futures::Stream;
use pin_project::pin_project;
use sensorflux_core::{RecoveryMode, StreamItem};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Extension trait providing the `recover` operator for streams of
/// [`StreamItem`].
pub trait RecoverExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Applies the boundary error contract to this stream.
    ///
    /// With [`RecoveryMode::CompleteOnError`] the first error item is logged
    /// and swallowed, and the stream terminates as if it had completed
    /// normally — the consumer cannot distinguish failure from completion.
    /// This is the legacy contract of the system and the default.
    ///
    /// With [`RecoveryMode::Surface`] the error item is delivered downstream
    /// before the stream terminates.
    ///
    /// Either way an error is terminal: nothing is emitted after it.
    fn recover(self, mode: RecoveryMode) -> Recover<Self> {
        Recover {
            inner: self,
            mode,
            done: false,
        }
    }
}

impl<S, T> RecoverExt<T> for S where S: Stream<Item = StreamItem<T>> {}

/// Stream returned by [`RecoverExt::recover`].
#[pin_project]
pub struct Recover<S> {
    #[pin]
    inner: S,
    mode: RecoveryMode,
    done: bool,
}

impl<S, T> Stream for Recover<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        match this.inner.poll_next(cx) {
            Poll::Ready(Some(StreamItem::Error(err))) => {
                *this.done = true;
                match this.mode {
                    RecoveryMode::CompleteOnError => {
                        crate::error!("Recovering from error in sensor stream: {}", err);
                        Poll::Ready(None)
                    }
                    RecoveryMode::Surface => Poll::Ready(Some(StreamItem::Error(err))),
                }
            }
            other => other,
        }
    }
}
