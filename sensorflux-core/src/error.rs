// Copyright 2025 sensorflux contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for sensorflux operations.
//!
//! There is deliberately no fatal category here: every error a stream can
//! carry is recoverable at the boundary (see `RecoveryMode`), and invalid
//! parameters are substituted with defaults rather than rejected.

/// Root error type for synthesis and streaming operations.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Reading synthesis failed for a sensor.
    #[error("Synthesis error: {context}")]
    SynthesisError {
        /// Description of what went wrong during synthesis
        context: String,
    },

    /// Stream machinery encountered an error outside of synthesis.
    #[error("Stream error: {context}")]
    StreamError {
        /// Description of what went wrong in the stream pipeline
        context: String,
    },

    /// Custom error from user code, wrapped for propagation through streams.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TelemetryError {
    /// Create a synthesis error with the given context.
    pub fn synthesis_error(context: impl Into<String>) -> Self {
        Self::SynthesisError {
            context: context.into(),
        }
    }

    /// Create a stream error with the given context.
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamError {
            context: context.into(),
        }
    }

    /// Wrap a user error.
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }
}

impl Clone for TelemetryError {
    fn clone(&self) -> Self {
        match self {
            Self::SynthesisError { context } => Self::SynthesisError {
                context: context.clone(),
            },
            Self::StreamError { context } => Self::StreamError {
                context: context.clone(),
            },
            // Boxed source errors cannot be cloned; degrade to their message
            Self::UserError(e) => Self::StreamError {
                context: format!("User error: {e}"),
            },
        }
    }
}

/// Specialized `Result` for sensorflux operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;
