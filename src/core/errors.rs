use thiserror::Error;

/// Unified error type for the entire seqflow library
#[derive(Debug, Error)]
pub enum SeqflowError {
    /// Dependency ordering found a cycle. `chain` names the keys along the
    /// cycle in traversal order, with the entry point repeated at the end.
    #[error("dependency cycle detected: {}", .chain.join(" -> "))]
    CycleDetected { chain: Vec<String> },

    /// An apply action failed; every previously-applied element has been
    /// rolled back. Carries the original apply error, never a rollback error.
    #[error("apply failed at element {index} ({rolled_back} element(s) rolled back)")]
    ApplyFailed {
        index: usize,
        rolled_back: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Every element of a fallback chain failed. Carries the last attempt's
    /// error; earlier failures were logged only.
    #[error("all {attempts} fallback attempts failed")]
    AllAttemptsFailed {
        attempts: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// First failure observed during bounded-parallel iteration.
    #[error("element action failed at index {index}")]
    ElementActionFailed {
        index: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Bounded-parallel iteration was invoked without an execution context
    /// capable of concurrent dispatch.
    #[error("invalid scheduling context: {message}")]
    InvalidSchedulingContext { message: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
    },

    /// Generic internal errors
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl SeqflowError {
    /// Create a cycle error from the offending key chain
    pub fn cycle(chain: Vec<String>) -> Self {
        Self::CycleDetected { chain }
    }

    /// Create an apply error wrapping the caller's original error
    pub fn apply_failed(index: usize, rolled_back: usize, source: anyhow::Error) -> Self {
        Self::ApplyFailed {
            index,
            rolled_back,
            source: source.into(),
        }
    }

    /// Create an exhausted-fallback error wrapping the last attempt's error
    pub fn all_attempts_failed(attempts: usize, source: anyhow::Error) -> Self {
        Self::AllAttemptsFailed {
            attempts,
            source: source.into(),
        }
    }

    /// Create an element-action error wrapping the first observed failure
    pub fn element_action_failed(index: usize, source: anyhow::Error) -> Self {
        Self::ElementActionFailed {
            index,
            source: source.into(),
        }
    }

    /// Create a scheduling-context error
    pub fn invalid_scheduling_context<S: Into<String>>(message: S) -> Self {
        Self::InvalidSchedulingContext {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            field: None,
        }
    }

    /// Create a configuration error naming the offending field
    pub fn configuration_field<S: Into<String>, F: Into<String>>(message: S, field: F) -> Self {
        Self::Configuration {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get error category for metrics/logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::CycleDetected { .. } => "cycle",
            Self::ApplyFailed { .. } => "apply",
            Self::AllAttemptsFailed { .. } => "fallback",
            Self::ElementActionFailed { .. } => "element_action",
            Self::InvalidSchedulingContext { .. } => "scheduling",
            Self::Configuration { .. } => "configuration",
            Self::Internal { .. } => "internal",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SeqflowError>;
