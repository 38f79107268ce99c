//! Component layer errors.
//!
//! Discovery-time misses (unknown names, unresolvable scopes, unnamed
//! markers, missing references) never surface as errors anywhere in the
//! system — they resolve to "nothing found". The only failures that exist
//! as values are the ones a component's own behavior raises, and the single
//! place they propagate is an awaited `init`.
//!
//! # Error Code Convention
//!
//! All component errors use the `COMPONENT_` prefix:
//!
//! | Error | Code | Recoverable |
//! |-------|------|-------------|
//! | [`InitFailed`](ComponentError::InitFailed) | `COMPONENT_INIT_FAILED` | Yes |
//! | [`ExecutionFailed`](ComponentError::ExecutionFailed) | `COMPONENT_EXECUTION_FAILED` | Yes |
//!
//! # Example
//!
//! ```
//! use armature_component::ComponentError;
//!
//! let err = ComponentError::InitFailed("missing endpoint".into());
//! assert_eq!(err.code(), "COMPONENT_INIT_FAILED");
//! assert!(err.is_recoverable());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised by a component's own behavior hooks.
///
/// An `Err` returned from `init` aborts the current orchestration batch:
/// it propagates to the orchestration caller and leaves every later
/// descriptor un-instantiated, with no rollback of already-initialized
/// instances.
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
pub enum ComponentError {
    /// One-time asynchronous setup failed.
    ///
    /// **Recoverable** - a later orchestration pass may succeed.
    #[error("initialization failed: {0}")]
    InitFailed(String),

    /// A behavior operation failed after initialization.
    ///
    /// **Recoverable** - retry may succeed.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}

impl ComponentError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InitFailed(_) => "COMPONENT_INIT_FAILED",
            Self::ExecutionFailed(_) => "COMPONENT_EXECUTION_FAILED",
        }
    }

    /// Returns whether a retry could succeed.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InitFailed(_) => true,
            Self::ExecutionFailed(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_failed_error() {
        let err = ComponentError::InitFailed("no endpoint".into());
        assert_eq!(err.code(), "COMPONENT_INIT_FAILED");
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("initialization failed"));
    }

    #[test]
    fn execution_failed_error() {
        let err = ComponentError::ExecutionFailed("timeout".into());
        assert_eq!(err.code(), "COMPONENT_EXECUTION_FAILED");
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("execution failed"));
    }

    #[test]
    fn error_code_prefix() {
        let errors = vec![
            ComponentError::InitFailed("x".into()),
            ComponentError::ExecutionFailed("x".into()),
        ];
        for err in errors {
            assert!(err.code().starts_with("COMPONENT_"));
        }
    }

    #[test]
    fn roundtrips_through_serde() {
        let err = ComponentError::InitFailed("x".into());
        let json = serde_json::to_string(&err).unwrap();
        let back: ComponentError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.code(), err.code());
    }
}
