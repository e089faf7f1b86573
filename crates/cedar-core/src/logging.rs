#![forbid(unsafe_code)]

//! Logging shim.
//!
//! With the `tracing` feature the tracing macros are re-exported here and at
//! the crate root. Without it the same macro names expand to nothing, so
//! call sites compile either way.
//!
//! Severity mapping for the log levels Cedar has always used:
//!
//! | Cedar level | tracing macro |
//! |-------------|---------------|
//! | debug       | `debug!`      |
//! | info        | `info!`       |
//! | warning     | `warn!`       |
//! | error       | `error!`      |
//! | critical    | `error!` with `critical = true` |
//! | fatal       | `error!` with `fatal = true`, then the caller exits |

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, info_span, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    #[macro_export]
    macro_rules! info_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// Span stand-in when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }

    pub fn entered(self) -> NoopGuard {
        NoopGuard
    }
}

#[cfg(not(feature = "tracing"))]
pub struct NoopGuard;
