use thiserror::Error;
use tracing::{error, warn};

use crate::catalog::CatalogTable;

/// Domain-specific errors for theme synchronization.
///
/// Per the controller's degradation policy these are logged where they occur
/// and almost never propagate: [`crate::controller::ThemeController::initialize`]
/// is the only public method that returns one (so the embedding application
/// can retry setup after fixing the catalog).
#[derive(Error, Debug)]
pub enum ThemeSyncError {
    #[error("style catalog is missing required tables: {missing:?}")]
    MissingCatalog { missing: Vec<CatalogTable> },

    #[error("unknown theme identifier '{0}'")]
    UnknownTheme(String),

    #[error("transport not ready; message dropped")]
    TransportUnready,

    #[error("failed to encode protocol message: {0}")]
    ProtocolEncode(#[from] serde_json::Error),
}

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the caller doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use theme_sync::error::ResultExt;
///
/// // Log and continue if the send is dropped
/// transport.send(envelope).warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
