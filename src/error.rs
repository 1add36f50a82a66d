//! Error codes shared by every error enum in the crate.
//!
//! DESIGN
//! ======
//! Each module owns a `thiserror` enum. Implementing [`ErrorCode`] gives it a
//! grepable `E_*` code and a retryable flag, which the dispatcher uses to
//! decide on retries and the HTTP layer uses to shape error bodies.

use serde::Serialize;

pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// Wire shape of an error: `{code, message, retryable}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub retryable: bool,
}

impl ErrorBody {
    #[must_use]
    pub fn from_error(err: &(impl ErrorCode + ?Sized)) -> Self {
        Self { code: err.error_code().to_string(), message: err.to_string(), retryable: err.retryable() }
    }
}
