//! Grepable error codes for structured logs.
//!
//! Every error type that can reach a route handler implements [`ErrorCode`]
//! so failures are logged with a stable code next to the message. The
//! `retryable` flag is informational; this service never retries.

pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}
