//! Error handling for libemojihub
//!
//! This module provides the crate-wide error type and the per-thread
//! last-error slot used by the C ABI.

use std::cell::RefCell;
use std::fmt;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error codes, shared verbatim with C callers
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Operation succeeded
    Success = 0,
    /// Generic/unknown error
    Unknown = 1,
    /// Invalid argument provided
    InvalidArgument = 2,
    /// Null pointer was passed
    NullPointer = 3,
    /// Invalid UTF-8 string
    InvalidUtf8 = 4,
    /// The request could not complete (DNS, connection, timeout)
    Transport = 5,
    /// The server answered with a non-2xx status
    Http = 6,
    /// The body was not JSON or did not have the expected shape
    Decode = 7,
    /// Invalid state for operation
    InvalidState = 8,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Success",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::InvalidArgument => "Invalid argument",
            ErrorCode::NullPointer => "Null pointer",
            ErrorCode::InvalidUtf8 => "Invalid UTF-8 string",
            ErrorCode::Transport => "Transport error",
            ErrorCode::Http => "HTTP error",
            ErrorCode::Decode => "Decode error",
            ErrorCode::InvalidState => "Invalid state",
        }
    }
}

/// Internal error type
#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    /// HTTP status code, always present for `ErrorCode::Http`
    pub(crate) http_status: Option<u16>,
    /// URL of the request that failed, if any
    pub(crate) url: Option<String>,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Error {
            code,
            message: message.into(),
            http_status: None,
            url: None,
        }
    }

    pub fn null_pointer() -> Self {
        Error::new(ErrorCode::NullPointer, "Null pointer provided")
    }

    pub fn invalid_utf8() -> Self {
        Error::new(ErrorCode::InvalidUtf8, "Invalid UTF-8 string")
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::InvalidArgument, msg)
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::InvalidState, msg)
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::Transport, msg)
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Error::new(ErrorCode::Decode, msg)
    }

    /// Non-success response. The body is not inspected.
    pub fn http(status: u16) -> Self {
        Error::new(ErrorCode::Http, format!("server responded with status {status}"))
            .with_http_status(status)
    }

    /// Add HTTP status code (builder pattern)
    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Add the request URL (builder pattern)
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Get the HTTP status code if available
    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }

    /// Get the request URL if available
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_transport(&self) -> bool {
        self.code == ErrorCode::Transport
    }

    pub fn is_http(&self) -> bool {
        self.code == ErrorCode::Http
    }

    pub fn is_decode(&self) -> bool {
        self.code == ErrorCode::Decode
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for Error {}

// Last error per calling thread, errno-style
thread_local! {
    static LAST_ERROR: RefCell<Option<Error>> = const { RefCell::new(None) };
}

/// Set the last error (called internally when FFI functions fail)
pub(crate) fn set_last_error(error: Error) {
    LAST_ERROR.with(|last| *last.borrow_mut() = Some(error));
}

/// Clear the last error
pub(crate) fn clear_last_error() {
    LAST_ERROR.with(|last| *last.borrow_mut() = None);
}

/// Get the last error (for FFI)
pub(crate) fn get_last_error() -> Option<Error> {
    LAST_ERROR.with(|last| last.borrow().clone())
}
