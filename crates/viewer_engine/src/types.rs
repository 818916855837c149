use std::fmt;

use serde_json::Value;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ScrapeCompleted {
        request_id: RequestId,
        result: Result<ScrapePayload, ScrapeError>,
    },
}

/// Successful backend reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapePayload {
    pub status: u16,
    /// The nested `result` object, exactly as received.
    pub result: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeError {
    pub kind: FailureKind,
    /// User-facing description of what went wrong.
    pub message: String,
}

impl ScrapeError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind)
    }
}

impl std::error::Error for ScrapeError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    Network,
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    NonJson { status: u16 },
    HttpStatus(u16),
    MissingResult,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::NonJson { status } => write!(f, "non-json body, status {status}"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MissingResult => write!(f, "missing result"),
        }
    }
}
