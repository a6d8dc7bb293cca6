// MailSift - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; strings appear only at the UI boundary.

use std::fmt;

// ---------------------------------------------------------------------------
// Submission errors
// ---------------------------------------------------------------------------

/// Errors from submission preparation (the input gate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The normalized text contains no non-whitespace character.
    Empty,
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Email text is empty"),
        }
    }
}

impl std::error::Error for SubmissionError {}

// ---------------------------------------------------------------------------
// Classification errors
// ---------------------------------------------------------------------------

/// Errors from a classification or health-check round trip.
///
/// `Display` yields exactly the text the status line shows after its
/// "Error: " prefix, mirroring what the service reports:
/// the server-supplied detail when present, the numeric HTTP status
/// otherwise, or the transport/parse failure text.
#[derive(Debug)]
pub enum ClassifyError {
    /// The server answered with a non-success HTTP status.
    Status {
        code: u16,
        /// `detail` field extracted from the error body, when parseable.
        detail: Option<String>,
    },

    /// The request never completed (connection refused, DNS failure,
    /// interrupted transfer, oversized body).
    Transport { message: String },

    /// A success response carried a body that could not be parsed.
    MalformedBody { reason: String },
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => write!(f, "{detail}"),
            Self::Status { code, detail: None } => write!(f, "HTTP {code}"),
            Self::Transport { message } => write!(f, "{message}"),
            Self::MalformedBody { reason } => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for ClassifyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_with_detail_displays_detail_only() {
        let err = ClassifyError::Status {
            code: 503,
            detail: Some("model unavailable".to_string()),
        };
        assert_eq!(err.to_string(), "model unavailable");
    }

    #[test]
    fn status_without_detail_falls_back_to_code() {
        let err = ClassifyError::Status {
            code: 500,
            detail: None,
        };
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn transport_displays_underlying_message() {
        let err = ClassifyError::Transport {
            message: "Connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Connection refused");
    }
}
