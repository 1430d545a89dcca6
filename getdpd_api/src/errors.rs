//! Error types for the API client and the status code classifier.

/// Errors that can occur when calling the DPD API.
///
/// HTTP-derived variants carry the diagnostic log captured from the failed
/// response: the status line followed by every response header, one per
/// line, separated by `\r\n`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// HTTP 401: the account username/password were rejected.
    #[error("Unauthorized: invalid account credentials\r\n{log}")]
    Unauthorized { log: String },
    /// HTTP 403: authenticated, but not allowed to access the resource.
    #[error("Forbidden: access to this resource is not permitted\r\n{log}")]
    Forbidden { log: String },
    /// HTTP 404: the resource does not exist.
    #[error("Not found: the requested resource does not exist\r\n{log}")]
    NotFound { log: String },
    /// HTTP 412: the request failed validation.
    #[error("Validation failed: the request parameters were rejected\r\n{log}")]
    ValidationFailed { log: String },
    /// HTTP 500: the API hit an internal error.
    #[error("Server error: the API encountered an internal error\r\n{log}")]
    ServerError { log: String },
    /// HTTP 503: the API is temporarily unavailable.
    #[error("Service unavailable: the API is temporarily unavailable\r\n{log}")]
    ServiceUnavailable { log: String },
    /// Any other non-200 status.
    #[error("Unknown API error (HTTP {status})\r\n{log}")]
    UnknownApiError { status: u16, log: String },
    /// A required identifying argument was missing. Raised before any request is sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The request never produced an HTTP status (DNS, connect, timeout, body read).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// A response body could not be decoded as JSON.
    #[error("Failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),
    /// A response body was read as text but is not valid UTF-8.
    #[error("Response body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Discrete failure category of an [`Error`], independent of its message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unauthorized,
    Forbidden,
    NotFound,
    ValidationFailed,
    ServerError,
    ServiceUnavailable,
    UnknownApiError,
    InvalidArgument,
    Transport,
    InvalidUrl,
    Parse,
}

impl Error {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Unauthorized { .. } => ErrorKind::Unauthorized,
            Error::Forbidden { .. } => ErrorKind::Forbidden,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::ValidationFailed { .. } => ErrorKind::ValidationFailed,
            Error::ServerError { .. } => ErrorKind::ServerError,
            Error::ServiceUnavailable { .. } => ErrorKind::ServiceUnavailable,
            Error::UnknownApiError { .. } => ErrorKind::UnknownApiError,
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::Transport(_) => ErrorKind::Transport,
            Error::InvalidUrl(_) => ErrorKind::InvalidUrl,
            Error::Parse(_) | Error::InvalidUtf8(_) => ErrorKind::Parse,
        }
    }

    /// The HTTP status code, for errors derived from an API response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Unauthorized { .. } => Some(401),
            Error::Forbidden { .. } => Some(403),
            Error::NotFound { .. } => Some(404),
            Error::ValidationFailed { .. } => Some(412),
            Error::ServerError { .. } => Some(500),
            Error::ServiceUnavailable { .. } => Some(503),
            Error::UnknownApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The diagnostic log captured from the failed response.
    pub fn log(&self) -> Option<&str> {
        match self {
            Error::Unauthorized { log }
            | Error::Forbidden { log }
            | Error::NotFound { log }
            | Error::ValidationFailed { log }
            | Error::ServerError { log }
            | Error::ServiceUnavailable { log }
            | Error::UnknownApiError { log, .. } => Some(log.as_str()),
            _ => None,
        }
    }
}

/// Maps a non-200 HTTP status and its diagnostic log to an [`Error`].
///
/// Total: statuses outside the known table become [`Error::UnknownApiError`].
/// Nothing here retries, not even for 503.
pub fn classify(status: u16, log: String) -> Error {
    match status {
        401 => Error::Unauthorized { log },
        403 => Error::Forbidden { log },
        404 => Error::NotFound { log },
        412 => Error::ValidationFailed { log },
        500 => Error::ServerError { log },
        503 => Error::ServiceUnavailable { log },
        status => Error::UnknownApiError { status, log },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_map_to_their_kind() {
        let table = [
            (401, ErrorKind::Unauthorized),
            (403, ErrorKind::Forbidden),
            (404, ErrorKind::NotFound),
            (412, ErrorKind::ValidationFailed),
            (500, ErrorKind::ServerError),
            (503, ErrorKind::ServiceUnavailable),
        ];
        for (status, kind) in table {
            let err = classify(status, String::new());
            assert_eq!(err.kind(), kind, "status {}", status);
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn other_statuses_are_unknown() {
        for status in [201, 204, 302, 400, 418, 429, 502, 504] {
            let err = classify(status, String::new());
            assert_eq!(err.kind(), ErrorKind::UnknownApiError);
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn message_appends_log_verbatim() {
        let log = "HTTP/1.1 404 Not Found\r\ncontent-type: application/json".to_string();
        let err = classify(404, log.clone());
        assert_eq!(err.log(), Some(log.as_str()));
        let message = err.to_string();
        assert!(message.starts_with("Not found"));
        assert!(message.ends_with(&log));
    }

    #[test]
    fn unknown_message_names_status() {
        let err = classify(418, "HTTP/1.1 418 I'm a teapot".to_string());
        assert!(err.to_string().contains("HTTP 418"));
    }

    #[test]
    fn invalid_argument_has_no_status_or_log() {
        let err = Error::InvalidArgument("subscriber id or username is required");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.status(), None);
        assert_eq!(err.log(), None);
        assert_eq!(
            err.to_string(),
            "Invalid argument: subscriber id or username is required"
        );
    }
}
