//! Error types for lazy-data requests.
//!
//! Every failure an [`HttpAction`](crate::HttpAction) call can produce is a
//! variant of [`Error`]. Errors raised inside a request attempt are first
//! surfaced to the `on_error` hook as a notification, then returned to the
//! caller; no variant is ever swallowed.

use http::StatusCode;

/// The main error type for lazy-data requests.
///
/// The first four variants are the request-lifecycle failures; the remaining
/// ones report configuration mistakes made before a request is attempted and
/// therefore never reach the `on_error` hook.
///
/// # Examples
///
/// ```no_run
/// use lazydata::{Error, HttpAction, RequestSpec};
///
/// # async fn example() -> Result<(), Error> {
/// let action = HttpAction::builder().build()?;
///
/// match action.perform(RequestSpec::new("https://api.example.com/user")).await {
///     Ok(payload) => println!("fetched: {:?}", payload),
///     Err(Error::Server { status, message }) => {
///         eprintln!("server said {}: {}", status, message);
///     }
///     Err(Error::Decode { status, source }) => {
///         eprintln!("bad json (status {}): {}", status, source);
///     }
///     Err(e) => eprintln!("request failed: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request spec had no URL.
    ///
    /// Raised synchronously before any I/O or hook invocation. An empty
    /// string counts as absent.
    #[error("request url is required")]
    MissingUrl,

    /// The server returned a non-2xx HTTP status code.
    ///
    /// `message` is the response body text when the body was non-empty,
    /// otherwise a synthesized message embedding the status code. The
    /// `Display` form is exactly `message`, so callers matching on error
    /// text see what the server sent.
    #[error("{message}")]
    Server {
        /// The HTTP status code.
        status: StatusCode,
        /// The response body text, or a synthesized status message.
        message: String,
    },

    /// The response declared a JSON content type but the body failed to parse.
    #[error("failed to decode json response: {source}")]
    Decode {
        /// The underlying parse error.
        source: serde_json::Error,
        /// The (successful) HTTP status of the undecodable response.
        status: StatusCode,
    },

    /// A network-level error occurred (DNS, connection refused, abort, etc.).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A request URL could not be parsed or joined against the base URL.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid configuration was provided, such as a malformed header
    /// name or value.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request body could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialize(String),
}

impl Error {
    /// Returns the HTTP status code if a response was obtained.
    ///
    /// `Server` and `Decode` errors always carry one; `Transport` errors
    /// carry one only when the failure happened after the response line
    /// was read. Everything else returns `None`.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Server { status, .. } => Some(*status),
            Error::Decode { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// The human-readable message handed to `on_error` hooks.
    ///
    /// For `Server` errors this is the response body text (or the
    /// synthesized status message); for `Decode` and `Transport` errors it
    /// is the underlying failure's description.
    pub fn message(&self) -> String {
        match self {
            Error::Server { message, .. } => message.clone(),
            Error::Decode { source, .. } => source.to_string(),
            Error::Transport(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

/// A specialized `Result` type for lazy-data requests.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_displays_body_text_verbatim() {
        let err = Error::Server {
            status: StatusCode::BAD_GATEWAY,
            message: "upstream exploded".to_string(),
        };
        assert_eq!(err.to_string(), "upstream exploded");
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn pre_request_errors_have_no_status() {
        assert_eq!(Error::MissingUrl.status(), None);
        assert_eq!(Error::Configuration("bad header".into()).status(), None);
    }

    #[test]
    fn decode_error_keeps_parse_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = Error::Decode {
            source: parse_err,
            status: StatusCode::OK,
        };
        assert!(err.message().contains("expected"));
        assert_eq!(err.status(), Some(StatusCode::OK));
    }
}
