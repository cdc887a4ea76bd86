//! Request specification and lifecycle hook types.

use http::{HeaderName, HeaderValue, Method, StatusCode};
use serde::Serialize;
use std::sync::Arc;

/// Hook invoked synchronously when a request attempt begins.
pub type StartHook = Arc<dyn Fn() + Send + Sync>;

/// Hook invoked synchronously when a 2xx response is received, before the
/// body is decoded.
pub type SuccessHook = Arc<dyn Fn() + Send + Sync>;

/// Hook invoked when a request attempt fails, with a human-readable message
/// and the HTTP status code when a response was obtained.
///
/// This is a notification side-channel: after the hook returns, the error is
/// still returned to the caller.
pub type ErrorHook = Arc<dyn Fn(&str, Option<StatusCode>) + Send + Sync>;

/// The body of a request.
#[derive(Debug)]
pub enum Body {
    /// A JSON value, serialized to text and tagged with
    /// `Content-Type: application/json` when the request is issued.
    Json(serde_json::Value),

    /// An opaque multipart form, passed through to the transport verbatim
    /// with no header changes.
    Form(reqwest::multipart::Form),
}

/// The full set of inputs to one [`HttpAction::perform`](crate::HttpAction::perform) call.
///
/// A spec is constructed fresh per invocation and consumed by the call.
/// Every field except `url` is optional: the method defaults to GET, hooks
/// fall back to the action's defaults, and headers are appended after the
/// action's default headers (duplicates allowed, order preserved).
///
/// # Examples
///
/// ```
/// use http::Method;
/// use lazydata::RequestSpec;
/// use serde_json::json;
///
/// # fn example() -> Result<(), lazydata::Error> {
/// let spec = RequestSpec::new("https://api.example.com/notes")
///     .method(Method::POST)
///     .json(&json!({ "text": "hello" }))?
///     .header("x-trace-id", "abc123")?
///     .on_success(|| println!("note stored"));
/// # let _ = spec;
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct RequestSpec {
    /// The request URL. Relative when the action has a base URL.
    pub url: String,

    /// The HTTP method. `None` means GET.
    pub method: Option<Method>,

    /// The request body, if any.
    pub body: Option<Body>,

    /// Additional headers for this request, appended after the action's
    /// default headers in the order given.
    pub headers: Vec<(HeaderName, HeaderValue)>,

    /// Overrides the action's default start hook.
    pub on_start: Option<StartHook>,

    /// Overrides the action's default success hook.
    pub on_success: Option<SuccessHook>,

    /// Overrides the action's default error hook.
    pub on_error: Option<ErrorHook>,
}

impl RequestSpec {
    /// Creates a new `RequestSpec` for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: None,
            body: None,
            headers: Vec::new(),
            on_start: None,
            on_success: None,
            on_error: None,
        }
    }

    /// Sets the HTTP method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets a JSON body.
    ///
    /// The value is serialized when the request is issued and
    /// `Content-Type: application/json` is appended to the effective
    /// header set for this call only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`](crate::Error::Serialize) if the value
    /// cannot be represented as JSON.
    pub fn json<T: Serialize>(mut self, body: &T) -> crate::Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| crate::Error::Serialize(e.to_string()))?;
        self.body = Some(Body::Json(value));
        Ok(self)
    }

    /// Sets a multipart form body, passed through verbatim.
    pub fn form(mut self, form: reqwest::multipart::Form) -> Self {
        self.body = Some(Body::Form(form));
        self
    }

    /// Appends a header to the request.
    ///
    /// Headers accumulate: calling this twice with the same name sends the
    /// header twice.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> crate::Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| crate::Error::Configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| crate::Error::Configuration(format!("Invalid header value: {}", e)))?;
        self.headers.push((name, value));
        Ok(self)
    }

    /// Sets the start hook for this call.
    pub fn on_start(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_start = Some(Arc::new(hook));
        self
    }

    /// Sets the success hook for this call.
    pub fn on_success(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(hook));
        self
    }

    /// Sets the error hook for this call.
    pub fn on_error(
        mut self,
        hook: impl Fn(&str, Option<StatusCode>) + Send + Sync + 'static,
    ) -> Self {
        self.on_error = Some(Arc::new(hook));
        self
    }
}

impl std::fmt::Debug for RequestSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSpec")
            .field("url", &self.url)
            .field("method", &self.method)
            .field("body", &self.body)
            .field("headers", &self.headers)
            .field("on_start", &self.on_start.as_ref().map(|_| ".."))
            .field("on_success", &self.on_success.as_ref().map(|_| ".."))
            .field("on_error", &self.on_error.as_ref().map(|_| ".."))
            .finish()
    }
}
