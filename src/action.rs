//! The HTTP action: one request, executed and decoded.
//!
//! [`HttpAction`] is the stateless request engine underneath
//! [`LazyLoader`](crate::LazyLoader). Use [`HttpActionBuilder`] to configure
//! the defaults every call falls back to, then call
//! [`perform`](HttpAction::perform) with a fresh [`RequestSpec`] per request.

use crate::{
    request::{Body, ErrorHook, RequestSpec, StartHook, SuccessHook},
    Error, Payload, Result,
};
use http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method, StatusCode};
use std::sync::Arc;
use url::Url;

/// A stateless HTTP action that performs one request per call and decodes
/// the response by declared content type.
///
/// The action holds the process-wide defaults of the lazy-data design as an
/// explicit, immutable configuration: default lifecycle hooks (no-ops unless
/// overridden) and a default header list seeded with the identifying
/// `x-requested-with: XMLHttpRequest` header. Per-call hooks and headers in
/// the [`RequestSpec`] take precedence; call headers are appended after the
/// defaults.
///
/// The action is cheap to clone and safe to share: every `perform` call
/// reads the configuration, never mutates it.
///
/// # Examples
///
/// ```no_run
/// use lazydata::{HttpAction, RequestSpec};
///
/// # async fn example() -> Result<(), lazydata::Error> {
/// let action = HttpAction::builder()
///     .base_url("https://api.example.com")?
///     .on_error(|message, status| eprintln!("request failed ({:?}): {}", status, message))
///     .build()?;
///
/// let payload = action.perform(RequestSpec::new("/users/123")).await?;
/// println!("name: {:?}", payload.lookup("name"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpAction {
    inner: Arc<ActionInner>,
}

struct ActionInner {
    http_client: reqwest::Client,
    base_url: Option<Url>,
    default_headers: Vec<(HeaderName, HeaderValue)>,
    on_start: StartHook,
    on_success: SuccessHook,
    on_error: ErrorHook,
}

impl HttpAction {
    /// Creates a new `HttpActionBuilder` for configuring an action.
    pub fn builder() -> HttpActionBuilder {
        HttpActionBuilder::new()
    }

    /// Performs one HTTP request and decodes its response.
    ///
    /// The lifecycle is strictly sequential: the start hook fires before the
    /// request is issued, the success hook fires on a 2xx status before the
    /// body is decoded, and the error hook fires on any failure inside the
    /// attempt before the error is returned. Hooks are a notification
    /// side-channel; they cannot swallow a failure.
    ///
    /// Responses declaring an `application/json` content type decode to
    /// [`Payload::Json`]; everything else returns [`Payload::Text`] with the
    /// raw body.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingUrl`] - the request URL was empty. Raised before
    ///   any hook fires.
    /// * [`Error::Server`] - non-2xx status; the message is the response
    ///   body text, or a synthesized status message when the body was empty.
    /// * [`Error::Decode`] - declared JSON that failed to parse.
    /// * [`Error::Transport`] - the network call itself failed.
    /// * [`Error::InvalidUrl`] - the URL could not be joined to the base.
    pub async fn perform(&self, spec: RequestSpec) -> Result<Payload> {
        if spec.url.is_empty() {
            return Err(Error::MissingUrl);
        }

        let RequestSpec {
            url,
            method,
            body,
            headers,
            on_start,
            on_success,
            on_error,
        } = spec;

        match &on_start {
            Some(hook) => hook(),
            None => (self.inner.on_start)(),
        }

        let result = self
            .attempt(&url, method, body, headers, on_success.as_ref())
            .await;

        if let Err(e) = &result {
            let message = e.message();
            match &on_error {
                Some(hook) => hook(&message, e.status()),
                None => (self.inner.on_error)(&message, e.status()),
            }
        }

        result
    }

    /// Executes the request and decodes the response. Every error returned
    /// from here flows through the error hook in [`perform`](Self::perform).
    async fn attempt(
        &self,
        url: &str,
        method: Option<Method>,
        body: Option<Body>,
        headers: Vec<(HeaderName, HeaderValue)>,
        on_success: Option<&SuccessHook>,
    ) -> Result<Payload> {
        let method = method.unwrap_or(Method::GET);

        let mut request = match &self.inner.base_url {
            Some(base) => self.inner.http_client.request(method.clone(), base.join(url)?),
            None => self.inner.http_client.request(method.clone(), url),
        };

        // Effective headers: defaults first, then the call's own, in order.
        let mut effective: Vec<(HeaderName, HeaderValue)> = self
            .inner
            .default_headers
            .iter()
            .cloned()
            .chain(headers)
            .collect();

        match body {
            Some(Body::Form(form)) => {
                request = request.multipart(form);
            }
            Some(Body::Json(value)) => {
                effective.push((
                    CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                ));
                request = request.body(value.to_string());
            }
            None => {}
        }

        for (name, value) in effective {
            request = request.header(name, value);
        }

        tracing::debug!(
            method = %method,
            url = %url,
            "Executing HTTP request"
        );

        let response = request.send().await?;
        let status = response.status();

        tracing::info!(status = status.as_u16(), "Received HTTP response");

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let message = if body_text.is_empty() {
                format!("request returned {}", status)
            } else {
                body_text
            };

            if status.is_client_error() {
                tracing::error!(
                    status = status.as_u16(),
                    response = %message,
                    "Client error (4xx)"
                );
            } else {
                tracing::warn!(
                    status = status.as_u16(),
                    response = %message,
                    "Server error"
                );
            }

            return Err(Error::Server { status, message });
        }

        match on_success {
            Some(hook) => hook(),
            None => (self.inner.on_success)(),
        }

        let declared_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));

        let raw_body = response.text().await?;

        if declared_json {
            match serde_json::from_str(&raw_body) {
                Ok(value) => Ok(Payload::Json(value)),
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        raw_response = %raw_body,
                        "Failed to decode JSON response"
                    );
                    Err(Error::Decode { source: e, status })
                }
            }
        } else {
            Ok(Payload::Text(raw_body))
        }
    }
}

/// Builder for configuring and creating an [`HttpAction`].
///
/// # Examples
///
/// ```no_run
/// use lazydata::HttpActionBuilder;
///
/// # fn example() -> Result<(), lazydata::Error> {
/// let action = HttpActionBuilder::new()
///     .base_url("https://api.example.com")?
///     .default_header("x-api-key", "secret")?
///     .on_start(|| println!("request starting"))
///     .build()?;
/// # let _ = action;
/// # Ok(())
/// # }
/// ```
pub struct HttpActionBuilder {
    base_url: Option<Url>,
    default_headers: Vec<(HeaderName, HeaderValue)>,
    on_start: StartHook,
    on_success: SuccessHook,
    on_error: ErrorHook,
}

impl HttpActionBuilder {
    /// Creates a new `HttpActionBuilder` with default settings: no-op hooks
    /// and the single identifying `x-requested-with` header.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: vec![(
                HeaderName::from_static("x-requested-with"),
                HeaderValue::from_static("XMLHttpRequest"),
            )],
            on_start: Arc::new(|| {}),
            on_success: Arc::new(|| {}),
            on_error: Arc::new(|_: &str, _: Option<StatusCode>| {}),
        }
    }

    /// Sets a base URL that relative request URLs are joined against.
    ///
    /// Without a base URL, every request URL must be absolute.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Appends a default header sent with every request, after the
    /// identifying header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header value: {}", e)))?;
        self.default_headers.push((name, value));
        Ok(self)
    }

    /// Sets the default start hook, used when a call provides none.
    pub fn on_start(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_start = Arc::new(hook);
        self
    }

    /// Sets the default success hook, used when a call provides none.
    pub fn on_success(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_success = Arc::new(hook);
        self
    }

    /// Sets the default error hook, used when a call provides none.
    pub fn on_error(
        mut self,
        hook: impl Fn(&str, Option<StatusCode>) + Send + Sync + 'static,
    ) -> Self {
        self.on_error = Arc::new(hook);
        self
    }

    /// Builds the configured `HttpAction`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<HttpAction> {
        let http_client = reqwest::Client::builder().build().map_err(|e| {
            Error::Configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(HttpAction {
            inner: Arc::new(ActionInner {
                http_client,
                base_url: self.base_url,
                default_headers: self.default_headers,
                on_start: self.on_start,
                on_success: self.on_success,
                on_error: self.on_error,
            }),
        })
    }
}

impl Default for HttpActionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
