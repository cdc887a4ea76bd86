//! The stateful lazy-data loader.
//!
//! A [`LazyLoader`] binds one [`Subtree`] to a source URL and drives the
//! full fetch lifecycle: reset visuals, dispatch a cancelable start signal,
//! perform the request, toggle state markers, write data bindings, and
//! dispatch the terminal signal.

use crate::{
    element::{Marker, Signal, Subtree, TargetKind},
    request::RequestSpec,
    HttpAction, Payload, Result,
};
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Where a loader is in its request lifecycle.
///
/// Transitions: `Idle → Loading` on the first trigger, `Loading → Success`
/// or `Loading → Error` on the terminal outcome, and `Success | Error →
/// Loading` on any re-trigger. A cancelled start signal leaves the loader
/// in `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No load has been triggered yet.
    Idle,
    /// A load is in flight (or was cancelled before the request).
    Loading,
    /// The last load decoded successfully.
    Success,
    /// The last load failed.
    Error,
}

/// A stateful element bound to one subtree, lazily loading remote data.
///
/// The loader owns its source URL. Construction reads the initial source
/// from the subtree's attribute and hides the success- and error-marked
/// descendants; loading-marked descendants keep their default visibility,
/// so untouched markup reads as "loading". Every trigger, whether an
/// explicit [`reload`](Self::reload) or a [`set_source`](Self::set_source),
/// runs the whole lifecycle again; a failed load is only ever recovered by
/// the next trigger.
///
/// Lifecycle methods take `&mut self`, so loads on one instance are
/// serialized by construction: a second trigger can only begin after the
/// previous one resolved.
///
/// # Examples
///
/// ```no_run
/// use lazydata::headless::HeadlessSubtree;
/// use lazydata::{HttpAction, LazyLoader, Marker, TargetKind};
///
/// # async fn example() -> Result<(), lazydata::Error> {
/// let tree = HeadlessSubtree::new()
///     .with_source("/api/user")
///     .with_marked(Marker::Loading)
///     .with_marked(Marker::Success)
///     .with_marked(Marker::Error)
///     .with_binding("name", TargetKind::Text);
///
/// let action = HttpAction::builder()
///     .base_url("https://api.example.com")?
///     .build()?;
///
/// let mut loader = LazyLoader::new(tree, action);
/// let payload = loader.reload().await?;
/// println!("loaded: {:?}", payload);
/// # Ok(())
/// # }
/// ```
pub struct LazyLoader<S> {
    subtree: Arc<Mutex<S>>,
    source: Option<String>,
    state: LoadState,
    action: HttpAction,
}

impl<S: Subtree + Send + 'static> LazyLoader<S> {
    /// Creates a loader over `subtree`, reading the initial source from the
    /// subtree's attribute and hiding its success- and error-marked
    /// descendants.
    pub fn new(subtree: S, action: HttpAction) -> Self {
        let subtree = Arc::new(Mutex::new(subtree));
        let source = {
            let mut tree = lock(&subtree);
            tree.set_marker_visible(Marker::Success, false);
            tree.set_marker_visible(Marker::Error, false);
            tree.source()
        };

        Self {
            subtree,
            source,
            state: LoadState::Idle,
            action,
        }
    }

    /// The loader's current source URL.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The loader's current lifecycle state.
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// A shared handle to the subtree this loader drives.
    ///
    /// Request hooks hold the same handle, so a host inspecting the tree
    /// mid-load sees marker changes as they happen.
    pub fn subtree(&self) -> Arc<Mutex<S>> {
        Arc::clone(&self.subtree)
    }

    /// Updates the source URL and re-triggers the lifecycle.
    ///
    /// The trigger is unconditional: assigning the same value loads again.
    /// This is the entry point for hosts observing external attribute
    /// mutation.
    pub async fn set_source(&mut self, source: impl Into<String>) -> Result<Option<Payload>> {
        self.source = Some(source.into());
        self.reload().await
    }

    /// Triggers the full load lifecycle.
    ///
    /// Resets the visual state to loading (error and success markers
    /// hidden, loading markers shown), then runs the load.
    ///
    /// Returns `Ok(None)` when a listener cancelled the start signal: no
    /// request is made and the visuals stay in the loading state. Returns
    /// `Ok(Some(payload))` once bindings are written and the success signal
    /// has fired.
    ///
    /// # Errors
    ///
    /// Any [`HttpAction::perform`] failure propagates after the error
    /// signal has been dispatched and the error markers shown.
    pub async fn reload(&mut self) -> Result<Option<Payload>> {
        tracing::debug!(source = ?self.source, "Reloading lazy-data element");

        {
            let mut tree = lock(&self.subtree);
            tree.set_marker_visible(Marker::Error, false);
            tree.set_marker_visible(Marker::Success, false);
            tree.set_marker_visible(Marker::Loading, true);
        }
        self.state = LoadState::Loading;

        self.load().await
    }

    async fn load(&mut self) -> Result<Option<Payload>> {
        if !lock(&self.subtree).dispatch(Signal::Start) {
            tracing::debug!("Start signal cancelled; load aborted");
            return Ok(None);
        }

        let url = self.source.clone().unwrap_or_default();
        let success_tree = Arc::clone(&self.subtree);
        let error_tree = Arc::clone(&self.subtree);

        // Loader-driven requests suppress the action's default start hook;
        // the start signal above is the trigger notification.
        let spec = RequestSpec::new(url)
            .on_start(|| {})
            .on_success(move || {
                let mut tree = success_tree.lock().unwrap_or_else(PoisonError::into_inner);
                tree.set_marker_visible(Marker::Loading, false);
                tree.set_marker_visible(Marker::Success, true);
            })
            .on_error(move |message, _status| {
                let mut tree = error_tree.lock().unwrap_or_else(PoisonError::into_inner);
                tree.dispatch(Signal::Error(message));
                tree.set_marker_visible(Marker::Loading, false);
                tree.set_marker_visible(Marker::Error, true);
            });

        match self.action.perform(spec).await {
            Ok(payload) => {
                self.write_bindings(&payload);
                lock(&self.subtree).dispatch(Signal::Success(&payload));
                self.state = LoadState::Success;
                Ok(Some(payload))
            }
            Err(e) => {
                self.state = LoadState::Error;
                Err(e)
            }
        }
    }

    fn write_bindings(&self, payload: &Payload) {
        let mut tree = lock(&self.subtree);
        tree.for_each_binding(&mut |target| {
            let rendered = render(payload.lookup(target.path()));
            match target.kind() {
                TargetKind::Image => target.set_image_source(&rendered),
                TargetKind::Text => target.set_text(&rendered),
            }
        });
    }
}

fn lock<S>(subtree: &Arc<Mutex<S>>) -> MutexGuard<'_, S> {
    subtree.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Renders a resolved binding value for display. A missing resolution
/// renders as the literal `undefined`, the form a dynamic host writes for
/// an absent value.
fn render(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_render_unquoted() {
        assert_eq!(render(Some(&json!("Ada"))), "Ada");
    }

    #[test]
    fn non_strings_render_as_json() {
        assert_eq!(render(Some(&json!(2))), "2");
        assert_eq!(render(Some(&json!({ "a": 1 }))), r#"{"a":1}"#);
        assert_eq!(render(Some(&json!(null))), "null");
    }

    #[test]
    fn missing_values_render_as_undefined() {
        assert_eq!(render(None), "undefined");
    }
}
