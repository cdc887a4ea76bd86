//! An in-memory [`Subtree`] for hosts without a UI toolkit.
//!
//! [`HeadlessSubtree`] models marked and bound descendants as plain records
//! and logs every dispatched signal. It is the integration surface for
//! non-visual hosts and the vehicle for exercising the full load lifecycle
//! in tests without a DOM.

use crate::{
    element::{BindTarget, Marker, Signal, Subtree, TargetKind},
    Payload,
};

/// A descendant node tagged with a lifecycle marker.
#[derive(Debug, Clone)]
struct MarkedNode {
    marker: Marker,
    visible: bool,
}

/// A descendant node tagged with a data-binding path.
#[derive(Debug, Clone)]
pub struct BoundNode {
    path: String,
    kind: TargetKind,
    text: Option<String>,
    image_source: Option<String>,
}

impl BoundNode {
    /// The text content written into this node, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The image source written into this node, if any.
    pub fn image_source(&self) -> Option<&str> {
        self.image_source.as_deref()
    }
}

impl BindTarget for BoundNode {
    fn path(&self) -> &str {
        &self.path
    }

    fn kind(&self) -> TargetKind {
        self.kind
    }

    fn set_text(&mut self, value: &str) {
        self.text = Some(value.to_string());
    }

    fn set_image_source(&mut self, value: &str) {
        self.image_source = Some(value.to_string());
    }
}

/// A record of one dispatched signal, in dispatch order.
#[derive(Debug, Clone, PartialEq)]
pub enum SignalRecord {
    /// A cancelable start signal was dispatched.
    Start,
    /// A success signal carried this decoded payload.
    Success(Payload),
    /// An error signal carried this failure message.
    Error(String),
}

/// An in-memory element subtree.
///
/// Marked nodes begin visible, matching a host tree whose nodes render by
/// default until the loader hides them.
///
/// # Examples
///
/// ```
/// use lazydata::headless::HeadlessSubtree;
/// use lazydata::{Marker, Subtree, TargetKind};
///
/// let mut tree = HeadlessSubtree::new()
///     .with_source("/api/user")
///     .with_marked(Marker::Loading)
///     .with_marked(Marker::Success)
///     .with_binding("user.name", TargetKind::Text);
///
/// assert_eq!(tree.source().as_deref(), Some("/api/user"));
/// assert!(tree.visible(Marker::Loading));
///
/// tree.set_marker_visible(Marker::Loading, false);
/// assert!(!tree.visible(Marker::Loading));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeadlessSubtree {
    source: Option<String>,
    marked: Vec<MarkedNode>,
    bound: Vec<BoundNode>,
    signals: Vec<SignalRecord>,
    cancel_start: bool,
}

impl HeadlessSubtree {
    /// Creates an empty subtree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source URL attribute.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a descendant tagged with `marker`, initially visible.
    pub fn with_marked(mut self, marker: Marker) -> Self {
        self.marked.push(MarkedNode {
            marker,
            visible: true,
        });
        self
    }

    /// Adds a data-bound descendant.
    pub fn with_binding(mut self, path: impl Into<String>, kind: TargetKind) -> Self {
        self.bound.push(BoundNode {
            path: path.into(),
            kind,
            text: None,
            image_source: None,
        });
        self
    }

    /// Makes every subsequent start signal come back cancelled, as if an
    /// ancestor listener intercepted it.
    pub fn cancel_start(&mut self, cancel: bool) {
        self.cancel_start = cancel;
    }

    /// Whether every descendant tagged with `marker` is visible.
    pub fn visible(&self, marker: Marker) -> bool {
        self.marked
            .iter()
            .filter(|node| node.marker == marker)
            .all(|node| node.visible)
    }

    /// The first bound descendant with the given path.
    pub fn binding(&self, path: &str) -> Option<&BoundNode> {
        self.bound.iter().find(|node| node.path == path)
    }

    /// The signals dispatched so far, in order.
    pub fn signals(&self) -> &[SignalRecord] {
        &self.signals
    }
}

impl Subtree for HeadlessSubtree {
    fn source(&self) -> Option<String> {
        self.source.clone()
    }

    fn set_marker_visible(&mut self, marker: Marker, visible: bool) {
        for node in self.marked.iter_mut().filter(|node| node.marker == marker) {
            node.visible = visible;
        }
    }

    fn for_each_binding(&mut self, f: &mut dyn FnMut(&mut dyn BindTarget)) {
        for node in &mut self.bound {
            f(node);
        }
    }

    fn dispatch(&mut self, signal: Signal<'_>) -> bool {
        match signal {
            Signal::Start => {
                self.signals.push(SignalRecord::Start);
                !self.cancel_start
            }
            Signal::Success(payload) => {
                self.signals.push(SignalRecord::Success(payload.clone()));
                true
            }
            Signal::Error(message) => {
                self.signals.push(SignalRecord::Error(message.to_string()));
                true
            }
        }
    }
}
