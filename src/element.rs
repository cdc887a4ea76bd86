//! The host-element abstraction.
//!
//! The loader never talks to a concrete UI toolkit. It drives a [`Subtree`]:
//! a view of one element's descendants that can toggle the visibility of
//! marker-tagged nodes, enumerate data-bound targets, and dispatch bubbling
//! signals. Any host (a DOM bridge, a native widget tree, or the bundled
//! [`HeadlessSubtree`](crate::headless::HeadlessSubtree)) implements this
//! trait to plug into the lifecycle.

use crate::Payload;

/// The lifecycle state a marked descendant is visible during.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Visible while a load is in flight.
    Loading,
    /// Visible once a load has succeeded.
    Success,
    /// Visible once a load has failed.
    Error,
}

impl Marker {
    /// The marker's attribute-style name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::Loading => "loading",
            Marker::Success => "success",
            Marker::Error => "error",
        }
    }
}

/// How a bound target receives its resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// The value becomes the target's visible text content.
    Text,
    /// The value becomes the target's image source.
    Image,
}

/// A signal dispatched on the subtree during the load lifecycle.
///
/// Signals bubble: ancestors of the host element may observe them. Only
/// [`Signal::Start`] is cancelable.
#[derive(Debug, Clone, Copy)]
pub enum Signal<'a> {
    /// A load is about to begin. Cancelable: a listener that cancels it
    /// aborts the load before any network call.
    Start,
    /// A load finished and bindings were written. Carries the decoded data.
    Success(&'a Payload),
    /// A load failed. Carries the failure's display message.
    Error(&'a str),
}

impl Signal<'_> {
    /// Whether listeners may cancel this signal.
    pub fn cancelable(&self) -> bool {
        matches!(self, Signal::Start)
    }

    /// The signal's event-style name.
    pub fn name(&self) -> &'static str {
        match self {
            Signal::Start => "start",
            Signal::Success(_) => "success",
            Signal::Error(_) => "error",
        }
    }
}

/// A descendant tagged with a data-binding path.
pub trait BindTarget {
    /// The dot-delimited path into the fetched data.
    fn path(&self) -> &str;

    /// How this target displays its value.
    fn kind(&self) -> TargetKind;

    /// Writes the resolved value as visible text content.
    fn set_text(&mut self, value: &str);

    /// Writes the resolved value as the image source.
    fn set_image_source(&mut self, value: &str);
}

/// One element's descendant tree, as seen by the loader.
///
/// Implementations own the actual nodes; the loader only addresses them
/// through markers, bindings, and signals, which keeps the state machine
/// headless-testable.
pub trait Subtree {
    /// The element's current source URL attribute, if set.
    fn source(&self) -> Option<String>;

    /// Shows or hides every descendant tagged with `marker`.
    fn set_marker_visible(&mut self, marker: Marker, visible: bool);

    /// Visits every data-bound descendant.
    fn for_each_binding(&mut self, f: &mut dyn FnMut(&mut dyn BindTarget));

    /// Dispatches a bubbling signal.
    ///
    /// Returns `false` only when a cancelable signal was cancelled by a
    /// listener; non-cancelable signals must report `true`.
    fn dispatch(&mut self, signal: Signal<'_>) -> bool;
}
