//! # Lazydata - a declarative lazy data loading primitive
//!
//! Lazydata fetches remote data over HTTP, tracks the request lifecycle
//! (idle → loading → success/error), toggles the visibility of
//! marker-tagged descendants per lifecycle state, and binds fetched values
//! into descendants by dotted path.
//!
//! Two components, layered:
//!
//! - [`HttpAction`] - a stateless action performing one request per call:
//!   lifecycle hooks with configurable defaults, JSON vs. multipart-form
//!   body negotiation, and content-type-aware response decoding.
//! - [`LazyLoader`] - a stateful element bound to one [`Subtree`]: it emits
//!   a cancelable start signal, drives the action, swaps state markers,
//!   walks the decoded data into bound descendants, and emits the terminal
//!   success or error signal. Mutating its source URL re-triggers the whole
//!   lifecycle.
//!
//! The host element tree is abstracted behind the [`Subtree`] trait, so the
//! lifecycle runs the same against a DOM bridge, a native widget tree, or
//! the bundled in-memory [`headless::HeadlessSubtree`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use lazydata::headless::HeadlessSubtree;
//! use lazydata::{HttpAction, LazyLoader, Marker, TargetKind};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lazydata::Error> {
//!     let action = HttpAction::builder()
//!         .base_url("https://api.example.com")?
//!         .build()?;
//!
//!     let tree = HeadlessSubtree::new()
//!         .with_source("/users/123")
//!         .with_marked(Marker::Loading)
//!         .with_marked(Marker::Success)
//!         .with_marked(Marker::Error)
//!         .with_binding("name", TargetKind::Text);
//!
//!     let mut loader = LazyLoader::new(tree, action);
//!     loader.reload().await?;
//!
//!     let tree = loader.subtree();
//!     let tree = tree.lock().unwrap();
//!     assert!(tree.visible(Marker::Success));
//!     println!("name: {:?}", tree.binding("name").and_then(|b| b.text()));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Request lifecycle hooks** - `on_start`, `on_success`, and `on_error`
//!   callbacks per call, falling back to action-wide defaults
//! - **Content-type-aware decoding** - JSON responses decode to structured
//!   [`Payload::Json`], everything else returns the raw text
//! - **Marker-driven visuals** - descendants tagged loading/success/error
//!   are shown and hidden as the lifecycle progresses
//! - **Dotted-path data binding** - fetched values land in bound
//!   descendants via paths like `user.name`, with short-circuit misses
//! - **Cancelable start signal** - ancestors may intercept and abort a load
//!   before any network call
//! - **Headless by design** - the host tree is a trait; the full lifecycle
//!   runs without a UI toolkit
//!
//! ## Error Handling
//!
//! Every failure inside a request attempt is surfaced to the `on_error`
//! hook (message plus optional HTTP status) and then returned to the
//! caller; the hook is a notification side-channel, never a handler:
//!
//! ```no_run
//! use lazydata::{Error, HttpAction, RequestSpec};
//!
//! # async fn example() -> Result<(), Error> {
//! # let action = HttpAction::builder().build()?;
//! match action.perform(RequestSpec::new("https://api.example.com/user")).await {
//!     Ok(payload) => println!("fetched: {:?}", payload),
//!     Err(Error::Server { status, message }) => {
//!         eprintln!("server rejected the request ({}): {}", status, message);
//!     }
//!     Err(e) => eprintln!("request failed: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! There is no caching, retrying, de-duplication, or in-flight
//! cancellation: a failure is terminal for that trigger, and the next
//! trigger is the only recovery path.

mod action;
mod element;
mod error;
pub mod headless;
mod loader;
pub mod path;
mod payload;
mod request;

pub use action::{HttpAction, HttpActionBuilder};
pub use element::{BindTarget, Marker, Signal, Subtree, TargetKind};
pub use error::{Error, Result};
pub use loader::{LazyLoader, LoadState};
pub use payload::Payload;
pub use request::{Body, ErrorHook, RequestSpec, StartHook, SuccessHook};
