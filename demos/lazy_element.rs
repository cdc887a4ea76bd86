//! Example demonstrating the full lazy-data element lifecycle, headless.
//!
//! This example shows how to:
//! - Describe a subtree with lifecycle markers and data bindings
//! - Drive the load lifecycle with a `LazyLoader`
//! - Observe marker visibility, bound values, and dispatched signals
//!
//! Run with: `cargo run --example lazy_element`

use lazydata::headless::HeadlessSubtree;
use lazydata::{HttpAction, LazyLoader, Marker, TargetKind};

#[tokio::main]
async fn main() -> Result<(), lazydata::Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("lazydata=debug,lazy_element=info")
        .init();

    let action = HttpAction::builder()
        .base_url("https://jsonplaceholder.typicode.com")?
        .build()?;

    // The headless equivalent of markup like:
    //   <lazy-data href="/users/1">
    //     <p lazy-loading>Loading…</p>
    //     <p lazy-success>Name: <span lazy-bind="name"></span></p>
    //     <p lazy-error>Something went wrong.</p>
    //   </lazy-data>
    let tree = HeadlessSubtree::new()
        .with_source("/users/1")
        .with_marked(Marker::Loading)
        .with_marked(Marker::Success)
        .with_marked(Marker::Error)
        .with_binding("name", TargetKind::Text)
        .with_binding("company.catchPhrase", TargetKind::Text);

    let mut loader = LazyLoader::new(tree, action);

    println!("=== Initial State ===");
    println!("state: {:?}", loader.state());
    print_markers(&loader);
    println!();

    println!("=== After Load ===");
    loader.reload().await?;
    println!("state: {:?}", loader.state());
    print_markers(&loader);

    {
        let tree = loader.subtree();
        let tree = tree.lock().unwrap();
        println!("name: {:?}", tree.binding("name").unwrap().text());
        println!(
            "catch phrase: {:?}",
            tree.binding("company.catchPhrase").unwrap().text()
        );
        println!("signals: {:?}", tree.signals());
    }
    println!();

    println!("=== Re-Trigger With a New Source ===");
    loader.set_source("/users/2").await?;
    let tree = loader.subtree();
    let tree = tree.lock().unwrap();
    println!("name: {:?}", tree.binding("name").unwrap().text());

    Ok(())
}

fn print_markers(loader: &LazyLoader<HeadlessSubtree>) {
    let tree = loader.subtree();
    let tree = tree.lock().unwrap();
    for marker in [Marker::Loading, Marker::Success, Marker::Error] {
        println!("  [{}] visible: {}", marker.as_str(), tree.visible(marker));
    }
}
