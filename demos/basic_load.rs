//! Basic example demonstrating direct use of the HTTP action.
//!
//! This example shows how to:
//! - Build an action with a base URL and default hooks
//! - Perform a GET request and inspect the decoded payload
//! - Perform a POST request with a JSON body
//!
//! Run with: `cargo run --example basic_load`

use lazydata::{HttpAction, RequestSpec};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct NewPost {
    title: String,
    body: String,
    #[serde(rename = "userId")]
    user_id: u32,
}

#[tokio::main]
async fn main() -> Result<(), lazydata::Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("lazydata=debug,basic_load=info")
        .init();

    // Create an action for the JSONPlaceholder API
    let action = HttpAction::builder()
        .base_url("https://jsonplaceholder.typicode.com")?
        .on_start(|| println!("(request starting)"))
        .on_error(|message, status| eprintln!("(request failed, status {:?}: {})", status, message))
        .build()?;

    println!("=== GET Request Example ===");
    let payload = action.perform(RequestSpec::new("/posts/1")).await?;

    println!("Title: {:?}", payload.lookup("title"));
    println!("Body: {:?}", payload.lookup("body"));
    println!();

    println!("=== POST Request Example ===");
    let new_post = NewPost {
        title: "My New Post".to_string(),
        body: "This is the content of my new post!".to_string(),
        user_id: 1,
    };

    let spec = RequestSpec::new("/posts")
        .method(http::Method::POST)
        .json(&new_post)?;

    let payload = action.perform(spec).await?;
    println!("Created post ID: {:?}", payload.lookup("id"));
    println!();

    println!("=== Dotted-Path Lookup ===");
    // Paths short-circuit: a miss anywhere yields None rather than an error.
    let payload = action.perform(RequestSpec::new("/users/1")).await?;
    println!("Company name: {:?}", payload.lookup("company.name"));
    println!("Missing path: {:?}", payload.lookup("company.mission.statement"));

    Ok(())
}
