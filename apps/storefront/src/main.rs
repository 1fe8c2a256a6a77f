//! # FoodFast Storefront Entry Point
//!
//! Runs the scripted demo session against the mocked backend.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FoodFast Storefront                                │
//! │                                                                         │
//! │  main.rs ────► tokio runtime, exit code                                │
//! │                                                                         │
//! │  lib.rs ─────► logging setup, the demo session script                  │
//! │                                                                         │
//! │  commands/ ──► search_products, add_to_cart, place_order, ...          │
//! │                                                                         │
//! │  state/ ─────► AppState (mock backend, cart, config)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Useful environment knobs:
//! - `FOODFAST_FAST=1` skips the artificial backend latency
//! - `RUST_LOG=debug` shows every command invocation

#[tokio::main]
async fn main() {
    if let Err(e) = foodfast_storefront::run().await {
        tracing::error!("Demo session failed: {}", e);
        std::process::exit(1);
    }
}
