//! # Cart State
//!
//! The session's cart, persisted through an injected key-value storage.
//!
//! ## Storage Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Persistence                                     │
//! │                                                                         │
//! │  CartState                                                              │
//! │     │                                                                   │
//! │     │  every mutation                                                   │
//! │     ▼                                                                   │
//! │  CartStorage (trait) ──► write("cart", json of the line list)           │
//! │     ▲                                                                   │
//! │     │  construction                                                     │
//! │     └──────────────────► read("cart") → restore the session's cart      │
//! │                                                                         │
//! │  The storage is injected: MemoryStorage here, a browser's localStorage  │
//! │  (or anything else with get/set by key) in a real host. No ambient      │
//! │  global slot; the state owns its collaborator.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The cart is wrapped in a `Mutex` because commands may run concurrently.
//! That serializes writers *within this process only*: if a host keeps two
//! sessions over the same storage slot (two tabs), the last write wins.
//! Accepted limitation, not a guarantee.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::{debug, warn};

use foodfast_core::cart::{Cart, CartItem};

/// The single fixed key the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "cart";

// =============================================================================
// Storage Collaborator
// =============================================================================

/// Durable key-value slot provided by the host environment.
///
/// Implementations are expected to be cheap and infallible the way a
/// browser's localStorage is; a missing key reads as `None`.
pub trait CartStorage: Send + Sync + std::fmt::Debug {
    /// Reads the raw value stored under `key`.
    fn read(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str);
}

/// In-memory storage. The default host for demos and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.slots
            .lock()
            .expect("storage mutex poisoned")
            .get(key)
            .cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.slots
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// Session-managed cart state.
///
/// Restores the cart from storage at construction and writes the line list
/// back after every mutation, so the session can be torn down and rebuilt
/// without losing the cart.
#[derive(Debug)]
pub struct CartState {
    storage: Box<dyn CartStorage>,
    cart: Mutex<Cart>,
}

impl CartState {
    /// Creates cart state backed by the given storage, restoring any
    /// previously persisted lines.
    ///
    /// Unreadable persisted data is discarded with a warning; a broken
    /// slot should not brick the session.
    pub fn new(storage: Box<dyn CartStorage>) -> Self {
        let cart = match storage.read(CART_STORAGE_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<CartItem>>(&raw) {
                Ok(items) => {
                    debug!(lines = items.len(), "Cart restored from storage");
                    Cart::from_items(items)
                }
                Err(e) => {
                    warn!("Discarding unreadable persisted cart: {}", e);
                    Cart::new()
                }
            },
            None => Cart::new(),
        };

        CartState {
            storage,
            cart: Mutex::new(cart),
        }
    }

    /// Cart state over fresh in-memory storage.
    pub fn in_memory() -> Self {
        CartState::new(Box::new(MemoryStorage::default()))
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let subtotal = cart_state.with_cart(|cart| cart.subtotal_cents());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart, then persists
    /// the line list.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(&product, 1))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        let result = f(&mut cart);

        match serde_json::to_string(&cart.items) {
            Ok(json) => self.storage.write(CART_STORAGE_KEY, &json),
            Err(e) => warn!("Failed to persist cart: {}", e),
        }

        result
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
