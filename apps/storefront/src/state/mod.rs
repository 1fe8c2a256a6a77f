//! # State Module
//!
//! Session state for the storefront.
//!
//! ## State Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       AppState                                          │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │   Backend    │  │  CartState   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  mocked      │  │  Mutex<Cart> │  │  delivery fee    │              │
//! │  │  services    │  │  + storage   │  │  tax rate        │              │
//! │  │  (cloneable) │  │  collaborator│  │  store name      │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Backend: internally shared state behind Arc (thread-safe)           │
//! │  • CartState: protected by Mutex for exclusive access                  │
//! │  • ConfigState: read-only after initialization                         │
//! │                                                                         │
//! │  Commands borrow exactly the pieces they need, which keeps them        │
//! │  testable with hand-built state.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::{CartState, CartStorage, MemoryStorage, CART_STORAGE_KEY};
pub use config::ConfigState;

use foodfast_api::{Backend, BackendConfig, LatencyProfile, UuidIds};

/// Everything one storefront session holds.
#[derive(Debug)]
pub struct AppState {
    pub backend: Backend,
    pub cart: CartState,
    pub config: ConfigState,
}

impl AppState {
    /// Builds a session from configuration.
    pub fn new(config: ConfigState) -> Self {
        let latency = if config.realistic_latency {
            LatencyProfile::realistic()
        } else {
            LatencyProfile::none()
        };

        AppState {
            backend: Backend::new(BackendConfig {
                latency,
                ids: Box::new(UuidIds),
            }),
            cart: CartState::in_memory(),
            config,
        }
    }

    /// Deterministic, zero-latency session for tests.
    pub fn for_tests() -> Self {
        AppState {
            backend: Backend::for_tests(),
            cart: CartState::in_memory(),
            config: ConfigState::default(),
        }
    }
}
