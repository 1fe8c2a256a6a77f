//! # foodfast-api: Mocked Backend Services for FoodFast
//!
//! This crate provides the backend collaborators the storefront consumes.
//! Every service is a mock: fixed demo data, in-memory state, artificial
//! per-route latency. It is the only async boundary in the workspace.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       FoodFast Data Flow                                │
//! │                                                                         │
//! │  Storefront command (place_order)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   foodfast-api (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌──────────────────┐  │   │
//! │  │   │   Backend     │  │   Services    │  │   Simulation     │  │   │
//! │  │   │   (lib.rs)    │  │               │  │                  │  │   │
//! │  │   │               │  │ ProductCatalog│  │ LatencyProfile   │  │   │
//! │  │   │ shared state  │◄─│ OrderService  │  │ IdProvider       │  │   │
//! │  │   │ offline flag  │  │ PaymentGateway│  │ offline switch   │  │   │
//! │  │   │               │  │ UserDirectory │  │                  │  │   │
//! │  │   └───────────────┘  └───────────────┘  └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  In-memory Vec/Mutex state. Nothing survives a restart, by design.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Demo menu, search and lookup
//! - [`orders`] - Order creation, fetch and the monotonic status machine
//! - [`payments`] - Mock gateway with the well-known decline card
//! - [`users`] - Demo credentials, profile, registration
//! - [`latency`] - Per-route artificial delays
//! - [`id`] - Injected identifier generation
//! - [`error`] - Service error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use foodfast_api::{Backend, BackendConfig};
//!
//! let backend = Backend::new(BackendConfig::default());
//!
//! let menu = backend.catalog().search(None, None).await?;
//! let order = backend.orders().create(draft).await?;
//! let outcome = backend.payments().process(&order.id, method, card).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod id;
pub mod latency;
pub mod orders;
pub mod payments;
pub mod users;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::ProductCatalog;
pub use error::{ServiceError, ServiceResult};
pub use id::{IdProvider, SequenceIds, UuidIds};
pub use latency::LatencyProfile;
pub use orders::OrderService;
pub use payments::{PaymentGateway, PaymentOutcome};
pub use users::{ProfilePatch, UserDirectory};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::info;

use foodfast_core::types::{Order, Product, User};

// =============================================================================
// Backend Configuration
// =============================================================================

/// Configuration for the mocked backend.
///
/// ## Example
/// ```rust
/// use foodfast_api::{Backend, BackendConfig, LatencyProfile, SequenceIds};
///
/// // Deterministic, instant backend for tests
/// let backend = Backend::new(BackendConfig {
///     latency: LatencyProfile::none(),
///     ids: Box::new(SequenceIds::default()),
/// });
/// # let _ = backend;
/// ```
#[derive(Debug)]
pub struct BackendConfig {
    /// Per-route artificial delays.
    pub latency: LatencyProfile,

    /// Identifier source for orders, transactions and users.
    pub ids: Box<dyn IdProvider>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            latency: LatencyProfile::realistic(),
            ids: Box::new(UuidIds),
        }
    }
}

// =============================================================================
// Shared Backend State
// =============================================================================

/// State shared by every service handle.
#[derive(Debug)]
pub(crate) struct Shared {
    pub(crate) latency: LatencyProfile,
    pub(crate) ids: Box<dyn IdProvider>,

    /// When set, every call fails with a transport error. This is the
    /// "pull the network cable" switch for demos and tests.
    pub(crate) offline: AtomicBool,

    /// The fixed demo menu.
    pub(crate) menu: Vec<Product>,

    /// Orders created this session, in creation order.
    pub(crate) orders: Mutex<Vec<Order>>,

    /// The single demo profile.
    pub(crate) profile: Mutex<User>,
}

impl Shared {
    /// Fails with a transport error while the backend is offline.
    pub(crate) fn ensure_online(&self) -> ServiceResult<()> {
        if self.offline.load(Ordering::Relaxed) {
            return Err(ServiceError::offline());
        }
        Ok(())
    }
}

// =============================================================================
// Backend
// =============================================================================

/// Main backend handle providing service access.
///
/// Cheap to clone; all handles share the same in-memory state, mirroring
/// one server process behind many requests.
///
/// ## Usage in Commands
/// ```rust,ignore
/// let product = backend.catalog().get(&product_id).await?;
/// let order = backend.orders().create(draft).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Backend {
    shared: Arc<Shared>,
}

impl Backend {
    /// Creates a new mocked backend.
    pub fn new(config: BackendConfig) -> Self {
        let menu = catalog::demo_menu();
        info!(products = menu.len(), "Mock backend initialized");

        Backend {
            shared: Arc::new(Shared {
                latency: config.latency,
                ids: config.ids,
                offline: AtomicBool::new(false),
                menu,
                orders: Mutex::new(Vec::new()),
                profile: Mutex::new(users::demo_user()),
            }),
        }
    }

    /// Deterministic, zero-latency backend for tests.
    pub fn for_tests() -> Self {
        Backend::new(BackendConfig {
            latency: LatencyProfile::none(),
            ids: Box::new(SequenceIds::default()),
        })
    }

    /// Returns the product catalog service.
    pub fn catalog(&self) -> ProductCatalog {
        ProductCatalog::new(self.shared.clone())
    }

    /// Returns the order service.
    pub fn orders(&self) -> OrderService {
        OrderService::new(self.shared.clone())
    }

    /// Returns the payment gateway.
    pub fn payments(&self) -> PaymentGateway {
        PaymentGateway::new(self.shared.clone())
    }

    /// Returns the user directory.
    pub fn users(&self) -> UserDirectory {
        UserDirectory::new(self.shared.clone())
    }

    /// Simulates losing (or regaining) the network.
    ///
    /// While offline, every service call fails with
    /// [`ServiceError::Transport`].
    pub fn set_offline(&self, offline: bool) {
        info!(offline, "Mock backend connectivity changed");
        self.shared.offline.store(offline, Ordering::Relaxed);
    }

    /// Whether the backend is currently simulating an outage.
    pub fn is_offline(&self) -> bool {
        self.shared.offline.load(Ordering::Relaxed)
    }
}

impl Default for Backend {
    fn default() -> Self {
        Backend::new(BackendConfig::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_switch_fails_every_service() {
        let backend = Backend::for_tests();
        backend.set_offline(true);

        assert!(matches!(
            backend.catalog().search(None, None).await,
            Err(ServiceError::Transport(_))
        ));
        assert!(matches!(
            backend.orders().list().await,
            Err(ServiceError::Transport(_))
        ));
        assert!(matches!(
            backend.users().get_profile().await,
            Err(ServiceError::Transport(_))
        ));

        backend.set_offline(false);
        assert!(backend.catalog().search(None, None).await.is_ok());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let backend = Backend::for_tests();
        let other = backend.clone();

        other.set_offline(true);
        assert!(backend.is_offline());
    }
}
