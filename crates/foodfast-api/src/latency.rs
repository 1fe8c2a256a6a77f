//! # Artificial Latency
//!
//! Per-route delays that make the mock feel like a network service.
//!
//! Product listing takes half a second, payments a full two seconds, and
//! so on, long enough that loading states actually show up. Tests use
//! [`LatencyProfile::none`] so nothing sleeps.

use std::time::Duration;

use tokio::time::sleep;

/// Simulated round-trip time per backend route.
#[derive(Debug, Clone, Copy)]
pub struct LatencyProfile {
    /// Product listing/search.
    pub catalog_list: Duration,
    /// Single product lookup.
    pub catalog_get: Duration,
    /// Order creation.
    pub order_create: Duration,
    /// Order fetch (single or list).
    pub order_fetch: Duration,
    /// Order status update.
    pub order_update: Duration,
    /// Payment processing.
    pub payment: Duration,
    /// Login / register / password reset.
    pub auth: Duration,
    /// Profile fetch.
    pub profile_fetch: Duration,
    /// Profile update.
    pub profile_update: Duration,
}

impl LatencyProfile {
    /// The delays a customer would actually feel.
    pub fn realistic() -> Self {
        LatencyProfile {
            catalog_list: Duration::from_millis(500),
            catalog_get: Duration::from_millis(300),
            order_create: Duration::from_millis(1000),
            order_fetch: Duration::from_millis(500),
            order_update: Duration::from_millis(800),
            payment: Duration::from_millis(2000),
            auth: Duration::from_millis(1000),
            profile_fetch: Duration::from_millis(500),
            profile_update: Duration::from_millis(1000),
        }
    }

    /// No delays at all. For tests and impatient demos.
    pub fn none() -> Self {
        LatencyProfile {
            catalog_list: Duration::ZERO,
            catalog_get: Duration::ZERO,
            order_create: Duration::ZERO,
            order_fetch: Duration::ZERO,
            order_update: Duration::ZERO,
            payment: Duration::ZERO,
            auth: Duration::ZERO,
            profile_fetch: Duration::ZERO,
            profile_update: Duration::ZERO,
        }
    }

    /// Sleeps for the given route delay. Zero returns immediately.
    pub async fn simulate(&self, delay: Duration) {
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        LatencyProfile::realistic()
    }
}
