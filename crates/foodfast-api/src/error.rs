//! # Service Error Types
//!
//! Error types for the mocked backend services.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Mock service (catalog, orders, payments, users)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ServiceError (this module) ← Adds the transport-level taxonomy        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in storefront app) ← Serialized for a UI                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI displays user-friendly message, offers retry where sensible        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note that a DECLINED PAYMENT is not a `ServiceError`: the gateway
//! answers declines as a successful response with `success = false`
//! (see `payments::PaymentOutcome`). Only transport-level failures and
//! lookup misses live here.

use thiserror::Error;

use foodfast_core::{CoreError, ValidationError};

/// Mocked backend failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Entity not found.
    ///
    /// ## When This Occurs
    /// - Product id not on the menu
    /// - Order id never created in this session
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Login with credentials the mock does not recognize.
    #[error("Invalid email or password")]
    Unauthorized,

    /// Uniqueness conflict (registering an email that exists).
    #[error("{field} '{value}' already exists")]
    Conflict { field: String, value: String },

    /// Server-side input validation failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Domain rule violation (status regressions and friends).
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// Network/server failure. Simulated through the backend's offline
    /// switch; surfaced with a generic retry affordance, never swallowed.
    #[error("Network error: {0}")]
    Transport(String),
}

impl ServiceError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        ServiceError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a Conflict error.
    pub fn conflict(field: impl Into<String>, value: impl Into<String>) -> Self {
        ServiceError::Conflict {
            field: field.into(),
            value: value.into(),
        }
    }

    /// The error every call returns while the backend is offline.
    pub fn offline() -> Self {
        ServiceError::Transport("Unable to reach the FoodFast service".to_string())
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Unit Tests
// =============================================================================
