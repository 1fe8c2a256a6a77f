//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in FoodFast                               │
//! │                                                                         │
//! │  UI                          Command Layer                              │
//! │  ──                          ─────────────                              │
//! │                                                                         │
//! │  place_order(...)                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation failed?  ── ValidationError ──────────┐             │  │
//! │  │         │                                         │             │  │
//! │  │         ▼                                         ▼             │  │
//! │  │  Service failed?  ────── ServiceError ───────── ApiError ──────►│  │
//! │  │         │                                         ▲             │  │
//! │  │         ▼                                         │             │  │
//! │  │  Card declined?  ────── PAYMENT_DECLINED ─────────┘             │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { code: "PAYMENT_DECLINED", message: "Payment declined. ..." }        │
//! │                                                                         │
//! │  The code tells the UI how to react:                                   │
//! │    VALIDATION_ERROR  → highlight the form, no retry button             │
//! │    PAYMENT_DECLINED  → keep the cart, offer "try another card"         │
//! │    TRANSPORT_ERROR   → generic "check your connection, retry"          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use foodfast_api::ServiceError;
use foodfast_core::{CoreError, ValidationError};

/// API error returned from storefront commands.
///
/// ## Serialization
/// This is what a frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found. Surfaced, no retry.
    NotFound,

    /// Input validation failed. Fix the form, no retry.
    ValidationError,

    /// Credentials rejected.
    Unauthorized,

    /// Uniqueness conflict (email already registered).
    Conflict,

    /// The gateway answered and refused the card. Retry with another
    /// payment method is sensible; the cart was kept.
    PaymentDeclined,

    /// Network/server failure. Generic retry affordance.
    TransportError,

    /// Cart operation failed.
    CartError,

    /// Anything unexpected.
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a payment-declined error carrying the gateway's reason.
    pub fn payment_declined(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::PaymentDeclined, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts service errors to API errors.
impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            ServiceError::Unauthorized => {
                ApiError::new(ErrorCode::Unauthorized, "Invalid email or password")
            }
            ServiceError::Conflict { field, value } => ApiError::new(
                ErrorCode::Conflict,
                format!("{} '{}' already exists", field, value),
            ),
            ServiceError::Validation(e) => ApiError::validation(e.to_string()),
            ServiceError::Domain(e) => ApiError::from(e),
            ServiceError::Transport(e) => {
                // Log the underlying failure but keep the message generic
                tracing::error!("Transport failure: {}", e);
                ApiError::new(
                    ErrorCode::TransportError,
                    "Network error. Please try again.",
                )
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::StatusRegression { from, to } => ApiError::new(
                ErrorCode::ValidationError,
                format!("Order status cannot move from {} to {}", from, to),
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors directly (the common checkout path).
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_mapping() {
        let err: ApiError = ServiceError::not_found("Order", "ord_1").into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Order not found: ord_1");

        let err: ApiError = ServiceError::Unauthorized.into();
        assert_eq!(err.code, ErrorCode::Unauthorized);

        let err: ApiError = ServiceError::Transport("socket closed".to_string()).into();
        assert_eq!(err.code, ErrorCode::TransportError);
        assert_eq!(err.message, "Network error. Please try again.");
    }

    #[test]
    fn test_validation_error_mapping() {
        let err: ApiError = ValidationError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Cart is empty");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::payment_declined("Payment declined. Please try a different card.");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "PAYMENT_DECLINED");
        assert_eq!(
            json["message"],
            "Payment declined. Please try a different card."
        );
    }
}
