//! # Validation Module
//!
//! Input validation for the storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Field requirements (delivery form, card form)                     │
//! │  └── Business rules (positive quantities, non-empty cart)              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Mock services                                                │
//! │  └── Server-side re-checks (registration fields, email format)         │
//! │                                                                         │
//! │  Defense in depth: the frontend can be bypassed, this module cannot    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{CardDetails, DeliveryDetails};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Helpers
// =============================================================================

/// Requires a non-blank string field.
fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - No upper bound: the storefront trusts the kitchen to say no
///
/// Note that `Cart::update_quantity` treats `<= 0` as "remove the line";
/// this validator is for `add`, where a non-positive quantity is a caller
/// bug rather than an intent to remove.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates an email address shape.
///
/// ## Rules
/// Exactly one `@` with a non-empty local part, and a domain containing a
/// dot with non-empty labels around it. This mirrors the frontend check;
/// it is a plausibility filter, not RFC 5322.
///
/// ## Example
/// ```rust
/// use foodfast_core::validation::validate_email;
///
/// assert!(validate_email("demo@foodfast.com").is_ok());
/// assert!(validate_email("not-an-email").is_err());
/// assert!(validate_email("a@b").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::required("email"));
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "must look like name@example.com".to_string(),
    };

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(invalid()),
    };

    if local.is_empty() || domain.is_empty() {
        return Err(invalid());
    }

    let dot = match domain.rfind('.') {
        Some(i) => i,
        None => return Err(invalid()),
    };
    if dot == 0 || dot == domain.len() - 1 {
        return Err(invalid());
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the delivery form.
///
/// ## Rules
/// Everything except `state` is required: first name, last name, address,
/// city, zip code, phone.
pub fn validate_delivery_details(details: &DeliveryDetails) -> ValidationResult<()> {
    require("firstName", &details.first_name)?;
    require("lastName", &details.last_name)?;
    require("address", &details.address)?;
    require("city", &details.city)?;
    require("zipCode", &details.zip_code)?;
    require("phone", &details.phone)?;
    Ok(())
}

/// Validates the card form for a credit-card checkout.
///
/// ## Rules
/// `card` must be present with card number, expiry date, cvv and the name
/// on the card all filled in.
pub fn validate_card_details(card: Option<&CardDetails>) -> ValidationResult<()> {
    let card = card.ok_or_else(|| ValidationError::required("cardNumber"))?;

    require("cardNumber", &card.card_number)?;
    require("expiryDate", &card.expiry_date)?;
    require("cvv", &card.cvv)?;
    require("cardName", &card.card_name)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
