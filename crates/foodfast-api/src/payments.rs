//! # Payment Gateway
//!
//! The mock payment processor.
//!
//! ## Decline vs. Failure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  process(order, credit-card, 4000 0000 0000 0002)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(PaymentOutcome { success: false, message: "declined..." })         │
//! │       ▲                                                                 │
//! │       │  A DECLINE IS A SUCCESSFUL RESPONSE. The gateway answered;     │
//! │       │  the card was refused. Distinct from:                          │
//! │       │                                                                 │
//! │  Err(ServiceError::Transport(..))  ← the gateway was unreachable       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers branch on `outcome.success`, not on `Result`, to decide whether
//! the cart may be cleared.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::error::ServiceResult;
use crate::Shared;
use foodfast_core::types::{CardDetails, PaymentMethod};

/// The card number that always declines, for demoing the failure path.
pub const DECLINE_CARD_NUMBER: &str = "4000000000000002";

/// Result of a payment attempt that reached the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOutcome {
    /// Whether the charge went through.
    pub success: bool,

    /// Set only on success.
    pub transaction_id: Option<String>,

    /// Human-readable result ("Payment processed successfully" or the
    /// decline reason).
    pub message: String,
}

/// Service handle for payment processing.
#[derive(Debug, Clone)]
pub struct PaymentGateway {
    shared: Arc<Shared>,
}

impl PaymentGateway {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        PaymentGateway { shared }
    }

    /// Processes a payment for an order.
    ///
    /// Card details only matter for [`PaymentMethod::CreditCard`]; other
    /// methods always succeed. The well-known decline card yields
    /// `success = false` with a reason, never an `Err`.
    pub async fn process(
        &self,
        order_id: &str,
        method: PaymentMethod,
        card: Option<&CardDetails>,
    ) -> ServiceResult<PaymentOutcome> {
        self.shared.ensure_online()?;
        self.shared
            .latency
            .simulate(self.shared.latency.payment)
            .await;

        debug!(order_id = %order_id, ?method, "Processing payment");

        if method.requires_card() {
            if let Some(card) = card {
                if card.card_number == DECLINE_CARD_NUMBER {
                    warn!(order_id = %order_id, "Payment declined");
                    return Ok(PaymentOutcome {
                        success: false,
                        transaction_id: None,
                        message: "Payment declined. Please try a different card.".to_string(),
                    });
                }
            }
        }

        let transaction_id = format!("txn_{}", self.shared.ids.generate());
        info!(order_id = %order_id, transaction_id = %transaction_id, "Payment processed");

        Ok(PaymentOutcome {
            success: true,
            transaction_id: Some(transaction_id),
            message: "Payment processed successfully".to_string(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
