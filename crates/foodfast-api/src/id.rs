//! # Identifier Generation
//!
//! The mock backend assigns ids for orders, transactions and users.
//! Generation sits behind a trait so tests can inject a deterministic
//! sequence instead of living with random tokens.
//!
//! ```text
//! production:  UuidIds      → "ord_1f0c5a2e-9a41-4c0e-bb1e-..."
//! tests:       SequenceIds  → "ord_0001", "ord_0002", ...
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh identifier tokens.
///
/// Callers add their own prefixes (`ord_`, `txn_`); the provider only
/// produces the unique part.
pub trait IdProvider: Send + Sync + std::fmt::Debug {
    /// Returns a fresh unique token.
    fn generate(&self) -> String;
}

/// UUID v4 tokens. The default provider.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdProvider for UuidIds {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter tokens ("0001", "0002", ...). For tests.
#[derive(Debug, Default)]
pub struct SequenceIds {
    counter: AtomicU64,
}

impl IdProvider for SequenceIds {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{:04}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_ids_are_deterministic() {
        let ids = SequenceIds::default();
        assert_eq!(ids.generate(), "0001");
        assert_eq!(ids.generate(), "0002");
        assert_eq!(ids.generate(), "0003");
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let ids = UuidIds;
        let a = ids.generate();
        let b = ids.generate();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36); // hyphenated UUID
    }
}
