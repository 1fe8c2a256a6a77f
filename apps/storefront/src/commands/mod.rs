//! # Command Module
//!
//! The operations a storefront UI invokes, grouped the way the pages use
//! them. Every command is a plain function over the session state, which
//! keeps the layer host-agnostic: an HTTP router, an IPC bridge or the
//! scripted demo can all call straight into it.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod order;
pub mod profile;
