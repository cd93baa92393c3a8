//! Application layer: payload generation and the checkout service built on it.
//!
//! Everything here is synchronous and keeps no state between calls, so a
//! `Checkout` can be shared across threads freely.

pub mod checkout;
pub mod injector;
