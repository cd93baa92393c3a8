//! Adapters between the checkout and the outside world.

pub mod csv;
