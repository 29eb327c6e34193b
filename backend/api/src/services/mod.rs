//! Services which correspond to routes. Each call is a single pass through to
//! the store.
pub mod clients;
pub mod products;
