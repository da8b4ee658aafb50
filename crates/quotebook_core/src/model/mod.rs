//! Domain model for quote content.
//!
//! # Responsibility
//! - Define the single content entity shared by store, server and client.
//!
//! # Invariants
//! - A quote has no identity beyond its position in the collection.

pub mod quote;
