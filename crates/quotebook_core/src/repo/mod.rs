//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the narrow read-all/append contract over the quote collection.
//! - Isolate document file details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`EmptyCollection`,
//!   `Validation`) in addition to storage transport errors.

pub mod quote_repo;
