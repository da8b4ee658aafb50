//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep server and client layers decoupled from storage details.

pub mod quote_service;
