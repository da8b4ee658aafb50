//! Route handlers and response mapping.

pub mod handlers;
pub(crate) mod request_log;
pub(crate) mod response;
