//! Client-side view model.
//!
//! # Responsibility
//! - Track which main view is visible and whether the add form is open.
//! - Mediate random/add/list interactions against a `QuoteApi`.
//! - Expose rendered results for a presentation layer to draw.
//!
//! # Invariants
//! - Exactly one main view is active at a time.
//! - The add-form overlay flag changes independently of the main view.
//! - Any error replaces the whole result panel.

mod controller;
mod state;

pub use controller::{ApiError, QuoteApi, ViewController, BLANK_INPUT_MESSAGE};
pub use state::{AddForm, MainView, ResultPanel, ViewState};
