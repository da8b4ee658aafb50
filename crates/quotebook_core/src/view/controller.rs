//! View controller over a quote API.

use super::state::{AddForm, MainView, ResultPanel, ViewState};
use crate::model::quote::Quote;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Shown when the add form is submitted with a blank field.
pub const BLANK_INPUT_MESSAGE: &str = "Please enter both the quote and the author.";

/// Failure reported by a `QuoteApi` call.
///
/// Carries the failure description shown to the user: the response body for
/// non-success statuses, or the transport error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(pub String);

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for ApiError {}

/// Remote quote operations the controller depends on.
pub trait QuoteApi {
    fn random_quote(&self) -> Result<Quote, ApiError>;
    fn add_quote(&self, quote: &Quote) -> Result<(), ApiError>;
    fn all_quotes(&self) -> Result<Vec<Quote>, ApiError>;
}

/// Finite-state view model driving one quote client session.
pub struct ViewController<A: QuoteApi> {
    api: A,
    state: ViewState,
    form: AddForm,
    panel: ResultPanel,
}

impl<A: QuoteApi> ViewController<A> {
    /// Starts on the intro view with the add form hidden.
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ViewState::default(),
            form: AddForm::default(),
            panel: ResultPanel::Empty,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn form(&self) -> &AddForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AddForm {
        &mut self.form
    }

    pub fn panel(&self) -> &ResultPanel {
        &self.panel
    }

    /// Makes `view` the only visible main view.
    pub fn switch_to(&mut self, view: MainView) {
        debug!(
            "event=view_switch module=view from={} to={}",
            self.state.active.as_str(),
            view.as_str()
        );
        self.state.active = view;
    }

    /// Leaves the intro for the quotes view.
    pub fn start(&mut self) {
        self.switch_to(MainView::Quotes);
    }

    /// Shows the add form when hidden, hides it when shown.
    pub fn toggle_add_form(&mut self) {
        self.state.add_form_visible = !self.state.add_form_visible;
    }

    /// Fetches one random quote and renders it as `{text} - {author}`.
    pub fn fetch_random(&mut self) {
        match self.api.random_quote() {
            Ok(quote) => self.panel = ResultPanel::Message(quote.display_line()),
            Err(err) => self.show_failure(&err),
        }
    }

    /// Submits the add form.
    ///
    /// Blank input (after trimming) renders a validation error without any
    /// API call. On success the inputs are cleared and the form is hidden.
    pub fn submit_add(&mut self) {
        if self.form.text.trim().is_empty() || self.form.author.trim().is_empty() {
            self.panel = ResultPanel::Error(BLANK_INPUT_MESSAGE.to_string());
            return;
        }

        let quote = Quote::new(self.form.text.clone(), self.form.author.clone());
        match self.api.add_quote(&quote) {
            Ok(()) => {
                self.panel = ResultPanel::Message(format!(
                    "Quote added: \"{}\" by {}",
                    quote.text, quote.author
                ));
                self.form.clear();
                self.state.add_form_visible = false;
            }
            Err(err) => self.show_failure(&err),
        }
    }

    /// Fetches every quote and renders one line per quote.
    pub fn fetch_all(&mut self) {
        match self.api.all_quotes() {
            Ok(quotes) => {
                self.panel = ResultPanel::Lines(quotes.iter().map(Quote::display_line).collect())
            }
            Err(err) => self.show_failure(&err),
        }
    }

    fn show_failure(&mut self, err: &ApiError) {
        warn!("event=api_call module=view status=error");
        self.panel = ResultPanel::Error(format!("An error occurred: {err}"));
    }
}
