//! View state types observed by the rendering layer.

use std::fmt::{Display, Formatter};

/// Mutually exclusive main views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainView {
    /// Introductory screen shown before `start`.
    #[default]
    Intro,
    /// Quote browsing screen.
    Quotes,
}

impl MainView {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Quotes => "quotes",
        }
    }
}

/// One active main view plus the add-form overlay flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub active: MainView,
    pub add_form_visible: bool,
}

/// Text inputs of the add-quote form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub text: String,
    pub author: String,
}

impl AddForm {
    pub fn clear(&mut self) {
        self.text.clear();
        self.author.clear();
    }
}

/// Content of the result container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultPanel {
    #[default]
    Empty,
    /// Single message, e.g. one quote or an add confirmation.
    Message(String),
    /// One formatted line per quote.
    Lines(Vec<String>),
    /// Visibly marked error message.
    Error(String),
}

impl ResultPanel {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl Display for ResultPanel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Message(message) => write!(f, "{message}"),
            Self::Lines(lines) => write!(f, "{}", lines.join("\n")),
            Self::Error(message) => write!(f, "error: {message}"),
        }
    }
}
