//! Interactive terminal driver for the view controller.
//!
//! # Responsibility
//! - Translate typed commands into view controller actions.
//! - Draw the active view, the add form and the result panel after each
//!   action.

use quotebook_core::{MainView, QuoteApi, ResultPanel, ViewController};
use std::io::{self, BufRead, Write};

const INTRO_TEXT: &str = "Welcome to Quotebook. Type `start` to browse quotes.";
const QUOTES_HELP: &str = "Commands: random | all | toggle | add | help | quit";

/// Draws the current controller state as terminal text.
pub fn render<A: QuoteApi>(controller: &ViewController<A>) -> String {
    let state = controller.state();
    let mut screen = String::new();
    match state.active {
        MainView::Intro => screen.push_str(INTRO_TEXT),
        MainView::Quotes => screen.push_str(QUOTES_HELP),
    }
    if state.add_form_visible {
        screen.push_str("\n[add quote form open: type `add` to fill and submit]");
    }
    if *controller.panel() != ResultPanel::Empty {
        screen.push('\n');
        screen.push_str(&controller.panel().to_string());
    }
    screen
}

/// Runs the command loop until `quit` or end of input.
pub fn run<A, R, W>(controller: &mut ViewController<A>, input: &mut R, output: &mut W) -> io::Result<()>
where
    A: QuoteApi,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", render(controller))?;
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(());
        };

        match line.trim() {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            "start" => controller.start(),
            "toggle" => controller.toggle_add_form(),
            "random" => controller.fetch_random(),
            "all" => controller.fetch_all(),
            "add" => {
                if !controller.state().add_form_visible {
                    controller.toggle_add_form();
                }
                write!(output, "quote: ")?;
                output.flush()?;
                let text = read_line(input)?.unwrap_or_default();
                write!(output, "author: ")?;
                output.flush()?;
                let author = read_line(input)?.unwrap_or_default();

                let form = controller.form_mut();
                form.text = text;
                form.author = author;
                controller.submit_add();
            }
            "help" => {}
            other => {
                writeln!(output, "unknown command `{other}`")?;
                continue;
            }
        }
        writeln!(output, "{}", render(controller))?;
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::{render, run};
    use quotebook_core::{ApiError, Quote, QuoteApi, ViewController};
    use std::cell::{Cell, RefCell};
    use std::io::Cursor;

    #[derive(Default)]
    struct MemoryApi {
        quotes: RefCell<Vec<Quote>>,
        calls: Cell<usize>,
    }

    impl QuoteApi for MemoryApi {
        fn random_quote(&self) -> Result<Quote, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.quotes
                .borrow()
                .last()
                .cloned()
                .ok_or_else(|| ApiError("No quotes available".into()))
        }

        fn add_quote(&self, quote: &Quote) -> Result<(), ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.quotes.borrow_mut().push(quote.clone());
            Ok(())
        }

        fn all_quotes(&self) -> Result<Vec<Quote>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.quotes.borrow().clone())
        }
    }

    fn session(script: &str) -> (ViewController<MemoryApi>, String) {
        let mut controller = ViewController::new(MemoryApi::default());
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run(&mut controller, &mut input, &mut output).unwrap();
        (controller, String::from_utf8(output).unwrap())
    }

    #[test]
    fn initial_screen_is_intro() {
        let controller = ViewController::new(MemoryApi::default());
        assert!(render(&controller).starts_with("Welcome to Quotebook"));
    }

    #[test]
    fn add_then_list_through_the_shell() {
        let (controller, output) = session("start\nadd\nStay hungry\nSteve Jobs\nall\nquit\n");

        assert!(output.contains("Quote added: \"Stay hungry\" by Steve Jobs"));
        assert!(output.ends_with("Stay hungry - Steve Jobs\n> "));
        assert!(!controller.state().add_form_visible);
        assert_eq!(controller.api().calls.get(), 2);
    }

    #[test]
    fn blank_author_never_reaches_the_api() {
        let (controller, output) = session("start\nadd\nwords\n   \n");

        assert!(output.contains("error: Please enter both the quote and the author."));
        assert_eq!(controller.api().calls.get(), 0);
        assert!(controller.state().add_form_visible);
    }

    #[test]
    fn random_failure_is_rendered_as_error() {
        let (_, output) = session("random\n");
        assert!(output.contains("error: An error occurred: No quotes available"));
    }

    #[test]
    fn unknown_commands_are_reported() {
        let (_, output) = session("dance\n");
        assert!(output.contains("unknown command `dance`"));
    }
}
