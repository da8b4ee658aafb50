//! Terminal client for a quotebook server.
//!
//! # Responsibility
//! - Offer one-shot commands for scripting and an interactive shell.
//! - Route every action through the shared view controller so terminal
//!   output matches what any other client renders.

mod http_api;
mod shell;

use clap::{Parser, Subcommand};
use http_api::HttpQuoteApi;
use quotebook_core::{init_logging, ViewController};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "quotebook", version, about = "Fetch, add and list quotes")]
struct Cli {
    /// Base URL of the quotebook server.
    #[arg(
        long,
        env = "QUOTEBOOK_SERVER_URL",
        default_value = "http://127.0.0.1:3000"
    )]
    server: String,
    /// Log level for client diagnostics on stderr.
    #[arg(long, env = "QUOTEBOOK_LOG_LEVEL", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print one random quote.
    Random,
    /// Add a quote.
    Add {
        #[arg(long)]
        text: String,
        #[arg(long)]
        author: String,
    },
    /// Print every quote, one per line.
    All,
    /// Start an interactive session.
    Shell,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(&cli.log_level, None) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let mut controller = ViewController::new(HttpQuoteApi::new(cli.server));
    controller.start();

    match cli.command {
        Command::Random => controller.fetch_random(),
        Command::All => controller.fetch_all(),
        Command::Add { text, author } => {
            controller.toggle_add_form();
            let form = controller.form_mut();
            form.text = text;
            form.author = author;
            controller.submit_add();
        }
        Command::Shell => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            return match shell::run(&mut controller, &mut input, &mut output) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("shell failed: {err}");
                    ExitCode::FAILURE
                }
            };
        }
    }

    let panel = controller.panel();
    if panel.is_error() {
        eprintln!("{panel}");
        ExitCode::FAILURE
    } else {
        println!("{panel}");
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn add_requires_text_and_author() {
        assert!(Cli::try_parse_from(["quotebook", "add", "--text", "t"]).is_err());

        let cli = Cli::try_parse_from([
            "quotebook",
            "--server",
            "http://quotes.local:8080",
            "add",
            "--text",
            "t",
            "--author",
            "a",
        ])
        .unwrap();
        assert_eq!(cli.server, "http://quotes.local:8080");
        assert!(matches!(cli.command, Command::Add { ref text, ref author } if text == "t" && author == "a"));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["quotebook"]).is_err());
        assert!(matches!(
            Cli::try_parse_from(["quotebook", "shell"]).unwrap().command,
            Command::Shell
        ));
    }
}
