#![forbid(unsafe_code)]

use log::{error, info};
use quotebook_core::{init_logging, JsonFileQuoteRepository, QuoteService};
use quotebook_server::{build_router, AppState, ServerConfig};
use std::io::Write;
use std::process::ExitCode;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err, &mut std::io::stderr()),
    }
}

/// Logs `err` and prints it verbatim to `out`.
fn report_failure(err: &str, out: &mut impl Write) -> ExitCode {
    error!("event=server_exit module=server status=error error={err}");
    let _ = writeln!(out, "quotebook-server: {err}");
    ExitCode::FAILURE
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env()?;
    init_logging(&config.log_level, config.log_dir.as_deref())?;

    let repo = JsonFileQuoteRepository::new(&config.quotes_file);
    if config.create_if_missing {
        repo.ensure_document().map_err(|err| {
            error!("event=server_start module=server status=error error_code=store_init_failed");
            format!("failed to initialize quotes document: {err}")
        })?;
    }

    let state = AppState::new(QuoteService::new(repo), config.api.clone());
    let app = build_router(state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| format!("bind {bind_addr} failed: {err}"))?;
    info!(
        "event=server_start module=server status=ok bind={} quotes_file={} public_dir={} version={}",
        bind_addr,
        config.quotes_file.display(),
        config.api.public_dir.display(),
        quotebook_core::core_version()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|err| format!("server failed: {err}"))?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let (Ok(mut sigterm), Ok(mut sigint)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) else {
            error!("event=signal_register module=server status=error");
            let _ = tokio::signal::ctrl_c().await;
            return;
        };
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[cfg(test)]
mod tests {
    use super::report_failure;
    use quotebook_server::ServerConfig;

    #[test]
    fn config_errors_are_printed_as_plain_text() {
        let err = ServerConfig::from_lookup(|name| (name == "PORT").then(|| "http".to_string()))
            .unwrap_err();

        let mut out = Vec::new();
        report_failure(&err, &mut out);

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, format!("quotebook-server: {err}\n"));
        assert!(!printed.contains('"'));
    }
}
