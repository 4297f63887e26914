//! CLI entry point - the composition root.
//!
//! Adapters are wired once in `bootstrap`; command dispatch routes to
//! handlers which only see core ports.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use lite_llm_cli::handlers::status::StatusArgs;
use lite_llm_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers};
use lite_llm_ollama::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Log to stderr so report output on stdout stays clean. `--verbose`
/// forces debug; otherwise `RUST_LOG` applies, defaulting to info.
fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Cancel `token` on the first Ctrl-C.
fn cancel_on_ctrl_c(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, shutting down");
            token.cancel();
        }
    });
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let cancel = CancellationToken::new();
    cancel_on_ctrl_c(cancel.clone());

    let config = CliConfig {
        ollama_url: cli.ollama_url,
    };
    let ctx = bootstrap(&config, cancel)?;

    match command {
        Commands::Status {
            watch,
            interval,
            json,
        } => {
            handlers::status::execute(&ctx, StatusArgs::from_flags(watch, interval, json)).await?;
        }
        Commands::Check => {
            handlers::check::execute(&ctx)?;
        }
        Commands::Models { command } => {
            handlers::models::execute(&ctx, command).await?;
        }
        Commands::Ask {
            model,
            prompt,
            options,
        } => {
            handlers::ask::execute(&ctx, &model, &prompt, &options).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = u8::try_from(exit_code_for(&e)).unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
