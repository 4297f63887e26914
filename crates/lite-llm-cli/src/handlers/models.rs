//! Model management handlers: list, pull, remove, recommended.

use anyhow::{Context, Result};
use lite_llm_core::{ModelServerPort, PullProgressEvent, RECOMMENDED_MODELS};
use tracing::{error, info};

use crate::bootstrap::CliContext;
use crate::commands::ModelsCommand;
use crate::error::CliError;
use crate::presentation::PullProgressBar;
use crate::presentation::tables::print_model_table;

/// Execute a models subcommand.
pub async fn execute(ctx: &CliContext, command: ModelsCommand) -> Result<()> {
    let server = ctx.server.as_ref();
    match command {
        ModelsCommand::List => list(server).await,
        ModelsCommand::Pull { name } => pull(server, &name).await,
        ModelsCommand::Remove { name } => remove(server, &name).await,
        ModelsCommand::Recommended => recommended(server).await,
    }
}

async fn list(server: &dyn ModelServerPort) -> Result<()> {
    let models = server
        .list_models()
        .await
        .map_err(CliError::from)
        .context("failed to list models")?;

    if models.is_empty() {
        println!("No models installed.");
        println!("Use 'lite-llm models recommended' to download the recommended models.");
        return Ok(());
    }

    println!("Found {} installed model(s):\n", models.len());
    print_model_table(&models);
    Ok(())
}

async fn pull(server: &dyn ModelServerPort, name: &str) -> Result<()> {
    pull_with_progress(server, name)
        .await
        .with_context(|| format!("failed to pull {name}"))?;
    Ok(())
}

/// Pull one model behind a progress bar.
async fn pull_with_progress(server: &dyn ModelServerPort, name: &str) -> Result<(), CliError> {
    info!(model = %name, "Pulling model");
    let mut progress = PullProgressBar::new(name);
    let mut sink = |event: &PullProgressEvent| progress.update(event);

    let result = server.pull_model(name, &mut sink).await;
    match result {
        Ok(()) => {
            progress.finish(format!("✓ Pulled {name}"));
            Ok(())
        }
        Err(e) => {
            progress.abandon();
            Err(e.into())
        }
    }
}

async fn remove(server: &dyn ModelServerPort, name: &str) -> Result<()> {
    server
        .delete_model(name)
        .await
        .map_err(CliError::from)
        .with_context(|| format!("failed to remove {name}"))?;
    println!("✓ Removed {name}");
    Ok(())
}

/// Pull every recommended model, continuing past failures.
async fn recommended(server: &dyn ModelServerPort) -> Result<()> {
    info!(count = RECOMMENDED_MODELS.len(), "Pulling recommended models");

    let failed = pull_all(server, RECOMMENDED_MODELS).await;
    if !failed.is_empty() {
        return Err(CliError::Partial {
            failed: failed.len(),
            total: RECOMMENDED_MODELS.len(),
        })
        .with_context(|| format!("failed to pull {}", failed.join(", ")));
    }

    println!("Recommended models are ready.");
    println!("Open WebUI can use them at http://localhost:3000");
    Ok(())
}

/// Pull each model in order; returns the names that failed.
async fn pull_all<'a>(server: &dyn ModelServerPort, names: &[&'a str]) -> Vec<&'a str> {
    let mut failed = Vec::new();
    for &name in names {
        if let Err(e) = pull_with_progress(server, name).await {
            error!(model = %name, error = %e, "Failed to pull model");
            failed.push(name);
        }
    }
    failed
}
