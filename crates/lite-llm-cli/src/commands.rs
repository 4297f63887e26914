//! Main commands enum and subcommands.

use clap::Subcommand;
use lite_llm_core::DEFAULT_WATCH_INTERVAL_SECS;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show hardware, utilization, inference server and web UI status
    Status {
        /// Refresh continuously until interrupted
        #[arg(short, long)]
        watch: bool,
        /// Seconds between refreshes when watching
        #[arg(short, long, default_value_t = DEFAULT_WATCH_INTERVAL_SECS)]
        interval: u64,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check this host against the deployment requirements
    Check,

    /// Manage models on the inference server
    Models {
        #[command(subcommand)]
        command: ModelsCommand,
    },

    /// Run a one-shot prompt against an installed model
    Ask {
        /// Model name (e.g. "llama3.1:8b")
        model: String,
        /// Prompt text
        prompt: String,
        /// Generation option as key=value (repeatable)
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
        options: Vec<String>,
    },
}

/// Model management subcommands.
#[derive(Subcommand)]
pub enum ModelsCommand {
    /// List installed models
    List,
    /// Download a model
    Pull {
        /// Model name (e.g. "mistral:7b-instruct-q4_K_M")
        name: String,
    },
    /// Remove an installed model
    Remove {
        /// Model name
        name: String,
    },
    /// Download the recommended models for 8 GB GPUs
    Recommended,
}
