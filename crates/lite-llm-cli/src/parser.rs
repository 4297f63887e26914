//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for provisioning and monitoring a local
/// inference host.
#[derive(Parser)]
#[command(name = "lite-llm")]
#[command(about = "Check, monitor and manage a local Ollama inference host")]
#[command(version)]
pub struct Cli {
    /// Base URL of the Ollama server
    #[arg(
        long = "ollama-url",
        env = "LITE_LLM_OLLAMA_URL",
        default_value = lite_llm_core::DEFAULT_OLLAMA_URL,
        global = true
    )]
    pub ollama_url: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ModelsCommand;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "lite-llm",
            "models",
            "list",
            "--verbose",
            "--ollama-url",
            "http://gpu-box:11434",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.ollama_url, "http://gpu-box:11434");
        assert!(matches!(
            cli.command,
            Some(Commands::Models {
                command: ModelsCommand::List
            })
        ));
    }

    #[test]
    fn test_status_flags() {
        let cli = Cli::parse_from(["lite-llm", "status", "-w", "-i", "10", "--json"]);
        let Some(Commands::Status {
            watch,
            interval,
            json,
        }) = cli.command
        else {
            panic!("expected status command");
        };
        assert!(watch);
        assert_eq!(interval, 10);
        assert!(json);
    }

    #[test]
    fn test_ask_collects_options() {
        let cli = Cli::parse_from([
            "lite-llm",
            "ask",
            "mistral:7b",
            "Why is the sky blue?",
            "-o",
            "temperature=0.2",
            "--option",
            "num_ctx=4096",
        ]);
        let Some(Commands::Ask {
            model,
            prompt,
            options,
        }) = cli.command
        else {
            panic!("expected ask command");
        };
        assert_eq!(model, "mistral:7b");
        assert_eq!(prompt, "Why is the sky blue?");
        assert_eq!(options, vec!["temperature=0.2", "num_ctx=4096"]);
    }
}
