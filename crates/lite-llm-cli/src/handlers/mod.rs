//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that validate CLI input, call core services or ports
//!   from the context, and format output for the terminal.

pub mod ask;
pub mod check;
pub mod models;
pub mod status;
