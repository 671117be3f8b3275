//! Integration with Claude Code.

use clap::{Args, Subcommand};
use color_eyre::Result;
use tracing::instrument;

pub mod docs;
pub mod hook;
pub mod setup;

#[derive(Args, Clone, Debug)]
pub struct Config {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone, Debug)]
enum Commands {
    /// Responds to Claude Code `UserPromptSubmit` hooks.
    Hook(hook::Config),

    /// Register the skillhint hook in .claude/settings.local.json.
    Setup(setup::Config),

    /// Print documentation for writing skill rules.
    Docs(docs::Config),
}

#[instrument]
pub fn main(config: Config) -> Result<()> {
    match config.command {
        Commands::Hook(config) => hook::main(config),
        Commands::Setup(config) => setup::main(config),
        Commands::Docs(config) => docs::main(config),
    }
}
