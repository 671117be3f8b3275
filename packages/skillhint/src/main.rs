//! Skillhint suggests skills and commands for the prompts you send Claude Code.

use color_eyre::{Result, Section};
use tracing::{instrument, level_filters::LevelFilter};

mod cmd;

use clap::{Parser, Subcommand};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Skillhint suggests skills and commands for your Claude Code prompts.
///
/// Without a subcommand, runs as a Claude Code `UserPromptSubmit` hook: the
/// hook event is read from stdin and suggestions are printed to stdout.
#[derive(Parser)]
#[command(author, version = env!("SKILLHINT_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Integration with Claude Code.
    Claude(cmd::claude::Config),

    /// Validate a skill rules file.
    Validate(cmd::validate::Config),

    /// Show which skills a prompt would trigger.
    Test(cmd::test::Config),
}

#[instrument]
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Claude Code adds everything the hook writes to stdout to the prompt, so
    // logs go to stderr, and by default only errors are logged. Use
    // `SKILLHINT_LOG` directives for debugging, for example
    // `SKILLHINT_LOG=debug` to see which rules file was loaded and why a rule
    // matched.
    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .pretty(),
        )
        .with(
            EnvFilter::builder()
                .with_env_var("SKILLHINT_LOG")
                .with_default_directive(LevelFilter::ERROR.into())
                .from_env_lossy(),
        )
        .init();

    match cli.command {
        None => cmd::claude::hook::main(Default::default()),
        Some(Commands::Claude(config)) => cmd::claude::main(config),
        Some(Commands::Validate(config)) => cmd::validate::main(config),
        Some(Commands::Test(config)) => cmd::test::main(config),
    }
    .suggestion("Run `skillhint claude docs` for documentation on writing skill rules.")
}
