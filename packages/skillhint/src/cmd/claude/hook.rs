//! Responds to Claude Code `UserPromptSubmit` hooks.

use std::io::{self, Write};

use clap::Args;
use color_eyre::{Result, eyre::Context};
use skillhint::{
    claude::hook::{UserPromptSubmitPayload, UserPromptSubmitResponse},
    report,
    rules::{self, SearchRoots},
};
use tracing::instrument;

#[derive(Args, Clone, Debug, Default)]
pub struct Config {}

/// Suggest skills for the prompt in the hook event on stdin.
///
/// The hook never blocks a prompt: a malformed event, a missing or invalid
/// rules file, or a failed write all end the same way as a prompt that
/// matched nothing, with no output and a successful exit.
#[instrument]
pub fn main(config: Config) -> Result<()> {
    if let Err(error) = respond(config) {
        tracing::debug!(?error, "no suggestions");
    }
    Ok(())
}

fn respond(_config: Config) -> Result<()> {
    let stdin = io::stdin();
    let payload =
        serde_json::from_reader::<_, UserPromptSubmitPayload>(stdin).context("read hook event")?;

    let roots = SearchRoots::from_env(payload.context.cwd.as_deref());
    let source = rules::search(&roots).context("load rules")?;
    tracing::debug!(path = ?source.path, "loaded rules");

    let matches = source.rules.evaluate(&payload.prompt);
    let Some(response) = report::render(&matches).map(UserPromptSubmitResponse::from) else {
        return Ok(());
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{response}").context("write response")?;
    stdout.flush().context("flush response")
}
