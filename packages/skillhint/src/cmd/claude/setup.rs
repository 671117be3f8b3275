//! Register the skillhint hook with Claude Code.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use color_eyre::{
    Result,
    eyre::{Context, OptionExt, bail},
};
use serde_json::{Value, json};
use skillhint::{claude::hook, rules};
use tracing::instrument;

#[derive(Args, Clone, Debug)]
pub struct Config {
    /// Path to the .claude directory.
    #[arg(long, default_value = ".claude")]
    claude_dir: PathBuf,

    /// Seconds Claude Code waits for the hook before giving up.
    #[arg(long, default_value_t = 5)]
    timeout: u32,
}

/// The Claude Code event skillhint responds to.
const EVENT: &str = "UserPromptSubmit";

#[instrument]
pub fn main(config: Config) -> Result<()> {
    fs::create_dir_all(&config.claude_dir).context("create .claude directory")?;

    let dotclaude = config
        .claude_dir
        .canonicalize()
        .with_context(|| format!("canonicalize claude dir: {:?}", config.claude_dir))?;
    let settings_file = dotclaude.join("settings.local.json");

    let skillhint_path = env::current_exe()
        .context("get current executable path")?
        .to_str()
        .ok_or_eyre("convert current executable path to string")?
        .to_string();

    let skillhint_hook = hook::Config::builder()
        .command(format!("{skillhint_path} claude hook"))
        .timeout(config.timeout)
        .build();
    let matcher = hook::Matcher::builder().hooks([skillhint_hook]).build();
    tracing::debug!(?matcher, "generate desired hook");

    let mut settings = if settings_file.exists() {
        let content =
            fs::read_to_string(&settings_file).context("read existing settings.local.json")?;
        serde_json::from_str::<Value>(&content).context("parse existing settings.local.json")?
    } else {
        json!({})
    };
    tracing::debug!(?settings, ?settings_file, "read existing settings");

    let added = merge_hook(&mut settings, json!(matcher))?;
    if added {
        let settings_json =
            serde_json::to_string_pretty(&settings).context("serialize settings")?;
        fs::write(&settings_file, settings_json).context("write settings file")?;
        tracing::debug!(?settings, ?settings_file, "wrote merged settings file");
        println!("✓ Added {EVENT} hook to {}", settings_file.display());
    } else {
        println!("✓ {EVENT} hook already present in {}", settings_file.display());
    }
    println!();

    report_rules_file(&dotclaude)?;

    println!("Next steps:");
    println!("1. Run /hooks in Claude Code to verify the hook is registered");
    println!("2. Run `skillhint claude docs` to learn the skill-rules.json format");

    Ok(())
}

/// Merge the hook matcher into the settings under [`EVENT`].
///
/// The settings are edited as a [`Value`] so unknown keys survive; with
/// `serde_json`'s `preserve_order` feature their order survives too. Returns
/// whether the matcher was added, which is `false` when an identical matcher
/// is already registered.
fn merge_hook(settings: &mut Value, matcher: Value) -> Result<bool> {
    let Value::Object(settings) = settings else {
        bail!("expected settings to be an object, got: {settings:?}");
    };
    let hooks = settings.entry("hooks").or_insert_with(|| json!({}));
    let Value::Object(hooks) = hooks else {
        bail!("expected hooks to be an object, got: {hooks:?}");
    };
    let entry = hooks.entry(EVENT).or_insert_with(|| json!([]));
    let Value::Array(matchers) = entry else {
        bail!("expected matchers to be an array, got: {entry:?}");
    };

    if matchers.contains(&matcher) {
        return Ok(false);
    }
    matchers.push(matcher);
    Ok(true)
}

/// Tell the user whether the project has a rules file for the hook to use.
fn report_rules_file(dotclaude: &Path) -> Result<()> {
    let project_root = dotclaude
        .parent()
        .ok_or_eyre("get parent directory of .claude")?;
    let rules_file = rules::rules_path(project_root);
    if rules_file.exists() {
        println!("Using project rules: {}", rules_file.display());
    } else {
        println!("No project rules at {}.", rules_file.display());
        println!("The hook falls back to ~/.claude/skills/skill-rules.json.");
    }
    println!();
    Ok(())
}
