//! Validate skill rules files.

use std::env;
use std::path::PathBuf;

use clap::Args;
use color_eyre::{
    Section, SectionExt,
    eyre::{Context, Result, eyre},
};
use skillhint::rules::{self, RuleSource, SearchRoots};

#[derive(Args, Clone, Debug)]
pub struct Config {
    /// Path to a specific rules file to validate.
    /// If not specified, validates the file the hook would load.
    pub path: Option<PathBuf>,

    /// Project directory to search when no path is given.
    /// Defaults to `CLAUDE_PROJECT_DIR`, then the current directory.
    #[arg(long)]
    pub project_dir: Option<PathBuf>,
}

pub fn main(config: Config) -> Result<()> {
    let source = match config.path {
        Some(path) => {
            let rules = rules::load_from(&path).context("parse rules file")?;
            RuleSource { path, rules }
        }
        None => {
            let cwd = env::current_dir().context("get current directory")?;
            let mut roots = SearchRoots::from_env(Some(cwd.as_path()));
            if let Some(project_dir) = config.project_dir {
                roots.project = Some(project_dir);
            }
            rules::search(&roots).context("find rules file")?
        }
    };

    let yaml = serde_yaml::to_string(&source.rules).context("serialize rules")?;
    println!("Rules file: {}", source.path.display());
    println!("{yaml}");
    println!("------");

    let invalid = source.rules.invalid_patterns();
    if invalid.is_empty() {
        println!(
            "✓ {} rules, all intent patterns compile",
            source.rules.skills.len()
        );
        return Ok(());
    }

    let report = invalid.iter().fold(
        eyre!("{} invalid intent pattern(s)", invalid.len()),
        |report, pattern| {
            let header = format!("rule {:?}, pattern {:?}:", pattern.rule, pattern.pattern);
            report.section(pattern.error.to_string().header(header))
        },
    );
    Err(report)
}
