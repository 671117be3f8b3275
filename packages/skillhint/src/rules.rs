//! Rule data types and loading operations.

use std::env;
use std::ffi::OsString;
use std::fs::read_to_string;
use std::iter;
use std::path::{Path, PathBuf};

use bon::Builder;
use color_eyre::{
    Section, SectionExt,
    eyre::{Context, Result, eyre},
};
use serde_json::Value;
use tap::TapFallible;

pub use eval::*;
pub use schema::*;

mod eval;
mod schema;

/// The rules file, relative to a search root.
pub fn rules_path(root: &Path) -> PathBuf {
    root.join(".claude").join("skills").join("skill-rules.json")
}

/// The directories searched for a rules file.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct SearchRoots {
    /// The project root, searched first.
    #[builder(into)]
    pub project: Option<PathBuf>,

    /// The user's home directory, searched when the project has no usable
    /// rules file.
    #[builder(into, default)]
    pub home: PathBuf,
}

impl SearchRoots {
    /// Resolve search roots from the environment.
    ///
    /// The project root is `CLAUDE_PROJECT_DIR`, falling back to `cwd` (the
    /// working directory reported by the hook). The home directory is `HOME`,
    /// then `USERPROFILE`; when neither is set it is empty, which makes the
    /// global rules file relative to the current directory. Empty variables
    /// count as unset.
    #[tracing::instrument]
    pub fn from_env(cwd: Option<&Path>) -> Self {
        let project = non_empty_var("CLAUDE_PROJECT_DIR")
            .map(PathBuf::from)
            .or_else(|| cwd.map(Path::to_path_buf));
        let home = non_empty_var("HOME")
            .or_else(|| non_empty_var("USERPROFILE"))
            .map(PathBuf::from)
            .unwrap_or_default();
        Self { project, home }
    }

    /// Candidate rules files, in search order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        self.project
            .iter()
            .chain(iter::once(&self.home))
            .map(|root| rules_path(root))
            .collect()
    }
}

fn non_empty_var(key: &str) -> Option<OsString> {
    env::var_os(key).filter(|value| !value.is_empty())
}

/// A parsed rules document and the file it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSource {
    /// The file the rules were read from.
    pub path: PathBuf,

    /// The parsed rules.
    pub rules: SkillRules,
}

/// Load rules from the first candidate file that can be read and parsed.
///
/// Candidates are tried in order; a project file that is missing or invalid
/// falls through to the global file. If no candidate works the error lists why
/// each one was rejected.
#[tracing::instrument]
pub fn search(roots: &SearchRoots) -> Result<RuleSource> {
    let mut report = eyre!("no usable rules file");
    for path in roots.candidates() {
        match load_from(&path) {
            Ok(rules) => return Ok(RuleSource { path, rules }),
            Err(error) => {
                tracing::debug!(?error, ?path, "skipping rules file");
                let reason = format!("{error:#}");
                report = report.section(reason.header(format!("{}:", path.display())));
            }
        }
    }
    Err(report)
}

/// Load rules from a single file.
///
/// Fails only when the file can't be read or isn't valid JSON. Parts of the
/// document with an unexpected shape are ignored; see [`SkillRules`].
#[tracing::instrument]
pub fn load_from(path: &Path) -> Result<SkillRules> {
    let content = read_to_string(path).with_context(|| format!("read rules file: {path:?}"))?;

    serde_json::from_str::<Value>(&content)
        .with_context(|| format!("parse rules file: {path:?}"))
        .with_section(|| content.header("File content:"))
        .map(SkillRules::from_document)
        .tap_ok(|rules| tracing::debug!(skills = rules.skills.len(), "parsed rules file"))
}
