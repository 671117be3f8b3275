//! Rendering matched skills into the suggestion block shown to Claude.
//!
//! The block looks like this:
//!
//! ```text
//! ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//! 🎯 SMART SUGGESTIONS
//! ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//!
//! 🧠 DEEP THINKING RECOMMENDED:
//!   → Type "ultrathink" for extended reasoning
//!
//! ⚡ SC COMMANDS:
//!   → /sc:plan
//!
//! 📚 RECOMMENDED SKILLS:
//!   → refactor-helper
//!
//! ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::rules::{MatchedSkill, Priority};

/// The horizontal rule framing the block.
pub const BANNER: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Rule name that requests the deep thinking section.
pub const ULTRATHINK: &str = "_ultrathink";

/// Prefix of rule names that stand for slash commands.
pub const COMMAND_PREFIX: &str = "_sc:";

/// How a rule name is presented in the suggestion block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category<'a> {
    /// The reserved `_ultrathink` name.
    DeepThinking,

    /// A `_sc:` name, holding the command without its leading underscore.
    Command(&'a str),

    /// A regular skill, listed under its priority.
    Skill,

    /// Any other name starting with `_`; it can match but is never listed.
    Reserved,
}

impl<'a> Category<'a> {
    /// Categorize a rule name.
    pub fn of(name: &'a str) -> Self {
        if name == ULTRATHINK {
            Category::DeepThinking
        } else if name.starts_with(COMMAND_PREFIX) {
            Category::Command(&name[1..])
        } else if name.starts_with('_') {
            Category::Reserved
        } else {
            Category::Skill
        }
    }
}

/// Matched skills grouped into output sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions<'a> {
    /// Whether `_ultrathink` matched.
    pub deep_thinking: bool,

    /// Matched slash commands, in match order.
    pub commands: Vec<&'a str>,

    /// Matched regular skills by priority, in match order.
    ///
    /// Only priorities with at least one skill are present.
    pub skills: BTreeMap<Priority, Vec<&'a str>>,
}

impl<'a> Suggestions<'a> {
    /// Group matches into sections.
    pub fn from_matches(matches: &[MatchedSkill<'a>]) -> Self {
        let mut suggestions = Suggestions::default();
        for matched in matches {
            match Category::of(matched.name) {
                Category::DeepThinking => suggestions.deep_thinking = true,
                Category::Command(command) => suggestions.commands.push(command),
                Category::Skill => {
                    if let Some(priority) = matched.rule.priority {
                        suggestions
                            .skills
                            .entry(priority)
                            .or_default()
                            .push(matched.name);
                    }
                }
                Category::Reserved => {}
            }
        }
        suggestions
    }
}

impl fmt::Display for Suggestions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BANNER}")?;
        writeln!(f, "🎯 SMART SUGGESTIONS")?;
        writeln!(f, "{BANNER}")?;
        writeln!(f)?;

        if self.deep_thinking {
            writeln!(f, "🧠 DEEP THINKING RECOMMENDED:")?;
            writeln!(f, "  → Type \"ultrathink\" for extended reasoning")?;
            writeln!(f)?;
        }

        if !self.commands.is_empty() {
            writeln!(f, "⚡ SC COMMANDS:")?;
            for command in &self.commands {
                writeln!(f, "  → /{command}")?;
            }
            writeln!(f)?;
        }

        for (priority, names) in &self.skills {
            writeln!(f, "{}", heading(*priority))?;
            for name in names {
                writeln!(f, "  → {name}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{BANNER}")
    }
}

/// The section heading for skills of a given priority.
fn heading(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "⚠️ CRITICAL SKILLS:",
        Priority::High => "📚 RECOMMENDED SKILLS:",
        Priority::Medium => "💡 SUGGESTED SKILLS:",
        Priority::Low => "📌 OPTIONAL SKILLS:",
    }
}

/// Render the suggestion block for a set of matches.
///
/// Returns `None` when nothing matched, in which case the hook prints nothing.
/// Any match produces the block, even if it matched only reserved names and
/// therefore has no sections.
pub fn render(matches: &[MatchedSkill<'_>]) -> Option<String> {
    if matches.is_empty() {
        return None;
    }
    Some(Suggestions::from_matches(matches).to_string())
}
