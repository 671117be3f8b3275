//! Prompt evaluation against skill rules.

use derive_more::Display;
use regex::{Regex, RegexBuilder};

use super::schema::{PromptTriggers, SkillRule, SkillRules};

/// The kind of trigger that matched a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MatchType {
    /// One of the rule's keywords is a substring of the prompt.
    #[display("keyword")]
    Keyword,

    /// One of the rule's intent patterns matches the prompt.
    #[display("intent")]
    Intent,
}

/// A rule that matched a prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedSkill<'a> {
    /// The name of the rule.
    pub name: &'a str,

    /// The kind of trigger that fired.
    pub match_type: MatchType,

    /// The keyword or intent pattern that fired, as written in the rules.
    pub trigger: &'a str,

    /// The rule that matched.
    pub rule: &'a SkillRule,
}

/// An intent pattern that fails to compile.
#[derive(Debug)]
pub struct InvalidPattern<'a> {
    /// The name of the rule defining the pattern.
    pub rule: &'a str,

    /// The pattern as written in the rules.
    pub pattern: &'a str,

    /// Why the pattern failed to compile.
    pub error: regex::Error,
}

impl SkillRules {
    /// Evaluate every rule against the prompt.
    ///
    /// Matches are returned in document order; each rule matches at most once.
    #[tracing::instrument(skip(self))]
    pub fn evaluate<'a>(&'a self, prompt: &str) -> Vec<MatchedSkill<'a>> {
        let lowered = prompt.to_lowercase();
        self.skills
            .iter()
            .filter_map(|(name, rule)| {
                let triggers = rule.prompt_triggers.as_ref()?;
                let (match_type, trigger) = triggers.evaluate(prompt, &lowered)?;
                tracing::debug!(name, %match_type, trigger, "rule matched");
                Some(MatchedSkill {
                    name,
                    match_type,
                    trigger,
                    rule,
                })
            })
            .collect()
    }

    /// Report every intent pattern in the document that fails to compile.
    pub fn invalid_patterns(&self) -> Vec<InvalidPattern<'_>> {
        self.skills
            .iter()
            .flat_map(|(name, rule)| {
                rule.prompt_triggers
                    .iter()
                    .flat_map(|triggers| &triggers.intent_patterns)
                    .filter_map(move |pattern| {
                        compile_intent(pattern).err().map(|error| InvalidPattern {
                            rule: name,
                            pattern,
                            error,
                        })
                    })
            })
            .collect()
    }
}

impl PromptTriggers {
    /// Find the trigger that fires for a prompt.
    ///
    /// Keywords are checked against the lower-cased prompt first; intent
    /// patterns are only consulted when no keyword matches.
    fn evaluate(&self, prompt: &str, lowered: &str) -> Option<(MatchType, &str)> {
        if let Some(keyword) = self
            .keywords
            .iter()
            .find(|keyword| lowered.contains(&keyword.to_lowercase()))
        {
            return Some((MatchType::Keyword, keyword.as_str()));
        }

        self.intent_patterns
            .iter()
            .find(|pattern| intent_matches(pattern, prompt))
            .map(|pattern| (MatchType::Intent, pattern.as_str()))
    }
}

/// Compile an intent pattern. Intent patterns are always case-insensitive.
pub fn compile_intent(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Test an intent pattern against the prompt.
///
/// A pattern that doesn't compile never matches; the rest of the rule set is
/// still evaluated.
fn intent_matches(pattern: &str, prompt: &str) -> bool {
    match compile_intent(pattern) {
        Ok(regex) => regex.is_match(prompt),
        Err(error) => {
            tracing::warn!(%error, pattern, "skipping invalid intent pattern");
            false
        }
    }
}
