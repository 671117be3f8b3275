//! Schema types for `skill-rules.json`.

use std::fmt;

use derive_more::Display;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{IgnoredAny, MapAccess, Visitor},
};
use serde_json::Value;

/// A rules document.
///
/// ```json
/// {
///   "version": "1.0",
///   "skills": {
///     "refactor-helper": {
///       "type": "domain",
///       "enforcement": "suggest",
///       "priority": "high",
///       "promptTriggers": {
///         "keywords": ["refactor"],
///         "intentPatterns": ["(clean|tidy)\\s+up"]
///       }
///     }
///   }
/// }
/// ```
///
/// Any JSON document is accepted. A field with an unexpected shape is treated
/// as absent, so one odd rule never hides the others.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SkillRules {
    /// The version tag of the document. Informational only.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// The rules defined in this document, keyed by name.
    #[serde(default, deserialize_with = "lenient")]
    pub skills: Skills,
}

impl SkillRules {
    /// Read rules from a parsed JSON document.
    ///
    /// A document that isn't an object defines no rules.
    pub fn from_document(document: Value) -> Self {
        if !document.is_object() {
            tracing::warn!(?document, "rules document is not an object");
            return SkillRules::default();
        }
        SkillRules::deserialize(document).unwrap_or_default()
    }
}

/// Rules keyed by unique name, kept in document order.
///
/// Document order is the order in which rules are evaluated and the order in
/// which matches are listed within each output section. If a name appears
/// twice, the rule keeps the position of its first appearance and the
/// definition of its last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Skills(Vec<(String, SkillRule)>);

impl Skills {
    /// Iterate over rules in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SkillRule)> {
        self.0.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&SkillRule> {
        self.iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, rule)| rule)
    }

    /// Insert a rule, replacing the definition of an existing rule with the
    /// same name without moving it.
    pub fn insert(&mut self, name: impl Into<String>, rule: SkillRule) {
        let name = name.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = rule,
            None => self.0.push((name, rule)),
        }
    }

    /// The number of rules.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the document defines no rules.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, SkillRule)> for Skills {
    fn from_iter<I: IntoIterator<Item = (N, SkillRule)>>(iter: I) -> Self {
        let mut skills = Skills::default();
        for (name, rule) in iter {
            skills.insert(name, rule);
        }
        skills
    }
}

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SkillsVisitor;

        impl<'de> Visitor<'de> for SkillsVisitor {
            type Value = Skills;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of skill names to rules")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut skills = Skills::default();
                while let Some((name, rule)) = map.next_entry::<String, Lenient<SkillRule>>()? {
                    skills.insert(name, rule.into_inner());
                }
                Ok(skills)
            }
        }

        deserializer.deserialize_map(SkillsVisitor)
    }
}

impl Serialize for Skills {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

/// A single skill rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRule {
    /// The kind of skill.
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: SkillType,

    /// How strongly the skill should be applied.
    ///
    /// Parsed for completeness; suggestions are grouped by priority only.
    #[serde(default, deserialize_with = "lenient")]
    pub enforcement: Enforcement,

    /// The output section the skill is listed under.
    ///
    /// A skill without a recognized priority can still match but isn't listed.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Conditions under which the skill is suggested for a prompt.
    ///
    /// A rule without triggers never matches.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub prompt_triggers: Option<PromptTriggers>,
}

/// The kind of a skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    /// Guards against mistakes in a specific area.
    #[display("guardrail")]
    Guardrail,

    /// Provides knowledge about a specific domain.
    #[default]
    #[display("domain")]
    Domain,

    /// Any other value.
    #[serde(other)]
    #[display("unknown")]
    Unknown,
}

/// How strongly a skill should be applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforcement {
    #[display("block")]
    Block,

    #[default]
    #[display("suggest")]
    Suggest,

    #[display("warn")]
    Warn,

    /// Any other value.
    #[serde(other)]
    #[display("unknown")]
    Unknown,
}

/// Suggestion urgency, used to group skills in the output.
///
/// Ordered from most to least urgent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[display("critical")]
    Critical,

    #[display("high")]
    High,

    #[display("medium")]
    Medium,

    #[display("low")]
    Low,
}

impl Priority {
    /// All priorities, most urgent first.
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];
}

/// Prompt conditions that trigger a skill suggestion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptTriggers {
    /// Case-insensitive substrings of the prompt.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    /// Case-insensitive regular expressions matched against the prompt.
    ///
    /// Only consulted when no keyword matches.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Vec::is_empty")]
    pub intent_patterns: Vec<String>,
}

/// A value that is either well formed or replaced by its default.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

impl<T: Default> Lenient<T> {
    fn into_inner(self) -> T {
        match self {
            Lenient::Valid(value) => value,
            Lenient::Invalid(_) => T::default(),
        }
    }
}

/// Deserialize a field, treating `null` and values of the wrong shape as the
/// field's default.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Lenient::<T>::deserialize(deserializer).map(Lenient::into_inner)
}
