//! Types and parsers for interacting with Claude Code hooks.

use std::path::PathBuf;

use bon::Builder;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Shared fields in Claude Code hook payloads.
///
/// Claude Code always sends these, but none of them are needed to produce
/// suggestions, so a payload that omits them is still accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Context {
    /// The session ID.
    pub session_id: Option<String>,

    /// The path to the chat transcript.
    pub transcript_path: Option<PathBuf>,

    /// The permission mode for the chat.
    pub permission_mode: Option<String>,

    /// The current working directory.
    ///
    /// Used as the project root when `CLAUDE_PROJECT_DIR` isn't set.
    pub cwd: Option<PathBuf>,
}

/// Payload for the `UserPromptSubmit` hook.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPromptSubmitPayload {
    /// The context of the hook.
    #[serde(flatten)]
    pub context: Context,

    /// The user's prompt.
    pub prompt: String,
}

/// The response to a `UserPromptSubmit` hook.
///
/// Claude Code adds plain text written to stdout by a `UserPromptSubmit` hook
/// to the conversation, so the response is just the rendered suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct UserPromptSubmitResponse(String);

impl<S: Into<String>> From<S> for UserPromptSubmitResponse {
    fn from(value: S) -> Self {
        UserPromptSubmitResponse(value.into())
    }
}

/// Configures a hook in Claude Code's settings.
#[derive(Debug, Serialize, Clone, PartialEq, Builder)]
#[non_exhaustive]
pub struct Config {
    /// The type of hook to run; skillhint only runs as a `command` hook.
    #[builder(skip = String::from("command"))]
    pub r#type: String,

    /// The command to run.
    #[builder(into)]
    pub command: String,

    /// Terminate the command after this many seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

/// Configures hook matching strategy in Claude Code's settings.json.
#[derive(Debug, Serialize, Clone, PartialEq, Builder)]
#[non_exhaustive]
pub struct Matcher {
    /// The tool matcher for this hook.
    ///
    /// Claude Code ignores this for `UserPromptSubmit`, so it's left empty
    /// and omitted from the settings file.
    #[builder(default = "", into)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub matcher: String,

    /// The hooks to run when the matcher matches.
    #[builder(with = |i: impl IntoIterator<Item = impl Into<Config>>| i.into_iter().map(Into::into).collect())]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hooks: Vec<Config>,
}
