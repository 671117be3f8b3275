//! Output Section Tests

use indoc::indoc;
use pretty_assertions::assert_eq as pretty_assert_eq;
use serde_json::json;

use crate::{Fixture, assert_suggests, user_prompt_hook};

fn sectioned_rules() -> serde_json::Value {
    json!({
        "version": "1.0",
        "skills": {
            "docs-writer": {
                "type": "domain",
                "enforcement": "suggest",
                "priority": "low",
                "promptTriggers": { "keywords": ["docs"] }
            },
            "_sc:plan": {
                "type": "domain",
                "enforcement": "suggest",
                "priority": "high",
                "promptTriggers": { "intentPatterns": ["\\bplan\\b"] }
            },
            "security-guard": {
                "type": "guardrail",
                "enforcement": "block",
                "priority": "critical",
                "promptTriggers": { "keywords": ["auth"] }
            },
            "_ultrathink": {
                "type": "domain",
                "enforcement": "suggest",
                "priority": "critical",
                "promptTriggers": { "keywords": ["architecture", "plan"] }
            },
            "test-helper": {
                "type": "domain",
                "enforcement": "suggest",
                "priority": "medium",
                "promptTriggers": { "intentPatterns": ["write .*tests?"] }
            },
            "_hidden": {
                "type": "domain",
                "enforcement": "suggest",
                "priority": "high",
                "promptTriggers": { "keywords": ["plan"] }
            },
            "api-helper": {
                "type": "domain",
                "enforcement": "suggest",
                "priority": "high",
                "promptTriggers": { "keywords": ["API"] }
            }
        }
    })
}

#[test]
fn test_all_sections_in_fixed_order() {
    let fixture = Fixture::new();
    fixture.project_rules(&sectioned_rules());

    let prompt = "Plan the auth API, write unit tests and update the docs";
    let input = user_prompt_hook(prompt, fixture.project());
    let (exit_code, output) = fixture.run_hook(&input);

    pretty_assert_eq!(exit_code, 0);
    pretty_assert_eq!(
        output,
        indoc! {r#"
            ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
            🎯 SMART SUGGESTIONS
            ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

            🧠 DEEP THINKING RECOMMENDED:
              → Type "ultrathink" for extended reasoning

            ⚡ SC COMMANDS:
              → /sc:plan

            ⚠️ CRITICAL SKILLS:
              → security-guard

            📚 RECOMMENDED SKILLS:
              → api-helper

            💡 SUGGESTED SKILLS:
              → test-helper

            📌 OPTIONAL SKILLS:
              → docs-writer

            ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

        "#}
    );
}

#[test]
fn test_empty_buckets_are_omitted() {
    let fixture = Fixture::new();
    fixture.project_rules(&sectioned_rules());

    let input = user_prompt_hook("update the docs", fixture.project());
    let (exit_code, output) = fixture.run_hook(&input);

    assert_suggests(exit_code, &output);
    assert!(output.contains("📌 OPTIONAL SKILLS:\n  → docs-writer\n"), "got: {output}");
    for heading in [
        "DEEP THINKING",
        "SC COMMANDS",
        "CRITICAL SKILLS",
        "RECOMMENDED SKILLS",
        "SUGGESTED SKILLS",
    ] {
        assert!(!output.contains(heading), "unexpected {heading} in: {output}");
    }
}

#[test]
fn test_deep_thinking_rendered_once() {
    let fixture = Fixture::new();
    fixture.project_rules(&sectioned_rules());

    let input = user_prompt_hook("architecture plan for the auth API", fixture.project());
    let (exit_code, output) = fixture.run_hook(&input);

    assert_suggests(exit_code, &output);
    pretty_assert_eq!(output.matches("DEEP THINKING RECOMMENDED").count(), 1);
    pretty_assert_eq!(output.matches("ultrathink").count(), 1);
}

#[test]
fn test_skills_listed_in_rule_order() {
    let fixture = Fixture::new();
    fixture.project_rules(&json!({
        "skills": {
            "zeta": { "priority": "high", "promptTriggers": { "keywords": ["fix"] } },
            "alpha": { "priority": "high", "promptTriggers": { "intentPatterns": ["bug"] } },
            "mu": { "priority": "high", "promptTriggers": { "keywords": ["the"] } }
        }
    }));

    let input = user_prompt_hook("fix the bug", fixture.project());
    let (exit_code, output) = fixture.run_hook(&input);

    assert_suggests(exit_code, &output);
    assert!(
        output.contains("📚 RECOMMENDED SKILLS:\n  → zeta\n  → alpha\n  → mu\n\n"),
        "got: {output}"
    );
}
