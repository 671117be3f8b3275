//! Documentation for writing skill rules.

use clap::Args;
use color_eyre::Result;
use color_print::cstr;

#[derive(Args, Clone, Debug)]
pub struct Config {}

pub fn main(_config: Config) -> Result<()> {
    println!("{DOCS}");
    Ok(())
}

const DOCS: &str = cstr!("\
<bold><blue>Skillhint Rule Writing Guide</blue></bold>

<bold>What is Skillhint?</bold>

  Skillhint runs on every prompt you submit to Claude Code. When the prompt
  mentions something one of your skills covers, it adds a short suggestion
  block to the prompt so Claude knows which skill or command to reach for.

  It never blocks a prompt. If the rules file is missing or broken, the prompt
  goes through untouched.

<bold>Rule File Locations</bold>

  The first file that can be read as JSON wins. Odd values inside it are ignored:

    <cyan>$CLAUDE_PROJECT_DIR/.claude/skills/skill-rules.json</cyan>   <dim>Project rules</dim>
    <cyan>$HOME/.claude/skills/skill-rules.json</cyan>                 <dim>Global rules</dim>

  <dim>Without $CLAUDE_PROJECT_DIR, the working directory from the hook event is used.</dim>
  <dim>Without $HOME, $USERPROFILE is used.</dim>

<bold>Rule Format</bold>

  <yellow>{</yellow>
    <yellow>\"version\": \"1.0\",</yellow>
    <yellow>\"skills\": {</yellow>
      <yellow>\"backend-guidelines\": {</yellow>
        <yellow>\"type\": \"guardrail\",</yellow>          <dim># guardrail or domain</dim>
        <yellow>\"enforcement\": \"suggest\",</yellow>     <dim># block, suggest, or warn</dim>
        <yellow>\"priority\": \"high\",</yellow>           <dim># critical, high, medium, or low</dim>
        <yellow>\"promptTriggers\": {</yellow>
          <yellow>\"keywords\": [\"controller\", \"route\"],</yellow>
          <yellow>\"intentPatterns\": [\"(create|add).*endpoint\"]</yellow>
        <yellow>}</yellow>
      <yellow>}</yellow>
    <yellow>}</yellow>
  <yellow>}</yellow>

  Rules are checked in the order they appear in the file.

<bold>Triggers</bold>

  <green>keywords</green>         Substrings of the prompt, compared case-insensitively.
                   Checked first; if one matches, intent patterns are skipped.

  <green>intentPatterns</green>   Regular expressions, always case-insensitive.
                   A pattern that doesn't compile is skipped; run
                   <cyan>skillhint validate</cyan> to find them.

  A rule without <cyan>promptTriggers</cyan> never matches.

<bold>Output Sections</bold>

  <green>_ultrathink</green>       A rule with this name adds a deep thinking recommendation.
  <green>_sc:NAME</green>          Rules named like this are listed as the slash command /sc:NAME.
  <green>other _ names</green>     Matched but not listed.
  <green>everything else</green>   Listed by priority, in this order:

    critical   <dim>CRITICAL SKILLS</dim>
    high       <dim>RECOMMENDED SKILLS</dim>
    medium     <dim>SUGGESTED SKILLS</dim>
    low        <dim>OPTIONAL SKILLS</dim>

<bold>Debugging</bold>

  <cyan>skillhint validate</cyan>                     Show the rules file the hook would load
  <cyan>skillhint test --prompt \"...\"</cyan>          Show which rules a prompt triggers
  <cyan>SKILLHINT_LOG=debug skillhint</cyan>          Log hook decisions to stderr
");
