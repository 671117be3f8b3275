//! Build script for skillhint that generates version information.
//!
//! The version is `git describe --always --tags --dirty=-dirty` when built
//! from a git checkout, and the package version otherwise.

use std::env;
use std::iter;
use std::process::Command;

fn main() {
    let version = git_describe()
        .or_else(|_| env::var("CARGO_PKG_VERSION").map_err(|e| e.to_string()))
        .unwrap_or_else(|_| String::from("unknown"));
    println!("cargo:rustc-env=SKILLHINT_VERSION={version}");
    println!("cargo:rerun-if-changed=build.rs");
}

fn run(prog: &str, argv: &[&str]) -> Result<String, String> {
    let invocation = iter::once(prog)
        .chain(argv.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");

    let output = Command::new(prog)
        .args(argv)
        .output()
        .map_err(|e| format!("failed to execute `{invocation}`: {e}"))?;
    if !output.status.success() {
        return Err(format!("`{invocation}` exited with non-zero status"));
    }

    let output = String::from_utf8(output.stdout)
        .map_err(|e| format!("could not parse output of `{invocation}` as UTF-8: {e}"))?;
    Ok(output.trim_end().to_string())
}

fn git_describe() -> Result<String, String> {
    run("git", &["describe", "--always", "--tags", "--dirty=-dirty"])
}
