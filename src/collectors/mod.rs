pub mod detect;
pub mod megaraid;
pub mod mount;

use anyhow::{Context, Result};
use std::process::Command;

/// Run an external command synchronously and return its captured stdout.
/// A non-zero exit is logged to stderr but stdout is still returned, so
/// callers can keep going with whatever partial data the tool produced.
pub fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let out = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("failed to launch {}", program))?;

    if !out.status.success() {
        eprintln!(
            "command \"{} {}\" failed: {}, stderr: {}",
            program,
            args.join(" "),
            out.status,
            String::from_utf8_lossy(&out.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}
