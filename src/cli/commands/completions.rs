//! Shell completions generation.
//!
//! Generates completion scripts for bash, zsh, fish, powershell, and
//! elvish.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::SwotError;

/// Generate a completion script for the named shell.
///
/// # Errors
///
/// Returns an error for an unrecognized shell name.
pub fn completions(shell: &str) -> Result<String, SwotError> {
    let shell = shell_from_str(shell).ok_or_else(|| {
        SwotError::InvalidInput(format!(
            "unknown shell '{shell}' (expected bash, zsh, fish, powershell, or elvish)"
        ))
    })?;

    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "swot", &mut buf);
    String::from_utf8(buf).map_err(|e| SwotError::Config(format!("UTF-8 error: {e}")))
}

/// Get shell from string name.
fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}
