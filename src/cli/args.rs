use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "swot")]
#[command(about = "A study-time tracker for the terminal")]
#[command(long_about = "swot - track study time per module

Define study modules, run start/pause/end timer sessions against them,
log time studied away from the keyboard, and display accumulated totals.

QUICK START:
  swot module add algebra     Create a module
  swot timer                  Run a live study session
  swot log algebra 1.5        Log 1.5 hours studied offline
  swot show                   Total time across all modules

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  swot <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Directory holding swot's config and study data
    #[arg(long, env = "SWOT_DIR", global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage study modules
    ///
    /// A module is a named subject being studied - the unit all time is
    /// accounted against. Removing a module deletes its recorded time.
    ///
    /// # Examples
    ///
    ///   swot module add algebra
    ///   swot module list
    ///   swot module remove ALGEBRA     (case-insensitive match)
    #[command(alias = "m")]
    Module(ModuleArgs),

    /// Log past study time against a module
    ///
    /// Hours are fractional: 'swot log algebra 1.5' records ninety
    /// minutes. The module must already exist; negative or non-numeric
    /// hours are rejected.
    ///
    /// # Examples
    ///
    ///   swot log algebra 1.5
    ///   swot log "set theory" 0.25
    #[command(alias = "l")]
    Log {
        /// Module to credit
        module: String,
        /// Study time in hours
        #[arg(allow_hyphen_values = true)]
        hours: String,
    },

    /// Remove the most recently recorded session of a module
    ///
    /// Undoes the last 'log' or ended timer session. Calling it again
    /// keeps removing older entries; an empty module is a no-op.
    #[command(alias = "u")]
    Undo {
        /// Module to undo the last session of
        module: String,
    },

    /// Show accumulated study time
    ///
    /// With a module name, shows that module's total; with no argument,
    /// the grand total across every module. Totals render as
    /// zero-padded HH:MM:SS fields, e.g. 02H:30M:00S.
    ///
    /// # Examples
    ///
    ///   swot show              Grand total
    ///   swot show algebra      One module
    ///   swot show -o json      Machine-readable
    #[command(alias = "s")]
    Show {
        /// Module to show; omit for the total across all modules
        module: Option<String>,
    },

    /// Run a live study session in the terminal
    ///
    /// Opens a full-screen timer bound to the module list. Space starts
    /// or pauses, 'e' ends the session and records it against the
    /// selected module, 'q' quits. In-progress time is not saved until
    /// the session ends - quitting mid-session discards it.
    #[command(alias = "t")]
    Timer {
        /// Module to preselect
        module: Option<String>,
    },

    /// Generate shell completions
    ///
    /// Supports bash, zsh, fish, powershell, and elvish.
    ///
    /// # Examples
    ///
    ///   swot completions zsh > ~/.zsh/completions/_swot
    Completions {
        /// Shell to generate completions for
        shell: String,
    },
}

#[derive(Args)]
pub struct ModuleArgs {
    #[command(subcommand)]
    pub command: ModuleCommands,
}

#[derive(Subcommand)]
pub enum ModuleCommands {
    /// Add a module
    ///
    /// Adding a name that already exists is a no-op; recorded time is
    /// never clobbered.
    #[command(alias = "a")]
    Add {
        /// Module name (stored verbatim, case preserved)
        name: String,
    },

    /// Remove a module and all its recorded time
    ///
    /// Matches the name case-insensitively and reports which module was
    /// removed; a miss is an error. With --exact, only an exact match is
    /// removed and a missing module is a silent no-op.
    #[command(alias = "rm")]
    Remove {
        /// Module name to match
        name: String,
        /// Require an exact (case-sensitive) match
        #[arg(long)]
        exact: bool,
    },

    /// List modules with session counts and totals
    #[command(alias = "ls")]
    List,
}
