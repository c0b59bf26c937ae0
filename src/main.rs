use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use swot::cli::args::{Cli, Commands};
use swot::cli::commands;
use swot::config::{ColorSetting, Paths, Settings};
use swot::error::SwotError;
use swot::study::{ModuleStore, StudyTracker};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SwotError> {
    let cli = Cli::parse();

    let paths = cli
        .dir
        .clone()
        .map_or_else(Paths::default, Paths::with_root);
    let settings = Settings::load(&paths)?;

    match settings.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let format = cli.output.unwrap_or(settings.general.default_output);

    let data_file = settings
        .storage
        .data_file
        .clone()
        .unwrap_or_else(|| paths.data_file.clone());
    let mut tracker = StudyTracker::open(ModuleStore::new(data_file))?;

    let output = match cli.command {
        Commands::Module(args) => commands::module(&mut tracker, args.command, format)?,
        Commands::Log { module, hours } => commands::record(&mut tracker, &module, &hours, format)?,
        Commands::Undo { module } => commands::undo(&mut tracker, &module, format)?,
        Commands::Show { module } => commands::show(&tracker, module.as_deref(), format)?,
        Commands::Timer { module } => {
            swot::tui::run(&mut tracker, module.as_deref())?;
            String::new()
        }
        Commands::Completions { shell } => commands::completions(&shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
