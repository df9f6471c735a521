use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use app_census_core::config::Config;
use app_census_core::{
    bundled_app_names, fetch_installed_apps, AppCensusError, ApplicationRecord, CategorizedReport,
    CategoryClassifier, CategoryStore, InclusionFilter, Result,
};

mod args;
use args::{Cli, Commands, ConfigAction, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let base_dir = resolve_base_dir(cli.base_dir);

    let result = match cli.command {
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => handle_census(&base_dir, cli.verbose, cli.quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "app-census", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("APP_CENSUS_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".app-census"))
        .unwrap_or_else(|| PathBuf::from(".app-census"))
}

/// Run the census: enumerate, fetch, classify, filter, report.
///
/// Every failure on this path is recovered locally so the report run
/// always completes and exits 0.
fn handle_census(base_dir: &Path, verbose: bool, quiet: bool) -> Result<()> {
    if !quiet {
        println!("Analyzing installed applications...");
    }

    // Unreadable config falls back to defaults, with one warning line
    let config = Config::load(base_dir).unwrap_or_else(|e| {
        eprintln!("{} {}", "[WARN]".yellow().bold(), e);
        Config::default()
    });

    let classifier =
        CategoryClassifier::new(CategoryStore::builtin().with_config(&config.category));
    let filter = InclusionFilter::with_defaults().with_extra_exclusions(&config.filter.exclude);
    let system_apps = bundled_app_names();

    let records = match fetch_installed_apps() {
        Ok(records) => records,
        Err(e) => {
            eprintln!(
                "{} Error getting installed apps: {}",
                "[ERROR]".red().bold(),
                e
            );
            Vec::new()
        }
    };

    if verbose {
        print_scan_summary(&records, system_apps.len());
    }

    let report = CategorizedReport::build(&records, &system_apps, &classifier, &filter);

    println!();
    print!("{}", report.render());

    if verbose {
        print_category_counts(&report);
    }

    Ok(())
}

fn print_scan_summary(records: &[ApplicationRecord], system_app_count: usize) {
    let newest: Option<(DateTime<Utc>, &str)> = records
        .iter()
        .filter_map(|r| r.modified_at().map(|ts| (ts, r.name.as_str())))
        .max_by_key(|(ts, _)| *ts);

    let mut summary = format!(
        "Scanned {} applications ({} known system apps)",
        records.len(),
        system_app_count
    );
    if let Some((ts, name)) = newest {
        summary.push_str(&format!(
            ", most recently modified: {} ({})",
            name,
            ts.format("%Y-%m-%d")
        ));
    }
    println!("{}", summary.dimmed());
}

fn print_category_counts(report: &CategorizedReport) {
    let visible = report.visible();
    let total: usize = visible.iter().map(|(_, entries)| entries.len()).sum();
    println!();
    println!(
        "{}",
        format!("{} applications in {} categories", total, visible.len()).dimmed()
    );
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(AppCensusError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
