//! odpscmd CLI entry point.

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use odps_console::catalog::{Catalog, MemoryCatalog};
use odps_console::cli::{Args, OutputFormatter, Repl, ReplCommand, ReplInput};
use odps_console::session::SessionContext;
use odps_console::Console;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging (stderr, so stdout only carries results)
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_filter().into()),
        )
        .init();

    let catalog = load_catalog(&args)?;
    let session = SessionContext::new(args.project.clone());
    let console = Console::new(catalog, session, OutputFormatter::new(args.format));

    // Execute commands from -e flag
    if let Some(script) = &args.execute {
        return run_batch(&console, script, args.continue_on_error);
    }

    // Execute commands from -f file
    if let Some(path) = &args.script {
        let script = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script file: {}", path.display()))?;
        return run_batch(&console, &script, args.continue_on_error);
    }

    // Interactive REPL
    run_repl(&console)
}

fn load_catalog(args: &Args) -> Result<MemoryCatalog> {
    let Some(path) = args.catalog_path() else {
        tracing::warn!("No catalog location available, starting with an empty catalog");
        return Ok(MemoryCatalog::new());
    };

    if args.catalog.is_none() && !path.exists() {
        tracing::warn!(path = %path.display(), "Catalog file not found, starting with an empty catalog");
        return Ok(MemoryCatalog::new());
    }

    MemoryCatalog::load(&path)
        .with_context(|| format!("Failed to load catalog: {}", path.display()))
}

fn run_batch<C: Catalog>(console: &Console<C>, script: &str, continue_on_error: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let report = console.run_script(script, &mut stdout, continue_on_error);

    for (statement, error) in &report.failed {
        eprintln!("Error: {error}");
        tracing::info!(statement = %statement, "failed statement");
    }

    if !report.is_success() {
        bail!(
            "{} of {} command(s) failed",
            report.failed.len(),
            report.failed.len() + report.succeeded
        );
    }
    Ok(())
}

fn run_repl<C: Catalog>(console: &Console<C>) -> Result<()> {
    let history_path = dirs::data_local_dir()
        .map(|d| d.join("odps-console").join("history.txt"))
        .unwrap_or_else(|| PathBuf::from(".odpscmd_history"));

    // Create parent directory if needed
    if let Some(parent) = history_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let project = console.session().default_project_name();
    let mut repl = Repl::new()?
        .with_history(history_path.to_str().unwrap_or(".odpscmd_history"))
        .with_project(project);

    println!("odpscmd - project tables and online models");
    match project {
        Some(project) => println!("Default project: {project}"),
        None => println!("No default project set; use --project or name one per command"),
    }
    println!("Type help for help, quit to exit");
    println!();

    loop {
        match repl.read_input()? {
            ReplInput::Exit => {
                println!("Goodbye!");
                break;
            }
            ReplInput::Command(cmd) => match cmd {
                ReplCommand::Empty => continue,
                ReplCommand::Quit => {
                    println!("Goodbye!");
                    break;
                }
                ReplCommand::Help(keyword) => print_help(console, keyword.as_deref()),
                ReplCommand::Statement(statement) => {
                    let mut stdout = io::stdout().lock();
                    if let Err(e) = console.run_statement(&statement, &mut stdout) {
                        eprintln!("Error: {e}");
                        if matches!(e, odps_console::Error::UnrecognizedCommand(_)) {
                            eprintln!("Type help for available commands");
                        }
                    }
                }
            },
        }
    }

    Ok(())
}

fn print_help<C: Catalog>(console: &Console<C>, keyword: Option<&str>) {
    let usage = console.matcher().usage(keyword);
    if usage.is_empty() {
        println!("No help found for '{}'", keyword.unwrap_or_default());
        return;
    }

    for line in usage {
        println!("{line}");
    }
    if keyword.is_none() {
        println!();
        println!("Console commands:");
        println!("  help [keyword]  Show usage, optionally for one command");
        println!("  quit            Exit");
        println!();
        println!("Statements end with a semicolon (;)");
    }
}
