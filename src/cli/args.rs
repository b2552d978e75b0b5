//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

use super::OutputFormat;

/// Console for listing project tables and inspecting online models.
#[derive(Parser, Debug)]
#[command(name = "odpscmd")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Execute `;`-separated commands and exit
    #[arg(short = 'e', long = "execute", value_name = "COMMANDS")]
    pub execute: Option<String>,

    /// Read commands from a script file and exit
    #[arg(short = 'f', long = "file", value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Default project for commands that do not name one
    #[arg(long = "project", env = "ODPS_PROJECT", value_name = "NAME")]
    pub project: Option<String>,

    /// Catalog file describing projects, tables and online models
    #[arg(long = "catalog", env = "ODPS_CATALOG", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output format for stdout
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Keep running remaining commands after one fails
    #[arg(short = 'k', long = "continue-on-error")]
    pub continue_on_error: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Check if we should enter interactive REPL mode.
    pub fn is_interactive(&self) -> bool {
        self.execute.is_none() && self.script.is_none()
    }

    /// Catalog path, falling back to `<config dir>/odps-console/catalog.json`.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog.clone().or_else(|| {
            dirs::config_dir().map(|d| d.join("odps-console").join("catalog.json"))
        })
    }

    /// Default log filter for the given verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_batch_args() {
        let args = Args::try_parse_from([
            "odpscmd",
            "-e",
            "show tables;",
            "--project",
            "proj1",
            "--catalog",
            "/tmp/catalog.json",
            "-k",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.execute.as_deref(), Some("show tables;"));
        assert_eq!(args.project.as_deref(), Some("proj1"));
        assert_eq!(args.catalog_path(), Some(PathBuf::from("/tmp/catalog.json")));
        assert!(args.continue_on_error);
        assert!(!args.is_interactive());
        assert_eq!(args.log_filter(), "debug");
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_interactive() {
        let args = Args::try_parse_from(["odpscmd", "--format", "json"]).unwrap();
        assert!(args.is_interactive());
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.log_filter(), "warn");
    }
}
