//! odps-console - A command console for project tables and online models.
//!
//! Free-form command text is matched against a small set of regex grammars,
//! validated, and executed against a [`catalog::Catalog`] service.
//!
//! # Example
//!
//! ```
//! use odps_console::catalog::MemoryCatalog;
//! use odps_console::cli::OutputFormatter;
//! use odps_console::session::SessionContext;
//! use odps_console::Console;
//!
//! let mut catalog = MemoryCatalog::new();
//! catalog.add_table("proj1", "sales").add_table("proj1", "users");
//!
//! let console = Console::new(
//!     catalog,
//!     SessionContext::with_project("proj1"),
//!     OutputFormatter::default(),
//! );
//!
//! let mut output = Vec::new();
//! console.run_statement("show tables like 'sa%'", &mut output)?;
//! assert_eq!(output, b"sales\n");
//! # Ok::<(), odps_console::Error>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod command;
pub mod console;
pub mod error;
pub mod executor;
pub mod format;
pub mod session;

pub use console::{Console, ScriptReport};
pub use error::{CatalogError, Error, Result};
