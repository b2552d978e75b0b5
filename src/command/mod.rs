//! Command grammar matching and parameter validation.
//!
//! Parsing runs in two explicit stages:
//!
//! 1. [`CommandMatcher::try_match`] tests the text against each [`Grammar`]
//!    and returns the raw captured fields of the first one that matches.
//! 2. [`validate::validate`] tokenizes options, checks identifiers and
//!    reconciles project names, producing a [`ParsedCommand`].
//!
//! # Supported Syntax
//!
//! ```text
//! SHOW TABLES [IN <project>] [LIKE '<prefix>%']
//! LS TABLES | LIST TABLES [-p|-project[=]<project>]
//! DESCRIBE|DESC ONLINEMODEL [-p|-project <project>] <model>|<project>.<model>
//! ```
//!
//! # Example
//!
//! ```rust
//! use odps_console::command::{CommandKind, CommandMatcher};
//! use odps_console::session::SessionContext;
//!
//! let matcher = CommandMatcher::new();
//! let session = SessionContext::with_project("default_proj");
//!
//! let cmd = matcher
//!     .parse("show tables in proj1 like 'sale%'", &session)?
//!     .expect("recognized command");
//! assert_eq!(cmd.kind, CommandKind::ListTables);
//! assert_eq!(cmd.project.as_deref(), Some("proj1"));
//! assert_eq!(cmd.filter.as_deref(), Some("sale"));
//! # Ok::<(), odps_console::Error>(())
//! ```

mod grammar;
mod options;
mod tokenize;
pub mod validate;

use std::fmt;

pub use grammar::{
    strip_wildcard, DescribeOnlineModelGrammar, Grammar, GrammarMatch, ListTablesGrammar,
    ShowTablesGrammar,
};
pub use options::CommandOptions;
pub use tokenize::tokenize;
pub use validate::resolve_project;

use crate::error::Result;
use crate::session::SessionContext;

/// Operation a parsed command performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// List table names in a project
    ListTables,
    /// Show metadata of one online model
    DescribeOnlineModel,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandKind::ListTables => write!(f, "list tables"),
            CommandKind::DescribeOnlineModel => write!(f, "describe onlinemodel"),
        }
    }
}

/// A command that matched a grammar and passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub kind: CommandKind,
    /// Resolved project; `None` when neither the command nor the session named one
    pub project: Option<String>,
    /// Target object for describe-style commands
    pub object: Option<String>,
    /// Name prefix for list-style commands, wildcard already removed
    pub filter: Option<String>,
    /// Original input text
    pub source: String,
}

/// Tries each known grammar in a fixed order.
///
/// The grammars start with disjoint keywords (`LS`/`LIST`, `SHOW`,
/// `DESC`/`DESCRIBE`), so at most one can match; the order only makes the
/// choice deterministic.
pub struct CommandMatcher {
    grammars: Vec<Box<dyn Grammar>>,
}

impl Default for CommandMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandMatcher {
    /// Create a matcher with every built-in grammar.
    pub fn new() -> Self {
        Self {
            grammars: vec![
                Box::new(ListTablesGrammar::new()),
                Box::new(ShowTablesGrammar::new()),
                Box::new(DescribeOnlineModelGrammar::new()),
            ],
        }
    }

    /// Registered grammars, in match order.
    pub fn grammars(&self) -> impl Iterator<Item = &dyn Grammar> {
        self.grammars.iter().map(|g| &**g)
    }

    /// First stage: raw fields from the first grammar that matches.
    pub fn try_match(&self, text: &str) -> Option<GrammarMatch> {
        self.grammars.iter().find_map(|grammar| {
            let matched = grammar.try_match(text)?;
            tracing::debug!(grammar = grammar.name(), "matched command");
            Some(matched)
        })
    }

    /// Parse `text` into a validated command.
    ///
    /// Returns `Ok(None)` when no grammar recognizes the text, so callers can
    /// fall through to other command families.
    pub fn parse(&self, text: &str, session: &SessionContext) -> Result<Option<ParsedCommand>> {
        match self.try_match(text) {
            Some(matched) => validate::validate(matched, session, text).map(Some),
            None => Ok(None),
        }
    }

    /// Usage lines for every grammar, or for those tagged with `keyword`.
    pub fn usage(&self, keyword: Option<&str>) -> Vec<&'static str> {
        self.grammars()
            .filter(|g| match keyword {
                Some(k) => g.help_tags().iter().any(|t| t.eq_ignore_ascii_case(k)),
                None => true,
            })
            .flat_map(|g| g.usage().iter().copied())
            .collect()
    }
}
