//! Statement dispatch: match, validate, execute.

use std::io::Write;

use crate::catalog::Catalog;
use crate::cli::{split_statements, OutputFormatter};
use crate::command::CommandMatcher;
use crate::error::{Error, Result};
use crate::executor::Executor;
use crate::session::SessionContext;

/// Outcome of running a multi-statement script.
#[derive(Debug, Default)]
pub struct ScriptReport {
    /// Statements that ran to completion
    pub succeeded: usize,
    /// Statements that failed, with their errors, in order
    pub failed: Vec<(String, Error)>,
}

impl ScriptReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// A console bound to one catalog and one session.
pub struct Console<C> {
    matcher: CommandMatcher,
    session: SessionContext,
    executor: Executor<C>,
}

impl<C: Catalog> Console<C> {
    pub fn new(catalog: C, session: SessionContext, formatter: OutputFormatter) -> Self {
        Self {
            matcher: CommandMatcher::new(),
            session,
            executor: Executor::new(catalog, formatter),
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn matcher(&self) -> &CommandMatcher {
        &self.matcher
    }

    /// Run a single statement.
    ///
    /// Parsing and validation finish before the catalog is contacted, so a
    /// rejected statement never produces partial output.
    pub fn run_statement<W: Write>(&self, text: &str, writer: &mut W) -> Result<()> {
        let command = self
            .matcher
            .parse(text, &self.session)?
            .ok_or_else(|| Error::UnrecognizedCommand(text.trim().to_string()))?;

        tracing::debug!(kind = %command.kind, project = ?command.project, "executing");
        self.executor.execute(&command, writer)
    }

    /// Run every `;`-separated statement in `script`.
    ///
    /// Stops at the first failure unless `continue_on_error` is set.
    pub fn run_script<W: Write>(
        &self,
        script: &str,
        writer: &mut W,
        continue_on_error: bool,
    ) -> ScriptReport {
        let mut report = ScriptReport::default();

        for statement in split_statements(script) {
            match self.run_statement(&statement, writer) {
                Ok(()) => report.succeeded += 1,
                Err(e) => {
                    if e.is_rejection() {
                        tracing::warn!(statement = %statement, error = %e, "statement rejected");
                    } else {
                        tracing::error!(statement = %statement, error = %e, "statement failed");
                    }
                    report.failed.push((statement, e));
                    if !continue_on_error {
                        break;
                    }
                }
            }
        }

        report
    }
}
