//! Runs validated commands against a catalog.

use std::io::Write;

use crate::catalog::Catalog;
use crate::cli::OutputFormatter;
use crate::command::{CommandKind, ParsedCommand};
use crate::error::{Error, Result};

/// Executes [`ParsedCommand`]s and writes their results.
///
/// Holds no state between commands; the only side effect is output.
pub struct Executor<C> {
    catalog: C,
    formatter: OutputFormatter,
}

impl<C: Catalog> Executor<C> {
    pub fn new(catalog: C, formatter: OutputFormatter) -> Self {
        Self { catalog, formatter }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Execute `command`, writing its output to `writer`.
    pub fn execute<W: Write>(&self, command: &ParsedCommand, writer: &mut W) -> Result<()> {
        let project = command.project.as_deref().ok_or(Error::ProjectNotSet)?;

        match command.kind {
            CommandKind::ListTables => self.list_tables(project, command.filter.as_deref(), writer),
            CommandKind::DescribeOnlineModel => {
                let name = command
                    .object
                    .as_deref()
                    .ok_or_else(|| Error::bad_command("model name is ambiguous"))?;
                self.describe_online_model(project, name, writer)
            }
        }
    }

    fn list_tables<W: Write>(
        &self,
        project: &str,
        prefix: Option<&str>,
        writer: &mut W,
    ) -> Result<()> {
        tracing::debug!(project, prefix, "listing tables");
        let names = self.catalog.list_tables(project, prefix)?;
        self.formatter.write_names(&names, writer)?;
        writer.flush()?;
        Ok(())
    }

    fn describe_online_model<W: Write>(
        &self,
        project: &str,
        name: &str,
        writer: &mut W,
    ) -> Result<()> {
        tracing::debug!(project, name, "describing online model");
        if !self.catalog.online_model_exists(project, name)? {
            return Err(Error::NotFound {
                kind: "Onlinemodel",
                name: name.to_string(),
            });
        }

        let model = self.catalog.get_online_model(project, name)?;
        self.formatter.write_online_model(&model, writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MemoryCatalog, OnlineModel};
    use crate::cli::OutputFormat;
    use crate::error::CatalogError;

    fn executor() -> Executor<MemoryCatalog> {
        let mut catalog = MemoryCatalog::new();
        catalog
            .add_table("proj1", "sales")
            .add_table("proj1", "users")
            .add_table("proj1", "sales_2023")
            .add_online_model(OnlineModel::new("proj1", "modelA"));
        Executor::new(catalog, OutputFormatter::new(OutputFormat::Text))
    }

    fn command(kind: CommandKind, project: Option<&str>) -> ParsedCommand {
        ParsedCommand {
            kind,
            project: project.map(str::to_string),
            object: None,
            filter: None,
            source: String::new(),
        }
    }

    fn run(cmd: &ParsedCommand) -> Result<String> {
        let mut output = Vec::new();
        executor().execute(cmd, &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_list_tables() {
        let cmd = command(CommandKind::ListTables, Some("proj1"));
        assert_eq!(run(&cmd).unwrap(), "sales\nusers\nsales_2023\n");
    }

    #[test]
    fn test_list_tables_with_prefix() {
        let mut cmd = command(CommandKind::ListTables, Some("proj1"));
        cmd.filter = Some("sales".to_string());
        assert_eq!(run(&cmd).unwrap(), "sales\nsales_2023\n");
    }

    #[test]
    fn test_missing_project() {
        let cmd = command(CommandKind::ListTables, None);
        assert!(matches!(run(&cmd), Err(Error::ProjectNotSet)));
    }

    #[test]
    fn test_catalog_error_propagates() {
        let cmd = command(CommandKind::ListTables, Some("other"));
        assert!(matches!(
            run(&cmd),
            Err(Error::Catalog(CatalogError::ProjectNotFound { .. }))
        ));
    }

    #[test]
    fn test_describe() {
        let mut cmd = command(CommandKind::DescribeOnlineModel, Some("proj1"));
        cmd.object = Some("modelA".to_string());
        let output = run(&cmd).unwrap();
        assert!(output.contains("| Name: modelA"));
    }

    #[test]
    fn test_describe_not_found() {
        let mut cmd = command(CommandKind::DescribeOnlineModel, Some("proj1"));
        cmd.object = Some("modelB".to_string());
        let err = run(&cmd).unwrap_err();
        assert_eq!(err.to_string(), "Onlinemodel not found: modelB");
    }
}
