//! Output formatting for command results.
//!
//! Results are written as plain lines (the console's native form) or as JSON
//! Lines for scripting. Either way nothing is reordered: names appear in the
//! order the catalog returned them.

use std::io::Write;

use clap::ValueEnum;

use crate::catalog::OnlineModel;
use crate::format::format_online_model;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text lines and boxed records (default)
    #[default]
    Text,
    /// JSON Lines (one JSON object per row)
    Json,
}

/// Formats command results for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Create a new formatter with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write table names, one per line.
    pub fn write_names<W: Write>(&self, names: &[String], writer: &mut W) -> std::io::Result<()> {
        for name in names {
            match self.format {
                OutputFormat::Text => writeln!(writer, "{name}")?,
                OutputFormat::Json => {
                    writeln!(writer, "{}", serde_json::json!({ "name": name }))?
                }
            }
        }
        Ok(())
    }

    /// Write one online model record.
    pub fn write_online_model<W: Write>(
        &self,
        model: &OnlineModel,
        writer: &mut W,
    ) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                for line in format_online_model(model) {
                    writeln!(writer, "{line}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *writer, model)?;
                writeln!(writer)?;
            }
        }
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::RECORD_BORDER;

    fn names() -> Vec<String> {
        vec!["users".to_string(), "sales".to_string()]
    }

    #[test]
    fn test_text_names() {
        let mut output = Vec::new();
        OutputFormatter::new(OutputFormat::Text)
            .write_names(&names(), &mut output)
            .unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "users\nsales\n");
    }

    #[test]
    fn test_json_names() {
        let mut output = Vec::new();
        OutputFormatter::new(OutputFormat::Json)
            .write_names(&names(), &mut output)
            .unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "{\"name\":\"users\"}\n{\"name\":\"sales\"}\n"
        );
    }

    #[test]
    fn test_text_model() {
        let mut output = Vec::new();
        OutputFormatter::default()
            .write_online_model(&OnlineModel::new("proj1", "modelA"), &mut output)
            .unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.starts_with(&format!("\n{RECORD_BORDER}\n| Project: proj1\n")));
        assert!(output_str.ends_with(&format!("{RECORD_BORDER}\n\n")));
    }

    #[test]
    fn test_json_model() {
        let mut output = Vec::new();
        OutputFormatter::new(OutputFormat::Json)
            .write_online_model(&OnlineModel::new("proj1", "modelA"), &mut output)
            .unwrap();

        let output_str = String::from_utf8(output).unwrap();
        let value: serde_json::Value = serde_json::from_str(output_str.trim()).unwrap();
        assert_eq!(value["project"], "proj1");
        assert_eq!(value["name"], "modelA");
        assert!(value["status"].is_null());
    }
}
