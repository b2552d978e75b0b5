//! Option-style parameters shared by the alias commands.
//!
//! Recognized forms for the project option: `-p <name>`, `-project <name>`,
//! `--project <name>` and the `=`-joined variants of each. Option names are
//! case-insensitive.

use crate::error::{Error, Result};

const PROJECT_OPTIONS: &[&str] = &["-p", "-project", "--project"];

/// Options and positional arguments pulled out of a token list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOptions {
    /// Value of the project option, if given
    pub project: Option<String>,
    /// Arguments that are not options, in order
    pub positionals: Vec<String>,
}

impl CommandOptions {
    /// Parse `tokens`, rejecting unknown options and options without values.
    pub fn parse(tokens: &[String]) -> Result<Self> {
        let mut options = CommandOptions::default();
        let mut iter = tokens.iter();

        while let Some(token) = iter.next() {
            if !is_option(token) {
                options.positionals.push(token.clone());
                continue;
            }

            let (name, inline) = match token.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (token.as_str(), None),
            };

            if !PROJECT_OPTIONS.iter().any(|o| o.eq_ignore_ascii_case(name)) {
                return Err(Error::bad_command(format!("invalid parameter {token}")));
            }

            let value = match inline {
                Some(value) => value,
                None => match iter.next() {
                    Some(next) if !is_option(next) => next.as_str(),
                    _ => "",
                },
            };
            if value.is_empty() {
                return Err(Error::bad_command(format!(
                    "missing argument for option {name}"
                )));
            }

            match &options.project {
                Some(existing) if existing != value => {
                    return Err(Error::bad_command(format!(
                        "project name conflict: {existing} vs {value}"
                    )));
                }
                _ => options.project = Some(value.to_string()),
            }
        }

        Ok(options)
    }
}

fn is_option(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}
