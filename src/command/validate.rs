//! Second parsing stage: turn raw grammar fields into a [`ParsedCommand`].
//!
//! Every rule that can reject a command lives here, so nothing reaches the
//! catalog until all of them have passed.

use super::grammar::GrammarMatch;
use super::options::CommandOptions;
use super::tokenize::tokenize;
use super::{CommandKind, ParsedCommand};
use crate::error::{Error, Result};
use crate::session::SessionContext;

/// Pick the project a command runs against.
///
/// An explicit flag wins over a dotted-name prefix, which wins over the
/// session default. A flag and a prefix that disagree are a conflict, never
/// a silent choice. `Ok(None)` means no source supplied a project.
pub fn resolve_project(
    flag: Option<&str>,
    dotted_prefix: Option<&str>,
    session_default: Option<&str>,
) -> Result<Option<String>> {
    match (flag, dotted_prefix) {
        (Some(flag), Some(prefix)) if flag != prefix => Err(Error::bad_command(format!(
            "project name conflict: {flag} vs {prefix}"
        ))),
        (Some(project), _) | (None, Some(project)) => Ok(Some(project.to_string())),
        (None, None) => Ok(session_default.map(str::to_string)),
    }
}

/// Split `[<project>.]<name>` into its parts.
pub fn split_qualified_name(name: &str) -> Result<(Option<&str>, &str)> {
    let invalid = || Error::bad_command(format!("invalid model name {name}"));

    if name.is_empty() || !name.chars().all(|c| c == '.' || is_word_char(c)) {
        return Err(invalid());
    }

    match name.split_once('.') {
        None => Ok((None, name)),
        Some((project, object)) if !project.is_empty() && !object.is_empty() => {
            if object.contains('.') {
                Err(invalid())
            } else {
                Ok((Some(project), object))
            }
        }
        Some(_) => Err(invalid()),
    }
}

/// Reject identifiers that are empty or contain non-word characters.
pub fn validate_identifier(what: &str, value: &str) -> Result<()> {
    if !value.is_empty() && value.chars().all(is_word_char) {
        Ok(())
    } else {
        Err(Error::bad_command(format!("invalid {what} {value}")))
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Validate a grammar match and build the command it describes.
pub fn validate(
    matched: GrammarMatch,
    session: &SessionContext,
    source: &str,
) -> Result<ParsedCommand> {
    let kind = matched.kind();
    let default_project = session.default_project_name();

    match matched {
        GrammarMatch::ShowTables { project, prefix } => Ok(ParsedCommand {
            kind,
            project: resolve_project(project.as_deref(), None, default_project)?,
            object: None,
            filter: prefix,
            source: source.to_string(),
        }),
        GrammarMatch::ListTables { args } => {
            let options = CommandOptions::parse(&tokenize(&args)?)?;
            if let Some(extra) = options.positionals.first() {
                return Err(Error::bad_command(format!("invalid parameter {extra}")));
            }
            if let Some(project) = &options.project {
                validate_identifier("project name", project)?;
            }

            Ok(ParsedCommand {
                kind,
                project: resolve_project(options.project.as_deref(), None, default_project)?,
                object: None,
                filter: None,
                source: source.to_string(),
            })
        }
        GrammarMatch::DescribeOnlineModel { args } => {
            let options = CommandOptions::parse(&tokenize(&args)?)?;
            let [identifier] = options.positionals.as_slice() else {
                return Err(Error::bad_command("model name is ambiguous"));
            };
            if let Some(project) = &options.project {
                validate_identifier("project name", project)?;
            }

            let (prefix, model) = split_qualified_name(identifier)?;
            let project = resolve_project(options.project.as_deref(), prefix, default_project)?;

            Ok(ParsedCommand {
                kind,
                project,
                object: Some(model.to_string()),
                filter: None,
                source: source.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_project_precedence() {
        assert_eq!(
            resolve_project(Some("a"), None, Some("d")).unwrap(),
            Some("a".to_string())
        );
        assert_eq!(
            resolve_project(None, Some("b"), Some("d")).unwrap(),
            Some("b".to_string())
        );
        assert_eq!(
            resolve_project(Some("a"), Some("a"), Some("d")).unwrap(),
            Some("a".to_string())
        );
        assert_eq!(
            resolve_project(None, None, Some("d")).unwrap(),
            Some("d".to_string())
        );
        assert_eq!(resolve_project(None, None, None).unwrap(), None);
    }

    #[test]
    fn test_resolve_project_conflict() {
        let err = resolve_project(Some("proj1"), Some("proj2"), Some("proj1")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bad command: project name conflict: proj1 vs proj2"
        );
    }

    #[test]
    fn test_split_qualified_name() {
        assert_eq!(split_qualified_name("modelA").unwrap(), (None, "modelA"));
        assert_eq!(
            split_qualified_name("proj1.modelA").unwrap(),
            (Some("proj1"), "modelA")
        );
        for bad in ["", ".modelA", "proj1.", "a.b.c", "model-a", "proj 1.m", "."] {
            assert!(
                matches!(split_qualified_name(bad), Err(Error::BadCommand { .. })),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("project name", "project_01").is_ok());
        assert!(validate_identifier("project name", "").is_err());
        assert!(validate_identifier("project name", "a.b").is_err());
    }

    #[test]
    fn test_validate_describe() {
        let session = SessionContext::with_project("default_proj");
        let matched = GrammarMatch::DescribeOnlineModel {
            args: "-p proj1 modelA".to_string(),
        };
        let cmd = validate(matched, &session, "desc onlinemodel -p proj1 modelA").unwrap();
        assert_eq!(cmd.kind, CommandKind::DescribeOnlineModel);
        assert_eq!(cmd.project.as_deref(), Some("proj1"));
        assert_eq!(cmd.object.as_deref(), Some("modelA"));
        assert_eq!(cmd.source, "desc onlinemodel -p proj1 modelA");
    }

    #[test]
    fn test_validate_describe_positional_count() {
        let session = SessionContext::default();
        for args in ["-p proj1", "a b", "-p proj1 a b"] {
            let matched = GrammarMatch::DescribeOnlineModel {
                args: args.to_string(),
            };
            let err = validate(matched, &session, args).unwrap_err();
            assert!(err.to_string().contains("ambiguous"), "{args:?}: {err}");
        }
    }

    #[test]
    fn test_validate_list_rejects_positionals() {
        let session = SessionContext::default();
        let matched = GrammarMatch::ListTables {
            args: "xxx".to_string(),
        };
        let err = validate(matched, &session, "ls tables xxx").unwrap_err();
        assert_eq!(err.to_string(), "Bad command: invalid parameter xxx");
    }

    #[test]
    fn test_validate_list_rejects_bad_project() {
        let session = SessionContext::default();
        let matched = GrammarMatch::ListTables {
            args: "-p 'my proj'".to_string(),
        };
        assert!(validate(matched, &session, "ls tables -p 'my proj'").is_err());
    }

    #[test]
    fn test_validate_show_tables_uses_session_default() {
        let session = SessionContext::with_project("default_proj");
        let matched = GrammarMatch::ShowTables {
            project: None,
            prefix: Some("save".to_string()),
        };
        let cmd = validate(matched, &session, "show tables like 'save%'").unwrap();
        assert_eq!(cmd.project.as_deref(), Some("default_proj"));
        assert_eq!(cmd.filter.as_deref(), Some("save"));
        assert_eq!(cmd.object, None);
    }
}
