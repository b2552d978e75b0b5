//! Regex grammars for the supported command families.
//!
//! Each grammar only answers "does this text have my shape, and what are the
//! raw fields". Option parsing and project reconciliation happen afterwards in
//! [`validate`](super::validate), so a match here is never a guarantee that
//! the command is valid.
//!
//! All grammars are case-insensitive and treat any run of whitespace
//! (spaces, tabs, `\r`, `\n`) between tokens alike.

use regex::Regex;

use super::CommandKind;

/// Raw fields captured by a successful grammar match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarMatch {
    /// `SHOW TABLES [IN <project>] [LIKE '<pattern>']`
    ShowTables {
        project: Option<String>,
        /// Pattern with its trailing wildcard removed
        prefix: Option<String>,
    },
    /// `LS|LIST TABLES <options>`
    ListTables { args: String },
    /// `DESCRIBE|DESC ONLINEMODEL <args>`
    DescribeOnlineModel { args: String },
}

impl GrammarMatch {
    /// Command kind this match produces.
    pub fn kind(&self) -> CommandKind {
        match self {
            GrammarMatch::ShowTables { .. } | GrammarMatch::ListTables { .. } => {
                CommandKind::ListTables
            }
            GrammarMatch::DescribeOnlineModel { .. } => CommandKind::DescribeOnlineModel,
        }
    }
}

/// A single command grammar.
pub trait Grammar: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Match `text` against this grammar.
    fn try_match(&self, text: &str) -> Option<GrammarMatch>;

    /// Usage lines shown by `help`.
    fn usage(&self) -> &'static [&'static str];

    /// Keywords that select this grammar's usage in `help <keyword>`.
    fn help_tags(&self) -> &'static [&'static str];
}

/// Strip the single trailing wildcard from a LIKE pattern.
///
/// The pattern may only contain word characters, `%` and `*`, and must end
/// with `%` or `*`. Interior wildcards are kept as literal prefix text.
pub fn strip_wildcard(pattern: &str) -> Option<&str> {
    let prefix = pattern
        .strip_suffix('%')
        .or_else(|| pattern.strip_suffix('*'))?;
    let allowed = prefix
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '%' || c == '*');
    allowed.then_some(prefix)
}

/// Internal SQL-like grammar: `SHOW TABLES [IN <project>] [LIKE '<pattern>']`.
#[derive(Debug)]
pub struct ShowTablesGrammar {
    pattern: Regex,
}

impl Default for ShowTablesGrammar {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowTablesGrammar {
    /// Create the grammar.
    ///
    /// # Panics
    /// Panics if the built-in pattern fails to compile.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            // Groups: 1=project, 2=like pattern
            pattern: Regex::new(
                r"(?is)^\s*SHOW\s+TABLES(?:\s+IN\s+(\w+))?(?:\s+LIKE\s+'([\w%*]*[%*])')?\s*$",
            )
            .expect("valid regex"),
        }
    }
}

impl Grammar for ShowTablesGrammar {
    fn name(&self) -> &'static str {
        "show tables"
    }

    fn try_match(&self, text: &str) -> Option<GrammarMatch> {
        let caps = self.pattern.captures(text)?;
        let project = caps.get(1).map(|m| m.as_str().to_string());
        let prefix = match caps.get(2) {
            Some(m) => Some(strip_wildcard(m.as_str())?.to_string()),
            None => None,
        };
        Some(GrammarMatch::ShowTables { project, prefix })
    }

    fn usage(&self) -> &'static [&'static str] {
        &["Usage: show tables [in <project_name>] [like '<prefix>%']"]
    }

    fn help_tags(&self) -> &'static [&'static str] {
        &["show", "table", "tables"]
    }
}

/// Public alias grammar: `LS TABLES` / `LIST TABLES` followed by options.
#[derive(Debug)]
pub struct ListTablesGrammar {
    pattern: Regex,
}

impl Default for ListTablesGrammar {
    fn default() -> Self {
        Self::new()
    }
}

impl ListTablesGrammar {
    /// Create the grammar.
    ///
    /// # Panics
    /// Panics if the built-in pattern fails to compile.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            // Group 1: everything after the keywords
            pattern: Regex::new(r"(?is)^\s*(?:LS|LIST)\s+TABLES(?:\s+(.*))?$")
                .expect("valid regex"),
        }
    }
}

impl Grammar for ListTablesGrammar {
    fn name(&self) -> &'static str {
        "list tables"
    }

    fn try_match(&self, text: &str) -> Option<GrammarMatch> {
        let caps = self.pattern.captures(text)?;
        let args = caps.get(1).map_or("", |m| m.as_str()).to_string();
        Some(GrammarMatch::ListTables { args })
    }

    fn usage(&self) -> &'static [&'static str] {
        &["Usage: ls|list tables [-p,-project <project_name>]"]
    }

    fn help_tags(&self) -> &'static [&'static str] {
        &["ls", "list", "table", "tables"]
    }
}

/// `DESCRIBE|DESC ONLINEMODEL <args>`.
#[derive(Debug)]
pub struct DescribeOnlineModelGrammar {
    pattern: Regex,
}

impl Default for DescribeOnlineModelGrammar {
    fn default() -> Self {
        Self::new()
    }
}

impl DescribeOnlineModelGrammar {
    /// Create the grammar.
    ///
    /// # Panics
    /// Panics if the built-in pattern fails to compile.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"(?is)^\s*(?:DESCRIBE|DESC)\s+ONLINEMODEL\s+(.+)$")
                .expect("valid regex"),
        }
    }
}

impl Grammar for DescribeOnlineModelGrammar {
    fn name(&self) -> &'static str {
        "describe onlinemodel"
    }

    fn try_match(&self, text: &str) -> Option<GrammarMatch> {
        let caps = self.pattern.captures(text)?;
        let args = caps.get(1)?.as_str().to_string();
        Some(GrammarMatch::DescribeOnlineModel { args })
    }

    fn usage(&self) -> &'static [&'static str] {
        &[
            "Usage: describe|desc onlinemodel [-p,-project <project_name>] <onlinemodel_name>",
            "       describe|desc onlinemodel [<project_name>.]<onlinemodel_name>",
        ]
    }

    fn help_tags(&self) -> &'static [&'static str] {
        &["describe", "desc", "online", "model", "onlinemodel"]
    }
}
