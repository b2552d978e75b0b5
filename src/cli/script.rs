//! Splitting scripts into statements.

/// Split `script` on `;` outside quotes, dropping blank statements.
pub fn split_statements(script: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in script.chars() {
        if escaped {
            escaped = false;
        } else if c == '\\' && quote.is_some() {
            escaped = true;
        } else if let Some(q) = quote {
            if c == q {
                quote = None;
            }
        } else if c == '\'' || c == '"' {
            quote = Some(c);
        } else if c == ';' {
            push_statement(&mut statements, &current);
            current.clear();
            continue;
        }
        current.push(c);
    }
    push_statement(&mut statements, &current);

    statements
}

fn push_statement(statements: &mut Vec<String>, text: &str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        statements.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        assert_eq!(
            split_statements("show tables; ls tables -p proj1;"),
            vec!["show tables", "ls tables -p proj1"]
        );
    }

    #[test]
    fn test_split_skips_blank() {
        assert!(split_statements(" ;; \n ; ").is_empty());
        assert_eq!(split_statements("show tables"), vec!["show tables"]);
    }

    #[test]
    fn test_split_respects_quotes() {
        assert_eq!(
            split_statements("desc onlinemodel 'a;b';show tables"),
            vec!["desc onlinemodel 'a;b'", "show tables"]
        );
        assert_eq!(
            split_statements(r#"desc onlinemodel "x\";y";"#),
            vec![r#"desc onlinemodel "x\";y""#]
        );
    }

    #[test]
    fn test_split_multiline() {
        assert_eq!(
            split_statements("show\n  tables\n  in proj1;\n"),
            vec!["show\n  tables\n  in proj1"]
        );
    }
}
