//! Per-invocation session state.

/// Read-only context a command is parsed and executed against.
///
/// The console builds one from its startup options and never mutates it while
/// a command runs. Hosts that run commands concurrently give each its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    default_project: Option<String>,
}

impl SessionContext {
    /// Create a session with an optional default project.
    pub fn new(default_project: Option<String>) -> Self {
        Self {
            default_project: default_project.filter(|p| !p.trim().is_empty()),
        }
    }

    /// Create a session bound to `project`.
    pub fn with_project(project: impl Into<String>) -> Self {
        Self::new(Some(project.into()))
    }

    /// Project assumed when a command names none.
    pub fn default_project_name(&self) -> Option<&str> {
        self.default_project.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_default_is_unset() {
        assert_eq!(SessionContext::new(Some("  ".into())).default_project_name(), None);
        assert_eq!(SessionContext::default().default_project_name(), None);
        assert_eq!(
            SessionContext::with_project("proj1").default_project_name(),
            Some("proj1")
        );
    }
}
