//! In-memory catalog, loadable from a JSON document.
//!
//! Document shape:
//!
//! ```json
//! {
//!   "projects": {
//!     "proj1": {
//!       "tables": ["sales", "sales_2023", "users"],
//!       "online_models": [{"project": "proj1", "name": "modelA", "status": "SERVING"}]
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Catalog, OnlineModel};
use crate::error::CatalogError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ProjectEntry {
    #[serde(default)]
    tables: Vec<String>,
    #[serde(default)]
    online_models: Vec<OnlineModel>,
}

/// Catalog held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryCatalog {
    #[serde(default)]
    projects: BTreeMap<String, ProjectEntry>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::Load {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            projects = catalog.projects.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Add an empty project if it does not exist yet.
    pub fn add_project(&mut self, project: impl Into<String>) -> &mut Self {
        self.projects.entry(project.into()).or_default();
        self
    }

    /// Append a table to `project`, creating the project if needed.
    pub fn add_table(&mut self, project: impl Into<String>, table: impl Into<String>) -> &mut Self {
        self.projects
            .entry(project.into())
            .or_default()
            .tables
            .push(table.into());
        self
    }

    /// Store `model` under its own project, replacing a model of the same name.
    pub fn add_online_model(&mut self, model: OnlineModel) -> &mut Self {
        let entry = self.projects.entry(model.project.clone()).or_default();
        entry.online_models.retain(|m| m.name != model.name);
        entry.online_models.push(model);
        self
    }

    /// Names of all known projects.
    pub fn projects(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    fn project(&self, project: &str) -> Result<&ProjectEntry, CatalogError> {
        self.projects
            .get(project)
            .ok_or_else(|| CatalogError::ProjectNotFound {
                project: project.to_string(),
            })
    }

    fn find_model(&self, project: &str, name: &str) -> Option<&OnlineModel> {
        self.projects
            .get(project)?
            .online_models
            .iter()
            .find(|m| m.name == name)
    }
}

impl Catalog for MemoryCatalog {
    fn list_tables(
        &self,
        project: &str,
        prefix: Option<&str>,
    ) -> Result<Vec<String>, CatalogError> {
        let entry = self.project(project)?;
        Ok(entry
            .tables
            .iter()
            .filter(|name| prefix.map_or(true, |p| name.starts_with(p)))
            .cloned()
            .collect())
    }

    fn online_model_exists(&self, project: &str, name: &str) -> Result<bool, CatalogError> {
        Ok(self.find_model(project, name).is_some())
    }

    fn get_online_model(&self, project: &str, name: &str) -> Result<OnlineModel, CatalogError> {
        self.find_model(project, name)
            .cloned()
            .ok_or_else(|| CatalogError::ModelNotFound {
                project: project.to_string(),
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample() -> MemoryCatalog {
        let mut catalog = MemoryCatalog::new();
        catalog
            .add_table("proj1", "sales")
            .add_table("proj1", "users")
            .add_table("proj1", "sales_2023")
            .add_project("empty")
            .add_online_model(OnlineModel::new("proj1", "modelA"));
        catalog
    }

    #[test]
    fn test_list_tables_keeps_order() {
        let tables = sample().list_tables("proj1", None).unwrap();
        assert_eq!(tables, vec!["sales", "users", "sales_2023"]);
    }

    #[test]
    fn test_list_tables_prefix() {
        let catalog = sample();
        assert_eq!(
            catalog.list_tables("proj1", Some("sales")).unwrap(),
            vec!["sales", "sales_2023"]
        );
        assert_eq!(catalog.list_tables("proj1", Some("")).unwrap().len(), 3);
        assert!(catalog.list_tables("proj1", Some("zzz")).unwrap().is_empty());
        assert!(catalog.list_tables("empty", None).unwrap().is_empty());
    }

    #[test]
    fn test_list_tables_unknown_project() {
        let err = sample().list_tables("nope", None).unwrap_err();
        assert!(matches!(err, CatalogError::ProjectNotFound { .. }));
    }

    #[test]
    fn test_online_models() {
        let catalog = sample();
        assert!(catalog.online_model_exists("proj1", "modelA").unwrap());
        assert!(!catalog.online_model_exists("proj1", "modelB").unwrap());
        assert!(!catalog.online_model_exists("nope", "modelA").unwrap());

        assert_eq!(catalog.get_online_model("proj1", "modelA").unwrap().name, "modelA");
        assert!(matches!(
            catalog.get_online_model("proj1", "modelB"),
            Err(CatalogError::ModelNotFound { .. })
        ));
    }

    #[test]
    fn test_add_online_model_replaces() {
        let mut catalog = sample();
        let mut model = OnlineModel::new("proj1", "modelA");
        model.version = Some(2);
        catalog.add_online_model(model);

        let stored = catalog.get_online_model("proj1", "modelA").unwrap();
        assert_eq!(stored.version, Some(2));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"projects": {{"proj1": {{"tables": ["a", "b"]}}, "proj2": {{}}}}}}"#
        )
        .unwrap();

        let catalog = MemoryCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.projects().collect::<Vec<_>>(), vec!["proj1", "proj2"]);
        assert_eq!(catalog.list_tables("proj1", None).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_load_errors() {
        let err = MemoryCatalog::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Load { .. }));

        let err = MemoryCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
