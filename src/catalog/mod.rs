//! Catalog service interface.
//!
//! The console never talks to the remote service directly. Everything it
//! needs goes through [`Catalog`], which a REST client or the bundled
//! [`MemoryCatalog`] implements. Implementations own their own timeouts and
//! retries; errors they return are passed to the user unchanged.

mod memory;
mod model;

pub use memory::MemoryCatalog;
pub use model::{ModelQos, ModelResource, ModelStatus, OnlineModel};

use crate::error::CatalogError;

/// Read-only access to project contents.
pub trait Catalog {
    /// Names of the tables in `project`, optionally limited to names starting
    /// with `prefix`. Order is whatever the service returns.
    fn list_tables(&self, project: &str, prefix: Option<&str>)
        -> Result<Vec<String>, CatalogError>;

    /// Whether `project` has an online model called `name`.
    fn online_model_exists(&self, project: &str, name: &str) -> Result<bool, CatalogError>;

    /// Metadata of an online model; fails with
    /// [`CatalogError::ModelNotFound`] if it does not exist.
    fn get_online_model(&self, project: &str, name: &str) -> Result<OnlineModel, CatalogError>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn list_tables(
        &self,
        project: &str,
        prefix: Option<&str>,
    ) -> Result<Vec<String>, CatalogError> {
        (**self).list_tables(project, prefix)
    }

    fn online_model_exists(&self, project: &str, name: &str) -> Result<bool, CatalogError> {
        (**self).online_model_exists(project, name)
    }

    fn get_online_model(&self, project: &str, name: &str) -> Result<OnlineModel, CatalogError> {
        (**self).get_online_model(project, name)
    }
}
