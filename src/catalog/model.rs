//! Online model metadata records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Compute resources requested by or allotted to a model service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelResource {
    /// CPU quota in hundredths of a core
    pub cpu: u64,
    /// Memory in bytes
    pub memory: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<u64>,
}

/// Requested quality of service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelQos {
    /// Queries per second
    pub qps: u64,
    /// Target response time in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rt: Option<u64>,
}

/// Deployment state of an online model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelStatus {
    Deploying,
    DeployFailed,
    Serving,
    Updating,
    UpdateFailed,
    Deleting,
    DeleteFailed,
}

impl ModelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelStatus::Deploying => "DEPLOYING",
            ModelStatus::DeployFailed => "DEPLOY_FAILED",
            ModelStatus::Serving => "SERVING",
            ModelStatus::Updating => "UPDATING",
            ModelStatus::UpdateFailed => "UPDATE_FAILED",
            ModelStatus::Deleting => "DELETING",
            ModelStatus::DeleteFailed => "DELETE_FAILED",
        }
    }
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata of a deployed online model, as returned by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnlineModel {
    pub project: String,
    pub name: String,
    pub version: Option<u64>,
    pub owner: Option<String>,
    pub created_time: Option<DateTime<Utc>>,
    pub last_modified_time: Option<DateTime<Utc>>,
    pub offline_model_project: Option<String>,
    pub offline_model_name: Option<String>,
    pub offline_model_id: Option<String>,
    pub apply_resource: Option<ModelResource>,
    pub used_resource: Option<ModelResource>,
    pub apply_qos: Option<ModelQos>,
    pub instance_num: Option<u32>,
    pub status: Option<ModelStatus>,
    pub service_tag: Option<String>,
    pub service_name: Option<String>,
    /// Message from the last failed deployment
    pub last_fail_msg: Option<String>,
    pub ab_test: Option<String>,
    pub predict_desc: Option<String>,
    pub runtime: Option<String>,
}

impl OnlineModel {
    /// Create a record with only its identity set.
    pub fn new(project: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            name: name.into(),
            version: None,
            owner: None,
            created_time: None,
            last_modified_time: None,
            offline_model_project: None,
            offline_model_name: None,
            offline_model_id: None,
            apply_resource: None,
            used_resource: None,
            apply_qos: None,
            instance_num: None,
            status: None,
            service_tag: None,
            service_name: None,
            last_fail_msg: None,
            ab_test: None,
            predict_desc: None,
            runtime: None,
        }
    }
}
