//! Typed models for the Typesense Cloud Management API.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a managed cluster.
///
/// `InService` is the only success terminal; `Failed` and `Terminated` are
/// error terminals; everything else means "keep polling".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterStatus {
    Pending,
    Provisioning,
    InService,
    Failed,
    Terminated,
    #[serde(other)]
    Unknown,
}

impl ClusterStatus {
    /// True for statuses that end the readiness poll with an error.
    pub fn is_error_terminal(self) -> bool {
        matches!(self, Self::Failed | Self::Terminated)
    }

    /// The wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Provisioning => "provisioning",
            Self::InService => "in_service",
            Self::Failed => "failed",
            Self::Terminated => "terminated",
            Self::Unknown => "unknown",
        }
    }
}

/// Hostnames assigned to a provisioned cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterHostnames {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balanced: Option<String>,
    #[serde(default)]
    pub nodes: Vec<String>,
}

/// Provisioning request for `POST /clusters`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub memory: String,
    pub vcpu: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typesense_server_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_upgrade_capacity: Option<bool>,
}

/// A managed cluster as returned by the cloud API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cluster {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub memory: String,
    pub vcpu: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typesense_server_version: Option<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    pub status: ClusterStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostnames: Option<ClusterHostnames>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_upgrade_capacity: Option<bool>,
}

/// Envelope for `GET /clusters`.
#[derive(Debug, Deserialize, Clone)]
pub struct ClusterListResponse {
    pub clusters: Vec<Cluster>,
}

/// Admin and search-only keys generated for a cluster. Returned once;
/// non-recoverable afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterApiKeys {
    pub admin_key: String,
    pub search_only_key: String,
}

/// Request body for a scheduled configuration change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigChangeSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_memory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_vcpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_high_availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_typesense_server_version: Option<String>,
    /// Epoch seconds; when absent the change is applied as soon as possible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perform_at: Option<i64>,
}

/// A scheduled configuration change as returned by the cloud API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigChange {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_memory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_vcpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_high_availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_typesense_server_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perform_at: Option<i64>,
}
