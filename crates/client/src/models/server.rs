//! Server debug/health models.

use serde::{Deserialize, Serialize};

/// Response of `GET /debug`. The `version` string is the source of the
/// major-version detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugInfo {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<i64>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
}
