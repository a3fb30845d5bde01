//! Centralized constants for the Typesense toolkit workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default Typesense server API port.
pub const DEFAULT_TYPESENSE_PORT: u16 = 8108;

/// Default protocol for server connections.
pub const DEFAULT_PROTOCOL: &str = "http";

// =============================================================================
// Cloud Management API
// =============================================================================

/// Base URL of the Typesense Cloud Management API.
pub const CLOUD_API_BASE_URL: &str = "https://cloud.typesense.org/api/v1";

/// Polling interval for cluster readiness checks in seconds.
pub const DEFAULT_CLUSTER_POLL_INTERVAL_SECS: u64 = 30;

// =============================================================================
// CLI Defaults
// =============================================================================

/// Default output directory for generated configuration.
pub const DEFAULT_OUTPUT_DIR: &str = "./generated";
