//! Server version detection for [`TypesenseClient`].
//!
//! The major version is computed at most once per client instance by calling
//! the server's debug endpoint and parsing the leading integer of the
//! version string. Failures (unreachable endpoint, unparseable string) fall
//! back to the newest known major version.

use tracing::debug;

use crate::client::TypesenseClient;
use crate::endpoints;
use crate::version::{ApiGeneration, LATEST_KNOWN_MAJOR_VERSION, parse_major_version};

impl TypesenseClient {
    /// The server's major version, memoized after the first call.
    pub async fn server_major_version(&self) -> u32 {
        *self
            .major_version
            .get_or_init(|| async {
                match endpoints::get_debug_info(&self.http, &self.base_url, &self.api_key).await {
                    Ok(info) => match parse_major_version(&info.version) {
                        Some(major) => {
                            debug!(version = %info.version, major, "detected server version");
                            major
                        }
                        None => {
                            debug!(
                                version = %info.version,
                                fallback = LATEST_KNOWN_MAJOR_VERSION,
                                "could not parse server version, assuming newest known major"
                            );
                            LATEST_KNOWN_MAJOR_VERSION
                        }
                    },
                    Err(e) => {
                        debug!(
                            error = %e,
                            fallback = LATEST_KNOWN_MAJOR_VERSION,
                            "debug endpoint unavailable, assuming newest known major"
                        );
                        LATEST_KNOWN_MAJOR_VERSION
                    }
                }
            })
            .await
    }

    /// The API generation the server speaks, derived from the detected major
    /// version. Selected once, applied uniformly by version-sensitive calls.
    pub async fn api_generation(&self) -> ApiGeneration {
        ApiGeneration::from_major(self.server_major_version().await)
    }
}
