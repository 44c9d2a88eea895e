// ── Runtime service configuration ──
//
// Describes *how* to reach the campaign service. The CLI/TUI constructs a
// `ServiceConfig` from its layered settings and hands it in -- core never
// reads config files.

use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for reaching a single campaign service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service root URL (e.g., `https://ads.example.com`).
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://localhost:3000").expect("default base URL is valid"),
            timeout_secs: 10,
        }
    }
}
