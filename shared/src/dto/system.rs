use serde::{Deserialize, Serialize};

/// `GET /health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// `GET /images/stats` response.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImageStats {
    pub total: u64,
    pub orphaned: u64,
    pub disk_bytes: u64,
}

/// `POST /images/cleanup` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageCleanupResult {
    pub removed: u64,
    pub freed_bytes: u64,
}

/// `GET /volumes/stats` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeStats {
    pub used_bytes: u64,
    pub free_bytes: u64,
}

/// `POST /refresh-cache` response (long-running scrape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheRefreshResult {
    pub updated: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
}

/// `GET /debug/page-source` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSource {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<String>,
}

/// `POST /debug/test-selector` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorTestRequest {
    pub selector: String,
}

/// Result of a scraper selector dry run (`/debug/*`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorTestResult {
    pub selector: String,
    pub matches: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<String>,
}
