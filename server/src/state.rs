use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use raidgold_shared::catalog::{catalog_etag, default_catalog, parse_catalog, validate};
use raidgold_shared::{RaidRecord, group_by_label};

/// Shared, read-only server state. The catalog is serialized once at startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Vec<RaidRecord>>,
    pub catalog_json: Arc<Bytes>,
    pub catalog_etag: Arc<str>,
    pub group_count: usize,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(catalog: Vec<RaidRecord>) -> Result<Self, String> {
        validate(&catalog).map_err(|e| e.to_string())?;
        let json = serde_json::to_vec(&catalog).map_err(|e| format!("serialize catalog: {e}"))?;
        let etag = catalog_etag(&json);
        let group_count = group_by_label(&catalog).len();
        Ok(Self {
            catalog: Arc::new(catalog),
            catalog_json: Arc::new(Bytes::from(json)),
            catalog_etag: Arc::from(etag),
            group_count,
            started_at: Utc::now(),
        })
    }
}

/// Read the catalog from `path`, or fall back to the built-in list.
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<RaidRecord>, String> {
    let Some(path) = path else {
        return Ok(default_catalog());
    };
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("read {}: {e}", path.display()))?;
    parse_catalog(&raw).map_err(|e| format!("{}: {e}", path.display()))
}
