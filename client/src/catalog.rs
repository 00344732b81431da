use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use raidgold_shared::{RaidRecord, default_catalog, parse_catalog};

/// Where the catalog in memory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CatalogStatus {
    Loading,
    Live,
    Fallback,
}

/// Fetch and validate the raid catalog served by the API.
pub async fn fetch_catalog() -> Result<Vec<RaidRecord>, String> {
    let resp = gloo_net::http::Request::get("/api/raids")
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| format!("read error: {e}"))?;
    parse_catalog(&body).map_err(|e| format!("parse error: {e}"))
}

/// Load the catalog into `catalog`, falling back to the built-in list.
pub(crate) fn load_catalog(catalog: RwSignal<Vec<RaidRecord>>, status: RwSignal<CatalogStatus>) {
    spawn_local(async move {
        match fetch_catalog().await {
            Ok(raids) => {
                web_sys::console::info_1(&format!("raid catalog loaded: {} raids", raids.len()).into());
                catalog.set(raids);
                status.set(CatalogStatus::Live);
            }
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("Raid catalog fetch failed, using built-in list: {e}").into(),
                );
                catalog.set(default_catalog());
                status.set(CatalogStatus::Fallback);
            }
        }
    });
}
