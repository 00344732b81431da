use std::sync::Arc;

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use chrono::Utc;

use crate::config::CATALOG_CACHE_CONTROL;
use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let uptime_secs = (Utc::now() - state.started_at).num_seconds().max(0);
    Json(serde_json::json!({
        "status": "ok",
        "raids": state.catalog.len(),
        "groups": state.group_count,
        "uptime_secs": uptime_secs,
    }))
}

/// Serve the pre-serialized raid catalog.
pub async fn get_raids(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let etag = Arc::clone(&state.catalog_etag);
    if if_none_match_matches(&headers, &etag) {
        return not_modified_response(CATALOG_CACHE_CONTROL, &etag);
    }
    let body = Bytes::clone(&state.catalog_json);
    json_bytes_response(body, CATALOG_CACHE_CONTROL, &etag)
}

fn json_bytes_response(body: Bytes, cache_control: &'static str, etag: &str) -> Response {
    let mut response = Response::new(Body::from(body));
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control),
    );
    if let Ok(etag_header) = HeaderValue::from_str(etag) {
        headers.insert(header::ETAG, etag_header);
    }
    response
}

fn not_modified_response(cache_control: &'static str, etag: &str) -> Response {
    let mut response = StatusCode::NOT_MODIFIED.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control),
    );
    if let Ok(etag_header) = HeaderValue::from_str(etag) {
        headers.insert(header::ETAG, etag_header);
    }
    response
}

fn normalize_etag(candidate: &str) -> &str {
    candidate.strip_prefix("W/").unwrap_or(candidate).trim()
}

fn if_none_match_matches(headers: &HeaderMap, etag: &str) -> bool {
    let Some(value) = headers.get(header::IF_NONE_MATCH) else {
        return false;
    };
    let Ok(raw) = value.to_str() else {
        return false;
    };

    raw.split(',').any(|candidate| {
        let candidate = candidate.trim();
        candidate == "*" || normalize_etag(candidate) == normalize_etag(etag)
    })
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{HeaderMap, HeaderValue, Request, StatusCode, header};
    use raidgold_shared::{RaidRecord, default_catalog};
    use tower::ServiceExt;

    use super::if_none_match_matches;
    use crate::state::AppState;

    fn test_state() -> AppState {
        AppState::new(default_catalog()).expect("default catalog is valid")
    }

    fn test_app(state: AppState) -> axum::Router {
        let static_dir = std::env::temp_dir().join("raidgold-missing-dist");
        crate::app::build_app(state, &static_dir)
    }

    #[test]
    fn if_none_match_accepts_weak_and_listed_etags() {
        let mut headers = HeaderMap::new();
        assert!(!if_none_match_matches(&headers, "\"raids-1\""));

        headers.insert(
            header::IF_NONE_MATCH,
            HeaderValue::from_static("\"other\", W/\"raids-1\""),
        );
        assert!(if_none_match_matches(&headers, "\"raids-1\""));
        assert!(!if_none_match_matches(&headers, "\"raids-2\""));

        headers.insert(header::IF_NONE_MATCH, HeaderValue::from_static("*"));
        assert!(if_none_match_matches(&headers, "\"raids-2\""));
    }

    #[tokio::test]
    async fn raids_endpoint_serves_catalog_with_etag() {
        let state = test_state();
        let expected_etag = state.catalog_etag.to_string();
        let response = test_app(state)
            .oneshot(
                Request::builder()
                    .uri("/api/raids")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("raids response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ETAG)
                .and_then(|v| v.to_str().ok()),
            Some(expected_etag.as_str())
        );
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );

        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("raids body");
        let catalog: Vec<RaidRecord> = serde_json::from_slice(&body).expect("parse raids");
        assert_eq!(catalog, default_catalog());
    }

    #[tokio::test]
    async fn raids_endpoint_returns_not_modified_for_matching_etag() {
        let state = test_state();
        let etag = state.catalog_etag.to_string();
        let response = test_app(state)
            .oneshot(
                Request::builder()
                    .uri("/api/raids")
                    .header(header::IF_NONE_MATCH, etag.as_str())
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("raids response");

        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("empty body");
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn health_reports_catalog_counts() {
        let response = test_app(test_state())
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("health response");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("health body");
        let health: serde_json::Value = serde_json::from_slice(&body).expect("parse health");
        assert_eq!(health.get("status").and_then(|v| v.as_str()), Some("ok"));
        assert_eq!(
            health.get("raids").and_then(|v| v.as_u64()),
            Some(default_catalog().len() as u64)
        );
        assert_eq!(health.get("groups").and_then(|v| v.as_u64()), Some(6));
        assert!(health.get("uptime_secs").and_then(|v| v.as_i64()).is_some());
    }
}
