use anyhow::Result;
use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use carrier_dashboard::adapters::{CarrierClient, FileSessionStore};
use carrier_dashboard::config::CarrierConfig;
use carrier_dashboard::core::profile::{DisplayTimezone, ProfileAggregator};
use carrier_dashboard::core::{BalanceClient, BalanceSnapshot, Session, SessionStore};
use carrier_dashboard::web::{router, AppState};
use carrier_dashboard::DashboardService;
use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

const SESSIONS: &str = r#"{
    "active_number": "6281111111111",
    "accounts": [
        {
            "number": "6281111111111",
            "subscription_type": "PREPAID",
            "tokens": { "id_token": "id-1", "access_token": "a", "refresh_token": "r" }
        }
    ]
}"#;

fn carrier_config(server: &MockServer) -> CarrierConfig {
    CarrierConfig {
        base_url: server.base_url(),
        api_key: "page-key".to_string(),
        balance_path: "/balance".to_string(),
        tiering_path: "/tiering".to_string(),
        timeout_seconds: 5,
        ..CarrierConfig::default()
    }
}

fn app_with(sessions: FileSessionStore, carrier: CarrierClient) -> axum::Router {
    let carrier = Arc::new(carrier);
    let aggregator = ProfileAggregator::new(Arc::new(sessions), carrier.clone(), carrier)
        .with_timezone(DisplayTimezone::utc());
    router(AppState::new(DashboardService::new(aggregator)))
}

async fn get_index(app: axum::Router) -> Result<(StatusCode, String)> {
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty())?)
        .await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, String::from_utf8(bytes.to_vec())?))
}

#[tokio::test]
async fn test_index_renders_prepaid_profile_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("sessions.json");
    tokio::fs::write(&path, SESSIONS).await?;

    let server = MockServer::start();
    let balance_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/balance")
            .header("x-api-key", "page-key")
            .header("authorization", "Bearer id-1");
        then.status(200).json_body(json!({
            "status": "SUCCESS",
            "data": { "balance": { "remaining": 25000, "expired_at": 1735689600 } }
        }));
    });
    let tiering_mock = server.mock(|when, then| {
        when.method(POST).path("/tiering");
        then.status(200).json_body(json!({
            "status": "SUCCESS",
            "data": { "tier": 1, "current_point": 80 }
        }));
    });

    let app = app_with(
        FileSessionStore::new(&path, "page-key"),
        CarrierClient::from_config(&carrier_config(&server))?,
    );
    let (status, html) = get_index(app).await?;

    balance_mock.assert();
    tiering_mock.assert();
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("6281111111111"));
    assert!(html.contains("Rp 25000"));
    assert!(html.contains("2025-01-01"));
    assert!(html.contains("Points: 80 | Tier: 1"));
    assert!(html.contains("data-action=\"exit\""));
    Ok(())
}

#[tokio::test]
async fn test_index_logged_out_skips_carrier() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let any_call = server.mock(|when, then| {
        when.any_request();
        then.status(500);
    });

    let app = app_with(
        FileSessionStore::new(temp_dir.path().join("absent.json"), "page-key"),
        CarrierClient::from_config(&carrier_config(&server))?,
    );
    let (status, html) = get_index(app).await?;

    any_call.assert_hits(0);
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Tidak ada akun aktif"));
    assert!(html.contains("data-action=\"account\""));
    Ok(())
}

#[tokio::test]
async fn test_index_balance_failure_renders_error_page() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("sessions.json");
    tokio::fs::write(&path, SESSIONS).await?;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/balance");
        then.status(503).body("down");
    });
    let tiering_mock = server.mock(|when, then| {
        when.method(POST).path("/tiering");
        then.status(200)
            .json_body(json!({ "status": "SUCCESS", "data": {} }));
    });

    let app = app_with(
        FileSessionStore::new(&path, "page-key"),
        CarrierClient::from_config(&carrier_config(&server))?,
    );
    let (status, html) = get_index(app).await?;

    tiering_mock.assert_hits(0);
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("Terjadi kesalahan"));
    assert!(!html.contains("6281111111111"));
    Ok(())
}

struct BrokenSessionStore;

#[async_trait]
impl SessionStore for BrokenSessionStore {
    async fn active_session(&self) -> carrier_dashboard::Result<Option<Session>> {
        Err(carrier_dashboard::DashboardError::SessionError {
            message: "store unavailable".to_string(),
        })
    }

    fn api_key(&self) -> &str {
        "unused"
    }
}

struct UnreachableBalance;

#[async_trait]
impl BalanceClient for UnreachableBalance {
    async fn get_balance(
        &self,
        _api_key: &str,
        _id_token: &str,
    ) -> carrier_dashboard::Result<BalanceSnapshot> {
        panic!("balance must not be fetched without a session");
    }
}

#[tokio::test]
async fn test_index_session_store_failure_is_internal_error() -> Result<()> {
    let server = MockServer::start();
    let tiering = Arc::new(CarrierClient::from_config(&carrier_config(&server))?);
    let aggregator =
        ProfileAggregator::new(Arc::new(BrokenSessionStore), Arc::new(UnreachableBalance), tiering);
    let app = router(AppState::new(DashboardService::new(aggregator)));

    let (status, html) = get_index(app).await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("Terjadi kesalahan"));
    Ok(())
}

#[tokio::test]
async fn test_unknown_route_is_not_found() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let app = app_with(
        FileSessionStore::new(temp_dir.path().join("absent.json"), "page-key"),
        CarrierClient::from_config(&carrier_config(&server))?,
    );

    let response = app
        .oneshot(Request::builder().uri("/api/profile").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}
