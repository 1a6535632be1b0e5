//! Black-box tests: the real client against a stub backend bound to an
//! ephemeral port.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use serde_json::json;

use stockline_client::{ApiClient, ApiConfig, InventoryFilters, LoginForm, ProductFilters};
use stockline_core::{AlertId, ClientError, FileTokenStore, MemoryTokenStore, Session, WarehouseId};

struct StubServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl StubServer {
    async fn spawn() -> Self {
        stockline_core::telemetry::init();

        let app = axum::Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/products", get(products))
            .route("/api/inventory", get(inventory))
            .route("/api/warehouses", get(warehouses_broken))
            .route("/api/alerts/:id/read", put(alert_read));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/api", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn client(&self) -> ApiClient {
        let session = Arc::new(Session::new(MemoryTokenStore::new()));
        ApiClient::new(ApiConfig::new(&self.base_url), session)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn login(Json(body): Json<serde_json::Value>) -> impl IntoResponse {
    if body["username"] == "sam" && body["password"] == "pw123456" {
        Json(json!({
            "access_token": "fresh-token",
            "refresh_token": "refresh",
            "user": {
                "id": 1,
                "username": "sam",
                "email": "sam@acme.test",
                "first_name": "Sam",
                "last_name": "Reyes",
                "role": "admin"
            },
            "organization": {
                "id": 1,
                "name": "Acme",
                "slug": "acme",
                "email": "ops@acme.test"
            }
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "invalid credentials"})),
        )
            .into_response()
    }
}

async fn products(headers: HeaderMap) -> impl IntoResponse {
    let authorization = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if authorization != "Bearer abc" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "missing authorization"})),
        )
            .into_response();
    }

    Json(json!({
        "products": [
            {"id": 1, "sku": "W-1", "name": "Widget", "minimum_stock_level": 5}
        ],
        "total": 1,
        "page": 1,
        "pages": 1
    }))
    .into_response()
}

async fn inventory(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    // The client must omit empty filter values entirely.
    if params.contains_key("search") || params.get("warehouse_id").map(String::as_str) != Some("3")
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "unexpected query"})),
        )
            .into_response();
    }

    Json(json!({
        "inventory": [{
            "id": 10,
            "product_id": 1,
            "warehouse_id": 3,
            "quantity_on_hand": 4,
            "quantity_reserved": 0,
            "quantity_available": 4,
            "product": {"id": 1, "sku": "W-1", "name": "Widget", "minimum_stock_level": 5}
        }],
        "total": 1,
        "page": 1,
        "pages": 1,
        "summary": {"total_products": 1, "low_stock_count": 1}
    }))
    .into_response()
}

async fn warehouses_broken() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn alert_read(Path(id): Path<String>) -> impl IntoResponse {
    Json(json!({"message": format!("alert {id} read")}))
}

#[tokio::test]
async fn login_returns_token_without_storing_it() {
    let server = StubServer::spawn().await;
    let client = server.client();

    let form = LoginForm {
        username: "sam".into(),
        password: "pw123456".into(),
    };
    let response = client.login(&form.validate().unwrap()).await.unwrap();

    assert_eq!(response.access_token, "fresh-token");
    assert_eq!(response.user.username, "sam");
    // Storing the credential is the caller's decision.
    assert_eq!(client.session().token(), None);

    client.set_credential(Some(&response.access_token));
    assert_eq!(client.session().token(), Some("fresh-token".to_string()));
}

#[tokio::test]
async fn rejected_login_maps_to_api_error_and_leaves_credential_unchanged() {
    let server = StubServer::spawn().await;
    let client = server.client();
    client.set_credential(Some("keep-me"));

    let form = LoginForm {
        username: "sam".into(),
        password: "wrong-pw".into(),
    };
    let err = client.login(&form.validate().unwrap()).await.unwrap_err();

    assert_eq!(
        err,
        ClientError::Api {
            status: 401,
            message: "invalid credentials".into()
        }
    );
    assert_eq!(client.session().token(), Some("keep-me".to_string()));
}

#[tokio::test]
async fn bearer_header_carries_the_stored_credential() {
    let server = StubServer::spawn().await;
    let client = server.client();

    client.set_credential(Some("abc"));
    let page = client.products(&ProductFilters::default()).await.unwrap();
    assert_eq!(page.products[0].sku, "W-1");

    // Clearing the credential sends the next request unauthenticated.
    client.set_credential(None);
    let err = client.products(&ProductFilters::default()).await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Api {
            status: 401,
            message: "missing authorization".into()
        }
    );
}

#[tokio::test]
async fn empty_filter_values_never_reach_the_query_string() {
    let server = StubServer::spawn().await;
    let client = server.client();

    let filters = InventoryFilters {
        search: String::new(),
        warehouse_id: Some(WarehouseId::from(3)),
        ..InventoryFilters::default()
    };
    let page = client.inventory(&filters).await.unwrap();
    assert_eq!(page.inventory.len(), 1);
    assert_eq!(page.summary.low_stock_count, 1);
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_the_generic_message() {
    let server = StubServer::spawn().await;
    let client = server.client();

    let err = client.warehouses().await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Api {
            status: 500,
            message: "API request failed".into()
        }
    );
}

#[tokio::test]
async fn unreachable_server_maps_to_transport_error() {
    let session = Arc::new(Session::new(MemoryTokenStore::new()));
    let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:1/api"), session);

    let err = client.warehouses().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn mark_alert_read_builds_the_per_alert_path() {
    let server = StubServer::spawn().await;
    let client = server.client();

    let response = client.mark_alert_read(&AlertId::from(7)).await.unwrap();
    assert_eq!(response.message, "alert 7 read");
}

#[tokio::test]
async fn credential_survives_a_client_restart_via_the_file_store() {
    let server = StubServer::spawn().await;
    let dir = std::env::temp_dir().join(format!("stockline-client-test-{}", std::process::id()));
    let path = dir.join("token");

    {
        let session = Arc::new(Session::new(FileTokenStore::new(&path)));
        let client = ApiClient::new(ApiConfig::new(&server.base_url), session);
        client.set_credential(Some("abc"));
    }

    // A fresh session over the same store sees the persisted token and the
    // authenticated call succeeds without a new login.
    let session = Arc::new(Session::new(FileTokenStore::new(&path)));
    assert_eq!(session.token(), Some("abc".to_string()));
    let client = ApiClient::new(ApiConfig::new(&server.base_url), session);
    assert!(client.products(&ProductFilters::default()).await.is_ok());

    // Logout clears the persisted credential too.
    client.set_credential(None);
    let reloaded = Session::new(FileTokenStore::new(&path));
    assert_eq!(reloaded.token(), None);

    let _ = std::fs::remove_dir_all(dir);
}
