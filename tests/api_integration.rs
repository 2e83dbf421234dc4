//! End-to-end API tests over the in-memory ledger.
//!
//! Every request goes through the full router (CORS, tracing, timeout,
//! fallback) via `tower::ServiceExt::oneshot`.

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use billing_ledger::adapters::http::{app_router, AppState, LedgerApp};
use billing_ledger::adapters::InMemoryLedger;
use billing_ledger::domain::foundation::LogId;

struct TestApp {
    ledger: InMemoryLedger,
    router: LedgerApp,
}

impl TestApp {
    fn new() -> Self {
        Self::with_details(true)
    }

    fn with_details(expose: bool) -> Self {
        let ledger = InMemoryLedger::new();
        let state = AppState::in_memory(ledger.clone()).with_error_details(expose);
        let router = app_router(state, "/api", Duration::from_secs(5));
        Self { ledger, router }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        };
        self.send_raw(method, uri, body).await
    }

    async fn send_raw(&self, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().method(method).uri(uri).body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn create_client(&self, name: &str) -> i64 {
        let (status, body) = self
            .send(Method::POST, "/api/clients", Some(json!({ "name": name })))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }

    async fn create_log(&self, client_id: i64, date: &str) -> i64 {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/logs",
                Some(json!({
                    "clientId": client_id,
                    "taskType": "Maintenance",
                    "date": date,
                    "amount": 50
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }

    async fn is_paid(&self, id: i64) -> bool {
        self.ledger.log(LogId::new(id)).await.unwrap().paid
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Clients
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn client_creation_applies_defaults() {
    let app = TestApp::new();
    let (status, body) = app
        .send(Method::POST, "/api/clients", Some(json!({ "name": "Acme" })))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Acme");
    assert_eq!(body["type"], "Website");
    assert_eq!(body["domain"], Value::Null);
}

#[tokio::test]
async fn client_creation_keeps_supplied_values() {
    let app = TestApp::new();
    let (_, body) = app
        .send(
            Method::POST,
            "/api/clients",
            Some(json!({ "name": "Acme", "type": "Retainer", "domain": "acme.test" })),
        )
        .await;

    assert_eq!(body["type"], "Retainer");
    assert_eq!(body["domain"], "acme.test");
}

#[tokio::test]
async fn client_without_name_is_rejected() {
    let app = TestApp::new();
    let (status, body) = app.send(Method::POST, "/api/clients", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Client name is required" }));
    assert_eq!(app.ledger.row_counts().await, (0, 0, 0));
}

#[tokio::test]
async fn clients_are_listed_by_name() {
    let app = TestApp::new();
    app.create_client("Zeta").await;
    app.create_client("Alpha").await;

    let (status, body) = app.send(Method::GET, "/api/clients", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alpha", "Zeta"]);
}

#[tokio::test]
async fn client_update_replaces_fields() {
    let app = TestApp::new();
    let (_, created) = app
        .send(
            Method::POST,
            "/api/clients",
            Some(json!({ "name": "Acme", "domain": "acme.test" })),
        )
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/clients",
            Some(json!({ "id": id, "name": "Acme Ltd", "type": "Hosting" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Acme Ltd");
    assert_eq!(body["type"], "Hosting");
    assert_eq!(body["domain"], Value::Null);
}

#[tokio::test]
async fn client_update_for_unknown_id_is_404() {
    let app = TestApp::new();
    let id = app.create_client("Acme").await;

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/clients",
            Some(json!({ "id": id + 100, "name": "Other", "type": "Website" })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Client not found");
    let (_, clients) = app.send(Method::GET, "/api/clients", None).await;
    assert_eq!(clients[0]["name"], "Acme");
}

#[tokio::test]
async fn client_update_without_id_is_400() {
    let app = TestApp::new();
    let (status, body) = app
        .send(Method::PUT, "/api/clients", Some(json!({ "name": "Acme" })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Client ID is required");
}

#[tokio::test]
async fn update_with_only_an_unknown_id_is_404_on_every_resource() {
    let app = TestApp::new();
    app.create_client("Acme").await;

    for (uri, message) in [
        ("/api/clients", "Client not found"),
        ("/api/logs", "Log not found"),
        ("/api/cycles", "Cycle not found"),
    ] {
        let (status, body) = app.send(Method::PUT, uri, Some(json!({ "id": 999 }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "PUT {}", uri);
        assert_eq!(body["error"], message);
    }
}

#[tokio::test]
async fn update_with_a_known_id_and_partial_body_is_400() {
    let app = TestApp::new();
    let client = app.create_client("Acme").await;
    let log = app.create_log(client, "2024-01-05").await;

    let (status, body) = app
        .send(Method::PUT, "/api/clients", Some(json!({ "id": client })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Client name and type are required");

    let (status, body) = app
        .send(Method::PUT, "/api/logs", Some(json!({ "id": log })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Client ID, task type, and date are required");
}

#[tokio::test]
async fn client_delete_cascades_to_logs_and_cycles() {
    let app = TestApp::new();
    let doomed = app.create_client("Doomed").await;
    let kept = app.create_client("Kept").await;
    let doomed_log = app.create_log(doomed, "2024-01-10").await;
    app.create_log(kept, "2024-01-11").await;
    app.send(
        Method::POST,
        "/api/cycles",
        Some(json!({ "clientId": doomed, "logIds": [doomed_log], "total": 50, "date": "2024-01-31" })),
    )
    .await;

    let (status, body) = app
        .send(Method::DELETE, "/api/clients", Some(json!({ "id": doomed })))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Client and associated data deleted successfully"
    );
    assert_eq!(app.ledger.row_counts().await, (1, 1, 0));

    let (_, logs) = app.send(Method::GET, "/api/logs", None).await;
    assert!(logs
        .as_array()
        .unwrap()
        .iter()
        .all(|log| log["client_id"] == json!(kept)));
}

#[tokio::test]
async fn client_delete_of_missing_client_still_succeeds() {
    let app = TestApp::new();
    let (status, _) = app
        .send(Method::DELETE, "/api/clients", Some(json!({ "id": 42 })))
        .await;
    assert_eq!(status, StatusCode::OK);
}

// ════════════════════════════════════════════════════════════════════════════
// Logs
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn log_creation_applies_defaults() {
    let app = TestApp::new();
    let client = app.create_client("Acme").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/logs",
            Some(json!({ "clientId": client, "taskType": "Update", "date": "2024-02-01" })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["amount"], 0.0);
    assert_eq!(body["paid"], false);
    assert_eq!(body["details"], Value::Null);
    assert_eq!(body["date"], "2024-02-01");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn log_without_date_is_rejected_and_not_stored() {
    let app = TestApp::new();
    let client = app.create_client("Acme").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/logs",
            Some(json!({ "clientId": client, "taskType": "Update" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Client ID, task type, and date are required");
    assert_eq!(app.ledger.row_counts().await.1, 0);
}

#[tokio::test]
async fn logs_are_listed_newest_first_with_client_name() {
    let app = TestApp::new();
    let client = app.create_client("Acme").await;
    app.create_log(client, "2024-01-05").await;
    app.create_log(client, "2024-03-05").await;

    let (_, body) = app.send(Method::GET, "/api/logs", None).await;
    let logs = body.as_array().unwrap();
    assert_eq!(logs[0]["date"], "2024-03-05");
    assert_eq!(logs[1]["date"], "2024-01-05");
    assert_eq!(logs[0]["client_name"], "Acme");
}

#[tokio::test]
async fn log_update_replaces_fields_and_404s_when_missing() {
    let app = TestApp::new();
    let client = app.create_client("Acme").await;
    let id = app.create_log(client, "2024-01-05").await;

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/logs",
            Some(json!({
                "id": id,
                "clientId": client,
                "taskType": "Redesign",
                "date": "2024-01-06",
                "amount": 300,
                "paid": true
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task_type"], "Redesign");
    assert_eq!(body["amount"], 300.0);
    assert!(app.is_paid(id).await);

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/logs",
            Some(json!({ "id": 999, "clientId": client, "taskType": "X", "date": "2024-01-06" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Log not found");
}

#[tokio::test]
async fn log_delete_removes_row() {
    let app = TestApp::new();
    let client = app.create_client("Acme").await;
    let id = app.create_log(client, "2024-01-05").await;

    let (status, body) = app
        .send(Method::DELETE, "/api/logs", Some(json!({ "id": id })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Log deleted successfully");
    assert_eq!(app.ledger.row_counts().await.1, 0);

    let (status, body) = app.send(Method::DELETE, "/api/logs", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Log ID is required");
}

#[tokio::test]
async fn numeric_fields_accept_form_strings() {
    let app = TestApp::new();
    let client = app.create_client("Acme").await;

    let (status, log) = app
        .send(
            Method::POST,
            "/api/logs",
            Some(json!({
                "clientId": client.to_string(),
                "taskType": "Maintenance",
                "date": "2024-01-05",
                "amount": "50"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(log["client_id"], client);
    assert_eq!(log["amount"].as_f64(), Some(50.0));

    let id = log["id"].as_i64().unwrap();
    let (status, body) = app
        .send(Method::DELETE, "/api/logs", Some(json!({ "id": id.to_string() })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Log deleted successfully");
    assert_eq!(app.ledger.row_counts().await.1, 0);
}

#[tokio::test]
async fn non_numeric_id_string_is_invalid_json_body() {
    let app = TestApp::new();
    let (status, body) = app
        .send(Method::DELETE, "/api/logs", Some(json!({ "id": "first" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON body");
}

// ════════════════════════════════════════════════════════════════════════════
// Cycles
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn cycle_lifecycle_toggles_paid_flags() {
    let app = TestApp::new();
    let client = app.create_client("Acme").await;
    let first = app.create_log(client, "2024-01-01").await;
    let second = app.create_log(client, "2024-01-02").await;
    let third = app.create_log(client, "2024-01-03").await;
    let untouched = app.create_log(client, "2024-01-04").await;

    let (status, cycle) = app
        .send(
            Method::POST,
            "/api/cycles",
            Some(json!({
                "clientId": client,
                "logIds": [first, second, third],
                "total": 150,
                "date": "2024-01-31"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(cycle["log_ids"], json!([first, second, third]));
    for id in [first, second, third] {
        assert!(app.is_paid(id).await);
    }
    assert!(!app.is_paid(untouched).await);

    let (status, body) = app
        .send(Method::DELETE, "/api/cycles", Some(json!({ "id": cycle["id"] })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cycle deleted successfully");
    for id in [first, second, third] {
        assert!(!app.is_paid(id).await);
    }
}

#[tokio::test]
async fn cycle_with_empty_log_ids_is_rejected() {
    let app = TestApp::new();
    let client = app.create_client("Acme").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/cycles",
            Some(json!({ "clientId": client, "logIds": [], "total": 10, "date": "2024-01-31" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Client ID, log IDs, total, and date are required");
}

#[tokio::test]
async fn cycle_update_leaves_paid_flags_alone() {
    let app = TestApp::new();
    let client = app.create_client("Acme").await;
    let first = app.create_log(client, "2024-01-01").await;
    let second = app.create_log(client, "2024-01-02").await;
    let (_, cycle) = app
        .send(
            Method::POST,
            "/api/cycles",
            Some(json!({ "clientId": client, "logIds": [first], "total": 50, "date": "2024-01-31" })),
        )
        .await;

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/cycles",
            Some(json!({
                "id": cycle["id"],
                "clientId": client,
                "logIds": [second],
                "total": 75,
                "date": "2024-02-01"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["log_ids"], json!([second]));
    assert!(app.is_paid(first).await);
    assert!(!app.is_paid(second).await);
}

#[tokio::test]
async fn cycle_delete_of_missing_cycle_changes_nothing() {
    let app = TestApp::new();
    let client = app.create_client("Acme").await;
    let log = app.create_log(client, "2024-01-01").await;
    app.send(
        Method::POST,
        "/api/cycles",
        Some(json!({ "clientId": client, "logIds": [log], "total": 50, "date": "2024-01-31" })),
    )
    .await;

    let (status, _) = app
        .send(Method::DELETE, "/api/cycles", Some(json!({ "id": 999 })))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(app.is_paid(log).await);
}

// ════════════════════════════════════════════════════════════════════════════
// Dashboard, routing, and cross-cutting behavior
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn dashboard_matches_individual_lists() {
    let app = TestApp::new();
    let client = app.create_client("Acme").await;
    let log = app.create_log(client, "2024-01-01").await;
    app.send(
        Method::POST,
        "/api/cycles",
        Some(json!({ "clientId": client, "logIds": [log], "total": 50, "date": "2024-01-31" })),
    )
    .await;

    let (status, all) = app.send(Method::GET, "/api/all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_object().unwrap().len(), 3);

    let (_, clients) = app.send(Method::GET, "/api/clients", None).await;
    let (_, logs) = app.send(Method::GET, "/api/logs", None).await;
    let (_, cycles) = app.send(Method::GET, "/api/cycles", None).await;
    assert_eq!(all["clients"], clients);
    assert_eq!(all["logs"], logs);
    assert_eq!(all["cycles"], cycles);
}

#[tokio::test]
async fn unknown_path_returns_dashboard() {
    let app = TestApp::new();
    app.create_client("Acme").await;

    let (status, body) = app.send(Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clients"][0]["name"], "Acme");
}

#[tokio::test]
async fn unsupported_method_on_known_route_is_405() {
    let app = TestApp::new();
    let (status, body) = app.send(Method::PATCH, "/api/clients", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "error": "Method not allowed" }));
}

#[tokio::test]
async fn preflight_returns_empty_200_with_cors_headers() {
    let app = TestApp::new();

    // Known routes and the dashboard fallback alike.
    for uri in ["/api/logs", "/nowhere"] {
        let response = app
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "OPTIONS {}", uri);
        let headers = response.headers().clone();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty(), "OPTIONS {} returned a body", uri);
    }
}

#[tokio::test]
async fn trailing_slash_reaches_the_resource_route() {
    let app = TestApp::new();
    let (status, body) = app
        .send(Method::POST, "/api/clients/", Some(json!({ "name": "Acme" })))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Acme");

    let (_, clients) = app.send(Method::GET, "/api/clients/", None).await;
    assert_eq!(clients.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn error_responses_carry_cors_headers() {
    let app = TestApp::new();
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/clients")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn invalid_json_is_400() {
    let app = TestApp::new();
    let (status, body) = app
        .send_raw(Method::POST, "/api/clients", Body::from("{\"name\": "))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON body");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn storage_failure_is_500_with_details() {
    let app = TestApp::new();
    app.ledger.set_unavailable(true);

    let (status, body) = app.send(Method::GET, "/api/clients", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    assert!(body["details"].as_str().unwrap().contains("unavailable"));
}

#[tokio::test]
async fn storage_failure_details_can_be_hidden() {
    let app = TestApp::with_details(false);
    app.ledger.set_unavailable(true);

    let (status, body) = app.send(Method::GET, "/api/logs", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn dashboard_failure_is_generic_500() {
    let app = TestApp::new();
    app.ledger.set_unavailable(true);

    let (status, body) = app.send(Method::GET, "/api/all", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch data" }));
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = TestApp::new();
    let (status, body) = app.send(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
