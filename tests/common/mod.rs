//! Shared fixtures for tests that run against a mocked TROCCO API.

#![allow(dead_code)]

use rmcp::model::{CallToolRequestParam, CallToolResult, ErrorData};
use rmcp::service::{RunningService, ServiceError};
use rmcp::{RoleClient, ServiceExt};
use serde_json::{json, Value};
use trocco_mcp::client::TroccoClient;
use trocco_mcp::config::Config;
use trocco_mcp::context::Context;
use trocco_mcp::mcp::McpServer;
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";

/// Config pointing at the mock server, with an API key.
pub fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.api.key = Some(API_KEY.to_string());
    config.api.base_url = server.uri();
    config
}

pub fn client_for(server: &MockServer) -> TroccoClient {
    TroccoClient::new(&config_for(server)).expect("client should build")
}

pub fn mcp_for(server: &MockServer) -> McpServer {
    McpServer::new(Context::new(&config_for(server)).expect("context should build"))
}

/// Serve `mcp` over an in-memory pipe and connect a client to it.
pub async fn connect(mcp: McpServer) -> RunningService<RoleClient, ()> {
    let (server_io, client_io) = tokio::io::duplex(64 * 1024);
    tokio::spawn(async move {
        if let Ok(service) = mcp.serve(server_io).await {
            let _ = service.waiting().await;
        }
    });
    ().serve(client_io).await.expect("client should connect")
}

/// Invoke a tool through the protocol and return its result.
pub async fn call_tool_ok(
    client: &RunningService<RoleClient, ()>,
    name: &'static str,
    arguments: Value,
) -> CallToolResult {
    let request = CallToolRequestParam {
        name: name.into(),
        arguments: arguments.as_object().cloned(),
    };
    client.call_tool(request).await.expect("tool call should succeed")
}

/// Invoke a tool through the protocol and return its error.
pub async fn call_tool_err(
    client: &RunningService<RoleClient, ()>,
    name: &'static str,
    arguments: Option<Value>,
) -> ErrorData {
    let request = CallToolRequestParam {
        name: name.into(),
        arguments: arguments.map(|args| args.as_object().cloned().expect("arguments object")),
    };
    match client.call_tool(request).await {
        Err(ServiceError::McpError(err)) => err,
        other => panic!("expected {name} to fail, got {other:?}"),
    }
}

/// Decode the single text block of a tool result as JSON.
pub fn result_json(result: CallToolResult) -> Value {
    let wire = serde_json::to_value(result).expect("tool result serializes");
    assert_eq!(wire["isError"], json!(false));

    let content = wire["content"].as_array().expect("content array");
    assert_eq!(content.len(), 1, "expected exactly one content block");
    assert_eq!(content[0]["type"], json!("text"));

    let text = content[0]["text"].as_str().expect("text block");
    serde_json::from_str(text).expect("text block holds JSON")
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or_default()
}

pub fn datamart(description: &str) -> Value {
    json!({
        "id": 42,
        "name": "daily_sales",
        "description": description,
        "data_warehouse_type": "bigquery",
        "is_runnable_concurrently": false,
        "resource_group": { "id": 3, "name": "analytics" },
        "schedules": [{ "frequency": "daily", "hour": 3, "minute": 0, "time_zone": "Asia/Tokyo" }],
        "notifications": [{ "destination_type": "slack", "notify_when": "failed" }],
        "labels": [{ "id": 1, "name": "sales" }],
        "custom_variable_settings": [],
        "datamart_bigquery_option": {
            "bigquery_connection_id": 9,
            "query_mode": "insert",
            "query": "SELECT store_id, SUM(amount) FROM sales GROUP BY 1",
            "destination_dataset": "mart",
            "destination_table": "daily_sales",
            "write_disposition": "truncate",
            "partitioning": null
        },
        "created_at": "2024-04-01T10:00:00.000+09:00",
        "updated_at": "2024-04-02T10:00:00.000+09:00"
    })
}

pub fn pipeline() -> Value {
    json!({
        "id": 7,
        "name": "nightly",
        "description": "Load then build marts",
        "max_task_parallelism": 2,
        "execution_timeout": 120,
        "max_retries": 1,
        "min_retry_interval": 10,
        "is_concurrent_execution_skipped": true,
        "is_stopped_on_errors": false,
        "tasks": [
            { "key": "load", "task_type": "trocco_transfer" },
            { "key": "mart", "task_type": "trocco_bigquery_datamart" }
        ],
        "task_dependencies": [{ "source": "load", "destination": "mart" }],
        "schedules": [],
        "notifications": [],
        "labels": [],
        "created_at": "2024-04-01T10:00:00.000+09:00",
        "updated_at": "2024-04-02T10:00:00.000+09:00"
    })
}

pub fn user(id: i64) -> Value {
    json!({
        "id": id,
        "email": format!("user{id}@example.com"),
        "role": "member",
        "can_use_audit_log": false,
        "is_restricted_connection_modify": true,
        "last_sign_in_at": "2024-04-03T09:00:00+09:00",
        "created_at": "2024-04-01T10:00:00+09:00",
        "updated_at": "2024-04-02T10:00:00+09:00"
    })
}
