use axum::{
    extract::{Path, State},
    Json,
    http::StatusCode,
};
use serde::Serialize;
use serde_json::Value;
use crate::server::AppState;
use crate::tools::{self, ToolResponse, ToolSpec, ToolStatus};
use crate::Error;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl ToString) -> ApiError {
    (status, Json(ErrorResponse { error: error.to_string() }))
}

/// HTTP status for a tool outcome; the body always carries the full response
pub fn status_code(response: &ToolResponse) -> StatusCode {
    match response.status {
        ToolStatus::Ok => StatusCode::OK,
        ToolStatus::NotFound => StatusCode::NOT_FOUND,
        ToolStatus::InvalidArguments => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

pub async fn list_tools() -> Json<Vec<ToolSpec>> {
    Json(tools::catalog())
}

pub async fn call_tool(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<ToolResponse>), ApiError> {
    let dispatcher = state.dispatcher.clone();
    // No body means no arguments, which is all `list_employees` needs
    let arguments = body.map(|Json(arguments)| arguments);

    // SQLite calls block; keep them off the async workers
    let response = tokio::task::spawn_blocking(move || dispatcher.call(&name, arguments))
        .await
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?
        .map_err(|e| match e {
            Error::UnknownTool(_) => api_error(StatusCode::NOT_FOUND, e),
            other => api_error(StatusCode::INTERNAL_SERVER_ERROR, other),
        })?;

    Ok((status_code(&response), Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, SqliteDatabase};
    use crate::server::router;
    use crate::tools::Dispatcher;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    fn state() -> Arc<AppState> {
        Arc::new(AppState {
            dispatcher: Dispatcher::new(Arc::new(MemoryStore::new())),
        })
    }

    #[tokio::test]
    async fn test_list_tools() {
        let Json(specs) = list_tools().await;
        assert_eq!(specs.len(), 5);
        assert_eq!(specs[0].name, "add_employee");
    }

    #[tokio::test]
    async fn test_call_tool_statuses() {
        let state = state();

        let (status, Json(added)) = call_tool(
            State(state.clone()),
            Path("add_employee".to_string()),
            Some(Json(json!({
                "name": "John Doe",
                "position": "Software Engineer",
                "salary": 75000.0,
                "city": "New York",
                "pincode": "10001"
            }))),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::OK);
        let id = added.data["id"].as_i64().unwrap();

        let (status, Json(missing)) = call_tool(
            State(state.clone()),
            Path("get_employee".to_string()),
            Some(Json(json!({ "id": id + 100 }))),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(missing.status, ToolStatus::NotFound);

        let (status, _) = call_tool(
            State(state.clone()),
            Path("remove_employee".to_string()),
            Some(Json(json!({}))),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let err = call_tool(State(state), Path("fire_employee".to_string()), None)
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_storage_failure_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let state = Arc::new(AppState {
            dispatcher: Dispatcher::new(Arc::new(SqliteDatabase::new(dir.path().join("missing/employees.db")))),
        });

        let err = call_tool(State(state), Path("list_employees".to_string()), None)
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_router_accepts_empty_body() {
        let app = router(Dispatcher::new(Arc::new(MemoryStore::new())));

        let request = Request::post("/tools/list_employees").body(Body::empty()).unwrap();
        let (status, body) = send(app.clone(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["data"], json!([]));

        // get_employee without a body is an argument error, still a ToolResponse
        let request = Request::post("/tools/get_employee").body(Body::empty()).unwrap();
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["status"], "invalid_arguments");
    }

    #[tokio::test]
    async fn test_router_json_body() {
        let app = router(Dispatcher::new(Arc::new(MemoryStore::new())));

        let request = Request::post("/tools/add_employee")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "name": "Ann",
                    "position": "Analyst",
                    "salary": 50000.0,
                    "city": "Pune",
                    "pincode": "00501"
                })
                .to_string(),
            ))
            .unwrap();
        let (status, body) = send(app.clone(), request).await;
        assert_eq!(status, StatusCode::OK);
        let id = body["data"]["id"].as_i64().unwrap();

        let request = Request::post("/tools/get_employee")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "id": id }).to_string()))
            .unwrap();
        let (_, body) = send(app, request).await;
        assert_eq!(body["data"]["pincode"], "00501");
    }
}
