//! REST service for an ordered to-do list.
//!
//! `app()` builds a router over a fresh in-memory store with the todo routes
//! at the root, which is what tests drive. `app_with_prefix` lets the binary
//! mount the same routes under an API prefix and plug in any `TodoStore`.

pub mod config;
pub mod error;
pub mod service;
pub mod store;
pub mod types;
pub mod validate;

use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use crate::error::{ServerError, ServiceError};
use crate::service::TodoService;
use crate::types::{CreateTodo, TodoBody, TodoListBody, UpdateTodo};

pub use crate::types::Todo;

pub fn app() -> Router {
    app_with_prefix(TodoService::in_memory(), "")
}

pub fn app_with_prefix(service: TodoService, prefix: &str) -> Router {
    let todos = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", patch(update_todo).delete(delete_todo))
        .with_state(service);

    let prefix = prefix.trim_end_matches('/');
    let router = if prefix.is_empty() {
        todos
    } else if prefix.starts_with('/') {
        Router::new().nest(prefix, todos)
    } else {
        Router::new().nest(&format!("/{prefix}"), todos)
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener, prefix: &str) -> Result<(), ServerError> {
    let app = app_with_prefix(TodoService::in_memory(), prefix);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_todos(State(service): State<TodoService>) -> Result<Json<TodoListBody>, ServiceError> {
    let todos = service.list().await?;
    Ok(Json(TodoListBody { todos }))
}

async fn create_todo(
    State(service): State<TodoService>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoBody>), ServiceError> {
    let Json(input) = payload?;
    let todo = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(TodoBody { todo })))
}

async fn update_todo(
    State(service): State<TodoService>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Bytes,
) -> Result<Json<Value>, ServiceError> {
    let Path(id) = id?;
    let input = decode_update(&body)?;
    service.update(id, input).await?;
    Ok(Json(json!({})))
}

/// An empty body (with or without a content type) is an update that supplies
/// no fields.
fn decode_update(body: &[u8]) -> Result<UpdateTodo, ServiceError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(UpdateTodo::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ServiceError::BadRequest(format!("malformed request body: {e}")))
}

async fn delete_todo(
    State(service): State<TodoService>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Value>, ServiceError> {
    let Path(id) = id?;
    service.delete(id).await?;
    Ok(Json(json!({})))
}
