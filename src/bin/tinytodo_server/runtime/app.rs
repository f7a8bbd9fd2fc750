use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::middleware;
use axum::routing::{get, put};
use tokio::sync::RwLock;

use super::super::handlers_system::{hash_token, healthz, login_hint, require_bearer};
use super::super::handlers_todos::{create_todo, list_todos, update_todo};
use super::super::persistence::load_todos_from_disk;
use super::super::types::AppState;
use super::Args;

pub(super) fn build_state(args: &Args) -> Result<Arc<AppState>> {
    let todos = load_todos_from_disk(&args.data_dir).context("load todos from disk")?;
    tracing::debug!(count = todos.len(), "loaded todos");
    Ok(Arc::new(AppState {
        data_dir: args.data_dir.clone(),
        token_hash: hash_token(&args.dev_token),
        todos: Arc::new(RwLock::new(todos)),
    }))
}

pub(super) fn build_app_router(state: Arc<AppState>) -> Router {
    let authed = Router::new()
        .route("/todos/", get(list_todos).post(create_todo))
        .route("/todos/:id", put(update_todo))
        .layer(middleware::from_fn_with_state(state.clone(), require_bearer));
    Router::new()
        .route("/healthz", get(healthz))
        .route("/login", get(login_hint))
        .merge(authed)
        .with_state(state)
}
