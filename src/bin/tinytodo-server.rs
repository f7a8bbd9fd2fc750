#![allow(clippy::result_large_err)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use tinytodo::model::{NewTodo, TodoId, TodoList, TodoRecord, UpdateTodo};

#[path = "tinytodo_server/types.rs"]
mod types;
use self::types::*;
#[path = "tinytodo_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "tinytodo_server/persistence.rs"]
mod persistence;
use self::persistence::*;
#[path = "tinytodo_server/handlers_system.rs"]
mod handlers_system;
use self::handlers_system::*;
#[path = "tinytodo_server/handlers_todos.rs"]
mod handlers_todos;
use self::handlers_todos::*;
#[path = "tinytodo_server/runtime/mod.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
