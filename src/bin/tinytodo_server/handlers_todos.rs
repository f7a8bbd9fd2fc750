use super::*;

pub(crate) fn now_ts() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}

/// 16 lowercase hex characters.
pub(crate) fn generate_todo_id() -> Result<TodoId> {
    let mut bytes = [0u8; 8];
    getrandom::getrandom(&mut bytes).map_err(|e| anyhow::anyhow!("getrandom: {:?}", e))?;
    let mut out = String::with_capacity(16);
    for b in &bytes {
        out.push_str(&format!("{:02x}", b));
    }
    Ok(TodoId::new(out))
}

pub(super) async fn list_todos(State(state): State<Arc<AppState>>) -> Json<TodoList> {
    let todos = state.todos.read().await;
    Json(TodoList {
        items: todos.iter().map(StoredTodo::record).collect(),
    })
}

pub(super) async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewTodo>,
) -> Result<Response, Response> {
    if payload.todo.trim().is_empty() {
        return Err(bad_request(anyhow::anyhow!("todo text is empty")));
    }

    let mut todos = state.todos.write().await;
    let id = loop {
        let id = generate_todo_id().map_err(internal_error)?;
        if !todos.iter().any(|t| t.id == id) {
            break id;
        }
    };
    let now = now_ts();
    todos.push(StoredTodo {
        id: id.clone(),
        todo: payload.todo,
        created_at: now.clone(),
        updated_at: now,
    });
    if let Err(err) = persist_todos(&state, &todos) {
        todos.pop();
        return Err(internal_error(err));
    }
    tracing::info!(%id, "todo created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/todos/{}", id))],
    )
        .into_response())
}

pub(super) async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTodo>,
) -> Result<Response, Response> {
    if payload.id.as_str() != id {
        return Err(bad_request(anyhow::anyhow!(
            "body id {} does not match path id {}",
            payload.id,
            id
        )));
    }

    let mut todos = state.todos.write().await;
    let Some(pos) = todos.iter().position(|t| t.id.as_str() == id) else {
        return Err(not_found());
    };
    let previous = todos[pos].clone();
    todos[pos].todo = payload.todo;
    todos[pos].updated_at = now_ts();
    if let Err(err) = persist_todos(&state, &todos) {
        todos[pos] = previous;
        return Err(internal_error(err));
    }
    tracing::info!(%id, "todo updated");

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[cfg(test)]
#[path = "../../tests/bin/tinytodo_server/handlers_todos_tests.rs"]
mod tests;
