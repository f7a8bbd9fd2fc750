use tempfile::tempdir;

use super::*;

fn test_state(data_dir: &std::path::Path) -> Arc<AppState> {
    Arc::new(AppState {
        data_dir: data_dir.to_path_buf(),
        token_hash: hash_token("dev"),
        todos: Arc::new(RwLock::new(Vec::new())),
    })
}

fn new_todo(text: &str) -> Json<NewTodo> {
    Json(NewTodo {
        todo: text.to_string(),
    })
}

#[test]
fn generated_ids_are_sixteen_lowercase_hex_chars() {
    let id = generate_todo_id().expect("generate id");
    assert_eq!(id.as_str().len(), 16);
    assert!(
        id.as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    );
}

#[tokio::test]
async fn create_returns_location_and_persists() {
    let temp = tempdir().expect("create temp dir");
    let state = test_state(temp.path());

    let resp = create_todo(State(state.clone()), new_todo("buy eggs"))
        .await
        .expect("create todo");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let todos = state.todos.read().await;
    assert_eq!(todos.len(), 1);
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location header");
    assert_eq!(location, format!("/todos/{}", todos[0].id));
    assert_eq!(todos[0].todo, "buy eggs");
    assert_eq!(todos[0].created_at, todos[0].updated_at);

    let on_disk = load_todos_from_disk(temp.path()).expect("load todos");
    assert_eq!(on_disk, *todos);
}

#[tokio::test]
async fn blank_create_is_rejected() {
    let temp = tempdir().expect("create temp dir");
    let state = test_state(temp.path());

    let resp = create_todo(State(state.clone()), new_todo("  "))
        .await
        .expect_err("blank todo should fail");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(state.todos.read().await.is_empty());
}

#[tokio::test]
async fn update_checks_body_id_and_existence() {
    let temp = tempdir().expect("create temp dir");
    let state = test_state(temp.path());
    create_todo(State(state.clone()), new_todo("milk"))
        .await
        .expect("create todo");
    let id = state.todos.read().await[0].id.clone();

    let mismatch = update_todo(
        State(state.clone()),
        Path(id.to_string()),
        Json(UpdateTodo {
            id: TodoId::from("ffffffffffffffff"),
            todo: "oat milk".to_string(),
        }),
    )
    .await
    .expect_err("mismatched id should fail");
    assert_eq!(mismatch.status(), StatusCode::BAD_REQUEST);

    let missing = update_todo(
        State(state.clone()),
        Path("ffffffffffffffff".to_string()),
        Json(UpdateTodo {
            id: TodoId::from("ffffffffffffffff"),
            todo: "oat milk".to_string(),
        }),
    )
    .await
    .expect_err("unknown id should fail");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let ok = update_todo(
        State(state.clone()),
        Path(id.to_string()),
        Json(UpdateTodo {
            id: id.clone(),
            todo: "oat milk".to_string(),
        }),
    )
    .await
    .expect("update todo");
    assert_eq!(ok.status(), StatusCode::NO_CONTENT);
    assert_eq!(state.todos.read().await[0].todo, "oat milk");
}
