use tempfile::tempdir;

use super::*;

fn state_in(data_dir: &std::path::Path) -> AppState {
    AppState {
        data_dir: data_dir.to_path_buf(),
        token_hash: hash_token("dev"),
        todos: Arc::new(RwLock::new(Vec::new())),
    }
}

fn stored(id: &str, todo: &str) -> StoredTodo {
    StoredTodo {
        id: TodoId::from(id),
        todo: todo.to_string(),
        created_at: "2026-01-01T00:00:00Z".to_string(),
        updated_at: "2026-01-01T00:00:00Z".to_string(),
    }
}

#[test]
fn missing_file_loads_as_empty() {
    let temp = tempdir().expect("create temp dir");
    let todos = load_todos_from_disk(temp.path()).expect("load todos");
    assert!(todos.is_empty());
}

#[test]
fn persisted_todos_reload_in_creation_order() {
    let temp = tempdir().expect("create temp dir");
    let state = state_in(temp.path());
    let todos = vec![stored("00000000000000aa", "first"), stored("00000000000000bb", "second")];

    persist_todos(&state, &todos).expect("persist todos");
    assert!(todos_path(temp.path()).exists());

    let loaded = load_todos_from_disk(temp.path()).expect("load todos");
    assert_eq!(loaded, todos);
}

#[test]
fn unknown_file_version_is_rejected() {
    let temp = tempdir().expect("create temp dir");
    std::fs::write(
        todos_path(temp.path()),
        br#"{"version": 99, "todos": []}"#,
    )
    .expect("write todos file");

    let err = load_todos_from_disk(temp.path()).expect_err("version 99 should fail");
    assert!(err.to_string().contains("unsupported todos file version 99"));
}
