use super::*;

#[test]
fn id_from_location_strips_todos_prefix() {
    assert_eq!(id_from_location("/todos/42"), Some(TodoId::from("42")));
    assert_eq!(id_from_location("/todos/a1b2/"), Some(TodoId::from("a1b2")));
    assert_eq!(
        id_from_location("http://127.0.0.1:8080/todos/ff00"),
        Some(TodoId::from("ff00"))
    );
}

#[test]
fn id_from_location_rejects_unusable_values() {
    for value in ["", "/todos/", "/todos", "/other/42", "/todos/4/2", "42"] {
        assert_eq!(id_from_location(value), None, "location {value:?}");
    }
}

#[test]
fn status_errors_are_auth_failures() {
    let status = SyncError::Status {
        operation: "list todos",
        status: 500,
    };
    assert!(status.is_auth());
    assert_eq!(
        status.to_string(),
        "list todos: server responded with status 500"
    );

    let transport = SyncError::transport("update todo", "connection refused");
    assert!(!transport.is_auth());
    assert!(
        std::error::Error::source(&transport).is_some(),
        "transport errors keep their cause"
    );
}

#[test]
fn urls_join_without_double_slash() -> anyhow::Result<()> {
    let client = RemoteClient::new("http://127.0.0.1:8080/", None)?;
    assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    assert_eq!(client.url("/todos/"), "http://127.0.0.1:8080/todos/");
    Ok(())
}
