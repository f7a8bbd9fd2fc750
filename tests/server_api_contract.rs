mod common;

use anyhow::{Context, Result};

#[test]
fn todos_api_contract_and_auth_failures() -> Result<()> {
    let server = common::spawn_server()?;
    let client = reqwest::blocking::Client::new();
    let auth = common::auth_header(&server.token);

    // Health and the login hint are unauthenticated.
    let health = client
        .get(format!("{}/healthz", server.base_url))
        .send()
        .context("healthz")?;
    assert!(health.status().is_success());
    let login = client
        .get(format!("{}/login", server.base_url))
        .send()
        .context("login hint")?;
    assert!(login.status().is_success());

    // Todos require the bearer token.
    let anon = client
        .get(format!("{}/todos/", server.base_url))
        .send()
        .context("anonymous list")?;
    assert_eq!(anon.status(), reqwest::StatusCode::UNAUTHORIZED);
    let wrong = client
        .get(format!("{}/todos/", server.base_url))
        .header(reqwest::header::AUTHORIZATION, common::auth_header("nope"))
        .send()
        .context("wrong token list")?;
    assert_eq!(wrong.status(), reqwest::StatusCode::UNAUTHORIZED);

    // Create answers 201 with a location and no body.
    let created = client
        .post(format!("{}/todos/", server.base_url))
        .header(reqwest::header::AUTHORIZATION, &auth)
        .json(&serde_json::json!({"todo": "buy eggs"}))
        .send()
        .context("create todo")?;
    assert_eq!(created.status(), reqwest::StatusCode::CREATED);
    let location = created
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .context("location header")?
        .to_string();
    let id = location
        .strip_prefix("/todos/")
        .context("location under /todos/")?
        .to_string();
    assert_eq!(id.len(), 16);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert!(created.text().context("create body")?.is_empty());

    let second = client
        .post(format!("{}/todos/", server.base_url))
        .header(reqwest::header::AUTHORIZATION, &auth)
        .json(&serde_json::json!({"todo": "milk"}))
        .send()
        .context("create second todo")?;
    assert_eq!(second.status(), reqwest::StatusCode::CREATED);

    // Blank text is rejected.
    let blank = client
        .post(format!("{}/todos/", server.base_url))
        .header(reqwest::header::AUTHORIZATION, &auth)
        .json(&serde_json::json!({"todo": "   "}))
        .send()
        .context("create blank todo")?;
    assert_eq!(blank.status(), reqwest::StatusCode::BAD_REQUEST);

    // List is in creation order.
    let listed: serde_json::Value = client
        .get(format!("{}/todos/", server.base_url))
        .header(reqwest::header::AUTHORIZATION, &auth)
        .send()
        .context("list todos")?
        .error_for_status()
        .context("list todos status")?
        .json()
        .context("parse todo list")?;
    let items = listed
        .get("items")
        .and_then(|v| v.as_array())
        .context("items array")?;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], serde_json::json!({"id": id, "todo": "buy eggs"}));
    assert_eq!(items[1].get("todo"), Some(&serde_json::json!("milk")));

    // Update: 204, id mismatch 400, unknown 404.
    let updated = client
        .put(format!("{}/todos/{}", server.base_url, id))
        .header(reqwest::header::AUTHORIZATION, &auth)
        .json(&serde_json::json!({"id": id, "todo": "buy 12 eggs"}))
        .send()
        .context("update todo")?;
    assert_eq!(updated.status(), reqwest::StatusCode::NO_CONTENT);

    let mismatch = client
        .put(format!("{}/todos/{}", server.base_url, id))
        .header(reqwest::header::AUTHORIZATION, &auth)
        .json(&serde_json::json!({"id": "0000000000000000", "todo": "x"}))
        .send()
        .context("update mismatched id")?;
    assert_eq!(mismatch.status(), reqwest::StatusCode::BAD_REQUEST);

    let missing = client
        .put(format!("{}/todos/0000000000000000", server.base_url))
        .header(reqwest::header::AUTHORIZATION, &auth)
        .json(&serde_json::json!({"id": "0000000000000000", "todo": "x"}))
        .send()
        .context("update unknown id")?;
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

    // The update is persisted.
    let on_disk = std::fs::read_to_string(server.data_dir.path().join("todos.json"))
        .context("read todos.json")?;
    assert!(on_disk.contains("buy 12 eggs"));
    assert!(on_disk.contains("updated_at"));

    Ok(())
}
