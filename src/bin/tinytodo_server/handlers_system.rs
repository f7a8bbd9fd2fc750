use super::*;

pub(super) fn hash_token(secret: &str) -> String {
    blake3::hash(secret.as_bytes()).to_hex().to_string()
}

pub(super) async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Where clients are sent when a request is rejected.
pub(super) async fn login_hint() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "login": "send `Authorization: Bearer <token>`",
        "hint": "run `tinytodo login --url <server> --token <token>`",
    }))
}

pub(super) async fn require_bearer(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return unauthorized();
    };

    let Ok(value) = value.to_str() else {
        return unauthorized();
    };

    let Some(token) = value.strip_prefix("Bearer ") else {
        return unauthorized();
    };

    if hash_token(token) != state.token_hash {
        tracing::debug!(path = %req.uri().path(), "rejected bearer token");
        return unauthorized();
    }

    next.run(req).await
}
