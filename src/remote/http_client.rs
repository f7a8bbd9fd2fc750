use super::*;

impl RemoteClient {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        operation: &'static str,
    ) -> Result<reqwest::blocking::Response, SyncError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(SyncError::Status {
                operation,
                status: status.as_u16(),
            });
        }
        Ok(resp)
    }

    pub(super) fn authed(
        &self,
        req: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token)),
            None => req,
        }
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Takes the new item's id from a `location` value such as `/todos/42` or
/// `http://host/todos/42`.
pub fn id_from_location(location: &str) -> Option<TodoId> {
    let path = match reqwest::Url::parse(location) {
        Ok(url) => url.path().to_string(),
        Err(_) => location.to_string(),
    };
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let id = path.strip_prefix("/todos/")?.trim_end_matches('/');
    if id.is_empty() || id.contains('/') {
        return None;
    }
    Some(TodoId::new(id))
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
