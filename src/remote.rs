use anyhow::{Context, Result};

use crate::config::ClientConfig;
use crate::model::{NewTodo, TodoId, TodoList, TodoRecord, UpdateTodo};

mod http_client;
pub use self::http_client::id_from_location;

/// Why a backend call did not produce a usable result.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The server answered with a non-success status. Treated as an expired
    /// session regardless of the code.
    #[error("{operation}: server responded with status {status}")]
    Status { operation: &'static str, status: u16 },

    /// The request did not complete.
    #[error("{operation}: request failed")]
    Transport {
        operation: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A success response the client cannot interpret.
    #[error("{operation}: {detail}")]
    Protocol {
        operation: &'static str,
        detail: String,
    },
}

impl SyncError {
    pub fn transport(
        operation: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        SyncError::Transport {
            operation,
            source: source.into(),
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, SyncError::Status { .. })
    }
}

/// The REST service holding the todo list.
pub trait TodoBackend {
    /// `GET /todos/`, in server order.
    fn list_items(&self) -> Result<Vec<TodoRecord>, SyncError>;

    /// `POST /todos/`; returns the id taken from the `location` header.
    fn create_item(&self, text: &str) -> Result<TodoId, SyncError>;

    /// `PUT /todos/<id>`.
    fn update_item(&self, id: &TodoId, text: &str) -> Result<(), SyncError>;
}

pub struct RemoteClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("tinytodo")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(&config.base_url, config.token.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl TodoBackend for RemoteClient {
    fn list_items(&self) -> Result<Vec<TodoRecord>, SyncError> {
        const OP: &str = "list todos";
        let resp = self
            .authed(self.client.get(self.url("/todos/")))
            .send()
            .map_err(|e| SyncError::transport(OP, e))?;
        let list: TodoList = self
            .ensure_ok(resp, OP)?
            .json()
            .map_err(|e| SyncError::Protocol {
                operation: OP,
                detail: format!("parse todo list: {}", e),
            })?;
        Ok(list.items)
    }

    fn create_item(&self, text: &str) -> Result<TodoId, SyncError> {
        const OP: &str = "create todo";
        let resp = self
            .authed(self.client.post(self.url("/todos/")))
            .json(&NewTodo {
                todo: text.to_string(),
            })
            .send()
            .map_err(|e| SyncError::transport(OP, e))?;
        let resp = self.ensure_ok(resp, OP)?;
        let location = resp
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| SyncError::Protocol {
                operation: OP,
                detail: "missing location header".to_string(),
            })?;
        id_from_location(location).ok_or_else(|| SyncError::Protocol {
            operation: OP,
            detail: format!("no todo id in location {:?}", location),
        })
    }

    fn update_item(&self, id: &TodoId, text: &str) -> Result<(), SyncError> {
        const OP: &str = "update todo";
        let resp = self
            .authed(self.client.put(self.url(&format!("/todos/{}", id))))
            .json(&UpdateTodo {
                id: id.clone(),
                todo: text.to_string(),
            })
            .send()
            .map_err(|e| SyncError::transport(OP, e))?;
        self.ensure_ok(resp, OP)?;
        Ok(())
    }
}
