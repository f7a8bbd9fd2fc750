use serde::{Deserialize, Serialize};

use super::ids::TodoId;

/// A todo as the page holds it.
///
/// `original_text` is the snapshot taken when edit mode is entered. It is
/// `Some` exactly while the item is being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub original_text: Option<String>,
}

impl TodoItem {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            original_text: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.original_text.is_some()
    }
}

impl From<TodoRecord> for TodoItem {
    fn from(record: TodoRecord) -> Self {
        Self::new(record.id, record.todo)
    }
}

/// Wire shape of a single todo (`GET /todos/` items).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: TodoId,
    pub todo: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub items: Vec<TodoRecord>,
}

/// Body of `POST /todos/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub todo: String,
}

/// Body of `PUT /todos/<id>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub id: TodoId,
    pub todo: String,
}
