use super::*;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) data_dir: PathBuf,

    /// blake3 hex of the accepted bearer token.
    pub(crate) token_hash: String,

    /// Creation order.
    pub(crate) todos: Arc<RwLock<Vec<StoredTodo>>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct StoredTodo {
    pub(crate) id: TodoId,
    pub(crate) todo: String,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

impl StoredTodo {
    pub(crate) fn record(&self) -> TodoRecord {
        TodoRecord {
            id: self.id.clone(),
            todo: self.todo.clone(),
        }
    }
}

/// On-disk layout of `todos.json`.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct TodosFile {
    pub(crate) version: u32,
    pub(crate) todos: Vec<StoredTodo>,
}
