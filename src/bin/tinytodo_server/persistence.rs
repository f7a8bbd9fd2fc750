use super::*;

use tinytodo::config::write_atomic_overwrite;

const TODOS_FILE_VERSION: u32 = 1;

pub(crate) fn todos_path(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join("todos.json")
}

pub(crate) fn load_todos_from_disk(data_dir: &std::path::Path) -> Result<Vec<StoredTodo>> {
    let path = todos_path(data_dir);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let bytes = std::fs::read(&path).with_context(|| format!("read {}", path.display()))?;
    let file: TodosFile =
        serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))?;
    if file.version != TODOS_FILE_VERSION {
        anyhow::bail!(
            "unsupported todos file version {} in {}",
            file.version,
            path.display()
        );
    }
    Ok(file.todos)
}

pub(crate) fn persist_todos(state: &AppState, todos: &[StoredTodo]) -> Result<()> {
    let file = TodosFile {
        version: TODOS_FILE_VERSION,
        todos: todos.to_vec(),
    };
    let bytes = serde_json::to_vec_pretty(&file).context("serialize todos")?;
    write_atomic_overwrite(&todos_path(&state.data_dir), &bytes).context("write todos.json")?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/bin/tinytodo_server/persistence_tests.rs"]
mod tests;
