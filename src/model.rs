mod ids;
mod todo;

pub use self::ids::TodoId;
pub use self::todo::{NewTodo, TodoItem, TodoList, TodoRecord, UpdateTodo};
