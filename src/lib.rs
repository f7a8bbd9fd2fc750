pub mod config;
pub mod edit;
pub mod location;
pub mod logging;
pub mod model;
pub mod page;
pub mod registry;
pub mod remote;
pub mod render;
pub mod router;
pub mod sync;
pub mod tui;

mod tui_shell;
