use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use time::OffsetDateTime;

use crate::config::{ClientConfig, ConfigStore};
use crate::edit::Command;
use crate::location::MemoryLocation;
use crate::model::TodoId;
use crate::page::Page;
use crate::remote::{RemoteClient, SyncError};
use crate::render::{Control, Focus, Key, KeyPress, KeyTarget, Row, click_command};
use crate::sync::{Completion, SyncResponse};

use super::input::Input;
use super::worker::Worker;

mod event_loop;
mod keys;
mod lifecycle;
mod log;
mod render;
mod runtime;

pub(super) use runtime::run;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EntryKind {
    Output,
    Error,
}

#[derive(Debug)]
struct ScrollEntry {
    ts: String,
    kind: EntryKind,
    lines: Vec<String>,
}

/// Which text field the bottom input line is bound to.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ActiveField {
    None,
    NewTodo,
    Item(TodoId),
}

pub(in crate::tui_shell) struct App {
    store: ConfigStore,
    config: ClientConfig,
    page: Page,
    worker: Worker,

    /// Index into the registry, most recent first.
    selected: usize,
    new_focused: bool,
    field: ActiveField,
    input: Input,

    /// Token prompt shown after the page was sent to the login path.
    login: Option<Input>,

    last_result: Option<ScrollEntry>,

    quit: bool,
}

impl App {
    fn selected_id(&self) -> Option<TodoId> {
        self.page
            .registry()
            .iter()
            .nth(self.selected)
            .map(|item| item.id.clone())
    }

    fn clamp_selection(&mut self) {
        let len = self.page.registry().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn active_field(&self) -> ActiveField {
        if let Some(item) = self.page.registry().editing() {
            return ActiveField::Item(item.id.clone());
        }
        if self.new_focused && self.page.document().focus == Focus::NewTodo {
            ActiveField::NewTodo
        } else {
            ActiveField::None
        }
    }

    fn item_busy(&self, id: &TodoId) -> bool {
        self.page
            .document()
            .node(id)
            .and_then(|node| node.controls)
            .is_some_and(|controls| controls.busy)
    }

    fn prompt(&self) -> &'static str {
        if self.login.is_some() {
            return "token>";
        }
        match self.field {
            ActiveField::None => "todo>",
            ActiveField::NewTodo => "new>",
            ActiveField::Item(_) => "edit>",
        }
    }
}
