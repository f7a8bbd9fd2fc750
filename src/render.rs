//! Headless document model and the renderer that materializes items into it.

use std::collections::HashMap;

use crate::edit::Command;
use crate::model::{TodoId, TodoItem};
use crate::registry::ItemRegistry;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Checkbox {
    pub checked: bool,
}

/// The save/cancel pair next to an item's text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorControls {
    pub hidden: bool,
    /// A save for this item is in flight.
    pub busy: bool,
}

/// Rendered list entry. The field's value is the registry item's `text`;
/// the node's identity is the item id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemNode {
    pub id: TodoId,
    pub readonly: bool,
    pub checkbox: Checkbox,
    pub controls: Option<EditorControls>,
}

impl ItemNode {
    pub fn show_controls(&mut self) {
        match self.controls.as_mut() {
            Some(controls) => controls.hidden = false,
            None => tracing::error!(id = %self.id, "editor controls not found"),
        }
    }

    pub fn hide_controls(&mut self) {
        match self.controls.as_mut() {
            Some(controls) => controls.hidden = true,
            None => tracing::error!(id = %self.id, "editor controls not found"),
        }
    }

    pub fn set_busy(&mut self, busy: bool) {
        if let Some(controls) = self.controls.as_mut() {
            controls.busy = busy;
        }
    }

    pub fn controls_visible(&self) -> bool {
        self.controls.is_some_and(|c| !c.hidden)
    }
}

/// Builds the node for `item`: read-only field, unchecked checkbox, hidden
/// controls.
pub fn materialize(item: &TodoItem) -> ItemNode {
    ItemNode {
        id: item.id.clone(),
        readonly: true,
        checkbox: Checkbox::default(),
        controls: Some(EditorControls {
            hidden: true,
            busy: false,
        }),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    None,
    NewTodo,
    Item(TodoId),
}

#[derive(Debug, Default)]
pub struct Document {
    /// Content of the new-item input box.
    pub new_todo: String,
    pub focus: Focus,
    nodes: HashMap<TodoId, ItemNode>,
}

impl Document {
    pub fn insert(&mut self, node: ItemNode) {
        self.nodes.insert(node.id.clone(), node);
    }

    pub fn node(&self, id: &TodoId) -> Option<&ItemNode> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &TodoId) -> Option<&mut ItemNode> {
        self.nodes.get_mut(id)
    }

    pub fn node_and_focus_mut(&mut self, id: &TodoId) -> Option<(&mut ItemNode, &mut Focus)> {
        let node = self.nodes.get_mut(id)?;
        Some((node, &mut self.focus))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// One display row, front to back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row<'a> {
    Pending {
        text: &'a str,
    },
    Item {
        item: &'a TodoItem,
        node: &'a ItemNode,
        focused: bool,
    },
}

/// Tentative entries first, then every rendered item in registry order.
pub fn rows<'a>(registry: &'a ItemRegistry, document: &'a Document) -> Vec<Row<'a>> {
    let pending = registry
        .tentative()
        .iter()
        .map(|t| Row::Pending { text: &t.text });
    let items = registry.iter().filter_map(|item| {
        let node = document.node(&item.id)?;
        Some(Row::Item {
            item,
            node,
            focused: document.focus == Focus::Item(item.id.clone()),
        })
    });
    pending.chain(items).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    /// Keystroke consumed by an input method (legacy key code 229).
    Process,
    Char(char),
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub composing: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            composing: false,
        }
    }

    pub fn composing(key: Key) -> Self {
        Self {
            key,
            composing: true,
        }
    }

    pub fn is_ime(&self) -> bool {
        self.composing || self.key == Key::Process
    }
}

/// Element a key press was delivered to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyTarget {
    NewTodo,
    Item(TodoId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Field,
    Save,
    Cancel,
}

/// Maps a key press to a command. IME keystrokes never map.
pub fn key_command(target: &KeyTarget, key: &KeyPress, editing: bool) -> Option<Command> {
    if key.is_ime() || key.key != Key::Enter {
        return None;
    }
    match target {
        KeyTarget::NewTodo => Some(Command::SubmitNew),
        KeyTarget::Item(id) if editing => Some(Command::Save(id.clone())),
        KeyTarget::Item(_) => None,
    }
}

pub fn click_command(id: &TodoId, control: Control) -> Command {
    match control {
        Control::Field => Command::Activate(id.clone()),
        Control::Save => Command::Save(id.clone()),
        Control::Cancel => Command::Cancel(id.clone()),
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
