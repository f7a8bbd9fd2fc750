//! Per-item edit state machine and the commands that drive it.
//!
//! Nothing outside the router should call `enter`/`cancel` directly: UI
//! actions change the fragment and the router turns fragment changes into
//! transitions. `commit` is the exception, applied when a save completes.

use crate::model::{TodoId, TodoItem};
use crate::registry::ItemRegistry;
use crate::render::{Document, Focus, ItemNode, KeyPress, KeyTarget};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditState {
    ReadOnly,
    Editing,
}

impl EditState {
    pub fn of(item: &TodoItem) -> Self {
        if item.is_editing() {
            EditState::Editing
        } else {
            EditState::ReadOnly
        }
    }
}

/// User intents, decoupled from whatever produced them (clicks, keys, CLI).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Click on an item's text field.
    Activate(TodoId),
    /// New content typed into an item's text field.
    Input { id: TodoId, text: String },
    Save(TodoId),
    Cancel(TodoId),
    /// Click on the new-item input.
    FocusNew,
    /// New content typed into the new-item input.
    InputNew(String),
    SubmitNew,
    Key { target: KeyTarget, key: KeyPress },
}

/// Mutable view over one rendered item: its registry entry, its node, and
/// the document focus.
pub struct EditTarget<'a> {
    pub item: &'a mut TodoItem,
    pub node: &'a mut ItemNode,
    pub focus: &'a mut Focus,
}

impl<'a> EditTarget<'a> {
    /// `None` unless `id` is both registered and rendered.
    pub fn lookup(
        registry: &'a mut ItemRegistry,
        document: &'a mut Document,
        id: &TodoId,
    ) -> Option<Self> {
        let item = registry.get_mut(id)?;
        let (node, focus) = document.node_and_focus_mut(id)?;
        Some(Self { item, node, focus })
    }

    pub fn state(&self) -> EditState {
        EditState::of(self.item)
    }

    /// ReadOnly -> Editing. Re-entering keeps the first snapshot.
    pub fn enter(self) {
        if self.item.original_text.is_none() {
            self.item.original_text = Some(self.item.text.clone());
        }
        self.node.readonly = false;
        *self.focus = Focus::Item(self.item.id.clone());
        self.node.show_controls();
    }

    /// Editing -> ReadOnly, discarding unsaved text.
    pub fn cancel(self) {
        if let Some(original) = self.item.original_text.take() {
            self.item.text = original;
        }
        self.leave();
    }

    /// Editing -> ReadOnly after the server accepted `saved_text`.
    pub fn commit(self, saved_text: String) {
        self.item.text = saved_text;
        self.item.original_text = None;
        self.node.set_busy(false);
        self.leave();
    }

    /// Replaces the field content. Read-only fields ignore input.
    pub fn input(self, text: String) -> bool {
        if self.node.readonly {
            return false;
        }
        self.item.text = text;
        true
    }

    pub fn blur(self) {
        if *self.focus == Focus::Item(self.item.id.clone()) {
            *self.focus = Focus::None;
        }
    }

    fn leave(self) {
        self.node.readonly = true;
        self.node.hide_controls();
        self.blur();
    }
}

#[cfg(test)]
#[path = "tests/edit_tests.rs"]
mod tests;
