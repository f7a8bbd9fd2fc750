//! Ordered collection of the todo items the page displays.

use crate::model::{TodoId, TodoItem};
use crate::sync::Ticket;

/// A created item that has been shown locally but has no server id yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TentativeItem {
    pub ticket: Ticket,
    pub text: String,
}

/// Owns every `TodoItem` on the page, front first.
///
/// Tentative entries sit in front of the committed items until their create
/// request completes.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    items: Vec<TodoItem>,
    tentative: Vec<TentativeItem>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `item` at the front. An existing item with the same id is
    /// replaced so ids stay unique.
    pub fn prepend(&mut self, item: TodoItem) {
        self.items.retain(|existing| existing.id != item.id);
        self.items.insert(0, item);
    }

    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn get_mut(&mut self, id: &TodoId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodoItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item currently holding an edit snapshot, if any.
    pub fn editing(&self) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.is_editing())
    }

    pub fn add_tentative(&mut self, ticket: Ticket, text: String) {
        self.tentative.insert(0, TentativeItem { ticket, text });
    }

    pub fn take_tentative(&mut self, ticket: Ticket) -> Option<TentativeItem> {
        let pos = self.tentative.iter().position(|t| t.ticket == ticket)?;
        Some(self.tentative.remove(pos))
    }

    pub fn tentative(&self) -> &[TentativeItem] {
        &self.tentative
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
