//! The page controller: owns the registry, document, location and sync
//! client, and is the only place they are mutated.

use crate::edit::{Command, EditTarget};
use crate::location::Location;
use crate::model::{TodoId, TodoItem};
use crate::registry::ItemRegistry;
use crate::render::{self, Document, Focus, KeyTarget, Row};
use crate::router;
use crate::sync::{Completion, Outgoing, SyncClient};

mod reconcile;

pub const LOGIN_PATH: &str = "/login";

pub struct Page {
    location: Box<dyn Location>,
    registry: ItemRegistry,
    document: Document,
    sync: SyncClient,
}

impl Page {
    pub fn new(location: impl Location + 'static) -> Self {
        Self {
            location: Box::new(location),
            registry: ItemRegistry::new(),
            document: Document::default(),
            sync: SyncClient::default(),
        }
    }

    /// Queues the initial list fetch.
    pub fn load(&mut self) {
        self.sync.list_items();
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn location(&self) -> &dyn Location {
        self.location.as_ref()
    }

    /// Direct access for navigation the page does not initiate (address bar
    /// edits, back/forward).
    pub fn location_mut(&mut self) -> &mut dyn Location {
        self.location.as_mut()
    }

    pub fn sync(&self) -> &SyncClient {
        &self.sync
    }

    pub fn rows(&self) -> Vec<Row<'_>> {
        render::rows(&self.registry, &self.document)
    }

    /// True once the page has navigated away (e.g. to the login page).
    pub fn is_unloaded(&self) -> bool {
        self.location.navigated_to().is_some()
    }

    pub fn take_requests(&mut self) -> Vec<Outgoing> {
        if self.is_unloaded() {
            return Vec::new();
        }
        self.sync.take_outbox()
    }

    /// Delivers queued fragment changes to the router. Returns how many were
    /// handled.
    pub fn pump(&mut self) -> usize {
        let changes = self.location.take_changes();
        if self.is_unloaded() {
            return 0;
        }
        for change in &changes {
            tracing::debug!(old = %change.old_url, new = %change.new_url, "fragment change");
            router::on_fragment_change(change, &mut self.registry, &mut self.document);
        }
        changes.len()
    }

    pub fn dispatch(&mut self, command: Command) {
        if self.is_unloaded() {
            tracing::debug!(?command, "page unloaded; command ignored");
            return;
        }
        match command {
            Command::Activate(id) => {
                self.location.set_fragment(&router::edit_fragment(&id));
            }
            Command::Input { id, text } => {
                let accepted = EditTarget::lookup(&mut self.registry, &mut self.document, &id)
                    .is_some_and(|target| target.input(text));
                if !accepted {
                    tracing::debug!(%id, "input ignored; item not editable");
                }
            }
            Command::Save(id) => self.save(id),
            Command::Cancel(_) => {
                self.location.set_fragment("");
            }
            Command::FocusNew => {
                self.document.focus = Focus::NewTodo;
                self.location.set_fragment("");
            }
            Command::InputNew(text) => {
                self.document.new_todo = text;
            }
            Command::SubmitNew => self.submit_new(),
            Command::Key { target, key } => {
                let editing = match &target {
                    KeyTarget::Item(id) => self.registry.get(id).is_some_and(TodoItem::is_editing),
                    KeyTarget::NewTodo => false,
                };
                if let Some(command) = render::key_command(&target, &key, editing) {
                    self.dispatch(command);
                }
            }
        }
    }

    fn save(&mut self, id: TodoId) {
        let Some(item) = self.registry.get(&id) else {
            tracing::debug!(%id, "save ignored; unknown item");
            return;
        };
        if !item.is_editing() {
            tracing::debug!(%id, "save ignored; item not in edit mode");
            return;
        }
        if self.sync.save_in_flight(&id) {
            tracing::debug!(%id, "save ignored; previous save still in flight");
            return;
        }
        let text = item.text.clone();
        if let Some(target) = EditTarget::lookup(&mut self.registry, &mut self.document, &id) {
            target.node.set_busy(true);
            target.blur();
        }
        self.sync.update_item(id, text);
    }

    fn submit_new(&mut self) {
        let text = self.document.new_todo.clone();
        if text.trim().is_empty() {
            return;
        }
        if self.sync.create_in_flight() {
            tracing::debug!("submit ignored; previous create still in flight");
            return;
        }
        let ticket = self.sync.create_item(text.clone());
        self.registry.add_tentative(ticket, text);
    }

    /// Applies a finished request.
    pub fn complete(&mut self, completion: Completion) {
        let Some(request) = self.sync.finish(completion.ticket) else {
            tracing::debug!(ticket = ?completion.ticket, "completion for unknown ticket ignored");
            return;
        };
        if self.is_unloaded() {
            tracing::debug!(ticket = ?completion.ticket, "page unloaded; completion ignored");
            return;
        }
        self.reconcile(completion.ticket, request, completion.result);
    }

    fn add_item(&mut self, item: TodoItem) {
        self.document.insert(render::materialize(&item));
        self.registry.prepend(item);
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
