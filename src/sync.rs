//! Request bookkeeping between the page and a `TodoBackend`.
//!
//! The page queues requests and gets answers back as `Completion`s, in
//! whatever order the runtime delivers them.

use std::collections::{HashMap, VecDeque};

use crate::model::{TodoId, TodoRecord};
use crate::page::Page;
use crate::remote::{SyncError, TodoBackend};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncRequest {
    List,
    Create { text: String },
    Update { id: TodoId, text: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncResponse {
    Listed(Vec<TodoRecord>),
    Created(TodoId),
    Updated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outgoing {
    pub ticket: Ticket,
    pub request: SyncRequest,
}

impl Outgoing {
    pub fn run(self, backend: &dyn TodoBackend) -> Completion {
        Completion {
            ticket: self.ticket,
            result: execute(backend, &self.request),
        }
    }
}

#[derive(Debug)]
pub struct Completion {
    pub ticket: Ticket,
    pub result: Result<SyncResponse, SyncError>,
}

pub fn execute(backend: &dyn TodoBackend, request: &SyncRequest) -> Result<SyncResponse, SyncError> {
    match request {
        SyncRequest::List => backend.list_items().map(SyncResponse::Listed),
        SyncRequest::Create { text } => backend.create_item(text).map(SyncResponse::Created),
        SyncRequest::Update { id, text } => {
            backend.update_item(id, text).map(|()| SyncResponse::Updated)
        }
    }
}

/// Issues tickets and remembers what each outstanding ticket asked for.
#[derive(Debug, Default)]
pub struct SyncClient {
    next_ticket: u64,
    outbox: VecDeque<Outgoing>,
    in_flight: HashMap<Ticket, SyncRequest>,
}

impl SyncClient {
    pub fn list_items(&mut self) -> Ticket {
        self.enqueue(SyncRequest::List)
    }

    pub fn create_item(&mut self, text: String) -> Ticket {
        self.enqueue(SyncRequest::Create { text })
    }

    pub fn update_item(&mut self, id: TodoId, text: String) -> Ticket {
        self.enqueue(SyncRequest::Update { id, text })
    }

    fn enqueue(&mut self, request: SyncRequest) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.in_flight.insert(ticket, request.clone());
        self.outbox.push_back(Outgoing { ticket, request });
        ticket
    }

    /// Hands queued requests to the runtime. They stay in flight until
    /// `finish` is called with their ticket.
    pub fn take_outbox(&mut self) -> Vec<Outgoing> {
        self.outbox.drain(..).collect()
    }

    /// Forgets `ticket`, returning what it requested. `None` for unknown or
    /// already finished tickets.
    pub fn finish(&mut self, ticket: Ticket) -> Option<SyncRequest> {
        self.in_flight.remove(&ticket)
    }

    pub fn create_in_flight(&self) -> bool {
        self.in_flight
            .values()
            .any(|r| matches!(r, SyncRequest::Create { .. }))
    }

    pub fn save_in_flight(&self, id: &TodoId) -> bool {
        self.in_flight
            .values()
            .any(|r| matches!(r, SyncRequest::Update { id: pending, .. } if pending == id))
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight.is_empty()
    }
}

/// Runs every queued request against `backend` in order, feeding results and
/// fragment changes back into `page` until nothing is left to do.
pub fn drive(page: &mut Page, backend: &dyn TodoBackend) {
    loop {
        page.pump();
        let outgoing = page.take_requests();
        if outgoing.is_empty() {
            break;
        }
        for out in outgoing {
            let completion = out.run(backend);
            page.complete(completion);
        }
    }
}

#[cfg(test)]
#[path = "tests/sync_tests.rs"]
mod tests;
