use crate::remote::SyncError;
use crate::sync::{SyncRequest, SyncResponse, Ticket};

use super::*;

impl Page {
    pub(super) fn reconcile(
        &mut self,
        ticket: Ticket,
        request: SyncRequest,
        result: Result<SyncResponse, SyncError>,
    ) {
        match (request, result) {
            (SyncRequest::List, Ok(SyncResponse::Listed(records))) => {
                for record in records {
                    self.add_item(record.into());
                }
                let href = self.location.href();
                router::restore(&href, &mut self.registry, &mut self.document);
            }
            (SyncRequest::Create { text }, Ok(SyncResponse::Created(id))) => {
                self.registry.take_tentative(ticket);
                self.add_item(TodoItem::new(id, text));
                self.document.new_todo.clear();
            }
            (SyncRequest::Update { id, text }, Ok(SyncResponse::Updated)) => {
                if let Some(target) = EditTarget::lookup(&mut self.registry, &mut self.document, &id)
                {
                    target.commit(text);
                }
                if router::resolve(&self.location.href()).as_ref() == Some(&id) {
                    self.location.set_fragment("");
                }
            }
            (request, Ok(response)) => {
                tracing::warn!(?request, ?response, "response does not match request; ignored");
                self.roll_back(ticket, &request);
            }
            (request, Err(err)) => {
                self.roll_back(ticket, &request);
                self.fail(err);
            }
        }
    }

    fn roll_back(&mut self, ticket: Ticket, request: &SyncRequest) {
        match request {
            SyncRequest::Create { .. } => {
                self.registry.take_tentative(ticket);
            }
            SyncRequest::Update { id, .. } => {
                if let Some(node) = self.document.node_mut(id) {
                    node.set_busy(false);
                }
            }
            SyncRequest::List => {}
        }
    }

    fn fail(&mut self, err: SyncError) {
        if err.is_auth() {
            tracing::info!(error = %err, "redirecting to login");
            self.location.assign(LOGIN_PATH);
        } else {
            tracing::warn!(error = ?err, "failed to send request");
        }
    }
}
