//! Background thread that owns the blocking HTTP client.

use std::sync::mpsc::{self, Receiver, SendError, Sender};
use std::thread;

use crate::remote::TodoBackend;
use crate::sync::{Completion, Outgoing};

pub(super) struct Worker {
    requests: Sender<Outgoing>,
    completions: Receiver<Completion>,
}

impl Worker {
    /// Requests run one at a time, in submission order.
    pub(super) fn spawn<B>(backend: B) -> Self
    where
        B: TodoBackend + Send + 'static,
    {
        let (req_tx, req_rx) = mpsc::channel::<Outgoing>();
        let (done_tx, done_rx) = mpsc::channel();
        thread::spawn(move || {
            for out in req_rx {
                tracing::debug!(ticket = ?out.ticket, request = ?out.request, "sending request");
                if done_tx.send(out.run(&backend)).is_err() {
                    break;
                }
            }
        });
        Self {
            requests: req_tx,
            completions: done_rx,
        }
    }

    /// Hands the request back if the worker thread is gone.
    pub(super) fn submit(&self, out: Outgoing) -> Result<(), Outgoing> {
        self.requests.send(out).map_err(|SendError(out)| out)
    }

    pub(super) fn try_recv(&self) -> Option<Completion> {
        self.completions.try_recv().ok()
    }
}
