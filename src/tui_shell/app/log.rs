use super::*;

fn now_ts() -> String {
    let now = OffsetDateTime::now_utc();
    format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())
}

impl App {
    fn push_entry(&mut self, kind: EntryKind, lines: Vec<String>) {
        self.last_result = Some(ScrollEntry {
            ts: now_ts(),
            kind,
            lines,
        });
    }

    pub(super) fn push_output(&mut self, lines: Vec<String>) {
        self.push_entry(EntryKind::Output, lines);
    }

    pub(super) fn push_error(&mut self, msg: String) {
        self.push_entry(EntryKind::Error, vec![msg]);
    }

    /// Summarises a completion for the status line before the page applies it.
    pub(super) fn note_completion(&mut self, completion: &Completion) {
        match &completion.result {
            Ok(SyncResponse::Listed(records)) => {
                self.push_output(vec![format!("loaded {} todos", records.len())]);
            }
            Ok(SyncResponse::Created(id)) => self.push_output(vec![format!("created {}", id)]),
            Ok(SyncResponse::Updated) => self.push_output(vec!["saved".to_string()]),
            Err(err) => self.push_error(error_chain(err)),
        }
    }
}

fn error_chain(err: &SyncError) -> String {
    let mut msg = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
