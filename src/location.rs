//! The page URL as an injectable, observable value.
//!
//! The fragment is the only client state kept in the URL. Writing it does not
//! notify anyone synchronously; a `FragmentChange` is queued instead and the
//! page drains the queue from its event loop.

use std::collections::VecDeque;

/// One fragment transition, carrying full URLs like the browser's
/// `hashchange` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentChange {
    pub old_url: String,
    pub new_url: String,
}

pub trait Location {
    /// Full current URL, fragment included when non-empty.
    fn href(&self) -> String;

    /// Current fragment without the leading `#`.
    fn fragment(&self) -> String;

    /// Sets the fragment, queueing a change notification when it differs.
    fn set_fragment(&mut self, fragment: &str);

    /// Leaves the page for `path` (full navigation).
    fn assign(&mut self, path: &str);

    /// Target of the last `assign`, if the page has been left.
    fn navigated_to(&self) -> Option<&str>;

    fn back(&mut self);
    fn forward(&mut self);

    fn take_changes(&mut self) -> Vec<FragmentChange>;
}

/// In-process `Location` with a fragment history stack.
#[derive(Debug)]
pub struct MemoryLocation {
    base: String,
    history: Vec<String>,
    index: usize,
    pending: VecDeque<FragmentChange>,
    navigated: Option<String>,
}

impl MemoryLocation {
    /// Starts at `url`. A fragment in `url` becomes the initial history
    /// entry, which is how deep links and reloads are modelled.
    pub fn new(url: &str) -> Self {
        let (base, fragment) = match url.split_once('#') {
            Some((base, fragment)) => (base, fragment),
            None => (url, ""),
        };
        Self {
            base: base.to_string(),
            history: vec![fragment.to_string()],
            index: 0,
            pending: VecDeque::new(),
            navigated: None,
        }
    }

    fn url_for(&self, fragment: &str) -> String {
        if fragment.is_empty() {
            self.base.clone()
        } else {
            format!("{}#{}", self.base, fragment)
        }
    }

    fn current(&self) -> &str {
        &self.history[self.index]
    }

    fn move_to(&mut self, index: usize) {
        let old_url = self.href();
        self.index = index;
        let new_url = self.href();
        if old_url != new_url {
            self.pending.push_back(FragmentChange { old_url, new_url });
        }
    }
}

impl Location for MemoryLocation {
    fn href(&self) -> String {
        self.url_for(self.current())
    }

    fn fragment(&self) -> String {
        self.current().to_string()
    }

    fn set_fragment(&mut self, fragment: &str) {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        if fragment == self.current() {
            return;
        }
        self.history.truncate(self.index + 1);
        self.history.push(fragment.to_string());
        self.move_to(self.history.len() - 1);
    }

    fn assign(&mut self, path: &str) {
        self.navigated = Some(path.to_string());
    }

    fn navigated_to(&self) -> Option<&str> {
        self.navigated.as_deref()
    }

    fn back(&mut self) {
        if self.index > 0 {
            self.move_to(self.index - 1);
        }
    }

    fn forward(&mut self) {
        if self.index + 1 < self.history.len() {
            self.move_to(self.index + 1);
        }
    }

    fn take_changes(&mut self) -> Vec<FragmentChange> {
        self.pending.drain(..).collect()
    }
}

#[cfg(test)]
#[path = "tests/location_tests.rs"]
mod tests;
