use std::cell::RefCell;

use anyhow::{Context, Result};

use tinytodo::config::{ClientConfig, ConfigStore};
use tinytodo::edit::Command;
use tinytodo::location::MemoryLocation;
use tinytodo::model::{TodoId, TodoRecord};
use tinytodo::page::Page;
use tinytodo::remote::{RemoteClient, SyncError, TodoBackend};
use tinytodo::sync;

use crate::Commands;
use crate::cli_runtime::resolve_config;

pub(crate) fn handle_command(
    store: &ConfigStore,
    url: Option<String>,
    token: Option<String>,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::List { json } => {
            let cfg = resolve_config(store, url, token)?;
            let session = Session::open(&cfg)?;
            let items: Vec<TodoRecord> = session
                .page
                .registry()
                .iter()
                .map(|item| TodoRecord {
                    id: item.id.clone(),
                    todo: item.text.clone(),
                })
                .collect();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&items).context("serialize todos json")?
                );
            } else if items.is_empty() {
                println!("No todos");
            } else {
                for item in items {
                    println!("{}  {}", item.id, item.todo);
                }
            }
        }
        Commands::Add { text } => {
            if text.trim().is_empty() {
                anyhow::bail!("todo text is empty");
            }
            let cfg = resolve_config(store, url, token)?;
            let mut session = Session::open(&cfg)?;
            session.page.dispatch(Command::InputNew(text.clone()));
            session.page.dispatch(Command::SubmitNew);
            session.drive()?;

            let created = session
                .page
                .registry()
                .iter()
                .next()
                .filter(|item| item.text == text)
                .context("server did not confirm the new todo")?;
            println!("{}", created.id);
        }
        Commands::Edit { id, text } => {
            let cfg = resolve_config(store, url, token)?;
            let mut session = Session::open(&cfg)?;
            let id = TodoId::new(id);
            if !session.page.registry().contains(&id) {
                anyhow::bail!("no todo with id {}", id);
            }

            session.page.dispatch(Command::Activate(id.clone()));
            session.drive()?;
            if !session.page.registry().get(&id).is_some_and(|i| i.is_editing()) {
                anyhow::bail!("todo {} cannot be edited (ids are lowercase hex)", id);
            }
            session.page.dispatch(Command::Input {
                id: id.clone(),
                text: text.clone(),
            });
            session.page.dispatch(Command::Save(id.clone()));
            session.drive()?;

            match session.page.registry().get(&id) {
                Some(item) if !item.is_editing() && item.text == text => {
                    println!("Updated {}", id);
                }
                _ => anyhow::bail!("server did not confirm the update of {}", id),
            }
        }
        Commands::Login { url, token } => {
            let mut cfg = store.read_config()?;
            cfg.base_url = url;
            cfg.token = Some(token);
            store.write_config(&cfg)?;
            println!("Saved credentials to {}", store.path().display());
        }
    }

    Ok(())
}

/// A headless page loaded from the configured server.
struct Session {
    page: Page,
    backend: Checked,
}

impl Session {
    fn open(cfg: &ClientConfig) -> Result<Self> {
        let mut session = Session {
            page: Page::new(MemoryLocation::new(&cfg.page_url())),
            backend: Checked::new(RemoteClient::from_config(cfg)?),
        };
        session.page.load();
        session.drive()?;
        Ok(session)
    }

    /// Runs queued requests to completion and surfaces failures the page only
    /// logs.
    fn drive(&mut self) -> Result<()> {
        sync::drive(&mut self.page, &self.backend);
        if self.page.is_unloaded() {
            anyhow::bail!(
                "session expired or unauthorized (run `tinytodo login --url ... --token ...`)"
            );
        }
        if let Some(failure) = self.backend.failure.borrow_mut().take() {
            anyhow::bail!(failure);
        }
        Ok(())
    }
}

/// Remembers the last failed call so the CLI can report it.
struct Checked {
    inner: RemoteClient,
    failure: RefCell<Option<String>>,
}

impl Checked {
    fn new(inner: RemoteClient) -> Self {
        Self {
            inner,
            failure: RefCell::new(None),
        }
    }

    fn record<T>(&self, res: Result<T, SyncError>) -> Result<T, SyncError> {
        if let Err(err) = &res {
            let msg = match std::error::Error::source(err) {
                Some(source) => format!("{}: {}", err, source),
                None => err.to_string(),
            };
            *self.failure.borrow_mut() = Some(msg);
        }
        res
    }
}

impl TodoBackend for Checked {
    fn list_items(&self) -> Result<Vec<TodoRecord>, SyncError> {
        self.record(self.inner.list_items())
    }

    fn create_item(&self, text: &str) -> Result<TodoId, SyncError> {
        self.record(self.inner.create_item(text))
    }

    fn update_item(&self, id: &TodoId, text: &str) -> Result<(), SyncError> {
        self.record(self.inner.update_item(id, text))
    }
}
