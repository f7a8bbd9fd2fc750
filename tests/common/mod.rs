#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use tinytodo::model::{TodoId, TodoRecord};
use tinytodo::remote::{SyncError, TodoBackend, id_from_location};

pub struct ServerGuard {
    pub base_url: String,
    pub token: String,
    pub data_dir: tempfile::TempDir,
    child: Child,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub fn spawn_server() -> Result<ServerGuard> {
    let data_dir = tempfile::tempdir().context("create server tempdir")?;

    let token = "dev".to_string();

    let addr_file = data_dir.path().join("addr.txt");

    let child = Command::new(env!("CARGO_BIN_EXE_tinytodo-server"))
        .args([
            "--addr",
            "127.0.0.1:0",
            "--addr-file",
            addr_file.to_str().unwrap(),
            "--data-dir",
            data_dir.path().to_str().unwrap(),
            "--dev-token",
            &token,
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn tinytodo-server")?;

    let base_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&base_url)?;

    Ok(ServerGuard {
        base_url,
        token,
        data_dir,
        child,
    })
}

fn read_addr_file(addr_file: &Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(format!("http://{}", s));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

pub fn wait_for_healthz(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("server did not become healthy at {}/healthz", base_url);
        }
        match client.get(format!("{}/healthz", base_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}

pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// A base URL nothing listens on.
pub fn closed_port_url() -> Result<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").context("bind probe listener")?;
    let addr = listener.local_addr().context("probe listener addr")?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    List,
    Create { text: String },
    Update { id: TodoId, text: String },
}

/// In-memory `TodoBackend` answering from per-operation scripts. Unscripted
/// lists come back empty, unscripted updates succeed, unscripted creates fail.
#[derive(Default)]
pub struct ScriptedBackend {
    pub calls: RefCell<Vec<Call>>,
    lists: RefCell<VecDeque<Result<Vec<TodoRecord>, SyncError>>>,
    creates: RefCell<VecDeque<Result<TodoId, SyncError>>>,
    updates: RefCell<VecDeque<Result<(), SyncError>>>,
}

impl ScriptedBackend {
    pub fn listing(records: &[(&str, &str)]) -> Self {
        let backend = Self::default();
        backend.script_list(Ok(records
            .iter()
            .map(|(id, todo)| TodoRecord {
                id: TodoId::from(*id),
                todo: todo.to_string(),
            })
            .collect()));
        backend
    }

    pub fn script_list(&self, result: Result<Vec<TodoRecord>, SyncError>) {
        self.lists.borrow_mut().push_back(result);
    }

    /// Scripts a successful create answered with `location`.
    pub fn script_created_at(&self, location: &str) {
        let result = id_from_location(location).ok_or_else(|| SyncError::Protocol {
            operation: "create todo",
            detail: format!("no todo id in location {:?}", location),
        });
        self.creates.borrow_mut().push_back(result);
    }

    pub fn script_create(&self, result: Result<TodoId, SyncError>) {
        self.creates.borrow_mut().push_back(result);
    }

    pub fn script_update(&self, result: Result<(), SyncError>) {
        self.updates.borrow_mut().push_back(result);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl TodoBackend for ScriptedBackend {
    fn list_items(&self) -> Result<Vec<TodoRecord>, SyncError> {
        self.calls.borrow_mut().push(Call::List);
        self.lists.borrow_mut().pop_front().unwrap_or(Ok(Vec::new()))
    }

    fn create_item(&self, text: &str) -> Result<TodoId, SyncError> {
        self.calls.borrow_mut().push(Call::Create {
            text: text.to_string(),
        });
        self.creates
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(SyncError::transport("create todo", "unscripted create")))
    }

    fn update_item(&self, id: &TodoId, text: &str) -> Result<(), SyncError> {
        self.calls.borrow_mut().push(Call::Update {
            id: id.clone(),
            text: text.to_string(),
        });
        self.updates.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

pub fn status_error(status: u16) -> SyncError {
    SyncError::Status {
        operation: "scripted",
        status,
    }
}
