use super::*;

fn open_page(config: &ClientConfig) -> Result<(Page, Worker)> {
    let client = RemoteClient::from_config(config)?;
    let mut page = Page::new(MemoryLocation::new(&config.page_url()));
    page.load();
    Ok((page, Worker::spawn(client)))
}

impl App {
    pub(super) fn load(opts: crate::tui::TuiRunOptions) -> Result<Self> {
        let store = ConfigStore::new(opts.config_path);
        let mut config = store.read_config()?;
        if let Some(url) = opts.url {
            config.base_url = url;
        }
        if let Some(token) = opts.token {
            config.token = Some(token);
        }
        let (page, worker) = open_page(&config)?;
        tracing::info!(base_url = %config.base_url, "tui started");

        let mut app = App {
            store,
            config,
            page,
            worker,
            selected: 0,
            new_focused: false,
            field: ActiveField::None,
            input: Input::default(),
            login: None,
            last_result: None,
            quit: false,
        };
        app.push_output(vec![
            format!("loading {}", app.config.page_url()),
            "Enter: edit/save  Esc: cancel  Tab: new todo  Alt+Left/Right: back/forward  q: quit"
                .to_string(),
        ]);
        Ok(app)
    }

    /// Moves completions in, requests out, and fragment changes through the
    /// router until nothing is pending.
    pub(super) fn sync_page(&mut self) {
        while let Some(completion) = self.worker.try_recv() {
            self.note_completion(&completion);
            self.page.complete(completion);
        }
        loop {
            self.page.pump();
            let outgoing = self.page.take_requests();
            if outgoing.is_empty() {
                break;
            }
            for out in outgoing {
                if let Err(out) = self.worker.submit(out) {
                    let completion = Completion {
                        ticket: out.ticket,
                        result: Err(SyncError::transport("submit request", "worker stopped")),
                    };
                    self.note_completion(&completion);
                    self.page.complete(completion);
                }
            }
        }

        if self.page.is_unloaded() && self.login.is_none() {
            self.login = Some(Input::default());
            self.push_error("session expired or unauthorized; enter a token".to_string());
        }
        self.clamp_selection();
        self.refresh_field();
    }

    /// Rebinds the input line when the focused field changes, and picks up
    /// text the page changed on its own (e.g. the new-todo input clearing).
    fn refresh_field(&mut self) {
        let field = self.active_field();
        if field != self.field {
            let text = match &field {
                ActiveField::None => String::new(),
                ActiveField::NewTodo => self.page.document().new_todo.clone(),
                ActiveField::Item(id) => self
                    .page
                    .registry()
                    .get(id)
                    .map(|item| item.text.clone())
                    .unwrap_or_default(),
            };
            if let ActiveField::Item(id) = &field {
                self.new_focused = false;
                if let Some(pos) = self.page.registry().iter().position(|i| &i.id == id) {
                    self.selected = pos;
                }
            }
            self.input.set(text);
            self.field = field;
        } else if self.field == ActiveField::NewTodo
            && self.page.document().new_todo != self.input.buf
        {
            self.input.set(self.page.document().new_todo.clone());
        }
    }

    pub(super) fn submit_login(&mut self) {
        let Some(prompt) = self.login.as_ref() else {
            return;
        };
        let token = prompt.buf.trim().to_string();
        if token.is_empty() {
            return;
        }

        let saved = self.store.read_config().and_then(|mut stored| {
            stored.token = Some(token.clone());
            self.store.write_config(&stored)
        });
        if let Err(err) = saved {
            self.push_error(format!("{:#}", err));
            return;
        }
        self.config.token = Some(token);

        match open_page(&self.config) {
            Ok((page, worker)) => {
                self.page = page;
                self.worker = worker;
                self.login = None;
                self.selected = 0;
                self.new_focused = false;
                self.push_output(vec![format!(
                    "token saved to {}; reloading",
                    self.store.path().display()
                )]);
            }
            Err(err) => self.push_error(format!("{:#}", err)),
        }
    }
}
