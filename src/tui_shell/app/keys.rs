use super::*;

impl App {
    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }
        if self.login.is_some() {
            self.handle_login_key(key);
            return;
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Left => self.page.location_mut().back(),
                KeyCode::Right => self.page.location_mut().forward(),
                _ => {}
            }
            return;
        }
        match self.field.clone() {
            ActiveField::None => self.handle_list_key(key),
            ActiveField::NewTodo => self.handle_new_todo_key(key),
            ActiveField::Item(id) => self.handle_item_key(id, key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                self.selected += 1;
                self.clamp_selection();
            }
            KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    self.page.dispatch(click_command(&id, Control::Field));
                }
            }
            KeyCode::Tab => self.focus_new(),
            _ => {}
        }
    }

    fn handle_new_todo_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.page.dispatch(Command::Key {
                target: KeyTarget::NewTodo,
                key: KeyPress::new(Key::Enter),
            }),
            KeyCode::Esc | KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.new_focused = false;
            }
            _ => {
                if self.edit_input(key) {
                    self.page.dispatch(Command::InputNew(self.input.buf.clone()));
                }
            }
        }
    }

    fn handle_item_key(&mut self, id: TodoId, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.page.dispatch(Command::Key {
                target: KeyTarget::Item(id),
                key: KeyPress::new(Key::Enter),
            }),
            KeyCode::Esc => self.page.dispatch(click_command(&id, Control::Cancel)),
            KeyCode::Tab => self.focus_new(),
            _ => {
                if self.item_busy(&id) {
                    return;
                }
                if self.edit_input(key) {
                    let text = self.input.buf.clone();
                    self.page.dispatch(Command::Input { id, text });
                }
            }
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_login(),
            KeyCode::Esc => self.quit = true,
            _ => {
                if let Some(prompt) = self.login.as_mut() {
                    edit_buffer(prompt, key);
                }
            }
        }
    }

    fn focus_new(&mut self) {
        self.new_focused = true;
        self.page.dispatch(Command::FocusNew);
    }

    /// Applies a text-editing key to the bound field. Returns true when the
    /// text changed.
    fn edit_input(&mut self, key: KeyEvent) -> bool {
        let before = self.input.buf.clone();
        edit_buffer(&mut self.input, key);
        self.input.buf != before
    }
}

fn edit_buffer(input: &mut Input, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert_char(c)
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ => {}
    }
}
