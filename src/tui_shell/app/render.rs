use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(4),
            Constraint::Length(2),
        ])
        .split(area);

    // Header
    let mut spans = vec![
        Span::styled(
            "TinyTodo",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::raw(app.page.location().href()),
    ];
    if app.page.is_unloaded() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("auth: login", Style::default().fg(Color::Red)));
    } else if !app.page.sync().is_idle() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("syncing", Style::default().fg(Color::Yellow)));
    }
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    draw_list(frame, chunks[1], app);

    // Status / last result
    {
        let mut lines = Vec::new();
        if let Some(r) = &app.last_result {
            let style = match r.kind {
                EntryKind::Output => Style::default().fg(Color::White),
                EntryKind::Error => Style::default().fg(Color::Red),
            };
            for (i, l) in r.lines.iter().enumerate() {
                if i == 0 {
                    lines.push(Line::from(vec![
                        Span::styled(format!("{} ", r.ts), Style::default().fg(Color::Gray)),
                        Span::styled(l.as_str(), style),
                    ]));
                } else {
                    lines.push(Line::from(Span::styled(l.as_str(), style)));
                }
            }
        }
        if lines.is_empty() {
            lines.push(Line::from(""));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::TOP).title("Last")),
            chunks[2],
        );
    }

    // Input
    let prompt = app.prompt();
    let (buf, cursor) = match &app.login {
        Some(login) => (login.buf.as_str(), login.cursor),
        None => (app.input.buf.as_str(), app.input.cursor),
    };
    let input_line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::raw(buf),
    ]);
    let input = Paragraph::new(input_line).block(Block::default().borders(Borders::TOP));
    frame.render_widget(input, chunks[3]);

    if app.login.is_some() || app.field != ActiveField::None {
        let x = prompt.len() as u16 + 1 + cursor as u16;
        frame.set_cursor_position((chunks[3].x + x, chunks[3].y + 1));
    }
}

fn draw_list(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &App) {
    let rows = app.page.rows();
    let pending = rows
        .iter()
        .filter(|r| matches!(r, Row::Pending { .. }))
        .count();

    let mut items = Vec::with_capacity(rows.len());
    for row in &rows {
        let line = match row {
            Row::Pending { text } => Line::from(vec![
                Span::raw("[ ] "),
                Span::styled(
                    *text,
                    Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                ),
                Span::styled("  adding...", Style::default().fg(Color::Yellow)),
            ]),
            Row::Item {
                item,
                node,
                focused,
            } => {
                let check = if node.checkbox.checked { "[x] " } else { "[ ] " };
                let text_style = if node.readonly {
                    Style::default()
                } else if *focused {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                let mut spans = vec![
                    Span::raw(check),
                    Span::styled(item.text.as_str(), text_style),
                ];
                if let Some(controls) = node.controls
                    && !controls.hidden
                {
                    let label = if controls.busy {
                        "  saving..."
                    } else {
                        "  [Enter save] [Esc cancel]"
                    };
                    spans.push(Span::styled(label, Style::default().fg(Color::Gray)));
                }
                Line::from(spans)
            }
        };
        items.push(ListItem::new(line));
    }

    let title = format!("Todos ({})", app.page.registry().len());
    let mut state = ListState::default();
    if !app.page.registry().is_empty() && app.field != ActiveField::NewTodo {
        state.select(Some(pending + app.selected));
    }
    let list = List::new(items)
        .block(Block::default().borders(Borders::NONE).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut state);
}
