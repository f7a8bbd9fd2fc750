use super::*;
use crate::sync::Ticket;

#[test]
fn materialized_node_starts_read_only_with_hidden_controls() {
    let item = TodoItem::new(TodoId::from("7"), "walk");
    let node = materialize(&item);
    assert_eq!(node.id, item.id);
    assert!(node.readonly);
    assert!(!node.checkbox.checked);
    assert!(!node.controls_visible());
    assert_eq!(node.controls.map(|c| c.busy), Some(false));
}

#[test]
fn enter_maps_by_target() {
    let enter = KeyPress::new(Key::Enter);
    let id = TodoId::from("a");
    assert_eq!(
        key_command(&KeyTarget::NewTodo, &enter, false),
        Some(Command::SubmitNew)
    );
    assert_eq!(
        key_command(&KeyTarget::Item(id.clone()), &enter, true),
        Some(Command::Save(id.clone()))
    );
    assert_eq!(key_command(&KeyTarget::Item(id), &enter, false), None);
}

#[test]
fn ime_keystrokes_never_map() {
    let id = TodoId::from("a");
    for key in [KeyPress::composing(Key::Enter), KeyPress::new(Key::Process)] {
        assert!(key.is_ime());
        assert_eq!(key_command(&KeyTarget::NewTodo, &key, false), None);
        assert_eq!(key_command(&KeyTarget::Item(id.clone()), &key, true), None);
    }
}

#[test]
fn non_enter_keys_do_not_map() {
    for key in [Key::Escape, Key::Char('x'), Key::Other] {
        assert_eq!(
            key_command(&KeyTarget::NewTodo, &KeyPress::new(key), false),
            None
        );
    }
}

#[test]
fn click_command_wires_each_control() {
    let id = TodoId::from("b");
    assert_eq!(click_command(&id, Control::Field), Command::Activate(id.clone()));
    assert_eq!(click_command(&id, Control::Save), Command::Save(id.clone()));
    assert_eq!(click_command(&id, Control::Cancel), Command::Cancel(id));
}

#[test]
fn rows_list_pending_first_then_items_in_order() {
    let mut registry = ItemRegistry::new();
    let mut document = Document::default();
    for (id, text) in [("1", "old"), ("2", "new")] {
        let item = TodoItem::new(TodoId::from(id), text);
        document.insert(materialize(&item));
        registry.prepend(item);
    }
    registry.add_tentative(Ticket(9), "pending".to_string());
    document.focus = Focus::Item(TodoId::from("1"));

    let rows = rows(&registry, &document);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], Row::Pending { text: "pending" });
    match (&rows[1], &rows[2]) {
        (
            Row::Item {
                item: first,
                focused: false,
                ..
            },
            Row::Item {
                item: second,
                focused: true,
                ..
            },
        ) => {
            assert_eq!(first.text, "new");
            assert_eq!(second.text, "old");
        }
        other => panic!("unexpected rows: {other:?}"),
    }
}
