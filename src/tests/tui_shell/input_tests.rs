use super::*;

#[test]
fn edits_at_the_cursor() {
    let mut input = Input::default();
    for c in "milk".chars() {
        input.insert_char(c);
    }
    input.move_left();
    input.move_left();
    input.insert_char('-');
    assert_eq!(input.buf, "mi-lk");

    input.backspace();
    input.delete();
    assert_eq!(input.buf, "mik");
    assert_eq!(input.cursor, 2);
}

#[test]
fn cursor_counts_chars_not_bytes() {
    let mut input = Input::default();
    input.set("café".to_string());
    assert_eq!(input.cursor, 4);

    input.backspace();
    assert_eq!(input.buf, "caf");

    input.home();
    input.insert_char('é');
    input.end();
    input.move_right();
    assert_eq!(input.buf, "écaf");
    assert_eq!(input.cursor, 4);
}
