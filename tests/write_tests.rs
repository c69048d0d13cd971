use conftext::{conf, render, to_string, to_string_with_style, Error, Style, Table, Value};
use std::io;

fn rendered(value: &Value, style: &Style) -> String {
    to_string_with_style(value, style).unwrap()
}

#[test]
fn test_flat_single_entry_table() {
    let value = conf!({ "a": 1 });
    let style = Style::new()
        .with_indent_tables(false)
        .with_newline_before_table(false);
    assert_eq!(rendered(&value, &style), r#"{"a": 1}"#);
}

#[test]
fn test_default_style_nested() {
    let value = conf!({
        "server": {
            "host": "localhost",
            "port": 8080
        }
    });
    let expected = "{\n\t\"server\": {\n\t\t\"host\": \"localhost\",\n\t\t\"port\": 8080\n\t}\n}";
    assert_eq!(to_string(&value).unwrap(), expected);
}

#[test]
fn test_custom_indent_and_newline() {
    let value = conf!({ "a": 1, "b": 2 });
    let style = Style::new().with_indent("  ").with_newline("\r\n");
    assert_eq!(
        rendered(&value, &style),
        "{\r\n  \"a\": 1,\r\n  \"b\": 2\r\n}"
    );
}

#[test]
fn test_empty_table_is_invariant_under_style() {
    let value = conf!({});
    let styles = [
        Style::new(),
        Style::new().with_indent_tables(false),
        Style::new().with_newline_before_table(true),
        Style::new()
            .with_indent("    ")
            .with_newline("\r\n")
            .with_newline_before_table(true)
            .with_newline_before_list(true)
            .with_space_lists(true),
    ];
    for style in styles {
        assert_eq!(rendered(&value, &style), "{}");
    }
}

#[test]
fn test_empty_list_is_invariant_under_style() {
    let value = conf!({ "xs": [] });
    let flat = Style::new().with_indent_tables(false);
    assert_eq!(rendered(&value, &flat), r#"{"xs": []}"#);

    let fancy = Style::new()
        .with_indent_tables(false)
        .with_indent_lists(true)
        .with_newline_before_list(true);
    assert_eq!(rendered(&value, &fancy), r#"{"xs": []}"#);
}

#[test]
fn test_space_lists_without_indent() {
    let value = conf!({ "xs": [1, 2] });
    let style = Style::new()
        .with_indent_tables(false)
        .with_indent_lists(false)
        .with_space_lists(true);
    assert_eq!(rendered(&value, &style), r#"{"xs": [1, 2]}"#);
}

#[test]
fn test_space_lists_composes_with_indent() {
    let value = conf!({ "xs": [1, 2] });
    let style = Style::new()
        .with_indent_tables(false)
        .with_indent_lists(true)
        .with_space_lists(true);
    // Both the space and the newline follow the separator.
    assert_eq!(rendered(&value, &style), "{\"xs\": [\n\t1, \n\t2\n]}");
}

#[test]
fn test_newline_before_table() {
    let value = conf!({ "inner": { "a": 1 } });
    let style = Style::new()
        .with_indent_tables(true)
        .with_newline_before_table(true);
    // Every non-empty table's brace moves to its own line at the current
    // indentation, the root included.
    let expected = "\n{\n\t\"inner\": \n\t{\n\t\t\"a\": 1\n\t}\n}";
    assert_eq!(rendered(&value, &style), expected);
}

#[test]
fn test_newline_before_list() {
    let value = conf!({ "xs": [1] });
    let style = Style::new()
        .with_indent_tables(false)
        .with_indent_lists(false)
        .with_newline_before_list(true);
    assert_eq!(rendered(&value, &style), "{\"xs\": \n[1]}");
}

#[test]
fn test_scalar_dispatch() {
    let value = conf!({
        "n": null,
        "t": true,
        "f": false,
        "i": -7,
        "fl": 2.5,
        "s": "text"
    });
    let style = Style::new().with_indent_tables(false);
    assert_eq!(
        rendered(&value, &style),
        r#"{"n": null,"t": true,"f": false,"i": -7,"fl": 2.5,"s": "text"}"#
    );
}

#[test]
fn test_keys_are_always_quoted() {
    let value = conf!({ "bare": 1 });
    let style = Style::new().with_indent_tables(false);
    assert_eq!(rendered(&value, &style), r#"{"bare": 1}"#);
}

#[test]
fn test_key_escaping() {
    let mut table = Table::new();
    table.insert("wei\"rd\\key".to_string(), Value::from(1));
    let style = Style::new().with_indent_tables(false);
    assert_eq!(
        rendered(&Value::Table(table), &style),
        r#"{"wei\"rd\\key": 1}"#
    );
}

#[test]
fn test_string_escaping() {
    let value = conf!({ "s": "\"\\" });
    let style = Style::new().with_indent_tables(false);
    assert_eq!(rendered(&value, &style), r#"{"s": "\"\\"}"#);
}

#[test]
fn test_plain_ascii_passes_through() {
    let value = conf!({ "s": "JustLetters" });
    let style = Style::new().with_indent_tables(false);
    assert_eq!(rendered(&value, &style), r#"{"s": "JustLetters"}"#);
}

#[test]
fn test_non_ascii_is_not_escaped() {
    let value = conf!({ "s": "héllo ☃" });
    let style = Style::new().with_indent_tables(false);
    assert_eq!(rendered(&value, &style), "{\"s\": \"héllo ☃\"}");
}

#[test]
fn test_insertion_order_is_emission_order() {
    let mut table = Table::new();
    table.insert("zulu".to_string(), Value::from(1));
    table.insert("alpha".to_string(), Value::from(2));
    let style = Style::new().with_indent_tables(false);
    assert_eq!(
        rendered(&Value::Table(table), &style),
        r#"{"zulu": 1,"alpha": 2}"#
    );
}

#[test]
fn test_number_text_is_not_reformatted() {
    let value = conf!({ "i": 10, "f": 10.25 });
    let style = Style::new().with_indent_tables(false);
    assert_eq!(rendered(&value, &style), r#"{"i": 10,"f": 10.25}"#);
}

#[test]
fn test_deeply_nested_tables_terminate() {
    let mut value = conf!({ "leaf": 0 });
    for _ in 0..1000 {
        let mut table = Table::new();
        table.insert("child".to_string(), value);
        value = Value::Table(table);
    }
    let style = Style::new()
        .with_indent_tables(false)
        .with_indent_lists(false);
    let text = rendered(&value, &style);
    assert_eq!(text.matches('{').count(), 1001);
    assert_eq!(text.matches('}').count(), 1001);
}

#[test]
fn test_deeply_nested_lists_terminate() {
    let mut value = Value::from(0);
    for _ in 0..1000 {
        value = Value::List(vec![value]);
    }
    let mut root = Table::new();
    root.insert("deep".to_string(), value);
    let style = Style::new()
        .with_indent_tables(false)
        .with_indent_lists(false);
    let text = rendered(&Value::Table(root), &style);
    assert_eq!(text.matches('[').count(), 1000);
    assert_eq!(text.matches(']').count(), 1000);
}

#[test]
fn test_non_table_roots_are_rejected() {
    for value in [
        Value::Null,
        Value::from(true),
        Value::from(1),
        Value::from("s"),
        Value::List(vec![Value::from(1)]),
    ] {
        match to_string(&value) {
            Err(Error::InvalidRoot(kind)) => assert_eq!(kind, value.kind()),
            other => panic!("expected InvalidRoot for {:?}, got {:?}", value, other),
        }
    }
}

struct FailAfter {
    remaining: usize,
}

impl io::Write for FailAfter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining < buf.len() {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "sink closed"));
        }
        self.remaining -= buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sink_failure_propagates() {
    let value = conf!({ "key": "a long enough value to overrun the sink" });
    let sink = FailAfter { remaining: 4 };
    match conftext::to_writer(sink, &value) {
        Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::WriteZero),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_render_into_io_sink() {
    let value = conf!({ "a": [1, 2] });
    let mut buffer = Vec::new();
    {
        let mut sink = conftext::IoSink::new(&mut buffer);
        render(&value, &Style::new(), &mut sink).unwrap();
    }
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        to_string(&value).unwrap()
    );
}

#[test]
fn test_serde_json_interop() {
    let value = conf!({
        "name": "Alice",
        "age": 30,
        "tags": ["admin", "user"],
        "extra": null
    });

    let json = serde_json::to_string(&value).unwrap();
    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_serde_json_preserves_order() {
    let value = conf!({ "zulu": 1, "alpha": 2, "mike": 3 });
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"zulu":1,"alpha":2,"mike":3}"#);
}
