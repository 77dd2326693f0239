pub mod consts;

use std::fmt::Write;
use weft_core::{parse, serialize, Mapping, Value};

///
/// Assert that for given input, the loader builds a document with the expected event trace
///
/// # Panics
///
///    Function panics if there is a difference between expected events string and one generated
///    from the parsed input.
pub fn assert_eq_doc(input: &str, events: &str) {
    let mut line = String::new();
    write_str_from_doc(&mut line, &parse(input));
    assert_eq!(line, events, "Error in case: {input}");
}

///
/// Assert that the input, once parsed, serializes to `expected`.
///
/// # Panics
///
///    Function panics if the serialized text differs from `expected`.
pub fn assert_emits(input: &str, expected: &str) {
    let actual = serialize(&parse(input));
    assert_eq!(actual, expected, "Error in case: {input}");
}

///
/// Assert that serializing a parsed document and parsing it again gives the same document.
///
/// # Panics
///
///    Function panics when the second parse differs, printing the intermediate text.
pub fn assert_round_trip(input: &str) {
    let first = parse(input);
    let text = serialize(&first);
    let second = parse(&text);
    assert_eq!(first, second, "Round trip changed document, emitted:\n{text}");
}

/// Writes one line per event, each preceded by a newline:
/// `+MAP`/`-MAP`, `+SEQ`/`-SEQ`, `=KEY name` and `=STR`, `=INT`, `=FLOAT`,
/// `=BOOL`, `=NULL` for scalars.
pub fn write_str_from_doc(line: &mut String, doc: &Mapping) {
    line.push_str("\n+MAP");
    for entry in doc {
        let _ = write!(line, "\n=KEY {}", entry.key);
        write_str_from_value(line, &entry.value);
    }
    line.push_str("\n-MAP");
}

fn write_str_from_value(line: &mut String, value: &Value) {
    let _ = match value {
        Value::Null => write!(line, "\n=NULL"),
        Value::String(s) => write!(line, "\n=STR {}", escape_text(s)),
        Value::Bool(b) => write!(line, "\n=BOOL {b}"),
        Value::Integer(i) => write!(line, "\n=INT {i}"),
        Value::FloatingPoint(f) => write!(line, "\n=FLOAT {f:?}"),
        Value::Sequence(items) => {
            line.push_str("\n+SEQ");
            for item in items {
                write_str_from_value(line, item);
            }
            write!(line, "\n-SEQ")
        }
        Value::Mapping(m) => {
            write_str_from_doc(line, m);
            Ok(())
        }
    };
}

/// Makes line breaks, tabs and backslashes in a scalar visible, so each event
/// stays on one line.
pub fn escape_text(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\\' => output.push_str("\\\\"),
            _ => output.push(c),
        }
    }
    output
}
