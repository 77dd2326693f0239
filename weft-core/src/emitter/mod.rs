use alloc::string::String;
use core::fmt;
use weft_common::{would_coerce, Mapping, Value};

/// Writes documents back out in the block form the loader reads.
///
/// Output lines are separated by `\n` with no trailing newline. Null values
/// are left out.
#[allow(clippy::module_name_repetitions)]
pub struct ConfigEmitter<'a> {
    writer: &'a mut dyn fmt::Write,
    best_indent: usize,
    level: usize,
    first_line: bool,
}

/// A convenience alias for emitter functions that may fail without returning a value.
pub type EmitResult = Result<(), fmt::Error>;

/// Serializes `doc` with two spaces per nesting level.
#[must_use]
pub fn serialize(doc: &Mapping) -> String {
    let mut output = String::new();
    // fmt::Write for String never fails
    let _ = ConfigEmitter::new(&mut output).dump(doc);
    output
}

/// Serializes any value: mappings and sequences as blocks, scalars on a
/// single line.
#[must_use]
pub fn serialize_value(value: &Value) -> String {
    let mut output = String::new();
    let _ = ConfigEmitter::new(&mut output).dump_value(value);
    output
}

// escapes the characters the loader unescapes in double quoted scalars
fn escape_str(wr: &mut dyn fmt::Write, v: &str) -> EmitResult {
    wr.write_str("\"")?;

    let bytes = v.as_bytes();
    let mut start = 0;

    while start < bytes.len() {
        let Some(i) = bytes[start..]
            .iter()
            .position(|&b| matches!(b, b'"' | b'\\' | b'\n' | b'\r' | b'\t'))
        else {
            wr.write_str(&v[start..])?;
            break;
        };

        let i = start + i;

        if start < i {
            wr.write_str(&v[start..i])?;
        }

        let escaped = match bytes[i] {
            b'"' => "\\\"",
            b'\\' => "\\\\",
            b'\n' => "\\n",
            b'\r' => "\\r",
            b'\t' => "\\t",
            _ => unreachable!(),
        };

        wr.write_str(escaped)?;
        start = i + 1;
    }

    wr.write_str("\"")?;
    Ok(())
}

impl<'a> ConfigEmitter<'a> {
    /// Create a new emitter serializing into `writer`.
    pub fn new(writer: &'a mut dyn fmt::Write) -> Self {
        ConfigEmitter {
            writer,
            best_indent: 2,
            level: 0,
            first_line: true,
        }
    }

    /// Spaces per nesting level. The loader expects 2.
    pub fn indent(&mut self, best_indent: usize) -> &mut Self {
        self.best_indent = best_indent;
        self
    }

    /// Dump a document to the writer.
    /// # Errors
    /// Returns `fmt::Error` when the writer does.
    pub fn dump(&mut self, doc: &Mapping) -> EmitResult {
        self.level = 0;
        self.first_line = true;
        self.emit_mapping(doc)
    }

    /// Dump any value to the writer.
    /// # Errors
    /// Returns `fmt::Error` when the writer does.
    pub fn dump_value(&mut self, value: &Value) -> EmitResult {
        self.level = 0;
        self.first_line = true;
        match value {
            Value::Mapping(m) => self.emit_mapping(m),
            Value::Sequence(s) => self.emit_sequence(s),
            Value::Null => Ok(()),
            scalar => {
                self.start_line()?;
                self.emit_scalar(scalar)
            }
        }
    }

    fn start_line(&mut self) -> EmitResult {
        if !self.first_line {
            self.writer.write_str("\n")?;
        }
        self.first_line = false;
        for _ in 0..self.level * self.best_indent {
            self.writer.write_str(" ")?;
        }
        Ok(())
    }

    fn nested<F>(&mut self, emit: F) -> EmitResult
    where
        F: FnOnce(&mut Self) -> EmitResult,
    {
        self.level += 1;
        let result = emit(self);
        self.level -= 1;
        result
    }

    fn emit_mapping(&mut self, h: &Mapping) -> EmitResult {
        for entry in h {
            let key = &entry.key;
            match &entry.value {
                Value::Null => {}
                Value::Mapping(m) => {
                    self.start_line()?;
                    write!(self.writer, "{key}:")?;
                    self.nested(|e| e.emit_mapping(m))?;
                }
                Value::Sequence(s) if s.iter().all(Value::is_null) => {
                    self.start_line()?;
                    write!(self.writer, "{key}: []")?;
                }
                Value::Sequence(s) => {
                    self.start_line()?;
                    write!(self.writer, "{key}:")?;
                    self.nested(|e| e.emit_sequence(s))?;
                }
                scalar => {
                    self.start_line()?;
                    write!(self.writer, "{key}: ")?;
                    self.emit_scalar(scalar)?;
                }
            }
        }
        Ok(())
    }

    fn emit_sequence(&mut self, v: &[Value]) -> EmitResult {
        for item in v {
            match item {
                Value::Null => {}
                Value::Mapping(m) => {
                    self.start_line()?;
                    self.writer.write_str("-")?;
                    self.nested(|e| e.emit_mapping(m))?;
                }
                Value::Sequence(s) => {
                    self.start_line()?;
                    self.writer.write_str("-")?;
                    self.nested(|e| e.emit_sequence(s))?;
                }
                scalar => {
                    self.start_line()?;
                    self.writer.write_str("- ")?;
                    self.emit_scalar(scalar)?;
                }
            }
        }
        Ok(())
    }

    fn emit_scalar(&mut self, node: &Value) -> EmitResult {
        match node {
            Value::String(v) => {
                if need_quotes(v) {
                    escape_str(self.writer, v)
                } else {
                    self.writer.write_str(v)
                }
            }
            Value::Bool(true) => self.writer.write_str("true"),
            Value::Bool(false) => self.writer.write_str("false"),
            Value::Integer(v) => write!(self.writer, "{v}"),
            // `{:?}` keeps the fraction, so `1.0` is not read back as an integer
            Value::FloatingPoint(v) => write!(self.writer, "{v:?}"),
            Value::Null | Value::Sequence(_) | Value::Mapping(_) => Ok(()),
        }
    }
}

/// Check if the string requires quoting.
///
/// Strings containing `:`, `#`, or a line break, and strings with leading
/// or trailing whitespace are quoted. So is anything the loader would read
/// back differently when plain:
/// * the empty string, which would open a nested block;
/// * `true`, `false` and anything that parses as a number;
/// * strings starting with a quote character;
/// * strings shaped like an inline sequence, `[...]`;
/// * the block markers `|` and `>`.
#[must_use]
pub fn need_quotes(string: &str) -> bool {
    fn need_quotes_spaces(string: &str) -> bool {
        string.trim() != string
    }

    string.is_empty()
        || need_quotes_spaces(string)
        || string.contains(|character: char| matches!(character, ':' | '#' | '\n' | '\r'))
        || string.starts_with(|character: char| matches!(character, '"' | '\''))
        || (string.starts_with('[') && string.ends_with(']'))
        || matches!(string, "|" | ">")
        || would_coerce(string)
}
