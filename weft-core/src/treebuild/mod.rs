//! Builds a [`Mapping`] out of classified lines with a stack of indentation
//! frames.
//!
//! A frame does not hold a reference into the tree. It holds the path of
//! keys and sequence indices leading to the mapping it has open, and every
//! line resolves that path from the root. A value replaced under an open
//! frame (a nested block turned into a sequence, say) therefore makes the
//! frame unreachable, and lines written into it are dropped.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use log::{debug, trace};
use weft_common::{unquote, Mapping, Sequence, Value};

use crate::reader::{Line, LineKind, LineReader};

/// Width a nested block is expected to be indented by.
const BLOCK_INDENT: usize = 2;

#[derive(Clone, Debug, PartialEq)]
enum Step<'input> {
    Key(Cow<'input, str>),
    Index(usize),
}

#[derive(Debug)]
struct Frame<'input> {
    path: Vec<Step<'input>>,
    indent: usize,
    /// Key of the last nested block opened in this frame, the target of
    /// `- item` lines written at this frame's own indentation.
    block_key: Option<Cow<'input, str>>,
}

impl Frame<'_> {
    fn root() -> Self {
        Frame {
            path: Vec::new(),
            indent: 0,
            block_key: None,
        }
    }
}

/// Parses `input` into a document. Never fails: lines that do not fit are
/// skipped.
#[must_use]
pub fn parse(input: &str) -> Mapping<'_> {
    ConfigLoader::load_from(input)
}

pub struct ConfigLoader<'input> {
    root: Value<'input>,
    frames: Vec<Frame<'input>>,
}

impl Default for ConfigLoader<'_> {
    fn default() -> Self {
        ConfigLoader {
            root: Value::Mapping(Mapping::new()),
            frames: alloc::vec![Frame::root()],
        }
    }
}

impl<'input> ConfigLoader<'input> {
    #[must_use]
    pub fn load_from(input: &'input str) -> Mapping<'input> {
        let mut loader = ConfigLoader::default();
        for line in LineReader::new(input) {
            loader.feed(line);
        }
        loader.into_document()
    }

    #[must_use]
    pub fn into_document(self) -> Mapping<'input> {
        match self.root {
            Value::Mapping(m) => m,
            _ => Mapping::new(),
        }
    }

    pub fn feed(&mut self, line: Line<'input>) {
        self.close_frames(line.indent);
        match line.kind {
            LineKind::Item(raw) => self.push_item(line, raw),
            LineKind::ItemMarker => self.open_item(line),
            LineKind::Entry { key, value } => self.insert_entry(line, key, value),
            LineKind::Unknown(content) => {
                debug!("line {}: skipped `{content}`, neither entry nor item", line.number);
            }
        }
    }

    fn close_frames(&mut self, indent: usize) {
        while self.frames.len() > 1 {
            match self.frames.last() {
                Some(top) if indent < top.indent => {
                    trace!("closing frame at indent {}", top.indent);
                    self.frames.pop();
                }
                _ => break,
            }
        }
    }

    fn top(&mut self) -> &mut Frame<'input> {
        // the root frame is never popped
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    fn active_mapping(&mut self) -> Option<&mut Mapping<'input>> {
        let path = &self.frames.last()?.path;
        resolve(&mut self.root, path)?.as_mapping_mut()
    }

    fn insert_entry(&mut self, line: Line<'input>, key: &'input str, raw: &'input str) {
        let key = Cow::Borrowed(key);
        let opens_block = matches!(raw, "" | "|" | ">");
        let value = if opens_block {
            Value::Mapping(Mapping::new())
        } else if is_inline_sequence(raw) {
            Value::Sequence(inline_sequence(raw))
        } else {
            Value::from_scalar(raw)
        };

        let Some(mapping) = self.active_mapping() else {
            debug!("line {}: skipped `{key}`, its parent is no longer a mapping", line.number);
            return;
        };
        mapping.insert(key.clone(), value);

        let top = self.top();
        if opens_block {
            let mut path = top.path.clone();
            top.block_key = Some(key.clone());
            path.push(Step::Key(key));
            trace!("opening frame at indent {}", line.indent + BLOCK_INDENT);
            self.frames.push(Frame {
                path,
                indent: line.indent + BLOCK_INDENT,
                block_key: None,
            });
        } else {
            top.block_key = None;
        }
    }

    /// Parent path and key of the sequence that `- item` lines append to.
    ///
    /// A block key opened in the top frame wins. Otherwise the key that
    /// opened the top frame itself is used.
    fn sequence_target(&self) -> Option<(Vec<Step<'input>>, Cow<'input, str>)> {
        let top = self.frames.last()?;
        if let Some(key) = &top.block_key {
            return Some((top.path.clone(), key.clone()));
        }
        match top.path.split_last() {
            Some((Step::Key(key), parent)) => Some((parent.to_vec(), key.clone())),
            _ => None,
        }
    }

    /// Resolves the current sequence, turning whatever value sits under its
    /// key into an empty sequence if needed. Returns the sequence's own path.
    fn target_sequence(&mut self) -> Option<(Vec<Step<'input>>, &mut Sequence<'input>)> {
        let (mut path, key) = self.sequence_target()?;
        let parent = resolve(&mut self.root, &path)?.as_mapping_mut()?;
        let slot = parent.get_or_insert_with(key.clone(), || Value::Sequence(Vec::new()));
        if !matches!(slot, Value::Sequence(_)) {
            *slot = Value::Sequence(Vec::new());
        }
        path.push(Step::Key(key));
        match slot {
            Value::Sequence(items) => Some((path, items)),
            _ => None,
        }
    }

    fn push_item(&mut self, line: Line<'input>, raw: &'input str) {
        match self.target_sequence() {
            Some((_, items)) => items.push(Value::String(unquote(raw))),
            None => debug!("line {}: skipped item `{raw}`, no open sequence", line.number),
        }
    }

    fn open_item(&mut self, line: Line<'input>) {
        let Some((mut path, items)) = self.target_sequence() else {
            debug!("line {}: skipped `-`, no open sequence", line.number);
            return;
        };
        path.push(Step::Index(items.len()));
        items.push(Value::Mapping(Mapping::new()));
        trace!("opening item frame at indent {}", line.indent + BLOCK_INDENT);
        self.frames.push(Frame {
            path,
            indent: line.indent + BLOCK_INDENT,
            block_key: None,
        });
    }
}

fn resolve<'v, 'input>(
    mut node: &'v mut Value<'input>,
    path: &[Step<'input>],
) -> Option<&'v mut Value<'input>> {
    for step in path {
        node = match (node, step) {
            (Value::Mapping(m), Step::Key(key)) => m.get_mut(key)?,
            (Value::Sequence(s), Step::Index(i)) => s.get_mut(*i)?,
            _ => return None,
        };
    }
    Some(node)
}

#[cfg_attr(not(feature = "no-inline"), inline)]
fn is_inline_sequence(raw: &str) -> bool {
    raw.len() >= 2 && raw.starts_with('[') && raw.ends_with(']')
}

fn inline_sequence(raw: &str) -> Sequence<'_> {
    raw[1..raw.len() - 1]
        .split(',')
        .map(|item| unquote(item.trim()))
        .filter(|item| !item.is_empty())
        .map(Value::String)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec;

    fn strings(items: &[&'static str]) -> Value<'static> {
        Value::Sequence(items.iter().map(|s| Value::from(*s)).collect())
    }

    #[test]
    fn scalars_are_coerced() {
        let doc = parse("a: true\nb: 42\nc: \"hi there\"\nd: 2.5\ne: plain text");
        assert_eq!(doc.get("a"), Some(&Value::Bool(true)));
        assert_eq!(doc.get("b"), Some(&Value::Integer(42)));
        assert_eq!(doc.get("c"), Some(&Value::from("hi there")));
        assert_eq!(doc.get("d"), Some(&Value::FloatingPoint(2.5)));
        assert_eq!(doc.get("e"), Some(&Value::from("plain text")));
    }

    #[test]
    fn nested_blocks() {
        let doc = parse("style:\n  icon: Box\nmetadata:\n  difficulty: beginner\norder: 1");
        assert_eq!(doc.get_path(&["style", "icon"]), Some(&Value::from("Box")));
        assert_eq!(
            doc.get_path(&["metadata", "difficulty"]),
            Some(&Value::from("beginner"))
        );
        assert_eq!(doc.get("order"), Some(&Value::Integer(1)));
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn block_markers_open_mappings() {
        let doc = parse("summary: |\n  short: yes\nnotes: >\nlast: 1");
        assert_eq!(doc.get_path(&["summary", "short"]), Some(&Value::from("yes")));
        assert_eq!(doc.get("notes"), Some(&Value::Mapping(Mapping::new())));
        assert_eq!(doc.get("last"), Some(&Value::Integer(1)));
    }

    #[test]
    fn inline_sequences() {
        let doc = parse("tags: [a, 'b', \"c\", , 1]\nempty: []");
        assert_eq!(doc.get("tags"), Some(&strings(&["a", "b", "c", "1"])));
        assert_eq!(doc.get("empty"), Some(&Value::Sequence(vec![])));
    }

    #[test]
    fn block_sequences() {
        let doc = parse("tags:\n  - alpha\n  - \"beta\"\nafter: 1");
        assert_eq!(doc.get("tags"), Some(&strings(&["alpha", "beta"])));
        assert_eq!(doc.get("after"), Some(&Value::Integer(1)));
    }

    #[test]
    fn zero_indented_sequence() {
        let doc = parse("tags:\n- alpha\n- beta\nafter: 1\n- stray");
        assert_eq!(doc.get("tags"), Some(&strings(&["alpha", "beta"])));
        assert_eq!(doc.get("after"), Some(&Value::Integer(1)));
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn nested_zero_indented_sequence() {
        let doc = parse("outer:\n  list:\n  - a\n  other: 1");
        assert_eq!(doc.get_path(&["outer", "list"]), Some(&strings(&["a"])));
        assert_eq!(doc.get_path(&["outer", "other"]), Some(&Value::Integer(1)));
    }

    #[test]
    fn items_replace_block_value() {
        // `tags` opens a mapping, the item turns it into a sequence and the
        // frame that mapping had is left dangling
        let doc = parse("tags:\n  x: 1\n  - a\n  y: 2");
        assert_eq!(doc.get("tags"), Some(&strings(&["a"])));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn sequence_of_mappings() {
        let doc = parse("links:\n  -\n    title: Home\n    url: \"https://x.io\"\n  -\n    title: Docs\nend: true");
        let expected_first: Mapping = [("title", "Home"), ("url", "https://x.io")]
            .into_iter()
            .collect();
        let expected_second: Mapping = [("title", "Docs")].into_iter().collect();
        assert_eq!(
            doc.get("links"),
            Some(&Value::Sequence(vec![
                Value::Mapping(expected_first),
                Value::Mapping(expected_second)
            ]))
        );
        assert_eq!(doc.get("end"), Some(&Value::Bool(true)));
    }

    #[test]
    fn item_with_colon_stays_flat() {
        let doc = parse("links:\n  - title: Home");
        assert_eq!(doc.get("links"), Some(&strings(&["title: Home"])));
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let doc = parse("a: 1\nb: 2\na: 3");
        assert_eq!(doc.get("a"), Some(&Value::Integer(3)));
        assert_eq!(doc.iter().next().map(|e| &*e.key), Some("a"));
    }

    #[test]
    fn tolerates_garbage() {
        assert!(parse("").is_empty());
        assert!(parse("just words\n- orphan\n-\n:::").is_empty());
        let doc = parse("ok: 1\nnot a pair\n   ???\nalso: 2");
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn borrows_from_input() {
        let doc = parse("name: plain");
        assert!(matches!(doc.get("name"), Some(Value::String(Cow::Borrowed(_)))));
    }
}
