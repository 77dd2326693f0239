//! Unsaved edits of node documents, kept in an injected key/value store.
//!
//! A draft is stored as a configuration document of its own:
//!
//! ```yaml
//! configPath: weaves/rust/weave.yaml
//! nodeType: weave
//! isDirty: true
//! lastModified: 1760572800000
//! original:
//!   name: Rust
//! edited:
//!   name: Rust Basics
//! ```

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use hashbrown::HashMap;
use log::debug;
use weft_common::{Mapping, Value, WeftError, WeftResult};

use crate::emitter::serialize;
use crate::node::NodeKind;
use crate::treebuild::parse;

pub const DEFAULT_DRAFT_PREFIX: &str = "weft-draft:";

/// String keyed storage for drafts, e.g. browser local storage or a table.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns [`WeftError::Store`] when the value could not be kept.
    fn set(&mut self, key: &str, value: String) -> WeftResult<()>;

    /// Returns whether a value was present.
    fn delete(&mut self, key: &str) -> bool;
}

/// Process local [`KeyValueStore`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        MemoryStore::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> WeftResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Draft<'a> {
    /// Document as last loaded from the source.
    pub original: Mapping<'a>,
    pub edited: Mapping<'a>,
    pub is_dirty: bool,
    pub config_path: String,
    pub node_type: NodeKind,
    /// Milliseconds since the epoch, as supplied by the caller.
    pub last_modified: i64,
}

impl<'a> Draft<'a> {
    /// A clean draft, `edited` starts out equal to `original`.
    pub fn new(node_type: NodeKind, config_path: String, original: Mapping<'a>, now: i64) -> Self {
        Draft {
            edited: original.clone(),
            original,
            is_dirty: false,
            config_path,
            node_type,
            last_modified: now,
        }
    }

    /// Replaces the edited document. The draft is dirty while it differs from
    /// the original.
    pub fn edit(&mut self, edited: Mapping<'a>, now: i64) {
        self.is_dirty = edited != self.original;
        self.edited = edited;
        self.last_modified = now;
    }

    #[must_use]
    pub fn to_document(&self) -> Mapping<'_> {
        let mut doc = Mapping::new();
        doc.insert("configPath", self.config_path.as_str());
        doc.insert("nodeType", self.node_type.as_str());
        doc.insert("isDirty", self.is_dirty);
        doc.insert("lastModified", self.last_modified);
        doc.insert("original", self.original.clone());
        doc.insert("edited", self.edited.clone());
        doc
    }

    /// Reads back a document written by [`Draft::to_document`]. `key` only
    /// labels errors.
    ///
    /// # Errors
    /// [`WeftError::MalformedDraft`] when `configPath` or `nodeType` are
    /// missing or `nodeType` is not a node kind.
    pub fn from_document(key: &str, mut doc: Mapping<'_>) -> WeftResult<Draft<'static>> {
        let malformed = |reason| WeftError::MalformedDraft {
            key: key.to_string(),
            reason,
        };
        let config_path = match doc.get("configPath") {
            Some(Value::String(path)) => path.to_string(),
            _ => return Err(malformed("missing configPath")),
        };
        let node_type = match doc.get("nodeType") {
            Some(Value::String(kind)) => kind
                .parse::<NodeKind>()
                .map_err(|_| malformed("unknown nodeType"))?,
            _ => return Err(malformed("missing nodeType")),
        };
        let is_dirty = doc.get("isDirty").and_then(Value::as_bool).unwrap_or(false);
        let last_modified = doc.get("lastModified").and_then(Value::as_i64).unwrap_or(0);
        let original = take_mapping(&mut doc, "original");
        let edited = take_mapping(&mut doc, "edited");
        Ok(Draft {
            original,
            edited,
            is_dirty,
            config_path,
            node_type,
            last_modified,
        })
    }
}

fn take_mapping(doc: &mut Mapping<'_>, key: &str) -> Mapping<'static> {
    match doc.remove(key) {
        Some(Value::Mapping(m)) => m.into_owned(),
        _ => Mapping::new(),
    }
}

/// Drafts keyed by node path on top of any [`KeyValueStore`].
pub struct DraftStore<S> {
    store: S,
    prefix: Cow<'static, str>,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S) -> Self {
        DraftStore {
            store,
            prefix: Cow::Borrowed(DEFAULT_DRAFT_PREFIX),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn key(&self, node_path: &str) -> String {
        let mut key = String::with_capacity(self.prefix.len() + node_path.len());
        key.push_str(&self.prefix);
        key.push_str(node_path);
        key
    }

    /// # Errors
    /// Whatever the underlying store reports.
    pub fn save(&mut self, node_path: &str, draft: &Draft) -> WeftResult<()> {
        let key = self.key(node_path);
        debug!("saving draft `{key}` (dirty: {})", draft.is_dirty);
        self.store.set(&key, serialize(&draft.to_document()))
    }

    /// The draft stored for `node_path`, `None` when there is none.
    ///
    /// # Errors
    /// [`WeftError::MalformedDraft`] when the stored body cannot be read back.
    pub fn load(&self, node_path: &str) -> WeftResult<Option<Draft<'static>>> {
        let key = self.key(node_path);
        let Some(body) = self.store.get(&key) else {
            return Ok(None);
        };
        debug!("loading draft `{key}`");
        Draft::from_document(&key, parse(&body)).map(Some)
    }

    /// Removes the draft for `node_path`, returns whether there was one.
    pub fn discard(&mut self, node_path: &str) -> bool {
        let key = self.key(node_path);
        debug!("discarding draft `{key}`");
        self.store.delete(&key)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
