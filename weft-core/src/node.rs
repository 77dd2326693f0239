use alloc::string::{String, ToString};
use chrono::NaiveDate;
use core::fmt::{Display, Formatter};
use core::str::FromStr;
use log::debug;
use weft_common::{Mapping, WeftError};

use crate::defaults::{default_loom_config, default_weave_config};
use crate::treebuild::parse;

/// The two kinds of node that carry a configuration document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Folder-like grouping, configured by `weave.yaml`.
    Weave,
    /// Leaf unit, configured by `loom.yaml`.
    Loom,
}

impl NodeKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Weave => "weave",
            NodeKind::Loom => "loom",
        }
    }

    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            NodeKind::Weave => "weave.yaml",
            NodeKind::Loom => "loom.yaml",
        }
    }

    /// Baseline document for a new node of this kind. Only weaves record
    /// `created`.
    #[must_use]
    pub fn default_config(self, name: &str, created: NaiveDate) -> Mapping<'static> {
        match self {
            NodeKind::Weave => default_weave_config(name, created),
            NodeKind::Loom => default_loom_config(name),
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = WeftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weave" => Ok(NodeKind::Weave),
            "loom" => Ok(NodeKind::Loom),
            _ => Err(WeftError::UnknownNodeKind(s.to_string())),
        }
    }
}

/// Repository-relative path of the configuration document of a node.
#[must_use]
pub fn config_path(node_path: &str, kind: NodeKind) -> String {
    let dir = node_path.trim_end_matches('/');
    if dir.is_empty() {
        return kind.file_name().to_string();
    }
    let mut path = String::with_capacity(dir.len() + 1 + kind.file_name().len());
    path.push_str(dir);
    path.push('/');
    path.push_str(kind.file_name());
    path
}

/// Where raw documents come from, typically a remote repository.
pub trait DocumentSource {
    /// Raw text of the document at `path`, `None` when there is none.
    fn fetch(&self, path: &str) -> Option<String>;
}

/// Fetches and parses the configuration document of a node. A missing
/// document is an ordinary outcome and gives `None`.
pub fn load_node_config<S>(source: &S, node_path: &str, kind: NodeKind) -> Option<Mapping<'static>>
where
    S: DocumentSource + ?Sized,
{
    let path = config_path(node_path, kind);
    let Some(text) = source.fetch(&path) else {
        debug!("no {kind} config at `{path}`");
        return None;
    };
    Some(parse(&text).into_owned())
}
