#![no_std]
extern crate alloc;
extern crate core;
extern crate weft_common;

pub use defaults::{default_loom_config, default_weave_config, display_name};
pub use draft::{Draft, DraftStore, KeyValueStore, MemoryStore};
pub use emitter::{serialize, serialize_value, ConfigEmitter};
pub use node::{config_path, load_node_config, DocumentSource, NodeKind};
pub use treebuild::{parse, ConfigLoader};
pub use weft_common::{Entry, Mapping, Sequence, Value, WeftError, WeftResult};

pub mod defaults;
pub mod draft;
pub mod emitter;
pub mod node;
pub mod reader;
pub mod treebuild;
