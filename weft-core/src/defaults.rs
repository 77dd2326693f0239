//! Baseline documents for freshly created nodes.

use alloc::string::{String, ToString};
use chrono::NaiveDate;
use weft_common::{Mapping, Value};

pub const DEFAULT_WEAVE_ICON: &str = "Folder";
pub const DEFAULT_LOOM_ICON: &str = "Box";
pub const DEFAULT_DIFFICULTY: &str = "beginner";

/// Turns a slug into a title: `my-weave` becomes `My Weave`.
///
/// Hyphens become spaces and the first letter of every word is upper-cased.
/// The rest of each word is left as it is.
#[must_use]
pub fn display_name(slug: &str) -> String {
    let mut out = String::with_capacity(slug.len());
    let mut in_word = false;
    for c in slug.chars() {
        let c = if c == '-' { ' ' } else { c };
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !in_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        in_word = is_word;
    }
    out
}

fn base_config(name: &str, icon: &'static str, metadata: Mapping<'static>) -> Mapping<'static> {
    let style: Mapping = [("icon", icon)].into_iter().collect();
    let mut doc = Mapping::new();
    doc.insert("name", display_name(name));
    doc.insert("description", "");
    doc.insert("style", style);
    doc.insert("metadata", metadata);
    doc.insert("order", 0);
    doc.insert("featured", false);
    doc.insert("hidden", false);
    doc
}

/// Document for a new weave, stamped with its creation date.
#[must_use]
pub fn default_weave_config(name: &str, created: NaiveDate) -> Mapping<'static> {
    let mut metadata = Mapping::new();
    metadata.insert("createdAt", Value::from(created.to_string()));
    base_config(name, DEFAULT_WEAVE_ICON, metadata)
}

#[must_use]
pub fn default_loom_config(name: &str) -> Mapping<'static> {
    let metadata: Mapping = [("difficulty", DEFAULT_DIFFICULTY)].into_iter().collect();
    base_config(name, DEFAULT_LOOM_ICON, metadata)
}
