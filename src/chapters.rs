//! Flattens the configured chapter list.
//!
//! Chapters may be grouped arbitrarily deep, with lists and titled
//! mappings mixed freely. Only the leaf entries name files; group titles
//! (mapping keys) are dropped.

use std::path::{Path, PathBuf};

use serde_yaml::Value;

/// Plain, ordered list of chapter file names in a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapters {
    names: Vec<String>,
    working_dir: PathBuf,
}

impl Chapters {
    pub fn new(chapters: &Value, working_dir: &Path) -> Self {
        let mut names = Vec::new();
        flatten_into(chapters, &mut names);
        Self {
            names,
            working_dir: working_dir.to_path_buf(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Chapter files joined onto the working directory.
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.names.iter().map(|name| self.working_dir.join(name))
    }
}

fn flatten_into(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Sequence(items) => items.iter().for_each(|item| flatten_into(item, out)),
        Value::Mapping(map) => map.values().for_each(|item| flatten_into(item, out)),
        Value::String(s) => out.push(s.clone()),
        Value::Number(n) => out.push(n.to_string()),
        Value::Bool(b) => out.push(b.to_string()),
        Value::Tagged(tagged) => flatten_into(&tagged.value, out),
        Value::Null => {}
    }
}
