use std::collections::BTreeMap;
use std::fmt;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::templates;

const FLUTTER_LAYOUT: &str = "flutter/layout.toml";

/// One entry of a directory skeleton.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
    /// An empty file.
    File,
    /// A directory and its children, keyed by name.
    Directory(BTreeMap<String, Node>),
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Directory => "directory",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File => NodeKind::File,
            Node::Directory(_) => NodeKind::Directory,
        }
    }
}

/// On-disk shape of a layout document: every table is a directory and the
/// reserved `files` key lists the empty files it holds.
#[derive(Debug, Deserialize)]
struct Layout {
    #[serde(default)]
    files: Vec<String>,
    #[serde(flatten)]
    directories: BTreeMap<String, Layout>,
}

impl Layout {
    fn into_node(self) -> Result<Node> {
        let mut children = BTreeMap::new();
        for (name, layout) in self.directories {
            let child = layout
                .into_node()
                .with_context(|| format!("in directory `{}`", name))?;
            children.insert(name, child);
        }
        for name in self.files {
            if children.contains_key(&name) {
                bail!("`{}` is listed more than once", name);
            }
            children.insert(name, Node::File);
        }
        Ok(Node::Directory(children))
    }
}

/// Parse a layout document into a directory node rooted at the document itself.
pub fn parse_layout(raw: &str) -> Result<Node> {
    let layout: Layout = toml::from_str(raw).context("parsing layout document")?;
    layout.into_node()
}

/// The Flutter `lib/` skeleton compiled into the binary.
pub fn flutter_layout() -> Result<Node> {
    let raw = templates::get_string(FLUTTER_LAYOUT)?;
    parse_layout(&raw).with_context(|| format!("loading embedded layout `{}`", FLUTTER_LAYOUT))
}
