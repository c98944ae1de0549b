//! Reproduce a [`Node`] tree on disk.
//!
//! Directories are created with all missing ancestors and are left alone when
//! they already exist. Files are created empty, truncating whatever regular
//! file was there. The first failure aborts the walk; nothing created before it
//! is removed.

use std::fs::{self, File};
use std::io;
use std::path::{self, Path, PathBuf};

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::tree::{Node, NodeKind};

#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("invalid path `{}`: {reason}", .path.display())]
    Path { path: PathBuf, reason: &'static str },
    #[error("failed to create {kind} {path}")]
    Filesystem {
        kind: NodeKind,
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MaterializeError {
    fn filesystem(kind: NodeKind, path: &Utf8Path, source: io::Error) -> Self {
        MaterializeError::Filesystem {
            kind,
            path: path.to_owned(),
            source,
        }
    }
}

/// Receives one call per path the materializer creates.
pub trait CreationLog {
    fn created(&self, kind: NodeKind, path: &Utf8Path);
}

/// Emits a `tracing` debug event per created path.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLog;

impl CreationLog for TracingLog {
    fn created(&self, kind: NodeKind, path: &Utf8Path) {
        debug!("created {kind}: {path}");
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl CreationLog for Silent {
    fn created(&self, _kind: NodeKind, _path: &Utf8Path) {}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlannedEntry {
    pub kind: NodeKind,
    pub path: Utf8PathBuf,
}

/// Create `node` at `base`, recursing into directories.
pub fn materialize(
    base: &Path,
    node: &Node,
    log: &dyn CreationLog,
) -> Result<(), MaterializeError> {
    let base = base_path(base)?;
    materialize_at(&base, node, log)
}

/// Every entry `materialize` would create, parents before children.
pub fn plan(base: &Path, node: &Node) -> Result<Vec<PlannedEntry>, MaterializeError> {
    let base = base_path(base)?;
    let mut entries = Vec::new();
    plan_at(&base, node, &mut entries)?;
    Ok(entries)
}

fn materialize_at(
    path: &Utf8Path,
    node: &Node,
    log: &dyn CreationLog,
) -> Result<(), MaterializeError> {
    match node {
        Node::File => {
            File::create(path)
                .map_err(|source| MaterializeError::filesystem(NodeKind::File, path, source))?;
            log.created(NodeKind::File, path);
        }
        Node::Directory(children) => {
            fs::create_dir_all(path)
                .map_err(|source| MaterializeError::filesystem(NodeKind::Directory, path, source))?;
            log.created(NodeKind::Directory, path);
            for (name, child) in children {
                materialize_at(&child_path(path, name)?, child, log)?;
            }
        }
    }
    Ok(())
}

fn plan_at(
    path: &Utf8Path,
    node: &Node,
    entries: &mut Vec<PlannedEntry>,
) -> Result<(), MaterializeError> {
    entries.push(PlannedEntry {
        kind: node.kind(),
        path: path.to_owned(),
    });
    if let Node::Directory(children) = node {
        for (name, child) in children {
            plan_at(&child_path(path, name)?, child, entries)?;
        }
    }
    Ok(())
}

fn base_path(base: &Path) -> Result<Utf8PathBuf, MaterializeError> {
    if base.as_os_str().is_empty() {
        return Err(MaterializeError::Path {
            path: PathBuf::new(),
            reason: "base path is empty",
        });
    }
    Utf8PathBuf::from_path_buf(base.to_path_buf()).map_err(|path| MaterializeError::Path {
        path,
        reason: "base path is not valid UTF-8",
    })
}

fn child_path(parent: &Utf8Path, name: &str) -> Result<Utf8PathBuf, MaterializeError> {
    let mut components = Utf8Path::new(name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Utf8Component::Normal(_)), None)
    );
    if !single_normal || name.chars().any(path::is_separator) {
        return Err(MaterializeError::Path {
            path: parent.join(name).into_std_path_buf(),
            reason: "entry name must be a single path component",
        });
    }
    Ok(parent.join(name))
}
