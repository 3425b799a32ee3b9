//! Filesystem node types.

use core::fmt;

use crate::authority::Authority;

/// Folder identifier, unique within one [`FileSystem`](super::FileSystem).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FolderId(pub(crate) u32);

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of directory entry, used in error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => f.write_str("file"),
            EntryKind::Folder => f.write_str("folder"),
        }
    }
}

/// A text file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    name: String,
    content: String,
    access: Authority,
}

impl File {
    pub fn new(name: impl Into<String>, content: impl Into<String>, access: Authority) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            access,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Level required to read or delete the file.
    pub fn access(&self) -> Authority {
        self.access
    }

    /// Append text to the end of the file.
    pub fn append(&mut self, text: &str) {
        self.content.push_str(text);
    }
}

/// A folder node in the arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Folder {
    pub(crate) name: String,
    pub(crate) access: Authority,
    pub(crate) parent: Option<FolderId>,
    pub(crate) children: Vec<FolderId>,
    pub(crate) files: Vec<File>,
}

impl Folder {
    pub(crate) fn new(name: String, access: Authority, parent: Option<FolderId>) -> Self {
        Self {
            name,
            access,
            parent,
            children: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Level required to enter, list or delete the folder.
    pub fn access(&self) -> Authority {
        self.access
    }

    pub fn parent(&self) -> Option<FolderId> {
        self.parent
    }

    /// Child folder ids in insertion order.
    pub fn children(&self) -> &[FolderId] {
        &self.children
    }

    /// Files in insertion order.
    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn has_subfolders(&self) -> bool {
        !self.children.is_empty()
    }
}

/// What [`FileSystem::remove`](super::FileSystem::remove) took out of the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Removed {
    File(File),
    /// Folder name; its files went with it.
    Folder(String),
}
