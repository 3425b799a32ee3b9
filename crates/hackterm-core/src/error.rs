//! Error types for the hackterm core
//!
//! User-facing failures (usage, not found, permission, memory) are written
//! to the console by the handlers themselves. The types here cover what
//! travels through `?`: invalid addresses, tree lookups, collaborator
//! failures and configuration parsing.

use thiserror::Error;

use crate::fs::{EntryKind, FolderId};

/// A dotted-quad address failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid IPv4 address: {0}")]
pub struct AddressError(pub String);

/// Errors from filesystem tree operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// No file or folder with this name in the folder
    #[error("no such file or directory: {0}")]
    NotFound(String),

    /// The caller's authority is below the entry's access level
    #[error("permission denied on {kind} '{name}'")]
    PermissionDenied {
        /// Whether the entry is a file or a folder
        kind: EntryKind,
        /// Entry name
        name: String,
    },

    /// Only folders without child folders can be removed
    #[error("directory '{0}' contains other directories")]
    HasSubfolders(String),

    /// An entry with this name already exists in the folder
    #[error("entry already exists: {0}")]
    AlreadyExists(String),

    /// The id does not belong to this tree (or was removed)
    #[error("unknown folder: {0}")]
    UnknownFolder(FolderId),
}

/// A memory budget whose usage exceeds its capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("memory usage {used} MB exceeds capacity {total} MB")]
pub struct MemoryError {
    pub total: u32,
    pub used: u32,
}

/// Errors from the key-value store collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store rejected the operation
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A value could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Errors from loading a [`TerminalConfig`](crate::config::TerminalConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document did not match the config shape
    #[error("invalid terminal config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors a command handler propagates to the dispatcher
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Key-value store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Filesystem invariant broken
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Anything else
    #[error("{0}")]
    Internal(String),
}

/// Errors from building a game world
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Fs(#[from] FsError),
}

/// Result type alias for filesystem operations
pub type FsResult<T> = Result<T, FsError>;

/// Result type alias for command handlers
pub type CommandResult<T> = Result<T, CommandError>;
