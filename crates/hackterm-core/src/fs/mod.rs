//! Per-computer virtual filesystem
//!
//! Each computer owns one [`FileSystem`]: an arena of [`Folder`]s keyed by
//! [`FolderId`]. Folders own their files and the ids of their child
//! folders; the parent link is a plain id so the tree has no ownership
//! cycles.
//!
//! Lookups never apply authority on their own. Callers pick the hiding
//! policy: `cd` and `cat` treat an unauthorized entry as missing, `rm`
//! reports the permission failure.

mod node;
mod tree;

pub use node::{EntryKind, File, Folder, FolderId, Removed};
pub use tree::FileSystem;
