//! hackterm core
//!
//! A simulated shell for a hacking game. The player types commands against
//! an in-memory filesystem and a network of fictitious computers:
//!
//! - **Authority**: the guest < user < admin access order
//! - **Fs**: per-computer folder tree with access levels
//! - **Network**: computers, their passwords and the scan/connect topology
//! - **Session**: current computer, current folder, memory budget, connection flag
//! - **Commands**: verb dispatch and the handlers behind each verb
//! - **Io**: console, clock and key-value store collaborators
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                            Terminal                               │
//! │   input line ──► Verb::parse ──► handler(args, CommandContext)    │
//! │                                        │                          │
//! │        ┌───────────────────────────────┼──────────────────┐       │
//! │        ▼                               ▼                  ▼       │
//! │  ┌───────────┐   ┌─────────────────────────────┐   ┌───────────┐  │
//! │  │  Console  │   │           Session           │   │   Clock   │  │
//! │  │  (lines,  │   │  Network ─► Computer ─► Fs  │   │  (delay,  │  │
//! │  │  prompt)  │   │  MemoryState, connected     │   │  jitter)  │  │
//! │  └───────────┘   └─────────────────────────────┘   └───────────┘  │
//! │                                 │                                 │
//! │                                 ▼                                 │
//! │                          KeyValueStore                            │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The core never touches the DOM. Front ends implement the collaborator
//! traits in [`io`] and drive a [`Terminal`].

pub mod authority;
pub mod bootstrap;
pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod fs;
pub mod io;
pub mod memory;
pub mod network;
pub mod session;
pub mod terminal;

// Re-export main types
pub use authority::{is_authorized, Authority};
pub use commands::{Program, Verb};
pub use config::{LatencyProfile, TerminalConfig};
pub use error::{
    AddressError, BootstrapError, CommandError, CommandResult, ConfigError, FsError, FsResult, MemoryError,
    StoreError,
};
pub use fs::{File, FileSystem, Folder, FolderId};
pub use io::{Clock, Console, KeyValueStore, ManualClock, MemoryStore, Transcript};
pub use memory::{MemoryState, MEM_MAX_SIZE};
pub use network::{Computer, ComputerId, IpAddress, Network, NetworkBuilder};
pub use session::{Prompt, Session};
pub use terminal::Terminal;
