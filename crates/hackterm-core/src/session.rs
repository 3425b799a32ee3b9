//! Mutable state threaded through every command.

use core::fmt;

use crate::authority::Authority;
use crate::error::FsResult;
use crate::fs::{FileSystem, FolderId};
use crate::memory::MemoryState;
use crate::network::{Computer, ComputerId, Network};

/// The player's session: where they are, what they may do, and how much
/// memory is left.
///
/// The current folder always belongs to the current computer's tree:
/// [`switch_computer`](Self::switch_computer) is the only way to change
/// computers and it moves the folder to the new root.
#[derive(Clone, Debug)]
pub struct Session {
    network: Network,
    owner: ComputerId,
    current: ComputerId,
    folder: FolderId,
    connected: bool,
    memory: MemoryState,
}

impl Session {
    /// # Panics
    ///
    /// If `owner` does not belong to `network`.
    pub fn new(network: Network, owner: ComputerId, memory: MemoryState) -> Self {
        let folder = network.computer(owner).fs().root();
        Self {
            network,
            owner,
            current: owner,
            folder,
            connected: false,
            memory,
        }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    /// The player's home machine.
    pub fn owner(&self) -> ComputerId {
        self.owner
    }

    pub fn current(&self) -> ComputerId {
        self.current
    }

    pub fn current_computer(&self) -> &Computer {
        self.network.computer(self.current)
    }

    pub fn current_computer_mut(&mut self) -> &mut Computer {
        self.network.computer_mut(self.current)
    }

    pub fn current_fs(&self) -> &FileSystem {
        self.current_computer().fs()
    }

    pub fn current_fs_mut(&mut self) -> &mut FileSystem {
        self.current_computer_mut().fs_mut()
    }

    pub fn current_folder(&self) -> FolderId {
        self.folder
    }

    /// Move within the current computer.
    pub fn set_current_folder(&mut self, folder: FolderId) {
        self.folder = folder;
    }

    /// Move to another computer, landing on its root folder.
    ///
    /// # Panics
    ///
    /// If `id` does not belong to this session's network.
    pub fn switch_computer(&mut self, id: ComputerId) {
        self.current = id;
        self.folder = self.network.computer(id).fs().root();
    }

    /// Authority held on the current computer.
    pub fn authority(&self) -> Authority {
        self.current_computer().authority()
    }

    pub fn set_authority(&mut self, authority: Authority) {
        self.current_computer_mut().set_authority(authority);
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    pub fn memory(&self) -> &MemoryState {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut MemoryState {
        &mut self.memory
    }

    /// Full path of the current folder.
    pub fn cwd(&self) -> FsResult<String> {
        self.current_fs().full_path(self.folder)
    }

    pub fn prompt(&self) -> FsResult<Prompt> {
        let computer = self.current_computer();
        Ok(Prompt {
            label: format!(
                "{} {}[{}] => {}",
                computer.address(),
                computer.name(),
                computer.authority().label(),
                self.cwd()?
            ),
            connected: self.connected,
            authority: computer.authority(),
        })
    }
}

/// Prompt shown before the input field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    /// `<ip> <name>[<AUTH>] => <path>`
    pub label: String,
    pub connected: bool,
    pub authority: Authority,
}

impl Prompt {
    /// `#` on a remote machine, `$` at home.
    pub fn marker(&self) -> char {
        if self.connected {
            '#'
        } else {
            '$'
        }
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label, self.marker())
    }
}
