//! A simulated host.

use crate::authority::Authority;
use crate::error::{AddressError, FsResult};
use crate::fs::{File, FileSystem};

use super::address::IpAddress;

/// Folder created under the root to hold logs.
pub const LOG_PARENT: &str = "var";
/// Folder created under [`LOG_PARENT`].
pub const LOG_FOLDER: &str = "log";
/// File receiving one line per incoming connection.
pub const CONNECTION_LOG: &str = "connections.log";

const LOG_HEADER: &str = "[LOGS STARTED]\n";

/// A named, addressed computer with its own filesystem.
///
/// The `authority` field is the level of whoever is currently driving the
/// machine; `connect` drops it to guest and `changeAuth` raises it.
#[derive(Clone, Debug)]
pub struct Computer {
    name: String,
    address: IpAddress,
    fs: FileSystem,
    authority: Authority,
    password: String,
    user_password: String,
    admin_password: String,
}

impl Computer {
    /// Create a computer with an empty guest `home` root, admin authority
    /// and no passwords.
    pub fn new(ip: &str, name: impl Into<String>) -> Result<Self, AddressError> {
        Ok(Self {
            name: name.into(),
            address: IpAddress::parse(ip)?,
            fs: FileSystem::new("home", Authority::Guest),
            authority: Authority::Admin,
            password: String::new(),
            user_password: String::new(),
            admin_password: String::new(),
        })
    }

    /// Password required by `connect`. Empty accepts anything.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Password required by `changeAuth user`.
    pub fn with_user_password(mut self, password: impl Into<String>) -> Self {
        self.user_password = password.into();
        self
    }

    /// Password required by `changeAuth admin`.
    pub fn with_admin_password(mut self, password: impl Into<String>) -> Self {
        self.admin_password = password.into();
        self
    }

    pub fn with_root(mut self, fs: FileSystem) -> Self {
        self.fs = fs;
        self
    }

    pub fn with_authority(mut self, authority: Authority) -> Self {
        self.authority = authority;
        self
    }

    // ========== Accessors ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &IpAddress {
        &self.address
    }

    pub fn fs(&self) -> &FileSystem {
        &self.fs
    }

    pub fn fs_mut(&mut self) -> &mut FileSystem {
        &mut self.fs
    }

    pub fn authority(&self) -> Authority {
        self.authority
    }

    pub fn set_authority(&mut self, authority: Authority) {
        self.authority = authority;
    }

    pub fn user_password(&self) -> &str {
        &self.user_password
    }

    pub fn admin_password(&self) -> &str {
        &self.admin_password
    }

    /// Name of the root folder.
    pub fn root_name(&self) -> FsResult<&str> {
        Ok(self.fs.folder(self.fs.root())?.name())
    }

    // ========== Connection ==========

    /// Same address and name.
    pub fn matches(&self, ip: &str, name: &str) -> bool {
        self.address == *ip && self.name == name
    }

    pub fn accepts(&self, password: &str) -> bool {
        self.password.is_empty() || self.password == password
    }

    /// Append an incoming-connection entry to `var/log/connections.log`,
    /// creating the folders and the file on first use.
    pub fn record_connection(&mut self, source: &IpAddress, timestamp: &str) -> FsResult<()> {
        let root = self.fs.root();
        let var = self.fs.ensure_folder(root, LOG_PARENT, Authority::Admin)?;
        let log = self.fs.ensure_folder(var, LOG_FOLDER, Authority::Admin)?;
        if self.fs.find_file(log, CONNECTION_LOG)?.is_none() {
            self.fs
                .add_file(log, File::new(CONNECTION_LOG, LOG_HEADER, Authority::User))?;
        }

        if let Some(file) = self.fs.find_file_mut(log, CONNECTION_LOG)? {
            file.append(&format!("\n[{}] Connection received from {}", timestamp, source));
        }
        Ok(())
    }
}
