//! The starting world.
//!
//! The player owns `wax` (192.168.0.42) and sees four neighbours. Only
//! `Bob` asks for a password; its code is hidden in `main/intro/secret.txt`,
//! readable by admins only.

use crate::authority::Authority;
use crate::config::TerminalConfig;
use crate::error::BootstrapError;
use crate::fs::{File, FileSystem};
use crate::network::{Computer, ComputerId, Network, NetworkBuilder};
use crate::session::Session;

/// Build the default network and return it with the player's computer.
pub fn default_network() -> Result<(Network, ComputerId), BootstrapError> {
    let mut builder = NetworkBuilder::new();

    let owner = builder.add(
        Computer::new("192.168.0.42", "wax")?
            .with_password("wax")
            .with_user_password("user")
            .with_admin_password("admin")
            .with_authority(Authority::Admin)
            .with_root(owner_fs()?),
    );

    let neighbours = [
        Computer::new("192.168.2.1", "Bob")?.with_password("bob"),
        Computer::new("192.168.0.254", "Fry")?,
        Computer::new("192.168.14.9", "Mey")?,
        Computer::new("193.169.1.11", "Dan")?,
    ];
    for computer in neighbours {
        let id = builder.add(computer);
        builder.link(owner, id);
    }

    Ok((builder.build(), owner))
}

/// Session on the default network, sized by `config`.
pub fn default_session(config: &TerminalConfig) -> Result<Session, BootstrapError> {
    let (network, owner) = default_network()?;
    Ok(Session::new(network, owner, config.memory()))
}

fn owner_fs() -> Result<FileSystem, BootstrapError> {
    let mut fs = FileSystem::new("main", Authority::Guest);
    let root = fs.root();

    fs.add_file(root, File::new("f1admin.txt", "contents of the admin file", Authority::Admin))?;
    fs.add_file(root, File::new("f1user.txt", "contents of the user file", Authority::User))?;
    fs.add_file(root, File::new("f1guest.txt", "contents of the guest file", Authority::Guest))?;

    let intro = fs.add_folder(root, "intro", Authority::Guest)?;
    fs.add_file(intro, File::new("readme.txt", "some new content", Authority::Guest))?;
    fs.add_file(intro, File::new("secret.txt", "code Bob => bob", Authority::Admin))?;

    fs.add_folder(root, "folderAdmin", Authority::Admin)?;
    fs.add_folder(root, "folderUser", Authority::User)?;
    fs.add_folder(root, "folderGuest", Authority::Guest)?;

    Ok(fs)
}
