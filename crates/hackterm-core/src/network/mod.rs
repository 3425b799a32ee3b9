//! Computers and the network that links them
//!
//! A [`Network`] is an arena of [`Computer`]s keyed by [`ComputerId`] with
//! one adjacency list per computer. Links are added once, symmetrically,
//! by [`NetworkBuilder`] before the session starts.

mod address;
mod computer;
mod topology;

pub use address::IpAddress;
pub use computer::{Computer, CONNECTION_LOG, LOG_FOLDER, LOG_PARENT};
pub use topology::{ComputerId, Network, NetworkBuilder};
