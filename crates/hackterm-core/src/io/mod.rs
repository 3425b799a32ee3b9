//! Collaborators the core talks to
//!
//! The core only produces text and waits on timers. Front ends supply:
//!
//! - [`Console`]: output lines, prompt, memory gauge, connection badge
//! - [`Clock`]: simulated latency, wall time, random jitter
//! - [`KeyValueStore`]: persisted JSON values
//!
//! Each trait has an in-process implementation used by tests and native
//! hosts: [`Transcript`], [`ManualClock`], [`MemoryStore`].

mod clock;
mod console;
mod store;

pub use clock::{iso_timestamp, Clock, ManualClock};
pub use console::{Console, Transcript};
pub use store::{KeyValueStore, MemoryStore, FS_KEY, MEMORY_KEY};
