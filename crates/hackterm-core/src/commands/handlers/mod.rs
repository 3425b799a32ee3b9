//! One module per command group.
//!
//! Every handler has the shape
//! `async fn(&[String], &mut CommandContext<'_>) -> CommandResult<()>`.

pub(super) mod auth;
pub(super) mod fs;
pub(super) mod net;
pub(super) mod system;
