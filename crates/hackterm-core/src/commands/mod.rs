//! Command verbs and their handlers
//!
//! Every verb the shell understands is a [`Verb`] variant. [`dispatch`]
//! matches exhaustively, so adding a verb without a handler does not
//! compile.
//!
//! Handlers write user-facing outcomes (usage hints, not-found,
//! permission and memory messages) to the console themselves and return
//! `Ok(())`. Only collaborator failures and broken tree invariants come
//! back as [`CommandError`](crate::error::CommandError).

mod context;
mod handlers;
mod program;
mod verb;

pub(crate) use handlers::fs::PARENT_TOKEN;

pub use context::CommandContext;
pub use program::Program;
pub use verb::Verb;

use crate::error::CommandResult;

/// Run the handler for `verb`.
pub async fn dispatch(verb: Verb, args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    match verb {
        Verb::Help => handlers::system::help(args, ctx).await,
        Verb::Ls => handlers::fs::ls(args, ctx).await,
        Verb::Cat => handlers::fs::cat(args, ctx).await,
        Verb::Pwd => handlers::fs::pwd(args, ctx).await,
        Verb::Cd => handlers::fs::cd(args, ctx).await,
        Verb::Echo => handlers::system::echo(args, ctx).await,
        Verb::Scan => handlers::net::scan(args, ctx).await,
        Verb::Connect => handlers::net::connect(args, ctx).await,
        Verb::Disconnect => handlers::net::disconnect(args, ctx).await,
        Verb::Rm => handlers::fs::rm(args, ctx).await,
        Verb::ChangeAuth => handlers::auth::change_auth(args, ctx).await,
        Verb::Run => handlers::system::run(args, ctx).await,
        Verb::Mem => handlers::system::mem(args, ctx).await,
        Verb::Clear => handlers::system::clear(args, ctx).await,
        Verb::Whoami => handlers::auth::whoami(args, ctx).await,
        Verb::Save => handlers::system::save(args, ctx).await,
        Verb::Load => handlers::system::load(args, ctx).await,
        Verb::Reset => handlers::system::reset(args, ctx).await,
    }
}
