//! The interactive loop: one submitted line at a time.

use crate::bootstrap;
use crate::commands::{self, CommandContext, Verb};
use crate::completion;
use crate::config::TerminalConfig;
use crate::error::{BootstrapError, CommandResult};
use crate::io::{Clock, Console, KeyValueStore, FS_KEY};
use crate::session::Session;

pub const BANNER: &str = "Hacknet-like terminal prototype";
pub const BANNER_HINT: &str = "Type 'help' to start.";
pub const SAVED_STATE_NOTICE: &str = "load from saved state => work in progress...";

/// A session wired to its collaborators.
///
/// `submit` takes `&mut self` across every await, so commands run strictly
/// one after another.
pub struct Terminal<C, K, S> {
    session: Session,
    console: C,
    clock: K,
    store: S,
    config: TerminalConfig,
}

impl<C, K, S> Terminal<C, K, S>
where
    C: Console,
    K: Clock,
    S: KeyValueStore,
{
    pub fn new(session: Session, console: C, clock: K, store: S, config: TerminalConfig) -> Self {
        Self {
            session,
            console,
            clock,
            store,
            config,
        }
    }

    /// Terminal on the default world.
    pub fn with_default_world(console: C, clock: K, store: S, config: TerminalConfig) -> Result<Self, BootstrapError> {
        let session = bootstrap::default_session(&config)?;
        Ok(Self::new(session, console, clock, store, config))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// Print the banner and push the initial prompt, memory and badge.
    pub async fn boot(&mut self) -> CommandResult<()> {
        self.console.write_line(BANNER);
        self.console.write_line(BANNER_HINT);

        let memory = *self.session.memory();
        self.console.update_memory(&memory);
        let prompt = self.session.prompt()?;
        self.console.update_prompt(&prompt);
        self.console.update_connection(self.session.is_connected());

        if self.store.get(FS_KEY).await?.is_some() {
            self.console.write_line(SAVED_STATE_NOTICE);
        }
        tracing::debug!(prompt = %prompt, "terminal booted");
        Ok(())
    }

    /// Echo and run one input line. Blank lines are ignored.
    pub async fn submit(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }
        self.console.write_prompt_line(line);

        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return;
        };
        let args: Vec<String> = tokens.map(String::from).collect();
        self.execute(name, &args).await;
    }

    /// Run `name` with `args`. Failures become console lines.
    pub async fn execute(&mut self, name: &str, args: &[String]) {
        let Some(verb) = Verb::parse(name) else {
            self.console
                .write_line(&format!("{}: unknown command. Type 'help'.", name));
            return;
        };
        tracing::debug!(verb = verb.name(), argc = args.len(), "dispatching");

        let mut ctx = CommandContext::new(
            &mut self.session,
            &mut self.console,
            &self.clock,
            &self.store,
            self.config.latency,
        );
        if let Err(err) = commands::dispatch(verb, args, &mut ctx).await {
            tracing::warn!(verb = verb.name(), error = %err, "command failed");
            ctx.write(format!("Error: {}", err));
        }
    }

    /// Tab completion for a partial input line.
    pub fn complete(&self, line: &str) -> Option<String> {
        completion::complete(line, &self.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authority::Authority;
    use crate::error::StoreError;
    use crate::io::{ManualClock, MemoryStore, Transcript};
    use async_trait::async_trait;
    use serde_json::Value;

    fn terminal() -> Terminal<Transcript, ManualClock, MemoryStore> {
        Terminal::with_default_world(
            Transcript::new(),
            ManualClock::new(),
            MemoryStore::new(),
            TerminalConfig::instant(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_boot() {
        let mut term = terminal();
        term.boot().await.unwrap();

        assert_eq!(term.console().lines(), &[BANNER.to_string(), BANNER_HINT.to_string()]);
        assert_eq!(
            term.console().prompt().unwrap().to_string(),
            "192.168.0.42 wax[ADMIN] => main$"
        );
        assert_eq!(term.console().memory().map(|m| m.total()), Some(512));
        assert_eq!(term.console().connected(), Some(false));
    }

    #[tokio::test]
    async fn test_boot_with_saved_state() {
        let mut term = terminal();
        term.store().put(FS_KEY, serde_json::json!({})).await.unwrap();
        term.boot().await.unwrap();

        assert_eq!(term.console().last_line(), Some(SAVED_STATE_NOTICE));
    }

    #[tokio::test]
    async fn test_submit_echoes_and_dispatches() {
        let mut term = terminal();
        term.submit("  echo   hi  ").await;
        term.submit("   ").await;

        assert_eq!(term.console().lines(), &["> echo   hi".to_string(), "hi".to_string()]);
    }

    #[tokio::test]
    async fn test_unknown_verb() {
        let mut term = terminal();
        term.submit("sudo rm -rf").await;

        assert_eq!(term.console().last_line(), Some("sudo: unknown command. Type 'help'."));
    }

    #[tokio::test]
    async fn test_verbs_are_case_sensitive() {
        let mut term = terminal();
        term.submit("LS").await;
        term.submit("changeauth guest").await;
        term.submit("CHANGEAUTH guest").await;

        assert_eq!(
            term.console().lines(),
            [
                "> LS".to_string(),
                "LS: unknown command. Type 'help'.".to_string(),
                "> changeauth guest".to_string(),
                "changeauth: unknown command. Type 'help'.".to_string(),
                "> CHANGEAUTH guest".to_string(),
                "CHANGEAUTH: unknown command. Type 'help'.".to_string(),
            ]
        );
        assert_eq!(term.session().authority(), Authority::Admin);
    }

    struct BrokenStore;

    #[async_trait(?Send)]
    impl KeyValueStore for BrokenStore {
        async fn put(&self, _key: &str, _value: Value) -> Result<(), StoreError> {
            Err(StoreError::Backend("offline".into()))
        }

        async fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
            Err(StoreError::Backend("offline".into()))
        }

        async fn delete(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Backend("offline".into()))
        }
    }

    #[tokio::test]
    async fn test_handler_error_is_rendered() {
        let mut term = Terminal::with_default_world(
            Transcript::new(),
            ManualClock::new(),
            BrokenStore,
            TerminalConfig::instant(),
        )
        .unwrap();

        term.submit("reset").await;
        assert_eq!(
            term.console().last_line(),
            Some("Error: storage backend error: offline")
        );

        // The session keeps going
        term.submit("whoami").await;
        assert_eq!(term.console().last_line(), Some("admin"));
        assert!(term.boot().await.is_err());
    }

    #[test]
    fn test_complete_delegates() {
        let term = terminal();
        assert_eq!(term.complete("pw").as_deref(), Some("pwd "));
    }
}
