use crate::config::LatencyProfile;
use crate::error::CommandResult;
use crate::io::{Clock, Console, KeyValueStore};
use crate::session::Session;

/// Everything a handler may touch during one command.
pub struct CommandContext<'a> {
    pub session: &'a mut Session,
    pub console: &'a mut dyn Console,
    pub clock: &'a dyn Clock,
    pub store: &'a dyn KeyValueStore,
    pub latency: LatencyProfile,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        session: &'a mut Session,
        console: &'a mut dyn Console,
        clock: &'a dyn Clock,
        store: &'a dyn KeyValueStore,
        latency: LatencyProfile,
    ) -> Self {
        Self {
            session,
            console,
            clock,
            store,
            latency,
        }
    }

    pub fn write(&mut self, line: impl AsRef<str>) {
        self.console.write_line(line.as_ref());
    }

    /// Push the current prompt to the console.
    pub fn refresh_prompt(&mut self) -> CommandResult<()> {
        let prompt = self.session.prompt()?;
        self.console.update_prompt(&prompt);
        Ok(())
    }

    /// Push the memory gauge to the console.
    pub fn refresh_memory(&mut self) {
        let memory = *self.session.memory();
        self.console.update_memory(&memory);
    }

    pub async fn delay(&self, ms: u64) {
        self.clock.delay(ms).await;
    }

    /// `base` plus a random value below `spread`.
    pub fn jittered(&self, base: u64, spread: u64) -> u64 {
        if spread == 0 {
            return base;
        }
        base.saturating_add(self.clock.jitter(spread))
    }
}
