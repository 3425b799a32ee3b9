//! Output sink.

use crate::memory::MemoryState;
use crate::session::Prompt;

/// Where command output goes.
pub trait Console {
    fn write_line(&mut self, text: &str);

    /// Echo of a submitted input line.
    fn write_prompt_line(&mut self, text: &str) {
        self.write_line(&format!("> {}", text));
    }

    /// Drop everything rendered so far.
    fn clear(&mut self);

    fn update_prompt(&mut self, _prompt: &Prompt) {}

    fn update_memory(&mut self, _memory: &MemoryState) {}

    fn update_connection(&mut self, _connected: bool) {}
}

/// Console that records everything, for tests and headless hosts.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
    prompt: Option<Prompt>,
    memory: Option<MemoryState>,
    connected: Option<bool>,
    clears: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn last_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Return the recorded lines and start over.
    pub fn take_lines(&mut self) -> Vec<String> {
        core::mem::take(&mut self.lines)
    }

    /// Last prompt pushed by the core.
    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn memory(&self) -> Option<&MemoryState> {
        self.memory.as_ref()
    }

    /// Last connection badge state.
    pub fn connected(&self) -> Option<bool> {
        self.connected
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl Console for Transcript {
    fn write_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.clears += 1;
    }

    fn update_prompt(&mut self, prompt: &Prompt) {
        self.prompt = Some(prompt.clone());
    }

    fn update_memory(&mut self, memory: &MemoryState) {
        self.memory = Some(*memory);
    }

    fn update_connection(&mut self, connected: bool) {
        self.connected = Some(connected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_records() {
        let mut console = Transcript::new();
        console.write_line("one");
        console.write_prompt_line("ls");
        assert_eq!(console.lines(), &["one".to_string(), "> ls".to_string()]);

        console.clear();
        assert!(console.lines().is_empty());
        assert_eq!(console.clear_count(), 1);

        console.update_connection(true);
        console.update_memory(&MemoryState::new(64));
        assert_eq!(console.connected(), Some(true));
        assert_eq!(console.memory().map(|m| m.total()), Some(64));
    }
}
