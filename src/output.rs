use std::sync::{Arc, Mutex};
use tokio::time::Instant;

/// Append-only, line-oriented text output.
pub trait OutputSink: Send + Sync {
    fn line(&self, text: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn line(&self, text: &str) {
        println!("{}", text);
    }
}

/// Records every line with the instant it was written. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<(Instant, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.timed_lines().into_iter().map(|(_, line)| line).collect()
    }

    pub fn timed_lines(&self) -> Vec<(Instant, String)> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Instant at which the first line equal to `text` was written.
    pub fn written_at(&self, text: &str) -> Option<Instant> {
        self.timed_lines()
            .into_iter()
            .find(|(_, line)| line == text)
            .map(|(at, _)| at)
    }
}

impl OutputSink for MemorySink {
    fn line(&self, text: &str) {
        let entry = (Instant::now(), text.to_string());
        match self.lines.lock() {
            Ok(mut lines) => lines.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_shares_buffer_between_clones() {
        let sink = MemorySink::new();
        let writer = sink.clone();
        writer.line("first");
        writer.line("");
        writer.line("second");

        assert_eq!(sink.lines(), vec!["first", "", "second"]);
        assert!(sink.written_at("second").is_some());
        assert!(sink.written_at("missing").is_none());
    }
}
