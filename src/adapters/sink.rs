use crate::domain::ports::SoundSink;
use std::cell::RefCell;

/// Writes every line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl SoundSink for ConsoleSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}

/// Keeps every line in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl SoundSink for RecordingSink {
    fn emit(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
