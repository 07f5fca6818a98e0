use super::Error;
use std::path::Path;

type Result<T> = std::result::Result<T, Error>;

/// ## Character cursor over program source
///
/// Owns the full text of a program and exposes character-level
/// read/peek/seek. The lexer is its only consumer.

#[derive(Debug)]
pub struct SourceCursor {
    chars: Vec<char>,
    pos: usize,
}

impl SourceCursor {
    pub fn new(source: &str) -> SourceCursor {
        SourceCursor {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    pub fn from_path(path: &Path) -> Result<SourceCursor> {
        match std::fs::read_to_string(path) {
            Ok(source) => Ok(SourceCursor::new(&source)),
            Err(err) => Err(error!(FileError; &err.to_string())),
        }
    }

    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    pub fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }

    pub fn seek(&mut self, offset: usize) {
        debug_assert!(offset <= self.chars.len());
        self.pos = offset.min(self.chars.len());
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}
