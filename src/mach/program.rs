use crate::lang::{Lexer, LineNumber, Token};
use std::collections::BTreeMap;

/// ## Line index
///
/// Mapping from line label to a resumable lexer checkpoint, built by
/// one full pre-scan of the token stream before execution begins.
/// Entries are write-once during the scan (last writer wins for a
/// repeated label) and read-only during execution.

#[derive(Debug, Default)]
pub struct LineIndex {
    lines: BTreeMap<LineNumber, usize>,
}

impl LineIndex {
    pub fn build(lexer: &mut Lexer) -> LineIndex {
        let mut lines = BTreeMap::new();
        lexer.reset();
        let mut at_line_start = true;
        while !lexer.finished() {
            if at_line_start {
                if let Some(number) = lexer.line_number() {
                    lines.insert(number, lexer.checkpoint());
                }
            }
            at_line_start = *lexer.current() == Token::Eol;
            lexer.advance();
        }
        lexer.reset();
        LineIndex { lines }
    }

    pub fn resolve(&self, line: LineNumber) -> Option<usize> {
        self.lines.get(&line).copied()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::SourceCursor;

    #[test]
    fn test_build_and_resolve() {
        let source = "10 PRINT \"a\"\n15 PRINT\n20 GOTO 10\n";
        let mut lexer = Lexer::new(SourceCursor::new(source));
        let index = LineIndex::build(&mut lexer);
        // 15 fails the line-number predicate.
        assert_eq!(index.len(), 2);
        assert!(index.resolve(10).is_some());
        assert!(index.resolve(15).is_none());
        assert!(index.resolve(20).is_some());
        assert!(index.resolve(30).is_none());
        // The lexer is rewound after the scan.
        assert_eq!(lexer.line_number(), Some(10));
    }

    #[test]
    fn test_mid_line_numbers_are_not_indexed() {
        let mut lexer = Lexer::new(SourceCursor::new("10 LET a = 20\n"));
        let index = LineIndex::build(&mut lexer);
        assert_eq!(index.len(), 1);
        assert!(index.resolve(20).is_none());
    }

    #[test]
    fn test_empty_source() {
        let mut lexer = Lexer::new(SourceCursor::new(""));
        assert!(LineIndex::build(&mut lexer).is_empty());
    }
}
