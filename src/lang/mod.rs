/*!
# Language Module

Lexical analysis for the tiny BASIC language: the character-level
source cursor, the token type, and the streaming lexer.

*/

#[macro_use]
mod error;
mod lex;
mod source;
mod token;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::Lexer;
pub use source::SourceCursor;
pub use token::Operator;
pub use token::Token;
pub use token::Word;

/// A line label as it appears in source: `>= 10` and a multiple of ten.
pub type LineNumber = u32;

/// String literals are silently truncated to this many characters.
pub const MAX_STRING_LITERAL: usize = 50;
