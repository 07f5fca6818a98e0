//! # Tiny BASIC
//!
//! An interpreter for a minimal line-numbered BASIC: `LET`, `IF..THEN`,
//! `GOTO`, `PRINT`, and `REM` over arbitrary-precision integers.
//!
//! Programs are plain text, one statement per line, each line optionally
//! labeled with a multiple of ten:
//! ```text
//! 10 LET a = 5
//! 20 IF a > 3 THEN 40
//! 30 PRINT "no"
//! 40 PRINT "yes"
//! ```
//!
//! There is no AST and no bytecode. The interpreter evaluates the token
//! stream directly and repositions the lexer to jump between lines.

pub mod lang;
pub mod mach;
