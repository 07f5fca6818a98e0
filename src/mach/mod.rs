/*!
## Machine Module

The execution half of the interpreter: runtime values, variable and
indexed storage, the line index, and the statement executor that
drives the lexer.

*/

mod program;
mod runtime;
mod val;
mod var;

#[cfg(test)]
mod tests;

pub use program::LineIndex;
pub use runtime::Config;
pub use runtime::Interpreter;
pub use val::Val;
pub use var::Memory;
pub use var::Var;
