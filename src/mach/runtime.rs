use super::{LineIndex, Memory, Val, Var};
use crate::error;
use crate::lang::{Error, Lexer, LineNumber, Operator, SourceCursor, Token, Word};
use num_traits::{ToPrimitive, Zero};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// Policy captured once at interpreter construction.
#[derive(Debug, Default, Clone, Copy)]
pub struct Config {
    /// Treat division by zero as fatal instead of warn-and-substitute-zero.
    pub terminate_on_divide_by_zero: bool,
}

/// ## Tree-walking interpreter
///
/// Owns the lexer, both variable stores, and the line index. Statements
/// are executed straight off the token stream; `GOTO` and a true `IF`
/// reposition the lexer at a checkpoint recorded by the line index.
/// A single instance is exclusively owned by its caller.

pub struct Interpreter<W: Write> {
    lexer: Lexer,
    lines: LineIndex,
    vars: Var,
    memory: Memory,
    config: Config,
    out: W,
    interrupted: Option<Arc<AtomicBool>>,
    current_line: Option<LineNumber>,
    halted: bool,
}

impl Interpreter<std::io::Stdout> {
    pub fn from_path(path: &Path, config: Config) -> Result<Interpreter<std::io::Stdout>> {
        let cursor = SourceCursor::from_path(path)?;
        Ok(Interpreter::build(Lexer::new(cursor), config, std::io::stdout()))
    }
}

impl<W: Write> Interpreter<W> {
    pub fn with_output(source: &str, config: Config, out: W) -> Interpreter<W> {
        Interpreter::build(Lexer::new(SourceCursor::new(source)), config, out)
    }

    fn build(lexer: Lexer, config: Config, out: W) -> Interpreter<W> {
        Interpreter {
            lexer,
            lines: LineIndex::default(),
            vars: Var::new(),
            memory: Memory::new(),
            config,
            out,
            interrupted: None,
            current_line: None,
            halted: false,
        }
    }

    /// Checked once per statement cycle. Set from a signal handler to
    /// stop a runaway program.
    pub fn set_interrupt(&mut self, flag: Arc<AtomicBool>) {
        self.interrupted = Some(flag);
    }

    pub fn finished(&self) -> bool {
        self.halted
    }

    pub fn run(&mut self) -> Result<()> {
        self.lines = LineIndex::build(&mut self.lexer);
        while !self.halted {
            if self.lexer.finished() {
                self.halted = true;
                break;
            }
            self.line_statement()?;
        }
        Ok(())
    }

    fn line_statement(&mut self) -> Result<()> {
        if let Some(flag) = &self.interrupted {
            if flag.load(Ordering::SeqCst) {
                return Err(error!(Break, self.current_line));
            }
        }
        while *self.lexer.current() == Token::Eol {
            self.lexer.advance();
        }
        if self.lexer.finished() {
            self.halted = true;
            return Ok(());
        }
        if let Token::Number(n) = self.lexer.current().clone() {
            // The line's label, already indexed by the pre-scan.
            self.current_line = n.to_u32();
            self.lexer.advance();
        }
        self.statement()
    }

    fn statement(&mut self) -> Result<()> {
        match self.lexer.current().clone() {
            Token::Word(Word::Rem) => {
                self.lexer.skip_to_line_end();
                Ok(())
            }
            Token::Word(Word::Print) => self.print_statement(),
            Token::Word(Word::If) => self.if_statement(),
            Token::Word(Word::Goto) => self.goto_statement(),
            Token::Word(Word::Let) => {
                self.lexer.advance();
                self.let_statement()
            }
            Token::Letter(_) => self.let_statement(),
            Token::Unknown(s) => Err(error!(LexicalError, self.current_line;
                &format!("UNRECOGNIZED `{}`", s))),
            token => Err(error!(SyntaxError, self.current_line;
                &format!("UNRECOGNIZED STATEMENT `{}`", token))),
        }
    }

    fn accept(&mut self, expected: Token) -> Result<()> {
        if *self.lexer.current() != expected {
            return Err(error!(SyntaxError, self.current_line;
                &format!("UNEXPECTED `{}` EXPECTED `{}`", self.lexer.current(), expected)));
        }
        self.lexer.advance();
        Ok(())
    }

    fn let_statement(&mut self) -> Result<()> {
        let name = match self.lexer.current() {
            Token::Letter(c) => *c,
            token => {
                return Err(error!(SyntaxError, self.current_line;
                    &format!("EXPECTED VARIABLE, FOUND `{}`", token)))
            }
        };
        self.lexer.advance();
        if *self.lexer.current() == Token::LBracket {
            self.lexer.advance();
            let index = self.expression()?;
            self.accept(Token::RBracket)?;
            self.accept(Token::Operator(Operator::Equal))?;
            let value = self.expression()?;
            self.memory.store(index, value);
        } else {
            self.accept(Token::Operator(Operator::Equal))?;
            let value = self.expression()?;
            self.vars.store(name, value);
        }
        Ok(())
    }

    fn if_statement(&mut self) -> Result<()> {
        self.lexer.advance();
        let cond = self.relation()?;
        self.accept(Token::Word(Word::Then))?;
        let target = self.line_target()?;
        if cond {
            self.jump(target)
        } else {
            // Target discarded, never executed.
            if *self.lexer.current() == Token::Eol {
                self.lexer.advance();
            }
            Ok(())
        }
    }

    fn goto_statement(&mut self) -> Result<()> {
        self.lexer.advance();
        let target = self.line_target()?;
        self.jump(target)
    }

    fn line_target(&mut self) -> Result<LineNumber> {
        let target = match self.lexer.current() {
            Token::Number(n) => n.to_u32(),
            token => {
                return Err(error!(SyntaxError, self.current_line;
                    &format!("EXPECTED LINE NUMBER, FOUND `{}`", token)))
            }
        };
        self.lexer.advance();
        // A target too wide for a line number can never be indexed.
        target.ok_or_else(|| error!(UndefinedLine, self.current_line))
    }

    fn jump(&mut self, target: LineNumber) -> Result<()> {
        match self.lines.resolve(target) {
            Some(position) => {
                self.lexer.resume(position);
                self.current_line = Some(target);
                Ok(())
            }
            None => Err(error!(UndefinedLine, self.current_line;
                &format!("NO LINE {}", target))),
        }
    }

    fn print_statement(&mut self) -> Result<()> {
        self.lexer.advance();
        let mut pending_space = false;
        loop {
            // Never swallow the next line's label.
            if self.lexer.line_number().is_some() {
                break;
            }
            match self.lexer.current().clone() {
                Token::Eol | Token::Eof => break,
                Token::String(s) => {
                    if pending_space {
                        self.emit(" ")?;
                    }
                    self.emit(&s)?;
                    pending_space = true;
                    self.lexer.advance();
                }
                Token::Separator => {
                    pending_space = false;
                    self.lexer.advance();
                }
                Token::Number(_)
                | Token::Letter(_)
                | Token::LParen
                | Token::Operator(Operator::Minus) => {
                    if pending_space {
                        self.emit(" ")?;
                    }
                    let value = self.expression()?;
                    self.emit(&value.to_string())?;
                    pending_space = true;
                }
                _ => break,
            }
        }
        self.emit("\n")?;
        if self.lexer.line_number().is_some() {
            return Ok(());
        }
        if *self.lexer.current() == Token::Eof {
            self.halted = true;
        } else if *self.lexer.current() == Token::Eol {
            self.lexer.advance();
        }
        Ok(())
    }

    fn emit(&mut self, s: &str) -> Result<()> {
        match self.out.write_all(s.as_bytes()) {
            Ok(()) => Ok(()),
            Err(err) => Err(error!(InternalError, self.current_line; &err.to_string())),
        }
    }
}

// Expression evaluation: recursive descent directly over the token
// stream. Precedence is relation, expression (+ -), term (* /),
// factor (literal, variable, indexed read, parens, unary minus).
impl<W: Write> Interpreter<W> {
    fn relation(&mut self) -> Result<bool> {
        let left = self.expression()?;
        match self.lexer.current().clone() {
            Token::Operator(Operator::Equal) => {
                self.lexer.advance();
                Ok(left == self.expression()?)
            }
            Token::Operator(Operator::NotEqual) => {
                self.lexer.advance();
                Ok(left != self.expression()?)
            }
            Token::Operator(Operator::Less) => {
                self.lexer.advance();
                Ok(left < self.expression()?)
            }
            Token::Operator(Operator::LessEqual) => {
                self.lexer.advance();
                Ok(left <= self.expression()?)
            }
            Token::Operator(Operator::Greater) => {
                self.lexer.advance();
                Ok(left > self.expression()?)
            }
            Token::Operator(Operator::GreaterEqual) => {
                self.lexer.advance();
                Ok(left >= self.expression()?)
            }
            _ => Ok(!left.is_zero()),
        }
    }

    fn expression(&mut self) -> Result<Val> {
        let mut value = self.term()?;
        // A trailing number satisfying the line-number predicate is the
        // next line's label. Leave it for the executor.
        if self.lexer.line_number().is_some() {
            return Ok(value);
        }
        loop {
            match self.lexer.current().clone() {
                Token::Operator(Operator::Plus) => {
                    self.lexer.advance();
                    value += self.term()?;
                }
                Token::Operator(Operator::Minus) => {
                    self.lexer.advance();
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<Val> {
        let mut value = self.factor()?;
        loop {
            match self.lexer.current().clone() {
                Token::Operator(Operator::Multiply) => {
                    self.lexer.advance();
                    value *= self.factor()?;
                }
                Token::Operator(Operator::Divide) => {
                    self.lexer.advance();
                    let rhs = self.factor()?;
                    value = self.divide(value, rhs)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> Result<Val> {
        match self.lexer.current().clone() {
            Token::Number(n) => {
                self.lexer.advance();
                Ok(n)
            }
            Token::Letter(name) => {
                self.lexer.advance();
                if *self.lexer.current() == Token::LBracket {
                    self.lexer.advance();
                    let index = self.expression()?;
                    self.accept(Token::RBracket)?;
                    Ok(self.memory.fetch(&index))
                } else {
                    Ok(self.vars.fetch(name))
                }
            }
            Token::LParen => {
                self.lexer.advance();
                let value = self.expression()?;
                self.accept(Token::RParen)?;
                Ok(value)
            }
            Token::Operator(Operator::Minus) => {
                self.lexer.advance();
                Ok(-self.factor()?)
            }
            Token::Unknown(s) => Err(error!(LexicalError, self.current_line;
                &format!("UNRECOGNIZED `{}`", s))),
            token => Err(error!(SyntaxError, self.current_line;
                &format!("UNEXPECTED `{}` IN EXPRESSION", token))),
        }
    }

    fn divide(&mut self, numerator: Val, denominator: Val) -> Result<Val> {
        if denominator.is_zero() {
            eprintln!("WARNING: DIVISION BY ZERO");
            if self.config.terminate_on_divide_by_zero {
                return Err(error!(DivisionByZero, self.current_line));
            }
            return Ok(Val::zero());
        }
        Ok(numerator / denominator)
    }
}
