use super::{token::*, LineNumber, SourceCursor, MAX_STRING_LITERAL};
use num_bigint::BigInt;
use num_traits::ToPrimitive;

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// ## Streaming lexer
///
/// Holds exactly one current token. There is no token buffer; control
/// transfers reposition the cursor and re-lex.

#[derive(Debug)]
pub struct Lexer {
    cursor: SourceCursor,
    current: Token,
    // True when the current token is a number whose last digit was
    // immediately followed by whitespace, a line terminator, or the end
    // of input. Captured at lex time for the line-number predicate.
    number_break: bool,
}

impl Lexer {
    pub fn new(cursor: SourceCursor) -> Lexer {
        let mut lexer = Lexer {
            cursor,
            current: Token::Eof,
            number_break: false,
        };
        lexer.current = lexer.scan_token();
        lexer
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn finished(&self) -> bool {
        self.current == Token::Eof
    }

    pub fn advance(&mut self) {
        if self.finished() {
            return;
        }
        self.current = self.scan_token();
    }

    /// Rewind to the start of input and re-lex the first token.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.current = self.scan_token();
    }

    /// Force the current token without reading any input.
    pub fn reset_to(&mut self, token: Token) {
        self.number_break = false;
        self.current = token;
    }

    /// Cursor offset at the end of the current token. Feeding it back
    /// to `resume` continues lexing with the following token.
    pub fn checkpoint(&self) -> usize {
        self.cursor.position()
    }

    /// Reposition to a checkpoint taken earlier on the same source.
    /// Observably identical to rescanning from the start of input.
    pub fn resume(&mut self, offset: usize) {
        self.cursor.seek(offset);
        self.current = self.scan_token();
    }

    /// The shared line-number predicate: the current token is a line
    /// label iff it is a number `>= 10`, a multiple of ten, and its last
    /// digit was followed by whitespace or the end of a line or input.
    pub fn line_number(&self) -> Option<LineNumber> {
        if !self.number_break {
            return None;
        }
        if let Token::Number(n) = &self.current {
            if let Some(n) = n.to_u32() {
                if n >= 10 && n % 10 == 0 {
                    return Some(n);
                }
            }
        }
        None
    }

    /// Discard raw characters through the next line terminator, then
    /// re-lex. Used for `REM`: the rest of the line is free-form text.
    pub fn skip_to_line_end(&mut self) {
        while let Some(c) = self.cursor.current() {
            if is_line_terminator(c) {
                break;
            }
            self.cursor.advance();
        }
        if let Some('\r') = self.cursor.current() {
            self.cursor.advance();
            if let Some('\n') = self.cursor.current() {
                self.cursor.advance();
            }
        } else if let Some('\n') = self.cursor.current() {
            self.cursor.advance();
        }
        self.current = self.scan_token();
    }

    fn scan_token(&mut self) -> Token {
        self.number_break = false;
        while let Some(c) = self.cursor.current() {
            if is_basic_whitespace(c) {
                self.cursor.advance();
                continue;
            }
            break;
        }
        let c = match self.cursor.current() {
            Some(c) => c,
            None => return Token::Eof,
        };
        if is_line_terminator(c) {
            return self.end_of_line(c);
        }
        if c == '"' {
            return self.string();
        }
        if c.is_ascii_digit() {
            return self.number();
        }
        if c.is_ascii_uppercase() {
            return self.keyword();
        }
        if c.is_ascii_lowercase() {
            self.cursor.advance();
            return Token::Letter(c);
        }
        self.cursor.advance();
        match c {
            ',' | ';' => Token::Separator,
            '=' => Token::Operator(Operator::Equal),
            '<' => match self.cursor.current() {
                Some('=') => {
                    self.cursor.advance();
                    Token::Operator(Operator::LessEqual)
                }
                Some('>') => {
                    self.cursor.advance();
                    Token::Operator(Operator::NotEqual)
                }
                _ => Token::Operator(Operator::Less),
            },
            '>' => match self.cursor.current() {
                Some('=') => {
                    self.cursor.advance();
                    Token::Operator(Operator::GreaterEqual)
                }
                _ => Token::Operator(Operator::Greater),
            },
            '+' => Token::Operator(Operator::Plus),
            '-' => Token::Operator(Operator::Minus),
            '*' => Token::Operator(Operator::Multiply),
            '/' => Token::Operator(Operator::Divide),
            '(' => Token::LParen,
            ')' => Token::RParen,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            _ => Token::Unknown(c.to_string()),
        }
    }

    fn end_of_line(&mut self, c: char) -> Token {
        self.cursor.advance();
        if c == '\r' {
            if let Some('\n') = self.cursor.current() {
                self.cursor.advance();
            }
        }
        Token::Eol
    }

    // No escape sequences. Overlong literals are silently truncated;
    // unterminated literals are accepted as-is.
    fn string(&mut self) -> Token {
        let mut s = String::new();
        self.cursor.advance();
        while let Some(c) = self.cursor.current() {
            if c == '"' {
                self.cursor.advance();
                break;
            }
            if s.chars().count() < MAX_STRING_LITERAL {
                s.push(c);
            }
            self.cursor.advance();
        }
        Token::String(s)
    }

    fn number(&mut self) -> Token {
        let mut s = String::new();
        while let Some(c) = self.cursor.current() {
            if !c.is_ascii_digit() {
                break;
            }
            s.push(c);
            self.cursor.advance();
        }
        self.number_break = match self.cursor.current() {
            None => true,
            Some(c) => is_basic_whitespace(c) || is_line_terminator(c),
        };
        match s.parse::<BigInt>() {
            Ok(n) => Token::Number(n),
            Err(_) => Token::Unknown(s),
        }
    }

    fn keyword(&mut self) -> Token {
        let mut s = String::new();
        while let Some(c) = self.cursor.current() {
            if !c.is_ascii_alphabetic() {
                break;
            }
            s.push(c.to_ascii_uppercase());
            self.cursor.advance();
        }
        match Word::from_str(&s) {
            Some(word) => Token::Word(word),
            None => Token::Unknown(s),
        }
    }
}
