use num_bigint::BigInt;

/// Every keyword spelling paired with its tag. Consulted by the keyword
/// lexer and by the token-name formatter so the two can never disagree.
const KEYWORDS: [(&str, Word); 6] = [
    ("LET", Word::Let),
    ("IF", Word::If),
    ("THEN", Word::Then),
    ("PRINT", Word::Print),
    ("REM", Word::Rem),
    ("GOTO", Word::Goto),
];

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Eof,
    Eol,
    Number(BigInt),
    Letter(char),
    String(String),
    Word(Word),
    Operator(Operator),
    Separator,
    LParen,
    RParen,
    LBracket,
    RBracket,
}

impl Token {
    /// The uppercase token name printed by the token-dump mode.
    pub fn name(&self) -> &'static str {
        use Token::*;
        match self {
            Unknown(_) => "ERROR",
            Eof => "EOF",
            Eol => "EOL",
            Number(_) => "NUMBER",
            Letter(_) => "LETTER",
            String(_) => "STRING",
            Word(w) => w.as_str(),
            Operator(op) => op.name(),
            Separator => "SEPARATOR",
            LParen => "LPAREN",
            RParen => "RPAREN",
            LBracket => "LBRACKET",
            RBracket => "RBRACKET",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Eof => write!(f, "end of input"),
            Eol => write!(f, "end of line"),
            Number(n) => write!(f, "{}", n),
            Letter(c) => write!(f, "{}", c),
            String(s) => write!(f, "\"{}\"", s),
            Word(w) => write!(f, "{}", w),
            Operator(op) => write!(f, "{}", op),
            Separator => write!(f, ","),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            LBracket => write!(f, "["),
            RBracket => write!(f, "]"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Let,
    If,
    Then,
    Print,
    Rem,
    Goto,
}

impl Word {
    pub fn from_str(s: &str) -> Option<Word> {
        KEYWORDS
            .iter()
            .find(|(spelling, _)| *spelling == s)
            .map(|(_, word)| *word)
    }

    pub fn as_str(&self) -> &'static str {
        KEYWORDS
            .iter()
            .find(|(_, word)| word == self)
            .map(|(spelling, _)| *spelling)
            .unwrap_or("")
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn name(&self) -> &'static str {
        use Operator::*;
        match self {
            Equal => "EQUAL",
            NotEqual => "NOT_EQUAL",
            Less => "LESS",
            LessEqual => "LESS_EQUAL",
            Greater => "GREATER",
            GreaterEqual => "GREATER_EQUAL",
            Plus => "PLUS",
            Minus => "MINUS",
            Multiply => "MULTIPLY",
            Divide => "DIVIDE",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let w = Word::from_str("REM");
        assert_eq!(w, Some(Word::Rem));
        let w = Word::from_str("PICKLES");
        assert_eq!(w, None);
    }

    #[test]
    fn test_dump_names() {
        assert_eq!(Token::Unknown("@".to_string()).name(), "ERROR");
        assert_eq!(Token::Number(BigInt::from(10)).name(), "NUMBER");
        assert_eq!(Token::Word(Word::Print).name(), "PRINT");
        assert_eq!(Token::Operator(Operator::NotEqual).name(), "NOT_EQUAL");
        assert_eq!(Token::Separator.name(), "SEPARATOR");
        assert_eq!(Token::LBracket.name(), "LBRACKET");
    }

    #[test]
    fn test_spelling_round_trip() {
        for (spelling, word) in &[("LET", Word::Let), ("GOTO", Word::Goto)] {
            assert_eq!(word.as_str(), *spelling);
            assert_eq!(Word::from_str(spelling), Some(*word));
        }
    }
}
