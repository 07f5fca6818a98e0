use crate::lang::{Lexer, Operator, SourceCursor, Token, Word, MAX_STRING_LITERAL};
use num_bigint::BigInt;

fn lexer(source: &str) -> Lexer {
    Lexer::new(SourceCursor::new(source))
}

fn collect(source: &str) -> Vec<Token> {
    let mut lexer = lexer(source);
    let mut tokens = vec![lexer.current().clone()];
    while !lexer.finished() {
        lexer.advance();
        tokens.push(lexer.current().clone());
    }
    tokens
}

fn num(n: i64) -> Token {
    Token::Number(BigInt::from(n))
}

#[test]
fn test_hello_tokens() {
    assert_eq!(
        collect("10 PRINT \"Hello\""),
        vec![
            num(10),
            Token::Word(Word::Print),
            Token::String("Hello".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_maximal_munch() {
    assert_eq!(
        collect("a<=b>=c<>d<e"),
        vec![
            Token::Letter('a'),
            Token::Operator(Operator::LessEqual),
            Token::Letter('b'),
            Token::Operator(Operator::GreaterEqual),
            Token::Letter('c'),
            Token::Operator(Operator::NotEqual),
            Token::Letter('d'),
            Token::Operator(Operator::Less),
            Token::Letter('e'),
            Token::Eof,
        ]
    );
}

#[test]
fn test_line_terminators() {
    assert_eq!(
        collect("1\r\n2\n3\r4"),
        vec![
            num(1),
            Token::Eol,
            num(2),
            Token::Eol,
            num(3),
            Token::Eol,
            num(4),
            Token::Eof,
        ]
    );
}

#[test]
fn test_reset_idempotent() {
    let source = "10 LET a = 5\n20 PRINT a\n";
    let first = collect(source);
    let mut lexer = lexer(source);
    while !lexer.finished() {
        lexer.advance();
    }
    lexer.reset();
    let mut second = vec![lexer.current().clone()];
    while !lexer.finished() {
        lexer.advance();
        second.push(lexer.current().clone());
    }
    assert_eq!(first, second);
}

#[test]
fn test_string_truncation() {
    let long: String = "x".repeat(MAX_STRING_LITERAL + 10);
    let source = format!("\"{}\",", long);
    let tokens = collect(&source);
    assert_eq!(
        tokens,
        vec![
            Token::String("x".repeat(MAX_STRING_LITERAL)),
            Token::Separator,
            Token::Eof,
        ]
    );
}

#[test]
fn test_unterminated_string() {
    assert_eq!(
        collect("\"abc"),
        vec![Token::String("abc".to_string()), Token::Eof]
    );
}

#[test]
fn test_keyword_case_folding() {
    assert_eq!(
        collect("PrInT GoTo"),
        vec![
            Token::Word(Word::Print),
            Token::Word(Word::Goto),
            Token::Eof,
        ]
    );
}

#[test]
fn test_lowercase_letters_are_variables() {
    // An all-lowercase word is a run of variable tokens, not a keyword.
    assert_eq!(
        collect("if"),
        vec![Token::Letter('i'), Token::Letter('f'), Token::Eof]
    );
}

#[test]
fn test_unknown_tokens() {
    assert_eq!(
        collect("@"),
        vec![Token::Unknown("@".to_string()), Token::Eof]
    );
    assert_eq!(
        collect("WHILE"),
        vec![Token::Unknown("WHILE".to_string()), Token::Eof]
    );
}

#[test]
fn test_line_number_predicate() {
    assert_eq!(lexer("20 ").line_number(), Some(20));
    assert_eq!(lexer("20\n").line_number(), Some(20));
    assert_eq!(lexer("20").line_number(), Some(20));
    // Not a multiple of ten, or below ten.
    assert_eq!(lexer("25 ").line_number(), None);
    assert_eq!(lexer("5 ").line_number(), None);
    // Followed by something other than whitespace or a terminator.
    assert_eq!(lexer("20+5").line_number(), None);
    assert_eq!(lexer("20)").line_number(), None);
}

#[test]
fn test_reset_to() {
    let mut lexer = lexer("10 PRINT");
    assert!(!lexer.finished());
    lexer.reset_to(Token::Eof);
    assert!(lexer.finished());
}

#[test]
fn test_skip_to_line_end() {
    let mut lexer = lexer("REM free-form @#$ text\r\n30 x");
    assert_eq!(*lexer.current(), Token::Word(Word::Rem));
    lexer.skip_to_line_end();
    assert_eq!(*lexer.current(), num(30));
}

#[test]
fn test_checkpoint_resume() {
    let mut lexer = lexer("10 PRINT\n20 GOTO 10\n");
    while lexer.line_number() != Some(20) {
        lexer.advance();
    }
    let checkpoint = lexer.checkpoint();
    while !lexer.finished() {
        lexer.advance();
    }
    lexer.resume(checkpoint);
    assert_eq!(*lexer.current(), Token::Word(Word::Goto));
}
