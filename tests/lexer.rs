use djerba::{
    error::LexError,
    interpreter::lexer::{Token, scan},
    util::position::Position,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn tokens(src: &str) -> Vec<Token> {
    scan(src).unwrap().into_iter().map(|(token, _)| token).collect()
}

const KEYWORDS: &[&str] = &["true", "false", "else", "in", "break", "continue", "and", "or", "not"];

#[test]
fn test_statement_markers() {
    assert_eq!(tokens(":> @> @ !> ? ~ <-"),
               vec![Token::Print,
                    Token::ForEach,
                    Token::Function,
                    Token::Return,
                    Token::If,
                    Token::While,
                    Token::Arrow,
                    Token::EndOfInput]);
}

#[test]
fn test_longest_operator_wins() {
    assert_eq!(tokens("<= < >= > == != <-"),
               vec![Token::LessEqual,
                    Token::Less,
                    Token::GreaterEqual,
                    Token::Greater,
                    Token::EqualEqual,
                    Token::BangEqual,
                    Token::Arrow,
                    Token::EndOfInput]);
    assert_eq!(tokens("$a<-1"),
               vec![Token::Variable("a".into()),
                    Token::Arrow,
                    Token::Number(1.0),
                    Token::EndOfInput]);
}

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(tokens("else elsewhere in index not nothing"),
               vec![Token::Else,
                    Token::Identifier("elsewhere".into()),
                    Token::In,
                    Token::Identifier("index".into()),
                    Token::Not,
                    Token::Identifier("nothing".into()),
                    Token::EndOfInput]);
    assert_eq!(tokens("true false"),
               vec![Token::Bool(true), Token::Bool(false), Token::EndOfInput]);
}

#[test]
fn test_literals() {
    assert_eq!(tokens("42 3.25 \"hi there\" \"\""),
               vec![Token::Number(42.0),
                    Token::Number(3.25),
                    Token::Str("hi there".into()),
                    Token::Str(String::new()),
                    Token::EndOfInput]);
}

#[test]
fn test_strings_are_not_unescaped() {
    assert_eq!(tokens(r#""a\nb""#), vec![Token::Str(r"a\nb".into()), Token::EndOfInput]);
    assert_eq!(tokens("\"two\nlines\""), vec![Token::Str("two\nlines".into()), Token::EndOfInput]);
}

#[test]
fn test_comments_and_newlines() {
    assert_eq!(tokens(":> 1 ;; note\n\n;; another\n:> 2"),
               vec![Token::Print,
                    Token::Number(1.0),
                    Token::NewLine,
                    Token::NewLine,
                    Token::NewLine,
                    Token::Print,
                    Token::Number(2.0),
                    Token::EndOfInput]);
    assert_eq!(tokens(""), vec![Token::EndOfInput]);
}

#[test]
fn test_positions() {
    let scanned = scan("$x <- 1\n  :> $x").unwrap();
    let positions: Vec<_> = scanned.iter().map(|(_, pos)| *pos).collect();

    assert_eq!(positions,
               vec![Position::new(1, 1),
                    Position::new(1, 4),
                    Position::new(1, 7),
                    Position::new(1, 8),
                    Position::new(2, 3),
                    Position::new(2, 6),
                    Position::new(2, 8)]);
}

#[test]
fn test_unexpected_character() {
    assert_eq!(scan(":> 1 # 2"),
               Err(LexError::UnexpectedCharacter { ch:  '#',
                                                   pos: Position::new(1, 6), }));
    assert!(matches!(scan("$ x"), Err(LexError::UnexpectedCharacter { ch: '$', .. })));
    assert!(matches!(scan("\n  &"),
                     Err(LexError::UnexpectedCharacter { pos: Position { line: 2, column: 3 }, .. })));
}

#[test]
fn test_unterminated_string() {
    assert_eq!(scan(":> \"open"),
               Err(LexError::UnterminatedString { pos: Position::new(1, 4) }));
}

#[test]
fn test_lex_error_message() {
    let err = scan("\n:> 1 # 2").unwrap_err();
    assert_eq!(err.to_string(), "Error on line 2, column 6: Unexpected character '#'.");
}

proptest! {
    #[test]
    fn integers_scan_to_their_value(n in 0u32..1_000_000) {
        prop_assert_eq!(tokens(&n.to_string()),
                        vec![Token::Number(f64::from(n)), Token::EndOfInput]);
    }

    #[test]
    fn decimals_scan_to_their_value(whole in 0u32..10_000, frac in 0u32..100) {
        let text = format!("{whole}.{frac:02}");
        let expected: f64 = text.parse().unwrap();
        prop_assert_eq!(tokens(&text), vec![Token::Number(expected), Token::EndOfInput]);
    }

    #[test]
    fn names_scan_as_identifiers_or_variables(name in "[a-z_][a-z0-9_]{0,8}") {
        prop_assume!(!KEYWORDS.contains(&name.as_str()));

        prop_assert_eq!(tokens(&name), vec![Token::Identifier(name.clone()), Token::EndOfInput]);
        prop_assert_eq!(tokens(&format!("${name}")),
                        vec![Token::Variable(name.clone()), Token::EndOfInput]);
    }
}
