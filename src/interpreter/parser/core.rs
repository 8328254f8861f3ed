use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_logical_or,
            statement::parse_statement,
            utils::{peek, skip_newlines, unexpected},
        },
    },
    util::{position::Position, stack::ensure_sufficient_stack},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// A program is a sequence of statements separated by newlines. Blank lines
/// are ignored. Parsing stops at [`Token::EndOfInput`].
///
/// Grammar: `program := (statement NEWLINE*)* END`
///
/// # Errors
/// Returns the first `ParseError` encountered. No recovery is attempted.
///
/// # Example
/// ```
/// use djerba::interpreter::{lexer::scan, parser::core::parse};
///
/// let tokens = scan("$x <- 1\n\n:> $x\n").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse(tokens: &[(Token, Position)]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        skip_newlines(&mut iter);
        if let (Token::EndOfInput, _) = peek(&mut iter) {
            break;
        }
        statements.push(parse_statement(&mut iter)?);
        expect_statement_end(&mut iter)?;
    }

    tracing::debug!(count = statements.len(), "parsed program");
    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    ensure_sufficient_stack(|| parse_logical_or(tokens))
}

/// Checks that a statement is not followed by stray tokens.
///
/// A statement ends at a newline, at the `}` closing its block, or at the end
/// of input. Newlines are consumed; `}` and end of input are left for the
/// caller.
///
/// # Errors
/// Returns `UnexpectedToken` if anything else follows the statement.
pub(in crate::interpreter::parser) fn expect_statement_end<'a, I>(tokens: &mut Peekable<I>)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match peek(tokens) {
        (Token::NewLine, _) => {
            skip_newlines(tokens);
            Ok(())
        },
        (Token::RBrace | Token::EndOfInput, _) => Ok(()),
        other => Err(unexpected("end of statement", other)),
    }
}

/// Returns whether the next token ends the current statement without
/// consuming it.
pub(in crate::interpreter::parser) fn at_statement_end<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, Position)>
{
    matches!(peek(tokens),
             (Token::NewLine | Token::RBrace | Token::EndOfInput, _))
}
