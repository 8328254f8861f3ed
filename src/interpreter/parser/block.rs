use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, expect_statement_end},
            statement::parse_statement,
            utils::{expect, peek, skip_newlines, unexpected},
        },
    },
    util::position::Position,
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements, separated by newlines.
/// Parsing continues until the matching `}` token is consumed. Leading and
/// trailing newlines inside the block are ignored.
///
/// Grammar: `block := "{" (statement NEWLINE*)* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The statements of the block.
///
/// # Errors
/// - `UnexpectedToken` if the block does not start with `{`.
/// - `UnexpectedToken` expecting `'}'` if the input ends inside the block.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    expect(tokens, &Token::LBrace)?;
    let mut statements = Vec::new();

    loop {
        skip_newlines(tokens);

        match peek(tokens) {
            (Token::RBrace, _) => {
                tokens.next();
                break;
            },
            end @ (Token::EndOfInput, _) => return Err(unexpected("'}'", end)),
            _ => {},
        }

        statements.push(parse_statement(tokens)?);
        expect_statement_end(tokens)?;
    }

    Ok(statements)
}
