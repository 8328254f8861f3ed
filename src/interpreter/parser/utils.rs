use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
    util::position::Position,
};

/// Returned by [`peek`] once the iterator is exhausted. The lexer always
/// emits a final [`Token::EndOfInput`], so this only matters after a parser
/// has consumed it.
static END_OF_INPUT: (Token, Position) = (Token::EndOfInput, Position { line:   0,
                                                                       column: 0, });

/// Returns the next token without consuming it.
pub(in crate::interpreter::parser) fn peek<'a, I>(tokens: &mut Peekable<I>) -> &'a (Token, Position)
    where I: Iterator<Item = &'a (Token, Position)>
{
    tokens.peek().copied().unwrap_or(&END_OF_INPUT)
}

/// Builds the error for a token that does not fit the grammar.
pub(in crate::interpreter::parser) fn unexpected(expected: impl Into<String>,
                                                 (found, pos): &(Token, Position))
                                                 -> ParseError {
    ParseError::UnexpectedToken { expected: expected.into(),
                                  found:    found.to_string(),
                                  pos:      *pos, }
}

/// Consumes `expected` or fails with a description of what was found.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The token that must come next.
///
/// # Returns
/// The position of the consumed token.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let next = peek(tokens);
    if &next.0 == expected {
        tokens.next();
        return Ok(next.1);
    }
    Err(unexpected(format!("'{}'", expected.lexeme()), next))
}

/// Skips any number of consecutive newline tokens.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, Position)>
{
    while let Some((Token::NewLine, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by list literals, call arguments, print
/// statements and parameter lists. It repeatedly calls `parse_item` to parse
/// one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
/// Newlines around items are ignored so that long lists may span lines.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
///
/// # Returns
/// A vector of parsed items.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut items = Vec::new();
    skip_newlines(tokens);
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        skip_newlines(tokens);
        items.push(parse_item(tokens)?);
        skip_newlines(tokens);
        match peek(tokens) {
            (Token::Comma, _) => {
                tokens.next();
            },
            (tok, _) if tok == closing => {
                tokens.next();
                break;
            },
            other => {
                return Err(unexpected(format!("',' or '{}'", closing.lexeme()), other));
            },
        }
    }
    Ok(items)
}

/// Parses a name and returns it without its sigil.
///
/// Accepts both bare identifiers and `$`-prefixed variables, which is how
/// parameters and loop variables may be written.
///
/// # Errors
/// Returns a `ParseError` if the next token is not a name.
pub(in crate::interpreter::parser) fn parse_name<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match peek(tokens) {
        (Token::Identifier(name) | Token::Variable(name), _) => {
            tokens.next();
            Ok(name.clone())
        },
        other => Err(unexpected("a name", other)),
    }
}
