use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, peek, unexpected},
        },
    },
    util::{position::Position, stack::ensure_sufficient_stack},
};

/// Parses a unary expression.
///
/// Handles prefix operators `-` and `not`, which may be stacked
/// (`not not $x`, `--1`). Anything else is handed to [`parse_postfix`].
///
/// The rule is: `unary := ("-" | "not") unary | postfix`
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let op = match peek(tokens) {
        (Token::Minus, pos) => Some((UnaryOperator::Negate, *pos)),
        (Token::Not, pos) => Some((UnaryOperator::Not, *pos)),
        _ => None,
    };

    if let Some((op, pos)) = op {
        tokens.next();
        let operand = ensure_sufficient_stack(|| parse_unary(tokens))?;
        return Ok(Expr::Unary { op,
                                operand: Box::new(operand),
                                pos });
    }

    parse_postfix(tokens)
}

/// Parses a primary expression followed by any number of `[index]`
/// suffixes.
///
/// The rule is: `postfix := primary ("[" expression "]")*`
///
/// # Example
/// ```
/// use djerba::{
///     ast::Expr,
///     interpreter::{lexer::scan, parser::unary::parse_postfix},
/// };
///
/// let tokens = scan("$grid[1][0]").unwrap();
/// let expr = parse_postfix(&mut tokens.iter().peekable()).unwrap();
///
/// let Expr::Index { target, .. } = expr else { panic!("expected an index") };
/// assert!(matches!(*target, Expr::Index { .. }));
/// ```
pub fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut expr = parse_primary(tokens)?;

    while let (Token::LBracket, pos) = peek(tokens) {
        tokens.next();
        let index = parse_expression(tokens)?;
        expect(tokens, &Token::RBracket)?;
        expr = Expr::Index { target: Box::new(expr),
                             index:  Box::new(index),
                             pos:    *pos, };
    }

    Ok(expr)
}

/// Parses a primary expression.
///
/// Primary expressions include:
/// - number, string and boolean literals,
/// - list literals (`[a, b, c]`),
/// - variables (`$name`),
/// - calls (`name(args)`) and bare names (`PI`, parameters),
/// - parenthesized expressions.
///
/// # Errors
/// Returns `UnexpectedToken` expecting "an expression" on any other token,
/// including the end of a line or of the input.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let next = peek(tokens);
    let pos = next.1;

    let literal = |value: LiteralValue| Expr::Literal { value, pos };

    let expr = match &next.0 {
        Token::Number(n) => {
            tokens.next();
            literal(LiteralValue::Number(*n))
        },
        Token::Str(s) => {
            tokens.next();
            literal(LiteralValue::Str(s.clone()))
        },
        Token::Bool(b) => {
            tokens.next();
            literal(LiteralValue::Bool(*b))
        },
        Token::LBracket => {
            tokens.next();
            let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
            Expr::List { elements, pos }
        },
        Token::Variable(name) => {
            tokens.next();
            Expr::Variable { name: name.clone(),
                             pos }
        },
        Token::Identifier(name) => {
            tokens.next();
            if let (Token::LParen, _) = peek(tokens) {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                Expr::Call { name: name.clone(),
                             arguments,
                             pos }
            } else {
                Expr::Variable { name: name.clone(),
                                 pos }
            }
        },
        Token::LParen => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen)?;
            expr
        },
        _ => return Err(unexpected("an expression", next)),
    };

    Ok(expr)
}
