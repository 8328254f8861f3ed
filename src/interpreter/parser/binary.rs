use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary, utils::peek},
    },
    util::position::Position,
};

/// Parses logical OR expressions.
///
/// The rule is: `logical_or := logical_and ("or" logical_and)*`
///
/// # Returns
/// An `Expr::Logical` chain, or the operand itself if no `or` follows.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_logical_and(tokens)?;
    while let (Token::Or, pos) = peek(tokens) {
        tokens.next();
        let right = parse_logical_and(tokens)?;
        left = Expr::Logical { left:  Box::new(left),
                               op:    LogicalOperator::Or,
                               right: Box::new(right),
                               pos:   *pos, };
    }
    Ok(left)
}

/// Parses logical AND expressions.
///
/// The rule is: `logical_and := equality ("and" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_equality(tokens)?;
    while let (Token::And, pos) = peek(tokens) {
        tokens.next();
        let right = parse_equality(tokens)?;
        left = Expr::Logical { left:  Box::new(left),
                               op:    LogicalOperator::And,
                               right: Box::new(right),
                               pos:   *pos, };
    }
    Ok(left)
}

/// Parses equality operators `==` and `!=`.
///
/// The rule is: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_left_associative(tokens,
                           parse_relational,
                           &[BinaryOperator::Equal, BinaryOperator::NotEqual])
}

/// Parses relational operators `<`, `<=`, `>` and `>=`.
///
/// The rule is: `relational := additive (("<" | "<=" | ">" | ">=") additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_left_associative(tokens,
                           parse_additive,
                           &[BinaryOperator::Less,
                             BinaryOperator::LessEqual,
                             BinaryOperator::Greater,
                             BinaryOperator::GreaterEqual])
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_left_associative(tokens,
                           parse_multiplicative,
                           &[BinaryOperator::Add, BinaryOperator::Sub])
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := power (("*" | "/" | "%") power)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_left_associative(tokens,
                           parse_power,
                           &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod])
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as
/// `a ^ (b ^ c)`.
///
/// The rule is: `power := unary ("^" power)?`
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let left = parse_unary(tokens)?;
    if let (Token::Caret, pos) = peek(tokens) {
        tokens.next();
        let right = parse_power(tokens)?;
        return Ok(Expr::Binary { left:  Box::new(left),
                                 op:    BinaryOperator::Pow,
                                 right: Box::new(right),
                                 pos:   *pos, });
    }
    Ok(left)
}

/// Parses one left-associative precedence level.
///
/// Parses an operand with `parse_operand`, then keeps folding
/// `operator operand` pairs into the left side while the next token maps to
/// one of `operators`.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 parse_operand: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                                 operators: &[BinaryOperator])
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = parse_operand(tokens)?;
    loop {
        let (token, pos) = peek(tokens);
        let Some(op) = token_to_binary_operator(token) else {
            break;
        };
        if !operators.contains(&op) {
            break;
        }
        tokens.next();
        let right = parse_operand(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              pos: *pos };
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents an arithmetic or
/// comparison operator. Logical operators are handled separately because
/// they short-circuit.
///
/// # Example
/// ```
/// use djerba::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::And), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Pow, Sub,
    };

    match token {
        Token::Plus => Some(Add),
        Token::Minus => Some(Sub),
        Token::Star => Some(Mul),
        Token::Slash => Some(Div),
        Token::Percent => Some(Mod),
        Token::Caret => Some(Pow),
        Token::EqualEqual => Some(Equal),
        Token::BangEqual => Some(NotEqual),
        Token::Less => Some(Less),
        Token::LessEqual => Some(LessEqual),
        Token::Greater => Some(Greater),
        Token::GreaterEqual => Some(GreaterEqual),
        _ => None,
    }
}
