use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, at_statement_end, parse_expression},
            utils::{expect, parse_comma_separated, parse_name, peek, unexpected},
        },
    },
    util::{position::Position, stack::ensure_sufficient_stack},
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a print statement (`:> a, b`).
/// - an assignment (`$x <- expr`).
/// - a conditional, a `while` loop or a for-each loop.
/// - a function definition.
/// - `!>`, `break` or `continue`.
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. If none match, the input is parsed as an expression statement.
///
/// The statement's position is taken from its first token.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Position)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    ensure_sufficient_stack(|| -> ParseResult<Statement> {
        if let Some(statement) = parse_print(tokens)? {
            return Ok(statement);
        }
        if let Some(statement) = parse_assignment(tokens)? {
            return Ok(statement);
        }
        if let Some(statement) = parse_control_flow(tokens)? {
            return Ok(statement);
        }
        if let Some(statement) = parse_function_definition(tokens)? {
            return Ok(statement);
        }
        if let Some(statement) = parse_jump(tokens)? {
            return Ok(statement);
        }

        let pos = peek(tokens).1;
        let expr = parse_expression(tokens)?;

        Ok(Statement::Expression { expr, pos })
    })
}

/// Parses a print statement: `:> expr ("," expr)*`.
///
/// At least one expression is required.
///
/// # Returns
/// - `Ok(Some(Statement::Print))` if a print statement was parsed,
/// - `Ok(None)` if the next token is not `:>`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let (Token::Print, pos) = peek(tokens) else {
        return Ok(None);
    };
    let pos = *pos;
    tokens.next();

    let mut values = vec![parse_expression(tokens)?];
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        values.push(parse_expression(tokens)?);
    }

    Ok(Some(Statement::Print { values, pos }))
}

/// Parses an assignment statement of the form `$name <- expression`.
///
/// The function performs a limited lookahead: if the next token is a
/// variable and the following token is `<-`, an assignment is parsed.
/// Otherwise no tokens are consumed, so `$x[0]` or `$x + 1` fall through to
/// the expression statement.
///
/// # Returns
/// - `Ok(Some(Statement::Assign))` if an assignment is present,
/// - `Ok(None)` otherwise.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let (Token::Variable(name), pos) = peek(tokens) else {
        return Ok(None);
    };

    let mut lookahead = tokens.clone();
    lookahead.next();
    if !matches!(lookahead.peek(), Some((Token::Arrow, _))) {
        return Ok(None);
    }

    let name = name.clone();
    let pos = *pos;
    tokens.next();
    tokens.next();

    let value = parse_expression(tokens)?;
    Ok(Some(Statement::Assign { name, value, pos }))
}

/// Parses `?`, `~` and `@>` statements.
///
/// - `? cond { ... }` with an optional `else { ... }` or `else ? ...` chain.
/// - `~ cond { ... }`
/// - `@> $var in iterable { ... }`
///
/// Returns `Ok(None)` without consuming anything for other tokens.
fn parse_control_flow<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match peek(tokens) {
        (Token::If, _) => parse_if(tokens).map(Some),
        (Token::While, pos) => {
            tokens.next();
            let condition = parse_expression(tokens)?;
            let body = parse_block(tokens)?;
            Ok(Some(Statement::While { condition,
                                       body,
                                       pos: *pos }))
        },
        (Token::ForEach, pos) => {
            tokens.next();
            let var = parse_name(tokens)?;
            expect(tokens, &Token::In)?;
            let iterable = parse_expression(tokens)?;
            let body = parse_block(tokens)?;
            Ok(Some(Statement::ForEach { var,
                                         iterable,
                                         body,
                                         pos: *pos }))
        },
        _ => Ok(None),
    }
}

/// Parses a conditional.
///
/// `else` may sit on the line after the closing brace. The lookahead skips
/// newlines on a clone of the iterator, so a statement that merely follows
/// the conditional is left untouched. `else ?` parses a nested conditional
/// into the else branch.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let pos = expect(tokens, &Token::If)?;
    let condition = parse_expression(tokens)?;
    let then_branch = parse_block(tokens)?;

    let mut lookahead = tokens.clone();
    while let Some((Token::NewLine, _)) = lookahead.peek() {
        lookahead.next();
    }
    if !matches!(lookahead.peek(), Some((Token::Else, _))) {
        return Ok(Statement::If { condition,
                                  then_branch,
                                  else_branch: None,
                                  pos });
    }

    lookahead.next();
    *tokens = lookahead;

    let else_branch = match peek(tokens) {
        (Token::If, _) => vec![parse_if(tokens)?],
        _ => parse_block(tokens)?,
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch: Some(else_branch),
                       pos })
}

/// Parses a function definition.
///
/// The syntax is:
///
/// ```text
/// @ name(param1, $param2) {
///     body
/// }
/// ```
///
/// # Returns
/// - `Ok(Some(Statement::Function))` if the next token is `@`,
/// - `Ok(None)` otherwise.
///
/// # Errors
/// - `UnexpectedToken` if the name, the parameter list or the body is
///   malformed.
/// - `DuplicateParameter` if a parameter name occurs twice.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let (Token::Function, pos) = peek(tokens) else {
        return Ok(None);
    };
    let pos = *pos;
    tokens.next();

    let name = match peek(tokens) {
        (Token::Identifier(name), _) => {
            tokens.next();
            name.clone()
        },
        other => return Err(unexpected("a function name", other)),
    };

    expect(tokens, &Token::LParen)?;
    let params = parse_comma_separated(tokens, parse_parameter, &Token::RParen)?;

    let mut seen: Vec<&str> = Vec::with_capacity(params.len());
    for (param, param_pos) in &params {
        if seen.contains(&param.as_str()) {
            return Err(ParseError::DuplicateParameter { function: name,
                                                        name:     param.clone(),
                                                        pos:      *param_pos, });
        }
        seen.push(param);
    }

    let body = parse_block(tokens)?;
    let params = params.into_iter().map(|(param, _)| param).collect();

    Ok(Some(Statement::Function(FunctionDef { name,
                                              params,
                                              body,
                                              pos })))
}

/// Parses one parameter name and remembers where it was written.
fn parse_parameter<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(String, Position)>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let pos = peek(tokens).1;
    Ok((parse_name(tokens)?, pos))
}

/// Parses the statement-terminal keywords `!>`, `break` and `continue`.
///
/// `!>` takes an optional expression; without one the function returns
/// `none`.
fn parse_jump<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match peek(tokens) {
        (Token::Return, pos) => {
            tokens.next();
            let value = if at_statement_end(tokens) {
                None
            } else {
                Some(parse_expression(tokens)?)
            };
            Ok(Some(Statement::Return { value, pos: *pos }))
        },
        (Token::Break, pos) => {
            tokens.next();
            Ok(Some(Statement::Break { pos: *pos }))
        },
        (Token::Continue, pos) => {
            tokens.next();
            Ok(Some(Statement::Continue { pos: *pos }))
        },
        _ => Ok(None),
    }
}
