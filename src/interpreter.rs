/// The environment module holds scope records.
///
/// Environments map names to values and chain to their enclosing scope.
/// Function calls and for-each iterations create child environments, and
/// closures keep their defining environment alive.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, executes statements, evaluates
/// expressions and dispatches built-in functions. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, user functions, closures and control flow.
/// - Reports runtime errors such as division by zero or undefined names.
pub mod evaluator;
/// The host module connects programs to output and input.
pub mod host;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// variables, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Handles numeric and string literals, names, sigil variables, and
///   operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with positions.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values a program manipulates: numbers, strings,
/// booleans, lists, functions and `none`. It also provides truthiness, the
/// display rule used by print, and typed accessors that report mismatches.
pub mod value;
