use logos::Logos;

use crate::{
    error::LexError,
    util::position::{LineIndex, Position},
};

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Multi-character operators (`<-`, `:>`, `@>`, `!>`, `==`, ...) win over
/// their single-character prefixes because the lexer always takes the longest
/// match.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens. The quotes are stripped; nothing is unescaped.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// A `$`-prefixed variable name such as `$count`. Holds the bare name.
    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice()[1..].to_string())]
    Variable(String),
    /// Identifier tokens; function names, parameters and constants.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// `?`
    #[token("?")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `~`
    #[token("~")]
    While,
    /// `@>`
    #[token("@>")]
    ForEach,
    /// `in`
    #[token("in")]
    In,
    /// `@`
    #[token("@")]
    Function,
    /// `!>`
    #[token("!>")]
    Return,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,

    /// `<-`
    #[token("<-")]
    Arrow,
    /// `:>`
    #[token(":>")]
    Print,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,

    /// `;; Comments.`
    #[regex(r";;[^\n]*", logos::skip)]
    Comment,
    /// Line breaks terminate statements.
    #[token("\n")]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,

    /// Appended once after the last real token.
    EndOfInput,
}

/// The broad category of a [`Token`], used when describing tokens in
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A bare name.
    Identifier,
    /// A `$`-prefixed name.
    Variable,
    /// A number literal.
    Number,
    /// A string literal.
    String,
    /// `true` or `false`.
    Boolean,
    /// A reserved word or statement marker.
    Keyword,
    /// An arithmetic, comparison or assignment operator.
    Operator,
    /// Brackets, braces, parentheses and commas.
    Punctuation,
    /// A line break.
    NewLine,
    /// The end of the token stream.
    EndOfInput,
}

impl Token {
    /// Returns the category of this token.
    ///
    /// # Example
    /// ```
    /// use djerba::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Arrow.kind(), TokenKind::Operator);
    /// assert_eq!(Token::If.kind(), TokenKind::Keyword);
    /// assert_eq!(Token::Variable("x".into()).kind(), TokenKind::Variable);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Str(_) => TokenKind::String,
            Self::Bool(_) => TokenKind::Boolean,
            Self::Variable(_) => TokenKind::Variable,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::If
            | Self::Else
            | Self::While
            | Self::ForEach
            | Self::In
            | Self::Function
            | Self::Return
            | Self::Break
            | Self::Continue
            | Self::And
            | Self::Or
            | Self::Not
            | Self::Print => TokenKind::Keyword,
            Self::Arrow
            | Self::Plus
            | Self::Minus
            | Self::Star
            | Self::Slash
            | Self::Percent
            | Self::Caret
            | Self::EqualEqual
            | Self::BangEqual
            | Self::LessEqual
            | Self::GreaterEqual
            | Self::Less
            | Self::Greater => TokenKind::Operator,
            Self::LParen
            | Self::RParen
            | Self::LBrace
            | Self::RBrace
            | Self::LBracket
            | Self::RBracket
            | Self::Comma => TokenKind::Punctuation,
            Self::NewLine | Self::Comment | Self::Ignored => TokenKind::NewLine,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// The source text this token was scanned from.
    #[must_use]
    pub fn lexeme(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Str(s) => format!("\"{s}\""),
            Self::Bool(b) => b.to_string(),
            Self::Variable(name) => format!("${name}"),
            Self::Identifier(name) => name.clone(),
            Self::If => "?".into(),
            Self::Else => "else".into(),
            Self::While => "~".into(),
            Self::ForEach => "@>".into(),
            Self::In => "in".into(),
            Self::Function => "@".into(),
            Self::Return => "!>".into(),
            Self::Break => "break".into(),
            Self::Continue => "continue".into(),
            Self::And => "and".into(),
            Self::Or => "or".into(),
            Self::Not => "not".into(),
            Self::Arrow => "<-".into(),
            Self::Print => ":>".into(),
            Self::Plus => "+".into(),
            Self::Minus => "-".into(),
            Self::Star => "*".into(),
            Self::Slash => "/".into(),
            Self::Percent => "%".into(),
            Self::Caret => "^".into(),
            Self::EqualEqual => "==".into(),
            Self::BangEqual => "!=".into(),
            Self::LessEqual => "<=".into(),
            Self::GreaterEqual => ">=".into(),
            Self::Less => "<".into(),
            Self::Greater => ">".into(),
            Self::LParen => "(".into(),
            Self::RParen => ")".into(),
            Self::LBrace => "{".into(),
            Self::RBrace => "}".into(),
            Self::LBracket => "[".into(),
            Self::RBracket => "]".into(),
            Self::Comma => ",".into(),
            Self::Comment | Self::Ignored | Self::NewLine => "\n".into(),
            Self::EndOfInput => String::new(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            TokenKind::NewLine => write!(f, "end of line"),
            TokenKind::EndOfInput => write!(f, "end of input"),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.lexeme()),
            TokenKind::Variable => write!(f, "variable '{}'", self.lexeme()),
            TokenKind::Number => write!(f, "number {}", self.lexeme()),
            TokenKind::String => write!(f, "string {}", self.lexeme()),
            _ => write!(f, "'{}'", self.lexeme()),
        }
    }
}

/// Scans `source` into tokens paired with their positions.
///
/// Whitespace and `;;` comments are dropped. The returned sequence always
/// ends with a single [`Token::EndOfInput`].
///
/// # Errors
/// - `UnterminatedString` if a `"` has no closing quote.
/// - `UnexpectedCharacter` for any character that starts no token.
///
/// # Example
/// ```
/// use djerba::interpreter::lexer::{Token, scan};
///
/// let tokens = scan("$x <- 1.5 ;; set x").unwrap();
/// let tokens: Vec<_> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(tokens,
///            vec![Token::Variable("x".into()),
///                 Token::Arrow,
///                 Token::Number(1.5),
///                 Token::EndOfInput]);
/// ```
pub fn scan(source: &str) -> Result<Vec<(Token, Position)>, LexError> {
    let index = LineIndex::new(source);
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let pos = index.position(lexer.span().start);
        if let Ok(tok) = token {
            tokens.push((tok, pos));
        } else {
            let slice = lexer.slice();
            if slice.starts_with('"') {
                return Err(LexError::UnterminatedString { pos });
            }
            let ch = slice.chars().next().unwrap_or_default();
            return Err(LexError::UnexpectedCharacter { ch, pos });
        }
    }

    tokens.push((Token::EndOfInput, index.position(source.len())));
    tracing::debug!(count = tokens.len(), "scanned source");
    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid number, which the lexer reports as
///   an error.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
