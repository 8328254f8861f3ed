use crate::util::position::Position;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code. List literals are not constants; they are [`Expr::List`] because
/// every evaluation must produce a fresh, independently mutable list.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A double-precision number.
    Number(f64),
    /// A string with its quotes removed.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Each variant models a distinct syntactic construct and records a
/// position for error reporting: the first token for most nodes, the
/// operator token for binary, logical and index expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Position in the source code.
        pos:   Position,
    },
    /// Reference to a variable by name, written `$name` or bare `name`.
    Variable {
        /// Name of the variable, without the sigil.
        name: String,
        /// Position in the source code.
        pos:  Position,
    },
    /// List literal expression such as `[1, "two", $three]`.
    List {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Position in the source code.
        pos:      Position,
    },
    /// Indexing expression (e.g., `$list[2]`).
    Index {
        /// The value being indexed.
        target: Box<Self>,
        /// The index to access.
        index:  Box<Self>,
        /// Position in the source code.
        pos:    Position,
    },
    /// A unary operation (negation or `not`).
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Position in the source code.
        pos:     Position,
    },
    /// A binary arithmetic or comparison operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Position in the source code.
        pos:   Position,
    },
    /// A short-circuiting `and` / `or`.
    Logical {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand, evaluated only when the left does not decide.
        right: Box<Self>,
        /// Position in the source code.
        pos:   Position,
    },
    /// Function call expression (e.g. `sqrt($x)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Position in the source code.
        pos:       Position,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use djerba::{ast::Expr, util::position::Position};
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             pos:  Position::new(5, 2), };
    ///
    /// assert_eq!(expr.position(), Position::new(5, 2));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { pos, .. }
            | Self::Variable { pos, .. }
            | Self::List { pos, .. }
            | Self::Index { pos, .. }
            | Self::Unary { pos, .. }
            | Self::Binary { pos, .. }
            | Self::Logical { pos, .. }
            | Self::Call { pos, .. } => *pos,
        }
    }
}

/// Represents a user-defined function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in call order.
    pub params: Vec<String>,
    /// The statements executed when the function is called.
    pub body:   Vec<Statement>,
    /// Position in the source code.
    pub pos:    Position,
}

/// Represents a statement.
///
/// A program is a sequence of statements, one per logical line, and blocks
/// are sequences of statements between braces.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `$name <- value`
    Assign {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Position in the source code.
        pos:   Position,
    },
    /// `:> a, b, c`
    Print {
        /// The expressions printed, left to right.
        values: Vec<Expr>,
        /// Position in the source code.
        pos:    Position,
    },
    /// `? condition { ... } else { ... }`
    If {
        /// The condition, tested for truthiness.
        condition:   Expr,
        /// Statements run when the condition is truthy.
        then_branch: Vec<Statement>,
        /// Statements run otherwise, if present.
        else_branch: Option<Vec<Statement>>,
        /// Position in the source code.
        pos:         Position,
    },
    /// `~ condition { ... }`
    While {
        /// The loop condition, re-tested before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Statement>,
        /// Position in the source code.
        pos:       Position,
    },
    /// `@> $var in iterable { ... }`
    ForEach {
        /// The loop variable bound for each element.
        var:      String,
        /// The list (or string) iterated over.
        iterable: Expr,
        /// The loop body.
        body:     Vec<Statement>,
        /// Position in the source code.
        pos:      Position,
    },
    /// `@ name(params) { ... }`
    Function(FunctionDef),
    /// `!> value`
    Return {
        /// The returned value; `None` yields the none value.
        value: Option<Expr>,
        /// Position in the source code.
        pos:   Position,
    },
    /// `break`
    Break {
        /// Position in the source code.
        pos: Position,
    },
    /// `continue`
    Continue {
        /// Position in the source code.
        pos: Position,
    },
    /// A standalone expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Position in the source code.
        pos:  Position,
    },
}

impl Statement {
    /// Gets the source position from `self`.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Function(def) => def.pos,
            Self::Assign { pos, .. }
            | Self::Print { pos, .. }
            | Self::If { pos, .. }
            | Self::While { pos, .. }
            | Self::ForEach { pos, .. }
            | Self::Return { pos, .. }
            | Self::Break { pos }
            | Self::Continue { pos }
            | Self::Expression { pos, .. } => *pos,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons. The logical
/// operators live in [`LogicalOperator`] because they do not evaluate both
/// operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floored modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a short-circuiting logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "not"),
        }
    }
}
