use djerba::{
    ast::{BinaryOperator, Expr, LiteralValue, LogicalOperator, Statement, UnaryOperator},
    error::ParseError,
    interpreter::{lexer::scan, parser::core::parse},
    util::position::Position,
};
use pretty_assertions::assert_eq;

fn parse_source(src: &str) -> Result<Vec<Statement>, ParseError> {
    parse(&scan(src).unwrap())
}

/// Parses `src` as a single expression statement and returns the expression.
fn expr(src: &str) -> Expr {
    let mut program = parse_source(src).unwrap();
    assert_eq!(program.len(), 1, "{src:?}");
    match program.remove(0) {
        Statement::Expression { expr, .. } => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

/// Renders an expression with explicit grouping so shapes are easy to compare.
fn shape(expr: &Expr) -> String {
    match expr {
        Expr::Literal { value: LiteralValue::Number(n), .. } => n.to_string(),
        Expr::Literal { value: LiteralValue::Str(s), .. } => format!("{s:?}"),
        Expr::Literal { value: LiteralValue::Bool(b), .. } => b.to_string(),
        Expr::Variable { name, .. } => name.clone(),
        Expr::List { elements, .. } => {
            format!("[{}]", elements.iter().map(shape).collect::<Vec<_>>().join(" "))
        },
        Expr::Index { target, index, .. } => format!("{}[{}]", shape(target), shape(index)),
        Expr::Unary { op, operand, .. } => {
            let op = match op {
                UnaryOperator::Negate => "-",
                UnaryOperator::Not => "not ",
            };
            format!("({op}{})", shape(operand))
        },
        Expr::Binary { left, op, right, .. } => format!("({} {op} {})", shape(left), shape(right)),
        Expr::Logical { left, op, right, .. } => {
            let op = match op {
                LogicalOperator::And => "and",
                LogicalOperator::Or => "or",
            };
            format!("({} {op} {})", shape(left), shape(right))
        },
        Expr::Call { name, arguments, .. } => {
            format!("{name}({})", arguments.iter().map(shape).collect::<Vec<_>>().join(" "))
        },
    }
}

fn assert_shape(src: &str, expected: &str) {
    assert_eq!(shape(&expr(src)), expected, "{src:?}");
}

#[test]
fn test_arithmetic_precedence() {
    assert_shape("1 + 2 * 3", "(1 + (2 * 3))");
    assert_shape("1 * 2 + 3", "((1 * 2) + 3)");
    assert_shape("8 - 4 - 2", "((8 - 4) - 2)");
    assert_shape("8 / 4 % 3", "((8 / 4) % 3)");
    assert_shape("(1 + 2) * 3", "((1 + 2) * 3)");
}

#[test]
fn test_power_is_right_associative() {
    assert_shape("2 ^ 3 ^ 2", "(2 ^ (3 ^ 2))");
    assert_shape("2 * 3 ^ 2", "(2 * (3 ^ 2))");
}

#[test]
fn test_unary_binds_tighter_than_power() {
    assert_shape("-2 ^ 2", "((-2) ^ 2)");
    assert_shape("- -$x", "(-(-x))");
    assert_shape("not $a and $b", "((not a) and b)");
}

#[test]
fn test_comparison_and_logic_levels() {
    assert_shape("$a < 1 == $b > 2", "((a < 1) == (b > 2))");
    assert_shape("$a or $b and $c", "(a or (b and c))");
    assert_shape("$a and $b or $c", "((a and b) or c)");
    assert_shape("1 + 1 >= 2 and true", "(((1 + 1) >= 2) and true)");
}

#[test]
fn test_calls_and_indexing() {
    assert_shape("f()", "f()");
    assert_shape("max(1, $x, [2, 3])", "max(1 x [2 3])");
    assert_shape("$grid[1][2]", "grid[1][2]");
    assert_shape("range(5)[0] + 1", "(range(5)[0] + 1)");
    assert_shape("PI", "PI");
}

#[test]
fn test_call_arguments_may_span_lines() {
    assert_shape("max(\n    1,\n    2\n)", "max(1 2)");
    assert_shape("[\n    1,\n    2\n]", "[1 2]");
}

#[test]
fn test_statement_forms() {
    let program = parse_source("$x <- 1\n:> $x, 2\nbreak\ncontinue\n!>\n!> $x").unwrap();

    assert!(matches!(&program[0], Statement::Assign { name, .. } if name == "x"));
    assert!(matches!(&program[1], Statement::Print { values, .. } if values.len() == 2));
    assert!(matches!(program[2], Statement::Break { .. }));
    assert!(matches!(program[3], Statement::Continue { .. }));
    assert!(matches!(program[4], Statement::Return { value: None, .. }));
    assert!(matches!(program[5], Statement::Return { value: Some(_), .. }));
}

#[test]
fn test_function_definition() {
    let program = parse_source("@ add(a, b) {\n    !> a + b\n}").unwrap();

    let [Statement::Function(def)] = program.as_slice() else {
        panic!("expected one function definition, got {program:?}");
    };
    assert_eq!(def.name, "add");
    assert_eq!(def.params, vec!["a", "b"]);
    assert_eq!(def.body.len(), 1);
    assert_eq!(def.pos, Position::new(1, 1));
}

#[test]
fn test_else_may_follow_on_next_line() {
    let program = parse_source("? $a {\n    :> 1\n}\n\nelse ? $b {\n    :> 2\n}\nelse {\n    :> 3\n}")
        .unwrap();

    let [Statement::If { else_branch: Some(else_branch), .. }] = program.as_slice() else {
        panic!("expected one if statement, got {program:?}");
    };
    let [Statement::If { else_branch: Some(last), .. }] = else_branch.as_slice() else {
        panic!("expected a chained if, got {else_branch:?}");
    };
    assert_eq!(last.len(), 1);
}

#[test]
fn test_blocks_allow_blank_lines_and_single_line_bodies() {
    let program = parse_source("~ true {\n\n    :> 1\n\n    :> 2\n\n}\n@> $x in [1] { :> $x }").unwrap();

    assert!(matches!(&program[0], Statement::While { body, .. } if body.len() == 2));
    assert!(matches!(&program[1], Statement::ForEach { var, body, .. } if var == "x" && body.len() == 1));
}

#[test]
fn test_binary_position_is_operator() {
    let Expr::Binary { op, pos, .. } = expr("10 / $d") else {
        panic!("expected a binary expression");
    };
    assert_eq!(op, BinaryOperator::Div);
    assert_eq!(pos, Position::new(1, 4));
}

#[test]
fn test_unbalanced_braces_are_rejected() {
    assert!(parse_source("? true {").is_err());
    assert!(parse_source("? true { :> 1 }\n}").is_err());
    assert!(parse_source("}").is_err());
    assert!(parse_source("@ f() {\n    ~ true {\n}").is_err());
}

#[test]
fn test_stray_token_after_statement() {
    let err = parse_source(":> 1 2").unwrap_err();
    assert_eq!(err.position(), Position::new(1, 6));
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
    assert_eq!(err.to_string(), "Error on line 1, column 6: Expected end of statement, found number 2.");
}

#[test]
fn test_missing_pieces() {
    assert!(parse_source("$x <-").is_err());
    assert!(parse_source("@> $x [1] { }").is_err());
    assert!(parse_source("@ (a) { }").is_err());
    assert!(parse_source("@ f(a b) { }").is_err());
    assert!(parse_source("max(1, 2").is_err());
    assert!(parse_source(":> [1, 2").is_err());
    assert!(parse_source("? { }").is_err());
    assert!(parse_source("else { }").is_err());
}

#[test]
fn test_duplicate_parameter() {
    let err = parse_source("@ f(a, b, a) { }").unwrap_err();
    assert_eq!(err,
               ParseError::DuplicateParameter { function: "f".into(),
                                                name:     "a".into(),
                                                pos:      Position::new(1, 11), });
}
