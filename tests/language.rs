use std::{collections::VecDeque, fs, path::Path};

use djerba::{
    config::Config,
    error::{Error, RuntimeError, Status},
    interpreter::{
        host::Host,
        value::core::{Value, render_line},
    },
    run, run_with_config,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Collects emitted lines and answers `input()` from a script.
#[derive(Default)]
struct RecordingHost {
    lines:   Vec<String>,
    prompts: Vec<String>,
    inputs:  VecDeque<String>,
    reads:   usize,
}

impl RecordingHost {
    fn with_inputs(inputs: &[&str]) -> Self {
        Self { inputs: inputs.iter().map(ToString::to_string).collect(),
               ..Self::default() }
    }
}

impl Host for RecordingHost {
    fn emit(&mut self, values: &[Value]) {
        self.lines.push(render_line(values));
    }

    fn read_line(&mut self, prompt: Option<&str>) -> String {
        self.reads += 1;
        if let Some(prompt) = prompt {
            self.prompts.push(prompt.to_string());
        }
        self.inputs.pop_front().unwrap_or_default()
    }
}

fn output(src: &str) -> Vec<String> {
    let mut host = RecordingHost::default();
    let result = run(src, &mut host);
    assert!(result.is_ok(), "{src:?} failed: {}", result.unwrap_err());
    host.lines
}

fn assert_output(src: &str, expected: &[&str]) {
    assert_eq!(output(src), expected);
}

fn assert_success(src: &str) {
    let mut host = RecordingHost::default();
    let result = run(src, &mut host);
    assert_eq!(Status::from(&result), Status::Success, "{src:?}");
}

fn assert_failure(src: &str) {
    let mut host = RecordingHost::default();
    let result = run(src, &mut host);
    assert!(result.is_err(), "{src:?} should have failed");
}

fn runtime_error(src: &str) -> RuntimeError {
    let mut host = RecordingHost::default();
    match run(src, &mut host) {
        Err(Error::Runtime(err)) => err,
        other => panic!("{src:?} should fail at runtime, got {other:?}"),
    }
}

#[test]
fn test_print_and_assignment() {
    assert_output(":> 1 + 2", &["3"]);
    assert_output("$x <- 4\n$y <- $x * 2\n:> $x, $y", &["4 8"]);
    assert_output(":> \"n = \", 3.5", &["n =  3.5"]);
    assert_success("");
    assert_success("\n\n;; only a comment\n\n");
}

#[test]
fn test_number_display() {
    assert_output(":> 3.0, 2.5, -0, 10 / 4", &["3 2.5 0 2.5"]);
    assert_output(":> 1 / 3 * 3", &["1"]);
}

#[test]
fn test_value_display() {
    assert_output(":> [1, \"a\", [true, false]], []", &["[1, a, [true, false]] []"]);
    assert_output("@ nothing() { }\n:> nothing(), nothing", &["none <function nothing>"]);
}

#[test]
fn test_precedence() {
    assert_output(":> 2 + 3 * 4 ^ 2", &["50"]);
    assert_output(":> 2 ^ 3 ^ 2", &["512"]);
    assert_output(":> (2 + 3) * 4", &["20"]);
    assert_output(":> 10 - 4 - 3", &["3"]);
    assert_output(":> 1 + 2 < 4 == true", &["true"]);
    assert_output(":> -2 ^ 2", &["4"]);
}

#[test]
fn test_floored_modulo() {
    assert_output(":> 7 % 3, -7 % 3, 7 % -3", &["1 2 -2"]);
    assert_output(":> 5.5 % 2", &["1.5"]);
}

#[test]
fn test_logical_operators() {
    assert_output(":> 5 > 3 and true", &["true"]);
    assert_output(":> false or 0, 0 or \"x\", not []", &["false true true"]);
    assert_output(":> not true == false", &["true"]);
}

#[test]
fn test_short_circuit_skips_right_operand() {
    let mut host = RecordingHost::default();
    run("$a <- false and input()\n$b <- true or input()\n:> $a, $b", &mut host).unwrap();
    assert_eq!(host.reads, 0);
    assert_eq!(host.lines, vec!["false true"]);

    let mut host = RecordingHost::with_inputs(&["typed"]);
    run(":> true and input(\"? \")", &mut host).unwrap();
    assert_eq!(host.reads, 1);
    assert_eq!(host.prompts, vec!["? "]);
    assert_eq!(host.lines, vec!["true"]);
}

#[test]
fn test_input_returns_line() {
    let mut host = RecordingHost::with_inputs(&["Ada"]);
    run("$name <- input(\"name: \")\n:> \"hello \" + $name", &mut host).unwrap();
    assert_eq!(host.lines, vec!["hello Ada"]);
}

#[test]
fn test_equality() {
    assert_output(":> [1, [2]] == [1, [2]], \"a\" == \"a\", 1 == \"1\", 1 != 2",
                  &["true true false true"]);
}

#[test]
fn test_string_concatenation() {
    assert_output(":> \"n=\" + 4", &["n=4"]);
    assert_output(":> 1 + \"x\"", &["1x"]);
    assert_output(":> \"list: \" + [1, 2]", &["list: [1, 2]"]);
    assert_output(":> upper(\"abc\") + lower(\"DEF\")", &["ABCdef"]);
}

#[test]
fn test_list_concatenation_makes_new_list() {
    let src = "$a <- [1]\n$b <- $a + [2]\nappend($b, 3)\n:> $a, $b";
    assert_output(src, &["[1] [1, 2, 3]"]);
}

#[test]
fn test_if_else_chains() {
    let src = "
$x <- 7
? $x < 5 {
    :> \"small\"
}
else ? $x < 10 {
    :> \"medium\"
}
else {
    :> \"large\"
}
";
    assert_output(src, &["medium"]);
    assert_output("? 0 { :> 1 } else { :> 2 }", &["2"]);
    assert_output("? \"\" { :> 1 }\n:> 3", &["3"]);
}

#[test]
fn test_while_loop() {
    assert_output("$i <- 0\n~ $i < 3 {\n    :> $i\n    $i <- $i + 1\n}", &["0", "1", "2"]);
}

#[test]
fn test_for_each_over_list_and_string() {
    assert_output("@> $n in [1, 2, 3] { :> $n * 10 }", &["10", "20", "30"]);
    assert_output("@> $c in \"abc\" { :> upper($c) }", &["A", "B", "C"]);
}

#[test]
fn test_for_each_iterates_snapshot() {
    let src = "$xs <- [1, 2]\n@> $x in $xs {\n    append($xs, $x)\n}\n:> $xs";
    assert_output(src, &["[1, 2, 1, 2]"]);
}

#[test]
fn test_nested_break_and_continue() {
    let src = "
$i <- 0
~ $i < 3 {
    $i <- $i + 1
    $j <- 0
    ~ true {
        $j <- $j + 1
        ? $j == 2 {
            break
        }
    }
    ? $i == 2 {
        continue
    }
    :> $i, $j
}
";
    assert_output(src, &["1 2", "3 2"]);
}

#[test]
fn test_range_and_len() {
    assert_output(":> range(1, 16)", &["[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]"]);
    assert_output(":> len(range(1, 16)), range(3), range(3, 0, -1)", &["15 [0, 1, 2] [3, 2, 1]"]);
    assert_output(":> range(5, 1)", &["[]"]);
}

#[test]
fn test_append_and_len() {
    assert_output("$xs <- []\nappend($xs, 1)\npush($xs, \"two\")\n:> $xs, len($xs)",
                  &["[1, two] 2"]);
}

#[test]
fn test_pop() {
    assert_output("$xs <- [1, 2, 3]\n:> pop($xs), $xs", &["3 [1, 2]"]);
    assert!(matches!(runtime_error("pop([])"), RuntimeError::EmptyList { .. }));
}

#[test]
fn test_indexing() {
    assert_output("$xs <- [10, 20, 30]\n$i <- 1\n:> $xs[0], $xs[2], $xs[$i]", &["10 30 20"]);
    assert_output(":> \"djerba\"[2]", &["e"]);
    assert_output(":> [[1, 2], [3, 4]][1][0]", &["3"]);
}

#[test]
fn test_list_aliasing_across_calls() {
    let src = "
@ add_item(list, item) {
    append(list, item)
}
$xs <- [1, 2]
$alias <- $xs
add_item($xs, 3)
:> $alias, len($xs)
";
    assert_output(src, &["[1, 2, 3] 3"]);
}

#[test]
fn test_list_literal_is_fresh_each_evaluation() {
    let src = "
@ fresh() { !> [] }
$a <- fresh()
append($a, 1)
:> fresh()
";
    assert_output(src, &["[]"]);
}

#[test]
fn test_list_containing_itself() {
    let src = "
$a <- [1]
append($a, $a)
:> $a
:> \"a = \" + $a
$b <- [$a, 2]
:> $b
";
    assert_output(src, &["[1, [...]]", "a = [1, [...]]", "[[1, [...]], 2]"]);
}

#[test]
fn test_self_containing_lists_compare() {
    let src = "
$a <- [1]
append($a, $a)
$b <- [1]
append($b, $b)
$c <- [2]
append($c, $c)
:> $a == $a, $a == $b, $a == $c, $a != [1, 1]
";
    assert_output(src, &["true true false true"]);
}

#[test]
fn test_deeply_nested_lists() {
    let src = "
$a <- []
$b <- []
$i <- 0
~ $i < 100000 {
    $a <- [$a]
    $b <- [$b]
    $i <- $i + 1
}
:> len($a), len(\"\" + $a)
:> $a == $b
append($b, 0)
:> $a == $b
$a <- 0
$b <- 0
:> $a + $b
";
    assert_output(src, &["1 200002", "true", "false", "0"]);
}

#[test]
fn test_deeply_nested_list_dropped_at_exit() {
    assert_success("$a <- []\n$i <- 0\n~ $i < 300000 {\n    $a <- [$a]\n    $i <- $i + 1\n}");
}

#[test]
fn test_recursion() {
    let src = "
@ fibonacci(n) {
    ? n <= 1 {
        !> n
    }
    !> fibonacci(n - 1) + fibonacci(n - 2)
}
:> fibonacci(10)
";
    assert_output(src, &["55"]);
}

#[test]
fn test_closures_capture_environment() {
    let src = "
@ make_counter() {
    $count <- 0
    @ next() {
        $count <- $count + 1
        !> $count
    }
    !> next
}
$counter <- make_counter()
:> counter(), counter(), counter()
";
    assert_output(src, &["1 2 3"]);
}

#[test]
fn test_assignment_updates_enclosing_scope() {
    assert_output("$total <- 0\n@ add(n) { $total <- $total + n }\nadd(5)\nadd(2)\n:> $total",
                  &["7"]);
}

#[test]
fn test_function_locals_do_not_leak() {
    let err = runtime_error("@ f() { $local <- 1 }\nf()\n:> $local");
    assert!(matches!(err, RuntimeError::UndefinedVariable { ref name, .. } if name == "local"));
}

#[test]
fn test_function_without_return_yields_none() {
    assert_output("@ f() { $x <- 1 }\n:> f(), type(f())", &["none none"]);
}

#[test]
fn test_type_names() {
    assert_output("@ f() { }\n:> type(1), type(\"s\"), type(true), type([]), type(f)",
                  &["number string bool list function"]);
}

#[test]
fn test_math_builtins() {
    assert_output(":> sqrt(16), abs(-3), floor(-1.5), ceil(1.2), pow(2, 10)", &["4 3 -2 2 1024"]);
    assert_output(":> round(2.5), round(3.5), round(-0.4)", &["2 4 0"]);
    assert_output(":> min(3, 1, 2), max([4, 9, 2])", &["1 9"]);
    assert_output(":> floor(PI * 100), floor(E * 100)", &["314 271"]);
}

#[test]
fn test_non_finite_and_extreme_numbers() {
    assert_output(":> pow(-1, 0.5), 10 ^ 400, -(10 ^ 400)", &["nan inf -inf"]);
    assert_output(":> pow(10, 15), pow(2, 60)", &["1000000000000000 1.152921504606847e+18"]);
    assert_output(":> 1 / 10000, 1 / 100000, -1 / 100000", &["0.0001 1e-05 -1e-05"]);
}

#[test]
fn test_string_builtins() {
    assert_output(":> len(\"hello\"), substr(\"djerba\", 1, 4), substr(\"djerba\", 3)",
                  &["5 jer rba"]);
    assert_output(":> substr(\"abc\", 2, 1) == \"\"", &["true"]);
}

#[test]
fn test_print_builtin() {
    assert_output("print(1, \"two\")\n:> print()", &["1 two", "", "none"]);
}

#[test]
fn test_top_level_return_stops_program() {
    assert_output(":> 1\n!>\n:> 2", &["1"]);
}

#[test]
fn test_output_before_error_is_kept() {
    let mut host = RecordingHost::default();
    let result = run(":> 1\n:> 4 / 0\n:> 2", &mut host);
    assert_eq!(host.lines, vec!["1"]);

    let err = result.unwrap_err();
    assert_eq!(err.status(), Status::RuntimeFailure);
    assert_eq!(err.to_string(), "Error on line 2, column 6: Division by zero.");
}

#[test]
fn test_runtime_errors() {
    assert!(matches!(runtime_error(":> 1 / 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error(":> 1 % 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error(":> $nope"), RuntimeError::UndefinedVariable { .. }));
    assert!(matches!(runtime_error("nope()"), RuntimeError::UndefinedFunction { .. }));
    assert!(matches!(runtime_error("sqrt(1, 2)"), RuntimeError::ArityMismatch { .. }));
    assert!(matches!(runtime_error("@ f(a) { }\nf()"), RuntimeError::ArityMismatch { .. }));
    assert!(matches!(runtime_error(":> [1][1]"), RuntimeError::IndexOutOfBounds { .. }));
    assert!(matches!(runtime_error(":> [1][-1]"), RuntimeError::IndexOutOfBounds { .. }));
    assert!(matches!(runtime_error(":> \"\"[0]"), RuntimeError::IndexOutOfBounds { .. }));
    assert!(matches!(runtime_error(":> [1, 2][0.5]"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error(":> 1 - \"a\""), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error(":> 1 < \"a\""), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error(":> -\"a\""), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("@> $x in 5 { }"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error(":> sqrt(-1)"), RuntimeError::DomainError { .. }));
    assert!(matches!(runtime_error(":> range(1, 5, 0)"), RuntimeError::DomainError { .. }));
}

#[test]
fn test_break_or_continue_outside_loop() {
    assert!(matches!(runtime_error("break"),
                     RuntimeError::BreakOrContinueOutsideLoop { keyword: "break", .. }));
    assert!(matches!(runtime_error("? true { continue }"),
                     RuntimeError::BreakOrContinueOutsideLoop { keyword: "continue", .. }));
    assert!(matches!(runtime_error("~ true {\n    @ f() { break }\n    f()\n}"),
                     RuntimeError::BreakOrContinueOutsideLoop { .. }));
}

#[test]
fn test_call_depth_limit() {
    let mut host = RecordingHost::default();
    let config = Config::default().with_max_call_depth(50);
    let result = run_with_config("@ down(n) { !> down(n + 1) }\ndown(0)", &mut host, &config);

    assert!(matches!(result, Err(Error::Runtime(RuntimeError::StackOverflow { limit: 50, .. }))));
}

#[test]
fn test_deep_recursion_within_limit() {
    let src = "
@ sum(n) {
    ? n == 0 { !> 0 }
    !> n + sum(n - 1)
}
:> sum(2000)
";
    assert_output(src, &["2001000"]);
}

#[test]
fn test_failure_statuses() {
    let mut host = RecordingHost::default();
    assert_eq!(Status::from(&run(":> 1 # 2", &mut host)), Status::LexFailure);
    assert_eq!(Status::from(&run(":> \"open", &mut host)), Status::LexFailure);
    assert_eq!(Status::from(&run("? true {", &mut host)), Status::ParseFailure);
    assert_eq!(Status::from(&run(":> 1 2", &mut host)), Status::ParseFailure);
    assert_eq!(Status::from(&run(":> $x", &mut host)), Status::RuntimeFailure);
    assert!(host.lines.is_empty());
}

#[test]
fn test_parse_failures() {
    assert_failure("}");
    assert_failure("$x <-");
    assert_failure("@ f(a, a) { }");
    assert_failure("@> $x [1] { }");
    assert_failure(":> (1 + 2");
    assert_failure(":>");
    assert_failure("else { }");
}

#[test]
fn test_scripts() {
    let root = Path::new("scripts");
    let mut checked = 0;

    for entry in WalkDir::new(root).sort_by_file_name()
                                    .into_iter()
                                    .filter_map(Result::ok)
                                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "dj"))
    {
        let script = entry.path();
        let source = fs::read_to_string(script).unwrap();
        let expected = fs::read_to_string(script.with_extension("out")).unwrap();

        let mut host = RecordingHost::default();
        let result = run(&source, &mut host);
        assert!(result.is_ok(), "{} failed: {}", script.display(), result.unwrap_err());

        let actual: String = host.lines.iter().map(|line| format!("{line}\n")).collect();
        assert_eq!(actual, expected, "{}", script.display());
        checked += 1;
    }

    assert!(checked > 0, "no scripts found under {}", root.display());
}
