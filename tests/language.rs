use scriptlet::parser::MAX_DEPTH;
use scriptlet::{run, ParseError, RuntimeErrorKind, ScriptError, TokenType, Value};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn output(source: &str) -> Vec<Value> {
    init_tracing();
    let mut out: Vec<Value> = Vec::new();
    if let Err(e) = run(source, &mut out) {
        panic!("script failed:\n{}\nError: {}", source, e);
    }
    out
}

fn failure(source: &str) -> (Vec<Value>, ScriptError) {
    init_tracing();
    let mut out: Vec<Value> = Vec::new();
    let err = run(source, &mut out).expect_err("script should fail");
    (out, err)
}

fn runtime_kind(err: &ScriptError) -> RuntimeErrorKind {
    match err {
        ScriptError::Runtime(e) => e.kind.clone(),
        other => panic!("expected a runtime error, got {:?}", other),
    }
}

fn parse_error(err: ScriptError) -> ParseError {
    match err {
        ScriptError::Parse(e) => e,
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn precedence() {
    assert_eq!(output("print 1 + 2 * 3;"), vec![7]);
    assert_eq!(output("print (1 + 2) * 3;"), vec![9]);
    assert_eq!(output("print 2 + 3 < 2 * 3;"), vec![1]);
    assert_eq!(output("print -2 * 3 + 10 % 4;"), vec![-4]);
}

#[test]
fn assignment_goes_through_the_scope_chain() {
    assert_eq!(output("var x = 1; { x = 2; } print x;"), vec![2]);
}

#[test]
fn inner_var_shadows_outer() {
    assert_eq!(
        output("var x = 1; { var x = 5; print x; } print x;"),
        vec![5, 1]
    );
}

#[test]
fn redeclaration_in_the_same_scope_rebinds() {
    assert_eq!(output("var x = 1; var x = x + 1; print x;"), vec![2]);
}

#[test]
fn uninitialised_var_is_zero() {
    assert_eq!(output("var x; print x;"), vec![0]);
}

#[test]
fn break_leaves_innermost_loop_immediately() {
    assert_eq!(
        output("var i = 0; while (i < 5) { i = i + 1; if (i == 3) { break; } } print i;"),
        vec![3]
    );
}

#[test]
fn loop_without_break_runs_to_condition() {
    assert_eq!(
        output("var i = 0; var sum = 0; while (i < 5) { i = i + 1; sum = sum + i; } print sum;"),
        vec![15]
    );
}

#[test]
fn if_else_chains() {
    let source = "
        var n = 0;
        while (n < 4) {
            if (n == 0) print 100;
            else if (n == 1) print 200;
            else print n;
            n = n + 1;
        }";
    assert_eq!(output(source), vec![100, 200, 2, 3]);
}

#[test]
fn gcd() {
    let source = "
        // greatest common divisor, Euclid's algorithm
        var a = 48;
        var b = 18;
        var temp;

        while (b != 0) {
          temp = b;
          b = a % b;
          a = temp;
        }
        print(a);";
    assert_eq!(output(source), vec![6]);
}

#[test]
fn primes_below_thirty() {
    let source = "
        var n = 2;
        while (n < 30) {
            var d = 2;
            var prime = 1;
            while (d * d <= n) {
                if (n % d == 0) { prime = 0; break; }
                d = d + 1;
            }
            if (prime) print n;
            n = n + 1;
        }";
    assert_eq!(output(source), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
}

#[test]
fn division_by_zero_prints_nothing() {
    let (out, err) = failure("print 1 / 0;");
    assert!(out.is_empty());
    assert_eq!(runtime_kind(&err), RuntimeErrorKind::DivisionByZero);
}

#[test]
fn runtime_error_halts_after_earlier_output() {
    let (out, err) = failure("print 1; print y; print 2;");
    assert_eq!(out, vec![1]);
    assert_eq!(
        runtime_kind(&err),
        RuntimeErrorKind::UndefinedVariable(String::from("y"))
    );
    assert_eq!(err.to_string(), "[line 1, column 16] Runtime error: Undefined variable 'y'.");
}

#[test]
fn assigning_an_undeclared_name_fails() {
    let (_, err) = failure("{ var inner = 1; } inner = 2;");
    assert_eq!(
        runtime_kind(&err),
        RuntimeErrorKind::UndefinedAssignment(String::from("inner"))
    );
}

#[test]
fn syntax_errors_report_where_and_what() {
    let (out, err) = failure("print 1;\nvar x = 2\nprint x;");
    assert!(out.is_empty());
    let err = parse_error(err);
    assert_eq!(err.found, TokenType::IDENTIFIER);
    assert_eq!(err.lexeme, "print");
    assert_eq!(err.position.line, 3);
    assert_eq!(
        err.to_string(),
        "[line 3, column 1] Error at 'print': Expect ';' after variable declaration."
    );
}

#[test]
fn break_outside_loop_is_a_syntax_error() {
    let (_, err) = failure("if (1) { break; }");
    assert_eq!(
        parse_error(err).message,
        "Can't use 'break' outside of a loop."
    );
}

#[test]
fn lone_bang_is_a_lex_error() {
    let (_, err) = failure("if (!1) print 1;");
    assert!(matches!(err, ScriptError::Lex(_)));
}

#[test]
fn deepest_accepted_nesting_runs() {
    let depth = MAX_DEPTH - 1;
    let source = format!("print {}7{};", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(output(&source), vec![7]);

    // the assignment inside the innermost block takes the last level
    let blocks = MAX_DEPTH - 2;
    let source = format!(
        "var n = 0; {}n = n + 1;{}print n;",
        "{".repeat(blocks),
        "}".repeat(blocks)
    );
    assert_eq!(output(&source), vec![1]);
}

#[test]
fn runaway_nesting_is_a_syntax_error() {
    let source = format!("print {}1{};", "(".repeat(500), ")".repeat(500));
    let (out, err) = failure(&source);
    assert!(out.is_empty());
    assert_eq!(parse_error(err).message, "Too much nesting.");

    let source = format!("while (1) {}break;{}", "{".repeat(500), "}".repeat(500));
    let (_, err) = failure(&source);
    assert_eq!(parse_error(err).message, "Too much nesting.");
}
