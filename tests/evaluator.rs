use apa::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::eval_program,
        lexer::Lexer,
        parser::core::Parser,
        value::{core::Value, environment::Environment},
    },
};

fn run(input: &str) -> Result<Option<Value>, RuntimeError> {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "parser errors for {input:?}: {:?}",
        parser.errors()
    );
    eval_program(&program, &Environment::new())
}

fn eval(input: &str) -> Value {
    match run(input) {
        Ok(Some(value)) => value,
        other => panic!("expected a value for {input:?}, got {other:?}"),
    }
}

fn eval_error(input: &str) -> String {
    match run(input) {
        Err(error) => error.to_string(),
        other => panic!("expected an error for {input:?}, got {other:?}"),
    }
}

#[test]
fn integer_expressions() {
    let tests = [
        ("5", 5),
        ("10", 10),
        ("-5", -5),
        ("-10", -10),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("5 + 2 * 10", 25),
        ("20 + 2 * -10", 0),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * 3 * 3 + 10", 37),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
    ];

    for (input, expected) in tests {
        assert_eq!(eval(input), Value::Integer(expected), "input {input:?}");
    }
}

#[test]
fn boolean_expressions() {
    let tests = [
        ("sant", true),
        ("falskt", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 < 1", false),
        ("1 > 1", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("1 == 2", false),
        ("1 != 2", true),
        ("sant == sant", true),
        ("falskt == falskt", true),
        ("sant == falskt", false),
        ("sant != falskt", true),
        ("falskt != sant", true),
        ("(1 < 2) == sant", true),
        ("(1 < 2) == falskt", false),
        ("(1 > 2) == sant", false),
        ("(1 > 2) == falskt", true),
    ];

    for (input, expected) in tests {
        assert_eq!(eval(input), Value::Bool(expected), "input {input:?}");
    }
}

#[test]
fn bang_operator() {
    let tests = [
        ("!sant", false),
        ("!falskt", true),
        ("!5", false),
        ("!!sant", true),
        ("!!falskt", false),
        ("!!5", true),
    ];

    for (input, expected) in tests {
        assert_eq!(eval(input), Value::Bool(expected), "input {input:?}");
    }
}

#[test]
fn if_else_expressions() {
    let tests = [
        ("om (sant) { 10 }", Some(10)),
        ("om (falskt) { 10 }", None),
        ("om (1) { 10 }", Some(10)),
        ("om (1 < 2) { 10 }", Some(10)),
        ("om (1 > 2) { 10 }", None),
        ("om (1 > 2) { 10 } annars { 20 }", Some(20)),
        ("om (1 < 2) { 10 } annars { 20 }", Some(10)),
    ];

    for (input, expected) in tests {
        let expected = expected.map_or(Value::Null, Value::Integer);
        assert_eq!(eval(input), expected, "input {input:?}");
    }
}

#[test]
fn return_statements() {
    let tests = [
        ("tillbaka 10;", 10),
        ("tillbaka 10; 9;", 10),
        ("tillbaka 2 * 5; 9;", 10),
        ("9; tillbaka 2 * 5; 9;", 10),
        (
            "om (10 > 1) {
                 om (10 > 1) {
                     tillbaka 10;
                 }

                 tillbaka 1;
             }",
            10,
        ),
    ];

    for (input, expected) in tests {
        assert_eq!(eval(input), Value::Integer(expected), "input {input:?}");
    }
}

#[test]
fn let_statements() {
    let tests = [
        ("låt a = 5; a;", 5),
        ("låt a = 5 * 5; a;", 25),
        ("låt a = 5; låt b = a; b;", 5),
        ("låt a = 5; låt b = a; låt c = a + b + 5; c;", 15),
    ];

    for (input, expected) in tests {
        assert_eq!(eval(input), Value::Integer(expected), "input {input:?}");
    }
}

#[test]
fn let_statements_produce_no_value() {
    assert_eq!(run("låt a = 5;"), Ok(None));
}

#[test]
fn function_application() {
    let tests = [
        ("låt identifiera = funktion(x) { x; }; identifiera(5);", 5),
        ("låt identifiera = funktion(x) { tillbaka x; }; identifiera(5);", 5),
        ("låt dubbel = funktion(x) { x * 2; }; dubbel(5);", 10),
        ("låt addera = funktion(x, y) { x + y; }; addera(5, 5);", 10),
        ("låt addera = funktion(x, y) { x + y; }; addera(5 + 5, addera(5, 5));", 20),
        ("funktion(x) { x; }(5);", 5),
    ];

    for (input, expected) in tests {
        assert_eq!(eval(input), Value::Integer(expected), "input {input:?}");
    }
}

#[test]
fn closures_capture_their_defining_environment() {
    let input = "
        låt nyAddering = funktion(x) {
            funktion(y) { x + y };
        };

        låt adderaTvå = nyAddering(2);
        adderaTvå(2);";

    assert_eq!(eval(input), Value::Integer(4));
}

#[test]
fn bindings_inside_a_function_stay_local() {
    let input = "
        låt x = 5;
        låt skugga = funktion() { låt x = 10; x; };
        skugga();
        x;";

    assert_eq!(eval(input), Value::Integer(5));
}

#[test]
fn function_values_render_their_source_form() {
    let value = eval("funktion(x) { x + 2; };");

    assert!(matches!(value, Value::Function(_)), "got {value:?}");
    assert_eq!(value.to_string(), "funktion(x) {\n(x + 2)\n}");
}

#[test]
fn string_literals() {
    assert_eq!(eval(r#""Hej Världen!""#), Value::Str("Hej Världen!".to_string()));
}

#[test]
fn string_concatenation() {
    assert_eq!(
        eval(r#""Hej" + " " + "Världen!""#),
        Value::Str("Hej Världen!".to_string())
    );
}

#[test]
fn array_literals() {
    let Value::Array(elements) = eval("[1, 2 * 2, 3 + 3]") else {
        panic!("expected an array");
    };

    assert_eq!(*elements, vec![Value::Integer(1), Value::Integer(4), Value::Integer(6)]);
}

#[test]
fn array_index_expressions() {
    let tests = [
        ("[1, 2, 3][0]", Some(1)),
        ("[1, 2, 3][1]", Some(2)),
        ("[1, 2, 3][2]", Some(3)),
        ("låt i = 0; [1][i];", Some(1)),
        ("[1, 2, 3][1 + 1];", Some(3)),
        ("låt minArray = [1, 2, 3]; minArray[2];", Some(3)),
        ("låt minArray = [1, 2, 3]; minArray[0] + minArray[1] + minArray[2];", Some(6)),
        ("låt minArray = [1, 2, 3]; låt i = minArray[0]; minArray[i]", Some(2)),
        ("[1, 2, 3][3]", None),
        ("[1, 2, 3][-1]", None),
    ];

    for (input, expected) in tests {
        let expected = expected.map_or(Value::Null, Value::Integer);
        assert_eq!(eval(input), expected, "input {input:?}");
    }
}

#[test]
fn aliased_arrays_compare_equal_and_fresh_ones_do_not() {
    assert_eq!(eval("låt a = [1, 2]; a == a"), Value::Bool(true));
    assert_eq!(eval("[1, 2] == [1, 2]"), Value::Bool(false));
}

#[test]
fn builtin_length() {
    let tests = [(r#"längd("")"#, 0), (r#"längd("fyra")"#, 4), (r#"längd("hej världen")"#, 12)];

    for (input, expected) in tests {
        assert_eq!(eval(input), Value::Integer(expected), "input {input:?}");
    }

    assert_eq!(eval("längd([1, 2, 3])"), Value::Integer(3));
    assert_eq!(eval("längd([])"), Value::Integer(0));

    assert_eq!(
        eval_error("längd(1)"),
        "argument to `längd` not supported, got=INTEGER"
    );
    assert_eq!(
        eval_error(r#"längd("ett", "två")"#),
        "wrong number of arguments. got=2, want=1"
    );
}

#[test]
fn error_handling() {
    let tests = [
        ("5 + sant;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + sant; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-sant", "unknown operator: -BOOLEAN"),
        ("sant + falskt;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; sant + falskt; 5;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("om (10 > 1) { sant + falskt; }", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "om (10 > 1) {
                 om (10 > 1) {
                     tillbaka sant + falskt;
                 }

                 tillbaka 1;
             }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "identifier not found: foobar"),
        (r#""Hej" - "Världen""#, "unknown operator: STRING - STRING"),
        (r#""Hej" == "Hej""#, "unknown operator: STRING == STRING"),
        ("5[0]", "index operator not supported: INTEGER"),
        ("[1, 2, 3][sant]", "index operator not supported: ARRAY"),
        ("5(1)", "not a function: INTEGER"),
        ("sant()", "not a function: BOOLEAN"),
        ("funktion(x) { x; }(1, 2)", "wrong number of arguments. got=2, want=1"),
        ("funktion(x, y) { x + y; }(1)", "wrong number of arguments. got=1, want=2"),
        ("5 / 0", "division by zero: 5 / 0"),
        (r#"{"ett": 1}"#, r#"unknown expression: {ett:1}"#),
    ];

    for (input, expected) in tests {
        assert_eq!(eval_error(input), expected, "input {input:?}");
    }
}

#[test]
fn errors_abort_argument_evaluation() {
    assert_eq!(
        eval_error("låt f = funktion(a, b) { a + b; }; f(1, okänd)"),
        "identifier not found: okänd"
    );
}

#[test]
fn integer_arithmetic_wraps_on_overflow() {
    assert_eq!(
        eval("9223372036854775807 + 1"),
        Value::Integer(i64::MIN)
    );
}

#[test]
fn builtins_resolve_after_the_environment() {
    assert_eq!(eval(r#"låt längd = funktion(x) { 99 }; längd("abc")"#), Value::Integer(99));
    assert_eq!(eval("längd").to_string(), "builtin function");
}
