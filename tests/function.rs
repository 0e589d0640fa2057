#[macro_use]
mod common;

lox_ok!(
    function_with_no_parameters,
    r#"fun sayHi() { print "Hi!"; } sayHi();"#,
    "Hi!\n"
);

lox_ok!(
    function_with_parameters,
    r#"
    fun sayHi(first, last) {
        print "Hi, " + first + " " + last + "!";
    }
    sayHi("Dear", "Reader");
    "#,
    "Hi, Dear Reader!\n"
);

lox_ok!(
    function_with_no_return_statement_returns_nil,
    r#"
    fun procedure() { print "done"; }
    print procedure();
    "#,
    "done\nnil\n"
);

lox_ok!(
    function_value_prints_as_fn_name,
    "fun add(a, b) { return a + b; } print add;",
    "<fn add>\n"
);

lox_ok!(
    native_clock_is_callable_with_zero_arguments,
    "print clock() >= 0;",
    "true\n"
);

lox_err!(
    calling_a_non_callable_value_is_a_runtime_error,
    r#""not a function"();"#,
    code: 70,
    stderr: "Can only call functions and classes.\n[line 1]\n"
);

lox_err!(
    argument_count_must_match_declared_arity,
    r#"
    fun add(a, b) { return a + b; }
    add(1);
    "#,
    code: 70,
    stderr: "Expected 2 arguments but got 1.\n[line 3]\n"
);

lox_err!(
    too_many_parameters_is_a_static_error,
    &{
        let params: Vec<String> = (0..256).map(|i| format!("p{i}")).collect();
        format!("fun f({}) {{}}", params.join(", "))
    },
    code: 65,
    stderr: "[line 1] Error at 'p255': Can't have more than 255 parameters.\n"
);
