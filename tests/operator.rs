#[macro_use]
mod common;

lox_ok!(add_two_numbers, "print 1 + 2;", "3\n");
lox_ok!(concatenate_two_strings, "print \"ab\" + \"cd\";", "abcd\n");
lox_ok!(subtract, "print 5 - 3;", "2\n");
lox_ok!(multiply, "print 4 * 2.5;", "10\n");
lox_ok!(divide, "print 10 / 4;", "2.5\n");
lox_ok!(negate, "print -(3);", "-3\n");
lox_ok!(not_truthy_value_is_false, "print !true;", "false\n");
lox_ok!(not_nil_is_true, "print !nil;", "true\n");

lox_ok!(
    comparisons_between_numbers,
    r#"
    print 1 < 2;
    print 2 <= 2;
    print 3 > 2;
    print 2 >= 3;
    "#,
    "true\ntrue\ntrue\nfalse\n"
);

lox_ok!(
    equality_is_symmetric_across_kinds,
    r#"
    print 1 == 1;
    print 1 == "1";
    print nil == false;
    print "a" == "a";
    "#,
    "true\nfalse\nfalse\ntrue\n"
);

lox_ok!(
    equality_on_callables_and_instances_is_referential,
    r#"
    class Foo {}
    var a = Foo();
    var b = Foo();
    print a == a;
    print a == b;
    "#,
    "true\nfalse\n"
);

lox_err!(
    adding_a_number_to_a_string_is_a_runtime_error,
    "print 1 + \"x\";",
    code: 70,
    stderr: "Operands must be two numbers or two strings.\n[line 1]\n"
);

lox_err!(
    dividing_by_zero_is_a_runtime_error,
    "print 1/0;",
    code: 70,
    stderr: "Cannot divide by zero.\n[line 1]\n"
);

lox_err!(
    subtracting_a_string_from_a_number_is_a_runtime_error,
    r#"print 1 - "x";"#,
    code: 70,
    stderr: "Operand must be a number.\n[line 1]\n"
);

lox_err!(
    comparison_requires_both_operands_to_be_numbers,
    r#"print 1 >= "x";"#,
    code: 70,
    stderr: "Operand must be a number.\n[line 1]\n"
);
