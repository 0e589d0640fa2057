#[macro_use]
mod common;

lox_ok!(empty_block_is_a_no_op, "{ } print \"ok\";", "ok\n");

lox_ok!(
    inner_scope_shadows_without_mutating_outer,
    r#"
    var a = "outer";
    {
        var a = "inner";
        print a;
    }
    print a;
    "#,
    "inner\nouter\n"
);

lox_ok!(
    nested_blocks_each_get_their_own_scope,
    r#"
    var a = 1;
    {
        var a = 2;
        {
            var a = 3;
            print a;
        }
        print a;
    }
    print a;
    "#,
    "3\n2\n1\n"
);

lox_err!(
    duplicate_local_is_a_static_error,
    "{ var a = 1; var a = 2; }",
    code: 65,
    stderr: "[line 1] Error at 'a': Already a variable with this name in this scope.\n"
);
