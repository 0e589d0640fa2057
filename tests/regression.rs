#[macro_use]
mod common;

lox_ok!(
    recursive_function_computes_fibonacci,
    r#"
    fun fib(n) {
        if (n < 2) return n;
        return fib(n - 1) + fib(n - 2);
    }
    print fib(10);
    "#,
    "55\n"
);

lox_ok!(
    deeply_nested_blocks_all_restore_their_enclosing_environment,
    r#"
    var a = "a";
    {
        var a = "b";
        {
            var a = "c";
            {
                var a = "d";
                print a;
            }
            print a;
        }
        print a;
    }
    print a;
    "#,
    "d\nc\nb\na\n"
);

lox_ok!(
    a_runtime_error_unwinds_past_every_enclosing_block_without_running_later_statements,
    r#"
    fun f() {
        {
            var a = "shadowed";
            print 1 / 0;
        }
        print "never printed";
    }
    f();
    print "never printed either";
    "#,
    ""
);

lox_ok!(
    a_class_method_can_call_another_method_on_the_same_instance,
    r#"
    class Math {
        square(n) { return n * n; }
        sumOfSquares(a, b) {
            return this.square(a) + this.square(b);
        }
    }
    print Math().sumOfSquares(3, 4);
    "#,
    "25\n"
);
