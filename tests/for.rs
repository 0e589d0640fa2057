#[macro_use]
mod common;

lox_ok!(
    for_loop_counts_up_through_the_condition,
    "for (var i = 0; i < 3; i = i + 1) print i;",
    "0\n1\n2\n"
);

lox_ok!(
    for_loop_with_no_initializer_uses_an_outer_variable,
    r#"
    var i = 0;
    for (; i < 2; i = i + 1) print i;
    "#,
    "0\n1\n"
);

lox_ok!(
    for_loop_with_no_condition_relies_on_a_return_to_exit,
    r#"
    fun run() {
        for (var i = 0;; i = i + 1) {
            if (i >= 2) return;
            print i;
        }
    }
    run();
    "#,
    "0\n1\n"
);

lox_ok!(
    for_loop_with_no_increment_still_runs_the_body,
    r#"
    for (var i = 0; i < 2;) {
        print i;
        i = i + 1;
    }
    "#,
    "0\n1\n"
);
