#[macro_use]
mod common;

lox_ok!(
    closures_capture_the_variable_not_the_value,
    r#"
    fun make() {
        var i = 0;
        fun next() {
            i = i + 1;
            return i;
        }
        return next;
    }
    var c = make();
    print c();
    print c();
    print c();
    "#,
    "1\n2\n3\n"
);

lox_ok!(
    independent_closures_do_not_share_state,
    r#"
    fun make() {
        var i = 0;
        fun next() { i = i + 1; return i; }
        return next;
    }
    var a = make();
    var b = make();
    print a();
    print a();
    print b();
    "#,
    "1\n2\n1\n"
);

lox_ok!(
    closure_in_loop_captures_the_right_binding,
    r#"
    fun makeCounter() {
        var i = 0;
        fun inc() {
            i = i + 1;
            print i;
        }
        return inc;
    }
    var counter = makeCounter();
    counter();
    counter();
    "#,
    "1\n2\n"
);
