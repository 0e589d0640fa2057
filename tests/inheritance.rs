#[macro_use]
mod common;

lox_ok!(
    subclass_inherits_superclass_methods,
    r#"
    class Doughnut {
        cook() { print "Fry until golden brown."; }
    }
    class BostonCream < Doughnut {}
    BostonCream().cook();
    "#,
    "Fry until golden brown.\n"
);

lox_ok!(
    subclass_can_override_and_call_super,
    r#"
    class Doughnut {
        cook() { print "Fry until golden brown."; }
    }
    class BostonCream < Doughnut {
        cook() {
            super.cook();
            print "Pipe full of custard and coat with chocolate.";
        }
    }
    BostonCream().cook();
    "#,
    "Fry until golden brown.\nPipe full of custard and coat with chocolate.\n"
);

lox_ok!(
    subclass_constructor_sets_field_visible_to_its_own_methods,
    r#"
    class A { init(n) { this.n = n; } }
    class B < A { show() { print this.n; } }
    B(7).show();
    "#,
    "7\n"
);

lox_err!(
    superclass_must_be_a_class,
    r#"
    var NotAClass = "str";
    class Oops < NotAClass {}
    "#,
    code: 70,
    stderr: "Superclass must be a class.\n[line 3]\n"
);

lox_err!(
    super_outside_a_class_is_a_static_error,
    "super.foo();",
    code: 65,
    stderr: "[line 1] Error at 'super': Can't use 'super' outside of a class.\n"
);

lox_err!(
    super_with_no_superclass_is_a_static_error,
    r#"class A { foo() { super.foo(); } }"#,
    code: 65,
    stderr: "[line 1] Error at 'super': Can't use 'super' in a class with no superclass.\n"
);
