#[macro_use]
mod common;

lox_ok!(
    setting_a_field_creates_it,
    r#"
    class Toast {}
    var toast = Toast();
    print toast.jam = "grape";
    "#,
    "grape\n"
);

lox_ok!(
    assignment_to_a_field_returns_the_assigned_value,
    r#"
    class Box {}
    var box = Box();
    var v = (box.contents = 42);
    print v;
    "#,
    "42\n"
);

lox_ok!(
    a_field_shadows_a_method_of_the_same_name,
    r#"
    class Bacon {
        eat() { print "Crunch crunch crunch!"; }
    }
    var bacon = Bacon();
    bacon.eat();
    bacon.eat = "replacement";
    print bacon.eat;
    "#,
    "Crunch crunch crunch!\nreplacement\n"
);

lox_err!(
    setting_a_field_on_a_non_instance_is_a_runtime_error,
    r#"var n = 1; n.x = 2;"#,
    code: 70,
    stderr: "Only instances have fields.\n[line 1]\n"
);
