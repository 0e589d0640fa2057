#[macro_use]
mod common;

lox_ok!(
    a_method_prints_from_inside_the_instance,
    r#"class A { greet() { print "hi"; } } A().greet();"#,
    "hi\n"
);

lox_ok!(
    class_prints_its_name,
    "class Bagel {} print Bagel;",
    "Bagel\n"
);

lox_ok!(
    instance_prints_class_plus_instance,
    "class Bagel {} print Bagel();",
    "Bagel instance\n"
);

lox_ok!(
    fields_can_be_set_and_read_back,
    r#"
    class Bagel {}
    var bagel = Bagel();
    bagel.flavor = "plain";
    print bagel.flavor;
    "#,
    "plain\n"
);

lox_ok!(
    methods_are_bound_to_the_receiver_not_shared,
    r#"
    class Cake {
        taste() {
            var adjective = "delicious";
            print "The " + this.flavor + " cake is " + adjective + "!";
        }
    }
    var cake = Cake();
    cake.flavor = "German chocolate";
    cake.taste();
    "#,
    "The German chocolate cake is delicious!\n"
);

lox_err!(
    self_inheritance_is_a_static_error,
    "class Oops < Oops {}",
    code: 65,
    stderr: "[line 1] Error at 'Oops': A class can't inherit from itself.\n"
);

lox_err!(
    getting_a_field_off_a_non_instance_is_a_runtime_error,
    r#"var n = 1; print n.x;"#,
    code: 70,
    stderr: "Only instances have properties.\n[line 1]\n"
);

lox_err!(
    undefined_property_is_a_runtime_error,
    r#"class Foo {} var f = Foo(); print f.bar;"#,
    code: 70,
    stderr: "Undefined property 'bar'.\n[line 1]\n"
);
