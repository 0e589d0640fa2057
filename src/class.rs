use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::function::Function;
use crate::object::Object;
use crate::token::Token;

/// A class declaration. Methods close over the environment in which the
/// class was declared (plus, for subclasses, a scope binding `super`); see
/// `Interpreter::visit_class` for how that environment is built.
#[derive(Clone)]
pub struct Class {
    pub name: String,
    pub superclass: Option<Rc<RefCell<Class>>>,
    pub methods: HashMap<String, Function>,
}

impl Class {
    pub fn new(name: String, superclass: Option<Rc<RefCell<Class>>>, methods: HashMap<String, Function>) -> Self {
        Class { name, superclass, methods }
    }

    /// Looks up a method on this class, falling back to the superclass
    /// chain. Does not bind `this`; callers do that with `Function::bind`.
    pub fn get_method(&self, name: &str) -> Option<Function> {
        if let Some(method) = self.methods.get(name) {
            return Some(method.clone());
        }

        self.superclass.as_ref().and_then(|superclass| superclass.borrow().get_method(name))
    }

    /// The arity of `init`, or 0 if this class defines no initializer.
    pub fn arity(&self) -> usize {
        self.get_method("init").map_or(0, |init| init.arity())
    }
}

impl Debug for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<class {}>", self.name)
    }
}

impl Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An instantiated object: a class plus a mutable bag of fields. Property
/// lookup checks fields first, then the class's method chain (binding the
/// method to this instance); property assignment always writes a field,
/// never a method.
#[derive(Clone)]
pub struct Instance {
    pub class: Rc<RefCell<Class>>,
    pub fields: HashMap<String, Object>,
}

impl Instance {
    pub fn new(class: Rc<RefCell<Class>>) -> Self {
        Instance { class, fields: HashMap::new() }
    }

    /// Takes the owning `Rc` (rather than `&self`) because a method found on
    /// the class chain must be bound to *this* instance by reference, not to
    /// a detached copy of it.
    pub fn get(instance: &Rc<RefCell<Instance>>, name: &Token) -> Result<Object, RuntimeError> {
        let this = instance.borrow();

        if let Some(field) = this.fields.get(&name.lexeme) {
            return Ok(field.clone());
        }

        let method = this.class.borrow().get_method(&name.lexeme);
        drop(this);

        match method {
            Some(method) => Ok(Object::from(method.bind(Rc::clone(instance)))),
            None => Err(RuntimeError {
                token: name.clone(),
                message: format!("Undefined property '{}'.", name.lexeme),
            }),
        }
    }

    pub fn set(&mut self, name: &Token, value: Object) {
        self.fields.insert(name.lexeme.clone(), value);
    }
}

impl Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<instance {}>", self.class.borrow().name)
    }
}

impl Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} instance", self.class.borrow().name)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::token::Type;

    #[test]
    fn method_lookup_falls_back_to_superclass() {
        let base = Rc::new(RefCell::new(Class::new("Base".to_string(), None, HashMap::new())));
        let derived = Class::new("Derived".to_string(), Some(Rc::clone(&base)), HashMap::new());

        assert!(derived.get_method("anything").is_none());
        assert_eq!(derived.superclass.unwrap().borrow().name, "Base");
    }

    #[test]
    fn undefined_property_is_a_runtime_error() {
        let class = Rc::new(RefCell::new(Class::new("Foo".to_string(), None, HashMap::new())));
        let instance = Rc::new(RefCell::new(Instance::new(class)));
        let name = Token::new(Type::Identifier, "bar".to_string(), None, 1);

        let err = Instance::get(&instance, &name).unwrap_err();
        assert_eq!(err.message, "Undefined property 'bar'.");
    }
}
