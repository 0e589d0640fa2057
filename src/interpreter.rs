use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use crate::class::{Class, Instance};
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::expr::{self, Expr, ExprVisitor, NodeId};
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::{self, Stmt, StmtVisitor};
use crate::token::{Token, Type};

/// What execution is unwinding through: either a `return` in flight
/// (carrying its value up to the call site of the enclosing function) or a
/// runtime error (carrying up to `interpret`'s top level). Every
/// `execute`/`evaluate` threads this instead of panicking or consulting a
/// side flag, so a block always restores its previous environment on the
/// way out regardless of which kind unwound through it.
#[derive(Debug)]
pub enum Unwind {
    Return(Object),
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}

type EvalResult = Result<Object, Unwind>;
type ExecResult = Result<(), Unwind>;

/// Walks the AST and executes it. Holds the globals environment (fixed for
/// the life of the interpreter), the *current* environment (which moves as
/// blocks, calls, and methods are entered and left), and the resolver's
/// side table mapping every name-bearing expression to the number of
/// enclosing environments to skip when resolving it.
pub struct Interpreter {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<NodeId, usize>,
    output: Box<dyn Write>,
}

impl Interpreter {
    pub fn new(output: Box<dyn Write>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::new(None)));

        for native in NativeFunction::globals() {
            let name = native.name.lexeme.clone();
            globals.borrow_mut().define(&name, Object::from(native));
        }

        Interpreter { globals: Rc::clone(&globals), environment: globals, locals: HashMap::new(), output }
    }

    /// Called by the resolver once per name-bearing expression.
    pub fn resolve(&mut self, id: NodeId, depth: usize) {
        self.locals.insert(id, depth);
    }

    /// Executes a whole program. A runtime error unwinds here and is
    /// reported; nothing after it in the top-level statement list runs.
    pub fn interpret(&mut self, statements: &[Stmt]) {
        for statement in statements {
            if let Err(Unwind::Error(error)) = self.execute(statement) {
                use crate::error::Error;
                error.throw();
                return;
            }
        }
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        stmt.accept(self)
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        expr.accept(self)
    }

    /// Executes a statement list in a freshly-entered environment, always
    /// restoring the previous one afterward — on a normal finish, a `return`
    /// unwinding through it, or a runtime error unwinding through it.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> ExecResult {
        let previous = std::mem::replace(&mut self.environment, environment);

        let mut result = Ok(());
        for statement in statements {
            result = self.execute(statement);
            if result.is_err() {
                break;
            }
        }

        self.environment = previous;
        result
    }

    fn lookup_variable(&self, id: NodeId, name: &Token) -> Result<Object, RuntimeError> {
        match self.locals.get(&id) {
            Some(distance) => self.environment.borrow().get_at(*distance, name),
            None => self.globals.borrow().get(name),
        }
    }

    fn check_arity(paren: &Token, expected: usize, got: usize) -> ExecResult {
        if expected != got {
            Err(RuntimeError {
                token: paren.clone(),
                message: format!("Expected {expected} arguments but got {got}."),
            }.into())
        } else {
            Ok(())
        }
    }

    fn instantiate(&mut self, class: &Rc<RefCell<Class>>, paren: &Token, arguments: Vec<Object>) -> EvalResult {
        let initializer = class.borrow().get_method("init");
        let arity = initializer.as_ref().map_or(0, Function::arity);
        Self::check_arity(paren, arity, arguments.len())?;

        let instance = Rc::new(RefCell::new(Instance::new(Rc::clone(class))));

        if let Some(initializer) = initializer {
            initializer.bind(Rc::clone(&instance)).call(self, arguments)?;
        }

        Ok(Object::Instance(instance))
    }

    fn as_number(token: &Token, value: &Object) -> Result<f64, RuntimeError> {
        match value {
            Object::Literal(Literal::Number(n)) => Ok(*n),
            _ => Err(RuntimeError { token: token.clone(), message: "Operand must be a number.".to_string() }),
        }
    }
}

impl ExprVisitor<EvalResult> for Interpreter {
    fn visit_literal(&mut self, data: &expr::LiteralData) -> EvalResult {
        Ok(Object::from(data.value.clone()))
    }

    fn visit_grouping(&mut self, data: &expr::GroupingData) -> EvalResult {
        self.evaluate(&data.expression)
    }

    fn visit_unary(&mut self, data: &expr::UnaryData) -> EvalResult {
        let right = self.evaluate(&data.right)?;

        match data.operator.kind {
            Type::Minus => Ok(Object::from(-Self::as_number(&data.operator, &right)?)),
            Type::Bang => Ok(Object::from(!right.is_truthy())),
            _ => unreachable!("parser only produces '!' and '-' as unary operators"),
        }
    }

    fn visit_binary(&mut self, data: &expr::BinaryData) -> EvalResult {
        let left = self.evaluate(&data.left)?;
        let right = self.evaluate(&data.right)?;
        let op = &data.operator;

        match op.kind {
            Type::Greater => Ok(Object::from(Self::as_number(op, &left)? > Self::as_number(op, &right)?)),
            Type::GreaterEqual => Ok(Object::from(Self::as_number(op, &left)? >= Self::as_number(op, &right)?)),
            Type::Less => Ok(Object::from(Self::as_number(op, &left)? < Self::as_number(op, &right)?)),
            Type::LessEqual => Ok(Object::from(Self::as_number(op, &left)? <= Self::as_number(op, &right)?)),
            Type::EqualEqual => Ok(Object::from(left == right)),
            Type::BangEqual => Ok(Object::from(left != right)),
            Type::Minus => Ok(Object::from(Self::as_number(op, &left)? - Self::as_number(op, &right)?)),
            Type::Star => Ok(Object::from(Self::as_number(op, &left)? * Self::as_number(op, &right)?)),
            Type::Slash => {
                let (l, r) = (Self::as_number(op, &left)?, Self::as_number(op, &right)?);
                if r == 0.0 {
                    return Err(RuntimeError {
                        token: op.clone(),
                        message: "Cannot divide by zero.".to_string(),
                    }.into());
                }
                Ok(Object::from(l / r))
            },
            Type::Plus => match (left, right) {
                (Object::Literal(Literal::Number(l)), Object::Literal(Literal::Number(r))) => Ok(Object::from(l + r)),
                (Object::Literal(Literal::String(l)), Object::Literal(Literal::String(r))) => Ok(Object::from(l + &r)),
                _ => Err(RuntimeError {
                    token: op.clone(),
                    message: "Operands must be two numbers or two strings.".to_string(),
                }.into()),
            },
            _ => unreachable!("parser only produces comparison/arithmetic/equality operators here"),
        }
    }

    fn visit_logical(&mut self, data: &expr::LogicalData) -> EvalResult {
        let left = self.evaluate(&data.left)?;

        match data.operator.kind {
            Type::Or if left.is_truthy() => Ok(left),
            Type::And if !left.is_truthy() => Ok(left),
            _ => self.evaluate(&data.right),
        }
    }

    fn visit_variable(&mut self, data: &expr::VariableData) -> EvalResult {
        Ok(self.lookup_variable(data.id, &data.name)?)
    }

    fn visit_assign(&mut self, data: &expr::AssignData) -> EvalResult {
        let value = self.evaluate(&data.value)?;

        match self.locals.get(&data.id) {
            Some(distance) => self.environment.borrow_mut().assign_at(*distance, &data.name, value.clone()),
            None => self.globals.borrow_mut().assign(&data.name, value.clone())?,
        }

        Ok(value)
    }

    fn visit_call(&mut self, data: &expr::CallData) -> EvalResult {
        let callee = self.evaluate(&data.callee)?;

        let mut arguments = Vec::with_capacity(data.arguments.len());
        for argument in &data.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        match callee {
            Object::Function(function) => {
                Self::check_arity(&data.paren, function.arity(), arguments.len())?;
                Ok(function.call(self, arguments)?)
            },
            Object::NativeFunction(native) => {
                Self::check_arity(&data.paren, native.arity(), arguments.len())?;
                Ok(native.call(self, arguments)?)
            },
            Object::Class(class) => self.instantiate(&class, &data.paren, arguments),
            _ => Err(RuntimeError {
                token: data.paren.clone(),
                message: "Can only call functions and classes.".to_string(),
            }.into()),
        }
    }

    fn visit_get(&mut self, data: &expr::GetData) -> EvalResult {
        let object = self.evaluate(&data.object)?;

        match object {
            Object::Instance(instance) => Ok(Instance::get(&instance, &data.name)?),
            _ => Err(RuntimeError {
                token: data.name.clone(),
                message: "Only instances have properties.".to_string(),
            }.into()),
        }
    }

    fn visit_set(&mut self, data: &expr::SetData) -> EvalResult {
        let object = self.evaluate(&data.object)?;

        let Object::Instance(instance) = object else {
            return Err(RuntimeError {
                token: data.name.clone(),
                message: "Only instances have fields.".to_string(),
            }.into());
        };

        let value = self.evaluate(&data.value)?;
        instance.borrow_mut().set(&data.name, value.clone());
        Ok(value)
    }

    fn visit_this(&mut self, data: &expr::ThisData) -> EvalResult {
        Ok(self.lookup_variable(data.id, &data.keyword)?)
    }

    fn visit_super(&mut self, data: &expr::SuperData) -> EvalResult {
        let distance = *self.locals.get(&data.id)
            .expect("resolver to record a depth for every 'super' expression");

        let superclass = self.environment.borrow().get_at_named(distance, "super")
            .expect("resolver to guarantee a 'super' binding wherever 'super' resolves");
        let Object::Class(superclass) = superclass else {
            unreachable!("'super' always resolves to the class bound by visit_class");
        };

        // The resolver nests the `this` scope one level inside the `super`
        // scope, so `this` is always exactly one environment closer.
        let instance = self.environment.borrow().get_at_named(distance - 1, "this")
            .expect("resolver to guarantee a 'this' binding alongside every 'super' binding");
        let Object::Instance(instance) = instance else {
            unreachable!("'this' always resolves to the instance bound by Function::bind");
        };

        match superclass.borrow().get_method(&data.method.lexeme) {
            Some(method) => Ok(Object::from(method.bind(instance))),
            None => Err(RuntimeError {
                token: data.method.clone(),
                message: format!("Undefined property '{}'.", data.method.lexeme),
            }.into()),
        }
    }
}

impl StmtVisitor<ExecResult> for Interpreter {
    fn visit_expression(&mut self, data: &stmt::ExpressionData) -> ExecResult {
        self.evaluate(&data.expr)?;
        Ok(())
    }

    fn visit_print(&mut self, data: &stmt::PrintData) -> ExecResult {
        let value = self.evaluate(&data.expr)?;
        writeln!(self.output, "{value}").expect("write to output sink");
        Ok(())
    }

    fn visit_var(&mut self, data: &stmt::VarData) -> ExecResult {
        let value = match &data.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::from(Literal::Nil),
        };

        self.environment.borrow_mut().define(&data.name.lexeme, value);
        Ok(())
    }

    fn visit_block(&mut self, data: &stmt::BlockData) -> ExecResult {
        let enclosing = Rc::clone(&self.environment);
        self.execute_block(&data.statements, Rc::new(RefCell::new(Environment::new(Some(enclosing)))))
    }

    fn visit_if(&mut self, data: &stmt::IfData) -> ExecResult {
        if self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.then_branch)
        } else if let Some(else_branch) = &data.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    fn visit_while(&mut self, data: &stmt::WhileData) -> ExecResult {
        while self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.body)?;
        }
        Ok(())
    }

    fn visit_function(&mut self, data: &stmt::FunctionData) -> ExecResult {
        let function = Function::new(Rc::new(data.clone()), Rc::clone(&self.environment), false);
        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(function));
        Ok(())
    }

    fn visit_return(&mut self, data: &stmt::ReturnData) -> ExecResult {
        let value = match &data.value {
            Some(value) => self.evaluate(value)?,
            None => Object::from(Literal::Nil),
        };
        Err(Unwind::Return(value))
    }

    fn visit_class(&mut self, data: &stmt::ClassData) -> ExecResult {
        let superclass = match &data.superclass {
            Some(variable) => match self.lookup_variable(variable.id, &variable.name)? {
                Object::Class(class) => Some(class),
                _ => return Err(RuntimeError {
                    token: variable.name.clone(),
                    message: "Superclass must be a class.".to_string(),
                }.into()),
            },
            None => None,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(Literal::Nil));

        let saved = superclass.as_ref().map(|superclass| {
            let enclosing = Rc::clone(&self.environment);
            let scope = Rc::new(RefCell::new(Environment::new(Some(enclosing))));
            scope.borrow_mut().define("super", Object::Class(Rc::clone(superclass)));
            std::mem::replace(&mut self.environment, scope)
        });

        let mut methods = HashMap::new();
        for method in &data.methods {
            let function = Function::new(
                Rc::new(method.clone()),
                Rc::clone(&self.environment),
                method.name.lexeme == "init",
            );
            methods.insert(method.name.lexeme.clone(), function);
        }

        if let Some(saved) = saved {
            self.environment = saved;
        }

        let class = Class::new(data.name.lexeme.clone(), superclass, methods);
        self.environment.borrow_mut().assign(&data.name, Object::from(Rc::new(RefCell::new(class))))?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::Parser;
    use crate::resolver::Resolver;
    use crate::scanner::Scanner;

    fn run(source: &str) -> String {
        let tokens = Scanner::new(source).scan_tokens();
        let statements = Parser::new(tokens).parse();

        let output: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));

        struct SharedWriter(Rc<RefCell<Vec<u8>>>);
        impl Write for SharedWriter {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.borrow_mut().write(buf)
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut interpreter = Interpreter::new(Box::new(SharedWriter(Rc::clone(&output))));

        let mut resolver = Resolver::new(&mut interpreter);
        resolver.resolve(&statements);

        interpreter.interpret(&statements);

        let bytes = output.borrow().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn arithmetic_and_concatenation() {
        assert_eq!(run("print 1 + 2;"), "3\n");
        assert_eq!(run("print \"ab\" + \"cd\";"), "abcd\n");
    }

    #[test]
    fn block_scoping_shadows_without_mutating_outer() {
        assert_eq!(run("var a = 1; { var a = 2; print a; } print a;"), "2\n1\n");
    }

    #[test]
    fn closures_capture_the_variable_not_the_value() {
        let source = "
            fun make() {
                var i = 0;
                fun next() { i = i + 1; return i; }
                return next;
            }
            var c = make();
            print c();
            print c();
        ";
        assert_eq!(run(source), "1\n2\n");
    }

    #[test]
    fn methods_and_inheritance() {
        assert_eq!(run("class A { greet() { print \"hi\"; } } A().greet();"), "hi\n");

        let source = "
            class A { init(n) { this.n = n; } }
            class B < A { show() { print this.n; } }
            B(7).show();
        ";
        assert_eq!(run(source), "7\n");
    }

    #[test]
    fn for_loop_desugars_correctly() {
        assert_eq!(run("for (var i = 0; i < 3; i = i + 1) print i;"), "0\n1\n2\n");
    }

    #[test]
    fn division_by_zero_is_a_runtime_error() {
        assert_eq!(run("print 1/0;"), "");
    }

    #[test]
    fn init_always_returns_this_even_with_a_bare_return() {
        let source = "
            class Foo {
                init() { return; }
            }
            var f = Foo();
            print f.init() == f;
        ";
        assert_eq!(run(source), "true\n");
    }

    #[test]
    fn short_circuit_returns_operand_value_not_bool() {
        assert_eq!(run("print nil or \"default\";"), "default\n");
        assert_eq!(run("print false and \"skipped\";"), "false\n");
    }
}
