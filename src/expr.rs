use crate::literal::Literal;
use crate::token::Token;

/// Monotonic id assigned to every expression node that the resolver needs to
/// annotate with a scope distance (`Variable`, `Assign`, `This`, `Super`).
/// Rust enums have no stable address to key a side table on, so the parser
/// hands out one of these instead; see `Interpreter::locals`.
pub type NodeId = u64;

#[derive(Debug, Clone)]
pub enum Expr {
    Literal(LiteralData),
    Grouping(GroupingData),
    Unary(UnaryData),
    Binary(BinaryData),
    Logical(LogicalData),
    Variable(VariableData),
    Assign(AssignData),
    Call(CallData),
    Get(GetData),
    Set(SetData),
    This(ThisData),
    Super(SuperData),
}

#[derive(Debug, Clone)]
pub struct LiteralData {
    pub value: Literal,
}

#[derive(Debug, Clone)]
pub struct GroupingData {
    pub expression: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct UnaryData {
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct BinaryData {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct LogicalData {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct VariableData {
    pub id: NodeId,
    pub name: Token,
}

#[derive(Debug, Clone)]
pub struct AssignData {
    pub id: NodeId,
    pub name: Token,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct CallData {
    pub callee: Box<Expr>,
    pub paren: Token,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone)]
pub struct GetData {
    pub object: Box<Expr>,
    pub name: Token,
}

#[derive(Debug, Clone)]
pub struct SetData {
    pub object: Box<Expr>,
    pub name: Token,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct ThisData {
    pub id: NodeId,
    pub keyword: Token,
}

#[derive(Debug, Clone)]
pub struct SuperData {
    pub id: NodeId,
    pub keyword: Token,
    pub method: Token,
}

/// One method per variant, dispatched through `Expr::accept`. Implemented by
/// the resolver, the interpreter, and the debug AST printer.
pub trait ExprVisitor<T> {
    fn visit_literal(&mut self, data: &LiteralData) -> T;
    fn visit_grouping(&mut self, data: &GroupingData) -> T;
    fn visit_unary(&mut self, data: &UnaryData) -> T;
    fn visit_binary(&mut self, data: &BinaryData) -> T;
    fn visit_logical(&mut self, data: &LogicalData) -> T;
    fn visit_variable(&mut self, data: &VariableData) -> T;
    fn visit_assign(&mut self, data: &AssignData) -> T;
    fn visit_call(&mut self, data: &CallData) -> T;
    fn visit_get(&mut self, data: &GetData) -> T;
    fn visit_set(&mut self, data: &SetData) -> T;
    fn visit_this(&mut self, data: &ThisData) -> T;
    fn visit_super(&mut self, data: &SuperData) -> T;
}

impl Expr {
    pub fn accept<T>(&self, visitor: &mut dyn ExprVisitor<T>) -> T {
        match self {
            Expr::Literal(data) => visitor.visit_literal(data),
            Expr::Grouping(data) => visitor.visit_grouping(data),
            Expr::Unary(data) => visitor.visit_unary(data),
            Expr::Binary(data) => visitor.visit_binary(data),
            Expr::Logical(data) => visitor.visit_logical(data),
            Expr::Variable(data) => visitor.visit_variable(data),
            Expr::Assign(data) => visitor.visit_assign(data),
            Expr::Call(data) => visitor.visit_call(data),
            Expr::Get(data) => visitor.visit_get(data),
            Expr::Set(data) => visitor.visit_set(data),
            Expr::This(data) => visitor.visit_this(data),
            Expr::Super(data) => visitor.visit_super(data),
        }
    }
}
