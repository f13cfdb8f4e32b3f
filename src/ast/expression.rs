use std::rc::Rc;

use lachs::Span;

use super::statement::Statement;

#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub value: String,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    pub value: f64,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boolean {
    pub value: bool,
    pub position: Span,
}

/// A function value in source: `function name(a, b) { ... }` or `(a, b) => ...`
#[derive(Debug, Clone)]
pub struct FunctionLiteral {
    /// `None` for anonymous function expressions and arrows
    pub name: Option<Ident>,
    pub params: Vec<Ident>,
    pub body: FunctionBody,
    pub position: Span,
}

impl FunctionLiteral {
    pub fn display_name(&self) -> &str {
        self.name
            .as_ref()
            .map(|name| name.value.as_str())
            .unwrap_or("anonymous")
    }
}

#[derive(Debug, Clone)]
pub enum FunctionBody {
    Block(Vec<Statement>),
    /// Concise arrow body, `x => x + 1`
    Expression(Box<Expression>),
}

#[derive(Debug, Clone)]
pub struct Call {
    pub callee: Box<Expression>,
    pub args: Vec<Expression>,
    pub position: Span,
}

/// `object.property`, only meaningful on builtins such as `console`
#[derive(Debug, Clone)]
pub struct Member {
    pub object: Box<Expression>,
    pub property: Ident,
    pub position: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOpKind {
    Neg,
    Not,
}

#[derive(Debug, Clone)]
pub struct UnaryOp {
    pub op: UnaryOpKind,
    pub operand: Box<Expression>,
    pub position: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Lt,
    Gt,
    LtEq,
    GtEq,
    StrictEq,
    StrictNotEq,
    Eq,
    NotEq,
    And,
    Or,
}

#[derive(Debug, Clone)]
pub struct BinaryOp {
    pub op: BinOpKind,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub position: Span,
}

#[derive(Debug, Clone)]
pub struct Conditional {
    pub condition: Box<Expression>,
    pub when_true: Box<Expression>,
    pub when_false: Box<Expression>,
    pub position: Span,
}

#[derive(Debug, Clone)]
pub enum Expression {
    Ident(Ident),
    Number(Number),
    String(StringLiteral),
    Boolean(Boolean),
    Null(Span),
    Undefined(Span),
    Function(Rc<FunctionLiteral>),
    Call(Call),
    Member(Member),
    UnaryOp(UnaryOp),
    BinaryOp(BinaryOp),
    Conditional(Conditional),
}

impl Expression {
    pub fn position(&self) -> Span {
        match self {
            Expression::Ident(ident) => ident.position.clone(),
            Expression::Number(number) => number.position.clone(),
            Expression::String(string) => string.position.clone(),
            Expression::Boolean(boolean) => boolean.position.clone(),
            Expression::Null(position) | Expression::Undefined(position) => position.clone(),
            Expression::Function(function) => function.position.clone(),
            Expression::Call(call) => call.position.clone(),
            Expression::Member(member) => member.position.clone(),
            Expression::UnaryOp(unary) => unary.position.clone(),
            Expression::BinaryOp(binary) => binary.position.clone(),
            Expression::Conditional(conditional) => conditional.position.clone(),
        }
    }
}
