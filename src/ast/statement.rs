use std::rc::Rc;

use lachs::Span;

use super::expression::{Expression, FunctionLiteral, Ident};

#[derive(Debug, Clone)]
pub enum Statement {
    FunctionDeclaration(FunctionDeclaration),
    Return(Return),
    If(If),
    Variable(VariableStatement),
    Block(Vec<Statement>),
    Expression(Expression),
}

/// `function name(params) { body }`, hoisted to the top of its block
#[derive(Debug, Clone)]
pub struct FunctionDeclaration {
    pub name: Ident,
    pub function: Rc<FunctionLiteral>,
}

#[derive(Debug, Clone)]
pub struct Return {
    pub value: Option<Expression>,
    pub position: Span,
}

#[derive(Debug, Clone)]
pub struct If {
    pub condition: Expression,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
    pub position: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Let,
    Const,
    Var,
}

#[derive(Debug, Clone)]
pub struct VariableDeclaration {
    pub name: Ident,
    pub initializer: Option<Expression>,
}

#[derive(Debug, Clone)]
pub struct VariableStatement {
    pub kind: DeclarationKind,
    pub declarations: Vec<VariableDeclaration>,
    pub position: Span,
}
