//! Syntax tree of the script language
//!
//! The parser produces a [`Program`], a flat list of top-level statements.
//! Function bodies are shared behind `Rc` so closures created at runtime can
//! point at their declaration without cloning it.

pub mod expression;
pub mod statement;

use statement::Statement;

#[derive(Debug, Clone)]
pub struct Program {
    pub statements: Vec<Statement>,
}
