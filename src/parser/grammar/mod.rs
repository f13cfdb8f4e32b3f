//! Grammar of the script language
//!
//! ```text
//! program    := statement*
//! statement  := function_declaration | return_statement | if_statement
//!             | variable_statement | block | ";" | expression_statement
//! expression := arrow_function | conditional
//! ```
//!
//! Operator precedence follows JavaScript: `?:` binds loosest, then `||`,
//! `&&`, equality, comparison, `+ -`, `* / %`, unary `- !`, and finally calls
//! and member access.

mod expression;
mod literal;
mod statement;

pub use expression::*;
pub use literal::*;
pub use statement::*;

use log::debug;

use crate::ast::Program;

use super::combinators::{BoxedParser, many};
use super::state::{ParseError, ParseState, Parser};

/// program := statement*
pub fn program() -> BoxedParser<Program> {
    many(statement()) >> |statements| Program { statements }
}

/// Parse a complete program from the token stream
/// Returns the parsed program (if all input was consumed) along with all collected errors
pub fn parse(state: &mut ParseState) -> (Option<Program>, Vec<ParseError>) {
    let result = program().parse(state);

    let program = match result {
        Ok(_) if state.has_next() => {
            let err = match state.get_furthest_error() {
                Some(furthest) => furthest.clone(),
                None => state.error_here("unexpected token"),
            };
            debug!("parse stopped before end of input: {err}");
            state.collect_error(err);
            None
        }
        Ok(prog) => Some(prog),
        Err(err) => {
            let err = state.get_furthest_error().cloned().unwrap_or(err);
            state.collect_error(err);
            None
        }
    };

    let errors = state.take_errors();
    (program, errors)
}
