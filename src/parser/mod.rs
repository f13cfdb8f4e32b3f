//! Combinator-based recursive descent parser
//!
//! Parsers are values of [`BoxedParser`] composed with the methods and
//! operators in [`combinators`]. Every failing primitive records its error in
//! the [`ParseState`]; when the whole program fails, the error that got
//! furthest into the token stream is reported.

mod combinators;
mod grammar;
mod state;

pub use combinators::*;
pub use grammar::*;
pub use state::{ParseError, ParseResult, ParseState, Parser};
