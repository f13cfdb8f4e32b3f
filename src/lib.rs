//! # notjs - closures and pair-encoded lists, natively and in script form
//!
//! This crate shows how lexical closures can encode a pair, how nesting pairs
//! gives a singly linked list, and how linear recursion walks such a list. It
//! does so twice: once as plain Rust, once as a small JavaScript subset run by
//! a tree-walking interpreter.
//!
//! ## Native Rust
//!
//! - [`closure::make_adder`] captures a value and returns a function adding to it.
//! - [`list::make_pair`] returns a closure that applies a two-argument selector
//!   to the captured components; [`list::first`] and [`list::second`] supply
//!   the selectors. [`list::EncodedList`] chains such pairs.
//! - [`list::List`] is the tagged `Empty | Node(value, next)` equivalent.
//! - [`list::print_all`] and [`list::sum_all`] traverse either representation.
//!
//! ## Script pipeline
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [strip_comments] → Source without comments
//!     ↓
//! [Lexer] → Token Stream
//!     ↓
//! [Parser] → AST (ast::Program)
//!     ↓
//! [Interpreter] → console output + Runtime Value (interpreter::RValue)
//! ```
//!
//! ## Example Program
//!
//! ```js
//! function sum(a) {
//!   function inner(b) {
//!     return a + b;
//!   }
//!   return inner;
//! }
//!
//! console.log(sum(40)(2));
//! ```
//!
//! ## Module Structure
//!
//! - [`closure`] - Closure factory
//! - [`list`] - Encoded and tagged lists with their traversals
//! - [`lexer`] - Tokenization using lachs
//! - [`parser`] - Parsing using combinator-based grammar
//! - [`ast`] - Syntax tree definitions
//! - [`interpreter`] - Runtime evaluation and execution
//! - [`config`] - Interpreter settings

pub mod ast;
pub mod closure;
pub mod config;
pub mod interpreter;
pub mod lexer;
pub mod list;
pub mod parser;

use std::io::Write;
use std::thread;

use anyhow::{Context, anyhow};
use log::debug;

use crate::config::Config;
use interpreter::Interpreter;
use lexer::Token;
use parser::{ParseState, parse};

/// Stack reserved for evaluation besides the nested calls
const BASE_STACK_SIZE: usize = 2 * 1024 * 1024;

/// Stack reserved per nested script call. One script call takes a handful
/// of evaluator frames.
const STACK_PER_CALL: usize = 64 * 1024;

/// Parse a script, reporting the first parse error
pub fn parse_source(source: &str) -> anyhow::Result<ast::Program> {
    let source = lexer::strip_comments(source);
    let tokens = Token::lex(&source)?;
    debug!("lexed {} token(s)", tokens.len());

    let mut state = ParseState::new(tokens);
    let (program, errors) = parse(&mut state);
    if let Some(error) = errors.into_iter().next() {
        return Err(error.into());
    }
    program.ok_or_else(|| anyhow!("no program was parsed"))
}

/// Run a script with the default [`Config`], writing its console output to `out`
pub fn run_source(source: &str, out: &mut (dyn Write + Send)) -> anyhow::Result<()> {
    run_source_with(source, out, Config::default())
}

/// Run a script on a thread whose stack fits `config.max_call_depth` nested
/// calls, so deep recursion ends in
/// [`RuntimeError::CallStackExceeded`](interpreter::RuntimeError::CallStackExceeded)
/// rather than a stack overflow.
pub fn run_source_with(
    source: &str,
    out: &mut (dyn Write + Send),
    config: Config,
) -> anyhow::Result<()> {
    let stack_size = config
        .max_call_depth
        .saturating_mul(STACK_PER_CALL)
        .saturating_add(BASE_STACK_SIZE);
    debug!("evaluating with a {stack_size} byte stack");

    thread::scope(|scope| -> anyhow::Result<()> {
        let evaluation = thread::Builder::new()
            .name("notjs-eval".into())
            .stack_size(stack_size)
            .spawn_scoped(scope, move || -> anyhow::Result<()> {
                let program = parse_source(source)?;
                Interpreter::with_config(out, config).run(&program)?;
                Ok(())
            })
            .context("failed to start the evaluation thread")?;

        evaluation
            .join()
            .map_err(|_| anyhow!("the evaluation thread panicked"))?
    })
}
