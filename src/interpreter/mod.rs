//! Tree-walking interpreter
//!
//! Closures capture the frame chain they are created in (see [`Scope::capture`]),
//! so a function returned from another function keeps seeing the outer
//! function's parameters. Function declarations are hoisted to the top of
//! their block, which lets them call themselves and their siblings.

mod error;
mod eval;
mod scope;
mod value;

pub use error::RuntimeError;
pub use eval::{Completion, EvalResult};
pub use scope::Scope;
pub use value::{Builtin, CapturedEnv, Closure, RValue, ScopeFrame};

use std::io::Write;

use lachs::Span;
use log::{debug, trace};

use crate::ast::Program;
use crate::ast::expression::FunctionBody;
use crate::config::Config;

use eval::eval_block;

/// Evaluates on the calling thread's stack. [`run_source_with`](crate::run_source_with)
/// sizes a thread's stack for [`Config::max_call_depth`] first.
pub struct Interpreter<'w> {
    scope: Scope,
    out: &'w mut dyn Write,
    config: Config,
    depth: usize,
}

impl<'w> Interpreter<'w> {
    /// An interpreter that writes `console.log` output to `out`
    pub fn new(out: &'w mut dyn Write) -> Self {
        Self::with_config(out, Config::default())
    }

    pub fn with_config(out: &'w mut dyn Write, config: Config) -> Self {
        Self {
            scope: Scope::new(),
            out,
            config,
            depth: 0,
        }
    }

    /// Run a program in the global frame and return its completion value,
    /// the value of the last statement evaluated
    pub fn run(&mut self, program: &Program) -> EvalResult<RValue> {
        let value = match eval_block(&program.statements, self)? {
            Completion::Normal(value) | Completion::Return(value) => value,
        };
        self.out.flush()?;
        Ok(value)
    }

    /// Look up a binding as seen from the current frame
    pub fn resolve(&self, name: &str) -> Option<RValue> {
        self.scope.resolve(name)
    }

    /// Apply `callee` to `args`. Missing arguments are `undefined`, extra ones are ignored.
    pub fn call(&mut self, callee: &RValue, args: Vec<RValue>, span: &Span) -> EvalResult<RValue> {
        match callee {
            RValue::Builtin(Builtin::ConsoleLog) => {
                let line = args
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(self.out, "{line}")?;
                Ok(RValue::Undefined)
            }
            RValue::Function(closure) => self.call_closure(closure, args, span),
            other => Err(RuntimeError::NotCallable {
                found: match other {
                    RValue::String(s) => format!("{s:?}"),
                    _ => other.to_string(),
                },
                span: span.clone(),
            }),
        }
    }

    fn call_closure(&mut self, closure: &Closure, args: Vec<RValue>, span: &Span) -> EvalResult<RValue> {
        if self.depth >= self.config.max_call_depth {
            return Err(RuntimeError::CallStackExceeded {
                limit: self.config.max_call_depth,
                span: span.clone(),
            });
        }

        let function = &closure.function;
        debug!(
            "call push, name = {}, {} argument(s), depth = {}",
            function.display_name(),
            args.len(),
            self.depth
        );

        self.depth += 1;
        let saved = self.scope.switch_to(&closure.env);
        self.scope.enter();

        let mut args = args.into_iter();
        for param in &function.params {
            let value = args.next().unwrap_or(RValue::Undefined);
            trace!("binding parameter {} = {value}", param.value);
            self.scope.add(&param.value, value);
        }

        let result = match &function.body {
            FunctionBody::Block(statements) => {
                eval_block(statements, self).map(|completion| match completion {
                    Completion::Return(value) => value,
                    Completion::Normal(_) => RValue::Undefined,
                })
            }
            FunctionBody::Expression(expr) => expr.eval(self),
        };

        self.scope.restore(saved);
        self.depth -= 1;
        debug!("call pop, name = {}", function.display_name());

        result
    }
}
