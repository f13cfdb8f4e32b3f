use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::ast::expression::FunctionLiteral;

/// One lexical frame. Frames are shared so closures observe bindings that
/// are hoisted into their defining frame after they were created.
pub type ScopeFrame = Rc<RefCell<HashMap<String, RValue>>>;

/// The frame chain a closure was created in, outermost first
#[derive(Clone)]
pub struct CapturedEnv(pub Vec<ScopeFrame>);

impl CapturedEnv {
    fn same_frames(&self, other: &CapturedEnv) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| Rc::ptr_eq(a, b))
    }
}

// Frames can contain the closures that captured them, so never print their contents.
impl fmt::Debug for CapturedEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CapturedEnv(<{} frames>)", self.0.len())
    }
}

/// A function value together with the environment it closes over
#[derive(Debug, Clone)]
pub struct Closure {
    pub function: Rc<FunctionLiteral>,
    pub env: CapturedEnv,
}

/// Builtin objects and functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Console,
    ConsoleLog,
}

/// Runtime value representation
#[derive(Debug, Clone)]
pub enum RValue {
    Undefined,
    Null,
    Number(f64),
    Bool(bool),
    String(String),
    Function(Closure),
    Builtin(Builtin),
}

impl RValue {
    /// What `typeof` would report
    pub fn type_name(&self) -> &'static str {
        match self {
            RValue::Undefined => "undefined",
            RValue::Null => "null",
            RValue::Number(_) => "number",
            RValue::Bool(_) => "boolean",
            RValue::String(_) => "string",
            RValue::Function(_) => "function",
            RValue::Builtin(Builtin::Console) => "object",
            RValue::Builtin(Builtin::ConsoleLog) => "function",
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            RValue::Undefined | RValue::Null => false,
            RValue::Bool(b) => *b,
            RValue::Number(n) => *n != 0.0 && !n.is_nan(),
            RValue::String(s) => !s.is_empty(),
            RValue::Function(_) | RValue::Builtin(_) => true,
        }
    }

    /// Numeric conversion used by arithmetic and comparison
    pub fn to_number(&self) -> f64 {
        match self {
            RValue::Undefined => f64::NAN,
            RValue::Null => 0.0,
            RValue::Bool(b) => f64::from(u8::from(*b)),
            RValue::Number(n) => *n,
            RValue::String(s) => {
                let trimmed = s.trim();
                match trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed) {
                    "" if trimmed.is_empty() => 0.0,
                    "Infinity" => {
                        if trimmed.starts_with('-') {
                            f64::NEG_INFINITY
                        } else {
                            f64::INFINITY
                        }
                    }
                    // Rust also accepts `inf`, `infinity` and `nan`, which are not numbers here
                    unsigned if unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') => {
                        trimmed.parse().unwrap_or(f64::NAN)
                    }
                    _ => f64::NAN,
                }
            }
            RValue::Function(_) | RValue::Builtin(_) => f64::NAN,
        }
    }

    /// `===`
    pub fn strict_equals(&self, other: &RValue) -> bool {
        match (self, other) {
            (RValue::Undefined, RValue::Undefined) | (RValue::Null, RValue::Null) => true,
            (RValue::Number(a), RValue::Number(b)) => a == b,
            (RValue::Bool(a), RValue::Bool(b)) => a == b,
            (RValue::String(a), RValue::String(b)) => a == b,
            (RValue::Function(a), RValue::Function(b)) => {
                Rc::ptr_eq(&a.function, &b.function) && a.env.same_frames(&b.env)
            }
            (RValue::Builtin(a), RValue::Builtin(b)) => a == b,
            _ => false,
        }
    }

    /// `==`, which additionally equates `null` with `undefined` and compares
    /// numbers, strings and booleans numerically
    pub fn loose_equals(&self, other: &RValue) -> bool {
        match (self, other) {
            (RValue::Undefined | RValue::Null, RValue::Undefined | RValue::Null) => true,
            (RValue::Number(_), RValue::String(_) | RValue::Bool(_))
            | (RValue::String(_), RValue::Number(_) | RValue::Bool(_))
            | (RValue::Bool(_), RValue::Number(_) | RValue::String(_)) => {
                self.to_number() == other.to_number()
            }
            _ => self.strict_equals(other),
        }
    }
}

fn format_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // covers -0
        f.write_str("0")
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Display for RValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RValue::Undefined => f.write_str("undefined"),
            RValue::Null => f.write_str("null"),
            RValue::Number(n) => format_number(*n, f),
            RValue::Bool(b) => write!(f, "{b}"),
            RValue::String(s) => f.write_str(s),
            RValue::Function(closure) => {
                write!(f, "[Function: {}]", closure.function.display_name())
            }
            RValue::Builtin(Builtin::Console) => f.write_str("[object console]"),
            RValue::Builtin(Builtin::ConsoleLog) => f.write_str("[Function: log]"),
        }
    }
}
