//! Runtime errors
//!
//! Evaluation stops at the first error; there is no recovery or `try`.

use std::fmt;
use std::io;

use lachs::Span;

#[derive(Debug)]
pub enum RuntimeError {
    /// A name that is bound in no enclosing scope
    UndefinedIdentifier { name: String, span: Span },

    /// Calling something that is not a function, e.g. an encoded list
    /// accessor applied to the `null` terminator
    NotCallable { found: String, span: Span },

    /// Member access on a value that does not have the property. `object`
    /// is the type of the value, as `typeof` would name it.
    UnknownProperty {
        object: &'static str,
        property: String,
        span: Span,
    },

    /// Recursion went deeper than the configured limit
    CallStackExceeded { limit: usize, span: Span },

    /// Writing program output failed
    Io(io::Error),
}

fn location(span: &Span) -> String {
    format!("{}:{}", span.start.0 + 1, span.start.1 + 1)
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::UndefinedIdentifier { name, span } => {
                write!(f, "{name} is not defined (at {})", location(span))
            }
            RuntimeError::NotCallable { found, span } => {
                write!(f, "{found} is not a function (at {})", location(span))
            }
            RuntimeError::UnknownProperty {
                object,
                property,
                span,
            } => write!(
                f,
                "{object} value has no property '{property}' (at {})",
                location(span)
            ),
            RuntimeError::CallStackExceeded { limit, span } => write!(
                f,
                "maximum call stack size of {limit} exceeded (at {})",
                location(span)
            ),
            RuntimeError::Io(error) => write!(f, "failed to write output: {error}"),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuntimeError::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for RuntimeError {
    fn from(error: io::Error) -> Self {
        RuntimeError::Io(error)
    }
}
