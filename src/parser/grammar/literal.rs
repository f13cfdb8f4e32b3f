//! Literal parsers

use crate::ast::expression::{Boolean, Expression, Ident, Number, StringLiteral};
use crate::lexer::Token;

use crate::parser::combinators::BoxedParser;
use crate::parser::state::{ParseError, ParseState};

fn unexpected(state: &mut ParseState, expected: &'static str) -> ParseError {
    let err = match state.peek() {
        Some(tok) => ParseError::new("unexpected token")
            .expected(expected)
            .found(tok.describe())
            .at(tok.pos()),
        None => ParseError::new("unexpected end of input").expected(expected),
    };
    state.record_error(err.clone());
    err
}

/// Parse an identifier
pub fn ident() -> BoxedParser<Ident> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Ident(_)) => match state.advance() {
            Some(Token::Ident(id)) => Ok(Ident {
                value: id.value,
                position: id.position,
            }),
            _ => unreachable!(),
        },
        _ => Err(unexpected(state, "identifier")),
    })
}

/// Parse a numeric literal
pub fn number() -> BoxedParser<Number> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Number(_)) => match state.advance() {
            Some(Token::Number(num)) => {
                let value = num.value.parse().map_err(|_| {
                    ParseError::new("malformed number")
                        .found(format!("'{}'", num.value))
                        .at(num.position.clone())
                })?;
                Ok(Number {
                    value,
                    position: num.position,
                })
            }
            _ => unreachable!(),
        },
        _ => Err(unexpected(state, "number")),
    })
}

/// Parse a single- or double-quoted string literal, resolving escapes
pub fn string_literal() -> BoxedParser<StringLiteral> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::StringLiteral(_)) => match state.advance() {
            Some(Token::StringLiteral(s)) => Ok(StringLiteral {
                value: unescape(&s.value[1..s.value.len() - 1]),
                position: s.position,
            }),
            _ => unreachable!(),
        },
        _ => Err(unexpected(state, "string")),
    })
}

fn unescape(raw: &str) -> String {
    let mut value = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some('r') => value.push('\r'),
            Some('0') => value.push('\0'),
            Some(other) => value.push(other),
            None => {}
        }
    }
    value
}

/// Parse `true`, `false`, `null` or `undefined`
pub fn keyword_literal() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| {
        let expr = match state.peek() {
            Some(Token::True(t)) => Expression::Boolean(Boolean {
                value: true,
                position: t.position.clone(),
            }),
            Some(Token::False(f)) => Expression::Boolean(Boolean {
                value: false,
                position: f.position.clone(),
            }),
            Some(Token::Null(n)) => Expression::Null(n.position.clone()),
            Some(Token::Undefined(u)) => Expression::Undefined(u.position.clone()),
            _ => return Err(unexpected(state, "literal")),
        };
        state.advance();
        Ok(expr)
    })
}
