use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use crate::lexer::Token;

use super::state::{ParseError, ParseResult, ParseState, Parser};

type ParserFn<T> = Rc<dyn Fn(&mut ParseState) -> ParseResult<T>>;

pub struct BoxedParser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P) -> Self {
        BoxedParser {
            parser: Rc::new(move |state| parser.parse(state)),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        (self.parser)(state)
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| self.parse(state).map(&f))
    }

    /// Try `self`; on failure rewind and try `other`
    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            let pos = state.position();
            self.parse(state).or_else(|_| {
                state.restore(pos);
                other.parse(state)
            })
        })
    }

    /// Report failures as "expected `name`" instead of whatever failed inside
    pub fn label(self, name: &'static str) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            self.parse(state).map_err(|mut err| {
                err.expected = vec![name.to_string()];
                state.record_error(err.clone());
                err
            })
        })
    }
}

// Operators:
//   a + b   both, as a tuple
//   a - b   both, keep a
//   a * b   both, keep b
//   a | b   first that succeeds
//   a >> f  map

impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        BoxedParser::new(move |state: &mut ParseState| Ok((self.parse(state)?, rhs.parse(state)?)))
    }
}

impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        (self + rhs).map(|(kept, _)| kept)
    }
}

impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        (self + rhs).map(|(_, kept)| kept)
    }
}

impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        self.or(rhs)
    }
}

impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

fn token_with_error<F: Fn(&Token) -> bool + 'static>(
    predicate: F,
    expected: &'static str,
) -> BoxedParser<Token> {
    BoxedParser::new(move |state: &mut ParseState| match state.peek() {
        Some(tok) if predicate(tok) => state
            .advance()
            .ok_or_else(|| ParseError::new("unexpected end of input").expected(expected)),
        Some(tok) => {
            let err = ParseError::new("unexpected token")
                .expected(expected)
                .found(tok.describe())
                .at(tok.pos());
            state.record_error(err.clone());
            Err(err)
        }
        None => {
            let err = ParseError::new("unexpected end of input").expected(expected);
            state.record_error(err.clone());
            Err(err)
        }
    })
}

pub fn expect_function() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Function(_)), "'function'")
}

pub fn expect_return() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Return(_)), "'return'")
}

pub fn expect_if() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::If(_)), "'if'")
}

pub fn expect_else() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Else(_)), "'else'")
}

pub fn expect_assign() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Assign(_)), "'='")
}

pub fn expect_arrow() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Arrow(_)), "'=>'")
}

pub fn expect_question() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Question(_)), "'?'")
}

pub fn expect_colon() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Colon(_)), "':'")
}

pub fn expect_comma() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Comma(_)), "','")
}

pub fn expect_semicolon() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Semicolon(_)), "';'")
}

pub fn expect_lparen() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::LParen(_)), "'('")
}

pub fn expect_rparen() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::RParen(_)), "')'")
}

pub fn expect_lbrace() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::LBrace(_)), "'{'")
}

pub fn expect_rbrace() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::RBrace(_)), "'}'")
}


/// Parse zero or more occurrences
pub fn many<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let mut results = Vec::new();
        loop {
            let pos = state.position();
            match parser.parse(state) {
                Ok(item) => results.push(item),
                Err(_) => {
                    state.restore(pos);
                    break;
                }
            }
        }
        Ok(results)
    })
}

/// Optional: parse zero or one
pub fn optional<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Option<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let pos = state.position();
        match parser.parse(state) {
            Ok(item) => Ok(Some(item)),
            Err(_) => {
                state.restore(pos);
                Ok(None)
            }
        }
    })
}

/// Zero or more `item`s separated by `separator`; no trailing separator
pub fn separated<T: 'static, S: 'static>(
    item: BoxedParser<T>,
    separator: BoxedParser<S>,
) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let pos = state.position();
        let first = match item.parse(state) {
            Ok(first) => first,
            Err(_) => {
                state.restore(pos);
                return Ok(vec![]);
            }
        };
        let mut results = vec![first];

        loop {
            let pos = state.position();
            if separator.parse(state).is_err() {
                state.restore(pos);
                break;
            }
            results.push(item.parse(state)?);
        }

        Ok(results)
    })
}
