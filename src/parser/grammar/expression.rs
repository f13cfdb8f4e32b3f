//! Expression parsers, one function per precedence level from loosest to tightest

use std::rc::Rc;

use log::trace;

use crate::ast::expression::{
    BinOpKind, BinaryOp, Call, Conditional, Expression, FunctionBody, FunctionLiteral, Ident,
    Member, UnaryOp, UnaryOpKind,
};
use crate::lexer::Token;

use crate::parser::combinators::{
    BoxedParser, expect_arrow, expect_colon, expect_comma, expect_function, expect_lparen,
    expect_question, expect_rparen, optional, separated,
};
use crate::parser::state::{ParseState, Parser};

use super::literal::{ident, keyword_literal, number, string_literal};
use super::statement::block_body;

/// expression := arrow_function | conditional
pub fn expression() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| (arrow_function() | conditional()).parse(state))
}

/// params := "(" [ident ("," ident)*] ")"
pub fn parameter_list() -> BoxedParser<Vec<Ident>> {
    expect_lparen() * separated(ident(), expect_comma()) - expect_rparen()
}

/// arrow_function := (ident | params) "=>" (block | expression)
pub fn arrow_function() -> BoxedParser<Expression> {
    let single = ident() >> |id| vec![id];

    BoxedParser::new(move |state: &mut ParseState| {
        let start = state.peek().map(|t| t.pos());
        let params = (single.clone() | parameter_list()).parse(state)?;
        expect_arrow().parse(state)?;

        let body = if matches!(state.peek(), Some(Token::LBrace(_))) {
            FunctionBody::Block(block_body().parse(state)?)
        } else {
            FunctionBody::Expression(Box::new(expression().parse(state)?))
        };

        let position = match (start, &body) {
            (Some(start), FunctionBody::Expression(expr)) => start.merge(&expr.position()),
            (Some(start), FunctionBody::Block(_)) => start,
            (None, _) => unreachable!("a parameter list was parsed"),
        };
        trace!("parsed arrow function with {} parameter(s)", params.len());

        Ok(Expression::Function(Rc::new(FunctionLiteral {
            name: None,
            params,
            body,
            position,
        })))
    })
}

/// function_expression := "function" [ident] params block
pub fn function_expression() -> BoxedParser<Rc<FunctionLiteral>> {
    BoxedParser::new(|state: &mut ParseState| {
        let start = expect_function().parse(state)?.pos();
        let name = optional(ident()).parse(state)?;
        let params = parameter_list().parse(state)?;
        let body = block_body().parse(state)?;

        Ok(Rc::new(FunctionLiteral {
            name,
            params,
            body: FunctionBody::Block(body),
            position: start,
        }))
    })
}

/// conditional := logical_or ["?" expression ":" expression]
pub fn conditional() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| {
        let condition = logical_or().parse(state)?;

        let pos = state.position();
        if expect_question().parse(state).is_err() {
            state.restore(pos);
            return Ok(condition);
        }

        let when_true = (expression() - expect_colon()).parse(state)?;
        let when_false = expression().parse(state)?;
        let position = condition.position().merge(&when_false.position());

        Ok(Expression::Conditional(Conditional {
            condition: Box::new(condition),
            when_true: Box::new(when_true),
            when_false: Box::new(when_false),
            position,
        }))
    })
}

/// Left-associative chain of `next` joined by the operators `operator` accepts
fn binary_level(
    next: fn() -> BoxedParser<Expression>,
    operator: fn(&Token) -> Option<BinOpKind>,
) -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let mut left = next().parse(state)?;

        while let Some(op) = state.peek().and_then(operator) {
            state.advance();
            let right = next().parse(state)?;
            let position = left.position().merge(&right.position());
            left = Expression::BinaryOp(BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                position,
            });
        }

        Ok(left)
    })
}

pub fn logical_or() -> BoxedParser<Expression> {
    binary_level(logical_and, |t| match t {
        Token::LogicalOr(_) => Some(BinOpKind::Or),
        _ => None,
    })
}

pub fn logical_and() -> BoxedParser<Expression> {
    binary_level(equality, |t| match t {
        Token::LogicalAnd(_) => Some(BinOpKind::And),
        _ => None,
    })
}

pub fn equality() -> BoxedParser<Expression> {
    binary_level(comparison, |t| match t {
        Token::TripleEquals(_) => Some(BinOpKind::StrictEq),
        Token::NotDoubleEquals(_) => Some(BinOpKind::StrictNotEq),
        Token::DoubleEquals(_) => Some(BinOpKind::Eq),
        Token::NotEquals(_) => Some(BinOpKind::NotEq),
        _ => None,
    })
}

pub fn comparison() -> BoxedParser<Expression> {
    binary_level(additive, |t| match t {
        Token::LessThan(_) => Some(BinOpKind::Lt),
        Token::GreaterThan(_) => Some(BinOpKind::Gt),
        Token::LessEquals(_) => Some(BinOpKind::LtEq),
        Token::GreaterEquals(_) => Some(BinOpKind::GtEq),
        _ => None,
    })
}

pub fn additive() -> BoxedParser<Expression> {
    binary_level(multiplicative, |t| match t {
        Token::Plus(_) => Some(BinOpKind::Add),
        Token::Minus(_) => Some(BinOpKind::Sub),
        _ => None,
    })
}

pub fn multiplicative() -> BoxedParser<Expression> {
    binary_level(unary, |t| match t {
        Token::Star(_) => Some(BinOpKind::Mul),
        Token::Slash(_) => Some(BinOpKind::Div),
        Token::Percent(_) => Some(BinOpKind::Rem),
        _ => None,
    })
}

/// unary := ("-" | "!") unary | postfix
pub fn unary() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| {
        let op = match state.peek() {
            Some(Token::Minus(_)) => UnaryOpKind::Neg,
            Some(Token::Bang(_)) => UnaryOpKind::Not,
            _ => return postfix().parse(state),
        };
        let start = state.advance().map(|t| t.pos());
        let operand = unary().parse(state)?;
        let position = match start {
            Some(start) => start.merge(&operand.position()),
            None => operand.position(),
        };

        Ok(Expression::UnaryOp(UnaryOp {
            op,
            operand: Box::new(operand),
            position,
        }))
    })
}

/// call_args := "(" [expression ("," expression)*] ")"
fn call_args() -> BoxedParser<Vec<Expression>> {
    expect_lparen() * separated(expression(), expect_comma()) - expect_rparen()
}

/// postfix := primary ("(" call_args ")" | "." ident)*
pub fn postfix() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| {
        let mut expr = primary().parse(state)?;

        loop {
            match state.peek() {
                Some(Token::LParen(_)) => {
                    let args = call_args().parse(state)?;
                    let position = expr.position();
                    expr = Expression::Call(Call {
                        callee: Box::new(expr),
                        args,
                        position,
                    });
                }
                Some(Token::Dot(_)) => {
                    state.advance();
                    let property = ident().parse(state)?;
                    let position = expr.position().merge(&property.position);
                    expr = Expression::Member(Member {
                        object: Box::new(expr),
                        property,
                        position,
                    });
                }
                _ => break,
            }
        }

        Ok(expr)
    })
}

/// primary := function_expression | number | string | keyword_literal | ident | "(" expression ")"
pub fn primary() -> BoxedParser<Expression> {
    let function = function_expression() >> Expression::Function;
    let num = number() >> Expression::Number;
    let string = string_literal() >> Expression::String;
    let name = ident() >> Expression::Ident;

    BoxedParser::new(move |state: &mut ParseState| {
        if matches!(state.peek(), Some(Token::LParen(_))) {
            return (expect_lparen() * expression() - expect_rparen()).parse(state);
        }

        (function.clone() | num.clone() | string.clone() | keyword_literal() | name.clone())
            .label("expression")
            .parse(state)
    })
}
