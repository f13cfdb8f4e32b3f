use std::cmp::Ordering;

use log::trace;

use crate::ast::expression::{
    BinOpKind, BinaryOp, Call, Conditional, Expression, Member, UnaryOp, UnaryOpKind,
};
use crate::ast::statement::{If, Return, Statement, VariableStatement};

use super::Interpreter;
use super::error::RuntimeError;
use super::value::{Builtin, Closure, RValue};

pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished
#[derive(Debug, Clone)]
pub enum Completion {
    Normal(RValue),
    Return(RValue),
}

impl Expression {
    pub fn eval(&self, interpreter: &mut Interpreter<'_>) -> EvalResult<RValue> {
        match self {
            Expression::Ident(ident) => {
                interpreter
                    .scope
                    .resolve(&ident.value)
                    .ok_or_else(|| RuntimeError::UndefinedIdentifier {
                        name: ident.value.clone(),
                        span: ident.position.clone(),
                    })
            }
            Expression::Number(number) => Ok(RValue::Number(number.value)),
            Expression::String(string) => Ok(RValue::String(string.value.clone())),
            Expression::Boolean(boolean) => Ok(RValue::Bool(boolean.value)),
            Expression::Null(_) => Ok(RValue::Null),
            Expression::Undefined(_) => Ok(RValue::Undefined),
            Expression::Function(function) => Ok(RValue::Function(Closure {
                function: function.clone(),
                env: interpreter.scope.capture(),
            })),
            Expression::Call(Call {
                callee,
                args,
                position,
            }) => {
                let callee = callee.eval(interpreter)?;
                let args = args
                    .iter()
                    .map(|arg| arg.eval(interpreter))
                    .collect::<EvalResult<Vec<_>>>()?;
                interpreter.call(&callee, args, position)
            }
            Expression::Member(Member {
                object,
                property,
                position,
            }) => match (object.eval(interpreter)?, property.value.as_str()) {
                (RValue::Builtin(Builtin::Console), "log") => {
                    Ok(RValue::Builtin(Builtin::ConsoleLog))
                }
                (other, _) => Err(RuntimeError::UnknownProperty {
                    object: other.type_name(),
                    property: property.value.clone(),
                    span: position.clone(),
                }),
            },
            Expression::UnaryOp(UnaryOp { op, operand, .. }) => {
                let value = operand.eval(interpreter)?;
                Ok(match op {
                    UnaryOpKind::Neg => RValue::Number(-value.to_number()),
                    UnaryOpKind::Not => RValue::Bool(!value.is_truthy()),
                })
            }
            Expression::BinaryOp(binop) => binop.eval(interpreter),
            Expression::Conditional(Conditional {
                condition,
                when_true,
                when_false,
                ..
            }) => {
                if condition.eval(interpreter)?.is_truthy() {
                    when_true.eval(interpreter)
                } else {
                    when_false.eval(interpreter)
                }
            }
        }
    }
}

impl BinaryOp {
    pub fn eval(&self, interpreter: &mut Interpreter<'_>) -> EvalResult<RValue> {
        let left = self.left.eval(interpreter)?;

        // && and || return one of their operands and skip the right side when decided
        match self.op {
            BinOpKind::And if !left.is_truthy() => return Ok(left),
            BinOpKind::Or if left.is_truthy() => return Ok(left),
            BinOpKind::And | BinOpKind::Or => return self.right.eval(interpreter),
            _ => {}
        }

        let right = self.right.eval(interpreter)?;

        Ok(match self.op {
            BinOpKind::Add => match (&left, &right) {
                (RValue::String(_), _) | (_, RValue::String(_)) => {
                    RValue::String(format!("{left}{right}"))
                }
                _ => RValue::Number(left.to_number() + right.to_number()),
            },
            BinOpKind::Sub => RValue::Number(left.to_number() - right.to_number()),
            BinOpKind::Mul => RValue::Number(left.to_number() * right.to_number()),
            BinOpKind::Div => RValue::Number(left.to_number() / right.to_number()),
            BinOpKind::Rem => RValue::Number(left.to_number() % right.to_number()),
            BinOpKind::Lt => RValue::Bool(compare(&left, &right) == Some(Ordering::Less)),
            BinOpKind::Gt => RValue::Bool(compare(&left, &right) == Some(Ordering::Greater)),
            BinOpKind::LtEq => RValue::Bool(matches!(
                compare(&left, &right),
                Some(Ordering::Less | Ordering::Equal)
            )),
            BinOpKind::GtEq => RValue::Bool(matches!(
                compare(&left, &right),
                Some(Ordering::Greater | Ordering::Equal)
            )),
            BinOpKind::StrictEq => RValue::Bool(left.strict_equals(&right)),
            BinOpKind::StrictNotEq => RValue::Bool(!left.strict_equals(&right)),
            BinOpKind::Eq => RValue::Bool(left.loose_equals(&right)),
            BinOpKind::NotEq => RValue::Bool(!left.loose_equals(&right)),
            BinOpKind::And | BinOpKind::Or => unreachable!("handled above"),
        })
    }
}

/// Strings compare lexicographically, everything else numerically; `None` when NaN is involved
fn compare(left: &RValue, right: &RValue) -> Option<Ordering> {
    match (left, right) {
        (RValue::String(a), RValue::String(b)) => Some(a.cmp(b)),
        _ => left.to_number().partial_cmp(&right.to_number()),
    }
}

impl Statement {
    pub fn eval(&self, interpreter: &mut Interpreter<'_>) -> EvalResult<Completion> {
        match self {
            // hoisted when the enclosing block was entered
            Statement::FunctionDeclaration(_) => Ok(Completion::Normal(RValue::Undefined)),
            Statement::Return(Return { value, .. }) => {
                let value = match value {
                    Some(expr) => expr.eval(interpreter)?,
                    None => RValue::Undefined,
                };
                Ok(Completion::Return(value))
            }
            Statement::If(If {
                condition,
                then_branch,
                else_branch,
                ..
            }) => {
                if condition.eval(interpreter)?.is_truthy() {
                    then_branch.eval(interpreter)
                } else if let Some(else_branch) = else_branch {
                    else_branch.eval(interpreter)
                } else {
                    Ok(Completion::Normal(RValue::Undefined))
                }
            }
            Statement::Variable(VariableStatement { declarations, .. }) => {
                for declaration in declarations {
                    let value = match &declaration.initializer {
                        Some(initializer) => initializer.eval(interpreter)?,
                        None => RValue::Undefined,
                    };
                    trace!("binding {} = {value}", declaration.name.value);
                    interpreter.scope.add(&declaration.name.value, value);
                }
                Ok(Completion::Normal(RValue::Undefined))
            }
            Statement::Block(statements) => {
                interpreter.scope.enter();
                let result = eval_block(statements, interpreter);
                interpreter.scope.leave();
                result
            }
            Statement::Expression(expression) => expression.eval(interpreter).map(Completion::Normal),
        }
    }
}

/// Bind every function declared directly in `statements` in the current frame
fn hoist(statements: &[Statement], interpreter: &mut Interpreter<'_>) {
    for statement in statements {
        if let Statement::FunctionDeclaration(declaration) = statement {
            trace!("hoisting function {}", declaration.name.value);
            let closure = Closure {
                function: declaration.function.clone(),
                env: interpreter.scope.capture(),
            };
            interpreter
                .scope
                .add(&declaration.name.value, RValue::Function(closure));
        }
    }
}

/// Evaluate a block in the current frame. Stops at the first `return`;
/// otherwise completes with the value of the last statement.
pub fn eval_block(statements: &[Statement], interpreter: &mut Interpreter<'_>) -> EvalResult<Completion> {
    hoist(statements, interpreter);

    let mut last = RValue::Undefined;
    for statement in statements {
        match statement.eval(interpreter)? {
            Completion::Return(value) => return Ok(Completion::Return(value)),
            Completion::Normal(value) => last = value,
        }
    }
    Ok(Completion::Normal(last))
}
