//! Statement parsers

use crate::ast::statement::{
    DeclarationKind, FunctionDeclaration, If, Return, Statement, VariableDeclaration,
    VariableStatement,
};
use crate::lexer::Token;

use crate::parser::combinators::{
    BoxedParser, expect_assign, expect_comma, expect_else, expect_if, expect_lbrace,
    expect_lparen, expect_rbrace, expect_return, expect_rparen, expect_semicolon, many, optional,
    separated,
};
use crate::parser::state::{ParseError, ParseState, Parser};

use super::expression::{expression, function_expression};
use super::literal::ident;

/// block := "{" statement* "}"
pub fn block_body() -> BoxedParser<Vec<Statement>> {
    BoxedParser::new(|state: &mut ParseState| {
        (expect_lbrace() * many(statement()) - expect_rbrace()).parse(state)
    })
}

fn end_of_statement() -> BoxedParser<Option<Token>> {
    optional(expect_semicolon())
}

/// function_declaration := "function" ident params block
pub fn function_declaration() -> BoxedParser<Statement> {
    BoxedParser::new(|state: &mut ParseState| {
        let function = function_expression().parse(state)?;
        let name = function.name.clone().ok_or_else(|| {
            ParseError::new("function declaration requires a name").at(function.position.clone())
        })?;

        Ok(Statement::FunctionDeclaration(FunctionDeclaration {
            name,
            function,
        }))
    })
}

/// return_statement := "return" [expression] [";"]
pub fn return_statement() -> BoxedParser<Statement> {
    BoxedParser::new(|state: &mut ParseState| {
        let position = expect_return().parse(state)?.pos();

        let value = match state.peek() {
            None | Some(Token::Semicolon(_)) | Some(Token::RBrace(_)) => None,
            Some(_) => Some(expression().parse(state)?),
        };
        end_of_statement().parse(state)?;

        Ok(Statement::Return(Return { value, position }))
    })
}

/// if_statement := "if" "(" expression ")" statement ["else" statement]
pub fn if_statement() -> BoxedParser<Statement> {
    BoxedParser::new(|state: &mut ParseState| {
        let position = expect_if().parse(state)?.pos();
        let condition = (expect_lparen() * expression() - expect_rparen()).parse(state)?;
        let then_branch = statement().parse(state)?;
        let else_branch = optional(expect_else() * statement()).parse(state)?;

        Ok(Statement::If(If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
            position,
        }))
    })
}

/// variable_declaration := ident ["=" expression]
fn variable_declaration() -> BoxedParser<VariableDeclaration> {
    ident() + optional(expect_assign() * expression())
        >> |(name, initializer)| VariableDeclaration { name, initializer }
}

/// variable_statement := ("let" | "const" | "var") variable_declaration ("," variable_declaration)* [";"]
pub fn variable_statement() -> BoxedParser<Statement> {
    BoxedParser::new(|state: &mut ParseState| {
        let (kind, position) = match state.advance() {
            Some(Token::Let(t)) => (DeclarationKind::Let, t.position),
            Some(Token::Const(t)) => (DeclarationKind::Const, t.position),
            Some(Token::Var(t)) => (DeclarationKind::Var, t.position),
            Some(other) => {
                let err = ParseError::new("unexpected token")
                    .expected("'let', 'const' or 'var'")
                    .found(other.describe())
                    .at(other.pos());
                state.record_error(err.clone());
                return Err(err);
            }
            None => {
                return Err(ParseError::new("unexpected end of input").expected("declaration"));
            }
        };

        let declarations = separated(variable_declaration(), expect_comma()).parse(state)?;
        if declarations.is_empty() {
            let err = state.error_here("expected a variable name");
            state.record_error(err.clone());
            return Err(err);
        }
        end_of_statement().parse(state)?;

        Ok(Statement::Variable(VariableStatement {
            kind,
            declarations,
            position,
        }))
    })
}

/// expression_statement := expression [";"]
pub fn expression_statement() -> BoxedParser<Statement> {
    (expression() - end_of_statement()) >> Statement::Expression
}

/// statement := function_declaration | return_statement | if_statement
///            | variable_statement | block | ";" | expression_statement
pub fn statement() -> BoxedParser<Statement> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Function(_)) if matches!(state.peek_ahead(1), Some(Token::Ident(_))) => {
            function_declaration().parse(state)
        }
        Some(Token::Return(_)) => return_statement().parse(state),
        Some(Token::If(_)) => if_statement().parse(state),
        Some(Token::Let(_) | Token::Const(_) | Token::Var(_)) => variable_statement().parse(state),
        Some(Token::LBrace(_)) => block_body().map(Statement::Block).parse(state),
        Some(Token::Semicolon(_)) => {
            state.advance();
            Ok(Statement::Block(vec![]))
        }
        _ => expression_statement().parse(state),
    })
}

