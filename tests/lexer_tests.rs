use notjs::lexer::{Token, strip_comments};

#[test]
fn lex_keywords() {
    let tokens = Token::lex("function return if else let const var").unwrap();
    assert_eq!(tokens.len(), 7);
    assert!(matches!(tokens[0], Token::Function(_)));
    assert!(matches!(tokens[1], Token::Return(_)));
    assert!(matches!(tokens[2], Token::If(_)));
    assert!(matches!(tokens[3], Token::Else(_)));
    assert!(matches!(tokens[4], Token::Let(_)));
    assert!(matches!(tokens[5], Token::Const(_)));
    assert!(matches!(tokens[6], Token::Var(_)));
}

#[test]
fn lex_literal_keywords() {
    let tokens = Token::lex("true false null undefined").unwrap();
    assert_eq!(tokens.len(), 4);
    assert!(matches!(tokens[0], Token::True(_)));
    assert!(matches!(tokens[1], Token::False(_)));
    assert!(matches!(tokens[2], Token::Null(_)));
    assert!(matches!(tokens[3], Token::Undefined(_)));
}

#[test]
fn lex_identifiers() {
    let tokens = Token::lex("pair getFirst _tmp").unwrap();
    assert_eq!(tokens.len(), 3);
    assert!(matches!(&tokens[0], Token::Ident(i) if i.value == "pair"));
    assert!(matches!(&tokens[1], Token::Ident(i) if i.value == "getFirst"));
    assert!(matches!(&tokens[2], Token::Ident(i) if i.value == "_tmp"));
}

#[test]
fn lex_numbers() {
    let tokens = Token::lex("42 0 1.5").unwrap();
    assert_eq!(tokens.len(), 3);
    assert!(matches!(&tokens[0], Token::Number(n) if n.value == "42"));
    assert!(matches!(&tokens[1], Token::Number(n) if n.value == "0"));
    assert!(matches!(&tokens[2], Token::Number(n) if n.value == "1.5"));
}

#[test]
fn lex_numbers_with_exponent_or_leading_dot() {
    let tokens = Token::lex("1e21 2.5E-3 .5 a.b").unwrap();
    assert_eq!(tokens.len(), 6);
    assert!(matches!(&tokens[0], Token::Number(n) if n.value == "1e21"));
    assert!(matches!(&tokens[1], Token::Number(n) if n.value == "2.5E-3"));
    assert!(matches!(&tokens[2], Token::Number(n) if n.value == ".5"));
    assert!(matches!(tokens[4], Token::Dot(_)));
}

#[test]
fn lex_string_literals() {
    let tokens = Token::lex(r#""hello" 'world'"#).unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(matches!(&tokens[0], Token::StringLiteral(s) if s.value == "\"hello\""));
    assert!(matches!(&tokens[1], Token::StringLiteral(s) if s.value == "'world'"));
}

#[test]
fn lex_equality_operators() {
    let tokens = Token::lex("=== !== == != = =>").unwrap();
    assert_eq!(tokens.len(), 6);
    assert!(matches!(tokens[0], Token::TripleEquals(_)));
    assert!(matches!(tokens[1], Token::NotDoubleEquals(_)));
    assert!(matches!(tokens[2], Token::DoubleEquals(_)));
    assert!(matches!(tokens[3], Token::NotEquals(_)));
    assert!(matches!(tokens[4], Token::Assign(_)));
    assert!(matches!(tokens[5], Token::Arrow(_)));
}

#[test]
fn lex_punctuation() {
    let tokens = Token::lex("( ) { } , ; . ? :").unwrap();
    assert_eq!(tokens.len(), 9);
    assert!(matches!(tokens[0], Token::LParen(_)));
    assert!(matches!(tokens[1], Token::RParen(_)));
    assert!(matches!(tokens[2], Token::LBrace(_)));
    assert!(matches!(tokens[3], Token::RBrace(_)));
    assert!(matches!(tokens[4], Token::Comma(_)));
    assert!(matches!(tokens[5], Token::Semicolon(_)));
    assert!(matches!(tokens[6], Token::Dot(_)));
    assert!(matches!(tokens[7], Token::Question(_)));
    assert!(matches!(tokens[8], Token::Colon(_)));
}

#[test]
fn lex_member_call() {
    let tokens = Token::lex("console.log(x);").unwrap();
    assert_eq!(tokens.len(), 7);
    assert!(matches!(&tokens[0], Token::Ident(i) if i.value == "console"));
    assert!(matches!(tokens[1], Token::Dot(_)));
    assert!(matches!(&tokens[2], Token::Ident(i) if i.value == "log"));
    assert!(matches!(tokens[3], Token::LParen(_)));
}

#[test]
fn line_comments_are_stripped() {
    let source = strip_comments("// leading comment\nlet a = 1; // trailing\n");
    let tokens = Token::lex(&source).unwrap();
    assert_eq!(tokens.len(), 5);
    let has_comment = tokens
        .iter()
        .any(|t| matches!(t, Token::Ident(i) if i.value == "comment" || i.value == "trailing"));
    assert!(!has_comment, "comment tokens should be stripped");
}

#[test]
fn block_comments_are_stripped() {
    let source = strip_comments("/* a\n   multi-line comment */ null");
    let tokens = Token::lex(&source).unwrap();
    assert_eq!(tokens.len(), 1);
    assert!(matches!(tokens[0], Token::Null(_)));
}

#[test]
fn describe_names_the_token() {
    let tokens = Token::lex("inner 7 =>").unwrap();
    assert_eq!(tokens[0].describe(), "identifier 'inner'");
    assert_eq!(tokens[1].describe(), "number '7'");
    assert_eq!(tokens[2].describe(), "'=>'");
}
