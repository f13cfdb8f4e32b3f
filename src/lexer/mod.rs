//! Tokens of the script language
//!
//! Tokenization is done by `lachs`; comments are not part of the token set and
//! must be removed with [`strip_comments`] first.

use lachs::Span;

#[lachs::token]
pub enum Token {
    #[terminal("function")]
    Function,
    #[terminal("return")]
    Return,
    #[terminal("if")]
    If,
    #[terminal("else")]
    Else,
    #[terminal("let")]
    Let,
    #[terminal("const")]
    Const,
    #[terminal("var")]
    Var,
    #[terminal("true")]
    True,
    #[terminal("false")]
    False,
    #[terminal("null")]
    Null,
    #[terminal("undefined")]
    Undefined,
    #[literal(r#"[a-zA-Z_$][a-zA-Z0-9_$]*"#)]
    Ident,
    #[literal(r#"([0-9]+(\.[0-9]+)?|\.[0-9]+)([eE][+-]?[0-9]+)?"#)]
    Number,
    #[literal(r#""([^"\\]|\\.)*"|'([^'\\]|\\.)*'"#)]
    StringLiteral,
    #[terminal("===")]
    TripleEquals,
    #[terminal("!==")]
    NotDoubleEquals,
    #[terminal("==")]
    DoubleEquals,
    #[terminal("!=")]
    NotEquals,
    #[terminal("=>")]
    Arrow,
    #[terminal("=")]
    Assign,
    #[terminal("<=")]
    LessEquals,
    #[terminal(">=")]
    GreaterEquals,
    #[terminal("<")]
    LessThan,
    #[terminal(">")]
    GreaterThan,
    #[terminal("&&")]
    LogicalAnd,
    #[terminal("||")]
    LogicalOr,
    #[terminal("!")]
    Bang,
    #[terminal("+")]
    Plus,
    #[terminal("-")]
    Minus,
    #[terminal("*")]
    Star,
    #[terminal("/")]
    Slash,
    #[terminal("%")]
    Percent,
    #[terminal("?")]
    Question,
    #[terminal(":")]
    Colon,
    #[terminal(".")]
    Dot,
    #[terminal(",")]
    Comma,
    #[terminal(";")]
    Semicolon,
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
    #[terminal("{")]
    LBrace,
    #[terminal("}")]
    RBrace,
}

impl Token {
    pub fn pos(&self) -> Span {
        match self {
            Token::Function(inner) => inner.position.clone(),
            Token::Return(inner) => inner.position.clone(),
            Token::If(inner) => inner.position.clone(),
            Token::Else(inner) => inner.position.clone(),
            Token::Let(inner) => inner.position.clone(),
            Token::Const(inner) => inner.position.clone(),
            Token::Var(inner) => inner.position.clone(),
            Token::True(inner) => inner.position.clone(),
            Token::False(inner) => inner.position.clone(),
            Token::Null(inner) => inner.position.clone(),
            Token::Undefined(inner) => inner.position.clone(),
            Token::Ident(inner) => inner.position.clone(),
            Token::Number(inner) => inner.position.clone(),
            Token::StringLiteral(inner) => inner.position.clone(),
            Token::TripleEquals(inner) => inner.position.clone(),
            Token::NotDoubleEquals(inner) => inner.position.clone(),
            Token::DoubleEquals(inner) => inner.position.clone(),
            Token::NotEquals(inner) => inner.position.clone(),
            Token::Arrow(inner) => inner.position.clone(),
            Token::Assign(inner) => inner.position.clone(),
            Token::LessEquals(inner) => inner.position.clone(),
            Token::GreaterEquals(inner) => inner.position.clone(),
            Token::LessThan(inner) => inner.position.clone(),
            Token::GreaterThan(inner) => inner.position.clone(),
            Token::LogicalAnd(inner) => inner.position.clone(),
            Token::LogicalOr(inner) => inner.position.clone(),
            Token::Bang(inner) => inner.position.clone(),
            Token::Plus(inner) => inner.position.clone(),
            Token::Minus(inner) => inner.position.clone(),
            Token::Star(inner) => inner.position.clone(),
            Token::Slash(inner) => inner.position.clone(),
            Token::Percent(inner) => inner.position.clone(),
            Token::Question(inner) => inner.position.clone(),
            Token::Colon(inner) => inner.position.clone(),
            Token::Dot(inner) => inner.position.clone(),
            Token::Comma(inner) => inner.position.clone(),
            Token::Semicolon(inner) => inner.position.clone(),
            Token::LParen(inner) => inner.position.clone(),
            Token::RParen(inner) => inner.position.clone(),
            Token::LBrace(inner) => inner.position.clone(),
            Token::RBrace(inner) => inner.position.clone(),
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::Function(_) => "'function'".to_string(),
            Token::Return(_) => "'return'".to_string(),
            Token::If(_) => "'if'".to_string(),
            Token::Else(_) => "'else'".to_string(),
            Token::Let(_) => "'let'".to_string(),
            Token::Const(_) => "'const'".to_string(),
            Token::Var(_) => "'var'".to_string(),
            Token::True(_) => "'true'".to_string(),
            Token::False(_) => "'false'".to_string(),
            Token::Null(_) => "'null'".to_string(),
            Token::Undefined(_) => "'undefined'".to_string(),
            Token::Ident(inner) => format!("identifier '{}'", inner.value),
            Token::Number(inner) => format!("number '{}'", inner.value),
            Token::StringLiteral(inner) => format!("string {}", inner.value),
            Token::TripleEquals(_) => "'==='".to_string(),
            Token::NotDoubleEquals(_) => "'!=='".to_string(),
            Token::DoubleEquals(_) => "'=='".to_string(),
            Token::NotEquals(_) => "'!='".to_string(),
            Token::Arrow(_) => "'=>'".to_string(),
            Token::Assign(_) => "'='".to_string(),
            Token::LessEquals(_) => "'<='".to_string(),
            Token::GreaterEquals(_) => "'>='".to_string(),
            Token::LessThan(_) => "'<'".to_string(),
            Token::GreaterThan(_) => "'>'".to_string(),
            Token::LogicalAnd(_) => "'&&'".to_string(),
            Token::LogicalOr(_) => "'||'".to_string(),
            Token::Bang(_) => "'!'".to_string(),
            Token::Plus(_) => "'+'".to_string(),
            Token::Minus(_) => "'-'".to_string(),
            Token::Star(_) => "'*'".to_string(),
            Token::Slash(_) => "'/'".to_string(),
            Token::Percent(_) => "'%'".to_string(),
            Token::Question(_) => "'?'".to_string(),
            Token::Colon(_) => "':'".to_string(),
            Token::Dot(_) => "'.'".to_string(),
            Token::Comma(_) => "','".to_string(),
            Token::Semicolon(_) => "';'".to_string(),
            Token::LParen(_) => "'('".to_string(),
            Token::RParen(_) => "')'".to_string(),
            Token::LBrace(_) => "'{'".to_string(),
            Token::RBrace(_) => "'}'".to_string(),
        }
    }
}

/// Replaces `// line` and `/* block */` comments with spaces.
///
/// Newlines are kept so token positions still match the unstripped input.
/// Comment markers inside string literals are left alone.
pub fn strip_comments(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            result.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    result.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match (c, chars.peek()) {
            ('"' | '\'', _) => {
                quote = Some(c);
                result.push(c);
            }
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        result.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                result.push_str("  ");
                let mut previous = '\0';
                for skipped in chars.by_ref() {
                    result.push(if skipped == '\n' { '\n' } else { ' ' });
                    if previous == '*' && skipped == '/' {
                        break;
                    }
                    previous = skipped;
                }
            }
            _ => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::strip_comments;

    #[test]
    fn keeps_comment_markers_inside_strings() {
        let source = r#"console.log("// not a comment");"#;
        assert_eq!(strip_comments(source), source);
    }

    #[test]
    fn block_comment_keeps_line_count() {
        let stripped = strip_comments("a /* one\ntwo */ b");
        assert_eq!(stripped.lines().count(), 2);
        assert!(stripped.contains('a'));
        assert!(stripped.contains('b'));
        assert!(!stripped.contains("two"));
    }
}
