use logos::Logos;

use crate::error::{CompileError, CompileResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens in single or double quotes, unescaped.
    #[regex(r#""([^"\\]|\\[\\"'nt])*""#, unescape)]
    #[regex(r#"'([^'\\]|\\[\\"'nt])*'"#, unescape)]
    Str(String),
    /// Identifier tokens; variable or function names such as `x` or
    /// `player.health`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_.]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// A run of operator characters, such as `+` or `>=!`.
    ///
    /// Runs are split into individual operators against the operator table
    /// during compilation.
    #[regex(r"[+\-*/%<>=!&|^~?:@#$]+", |lex| lex.slice().to_string())]
    Symbols(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

/// Errors raised by the lexer itself, before positions are attached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token starts with this character.
    #[default]
    UnexpectedCharacter,
    /// A number runs directly into letters, dots or underscores.
    MalformedLiteral,
}

/// Parses a numeric literal from the current token slice.
///
/// A literal that runs straight into more identifier characters or another
/// dot (`12abc`, `1.2.3`, `1e`) is consumed whole and reported as malformed.
fn parse_number(lex: &mut logos::Lexer<Token>) -> Result<f64, LexError> {
    let trailing = lex.remainder()
                      .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.'))
                      .unwrap_or(lex.remainder().len());

    if trailing > 0 {
        lex.bump(trailing);
        return Err(LexError::MalformedLiteral);
    }

    lex.slice().parse().map_err(|_| LexError::MalformedLiteral)
}

/// Strips the quotes from a string literal and resolves its escapes.
fn unescape(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {},
        }
    }
    out
}

/// Splits source text into tokens paired with their byte offsets.
///
/// # Parameters
/// - `source`: Expression text.
///
/// # Returns
/// The tokens in source order, or the first lexical error.
///
/// # Example
/// ```
/// use condex::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("MAX(a, 2.5)").unwrap();
/// assert_eq!(tokens[0], (Token::Identifier("MAX".into()), 0));
/// assert_eq!(tokens[4], (Token::Number(2.5), 7));
/// ```
pub fn tokenize(source: &str) -> CompileResult<Vec<(Token, usize)>> {
    Token::lexer(source).spanned()
                        .map(|(token, span)| match token {
                            Ok(token) => Ok((token, span.start)),
                            Err(e) => Err(locate(e, source.get(span.clone()).unwrap_or_default(), span.start)),
                        })
                        .collect()
}

/// Attaches the offending text and its offset to a lexer error.
fn locate(error: LexError, text: &str, position: usize) -> CompileError {
    match error {
        LexError::MalformedLiteral => CompileError::MalformedLiteral { literal: text.to_owned(),
                                                                       position },
        LexError::UnexpectedCharacter => CompileError::UnexpectedCharacter { text: text.to_owned(),
                                                                             position },
    }
}
