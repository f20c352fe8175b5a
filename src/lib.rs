//! Lexical front end for f-script, a small embedded scripting language.
//!
//! [`lex`] turns one complete source string into a token sequence in two
//! stages: a character-level chunker that strips comments, isolates string
//! literals, and groups operators, then a pattern classifier that maps each
//! chunk to exactly one [`Token`]. Lexing never fails; anything the patterns
//! do not recognize comes back as [`Token::Value`] for the parser to judge.

pub mod lexer;

pub mod script;

#[cfg(feature = "web")]
pub mod web;

pub use lexer::{lex, Token, TokenKind};
