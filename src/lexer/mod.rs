//! Lexer module for Logic Bridge
//!
//! Hand-written lexer that tokenizes canonical source into a stream of tokens.

mod keywords;
mod scanner;
mod token;

pub use keywords::KeywordTable;
pub use scanner::Lexer;
pub use token::{Keyword, Operator, Token, TokenKind};
