//! Hand-written line scanner for Logic Bridge
//!
//! Converts canonical-keyword text into a flat stream of tokens. Tokens never
//! span lines; unknown characters are dropped without a diagnostic.

use super::keywords::KeywordTable;
use super::token::{Operator, Token, TokenKind};

/// The lexer for canonical Logic Bridge source
pub struct Lexer<'src> {
    /// The source code being lexed
    source: &'src str,
    /// Keyword spellings to recognize
    keywords: KeywordTable,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer using the canonical keyword set
    pub fn new(source: &'src str) -> Self {
        Self::with_keywords(source, KeywordTable::canonical())
    }

    /// Create a lexer with an alternate keyword table
    pub fn with_keywords(source: &'src str, keywords: KeywordTable) -> Self {
        Self { source, keywords }
    }

    /// Collect all tokens into a vector
    pub fn tokenize(self) -> Vec<Token> {
        let mut tokens = Vec::new();

        for (index, raw) in self.source.split('\n').enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            LineScanner::new(line, index + 1, &self.keywords).scan_into(&mut tokens);
        }

        tokens
    }
}

/// Scans a single trimmed line
struct LineScanner<'a> {
    text: &'a str,
    /// Current byte position in `text`
    pos: usize,
    line: usize,
    keywords: &'a KeywordTable,
}

impl<'a> LineScanner<'a> {
    fn new(text: &'a str, line: usize, keywords: &'a KeywordTable) -> Self {
        Self {
            text,
            pos: 0,
            line,
            keywords,
        }
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Advance to the next character and return it
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.line)
    }

    /// Consume characters while `pred` holds and return them
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
        &self.text[start..self.pos]
    }

    fn scan_into(mut self, tokens: &mut Vec<Token>) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
                continue;
            }
            if let Some(token) = self.next_token(c) {
                tokens.push(token);
            }
        }
    }

    /// Scan the token starting at `c`; `None` means the character was dropped
    fn next_token(&mut self, c: char) -> Option<Token> {
        // Keywords, longest first
        if let Some((kw, len)) = self.keywords.match_prefix(self.rest()) {
            self.pos += len;
            return Some(self.make_token(TokenKind::Keyword(kw)));
        }

        // Operators: two-character forms first
        if let Some(op) = self.rest().get(..2).and_then(Operator::two_char) {
            self.pos += 2;
            return Some(self.make_token(TokenKind::Operator(op)));
        }
        if let Some(op) = Operator::single_char(c) {
            self.advance();
            return Some(self.make_token(TokenKind::Operator(op)));
        }

        // Numbers: digits with embedded dots, no sign or exponent
        if c.is_ascii_digit() {
            let text = self.take_while(|c| c.is_ascii_digit() || c == '.');
            return Some(self.make_token(TokenKind::Number(text.to_string())));
        }

        // Strings: no escapes, an unterminated string runs to end of line
        if c == '"' || c == '\'' {
            self.advance();
            let value = self.take_while(|ch| ch != c).to_string();
            self.advance();
            return Some(self.make_token(TokenKind::String(value)));
        }

        // Identifiers
        if c.is_ascii_alphabetic() || c == '_' {
            let text = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
            return Some(self.make_token(TokenKind::Identifier(text.to_string())));
        }

        self.advance();
        None
    }
}
