//! Token definitions for Logic Bridge
//!
//! Defines all token types produced by the lexer.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// 1-based source line of this token
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize) -> Self {
        Self { kind, line }
    }

    /// The token's text as it appeared in the canonical source
    pub fn value(&self) -> String {
        match &self.kind {
            TokenKind::Keyword(kw) => kw.as_str().to_string(),
            TokenKind::Identifier(s) | TokenKind::Number(s) | TokenKind::String(s) => s.clone(),
            TokenKind::Operator(op) => op.as_str().to_string(),
        }
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Token", 3)?;
        state.serialize_field("type", self.kind.category())?;
        state.serialize_field("value", &self.value())?;
        state.serialize_field("line", &self.line)?;
        state.end()
    }
}

/// Keywords of the canonical syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Keyword {
    // Program structure
    Start,
    End,

    // I/O and assignment
    Input,
    Print,
    Set,

    // Control flow
    If,
    Then,
    Else,
    EndIf,
    While,
    Do,
    EndWhile,
    For,
    To,
    EndFor,

    // Array
    Array,

    // Stack
    Stack,
    Push,
    Pop,
    Top,

    // Queue
    Queue,
    Enqueue,
    Dequeue,
    Front,

    // Map
    Map,
    MapInsert,
    MapGet,
    MapRemove,

    // Set
    SetDs,
    SetAdd,
    SetRemove,
    Contains,

    // Vector
    Vector,
    VectorPush,
    VectorPop,

    // Linked list
    LinkedList,
    LlPushFront,
    LlPushBack,
    LlPopFront,
    LlPopBack,

    // Tree
    Tree,
    TreeInsert,

    // Graph
    Graph,
    GraphAddEdge,

    // Common queries
    Size,
    Empty,

    // Pair
    Pair,
    PairFirst,
    PairSecond,

    // Priority queue
    PriorityQueue,

    // Deque
    Deque,
    DequePushFront,
    DequePushBack,
    DequePopFront,
    DequePopBack,

    // Struct
    Struct,
}

impl Keyword {
    /// Every keyword, in declaration order
    pub const ALL: [Keyword; 56] = [
        Keyword::Start,
        Keyword::End,
        Keyword::Input,
        Keyword::Print,
        Keyword::Set,
        Keyword::If,
        Keyword::Then,
        Keyword::Else,
        Keyword::EndIf,
        Keyword::While,
        Keyword::Do,
        Keyword::EndWhile,
        Keyword::For,
        Keyword::To,
        Keyword::EndFor,
        Keyword::Array,
        Keyword::Stack,
        Keyword::Push,
        Keyword::Pop,
        Keyword::Top,
        Keyword::Queue,
        Keyword::Enqueue,
        Keyword::Dequeue,
        Keyword::Front,
        Keyword::Map,
        Keyword::MapInsert,
        Keyword::MapGet,
        Keyword::MapRemove,
        Keyword::SetDs,
        Keyword::SetAdd,
        Keyword::SetRemove,
        Keyword::Contains,
        Keyword::Vector,
        Keyword::VectorPush,
        Keyword::VectorPop,
        Keyword::LinkedList,
        Keyword::LlPushFront,
        Keyword::LlPushBack,
        Keyword::LlPopFront,
        Keyword::LlPopBack,
        Keyword::Tree,
        Keyword::TreeInsert,
        Keyword::Graph,
        Keyword::GraphAddEdge,
        Keyword::Size,
        Keyword::Empty,
        Keyword::Pair,
        Keyword::PairFirst,
        Keyword::PairSecond,
        Keyword::PriorityQueue,
        Keyword::Deque,
        Keyword::DequePushFront,
        Keyword::DequePushBack,
        Keyword::DequePopFront,
        Keyword::DequePopBack,
        Keyword::Struct,
    ];

    /// Try to parse a canonical spelling as a keyword
    pub fn parse(s: &str) -> Option<Keyword> {
        Keyword::ALL.iter().copied().find(|kw| kw.as_str() == s)
    }

    /// Canonical uppercase spelling
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Start => "START",
            Keyword::End => "END",
            Keyword::Input => "INPUT",
            Keyword::Print => "PRINT",
            Keyword::Set => "SET",
            Keyword::If => "IF",
            Keyword::Then => "THEN",
            Keyword::Else => "ELSE",
            Keyword::EndIf => "END IF",
            Keyword::While => "WHILE",
            Keyword::Do => "DO",
            Keyword::EndWhile => "END WHILE",
            Keyword::For => "FOR",
            Keyword::To => "TO",
            Keyword::EndFor => "END FOR",
            Keyword::Array => "ARRAY",
            Keyword::Stack => "STACK",
            Keyword::Push => "PUSH",
            Keyword::Pop => "POP",
            Keyword::Top => "TOP",
            Keyword::Queue => "QUEUE",
            Keyword::Enqueue => "ENQUEUE",
            Keyword::Dequeue => "DEQUEUE",
            Keyword::Front => "FRONT",
            Keyword::Map => "MAP",
            Keyword::MapInsert => "MAP_INSERT",
            Keyword::MapGet => "MAP_GET",
            Keyword::MapRemove => "MAP_REMOVE",
            Keyword::SetDs => "SET_DS",
            Keyword::SetAdd => "SET_ADD",
            Keyword::SetRemove => "SET_REMOVE",
            Keyword::Contains => "CONTAINS",
            Keyword::Vector => "VECTOR",
            Keyword::VectorPush => "VECTOR_PUSH",
            Keyword::VectorPop => "VECTOR_POP",
            Keyword::LinkedList => "LINKED_LIST",
            Keyword::LlPushFront => "LL_PUSH_FRONT",
            Keyword::LlPushBack => "LL_PUSH_BACK",
            Keyword::LlPopFront => "LL_POP_FRONT",
            Keyword::LlPopBack => "LL_POP_BACK",
            Keyword::Tree => "TREE",
            Keyword::TreeInsert => "TREE_INSERT",
            Keyword::Graph => "GRAPH",
            Keyword::GraphAddEdge => "GRAPH_ADD_EDGE",
            Keyword::Size => "SIZE",
            Keyword::Empty => "EMPTY",
            Keyword::Pair => "PAIR",
            Keyword::PairFirst => "PAIR_FIRST",
            Keyword::PairSecond => "PAIR_SECOND",
            Keyword::PriorityQueue => "PRIORITY_QUEUE",
            Keyword::Deque => "DEQUE",
            Keyword::DequePushFront => "DEQUE_PUSH_FRONT",
            Keyword::DequePushBack => "DEQUE_PUSH_BACK",
            Keyword::DequePopFront => "DEQUE_POP_FRONT",
            Keyword::DequePopBack => "DEQUE_POP_BACK",
            Keyword::Struct => "STRUCT",
        }
    }

    /// Keywords error recovery stops at: anything that can begin a statement,
    /// plus the program terminator.
    pub fn starts_statement(self) -> bool {
        !matches!(
            self,
            Keyword::Start
                | Keyword::Then
                | Keyword::Else
                | Keyword::EndIf
                | Keyword::Do
                | Keyword::EndWhile
                | Keyword::To
                | Keyword::EndFor
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operators and punctuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `==`
    EqEq,
    /// `!=`
    BangEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `=`
    Eq,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Percent => "%",
            Operator::EqEq => "==",
            Operator::BangEq => "!=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::LtEq => "<=",
            Operator::GtEq => ">=",
            Operator::Eq => "=",
            Operator::LParen => "(",
            Operator::RParen => ")",
            Operator::Comma => ",",
            Operator::LBracket => "[",
            Operator::RBracket => "]",
        }
    }

    /// Two-character operators, tried before single characters
    pub fn two_char(s: &str) -> Option<Operator> {
        match s {
            "==" => Some(Operator::EqEq),
            "!=" => Some(Operator::BangEq),
            "<=" => Some(Operator::LtEq),
            ">=" => Some(Operator::GtEq),
            _ => None,
        }
    }

    pub fn single_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Star),
            '/' => Some(Operator::Slash),
            '%' => Some(Operator::Percent),
            '<' => Some(Operator::Lt),
            '>' => Some(Operator::Gt),
            '=' => Some(Operator::Eq),
            '(' => Some(Operator::LParen),
            ')' => Some(Operator::RParen),
            ',' => Some(Operator::Comma),
            '[' => Some(Operator::LBracket),
            ']' => Some(Operator::RBracket),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of a token
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Keyword
    Keyword(Keyword),
    /// Identifier
    Identifier(String),
    /// Numeric literal, kept as written
    Number(String),
    /// String literal contents, without quotes
    String(String),
    /// Operator or punctuation
    Operator(Operator),
}

impl TokenKind {
    /// The category name clients see in the token dump
    pub fn category(&self) -> &'static str {
        match self {
            TokenKind::Keyword(_) => "KEYWORD",
            TokenKind::Identifier(_) => "IDENTIFIER",
            TokenKind::Number(_) => "NUMBER",
            TokenKind::String(_) => "STRING",
            TokenKind::Operator(_) => "OPERATOR",
        }
    }

    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    pub fn is_operator(&self, op: Operator) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == op)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(kw) => write!(f, "{}", kw),
            TokenKind::Identifier(s) | TokenKind::Number(s) => write!(f, "{}", s),
            TokenKind::String(s) => write!(f, "\"{}\"", s),
            TokenKind::Operator(op) => write!(f, "{}", op),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_spellings_round_trip() {
        for kw in Keyword::ALL {
            assert_eq!(Keyword::parse(kw.as_str()), Some(kw));
        }
        assert_eq!(Keyword::parse("start"), None);
    }

    #[test]
    fn test_token_serializes_like_the_wire_format() {
        let token = Token::new(TokenKind::Keyword(Keyword::EndIf), 7);
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "KEYWORD", "value": "END IF", "line": 7})
        );
    }
}
