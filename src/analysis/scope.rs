//! Symbol table for declaration tracking
//!
//! Programs have a single flat scope: a name is declared by the first
//! statement that introduces it, and later declarations leave it untouched.

use std::collections::HashMap;

use serde::Serialize;
use serde::ser::{SerializeMap, SerializeStruct, Serializer};

use crate::parser::DsKind;

/// The flat table of declared symbols, kept in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    symbols: Vec<(String, Symbol)>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` unless it already exists. Returns whether it was added.
    pub fn declare(&mut self, name: &str, kind: SymbolKind, line: usize) -> bool {
        if self.index.contains_key(name) {
            return false;
        }
        self.index.insert(name.to_string(), self.symbols.len());
        self.symbols.push((name.to_string(), Symbol::new(kind, line)));
        true
    }

    /// Look up a symbol by name
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.index.get(name).map(|&i| &self.symbols[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All symbols, in the order they were declared
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.symbols.iter().map(|(name, sym)| (name.as_str(), sym))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Serialized as a JSON object keyed by name, in declaration order
impl Serialize for SymbolTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.symbols.len()))?;
        for (name, symbol) in &self.symbols {
            map.serialize_entry(name, symbol)?;
        }
        map.end()
    }
}

/// A symbol in the symbol table
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// What the declaring statement introduced
    pub kind: SymbolKind,
    /// Line of the first declaration
    pub line: usize,
    /// Every declaration also initializes
    pub initialized: bool,
}

impl Symbol {
    pub fn new(kind: SymbolKind, line: usize) -> Self {
        Self {
            kind,
            line,
            initialized: true,
        }
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Symbol", 3)?;
        state.serialize_field("type", self.kind.tag())?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("initialized", &self.initialized)?;
        state.end()
    }
}

/// The kind of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// Read by `INPUT` or driven by a `FOR` loop
    Number,
    /// Assigned an arbitrary expression
    Any,
    /// An array or other data structure
    Structure(DsKind),
}

impl SymbolKind {
    /// The tag shown in the symbol table dump
    pub fn tag(self) -> &'static str {
        match self {
            SymbolKind::Number => "number",
            SymbolKind::Any => "any",
            SymbolKind::Structure(kind) => kind.tag(),
        }
    }
}
