//! Semantic analysis for Logic Bridge
//!
//! A single pass that builds the symbol table and checks that names are
//! declared before they are read.

mod analyzer;
mod scope;

pub use analyzer::{Analysis, SemanticAnalyzer};
pub use scope::{Symbol, SymbolKind, SymbolTable};

use crate::parser::Program;

/// Run semantic analysis on a parsed program
pub fn analyze(program: &Program) -> Analysis {
    SemanticAnalyzer::new().analyze(program)
}
