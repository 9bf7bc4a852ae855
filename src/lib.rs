//! Logic Bridge - Structured-English pseudocode to multi-language transpiler
//!
//! This crate compiles a small pseudo-code language, written either in its
//! canonical keyword form or in loose English phrasing, into C, C++, Java,
//! Python or JavaScript.
//!
//! The pipeline is Preprocessor → Lexer → Parser → SemanticAnalyzer →
//! CodeGenerator; [`service::compile`] runs all of it for one request.

pub mod errors;
pub mod preprocess;
pub mod lexer;
pub mod parser;
pub mod analysis;
pub mod codegen;
pub mod service;

// Re-export commonly used types
pub use errors::{BridgeError, BridgeResult, Diagnostic};
pub use preprocess::Preprocessor;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{Program, Parser};
pub use analysis::{analyze, Analysis};
pub use codegen::{
    CodeGenerator, CGenerator, CppGenerator, JavaGenerator, JavaScriptGenerator, Language,
    PythonGenerator,
};
pub use service::{compile, CompileRequest, CompileResponse, Status};
