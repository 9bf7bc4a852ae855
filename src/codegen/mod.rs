//! Code generation for Logic Bridge
//!
//! This module provides code generators for the five target languages. All
//! of them share one [`Generator`] and differ only in their [`Dialect`].

mod c;
mod cpp;
mod dialect;
mod engine;
mod java;
mod javascript;
mod python;

pub use c::CGenerator;
pub use cpp::CppGenerator;
pub use dialect::{Declarations, Dialect};
pub use engine::{Collection, Generator, Scalar, StructShape};
pub use java::JavaGenerator;
pub use javascript::JavaScriptGenerator;
pub use python::PythonGenerator;

use std::fmt;
use std::str::FromStr;

use crate::errors::{BridgeError, BridgeResult};
use crate::parser::Program;

/// Trait for code generators
pub trait CodeGenerator {
    /// Generate code from a checked program
    fn generate(&mut self, program: &Program) -> BridgeResult<String>;

    /// Get the file extension for the target language
    fn file_extension(&self) -> &'static str;

    /// Get the name of the target language
    fn language_name(&self) -> &'static str;
}

/// A supported target language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    C,
    Cpp,
    Java,
    Python,
    JavaScript,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::C,
        Language::Cpp,
        Language::Java,
        Language::Python,
        Language::JavaScript,
    ];

    /// A fresh generator for this language
    pub fn generator(self) -> Box<dyn CodeGenerator> {
        match self {
            Language::C => Box::new(CGenerator::new()),
            Language::Cpp => Box::new(CppGenerator::new()),
            Language::Java => Box::new(JavaGenerator::new()),
            Language::Python => Box::new(PythonGenerator::new()),
            Language::JavaScript => Box::new(JavaScriptGenerator::new()),
        }
    }

    /// The name clients send in requests
    pub fn as_str(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::Python => "python",
            Language::JavaScript => "javascript",
        }
    }
}

impl FromStr for Language {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Ok(Language::C),
            "cpp" | "c++" => Ok(Language::Cpp),
            "java" => Ok(Language::Java),
            "python" | "py" => Ok(Language::Python),
            "javascript" | "js" => Ok(Language::JavaScript),
            _ => Err(BridgeError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Generate `program` in `language`
pub fn generate(program: &Program, language: Language) -> BridgeResult<String> {
    language.generator().generate(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_names() {
        assert_eq!("C++".parse::<Language>().unwrap(), Language::Cpp);
        assert_eq!("js".parse::<Language>().unwrap(), Language::JavaScript);
        assert_eq!("Python".parse::<Language>().unwrap(), Language::Python);
        assert!(matches!(
            "rust".parse::<Language>(),
            Err(BridgeError::UnsupportedLanguage(name)) if name == "rust"
        ));
        for language in Language::ALL {
            assert_eq!(language.as_str().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_generator_metadata() {
        let extensions: Vec<_> = Language::ALL
            .iter()
            .map(|l| l.generator().file_extension())
            .collect();
        assert_eq!(extensions, vec!["c", "cpp", "java", "py", "js"]);
        assert_eq!(Language::Cpp.generator().language_name(), "C++");
    }

    #[test]
    fn test_empty_program_in_every_language() {
        let program = Program::default();
        for language in Language::ALL {
            let code = generate(&program, language).unwrap();
            assert!(code.starts_with("// Generated") || code.starts_with("# Generated"));
        }
    }
}
