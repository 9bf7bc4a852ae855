//! Target language descriptions
//!
//! A [`Dialect`] supplies the surface syntax of one target language. The
//! shared [`Generator`](super::Generator) walks the program and asks the
//! dialect for each line it needs.

use crate::parser::{BinaryOp, CreateExtra, DsKind, DsOp, QueryOp};

use super::engine::Collection;

/// How a target declares scalar variables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declarations {
    /// Every scalar is declared once before the first statement
    Upfront,
    /// Declared where first assigned; names first seen in nested blocks or
    /// driven by a loop are declared before the first statement
    OnFirstAssignment,
    /// No declarations at all
    Implicit,
}

/// The syntax of one target language
pub trait Dialect: Default {
    fn language_name(&self) -> &'static str;

    fn file_extension(&self) -> &'static str;

    fn declarations(&self) -> Declarations;

    /// Everything before the first statement: header comment, imports,
    /// helper definitions and the opening of the entry point
    fn prelude(&self, program: &Collection) -> Vec<String>;

    /// Lines after the last statement, already indented
    fn epilogue(&self) -> Vec<String>;

    /// Indentation level of top-level statements
    fn body_indent(&self) -> usize {
        1
    }

    /// A declaration of every name in `names`
    fn declare_scalars(&self, names: &[&str]) -> String {
        format!("int {};", names.join(", "))
    }

    // ---- statements ----

    /// Prompt for and read an integer into `variable`
    fn input(&self, variable: &str, declare: bool) -> Vec<String>;

    fn assign(&self, variable: &str, value: &str, _declare: bool) -> String {
        format!("{} = {};", variable, value)
    }

    /// Print a value; `is_text` when the value is a string literal
    fn print(&self, value: &str, is_text: bool) -> String;

    fn if_header(&self, condition: &str) -> String {
        format!("if ({}) {{", condition)
    }

    fn else_header(&self) -> &'static str {
        "} else {"
    }

    fn while_header(&self, condition: &str) -> String {
        format!("while ({}) {{", condition)
    }

    /// Header of an inclusive counting loop
    fn for_header(&self, variable: &str, start: &str, end: &str, _declare: bool) -> String {
        format!(
            "for ({v} = {}; {v} <= {}; {v}++) {{",
            start,
            end,
            v = variable
        )
    }

    /// Line closing a block, if the target has one
    fn block_end(&self) -> Option<&'static str> {
        Some("}")
    }

    /// Line standing in for an empty block, if the target needs one
    fn empty_block(&self) -> Option<&'static str> {
        None
    }

    // ---- expressions ----

    fn binary_op(&self, op: BinaryOp) -> &'static str {
        op.as_str()
    }

    fn string_literal(&self, text: &str) -> String {
        format!("\"{}\"", text)
    }

    // ---- data structures ----

    fn array_create(&self, name: &str, size: &str, declare: bool) -> Vec<String>;

    fn array_set(&self, name: &str, index: &str, value: &str) -> String {
        format!("{}[{}] = {};", name, index, value)
    }

    /// Create a data structure of `kind`
    fn create(&self, kind: DsKind, name: &str, extra: &CreateExtra, declare: bool)
    -> Vec<String>;

    /// A mutating operation on a structure of `kind`. `args[0]` is the
    /// structure's name.
    fn operation(&self, kind: DsKind, op: DsOp, args: &[String]) -> Vec<String>;

    /// A value read from a structure of `kind`
    fn query(&self, kind: DsKind, op: QueryOp, args: &[String]) -> String;

    /// Print the result of a query used as a statement
    fn print_query(&self, _op: QueryOp, value: &str) -> String {
        self.print(value, false)
    }
}

/// The `index`th rendered argument, empty when missing
pub(crate) fn arg(args: &[String], index: usize) -> &str {
    args.get(index).map(String::as_str).unwrap_or("")
}

/// Prompt shown before reading a variable
pub(crate) fn prompt(variable: &str) -> String {
    format!("Enter {}: ", variable)
}
