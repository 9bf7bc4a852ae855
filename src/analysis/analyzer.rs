//! Declaration-before-use checking
//!
//! Walks the program in source order, declaring names as statements
//! introduce them and reporting reads of names not yet declared.

use crate::errors::BridgeError;
use crate::parser::{DsKind, Expr, Program, Stmt};

use super::scope::{SymbolKind, SymbolTable};

/// Output of semantic analysis
#[derive(Debug)]
pub struct Analysis {
    pub symbol_table: SymbolTable,
    pub errors: Vec<BridgeError>,
}

impl Analysis {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Semantic analyzer
pub struct SemanticAnalyzer {
    symbols: SymbolTable,
    /// Collected errors
    errors: Vec<BridgeError>,
    /// Line of the statement being checked
    line: usize,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::new(),
            errors: Vec::new(),
            line: 0,
        }
    }

    /// Analyze the program
    pub fn analyze(mut self, program: &Program) -> Analysis {
        self.check_block(&program.body);
        Analysis {
            symbol_table: self.symbols,
            errors: self.errors,
        }
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(BridgeError::semantic(message, self.line));
    }

    fn check_block(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.check_stmt(stmt);
        }
    }

    fn check_stmt(&mut self, stmt: &Stmt) {
        self.line = stmt.line();

        match stmt {
            Stmt::Input { variable, line } => {
                self.symbols.declare(variable, SymbolKind::Number, *line);
            }
            Stmt::Assign {
                variable,
                value,
                line,
            } => {
                // `SET x = x + 1` on a fresh name is accepted
                self.symbols.declare(variable, SymbolKind::Any, *line);
                self.check_expr(value);
            }
            Stmt::Print { value, .. } => {
                self.check_expr(value);
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                self.check_expr(condition);
                self.check_block(then_branch);
                if let Some(else_branch) = else_branch {
                    self.check_block(else_branch);
                }
            }
            Stmt::While {
                condition, body, ..
            } => {
                self.check_expr(condition);
                self.check_block(body);
            }
            Stmt::For {
                variable,
                start,
                end,
                body,
                line,
            } => {
                self.symbols.declare(variable, SymbolKind::Number, *line);
                self.check_expr(start);
                self.check_expr(end);
                self.check_block(body);
            }
            Stmt::ArrayCreate { name, size, line } => {
                self.check_expr(size);
                self.symbols
                    .declare(name, SymbolKind::Structure(DsKind::Array), *line);
            }
            Stmt::ArraySet { index, value, .. } => {
                self.check_expr(index);
                self.check_expr(value);
            }
            Stmt::Create {
                kind, name, line, ..
            } => {
                self.symbols.declare(name, SymbolKind::Structure(*kind), *line);
            }
            Stmt::Operation { .. } => {
                // Operands of data-structure operations are not checked
            }
        }
    }

    fn check_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Identifier(name) => {
                if !self.symbols.contains(name) {
                    self.error(format!("Variable '{}' used before declaration", name));
                }
            }
            Expr::ArrayAccess { name, index } => {
                if !self.symbols.contains(name) {
                    self.error(format!("Array '{}' used before declaration", name));
                }
                self.check_expr(index);
            }
            Expr::Binary { left, right, .. } => {
                self.check_expr(left);
                self.check_expr(right);
            }
            Expr::Unary { operand, .. } => {
                self.check_expr(operand);
            }
            Expr::Literal(_) | Expr::Query { .. } => {}
        }
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
