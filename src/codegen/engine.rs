//! The shared generator
//!
//! Generation runs in two passes. The first walks the whole program to learn
//! which scalars, data structures and operations it uses; the second emits
//! statements one by one through a [`Dialect`].

use std::collections::{BTreeMap, HashSet};

use crate::errors::BridgeResult;
use crate::parser::{Arg, CreateExtra, DsKind, DsOp, Expr, Literal, Program, Stmt};

use super::CodeGenerator;
use super::dialect::{Declarations, Dialect};

/// What a program uses, gathered before any code is emitted
#[derive(Debug, Clone, Default)]
pub struct Collection {
    /// Scalar variables in first-seen order
    pub scalars: Vec<Scalar>,
    /// Kind of every created structure; the first creation wins
    pub ds_types: BTreeMap<String, DsKind>,
    /// Kinds in first-use order, including kinds assumed by operations on
    /// names never created
    pub kinds: Vec<DsKind>,
    /// Each operation with the kind it applies to
    pub ops: Vec<(DsKind, DsOp)>,
    /// Struct shapes in creation order
    pub structs: Vec<StructShape>,
}

/// A scalar variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar {
    pub name: String,
    /// First introduced inside a block or by a loop header
    pub hoisted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructShape {
    pub name: String,
    pub fields: Vec<String>,
}

impl Collection {
    pub fn collect(program: &Program) -> Self {
        let mut walker = Walker::default();
        walker.block(&program.body, 0);
        walker.finish()
    }

    pub fn uses(&self, kind: DsKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn uses_any(&self, kinds: &[DsKind]) -> bool {
        kinds.iter().any(|kind| self.uses(*kind))
    }

    pub fn uses_op(&self, kind: DsKind, op: DsOp) -> bool {
        self.ops.contains(&(kind, op))
    }

    /// Kind of the structure an operation targets
    pub fn kind_of(&self, args: &[Arg], op: DsOp) -> DsKind {
        target(args)
            .and_then(|name| self.ds_types.get(name).copied())
            .unwrap_or_else(|| op.default_kind())
    }
}

fn target(args: &[Arg]) -> Option<&str> {
    args.first().and_then(Arg::as_word)
}

#[derive(Default)]
struct Walker {
    scalars: Vec<Scalar>,
    seen: HashSet<String>,
    ds_types: BTreeMap<String, DsKind>,
    created: Vec<DsKind>,
    uses: Vec<(Option<String>, DsOp)>,
    structs: Vec<StructShape>,
}

impl Walker {
    fn finish(self) -> Collection {
        let ds_types = self.ds_types;
        let scalars = self
            .scalars
            .into_iter()
            .filter(|s| !ds_types.contains_key(&s.name))
            .collect();

        let mut kinds = self.created;
        let mut ops = Vec::new();
        for (name, op) in self.uses {
            let kind = name
                .and_then(|name| ds_types.get(&name).copied())
                .unwrap_or_else(|| op.default_kind());
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
            if !ops.contains(&(kind, op)) {
                ops.push((kind, op));
            }
        }

        Collection {
            scalars,
            ds_types,
            kinds,
            ops,
            structs: self.structs,
        }
    }

    fn scalar(&mut self, name: &str, hoisted: bool) {
        if self.seen.insert(name.to_string()) {
            self.scalars.push(Scalar {
                name: name.to_string(),
                hoisted,
            });
        }
    }

    fn define(&mut self, name: &str, kind: DsKind) {
        self.ds_types.entry(name.to_string()).or_insert(kind);
        if !self.created.contains(&kind) {
            self.created.push(kind);
        }
    }

    fn block(&mut self, stmts: &[Stmt], depth: usize) {
        for stmt in stmts {
            self.stmt(stmt, depth);
        }
    }

    fn stmt(&mut self, stmt: &Stmt, depth: usize) {
        match stmt {
            Stmt::Input { variable, .. } => self.scalar(variable, depth > 0),
            Stmt::Assign {
                variable, value, ..
            } => {
                self.scalar(variable, depth > 0);
                self.expr(value);
            }
            Stmt::Print { value, .. } => self.expr(value),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                self.expr(condition);
                self.block(then_branch, depth + 1);
                if let Some(else_branch) = else_branch {
                    self.block(else_branch, depth + 1);
                }
            }
            Stmt::While {
                condition, body, ..
            } => {
                self.expr(condition);
                self.block(body, depth + 1);
            }
            Stmt::For {
                variable,
                start,
                end,
                body,
                ..
            } => {
                // Loop variables stay readable after the loop
                self.scalar(variable, true);
                self.expr(start);
                self.expr(end);
                self.block(body, depth + 1);
            }
            Stmt::ArrayCreate { name, size, .. } => {
                self.define(name, DsKind::Array);
                self.expr(size);
            }
            Stmt::ArraySet { index, value, .. } => {
                self.expr(index);
                self.expr(value);
            }
            Stmt::Create {
                kind, name, extra, ..
            } => {
                self.define(name, *kind);
                if let CreateExtra::Struct { fields } = extra
                    && !self.structs.iter().any(|s| &s.name == name)
                {
                    self.structs.push(StructShape {
                        name: name.clone(),
                        fields: fields.clone(),
                    });
                }
            }
            Stmt::Operation { op, args, .. } => self.operation(*op, args),
        }
    }

    fn operation(&mut self, op: DsOp, args: &[Arg]) {
        self.uses.push((target(args).map(str::to_string), op));
        for arg in args {
            if let Arg::Expr(expr) = arg {
                self.expr(expr);
            }
        }
    }

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(_) | Expr::Identifier(_) => {}
            Expr::ArrayAccess { index, .. } => self.expr(index),
            Expr::Binary { left, right, .. } => {
                self.expr(left);
                self.expr(right);
            }
            Expr::Unary { operand, .. } => self.expr(operand),
            Expr::Query { op, args } => self.operation(op.as_op(), args),
        }
    }
}

/// Code generator for any [`Dialect`]
pub struct Generator<D: Dialect> {
    dialect: D,
    /// Current indentation level
    indent: usize,
    /// Output buffer
    output: String,
    /// Names that already carry a declaration
    declared: HashSet<String>,
    program: Collection,
}

impl<D: Dialect> Generator<D> {
    pub fn new() -> Self {
        Self {
            dialect: D::default(),
            indent: 0,
            output: String::new(),
            declared: HashSet::new(),
            program: Collection::default(),
        }
    }

    fn writeln(&mut self, s: &str) {
        if !s.is_empty() {
            self.write_indent();
            self.output.push_str(s);
        }
        self.output.push('\n');
    }

    fn write_lines(&mut self, lines: Vec<String>) {
        for line in lines {
            self.writeln(&line);
        }
    }

    /// Write lines that carry their own indentation
    fn write_raw(&mut self, lines: Vec<String>) {
        for line in lines {
            self.output.push_str(&line);
            self.output.push('\n');
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
    }

    fn indent(&mut self) {
        self.indent += 1;
    }

    fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Whether `name` still needs a declaration; marks it declared
    fn declare(&mut self, name: &str) -> bool {
        self.declared.insert(name.to_string())
    }

    fn generate_program(&mut self, program: &Program) {
        self.output.clear();
        self.declared.clear();
        self.indent = 0;
        self.program = Collection::collect(program);

        let prelude = self.dialect.prelude(&self.program);
        self.write_raw(prelude);

        self.indent = self.dialect.body_indent();
        self.generate_declarations();
        for stmt in &program.body {
            self.generate_stmt(stmt);
        }

        let epilogue = self.dialect.epilogue();
        self.write_raw(epilogue);
    }

    fn generate_declarations(&mut self) {
        let names: Vec<String> = match self.dialect.declarations() {
            Declarations::Upfront => self.program.scalars.iter().map(|s| s.name.clone()).collect(),
            Declarations::OnFirstAssignment => self
                .program
                .scalars
                .iter()
                .filter(|s| s.hoisted)
                .map(|s| s.name.clone())
                .collect(),
            Declarations::Implicit => return,
        };
        if names.is_empty() {
            return;
        }

        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let line = self.dialect.declare_scalars(&refs);
        self.writeln(&line);
        self.writeln("");
        self.declared.extend(names);
    }

    fn generate_block(&mut self, stmts: &[Stmt]) {
        self.indent();
        if stmts.is_empty()
            && let Some(filler) = self.dialect.empty_block()
        {
            self.writeln(filler);
        }
        for stmt in stmts {
            self.generate_stmt(stmt);
        }
        self.dedent();
    }

    fn close_block(&mut self) {
        if let Some(end) = self.dialect.block_end() {
            self.writeln(end);
        }
    }

    fn generate_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Input { variable, .. } => {
                let declare = self.declare(variable);
                let lines = self.dialect.input(variable, declare);
                self.write_lines(lines);
            }
            Stmt::Assign {
                variable, value, ..
            } => {
                let value = self.generate_expr(value);
                let declare = self.declare(variable);
                let line = self.dialect.assign(variable, &value, declare);
                self.writeln(&line);
            }
            Stmt::Print { value, .. } => {
                let is_text = matches!(value, Expr::Literal(Literal::Str(_)));
                let value = self.generate_expr(value);
                let line = self.dialect.print(&value, is_text);
                self.writeln(&line);
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                let condition = self.generate_expr(condition);
                let header = self.dialect.if_header(&condition);
                self.writeln(&header);
                self.generate_block(then_branch);
                if let Some(else_branch) = else_branch
                    && !else_branch.is_empty()
                {
                    let header = self.dialect.else_header();
                    self.writeln(header);
                    self.generate_block(else_branch);
                }
                self.close_block();
            }
            Stmt::While {
                condition, body, ..
            } => {
                let condition = self.generate_expr(condition);
                let header = self.dialect.while_header(&condition);
                self.writeln(&header);
                self.generate_block(body);
                self.close_block();
            }
            Stmt::For {
                variable,
                start,
                end,
                body,
                ..
            } => {
                let start = self.generate_expr(start);
                let end = self.generate_expr(end);
                let declare = self.declare(variable);
                let header = self.dialect.for_header(variable, &start, &end, declare);
                self.writeln(&header);
                self.generate_block(body);
                self.close_block();
            }
            Stmt::ArrayCreate { name, size, .. } => {
                let size = self.generate_expr(size);
                let declare = self.declare(name);
                let lines = self.dialect.array_create(name, &size, declare);
                self.write_lines(lines);
            }
            Stmt::ArraySet {
                array,
                index,
                value,
                ..
            } => {
                let index = self.generate_expr(index);
                let value = self.generate_expr(value);
                let line = self.dialect.array_set(array, &index, &value);
                self.writeln(&line);
            }
            Stmt::Create {
                kind, name, extra, ..
            } => {
                let declare = self.declare(name);
                let lines = self.dialect.create(*kind, name, extra, declare);
                self.write_lines(lines);
            }
            Stmt::Operation { op, args, .. } => self.generate_operation(*op, args),
        }
    }

    fn generate_operation(&mut self, op: DsOp, args: &[Arg]) {
        let kind = self.program.kind_of(args, op);
        let rendered = self.generate_args(args);
        match op.as_query() {
            // A query used as a statement prints its value
            Some(query) => {
                let value = self.dialect.query(kind, query, &rendered);
                let line = self.dialect.print_query(query, &value);
                self.writeln(&line);
            }
            None => {
                let lines = self.dialect.operation(kind, op, &rendered);
                self.write_lines(lines);
            }
        }
    }

    fn generate_args(&self, args: &[Arg]) -> Vec<String> {
        args.iter()
            .map(|arg| match arg {
                Arg::Word(word) => word.clone(),
                Arg::Text(text) => self.dialect.string_literal(text),
                Arg::Expr(expr) => self.generate_expr(expr),
            })
            .collect()
    }

    fn generate_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Literal(Literal::Number(n)) => format!("{}", n),
            Expr::Literal(Literal::Str(s)) => self.dialect.string_literal(s),
            Expr::Identifier(name) => name.clone(),
            Expr::ArrayAccess { name, index } => {
                format!("{}[{}]", name, self.generate_expr(index))
            }
            Expr::Binary { op, left, right } => format!(
                "({} {} {})",
                self.generate_expr(left),
                self.dialect.binary_op(*op),
                self.generate_expr(right)
            ),
            Expr::Unary { op, operand } => {
                format!("({}{})", op.as_str(), self.generate_expr(operand))
            }
            Expr::Query { op, args } => {
                let kind = self.program.kind_of(args, op.as_op());
                let rendered = self.generate_args(args);
                self.dialect.query(kind, *op, &rendered)
            }
        }
    }
}

impl<D: Dialect> Default for Generator<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dialect> CodeGenerator for Generator<D> {
    fn generate(&mut self, program: &Program) -> BridgeResult<String> {
        self.generate_program(program);
        Ok(std::mem::take(&mut self.output))
    }

    fn file_extension(&self) -> &'static str {
        self.dialect.file_extension()
    }

    fn language_name(&self) -> &'static str {
        self.dialect.language_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn collect(source: &str) -> Collection {
        let output = Parser::new(Lexer::new(source).tokenize()).parse();
        assert!(output.errors.is_empty(), "parse errors: {:?}", output.errors);
        Collection::collect(&output.program.expect("program"))
    }

    fn names(collection: &Collection) -> Vec<(&str, bool)> {
        collection
            .scalars
            .iter()
            .map(|s| (s.name.as_str(), s.hoisted))
            .collect()
    }

    #[test]
    fn test_scalars_in_first_seen_order() {
        let c = collect("START\nINPUT b\nSET a = b\nINPUT b\nIF a > 1 THEN\nSET c = 2\nEND IF\nEND");
        assert_eq!(names(&c), vec![("b", false), ("a", false), ("c", true)]);
    }

    #[test]
    fn test_loop_variables_are_hoisted() {
        let c = collect("START\nFOR i = 1 TO 3\nPRINT i\nEND FOR\nEND");
        assert_eq!(names(&c), vec![("i", true)]);
    }

    #[test]
    fn test_structures_are_not_scalars() {
        let c = collect("START\nSET s = 1\nSTACK s\nARRAY a[3]\nEND");
        assert!(c.scalars.is_empty());
        assert_eq!(c.ds_types.get("s"), Some(&DsKind::Stack));
        assert_eq!(c.ds_types.get("a"), Some(&DsKind::Array));
        assert_eq!(c.kinds, vec![DsKind::Stack, DsKind::Array]);
    }

    #[test]
    fn test_operations_resolve_their_kind() {
        let c = collect("START\nDEQUE d\nPUSH d 1\nPRINT SIZE d\nPUSH s 2\nEND");
        assert!(c.uses_op(DsKind::Deque, DsOp::StackPush));
        assert!(c.uses_op(DsKind::Deque, DsOp::Size));
        // `s` was never created, so PUSH assumes a stack
        assert!(c.uses_op(DsKind::Stack, DsOp::StackPush));
        assert_eq!(c.kinds, vec![DsKind::Deque, DsKind::Stack]);
    }

    #[test]
    fn test_struct_shapes_are_kept_once() {
        let c = collect("START\nSTRUCT point x y\nSTRUCT point z\nEND");
        assert_eq!(
            c.structs,
            vec![StructShape {
                name: "point".to_string(),
                fields: vec!["x".to_string(), "y".to_string()],
            }]
        );
    }
}
