//! Recursive descent parser for Logic Bridge
//!
//! Parses a token stream into an AST. A failing statement is recorded and
//! skipped, so one run reports every broken line it can find.

use super::ast::*;
use crate::errors::{BridgeError, BridgeResult};
use crate::lexer::{Keyword, Operator, Token, TokenKind};

/// Result of a parse: the program (absent on a fatal error) and every error
#[derive(Debug)]
pub struct ParseOutput {
    pub program: Option<Program>,
    pub errors: Vec<BridgeError>,
}

impl ParseOutput {
    /// True when a program was produced without any error
    pub fn is_ok(&self) -> bool {
        self.program.is_some() && self.errors.is_empty()
    }
}

/// The parser for Logic Bridge token streams
pub struct Parser {
    /// Tokens from the lexer
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Position of the first token of the innermost statement being parsed
    stmt_start: usize,
    /// Errors recorded by statement-level recovery
    errors: Vec<BridgeError>,
    /// While set, tokens on any other line are invisible
    line_bound: Option<usize>,
}

impl Parser {
    /// Create a new parser over lexed tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            stmt_start: 0,
            errors: Vec::new(),
            line_bound: None,
        }
    }

    /// Parse the token stream into a program
    pub fn parse(mut self) -> ParseOutput {
        match self.parse_program() {
            Ok(program) => ParseOutput {
                program: Some(program),
                errors: self.errors,
            },
            Err(fatal) => {
                self.errors.push(fatal);
                ParseOutput {
                    program: None,
                    errors: self.errors,
                }
            }
        }
    }

    fn parse_program(&mut self) -> BridgeResult<Program> {
        if !self.match_keyword(Keyword::Start) {
            return Err(self.error("Program must start with START keyword"));
        }

        let mut body = Vec::new();
        while !self.check_keyword(Keyword::End) && !self.is_at_end() {
            let start = self.pos;
            match self.parse_statement() {
                Ok(stmt) => body.push(stmt),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize(start);
                }
            }
        }

        if !self.match_keyword(Keyword::End) {
            return Err(self.error("Program must end with END keyword"));
        }

        Ok(Program { body })
    }

    // ==================== Helpers ====================

    /// Check if we've consumed every token
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Peek at the current token
    fn peek(&self) -> Option<&Token> {
        self.tokens
            .get(self.pos)
            .filter(|t| self.line_bound.is_none_or(|line| t.line == line))
    }

    /// Get the previous token
    fn previous(&self) -> Option<&Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Advance and return the consumed token
    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Line of the current token, or of the last one at end of input
    fn current_line(&self) -> usize {
        self.peek()
            .or_else(|| self.previous())
            .map(|t| t.line)
            .unwrap_or(0)
    }

    /// Check if current token is a keyword
    fn check_keyword(&self, kw: Keyword) -> bool {
        self.peek().is_some_and(|t| t.kind.is_keyword(kw))
    }

    fn check_operator(&self, op: Operator) -> bool {
        self.peek().is_some_and(|t| t.kind.is_operator(op))
    }

    /// Consume keyword if it matches
    fn match_keyword(&mut self, kw: Keyword) -> bool {
        if self.check_keyword(kw) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume operator if it matches
    fn match_operator(&mut self, op: Operator) -> bool {
        if self.check_operator(op) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume one of the operators in `ops`, returning its binary form
    fn match_binary(&mut self, ops: &[(Operator, BinaryOp)]) -> Option<BinaryOp> {
        let (_, found) = ops.iter().copied().find(|(op, _)| self.check_operator(*op))?;
        self.advance();
        Some(found)
    }

    /// Run `parse` with every token past `line` hidden
    fn on_line<T>(
        &mut self,
        line: Option<usize>,
        parse: impl FnOnce(&mut Self) -> BridgeResult<T>,
    ) -> BridgeResult<T> {
        if self.line_bound.is_some() {
            return parse(self);
        }
        self.line_bound = line;
        let result = parse(self);
        self.line_bound = None;
        result
    }

    /// Consume a keyword if it matches, otherwise error
    fn expect_keyword(&mut self, kw: Keyword, msg: &str) -> BridgeResult<()> {
        if self.match_keyword(kw) {
            Ok(())
        } else {
            Err(self.error(msg))
        }
    }

    /// Consume an operator if it matches, otherwise error
    fn expect_operator(&mut self, op: Operator, msg: &str) -> BridgeResult<()> {
        if self.match_operator(op) {
            Ok(())
        } else {
            Err(self.error(msg))
        }
    }

    /// Parse an identifier, returning its name and line
    fn expect_ident(&mut self, msg: &str) -> BridgeResult<(String, usize)> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Identifier(name),
                line,
            }) => {
                let found = (name.clone(), *line);
                self.advance();
                Ok(found)
            }
            _ => Err(self.error(msg)),
        }
    }

    /// Build an error at the current position.
    ///
    /// A statement that runs out of tokens on its own line is blamed on that
    /// line rather than on whatever starts the next one.
    fn error(&self, message: impl Into<String>) -> BridgeError {
        let line = match (self.peek(), self.previous()) {
            (Some(current), Some(prev)) if self.pos > self.stmt_start && current.line != prev.line => {
                prev.line
            }
            _ => self.current_line(),
        };
        BridgeError::parser(message, line)
    }

    /// Skip to the next token that can begin a statement: a statement
    /// keyword, or an identifier opening a later line. The failed statement's
    /// first token is skipped only if nothing was consumed.
    fn synchronize(&mut self, start: usize) {
        if self.pos == start {
            self.advance();
        }
        while let Some(token) = self.peek() {
            match &token.kind {
                TokenKind::Keyword(kw) if kw.starts_statement() => return,
                TokenKind::Identifier(_)
                    if self.previous().is_some_and(|prev| prev.line < token.line) =>
                {
                    return;
                }
                _ => {}
            }
            self.advance();
        }
    }

    // ==================== Statements ====================

    fn parse_statement(&mut self) -> BridgeResult<Stmt> {
        let enclosing = self.stmt_start;
        self.stmt_start = self.pos;
        let stmt = self.parse_statement_inner()?;
        self.stmt_start = enclosing;
        Ok(stmt)
    }

    fn parse_statement_inner(&mut self) -> BridgeResult<Stmt> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.error("Unexpected token: EOF"));
        };
        let line = token.line;

        match token.kind {
            TokenKind::Keyword(kw) => match kw {
                Keyword::Input => self.parse_input(line),
                Keyword::Print => self.parse_print(line),
                Keyword::Set => self.parse_assignment(line),
                Keyword::If => self.parse_if(line),
                Keyword::While => self.parse_while(line),
                Keyword::For => self.parse_for(line),
                Keyword::Array => self.parse_array(line),
                _ => {
                    if let Some(kind) = DsKind::from_keyword(kw) {
                        self.parse_create(kind, line)
                    } else if let Some(op) = DsOp::from_keyword(kw) {
                        self.parse_operation(op, line)
                    } else {
                        Err(self.error(format!("Unexpected keyword: {}", kw)))
                    }
                }
            },
            TokenKind::Identifier(name) => {
                self.advance();
                if self.match_operator(Operator::Eq) {
                    let value = self.parse_expression()?;
                    Ok(Stmt::Assign {
                        variable: name,
                        value,
                        line,
                    })
                } else {
                    Err(self.error(format!("Unexpected identifier: {}", name)))
                }
            }
            other => Err(self.error(format!("Unexpected token: {}", Token::new(other, line).value()))),
        }
    }

    /// Parse statements until one of `terminators` (not consumed)
    fn parse_block(&mut self, terminators: &[Keyword]) -> BridgeResult<Vec<Stmt>> {
        let mut stmts = Vec::new();
        while !terminators.iter().any(|kw| self.check_keyword(*kw)) && !self.is_at_end() {
            stmts.push(self.parse_statement()?);
        }
        Ok(stmts)
    }

    fn parse_input(&mut self, line: usize) -> BridgeResult<Stmt> {
        self.advance(); // INPUT
        let (variable, _) = self.expect_ident("Expected variable name after INPUT")?;
        Ok(Stmt::Input { variable, line })
    }

    fn parse_print(&mut self, line: usize) -> BridgeResult<Stmt> {
        self.advance(); // PRINT
        let value = self.parse_expression()?;
        Ok(Stmt::Print { value, line })
    }

    fn parse_assignment(&mut self, line: usize) -> BridgeResult<Stmt> {
        self.advance(); // SET
        let (name, _) = self.expect_ident("Expected variable name after SET")?;

        if self.match_operator(Operator::LBracket) {
            let index = self.parse_expression()?;
            self.expect_operator(Operator::RBracket, "Expected ]")?;
            self.expect_operator(Operator::Eq, "Expected = after variable")?;
            let value = self.parse_expression()?;
            return Ok(Stmt::ArraySet {
                array: name,
                index,
                value,
                line,
            });
        }

        self.expect_operator(Operator::Eq, "Expected = after variable name")?;
        let value = self.parse_expression()?;
        Ok(Stmt::Assign {
            variable: name,
            value,
            line,
        })
    }

    fn parse_if(&mut self, line: usize) -> BridgeResult<Stmt> {
        self.advance(); // IF
        let condition = self.parse_expression()?;
        self.expect_keyword(Keyword::Then, "Expected THEN after condition")?;

        let then_branch = self.parse_block(&[Keyword::Else, Keyword::EndIf])?;
        let else_branch = if self.match_keyword(Keyword::Else) {
            Some(self.parse_block(&[Keyword::EndIf])?)
        } else {
            None
        };

        self.expect_keyword(Keyword::EndIf, "Expected END IF")?;

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
            line,
        })
    }

    fn parse_while(&mut self, line: usize) -> BridgeResult<Stmt> {
        self.advance(); // WHILE
        let condition = self.parse_expression()?;
        self.expect_keyword(Keyword::Do, "Expected DO after condition")?;
        let body = self.parse_block(&[Keyword::EndWhile])?;
        self.expect_keyword(Keyword::EndWhile, "Expected END WHILE")?;

        Ok(Stmt::While {
            condition,
            body,
            line,
        })
    }

    fn parse_for(&mut self, line: usize) -> BridgeResult<Stmt> {
        self.advance(); // FOR
        let (variable, _) = self.expect_ident("Expected variable name")?;
        self.expect_operator(Operator::Eq, "Expected =")?;
        let start = self.parse_expression()?;
        self.expect_keyword(Keyword::To, "Expected TO")?;
        let end = self.parse_expression()?;
        let body = self.parse_block(&[Keyword::EndFor])?;
        self.expect_keyword(Keyword::EndFor, "Expected END FOR")?;

        Ok(Stmt::For {
            variable,
            start,
            end,
            body,
            line,
        })
    }

    fn parse_array(&mut self, line: usize) -> BridgeResult<Stmt> {
        self.advance(); // ARRAY
        let (name, _) = self.expect_ident("Expected array name")?;

        let size = if self.match_operator(Operator::LBracket) {
            let size = self.parse_expression()?;
            self.expect_operator(Operator::RBracket, "Expected ]")?;
            size
        } else {
            self.parse_expression()?
        };

        Ok(Stmt::ArrayCreate { name, size, line })
    }

    fn parse_create(&mut self, kind: DsKind, line: usize) -> BridgeResult<Stmt> {
        self.advance(); // creation keyword
        let (name, name_line) = self.expect_ident(&format!("Expected {} name", kind.tag()))?;

        let extra = match kind {
            DsKind::Graph => CreateExtra::Graph {
                node_count: self.match_word_on(name_line),
            },
            DsKind::Pair => {
                let first = self.match_word_on(name_line);
                let second = self.match_word_on(name_line);
                CreateExtra::Pair { first, second }
            }
            DsKind::Struct => {
                let mut fields = Vec::new();
                while let Some(Token {
                    kind: TokenKind::Identifier(field),
                    line,
                }) = self.peek()
                {
                    if *line != name_line {
                        break;
                    }
                    fields.push(field.clone());
                    self.advance();
                }
                CreateExtra::Struct { fields }
            }
            _ => CreateExtra::None,
        };

        Ok(Stmt::Create {
            kind,
            name,
            extra,
            line,
        })
    }

    /// Consume an identifier or number on `line`, if one is there
    fn match_word_on(&mut self, line: usize) -> Option<String> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Identifier(word) | TokenKind::Number(word),
                line: token_line,
            }) if *token_line == line => {
                let word = word.clone();
                self.advance();
                Some(word)
            }
            _ => None,
        }
    }

    fn parse_operation(&mut self, op: DsOp, line: usize) -> BridgeResult<Stmt> {
        self.advance(); // operation keyword
        let args = self.on_line(Some(line), |p| p.parse_args(op.arity()))?;
        Ok(Stmt::Operation { op, args, line })
    }

    /// Data-structure arguments: a raw token when it is a simple term,
    /// otherwise a full expression
    fn parse_args(&mut self, count: usize) -> BridgeResult<Vec<Arg>> {
        let mut args = Vec::with_capacity(count);
        for _ in 0..count {
            let arg = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Identifier(word) | TokenKind::Number(word)) => {
                    let arg = Arg::Word(word.clone());
                    self.advance();
                    arg
                }
                Some(TokenKind::String(text)) => {
                    let arg = Arg::Text(text.clone());
                    self.advance();
                    arg
                }
                _ => Arg::Expr(self.parse_expression()?),
            };
            args.push(arg);
        }
        Ok(args)
    }

    // ==================== Expressions ====================

    /// Parse an expression. Expressions never continue onto the next line.
    pub fn parse_expression(&mut self) -> BridgeResult<Expr> {
        let line = self.previous().map(|t| t.line);
        self.on_line(line, Self::parse_comparison)
    }

    fn parse_comparison(&mut self) -> BridgeResult<Expr> {
        let mut expr = self.parse_term()?;

        while let Some(op) = self.match_binary(&[
            (Operator::EqEq, BinaryOp::Eq),
            (Operator::BangEq, BinaryOp::Ne),
            (Operator::Lt, BinaryOp::Lt),
            (Operator::Gt, BinaryOp::Gt),
            (Operator::LtEq, BinaryOp::Le),
            (Operator::GtEq, BinaryOp::Ge),
        ]) {
            let right = self.parse_term()?;
            expr = binary(op, expr, right);
        }

        Ok(expr)
    }

    fn parse_term(&mut self) -> BridgeResult<Expr> {
        let mut expr = self.parse_factor()?;

        while let Some(op) = self.match_binary(&[
            (Operator::Plus, BinaryOp::Add),
            (Operator::Minus, BinaryOp::Sub),
        ]) {
            let right = self.parse_factor()?;
            expr = binary(op, expr, right);
        }

        Ok(expr)
    }

    fn parse_factor(&mut self) -> BridgeResult<Expr> {
        let mut expr = self.parse_unary()?;

        while let Some(op) = self.match_binary(&[
            (Operator::Star, BinaryOp::Mul),
            (Operator::Slash, BinaryOp::Div),
            (Operator::Percent, BinaryOp::Mod),
        ]) {
            let right = self.parse_unary()?;
            expr = binary(op, expr, right);
        }

        Ok(expr)
    }

    fn parse_unary(&mut self) -> BridgeResult<Expr> {
        if self.match_operator(Operator::Minus) {
            let operand = self.parse_unary()?;
            return Ok(Expr::Unary {
                op: UnaryOp::Neg,
                operand: Box::new(operand),
            });
        }

        self.parse_primary()
    }

    fn parse_primary(&mut self) -> BridgeResult<Expr> {
        let Some(token) = self.peek().cloned() else {
            return Err(if self.is_at_end() {
                self.error("Unexpected token: EOF")
            } else {
                self.error("Expected expression")
            });
        };

        match token.kind {
            TokenKind::Number(text) => {
                self.advance();
                Ok(Expr::Literal(Literal::number(&text)))
            }
            TokenKind::String(text) => {
                self.advance();
                Ok(Expr::Literal(Literal::Str(text)))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                if self.match_operator(Operator::LBracket) {
                    let index = self.parse_expression()?;
                    self.expect_operator(Operator::RBracket, "Expected ]")?;
                    return Ok(Expr::ArrayAccess {
                        name,
                        index: Box::new(index),
                    });
                }
                Ok(Expr::Identifier(name))
            }
            TokenKind::Operator(Operator::LParen) => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect_operator(Operator::RParen, "Expected ) after expression")?;
                Ok(expr)
            }
            TokenKind::Keyword(kw) => match QueryOp::from_keyword(kw) {
                Some(op) => {
                    self.advance();
                    let args = self.parse_args(op.arity())?;
                    Ok(Expr::Query { op, args })
                }
                None => Err(self.error(format!("Unexpected token: {}", kw))),
            },
            other => Err(self.error(format!(
                "Unexpected token: {}",
                Token::new(other, token.line).value()
            ))),
        }
    }
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parse(source: &str) -> ParseOutput {
        Parser::new(Lexer::new(source).tokenize()).parse()
    }

    fn parse_ok(source: &str) -> Program {
        let output = parse(source);
        assert!(output.errors.is_empty(), "unexpected errors: {:?}", output.errors);
        output.program.expect("program")
    }

    fn error_lines(output: &ParseOutput) -> Vec<(usize, String)> {
        output
            .errors
            .iter()
            .map(|e| (e.line().unwrap_or(0), e.message()))
            .collect()
    }

    #[test]
    fn test_parse_empty_program() {
        let program = parse_ok("START\nEND");
        assert!(program.body.is_empty());
    }

    #[test]
    fn test_parse_core_statements() {
        let program = parse_ok(
            "START\nINPUT n\nSET total = 0\nFOR i = 1 TO n\nSET total = total + i\nEND FOR\nPRINT total\nEND",
        );
        assert_eq!(program.body.len(), 4);
        assert!(matches!(&program.body[0], Stmt::Input { variable, line: 2 } if variable == "n"));
        match &program.body[2] {
            Stmt::For { variable, body, line, .. } => {
                assert_eq!(variable, "i");
                assert_eq!(body.len(), 1);
                assert_eq!(*line, 4);
            }
            other => panic!("expected for loop, got {:?}", other),
        }
    }

    #[test]
    fn test_precedence() {
        let program = parse_ok("START\nx = 1 + 2 * 3 > 4\nEND");
        let Stmt::Assign { value, .. } = &program.body[0] else {
            panic!("expected assignment");
        };
        let Expr::Binary { op: BinaryOp::Gt, left, .. } = value else {
            panic!("expected comparison at the root, got {:?}", value);
        };
        let Expr::Binary { op: BinaryOp::Add, right, .. } = left.as_ref() else {
            panic!("expected addition");
        };
        assert!(matches!(right.as_ref(), Expr::Binary { op: BinaryOp::Mul, .. }));
    }

    #[test]
    fn test_if_else() {
        let program = parse_ok("START\nIF x > 1 THEN\nPRINT 1\nELSE\nPRINT 2\nPRINT 3\nEND IF\nEND");
        let Stmt::If { then_branch, else_branch, .. } = &program.body[0] else {
            panic!("expected if");
        };
        assert_eq!(then_branch.len(), 1);
        assert_eq!(else_branch.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_array_forms() {
        let program = parse_ok("START\nARRAY a[5]\nARRAY b 3\nSET a[0] = 7\nPRINT a[0]\nEND");
        assert!(matches!(&program.body[0], Stmt::ArrayCreate { name, .. } if name == "a"));
        assert!(matches!(&program.body[1], Stmt::ArrayCreate { name, .. } if name == "b"));
        assert!(matches!(&program.body[2], Stmt::ArraySet { array, .. } if array == "a"));
        assert!(matches!(
            &program.body[3],
            Stmt::Print { value: Expr::ArrayAccess { .. }, .. }
        ));
    }

    #[test]
    fn test_data_structure_operations() {
        let program =
            parse_ok("START\nSTACK s\nPUSH s 10\nPUSH s (x + 1)\nPOP s\nMAP_INSERT m \"k\" 3\nEND");
        assert_eq!(
            program.body[1],
            Stmt::Operation {
                op: DsOp::StackPush,
                args: vec![Arg::Word("s".into()), Arg::Word("10".into())],
                line: 3,
            }
        );
        let Stmt::Operation { args, .. } = &program.body[2] else {
            panic!("expected push");
        };
        assert!(matches!(&args[1], Arg::Expr(Expr::Binary { .. })));
        let Stmt::Operation { args, .. } = &program.body[4] else {
            panic!("expected map insert");
        };
        assert_eq!(args[1], Arg::Text("k".into()));
    }

    #[test]
    fn test_query_expressions() {
        let program = parse_ok("START\nPRINT TOP s\nx = MAP_GET m k + 1\nEND");
        assert!(matches!(
            &program.body[0],
            Stmt::Print { value: Expr::Query { op: QueryOp::Top, .. }, .. }
        ));
        let Stmt::Assign { value, .. } = &program.body[1] else {
            panic!("expected assignment");
        };
        assert!(matches!(value, Expr::Binary { op: BinaryOp::Add, .. }));
    }

    #[test]
    fn test_struct_fields_stop_at_line_end() {
        let program = parse_ok("START\nSTRUCT point x y\nz = 1\nEND");
        assert_eq!(program.body.len(), 2);
        assert_eq!(
            program.body[0],
            Stmt::Create {
                kind: DsKind::Struct,
                name: "point".into(),
                extra: CreateExtra::Struct {
                    fields: vec!["x".into(), "y".into()]
                },
                line: 2,
            }
        );
    }

    #[test]
    fn test_graph_and_pair_optional_arguments() {
        let program = parse_ok("START\nGRAPH g 4\nGRAPH h\nPAIR p 1 2\nEND");
        assert_eq!(program.body.len(), 3);
        assert!(matches!(
            &program.body[0],
            Stmt::Create { extra: CreateExtra::Graph { node_count: Some(n) }, .. } if n == "4"
        ));
        assert!(matches!(
            &program.body[1],
            Stmt::Create { extra: CreateExtra::Graph { node_count: None }, .. }
        ));
    }

    #[test]
    fn test_missing_start_is_fatal() {
        let output = parse("INPUT x\nEND");
        assert!(output.program.is_none());
        assert_eq!(
            error_lines(&output),
            vec![(1, "Program must start with START keyword".to_string())]
        );
    }

    #[test]
    fn test_missing_end_is_fatal() {
        let output = parse("START\nPRINT 1");
        assert!(output.program.is_none());
        assert_eq!(
            error_lines(&output),
            vec![(2, "Program must end with END keyword".to_string())]
        );
    }

    #[test]
    fn test_recovery_reports_the_broken_line() {
        let output = parse("START\nINPUT x\nSET y =\nPRINT x\nEND");
        assert_eq!(
            error_lines(&output),
            vec![(3, "Expected expression".to_string())]
        );
        let program = output.program.expect("program survives recovery");
        assert_eq!(program.body.len(), 2);
        assert!(matches!(&program.body[1], Stmt::Print { line: 4, .. }));
    }

    #[test]
    fn test_assignment_after_a_short_line_survives() {
        let output = parse("START\nSTACK s\nPUSH s\nx = 5\nSET y =\nz = x\nEND");
        assert_eq!(
            error_lines(&output),
            vec![
                (3, "Expected expression".to_string()),
                (5, "Expected expression".to_string()),
            ]
        );
        let program = output.program.expect("program survives recovery");
        assert_eq!(program.body.len(), 3);
        assert!(matches!(
            &program.body[1],
            Stmt::Assign { variable, value: Expr::Literal(_), line: 4 } if variable == "x"
        ));
        assert!(matches!(
            &program.body[2],
            Stmt::Assign { variable, value: Expr::Identifier(v), line: 6 } if variable == "z" && v == "x"
        ));
    }

    #[test]
    fn test_expressions_stop_at_line_end() {
        let output = parse("START\nx = 1 +\n2\nEND");
        assert_eq!(error_lines(&output)[0], (2, "Expected expression".to_string()));
    }

    #[test]
    fn test_unexpected_identifier_and_keyword() {
        let output = parse("START\nfoo\nPRINT 1\nTHEN\nEND");
        assert_eq!(
            error_lines(&output),
            vec![
                (2, "Unexpected identifier: foo".to_string()),
                (4, "Unexpected keyword: THEN".to_string()),
            ]
        );
        assert_eq!(output.program.map(|p| p.body.len()), Some(1));
    }

    #[test]
    fn test_missing_then() {
        let output = parse("START\nIF x > 1\nPRINT x\nEND IF\nEND");
        assert_eq!(
            error_lines(&output)[0],
            (2, "Expected THEN after condition".to_string())
        );
    }
}
