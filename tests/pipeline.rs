// Integration tests for the front end: preprocessing, lexing, parsing and
// declaration checking

use indoc::indoc;
use logicbridge::lexer::{Keyword, TokenKind};
use logicbridge::parser::{DsKind, DsOp, Expr, ParseOutput, QueryOp, Stmt};
use logicbridge::{Lexer, Parser, Preprocessor, Program, Token, analyze};

fn tokens(source: &str) -> Vec<Token> {
    Lexer::new(&Preprocessor::new().process(source)).tokenize()
}

fn parse(source: &str) -> ParseOutput {
    Parser::new(tokens(source)).parse()
}

fn parse_ok(source: &str) -> Program {
    let output = parse(source);
    assert!(output.errors.is_empty(), "parse errors: {:?}", output.errors);
    output.program.expect("program")
}

const STACK_PROGRAM: &str = indoc! {"
    START
    STACK s
    PUSH s 10
    PUSH s 20
    PRINT TOP s
    POP s
    PRINT TOP s
    END
"};

#[test]
fn test_statement_count_matches_source() {
    let source = indoc! {"
        START
        INPUT n
        SET total = 0
        FOR i = 1 TO n
            SET total = total + i
        END FOR
        IF total > 10 THEN
            PRINT \"big\"
        ELSE
            PRINT total
        END IF
        END
    "};
    let program = parse_ok(source);
    assert_eq!(program.body.len(), 4);
}

#[test]
fn test_parsing_is_deterministic() {
    let first = serde_json::to_value(parse_ok(STACK_PROGRAM)).unwrap();
    let second = serde_json::to_value(parse_ok(STACK_PROGRAM)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_stack_scenario_ast() {
    let program = parse_ok(STACK_PROGRAM);
    let names: Vec<&str> = program.body.iter().map(Stmt::node_name).collect();
    assert_eq!(
        names,
        vec![
            "StackCreate",
            "StackPush",
            "StackPush",
            "PrintStatement",
            "StackPop",
            "PrintStatement"
        ]
    );

    assert!(matches!(
        &program.body[0],
        Stmt::Create { kind: DsKind::Stack, name, .. } if name == "s"
    ));
    assert!(matches!(
        &program.body[4],
        Stmt::Operation { op: DsOp::StackPop, .. }
    ));
    for index in [3, 5] {
        assert!(matches!(
            &program.body[index],
            Stmt::Print { value: Expr::Query { op: QueryOp::Top, .. }, .. }
        ));
    }

    let json = serde_json::to_value(&program).unwrap();
    assert_eq!(json["body"][3]["expression"]["type"], "DSQueryExpression");
    assert_eq!(json["body"][3]["expression"]["operation"], "TOP");
    assert_eq!(json["body"][1]["args"], serde_json::json!(["s", "10"]));

    assert!(analyze(&program).is_ok());
}

#[test]
fn test_keywords_need_word_boundaries() {
    let toks = tokens("START\nSET fortune = 1\nSET endfortune = fortune\nEND");
    let identifiers: Vec<String> = toks
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::Identifier(_)))
        .map(Token::value)
        .collect();
    assert_eq!(identifiers, vec!["fortune", "endfortune", "fortune"]);
    assert!(!toks.iter().any(|t| t.kind == TokenKind::Keyword(Keyword::For)));
    assert!(!toks.iter().any(|t| t.kind == TokenKind::Keyword(Keyword::EndFor)));
}

#[test]
fn test_natural_language_matches_canonical() {
    let natural = tokens("begin\nask for x\nshow x\nfinish");
    let canonical = Lexer::new("START\nINPUT x\nPRINT x\nEND").tokenize();
    assert_eq!(natural, canonical);
}

#[test]
fn test_natural_language_program_compiles() {
    let source = indoc! {"
        begin
        create stack s
        push 10 onto s
        get n
        if n is greater than 5 then
            display n
        end if
        finish
    "};
    let program = parse_ok(source);
    assert!(matches!(
        &program.body[1],
        Stmt::Operation { op: DsOp::StackPush, args, .. } if args[0].as_word() == Some("s")
    ));
    assert!(analyze(&program).is_ok());
}

#[test]
fn test_declaration_before_use() {
    let analysis = analyze(&parse_ok("START\nPRINT y\nEND"));
    assert_eq!(analysis.errors.len(), 1);
    assert!(analysis.errors[0].message().contains("'y'"));
    assert_eq!(analysis.errors[0].line(), Some(2));

    let analysis = analyze(&parse_ok("START\nINPUT y\nPRINT y\nEND"));
    assert!(analysis.is_ok());
}

#[test]
fn test_redeclaration_keeps_first_entry() {
    let analysis = analyze(&parse_ok("START\nINPUT x\nINPUT x\nEND"));
    assert!(analysis.is_ok());
    assert_eq!(analysis.symbol_table.len(), 1);
    assert_eq!(analysis.symbol_table.get("x").map(|s| s.line), Some(2));
}

#[test]
fn test_error_recovery_reports_exact_lines() {
    let source = indoc! {"
        START
        INPUT x
        SET y =
        PRINT x
        PRINT (x
        PRINT x
        END
    "};
    let output = parse(source);
    let lines: Vec<Option<usize>> = output.errors.iter().map(|e| e.line()).collect();
    assert_eq!(lines, vec![Some(3), Some(5)]);
    assert_eq!(output.errors[0].message(), "Expected expression");
    assert_eq!(output.errors[1].message(), "Expected ) after expression");
    // The statements around the broken ones survive
    assert_eq!(output.program.map(|p| p.body.len()), Some(3));
}

#[test]
fn test_short_lines_do_not_swallow_the_next_assignment() {
    let source = indoc! {"
        START
        STACK s
        PUSH s
        x = 5
        SET y =
        z = x + 1
        PRINT z
        END
    "};
    let output = parse(source);
    let lines: Vec<Option<usize>> = output.errors.iter().map(|e| e.line()).collect();
    assert_eq!(lines, vec![Some(3), Some(5)]);

    let program = output.program.expect("program");
    let names: Vec<&str> = program.body.iter().map(Stmt::node_name).collect();
    assert_eq!(names, vec!["StackCreate", "AssignmentStatement", "AssignmentStatement", "PrintStatement"]);
    assert!(matches!(&program.body[1], Stmt::Assign { variable, line: 4, .. } if variable == "x"));
    assert!(matches!(&program.body[2], Stmt::Assign { variable, line: 6, .. } if variable == "z"));
}

#[test]
fn test_canonical_contains_queries_survive_preprocessing() {
    let source = indoc! {"
        START
        SET_DS s
        SET_ADD s 5
        IF CONTAINS s 5 THEN
            PRINT 1
        END IF
        WHILE CONTAINS s 5 DO
            SET_REMOVE s 5
        END WHILE
        PRINT CONTAINS s 5
        END
    "};
    let normalized = Preprocessor::new().process(source);
    assert!(normalized.contains("IF CONTAINS s 5 THEN\n"));
    assert!(normalized.contains("WHILE CONTAINS s 5 DO\n"));
    assert!(normalized.contains("PRINT CONTAINS s 5\n"));

    let program = parse_ok(source);
    assert_eq!(program.body.len(), 5);
    assert!(matches!(
        &program.body[2],
        Stmt::If { condition: Expr::Query { op: QueryOp::Contains, .. }, .. }
    ));
    assert!(matches!(
        &program.body[3],
        Stmt::While { condition: Expr::Query { op: QueryOp::Contains, .. }, .. }
    ));
    assert!(matches!(
        &program.body[4],
        Stmt::Print { value: Expr::Query { op: QueryOp::Contains, args }, .. } if args.len() == 2
    ));
    assert!(analyze(&program).is_ok());
}

#[test]
fn test_missing_start_is_fatal() {
    let output = parse("PRINT 1\nEND");
    assert!(output.program.is_none());
    assert_eq!(
        output.errors.last().map(|e| e.message()),
        Some("Program must start with START keyword".to_string())
    );
}
