// Integration tests for code generation across all target languages

use indoc::indoc;
use logicbridge::codegen::{CodeGenerator, Language, generate};
use logicbridge::{Lexer, Parser, Preprocessor, Program, analyze};

fn program(source: &str) -> Program {
    let tokens = Lexer::new(&Preprocessor::new().process(source)).tokenize();
    let output = Parser::new(tokens).parse();
    assert!(output.errors.is_empty(), "parse errors: {:?}", output.errors);
    let program = output.program.expect("program");
    assert!(analyze(&program).is_ok());
    program
}

const SUM_PROGRAM: &str = indoc! {"
    START
    INPUT a
    INPUT b
    SET sum = a + b
    PRINT sum
    END
"};

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

/// Index of each needle in `code`, failing if one is missing or out of order
fn assert_in_order(code: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match code[from..].find(needle) {
            Some(offset) => from += offset + needle.len(),
            None => panic!("{:?} missing or out of order in:\n{}", needle, code),
        }
    }
}

#[test]
fn test_sum_program_in_every_language() {
    let program = program(SUM_PROGRAM);

    let expected: [(Language, &[&str]); 5] = [
        (
            Language::C,
            &["int a, b, sum;", "scanf(\"%d\", &a);", "scanf(\"%d\", &b);", "sum = (a + b);", "printf(\"%d\\n\", sum);"],
        ),
        (
            Language::Cpp,
            &["int a, b, sum;", "cin >> a;", "cin >> b;", "sum = (a + b);", "cout << sum << endl;"],
        ),
        (
            Language::Java,
            &["int a, b, sum;", "a = scanner.nextInt();", "b = scanner.nextInt();", "sum = (a + b);", "System.out.println(sum);"],
        ),
        (
            Language::Python,
            &["a = int(input(\"Enter a: \"))", "b = int(input(\"Enter b: \"))", "sum = (a + b)", "print(sum)"],
        ),
        (
            Language::JavaScript,
            &["let a = await new Promise", "let b = await new Promise", "let sum = (a + b);", "console.log(sum);"],
        ),
    ];

    for (language, needles) in expected {
        let code = generate(&program, language).unwrap();
        assert_in_order(&code, needles);
        assert!(code.ends_with('\n'), "{} output lacks a final newline", language);
    }
}

#[test]
fn test_stack_program_in_every_language() {
    let program = program(STACK_PROGRAM);

    let expected: [(Language, &[&str]); 5] = [
        (
            Language::C,
            &["s[s_size++] = 10;", "s[s_size++] = 20;", "s[s_size - 1]", "if (s_size > 0) s_size--;", "s[s_size - 1]"],
        ),
        (
            Language::Cpp,
            &["stack<int> s;", "s.push(10);", "s.push(20);", "cout << s.top() << endl;", "s.pop();", "cout << s.top() << endl;"],
        ),
        (
            Language::Java,
            &["Stack<Integer> s = new Stack<>();", "s.push(10);", "s.push(20);", "System.out.println(s.peek());", "s.pop();", "System.out.println(s.peek());"],
        ),
        (
            Language::Python,
            &["s = []", "s.append(10)", "s.append(20)", "print(s[-1])", "s.pop()", "print(s[-1])"],
        ),
        (
            Language::JavaScript,
            &["let s = [];", "s.push(10);", "s.push(20);", "console.log(s[s.length - 1]);", "s.pop();", "console.log(s[s.length - 1]);"],
        ),
    ];

    for (language, needles) in expected {
        let code = generate(&program, language).unwrap();
        assert_in_order(&code, needles);
    }
}

#[test]
fn test_equality_operators() {
    let program = program("START\nINPUT x\nIF x == 1 THEN\nPRINT x\nEND IF\nEND");

    let js = generate(&program, Language::JavaScript).unwrap();
    assert!(js.contains("if ((x === 1)) {"));

    for language in [Language::C, Language::Cpp, Language::Java] {
        let code = generate(&program, language).unwrap();
        assert!(code.contains("if ((x == 1)) {"), "{}:\n{}", language, code);
    }
    let python = generate(&program, Language::Python).unwrap();
    assert!(python.contains("if (x == 1):\n"));
}

#[test]
fn test_string_printing() {
    let program = program("START\nPRINT \"hi\"\nEND");
    let c = generate(&program, Language::C).unwrap();
    assert!(c.contains("printf(\"%s\\n\", \"hi\");"));
    let python = generate(&program, Language::Python).unwrap();
    assert!(python.contains("print(\"hi\")\n"));
}

#[test]
fn test_generation_is_deterministic() {
    let program = program(STACK_PROGRAM);
    for language in Language::ALL {
        let first = generate(&program, language).unwrap();
        let second = generate(&program, language).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_generators_are_reusable() {
    let mut generator = Language::Cpp.generator();
    let first = generator.generate(&program(SUM_PROGRAM)).unwrap();
    let second = generator.generate(&program(SUM_PROGRAM)).unwrap();
    assert_eq!(first, second);
    assert_eq!(generator.file_extension(), "cpp");
}

#[test]
fn test_natural_language_source_compiles() {
    let source = indoc! {"
        begin
        create queue q
        enqueue 4 into q
        show FRONT q
        finish
    "};
    let python = generate(&program(source), Language::Python).unwrap();
    assert_in_order(&python, &["q = deque()", "q.append(4)", "print(q[0])"]);
}
