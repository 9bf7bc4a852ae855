//! JavaScript code generator
//!
//! Generates a Node.js script. Input goes through `readline`, so the
//! program body runs inside an `async function main()`.

use crate::parser::{BinaryOp, CreateExtra, DsKind, DsOp, QueryOp};

use super::dialect::{Declarations, Dialect, arg, prompt};
use super::engine::{Collection, Generator};

/// JavaScript code generator
pub type JavaScriptGenerator = Generator<JavaScript>;

#[derive(Debug, Default)]
pub struct JavaScript;

fn let_if(declare: bool) -> &'static str {
    if declare { "let " } else { "" }
}

impl JavaScript {
    /// `Map` and `Set` report `.size`; everything else is an array
    fn length(kind: DsKind, name: &str) -> String {
        match kind {
            DsKind::Map | DsKind::Set => format!("{}.size", name),
            _ => format!("{}.length", name),
        }
    }
}

impl Dialect for JavaScript {
    fn language_name(&self) -> &'static str {
        "JavaScript"
    }

    fn file_extension(&self) -> &'static str {
        "js"
    }

    fn declarations(&self) -> Declarations {
        Declarations::OnFirstAssignment
    }

    fn declare_scalars(&self, names: &[&str]) -> String {
        format!("let {};", names.join(", "))
    }

    fn prelude(&self, program: &Collection) -> Vec<String> {
        let mut lines: Vec<String> = [
            "// Generated JavaScript Code",
            "const readline = require(\"readline\");",
            "const rl = readline.createInterface({",
            "    input: process.stdin,",
            "    output: process.stdout",
            "});",
            "",
        ]
        .iter()
        .map(|l| l.to_string())
        .collect();

        for shape in &program.structs {
            lines.push(format!("class {} {{", shape.name));
            lines.push("    constructor() {".to_string());
            for field in &shape.fields {
                lines.push(format!("        this.{} = 0;", field));
            }
            lines.push("    }".to_string());
            lines.push("}".to_string());
            lines.push(String::new());
        }

        lines.push("async function main() {".to_string());
        lines
    }

    fn epilogue(&self) -> Vec<String> {
        vec![
            "    rl.close();".to_string(),
            "}".to_string(),
            String::new(),
            "main();".to_string(),
        ]
    }

    fn input(&self, variable: &str, declare: bool) -> Vec<String> {
        vec![
            format!("{}{} = await new Promise(resolve => {{", let_if(declare), variable),
            format!(
                "    rl.question(\"{}\", answer => resolve(parseInt(answer)));",
                prompt(variable)
            ),
            "});".to_string(),
        ]
    }

    fn assign(&self, variable: &str, value: &str, declare: bool) -> String {
        format!("{}{} = {};", let_if(declare), variable, value)
    }

    fn print(&self, value: &str, _is_text: bool) -> String {
        format!("console.log({});", value)
    }

    fn for_header(&self, variable: &str, start: &str, end: &str, declare: bool) -> String {
        format!(
            "for ({}{v} = {}; {v} <= {}; {v}++) {{",
            let_if(declare),
            start,
            end,
            v = variable
        )
    }

    fn binary_op(&self, op: BinaryOp) -> &'static str {
        match op {
            BinaryOp::Eq => "===",
            BinaryOp::Ne => "!==",
            _ => op.as_str(),
        }
    }

    fn array_create(&self, name: &str, size: &str, declare: bool) -> Vec<String> {
        vec![format!(
            "{}{} = new Array({}).fill(0);",
            let_if(declare),
            name,
            size
        )]
    }

    fn create(&self, kind: DsKind, name: &str, extra: &CreateExtra, declare: bool) -> Vec<String> {
        let value = match (kind, extra) {
            (DsKind::Map, _) => "new Map()".to_string(),
            (DsKind::Set, _) => "new Set()".to_string(),
            (DsKind::Graph, CreateExtra::Graph { node_count }) => format!(
                "Array.from({{ length: {} }}, () => [])",
                node_count.as_deref().unwrap_or("100")
            ),
            (DsKind::Graph, _) => "Array.from({ length: 100 }, () => [])".to_string(),
            (DsKind::Pair, CreateExtra::Pair { first, second }) => format!(
                "[{}, {}]",
                first.as_deref().unwrap_or("0"),
                second.as_deref().unwrap_or("0")
            ),
            (DsKind::Pair, _) => "[0, 0]".to_string(),
            (DsKind::Struct, _) => {
                return vec![format!("{}obj_{} = new {}();", let_if(declare), name, name)];
            }
            (DsKind::Array, _) => "new Array(100).fill(0)".to_string(),
            _ => "[]".to_string(),
        };
        vec![format!("{}{} = {};", let_if(declare), name, value)]
    }

    fn operation(&self, kind: DsKind, op: DsOp, args: &[String]) -> Vec<String> {
        let name = arg(args, 0);
        let value = arg(args, 1);
        let line = match op {
            DsOp::StackPush
            | DsOp::QueueEnqueue
            | DsOp::VectorPush
            | DsOp::SetAdd
            | DsOp::TreeInsert
            | DsOp::LLPushBack
            | DsOp::DequePushBack => match kind {
                DsKind::Set => format!("{}.add({});", name, value),
                DsKind::Tree => {
                    return vec![
                        format!("if (!{}.includes({})) {{", name, value),
                        format!("    {}.push({});", name, value),
                        format!("    {}.sort((a, b) => a - b);", name),
                        "}".to_string(),
                    ];
                }
                DsKind::PriorityQueue => {
                    return vec![
                        format!("{}.push({});", name, value),
                        format!("{}.sort((a, b) => b - a);", name),
                    ];
                }
                _ => format!("{}.push({});", name, value),
            },
            DsOp::StackPop | DsOp::VectorPop | DsOp::LLPopBack | DsOp::DequePopBack => match kind {
                DsKind::Queue | DsKind::PriorityQueue => format!("{}.shift();", name),
                _ => format!("{}.pop();", name),
            },
            DsOp::QueueDequeue | DsOp::LLPopFront | DsOp::DequePopFront => {
                format!("{}.shift();", name)
            }
            DsOp::LLPushFront | DsOp::DequePushFront => format!("{}.unshift({});", name, value),
            DsOp::MapInsert => format!("{}.set({}, {});", name, value, arg(args, 2)),
            DsOp::MapRemove | DsOp::SetRemove => format!("{}.delete({});", name, value),
            DsOp::GraphAddEdge => {
                let (a, b) = (value, arg(args, 2));
                return vec![
                    format!("{}[{}].push({});", name, a, b),
                    format!("{}[{}].push({}); // undirected", name, b, a),
                ];
            }
            // Queries are printed by the generator
            _ => return Vec::new(),
        };
        vec![line]
    }

    fn query(&self, kind: DsKind, op: QueryOp, args: &[String]) -> String {
        let name = arg(args, 0);
        match op {
            QueryOp::Top => match kind {
                DsKind::Queue | DsKind::PriorityQueue => format!("{}[0]", name),
                _ => format!("{}[{}.length - 1]", name, name),
            },
            QueryOp::Front => format!("{}[0]", name),
            QueryOp::Size => JavaScript::length(kind, name),
            QueryOp::Empty => format!("({} === 0)", JavaScript::length(kind, name)),
            QueryOp::PairFirst => format!("{}[0]", name),
            QueryOp::PairSecond => format!("{}[1]", name),
            QueryOp::MapGet => format!("({}.get({}) ?? 0)", name, arg(args, 1)),
            QueryOp::Contains => match kind {
                DsKind::Map | DsKind::Set => format!("{}.has({})", name, arg(args, 1)),
                _ => format!("{}.includes({})", name, arg(args, 1)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::CodeGenerator;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn generate(source: &str) -> String {
        let output = Parser::new(Lexer::new(source).tokenize()).parse();
        let program = output.program.expect("program");
        JavaScriptGenerator::new().generate(&program).unwrap()
    }

    #[test]
    fn test_sum_program() {
        let code = generate("START\nINPUT a\nSET sum = a + 1\nPRINT sum\nEND");
        assert!(code.starts_with("// Generated JavaScript Code\nconst readline = require(\"readline\");\n"));
        assert!(code.contains(
            "async function main() {\n    let a = await new Promise(resolve => {\n        rl.question(\"Enter a: \", answer => resolve(parseInt(answer)));\n    });\n"
        ));
        assert!(code.contains("    let sum = (a + 1);\n    console.log(sum);\n"));
        assert!(code.ends_with("    rl.close();\n}\n\nmain();\n"));
    }

    #[test]
    fn test_strict_equality() {
        let code = generate("START\nINPUT x\nIF x == 1 THEN\nPRINT x != 2\nEND IF\nEND");
        assert!(code.contains("    if ((x === 1)) {\n        console.log((x !== 2));\n    }\n"));
    }

    #[test]
    fn test_declarations_are_hoisted_out_of_blocks() {
        let code = generate(
            "START\nSET t = 0\nFOR i = 1 TO 3\nSET t = t + i\nSET last = i\nEND FOR\nPRINT last\nSET t = 1\nEND",
        );
        assert!(code.contains("async function main() {\n    let i, last;\n\n    let t = 0;\n"));
        assert!(code.contains("    for (i = 1; i <= 3; i++) {\n        t = (t + i);\n        last = i;\n    }\n"));
        assert!(code.contains("    t = 1;\n"));
        assert!(!code.contains("let t = 1"));
    }

    #[test]
    fn test_structures() {
        let code = generate("START\nMAP m\nMAP_INSERT m \"k\" 2\nPRINT MAP_GET m \"k\"\nPRINT SIZE m\nEND");
        assert!(code.contains("    let m = new Map();\n    m.set(\"k\", 2);\n"));
        assert!(code.contains("    console.log((m.get(\"k\") ?? 0));\n"));
        assert!(code.contains("    console.log(m.size);\n"));
    }
}
