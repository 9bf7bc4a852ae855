//! Python code generator
//!
//! Generates a flat Python 3 script. Queues, linked lists and deques are
//! `collections.deque`; priority queues are `heapq` heaps of negated values
//! so the largest element comes out first.

use crate::parser::{CreateExtra, DsKind, DsOp, QueryOp};

use super::dialect::{Declarations, Dialect, arg, prompt};
use super::engine::{Collection, Generator};

/// Python code generator
pub type PythonGenerator = Generator<Python>;

#[derive(Debug, Default)]
pub struct Python;

impl Dialect for Python {
    fn language_name(&self) -> &'static str {
        "Python"
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn declarations(&self) -> Declarations {
        Declarations::Implicit
    }

    fn body_indent(&self) -> usize {
        0
    }

    fn prelude(&self, program: &Collection) -> Vec<String> {
        let mut lines = vec!["# Generated Python Code".to_string()];

        let mut imports = Vec::new();
        if program.uses_any(&[DsKind::Queue, DsKind::LinkedList, DsKind::Deque]) {
            imports.push("from collections import deque");
        }
        if program.uses(DsKind::PriorityQueue) {
            imports.push("import heapq");
        }
        if program.uses(DsKind::Tree) {
            imports.push("import bisect");
        }
        if !imports.is_empty() {
            lines.extend(imports.iter().map(|i| i.to_string()));
        }
        lines.push(String::new());

        for shape in &program.structs {
            lines.push(format!("class {}:", shape.name));
            lines.push("    def __init__(self):".to_string());
            if shape.fields.is_empty() {
                lines.push("        pass".to_string());
            }
            for field in &shape.fields {
                lines.push(format!("        self.{} = 0", field));
            }
            lines.push(String::new());
        }

        lines
    }

    fn epilogue(&self) -> Vec<String> {
        Vec::new()
    }

    fn input(&self, variable: &str, _declare: bool) -> Vec<String> {
        vec![format!("{} = int(input(\"{}\"))", variable, prompt(variable))]
    }

    fn assign(&self, variable: &str, value: &str, _declare: bool) -> String {
        format!("{} = {}", variable, value)
    }

    fn print(&self, value: &str, _is_text: bool) -> String {
        format!("print({})", value)
    }

    fn if_header(&self, condition: &str) -> String {
        format!("if {}:", condition)
    }

    fn else_header(&self) -> &'static str {
        "else:"
    }

    fn while_header(&self, condition: &str) -> String {
        format!("while {}:", condition)
    }

    fn for_header(&self, variable: &str, start: &str, end: &str, _declare: bool) -> String {
        format!("for {} in range({}, {} + 1):", variable, start, end)
    }

    fn block_end(&self) -> Option<&'static str> {
        None
    }

    fn empty_block(&self) -> Option<&'static str> {
        Some("pass")
    }

    fn array_create(&self, name: &str, size: &str, _declare: bool) -> Vec<String> {
        vec![format!("{} = [0] * {}", name, size)]
    }

    fn array_set(&self, name: &str, index: &str, value: &str) -> String {
        format!("{}[{}] = {}", name, index, value)
    }

    fn create(&self, kind: DsKind, name: &str, extra: &CreateExtra, _declare: bool) -> Vec<String> {
        let value = match (kind, extra) {
            (DsKind::Queue | DsKind::LinkedList | DsKind::Deque, _) => "deque()".to_string(),
            (DsKind::Map, _) => "{}".to_string(),
            (DsKind::Set, _) => "set()".to_string(),
            (DsKind::Graph, CreateExtra::Graph { node_count }) => format!(
                "[[] for _ in range({})]",
                node_count.as_deref().unwrap_or("100")
            ),
            (DsKind::Graph, _) => "[[] for _ in range(100)]".to_string(),
            (DsKind::Pair, CreateExtra::Pair { first, second }) => format!(
                "({}, {})",
                first.as_deref().unwrap_or("0"),
                second.as_deref().unwrap_or("0")
            ),
            (DsKind::Pair, _) => "(0, 0)".to_string(),
            (DsKind::Struct, _) => {
                return vec![format!("obj_{} = {}()", name, name)];
            }
            (DsKind::Array, _) => "[0] * 100".to_string(),
            // Stacks, vectors, trees and heaps are plain lists
            _ => "[]".to_string(),
        };
        vec![format!("{} = {}", name, value)]
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
                DsKind::Set => format!("{}.add({})", name, value),
                DsKind::Tree => {
                    return vec![
                        format!("if {} not in {}:", value, name),
                        format!("    bisect.insort({}, {})", name, value),
                    ];
                }
                DsKind::PriorityQueue => format!("heapq.heappush({}, -{})", name, value),
                _ => format!("{}.append({})", name, value),
            },
            DsOp::StackPop | DsOp::VectorPop | DsOp::LLPopBack | DsOp::DequePopBack => match kind {
                DsKind::Queue => format!("{}.popleft()", name),
                DsKind::PriorityQueue => format!("heapq.heappop({})", name),
                _ => format!("{}.pop()", name),
            },
            DsOp::QueueDequeue | DsOp::LLPopFront | DsOp::DequePopFront => match kind {
                DsKind::Queue | DsKind::LinkedList | DsKind::Deque => {
                    format!("{}.popleft()", name)
                }
                DsKind::PriorityQueue => format!("heapq.heappop({})", name),
                _ => format!("{}.pop(0)", name),
            },
            DsOp::LLPushFront | DsOp::DequePushFront => match kind {
                DsKind::Queue | DsKind::LinkedList | DsKind::Deque => {
                    format!("{}.appendleft({})", name, value)
                }
                _ => format!("{}.insert(0, {})", name, value),
            },
            DsOp::MapInsert => format!("{}[{}] = {}", name, value, arg(args, 2)),
            DsOp::MapRemove => format!("{}.pop({}, None)", name, value),
            DsOp::SetRemove => format!("{}.discard({})", name, value),
            DsOp::GraphAddEdge => {
                let (a, b) = (value, arg(args, 2));
                return vec![
                    format!("{}[{}].append({})", name, a, b),
                    format!("{}[{}].append({})  # undirected", name, b, a),
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
                DsKind::PriorityQueue => format!("(-{}[0])", name),
                DsKind::Queue => format!("{}[0]", name),
                _ => format!("{}[-1]", name),
            },
            QueryOp::Front => match kind {
                DsKind::PriorityQueue => format!("(-{}[0])", name),
                _ => format!("{}[0]", name),
            },
            QueryOp::Size => format!("len({})", name),
            QueryOp::Empty => format!("(len({}) == 0)", name),
            QueryOp::PairFirst => format!("{}[0]", name),
            QueryOp::PairSecond => format!("{}[1]", name),
            QueryOp::MapGet => format!("{}.get({}, 0)", name, arg(args, 1)),
            QueryOp::Contains => format!("({} in {})", arg(args, 1), name),
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
        PythonGenerator::new().generate(&program).unwrap()
    }

    #[test]
    fn test_sum_program() {
        let code = generate("START\nINPUT a\nINPUT b\nSET sum = a + b\nPRINT sum\nEND");
        assert_eq!(
            code,
            "# Generated Python Code\n\
             \n\
             a = int(input(\"Enter a: \"))\n\
             b = int(input(\"Enter b: \"))\n\
             sum = (a + b)\n\
             print(sum)\n"
        );
    }

    #[test]
    fn test_blocks_use_indentation() {
        let code = generate(
            "START\nINPUT n\nFOR i = 1 TO n\nIF i > 2 THEN\nPRINT i\nELSE\nEND IF\nEND FOR\nWHILE n > 0 DO\nEND WHILE\nEND",
        );
        assert!(code.contains("for i in range(1, n + 1):\n    if (i > 2):\n        print(i)\n"));
        // An empty else branch is dropped
        assert!(!code.contains("else:"));
        assert!(code.contains("while (n > 0):\n    pass\n"));
    }

    #[test]
    fn test_structures() {
        let code = generate(
            "START\nQUEUE q\nENQUEUE q 1\nDEQUEUE q\nPRIORITY_QUEUE h\nPUSH h 5\nPRINT TOP h\nTREE t\nTREE_INSERT t 3\nEND",
        );
        assert!(code.starts_with(
            "# Generated Python Code\nfrom collections import deque\nimport heapq\nimport bisect\n\n"
        ));
        assert!(code.contains("q = deque()\nq.append(1)\nq.popleft()\n"));
        assert!(code.contains("heapq.heappush(h, -5)\nprint((-h[0]))\n"));
        assert!(code.contains("if 3 not in t:\n    bisect.insort(t, 3)\n"));
    }

    #[test]
    fn test_struct_becomes_class() {
        let code = generate("START\nSTRUCT point x y\nEND");
        assert!(code.contains(
            "class point:\n    def __init__(self):\n        self.x = 0\n        self.y = 0\n\nobj_point = point()\n"
        ));
    }
}
