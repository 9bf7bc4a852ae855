//! Java code generator
//!
//! Everything lives in `main` of a single `GeneratedCode` class; struct
//! shapes become package-private classes ahead of it.

use crate::parser::{CreateExtra, DsKind, DsOp, QueryOp};

use super::dialect::{Declarations, Dialect, arg, prompt};
use super::engine::{Collection, Generator};

/// Java code generator
pub type JavaGenerator = Generator<Java>;

#[derive(Debug, Default)]
pub struct Java;

impl Java {
    fn imports(kind: DsKind) -> &'static [&'static str] {
        match kind {
            DsKind::Stack => &["java.util.Stack"],
            DsKind::Queue => &["java.util.LinkedList", "java.util.Queue"],
            DsKind::Map => &["java.util.HashMap", "java.util.Map"],
            DsKind::Set => &["java.util.HashSet", "java.util.Set"],
            DsKind::Vector | DsKind::Graph => &["java.util.ArrayList", "java.util.List"],
            DsKind::LinkedList => &["java.util.LinkedList"],
            DsKind::Tree => &["java.util.TreeSet"],
            DsKind::PriorityQueue => &["java.util.PriorityQueue", "java.util.Collections"],
            DsKind::Deque => &["java.util.ArrayDeque", "java.util.Deque"],
            DsKind::Pair | DsKind::Struct | DsKind::Array => &[],
        }
    }
}

impl Dialect for Java {
    fn language_name(&self) -> &'static str {
        "Java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn declarations(&self) -> Declarations {
        Declarations::Upfront
    }

    fn body_indent(&self) -> usize {
        2
    }

    fn prelude(&self, program: &Collection) -> Vec<String> {
        let mut imports = vec!["java.util.Scanner"];
        for kind in &program.kinds {
            for &import in Java::imports(*kind) {
                if !imports.contains(&import) {
                    imports.push(import);
                }
            }
        }

        let mut lines = vec!["// Generated Java Code".to_string()];
        lines.extend(imports.iter().map(|i| format!("import {};", i)));
        lines.push(String::new());

        for shape in &program.structs {
            lines.push(format!("class {} {{", shape.name));
            for field in &shape.fields {
                lines.push(format!("    int {};", field));
            }
            lines.push("}".to_string());
            lines.push(String::new());
        }

        lines.push("public class GeneratedCode {".to_string());
        lines.push("    public static void main(String[] args) {".to_string());
        lines.push("        Scanner scanner = new Scanner(System.in);".to_string());
        lines
    }

    fn epilogue(&self) -> Vec<String> {
        vec![
            "        scanner.close();".to_string(),
            "    }".to_string(),
            "}".to_string(),
        ]
    }

    fn input(&self, variable: &str, _declare: bool) -> Vec<String> {
        vec![
            format!("System.out.print(\"{}\");", prompt(variable)),
            format!("{} = scanner.nextInt();", variable),
        ]
    }

    fn print(&self, value: &str, _is_text: bool) -> String {
        format!("System.out.println({});", value)
    }

    fn array_create(&self, name: &str, size: &str, declare: bool) -> Vec<String> {
        if !declare {
            return Vec::new();
        }
        vec![format!("int[] {} = new int[{}];", name, size)]
    }

    fn create(&self, kind: DsKind, name: &str, extra: &CreateExtra, declare: bool) -> Vec<String> {
        if !declare {
            return Vec::new();
        }
        match (kind, extra) {
            (DsKind::Graph, _) => {
                let count = match extra {
                    CreateExtra::Graph {
                        node_count: Some(count),
                    } => count.as_str(),
                    _ => "100",
                };
                vec![
                    format!("List<List<Integer>> {} = new ArrayList<>();", name),
                    format!(
                        "for (int _i = 0; _i < {}; _i++) {}.add(new ArrayList<>());",
                        count, name
                    ),
                ]
            }
            (DsKind::Pair, CreateExtra::Pair { first, second }) => vec![format!(
                "int[] {} = {{{}, {}}}; // Pair",
                name,
                first.as_deref().unwrap_or("0"),
                second.as_deref().unwrap_or("0")
            )],
            (DsKind::Pair, _) => vec![format!("int[] {} = {{0, 0}}; // Pair", name)],
            _ => {
                let line = match kind {
                    DsKind::Stack => format!("Stack<Integer> {} = new Stack<>();", name),
                    DsKind::Queue => format!("Queue<Integer> {} = new LinkedList<>();", name),
                    DsKind::Map => format!("Map<Integer, Integer> {} = new HashMap<>();", name),
                    DsKind::Set => format!("Set<Integer> {} = new HashSet<>();", name),
                    DsKind::Vector => format!("List<Integer> {} = new ArrayList<>();", name),
                    DsKind::LinkedList => {
                        format!("LinkedList<Integer> {} = new LinkedList<>();", name)
                    }
                    DsKind::Tree => format!("TreeSet<Integer> {} = new TreeSet<>();", name),
                    DsKind::PriorityQueue => format!(
                        "PriorityQueue<Integer> {} = new PriorityQueue<>(Collections.reverseOrder());",
                        name
                    ),
                    DsKind::Deque => format!("Deque<Integer> {} = new ArrayDeque<>();", name),
                    DsKind::Struct => format!("{} obj_{} = new {}();", name, name, name),
                    _ => format!("int[] {} = new int[100];", name),
                };
                vec![line]
            }
        }
    }

    fn operation(&self, kind: DsKind, op: DsOp, args: &[String]) -> Vec<String> {
        let name = arg(args, 0);
        let value = arg(args, 1);
        let line = match op {
            DsOp::StackPush | DsOp::QueueEnqueue | DsOp::VectorPush => match kind {
                DsKind::Stack => format!("{}.push({});", name, value),
                DsKind::LinkedList | DsKind::Deque => format!("{}.addLast({});", name, value),
                _ => format!("{}.add({});", name, value),
            },
            DsOp::StackPop | DsOp::QueueDequeue | DsOp::VectorPop => match kind {
                DsKind::Stack => format!("{}.pop();", name),
                DsKind::Vector => format!("{n}.remove({n}.size() - 1);", n = name),
                DsKind::LinkedList | DsKind::Deque => format!("{}.removeLast();", name),
                _ => format!("{}.poll();", name),
            },
            DsOp::MapInsert => format!("{}.put({}, {});", name, value, arg(args, 2)),
            DsOp::MapRemove | DsOp::SetRemove => format!("{}.remove({});", name, value),
            DsOp::SetAdd | DsOp::TreeInsert => format!("{}.add({});", name, value),
            DsOp::LLPushFront | DsOp::DequePushFront => format!("{}.addFirst({});", name, value),
            DsOp::LLPushBack | DsOp::DequePushBack => format!("{}.addLast({});", name, value),
            DsOp::LLPopFront | DsOp::DequePopFront => format!("{}.removeFirst();", name),
            DsOp::LLPopBack | DsOp::DequePopBack => format!("{}.removeLast();", name),
            DsOp::GraphAddEdge => {
                let (a, b) = (value, arg(args, 2));
                return vec![
                    format!("{}.get({}).add({});", name, a, b),
                    format!("{}.get({}).add({}); // undirected", name, b, a),
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
                DsKind::Vector => format!("{n}.get({n}.size() - 1)", n = name),
                DsKind::LinkedList | DsKind::Deque => format!("{}.peekLast()", name),
                _ => format!("{}.peek()", name),
            },
            QueryOp::Front => match kind {
                DsKind::Vector => format!("{}.get(0)", name),
                DsKind::LinkedList | DsKind::Deque => format!("{}.peekFirst()", name),
                _ => format!("{}.peek()", name),
            },
            QueryOp::Size => match kind {
                DsKind::Array | DsKind::Pair => format!("{}.length", name),
                _ => format!("{}.size()", name),
            },
            QueryOp::Empty => format!("{}.isEmpty()", name),
            QueryOp::PairFirst => format!("{}[0]", name),
            QueryOp::PairSecond => format!("{}[1]", name),
            QueryOp::MapGet => format!("{}.getOrDefault({}, 0)", name, arg(args, 1)),
            QueryOp::Contains => match kind {
                DsKind::Map => format!("{}.containsKey({})", name, arg(args, 1)),
                _ => format!("{}.contains({})", name, arg(args, 1)),
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
        JavaGenerator::new().generate(&program).unwrap()
    }

    #[test]
    fn test_sum_program() {
        let code = generate("START\nINPUT a\nINPUT b\nSET sum = a + b\nPRINT sum\nEND");
        assert!(code.starts_with("// Generated Java Code\nimport java.util.Scanner;\n\npublic class GeneratedCode {\n"));
        assert!(code.contains("        Scanner scanner = new Scanner(System.in);\n        int a, b, sum;\n\n"));
        assert!(code.contains("        System.out.print(\"Enter a: \");\n        a = scanner.nextInt();\n"));
        assert!(code.contains("        sum = (a + b);\n        System.out.println(sum);\n"));
        assert!(code.ends_with("        scanner.close();\n    }\n}\n"));
    }

    #[test]
    fn test_imports_follow_first_use() {
        let code = generate("START\nMAP m\nSTACK s\nMAP_INSERT m 1 2\nPRINT MAP_GET m 1\nEND");
        assert!(code.contains(
            "import java.util.Scanner;\nimport java.util.HashMap;\nimport java.util.Map;\nimport java.util.Stack;\n\n"
        ));
        assert!(code.contains("        m.put(1, 2);\n"));
        assert!(code.contains("        System.out.println(m.getOrDefault(1, 0));\n"));
    }

    #[test]
    fn test_operations_follow_the_created_kind() {
        let code = generate("START\nVECTOR v\nPUSH v 1\nPOP v\nPRINT TOP v\nDEQUE d\nPUSH d 2\nEND");
        assert!(code.contains("        v.add(1);\n        v.remove(v.size() - 1);\n"));
        assert!(code.contains("        System.out.println(v.get(v.size() - 1));\n"));
        assert!(code.contains("        d.addLast(2);\n"));
    }

    #[test]
    fn test_graph_and_priority_queue() {
        let code = generate("START\nGRAPH g 3\nGRAPH_ADD_EDGE g 0 2\nPRIORITY_QUEUE pq\nPUSH pq 4\nPOP pq\nEND");
        assert!(code.contains("        for (int _i = 0; _i < 3; _i++) g.add(new ArrayList<>());\n"));
        assert!(code.contains("        g.get(0).add(2);\n        g.get(2).add(0); // undirected\n"));
        assert!(code.contains("new PriorityQueue<>(Collections.reverseOrder());"));
        assert!(code.contains("import java.util.Collections;"));
        assert!(code.contains("        pq.add(4);\n        pq.poll();\n"));
    }
}
