//! C++ code generator
//!
//! Structures map onto the standard library containers.

use crate::parser::{CreateExtra, DsKind, DsOp, QueryOp};

use super::dialect::{Declarations, Dialect, arg, prompt};
use super::engine::{Collection, Generator};

/// C++ code generator
pub type CppGenerator = Generator<Cpp>;

#[derive(Debug, Default)]
pub struct Cpp;

impl Cpp {
    fn header(kind: DsKind) -> Option<&'static str> {
        match kind {
            DsKind::Stack => Some("<stack>"),
            DsKind::Queue | DsKind::PriorityQueue => Some("<queue>"),
            DsKind::Map => Some("<map>"),
            DsKind::Set | DsKind::Tree => Some("<set>"),
            DsKind::Vector | DsKind::Graph => Some("<vector>"),
            DsKind::LinkedList => Some("<list>"),
            DsKind::Pair => Some("<utility>"),
            DsKind::Deque => Some("<deque>"),
            DsKind::Struct | DsKind::Array => None,
        }
    }

    /// Sequence containers search linearly
    fn is_sequence(kind: DsKind) -> bool {
        matches!(kind, DsKind::Vector | DsKind::LinkedList | DsKind::Deque)
    }
}

impl Dialect for Cpp {
    fn language_name(&self) -> &'static str {
        "C++"
    }

    fn file_extension(&self) -> &'static str {
        "cpp"
    }

    fn declarations(&self) -> Declarations {
        Declarations::Upfront
    }

    fn prelude(&self, program: &Collection) -> Vec<String> {
        let mut headers = vec!["<iostream>"];
        for kind in &program.kinds {
            if let Some(header) = Cpp::header(*kind)
                && !headers.contains(&header)
            {
                headers.push(header);
            }
        }
        if program
            .ops
            .iter()
            .any(|(kind, op)| *op == DsOp::Contains && Cpp::is_sequence(*kind))
        {
            headers.push("<algorithm>");
        }

        let mut lines = vec!["// Generated C++ Code".to_string()];
        lines.extend(headers.iter().map(|h| format!("#include {}", h)));
        lines.push("using namespace std;".to_string());
        lines.push(String::new());

        for shape in &program.structs {
            lines.push(format!("struct {} {{", shape.name));
            for field in &shape.fields {
                lines.push(format!("    int {};", field));
            }
            lines.push("};".to_string());
            lines.push(String::new());
        }

        lines.push("int main() {".to_string());
        lines
    }

    fn epilogue(&self) -> Vec<String> {
        vec!["    return 0;".to_string(), "}".to_string()]
    }

    fn input(&self, variable: &str, _declare: bool) -> Vec<String> {
        vec![
            format!("cout << \"{}\";", prompt(variable)),
            format!("cin >> {};", variable),
        ]
    }

    fn print(&self, value: &str, _is_text: bool) -> String {
        format!("cout << {} << endl;", value)
    }

    fn print_query(&self, op: QueryOp, value: &str) -> String {
        match op {
            QueryOp::Empty | QueryOp::Contains => {
                format!("cout << ({} ? \"true\" : \"false\") << endl;", value)
            }
            _ => self.print(value, false),
        }
    }

    fn array_create(&self, name: &str, size: &str, declare: bool) -> Vec<String> {
        if !declare {
            return Vec::new();
        }
        vec![format!("int {}[{}];", name, size)]
    }

    fn create(&self, kind: DsKind, name: &str, extra: &CreateExtra, declare: bool) -> Vec<String> {
        if !declare {
            return Vec::new();
        }
        let line = match (kind, extra) {
            (DsKind::Stack, _) => format!("stack<int> {};", name),
            (DsKind::Queue, _) => format!("queue<int> {};", name),
            (DsKind::Map, _) => format!("map<int, int> {};", name),
            (DsKind::Set, _) => format!("set<int> {};", name),
            (DsKind::Vector, _) => format!("vector<int> {};", name),
            (DsKind::LinkedList, _) => format!("list<int> {};", name),
            (DsKind::Tree, _) => format!("set<int> {};  // BST using ordered set", name),
            (DsKind::Graph, CreateExtra::Graph { node_count }) => format!(
                "vector<vector<int>> {}({});",
                name,
                node_count.as_deref().unwrap_or("100")
            ),
            (DsKind::Graph, _) => format!("vector<vector<int>> {}(100);", name),
            (DsKind::Pair, CreateExtra::Pair { first, second }) => format!(
                "pair<int, int> {} = make_pair({}, {});",
                name,
                first.as_deref().unwrap_or("0"),
                second.as_deref().unwrap_or("0")
            ),
            (DsKind::Pair, _) => format!("pair<int, int> {} = make_pair(0, 0);", name),
            (DsKind::PriorityQueue, _) => format!("priority_queue<int> {};", name),
            (DsKind::Deque, _) => format!("deque<int> {};", name),
            (DsKind::Struct, _) => format!("{} obj_{}{{}};", name, name),
            (DsKind::Array, _) => format!("int {}[100];", name),
        };
        vec![line]
    }

    fn operation(&self, kind: DsKind, op: DsOp, args: &[String]) -> Vec<String> {
        let name = arg(args, 0);
        let value = arg(args, 1);
        let line = match op {
            DsOp::StackPush | DsOp::QueueEnqueue | DsOp::VectorPush => match kind {
                DsKind::Set | DsKind::Tree => format!("{}.insert({});", name, value),
                DsKind::Vector | DsKind::LinkedList | DsKind::Deque => {
                    format!("{}.push_back({});", name, value)
                }
                _ => format!("{}.push({});", name, value),
            },
            DsOp::StackPop | DsOp::QueueDequeue | DsOp::VectorPop => match kind {
                DsKind::Vector | DsKind::LinkedList | DsKind::Deque => {
                    format!("{}.pop_back();", name)
                }
                _ => format!("{}.pop();", name),
            },
            DsOp::MapInsert => format!("{}[{}] = {};", name, value, arg(args, 2)),
            DsOp::MapRemove | DsOp::SetRemove => format!("{}.erase({});", name, value),
            DsOp::SetAdd | DsOp::TreeInsert => format!("{}.insert({});", name, value),
            DsOp::LLPushFront | DsOp::DequePushFront => format!("{}.push_front({});", name, value),
            DsOp::LLPushBack | DsOp::DequePushBack => format!("{}.push_back({});", name, value),
            DsOp::LLPopFront | DsOp::DequePopFront => format!("{}.pop_front();", name),
            DsOp::LLPopBack | DsOp::DequePopBack => format!("{}.pop_back();", name),
            DsOp::GraphAddEdge => {
                let (a, b) = (value, arg(args, 2));
                return vec![
                    format!("{}[{}].push_back({});", name, a, b),
                    format!("{}[{}].push_back({});  // undirected", name, b, a),
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
                DsKind::Queue | DsKind::LinkedList | DsKind::Deque | DsKind::Vector => {
                    format!("{}.back()", name)
                }
                _ => format!("{}.top()", name),
            },
            QueryOp::Front => format!("{}.front()", name),
            QueryOp::Size => format!("(int){}.size()", name),
            QueryOp::Empty => format!("{}.empty()", name),
            QueryOp::PairFirst => format!("{}.first", name),
            QueryOp::PairSecond => format!("{}.second", name),
            QueryOp::MapGet => format!("{}[{}]", name, arg(args, 1)),
            QueryOp::Contains if Cpp::is_sequence(kind) => format!(
                "(find({n}.begin(), {n}.end(), {}) != {n}.end())",
                arg(args, 1),
                n = name
            ),
            QueryOp::Contains => format!("({}.count({}) > 0)", name, arg(args, 1)),
        }
    }
}
