//! C code generator
//!
//! C has no containers, so every structure is a fixed `MAX_SIZE` array with
//! companion counters named after it:
//!
//! | kind                 | storage                                     |
//! |----------------------|---------------------------------------------|
//! | queue                | `q[]`, `q_front`, `q_rear`                  |
//! | map                  | `m_keys[]`, `m_values[]`, `m_size`          |
//! | graph                | `g[][]` adjacency matrix, `g_size`          |
//! | pair                 | `p_first`, `p_second`                       |
//! | struct               | `struct s` definition, `obj_s` instance     |
//! | everything else      | `x[]`, `x_size`                             |
//!
//! Trees and priority queues stay sorted ascending; a priority queue's top
//! is its last element.

use crate::parser::{CreateExtra, DsKind, DsOp, QueryOp};

use super::dialect::{Declarations, Dialect, arg, prompt};
use super::engine::{Collection, Generator};

/// C code generator
pub type CGenerator = Generator<C>;

#[derive(Debug, Default)]
pub struct C;

const MAP_GET: &[&str] = &[
    "int map_get(int keys[], int values[], int size, int key) {",
    "    for (int i = 0; i < size; i++) {",
    "        if (keys[i] == key) return values[i];",
    "    }",
    "    return 0;",
    "}",
];

const DS_CONTAINS: &[&str] = &[
    "int ds_contains(int items[], int size, int value) {",
    "    for (int i = 0; i < size; i++) {",
    "        if (items[i] == value) return 1;",
    "    }",
    "    return 0;",
    "}",
];

impl C {
    fn size_of(kind: DsKind, name: &str) -> String {
        match kind {
            DsKind::Queue => format!("({n}_rear - {n}_front)", n = name),
            DsKind::Pair => "2".to_string(),
            _ => format!("{}_size", name),
        }
    }

    /// Insert `value` keeping `name` sorted ascending
    fn sorted_insert(name: &str, value: &str) -> Vec<String> {
        vec![
            format!("    int _j = {}_size - 1;", name),
            format!("    while (_j >= 0 && {}[_j] > {}) {{", name, value),
            format!("        {n}[_j + 1] = {n}[_j];", n = name),
            "        _j--;".to_string(),
            "    }".to_string(),
            format!("    {}[_j + 1] = {};", name, value),
            format!("    {}_size++;", name),
        ]
    }

    fn push_back(name: &str, value: &str) -> Vec<String> {
        vec![format!("{n}[{n}_size++] = {};", value, n = name)]
    }

    fn pop_back(name: &str) -> Vec<String> {
        vec![format!("if ({n}_size > 0) {n}_size--;", n = name)]
    }

    fn push_front(name: &str, value: &str) -> Vec<String> {
        vec![
            format!("for (int _j = {n}_size; _j > 0; _j--) {n}[_j] = {n}[_j - 1];", n = name),
            format!("{}[0] = {};", name, value),
            format!("{}_size++;", name),
        ]
    }

    fn pop_front(name: &str) -> Vec<String> {
        vec![
            format!("if ({}_size > 0) {{", name),
            format!(
                "    for (int _j = 0; _j < {n}_size - 1; _j++) {n}[_j] = {n}[_j + 1];",
                n = name
            ),
            format!("    {}_size--;", name),
            "}".to_string(),
        ]
    }
}

impl Dialect for C {
    fn language_name(&self) -> &'static str {
        "C"
    }

    fn file_extension(&self) -> &'static str {
        "c"
    }

    fn declarations(&self) -> Declarations {
        Declarations::Upfront
    }

    fn prelude(&self, program: &Collection) -> Vec<String> {
        let mut lines = vec![
            "// Generated C Code".to_string(),
            "#include <stdio.h>".to_string(),
        ];
        if program.uses(DsKind::Graph) {
            lines.push("#include <string.h>".to_string());
        }
        lines.push(String::new());

        let fixed = program
            .kinds
            .iter()
            .any(|kind| !matches!(kind, DsKind::Pair | DsKind::Struct | DsKind::Array));
        if fixed {
            lines.push("#define MAX_SIZE 100".to_string());
            lines.push(String::new());
        }

        if program.uses(DsKind::Map) {
            lines.extend(MAP_GET.iter().map(|l| l.to_string()));
            lines.push(String::new());
        }
        if program.uses_any(&[DsKind::Map, DsKind::Set, DsKind::Tree])
            || program.ops.iter().any(|(_, op)| *op == DsOp::Contains)
        {
            lines.extend(DS_CONTAINS.iter().map(|l| l.to_string()));
            lines.push(String::new());
        }

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
            format!("printf(\"{}\");", prompt(variable)),
            format!("scanf(\"%d\", &{});", variable),
        ]
    }

    fn print(&self, value: &str, is_text: bool) -> String {
        if is_text {
            format!("printf(\"%s\\n\", {});", value)
        } else {
            format!("printf(\"%d\\n\", {});", value)
        }
    }

    fn array_create(&self, name: &str, size: &str, declare: bool) -> Vec<String> {
        if !declare {
            return Vec::new();
        }
        vec![format!("int {}[{}];", name, size)]
    }

    fn create(&self, kind: DsKind, name: &str, extra: &CreateExtra, declare: bool) -> Vec<String> {
        // First creation wins
        if !declare {
            return Vec::new();
        }
        match kind {
            DsKind::Queue => vec![
                format!("int {}[MAX_SIZE];", name),
                format!("int {}_front = 0;", name),
                format!("int {}_rear = 0;", name),
            ],
            DsKind::Map => vec![
                format!("int {}_keys[MAX_SIZE];", name),
                format!("int {}_values[MAX_SIZE];", name),
                format!("int {}_size = 0;", name),
            ],
            DsKind::Graph => {
                let count = match extra {
                    CreateExtra::Graph {
                        node_count: Some(count),
                    } => count.as_str(),
                    _ => "MAX_SIZE",
                };
                vec![
                    format!("int {}[MAX_SIZE][MAX_SIZE];", name),
                    format!("memset({n}, 0, sizeof({n}));", n = name),
                    format!("int {}_size = {};", name, count),
                ]
            }
            DsKind::Pair => {
                let (first, second) = match extra {
                    CreateExtra::Pair { first, second } => (first.as_deref(), second.as_deref()),
                    _ => (None, None),
                };
                vec![
                    format!("int {}_first = {};", name, first.unwrap_or("0")),
                    format!("int {}_second = {};", name, second.unwrap_or("0")),
                ]
            }
            DsKind::Struct => vec![format!("struct {n} obj_{n} = {{0}};", n = name)],
            DsKind::Array => vec![format!("int {}[MAX_SIZE];", name)],
            _ => vec![
                format!("int {}[MAX_SIZE];", name),
                format!("int {}_size = 0;", name),
            ],
        }
    }

    fn operation(&self, kind: DsKind, op: DsOp, args: &[String]) -> Vec<String> {
        let name = arg(args, 0);
        let value = arg(args, 1);
        match op {
            DsOp::StackPush
            | DsOp::QueueEnqueue
            | DsOp::VectorPush
            | DsOp::SetAdd
            | DsOp::TreeInsert
            | DsOp::LLPushBack
            | DsOp::DequePushBack => match kind {
                DsKind::Queue => vec![format!("{n}[{n}_rear++] = {};", value, n = name)],
                DsKind::Set => vec![format!(
                    "if (!ds_contains({n}, {n}_size, {v})) {n}[{n}_size++] = {v};",
                    n = name,
                    v = value
                )],
                DsKind::Tree => {
                    let mut lines = vec![format!(
                        "if (!ds_contains({n}, {n}_size, {})) {{",
                        value,
                        n = name
                    )];
                    lines.extend(C::sorted_insert(name, value));
                    lines.push("}".to_string());
                    lines
                }
                DsKind::PriorityQueue => {
                    let mut lines = vec!["{".to_string()];
                    lines.extend(C::sorted_insert(name, value));
                    lines.push("}".to_string());
                    lines
                }
                _ => C::push_back(name, value),
            },
            DsOp::StackPop
            | DsOp::QueueDequeue
            | DsOp::VectorPop
            | DsOp::LLPopBack
            | DsOp::DequePopBack => match kind {
                DsKind::Queue => vec![format!("if ({n}_front < {n}_rear) {n}_front++;", n = name)],
                _ => C::pop_back(name),
            },
            DsOp::LLPushFront | DsOp::DequePushFront => C::push_front(name, value),
            DsOp::LLPopFront | DsOp::DequePopFront => match kind {
                DsKind::Queue => vec![format!("if ({n}_front < {n}_rear) {n}_front++;", n = name)],
                _ => C::pop_front(name),
            },
            DsOp::MapInsert => vec![
                "{".to_string(),
                "    int _k = 0;".to_string(),
                format!("    while (_k < {n}_size && {n}_keys[_k] != {}) _k++;", value, n = name),
                format!("    {}_keys[_k] = {};", name, value),
                format!("    {}_values[_k] = {};", name, arg(args, 2)),
                format!("    if (_k == {n}_size) {n}_size++;", n = name),
                "}".to_string(),
            ],
            DsOp::MapRemove => vec![format!("// MAP_REMOVE {} {}: not supported in C", name, value)],
            DsOp::SetRemove => vec![format!("// SET_REMOVE {} {}: not supported in C", name, value)],
            DsOp::GraphAddEdge => {
                let (a, b) = (value, arg(args, 2));
                vec![
                    format!("{}[{}][{}] = 1;", name, a, b),
                    format!("{}[{}][{}] = 1;  // undirected", name, b, a),
                ]
            }
            // Queries are printed by the generator
            _ => Vec::new(),
        }
    }

    fn query(&self, kind: DsKind, op: QueryOp, args: &[String]) -> String {
        let name = arg(args, 0);
        match op {
            QueryOp::Top => match kind {
                DsKind::Queue => format!("{n}[{n}_rear - 1]", n = name),
                _ => format!("{n}[{n}_size - 1]", n = name),
            },
            QueryOp::Front => match kind {
                DsKind::Queue => format!("{n}[{n}_front]", n = name),
                _ => format!("{}[0]", name),
            },
            QueryOp::Size => C::size_of(kind, name),
            QueryOp::Empty => format!("({} == 0)", C::size_of(kind, name)),
            QueryOp::PairFirst => format!("{}_first", name),
            QueryOp::PairSecond => format!("{}_second", name),
            QueryOp::MapGet => format!(
                "map_get({n}_keys, {n}_values, {n}_size, {})",
                arg(args, 1),
                n = name
            ),
            QueryOp::Contains => match kind {
                DsKind::Map => format!("ds_contains({n}_keys, {n}_size, {})", arg(args, 1), n = name),
                DsKind::Queue => format!(
                    "ds_contains({n} + {n}_front, {n}_rear - {n}_front, {})",
                    arg(args, 1),
                    n = name
                ),
                _ => format!("ds_contains({n}, {n}_size, {})", arg(args, 1), n = name),
            },
        }
    }
}
