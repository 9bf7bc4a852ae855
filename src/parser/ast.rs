//! Abstract Syntax Tree (AST) definitions for Logic Bridge
//!
//! These types represent the structure of a program after parsing. The JSON
//! form handed to clients tags every node with a `type` field.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::lexer::Keyword;

/// A complete program: the statements between `START` and `END`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

/// A statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `INPUT x`
    Input { variable: String, line: usize },
    /// `SET x = expr` or `x = expr`
    Assign {
        variable: String,
        value: Expr,
        line: usize,
    },
    /// `PRINT expr`
    Print { value: Expr, line: usize },
    /// `IF cond THEN ... [ELSE ...] END IF`
    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Option<Vec<Stmt>>,
        line: usize,
    },
    /// `WHILE cond DO ... END WHILE`
    While {
        condition: Expr,
        body: Vec<Stmt>,
        line: usize,
    },
    /// `FOR x = start TO end ... END FOR` (inclusive)
    For {
        variable: String,
        start: Expr,
        end: Expr,
        body: Vec<Stmt>,
        line: usize,
    },
    /// `ARRAY name [size]` or `ARRAY name size`
    ArrayCreate { name: String, size: Expr, line: usize },
    /// `SET name[index] = value`
    ArraySet {
        array: String,
        index: Expr,
        value: Expr,
        line: usize,
    },
    /// Creation of a named data structure
    Create {
        kind: DsKind,
        name: String,
        extra: CreateExtra,
        line: usize,
    },
    /// A data-structure operation with its raw arguments
    Operation { op: DsOp, args: Vec<Arg>, line: usize },
}

impl Stmt {
    /// The source line this statement starts on
    pub fn line(&self) -> usize {
        match self {
            Stmt::Input { line, .. }
            | Stmt::Assign { line, .. }
            | Stmt::Print { line, .. }
            | Stmt::If { line, .. }
            | Stmt::While { line, .. }
            | Stmt::For { line, .. }
            | Stmt::ArrayCreate { line, .. }
            | Stmt::ArraySet { line, .. }
            | Stmt::Create { line, .. }
            | Stmt::Operation { line, .. } => *line,
        }
    }

    /// The JSON node name
    pub fn node_name(&self) -> &'static str {
        match self {
            Stmt::Input { .. } => "InputStatement",
            Stmt::Assign { .. } => "AssignmentStatement",
            Stmt::Print { .. } => "PrintStatement",
            Stmt::If { .. } => "IfStatement",
            Stmt::While { .. } => "WhileStatement",
            Stmt::For { .. } => "ForStatement",
            Stmt::ArrayCreate { .. } => "ArrayCreate",
            Stmt::ArraySet { .. } => "ArraySetStatement",
            Stmt::Create { kind, .. } => kind.create_node(),
            Stmt::Operation { op, .. } => op.node_name(),
        }
    }
}

/// Kind-specific data carried by a creation statement
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CreateExtra {
    #[default]
    None,
    /// `GRAPH g [n]`
    Graph { node_count: Option<String> },
    /// `PAIR p [a [b]]`
    Pair {
        first: Option<String>,
        second: Option<String>,
    },
    /// `STRUCT s f1 f2 ...`
    Struct { fields: Vec<String> },
}

/// The built-in data-structure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DsKind {
    Stack,
    Queue,
    Map,
    Set,
    Vector,
    LinkedList,
    Tree,
    Graph,
    Pair,
    PriorityQueue,
    Deque,
    Struct,
    Array,
}

impl DsKind {
    /// Lowercase tag used in symbol tables and JSON
    pub fn tag(self) -> &'static str {
        match self {
            DsKind::Stack => "stack",
            DsKind::Queue => "queue",
            DsKind::Map => "map",
            DsKind::Set => "set",
            DsKind::Vector => "vector",
            DsKind::LinkedList => "linked_list",
            DsKind::Tree => "tree",
            DsKind::Graph => "graph",
            DsKind::Pair => "pair",
            DsKind::PriorityQueue => "priority_queue",
            DsKind::Deque => "deque",
            DsKind::Struct => "struct",
            DsKind::Array => "array",
        }
    }

    /// JSON node name of the statement creating this kind
    pub fn create_node(self) -> &'static str {
        match self {
            DsKind::Stack => "StackCreate",
            DsKind::Queue => "QueueCreate",
            DsKind::Map => "MapCreate",
            DsKind::Set => "SetCreate",
            DsKind::Vector => "VectorCreate",
            DsKind::LinkedList => "LinkedListCreate",
            DsKind::Tree => "TreeCreate",
            DsKind::Graph => "GraphCreate",
            DsKind::Pair => "PairCreate",
            DsKind::PriorityQueue => "PriorityQueueCreate",
            DsKind::Deque => "DequeCreate",
            DsKind::Struct => "StructCreate",
            DsKind::Array => "ArrayCreate",
        }
    }

    /// The kind created by a keyword, if it is a creation keyword
    pub fn from_keyword(kw: Keyword) -> Option<DsKind> {
        Some(match kw {
            Keyword::Stack => DsKind::Stack,
            Keyword::Queue => DsKind::Queue,
            Keyword::Map => DsKind::Map,
            Keyword::SetDs => DsKind::Set,
            Keyword::Vector => DsKind::Vector,
            Keyword::LinkedList => DsKind::LinkedList,
            Keyword::Tree => DsKind::Tree,
            Keyword::Graph => DsKind::Graph,
            Keyword::Pair => DsKind::Pair,
            Keyword::PriorityQueue => DsKind::PriorityQueue,
            Keyword::Deque => DsKind::Deque,
            Keyword::Struct => DsKind::Struct,
            _ => return None,
        })
    }
}

/// Data-structure operations usable as statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DsOp {
    StackPush,
    StackPop,
    StackTop,
    QueueEnqueue,
    QueueDequeue,
    QueueFront,
    MapInsert,
    MapGet,
    MapRemove,
    SetAdd,
    SetRemove,
    Contains,
    VectorPush,
    VectorPop,
    LLPushFront,
    LLPushBack,
    LLPopFront,
    LLPopBack,
    TreeInsert,
    GraphAddEdge,
    Size,
    Empty,
    PairFirst,
    PairSecond,
    DequePushFront,
    DequePushBack,
    DequePopFront,
    DequePopBack,
}

impl DsOp {
    pub fn from_keyword(kw: Keyword) -> Option<DsOp> {
        Some(match kw {
            Keyword::Push => DsOp::StackPush,
            Keyword::Pop => DsOp::StackPop,
            Keyword::Top => DsOp::StackTop,
            Keyword::Enqueue => DsOp::QueueEnqueue,
            Keyword::Dequeue => DsOp::QueueDequeue,
            Keyword::Front => DsOp::QueueFront,
            Keyword::MapInsert => DsOp::MapInsert,
            Keyword::MapGet => DsOp::MapGet,
            Keyword::MapRemove => DsOp::MapRemove,
            Keyword::SetAdd => DsOp::SetAdd,
            Keyword::SetRemove => DsOp::SetRemove,
            Keyword::Contains => DsOp::Contains,
            Keyword::VectorPush => DsOp::VectorPush,
            Keyword::VectorPop => DsOp::VectorPop,
            Keyword::LlPushFront => DsOp::LLPushFront,
            Keyword::LlPushBack => DsOp::LLPushBack,
            Keyword::LlPopFront => DsOp::LLPopFront,
            Keyword::LlPopBack => DsOp::LLPopBack,
            Keyword::TreeInsert => DsOp::TreeInsert,
            Keyword::GraphAddEdge => DsOp::GraphAddEdge,
            Keyword::Size => DsOp::Size,
            Keyword::Empty => DsOp::Empty,
            Keyword::PairFirst => DsOp::PairFirst,
            Keyword::PairSecond => DsOp::PairSecond,
            Keyword::DequePushFront => DsOp::DequePushFront,
            Keyword::DequePushBack => DsOp::DequePushBack,
            Keyword::DequePopFront => DsOp::DequePopFront,
            Keyword::DequePopBack => DsOp::DequePopBack,
            _ => return None,
        })
    }

    /// Number of arguments, the target name included
    pub fn arity(self) -> usize {
        match self {
            DsOp::MapInsert | DsOp::GraphAddEdge => 3,
            DsOp::StackPush
            | DsOp::QueueEnqueue
            | DsOp::MapGet
            | DsOp::MapRemove
            | DsOp::SetAdd
            | DsOp::SetRemove
            | DsOp::Contains
            | DsOp::VectorPush
            | DsOp::LLPushFront
            | DsOp::LLPushBack
            | DsOp::TreeInsert
            | DsOp::DequePushFront
            | DsOp::DequePushBack => 2,
            DsOp::StackPop
            | DsOp::StackTop
            | DsOp::QueueDequeue
            | DsOp::QueueFront
            | DsOp::VectorPop
            | DsOp::LLPopFront
            | DsOp::LLPopBack
            | DsOp::Size
            | DsOp::Empty
            | DsOp::PairFirst
            | DsOp::PairSecond
            | DsOp::DequePopFront
            | DsOp::DequePopBack => 1,
        }
    }

    pub fn node_name(self) -> &'static str {
        match self {
            DsOp::StackPush => "StackPush",
            DsOp::StackPop => "StackPop",
            DsOp::StackTop => "StackTop",
            DsOp::QueueEnqueue => "QueueEnqueue",
            DsOp::QueueDequeue => "QueueDequeue",
            DsOp::QueueFront => "QueueFront",
            DsOp::MapInsert => "MapInsert",
            DsOp::MapGet => "MapGet",
            DsOp::MapRemove => "MapRemove",
            DsOp::SetAdd => "SetAdd",
            DsOp::SetRemove => "SetRemove",
            DsOp::Contains => "Contains",
            DsOp::VectorPush => "VectorPush",
            DsOp::VectorPop => "VectorPop",
            DsOp::LLPushFront => "LLPushFront",
            DsOp::LLPushBack => "LLPushBack",
            DsOp::LLPopFront => "LLPopFront",
            DsOp::LLPopBack => "LLPopBack",
            DsOp::TreeInsert => "TreeInsert",
            DsOp::GraphAddEdge => "GraphAddEdge",
            DsOp::Size => "Size",
            DsOp::Empty => "Empty",
            DsOp::PairFirst => "PairFirst",
            DsOp::PairSecond => "PairSecond",
            DsOp::DequePushFront => "DequePushFront",
            DsOp::DequePushBack => "DequePushBack",
            DsOp::DequePopFront => "DequePopFront",
            DsOp::DequePopBack => "DequePopBack",
        }
    }

    /// The kind assumed when the target name was never created
    pub fn default_kind(self) -> DsKind {
        match self {
            DsOp::StackPush | DsOp::StackPop | DsOp::StackTop | DsOp::Size | DsOp::Empty => {
                DsKind::Stack
            }
            DsOp::QueueEnqueue | DsOp::QueueDequeue | DsOp::QueueFront => DsKind::Queue,
            DsOp::MapInsert | DsOp::MapGet | DsOp::MapRemove => DsKind::Map,
            DsOp::SetAdd | DsOp::SetRemove | DsOp::Contains => DsKind::Set,
            DsOp::VectorPush | DsOp::VectorPop => DsKind::Vector,
            DsOp::LLPushFront | DsOp::LLPushBack | DsOp::LLPopFront | DsOp::LLPopBack => {
                DsKind::LinkedList
            }
            DsOp::TreeInsert => DsKind::Tree,
            DsOp::GraphAddEdge => DsKind::Graph,
            DsOp::PairFirst | DsOp::PairSecond => DsKind::Pair,
            DsOp::DequePushFront
            | DsOp::DequePushBack
            | DsOp::DequePopFront
            | DsOp::DequePopBack => DsKind::Deque,
        }
    }

    /// Operations that only read a value; as statements they print it
    pub fn as_query(self) -> Option<QueryOp> {
        match self {
            DsOp::StackTop => Some(QueryOp::Top),
            DsOp::QueueFront => Some(QueryOp::Front),
            DsOp::Size => Some(QueryOp::Size),
            DsOp::Empty => Some(QueryOp::Empty),
            DsOp::PairFirst => Some(QueryOp::PairFirst),
            DsOp::PairSecond => Some(QueryOp::PairSecond),
            DsOp::MapGet => Some(QueryOp::MapGet),
            DsOp::Contains => Some(QueryOp::Contains),
            _ => None,
        }
    }
}

/// Data-structure queries usable inside expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOp {
    Top,
    Front,
    Size,
    Empty,
    PairFirst,
    PairSecond,
    MapGet,
    Contains,
}

impl QueryOp {
    pub fn from_keyword(kw: Keyword) -> Option<QueryOp> {
        Some(match kw {
            Keyword::Top => QueryOp::Top,
            Keyword::Front => QueryOp::Front,
            Keyword::Size => QueryOp::Size,
            Keyword::Empty => QueryOp::Empty,
            Keyword::PairFirst => QueryOp::PairFirst,
            Keyword::PairSecond => QueryOp::PairSecond,
            Keyword::MapGet => QueryOp::MapGet,
            Keyword::Contains => QueryOp::Contains,
            _ => return None,
        })
    }

    pub fn keyword(self) -> Keyword {
        match self {
            QueryOp::Top => Keyword::Top,
            QueryOp::Front => Keyword::Front,
            QueryOp::Size => Keyword::Size,
            QueryOp::Empty => Keyword::Empty,
            QueryOp::PairFirst => Keyword::PairFirst,
            QueryOp::PairSecond => Keyword::PairSecond,
            QueryOp::MapGet => Keyword::MapGet,
            QueryOp::Contains => Keyword::Contains,
        }
    }

    pub fn arity(self) -> usize {
        match self {
            QueryOp::MapGet | QueryOp::Contains => 2,
            _ => 1,
        }
    }

    /// The statement form of this query
    pub fn as_op(self) -> DsOp {
        match self {
            QueryOp::Top => DsOp::StackTop,
            QueryOp::Front => DsOp::QueueFront,
            QueryOp::Size => DsOp::Size,
            QueryOp::Empty => DsOp::Empty,
            QueryOp::PairFirst => DsOp::PairFirst,
            QueryOp::PairSecond => DsOp::PairSecond,
            QueryOp::MapGet => DsOp::MapGet,
            QueryOp::Contains => DsOp::Contains,
        }
    }
}

/// A data-structure argument
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// An identifier or number, as written
    Word(String),
    /// A string literal's contents
    Text(String),
    /// Anything else, parsed as an expression
    Expr(Expr),
}

impl Arg {
    /// The argument as a bare name or number
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Arg::Word(w) => Some(w),
            _ => None,
        }
    }
}

/// An expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Identifier(String),
    /// `name[index]`
    ArrayAccess { name: String, index: Box<Expr> },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// A data-structure query such as `TOP s` or `MAP_GET m k`
    Query { op: QueryOp, args: Vec<Arg> },
}

/// Literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    Str(String),
}

impl Literal {
    /// Parse the longest numeric prefix of a number token (`1.2.3` is `1.2`)
    pub fn number(text: &str) -> Literal {
        let int_end = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        let mut end = int_end;
        if text[int_end..].starts_with('.') {
            let frac = &text[int_end + 1..];
            let frac_len = frac
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(frac.len());
            if frac_len > 0 {
                end = int_end + 1 + frac_len;
            }
        }
        Literal::Number(text[..end].parse().unwrap_or(0.0))
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg, // -
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
        }
    }
}

// ==================== JSON ====================

impl Serialize for Program {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "Program")?;
        map.serialize_entry("body", &self.body)?;
        map.end()
    }
}

impl Serialize for Stmt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.node_name())?;

        match self {
            Stmt::Input { variable, .. } => {
                map.serialize_entry("variable", variable)?;
            }
            Stmt::Assign {
                variable, value, ..
            } => {
                map.serialize_entry("variable", variable)?;
                map.serialize_entry("expression", value)?;
            }
            Stmt::Print { value, .. } => {
                map.serialize_entry("expression", value)?;
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                map.serialize_entry("condition", condition)?;
                map.serialize_entry("thenBranch", then_branch)?;
                map.serialize_entry("elseBranch", else_branch)?;
            }
            Stmt::While {
                condition, body, ..
            } => {
                map.serialize_entry("condition", condition)?;
                map.serialize_entry("body", body)?;
            }
            Stmt::For {
                variable,
                start,
                end,
                body,
                ..
            } => {
                map.serialize_entry("variable", variable)?;
                map.serialize_entry("start", start)?;
                map.serialize_entry("end", end)?;
                map.serialize_entry("body", body)?;
            }
            Stmt::ArrayCreate { name, size, .. } => {
                map.serialize_entry("name", name)?;
                map.serialize_entry("size", size)?;
            }
            Stmt::ArraySet {
                array,
                index,
                value,
                ..
            } => {
                map.serialize_entry("array", array)?;
                map.serialize_entry("index", index)?;
                map.serialize_entry("expression", value)?;
            }
            Stmt::Create {
                kind, name, extra, ..
            } => {
                map.serialize_entry("name", name)?;
                match extra {
                    CreateExtra::None => {}
                    CreateExtra::Graph { node_count } => {
                        map.serialize_entry("nodeCount", node_count)?;
                    }
                    CreateExtra::Pair { first, second } => {
                        map.serialize_entry("first", first)?;
                        map.serialize_entry("second", second)?;
                    }
                    CreateExtra::Struct { fields } => {
                        map.serialize_entry("fields", fields)?;
                    }
                }
                map.serialize_entry("dsType", kind.tag())?;
            }
            Stmt::Operation { args, .. } => {
                map.serialize_entry("args", args)?;
            }
        }

        map.serialize_entry("line", &self.line())?;
        map.end()
    }
}

impl Serialize for Arg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Arg::Word(s) | Arg::Text(s) => serializer.serialize_str(s),
            Arg::Expr(e) => e.serialize(serializer),
        }
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Whole numbers print without a fractional part
            Literal::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                serializer.serialize_i64(*n as i64)
            }
            Literal::Number(n) => serializer.serialize_f64(*n),
            Literal::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Expr::Literal(lit) => {
                map.serialize_entry("type", "Literal")?;
                map.serialize_entry("value", lit)?;
            }
            Expr::Identifier(name) => {
                map.serialize_entry("type", "Identifier")?;
                map.serialize_entry("name", name)?;
            }
            Expr::ArrayAccess { name, index } => {
                map.serialize_entry("type", "ArrayAccess")?;
                map.serialize_entry("name", name)?;
                map.serialize_entry("index", index)?;
            }
            Expr::Binary { op, left, right } => {
                map.serialize_entry("type", "BinaryExpression")?;
                map.serialize_entry("operator", op.as_str())?;
                map.serialize_entry("left", left)?;
                map.serialize_entry("right", right)?;
            }
            Expr::Unary { op, operand } => {
                map.serialize_entry("type", "UnaryExpression")?;
                map.serialize_entry("operator", op.as_str())?;
                map.serialize_entry("expression", operand)?;
            }
            Expr::Query { op, args } => {
                map.serialize_entry("type", "DSQueryExpression")?;
                map.serialize_entry("operation", op.keyword().as_str())?;
                map.serialize_entry("args", args)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_takes_longest_prefix() {
        assert_eq!(Literal::number("10"), Literal::Number(10.0));
        assert_eq!(Literal::number("3.25"), Literal::Number(3.25));
        assert_eq!(Literal::number("1.2.3"), Literal::Number(1.2));
        assert_eq!(Literal::number("7."), Literal::Number(7.0));
    }

    #[test]
    fn test_creation_keywords() {
        assert_eq!(DsKind::from_keyword(Keyword::Stack), Some(DsKind::Stack));
        assert_eq!(DsKind::from_keyword(Keyword::SetDs), Some(DsKind::Set));
        // ARRAY has its own statement form
        assert_eq!(DsKind::from_keyword(Keyword::Array), None);
        assert_eq!(DsKind::from_keyword(Keyword::Push), None);
    }

    #[test]
    fn test_every_op_has_its_arity() {
        assert_eq!(DsOp::MapInsert.arity(), 3);
        assert_eq!(DsOp::GraphAddEdge.arity(), 3);
        assert_eq!(DsOp::StackPush.arity(), 2);
        assert_eq!(DsOp::StackPop.arity(), 1);
        assert_eq!(QueryOp::MapGet.arity(), 2);
        assert_eq!(QueryOp::Top.arity(), 1);
    }

    #[test]
    fn test_query_ops_map_back_to_statements() {
        for kw in Keyword::ALL {
            if let Some(query) = QueryOp::from_keyword(kw) {
                assert_eq!(query.keyword(), kw);
                assert_eq!(DsOp::from_keyword(kw), Some(query.as_op()));
                assert_eq!(query.as_op().as_query(), Some(query));
            }
        }
    }

    #[test]
    fn test_statement_json_uses_node_names() {
        let stmt = Stmt::Create {
            kind: DsKind::Graph,
            name: "g".to_string(),
            extra: CreateExtra::Graph {
                node_count: Some("4".to_string()),
            },
            line: 2,
        };
        assert_eq!(
            serde_json::to_value(&stmt).unwrap(),
            json!({"type": "GraphCreate", "name": "g", "nodeCount": "4", "dsType": "graph", "line": 2})
        );

        let push = Stmt::Operation {
            op: DsOp::StackPush,
            args: vec![Arg::Word("s".to_string()), Arg::Word("10".to_string())],
            line: 3,
        };
        assert_eq!(
            serde_json::to_value(&push).unwrap(),
            json!({"type": "StackPush", "args": ["s", "10"], "line": 3})
        );
    }

    #[test]
    fn test_expression_json() {
        let expr = Expr::Binary {
            op: BinaryOp::Add,
            left: Box::new(Expr::Identifier("x".to_string())),
            right: Box::new(Expr::Literal(Literal::Number(1.0))),
        };
        assert_eq!(
            serde_json::to_value(&expr).unwrap(),
            json!({
                "type": "BinaryExpression",
                "operator": "+",
                "left": {"type": "Identifier", "name": "x"},
                "right": {"type": "Literal", "value": 1}
            })
        );
    }
}
