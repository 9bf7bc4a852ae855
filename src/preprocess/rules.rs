//! Rewrite rule tables
//!
//! Line rules are tried in table order and each may fire once per line; a
//! rule sees the output of every rule before it. Word rules replace phrases
//! anywhere on the line and run after all line rules.

use super::phrase::{Phrase, expand, replace_words};
use crate::lexer::KeywordTable;

/// How a matched line is rewritten
#[derive(Debug, Clone, Copy)]
pub(super) enum Rewrite {
    /// `$n` template over the captured holes
    Template(&'static str),
    /// `STRUCT name f1 f2 ...` with fields split on commas and whitespace
    StructFields,
}

use Rewrite::{StructFields, Template};

const DATA_STRUCTURES: &[(&str, Rewrite)] = &[
    // struct
    ("create struct {w} with fields {t}", StructFields),
    ("make struct {w} with fields {t}", StructFields),
    // priority queue
    ("create priority queue {w}", Template("PRIORITY_QUEUE $1")),
    ("make priority queue {w}", Template("PRIORITY_QUEUE $1")),
    // deque
    ("create deque {w}", Template("DEQUE $1")),
    ("make deque {w}", Template("DEQUE $1")),
    ("push front {w} {t}", Template("DEQUE_PUSH_FRONT $1 $2")),
    ("push back {w} {t}", Template("DEQUE_PUSH_BACK $1 $2")),
    ("pop front from {w}", Template("DEQUE_POP_FRONT $1")),
    ("pop back from {w}", Template("DEQUE_POP_BACK $1")),
    // pair
    ("create pair {w} with {t} and {t}", Template("PAIR $1 $2 $3")),
    ("make pair {w} with {t} and {t}", Template("PAIR $1 $2 $3")),
    ("first of {w}", Template("PAIR_FIRST $1")),
    ("second of {w}", Template("PAIR_SECOND $1")),
    // graph
    ("create graph {w} with {w} nodes", Template("GRAPH $1 $2")),
    ("make graph {w} with {w} nodes", Template("GRAPH $1 $2")),
    ("add edge from {w} to {w} in {w}", Template("GRAPH_ADD_EDGE $3 $1 $2")),
    ("add edge {w} {w} in {w}", Template("GRAPH_ADD_EDGE $3 $1 $2")),
    // tree
    ("create tree {w}", Template("TREE $1")),
    ("make tree {w}", Template("TREE $1")),
    ("insert {t} into tree {w}", Template("TREE_INSERT $2 $1")),
    ("add {t} to tree {w}", Template("TREE_INSERT $2 $1")),
    // linked list
    ("create linked list {w}", Template("LINKED_LIST $1")),
    ("make linked list {w}", Template("LINKED_LIST $1")),
    ("add {t} to front of {w}", Template("LL_PUSH_FRONT $2 $1")),
    ("add {t} to back of {w}", Template("LL_PUSH_BACK $2 $1")),
    ("remove front from {w}", Template("LL_POP_FRONT $1")),
    ("remove back from {w}", Template("LL_POP_BACK $1")),
    // vector
    ("create vector {w}", Template("VECTOR $1")),
    ("make vector {w}", Template("VECTOR $1")),
    ("append {t} to {w}", Template("VECTOR_PUSH $2 $1")),
    ("push {t} to vector {w}", Template("VECTOR_PUSH $2 $1")),
    ("remove last from {w}", Template("VECTOR_POP $1")),
    // set
    ("create set {w}", Template("SET_DS $1")),
    ("make set {w}", Template("SET_DS $1")),
    ("add {t} to set {w}", Template("SET_ADD $2 $1")),
    ("remove {t} from set {w}", Template("SET_REMOVE $2 $1")),
    ("{w} contains {t}", Template("CONTAINS $1 $2")),
    // map
    ("create map {w}", Template("MAP $1")),
    ("make map {w}", Template("MAP $1")),
    ("create dictionary {w}", Template("MAP $1")),
    ("make dictionary {w}", Template("MAP $1")),
    ("put {w} {w} in {w}", Template("MAP_INSERT $3 $1 $2")),
    ("insert {w} {w} into {w}", Template("MAP_INSERT $3 $1 $2")),
    ("map insert {w} {w} {w}", Template("MAP_INSERT $1 $2 $3")),
    ("map get {w} {w}", Template("MAP_GET $1 $2")),
    ("get from {w} using {w}", Template("MAP_GET $1 $2")),
    ("map remove {w} {w}", Template("MAP_REMOVE $1 $2")),
    // queue
    ("create queue {w}", Template("QUEUE $1")),
    ("make queue {w}", Template("QUEUE $1")),
    ("enqueue {t} into {w}", Template("ENQUEUE $2 $1")),
    ("add {t} to queue {w}", Template("ENQUEUE $2 $1")),
    ("dequeue from {w}", Template("DEQUEUE $1")),
    ("remove from queue {w}", Template("DEQUEUE $1")),
    ("front of {w}", Template("FRONT $1")),
    // stack
    ("create stack {w}", Template("STACK $1")),
    ("make stack {w}", Template("STACK $1")),
    ("push {t} onto {w}", Template("PUSH $2 $1")),
    ("push {t} to {w}", Template("PUSH $2 $1")),
    ("add {t} to stack {w}", Template("PUSH $2 $1")),
    ("pop from {w}", Template("POP $1")),
    ("remove from stack {w}", Template("POP $1")),
    ("top of {w}", Template("TOP $1")),
    ("peek {w}", Template("TOP $1")),
    // common queries
    ("size of {w}", Template("SIZE $1")),
    ("{w} is empty", Template("EMPTY $1")),
    // arrays
    ("create array {w} of size {t}", Template("ARRAY $1 $2")),
    ("create list {w} with {t} items", Template("ARRAY $1 $2")),
    ("make array {w} of size {t}", Template("ARRAY $1 $2")),
];

const CONTROL_FLOW: &[(&str, Rewrite)] = &[
    ("begin", Template("START")),
    ("start", Template("START")),
    ("finish", Template("END")),
    ("end", Template("END")),
    ("end if", Template("END IF")),
    ("endif", Template("END IF")),
    ("end while", Template("END WHILE")),
    ("endwhile", Template("END WHILE")),
    ("end for", Template("END FOR")),
    ("endfor", Template("END FOR")),
    ("end repeat", Template("END FOR")),
    ("if {t} then", Template("IF $1 THEN")),
    ("otherwise", Template("ELSE")),
    ("else", Template("ELSE")),
    ("for {w} from {t} to {t}", Template("FOR $1 = $2 TO $3")),
    ("for each {w} from {t} to {t}", Template("FOR $1 = $2 TO $3")),
    ("repeat {t} times with {w}", Template("FOR $2 = 0 TO $1 - 1")),
    ("repeat {t} times", Template("FOR i = 0 TO $1 - 1")),
    ("keep doing while {t}", Template("WHILE $1 DO")),
    ("while {t} do", Template("WHILE $1 DO")),
    ("for {w}~=~{t} to {t}", Template("FOR $1 = $2 TO $3")),
];

const INPUT_OUTPUT: &[(&str, Rewrite)] = &[
    ("ask for {t}", Template("INPUT $1")),
    ("get {w}", Template("INPUT $1")),
    ("read {w}", Template("INPUT $1")),
    ("input {t}", Template("INPUT $1")),
    ("show {t}", Template("PRINT $1")),
    ("display {t}", Template("PRINT $1")),
    ("output {t}", Template("PRINT $1")),
    ("print {t}", Template("PRINT $1")),
    ("set {w} to {t}", Template("SET $1 = $2")),
    ("make {w} equal to {t}", Template("SET $1 = $2")),
    ("let {w}~=~{t}", Template("SET $1 = $2")),
    ("set {t}", Template("SET $1")),
];

/// Comparison phrases, longest first so that `is greater than or equal to`
/// is not cut short by `is greater than`.
const COMPARISONS: &[(&str, &str)] = &[
    ("is greater than or equal to", ">="),
    ("is less than or equal to", "<="),
    ("is greater than", ">"),
    ("is less than", "<"),
    ("is at least", ">="),
    ("is at most", "<="),
    ("is not equal to", "!="),
    ("is equal to", "=="),
    ("not equals", "!="),
    ("equals", "=="),
];

const MATH: &[(&str, &str)] = &[
    ("plus", "+"),
    ("minus", "-"),
    ("times", "*"),
    ("divided by", "/"),
    ("modulo", "%"),
    ("mod", "%"),
];

/// A compiled anchored rule
#[derive(Debug, Clone)]
pub(super) struct LineRule {
    phrase: Phrase,
    rewrite: Rewrite,
}

impl LineRule {
    fn new(template: &str, rewrite: Rewrite) -> Self {
        Self {
            phrase: Phrase::new(template),
            rewrite,
        }
    }

    /// Rewrite `line` if the rule matches the whole of it. A rule that opens
    /// with a word hole never captures a keyword there, so canonical lines
    /// such as `IF CONTAINS s 5 THEN` pass through.
    pub(super) fn apply(&self, line: &str, keywords: &KeywordTable) -> Option<String> {
        let captures = self.phrase.captures(line)?;
        if self.phrase.starts_with_word()
            && captures.first().is_some_and(|word| keywords.is_keyword(word))
        {
            return None;
        }
        Some(match self.rewrite {
            Template(template) => expand(template, &captures),
            StructFields => {
                let name = captures.first().copied().unwrap_or_default();
                let fields = captures.get(1).copied().unwrap_or_default();
                let mut out = format!("STRUCT {}", name);
                for field in fields
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|f| !f.is_empty())
                {
                    out.push(' ');
                    out.push_str(field);
                }
                out
            }
        })
    }
}

/// Every line rule in application order
pub(super) fn line_rules() -> Vec<LineRule> {
    DATA_STRUCTURES
        .iter()
        .chain(CONTROL_FLOW)
        .chain(INPUT_OUTPUT)
        .map(|(template, rewrite)| LineRule::new(template, *rewrite))
        .collect()
}

/// Apply the comparison and arithmetic word rules
pub(super) fn apply_word_rules(line: &str) -> String {
    COMPARISONS
        .iter()
        .chain(MATH)
        .fold(line.to_string(), |acc, (phrase, symbol)| {
            replace_words(&acc, phrase, symbol)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(line: &str) -> String {
        let keywords = KeywordTable::canonical();
        line_rules().iter().fold(line.to_string(), |acc, rule| {
            rule.apply(&acc, &keywords).unwrap_or(acc)
        })
    }

    #[test]
    fn test_argument_order_is_inverted() {
        assert_eq!(rewrite("push 10 onto s"), "PUSH s 10");
        assert_eq!(rewrite("enqueue x into q"), "ENQUEUE q x");
        assert_eq!(rewrite("add edge from 0 to 1 in g"), "GRAPH_ADD_EDGE g 0 1");
        assert_eq!(rewrite("put k v in m"), "MAP_INSERT m k v");
    }

    #[test]
    fn test_struct_fields_are_split() {
        assert_eq!(
            rewrite("create struct point with fields x, y,z"),
            "STRUCT point x y z"
        );
    }

    #[test]
    fn test_specific_rules_win_over_general_ones() {
        assert_eq!(rewrite("push 5 to vector v"), "VECTOR_PUSH v 5");
        assert_eq!(rewrite("push 5 to s"), "PUSH s 5");
        assert_eq!(rewrite("add 5 to set s"), "SET_ADD s 5");
        assert_eq!(rewrite("add 5 to stack s"), "PUSH s 5");
    }

    #[test]
    fn test_control_flow_phrases() {
        assert_eq!(rewrite("repeat 5 times"), "FOR i = 0 TO 5 - 1");
        assert_eq!(rewrite("repeat n times with k"), "FOR k = 0 TO n - 1");
        assert_eq!(rewrite("for x from 1 to 10"), "FOR x = 1 TO 10");
        assert_eq!(rewrite("keep doing while x < 3"), "WHILE x < 3 DO");
        assert_eq!(rewrite("end   while"), "END WHILE");
        assert_eq!(rewrite("otherwise"), "ELSE");
    }

    #[test]
    fn test_io_phrases() {
        assert_eq!(rewrite("ask for x"), "INPUT x");
        assert_eq!(rewrite("show x"), "PRINT x");
        assert_eq!(rewrite("set x to 5"), "SET x = 5");
        assert_eq!(rewrite("make y equal to x + 1"), "SET y = x + 1");
        assert_eq!(rewrite("let z=2"), "SET z = 2");
    }

    #[test]
    fn test_leading_word_is_never_a_keyword() {
        assert_eq!(rewrite("s contains 5"), "CONTAINS s 5");
        assert_eq!(rewrite("q is empty"), "EMPTY q");
        assert_eq!(rewrite("if contains s 5 then"), "IF contains s 5 THEN");
        assert_eq!(rewrite("print contains s 5"), "PRINT contains s 5");
        assert_eq!(rewrite("print is empty"), "PRINT is empty");
    }

    #[test]
    fn test_unmatched_line_is_untouched() {
        assert_eq!(rewrite("x = 5"), "x = 5");
    }

    #[test]
    fn test_word_rules_prefer_longer_phrases() {
        assert_eq!(apply_word_rules("x is greater than or equal to y"), "x >= y");
        assert_eq!(apply_word_rules("x is less than or equal to y"), "x <= y");
        assert_eq!(apply_word_rules("x not equals y"), "x != y");
        assert_eq!(apply_word_rules("x equals y"), "x == y");
        assert_eq!(apply_word_rules("a plus b times c"), "a + b * c");
        assert_eq!(apply_word_rules("a divided by b mod c"), "a / b % c");
    }
}
