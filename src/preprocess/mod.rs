//! Natural-language preprocessing
//!
//! Rewrites loosely phrased pseudo-code ("ask for x", "push 10 onto s",
//! "x is greater than 5") into the canonical keyword syntax the lexer reads.
//! Works one physical line at a time and always yields exactly as many lines
//! as it was given, so diagnostics can point back into the original text.

mod phrase;
mod rules;

use crate::lexer::KeywordTable;

use rules::LineRule;

/// Prefix of the placeholders that protect string literals
const PLACEHOLDER: &str = "__STR";

/// Rewrites natural-language phrasing into canonical syntax
pub struct Preprocessor {
    rules: Vec<LineRule>,
    keywords: KeywordTable,
}

impl Preprocessor {
    pub fn new() -> Self {
        Self::with_keywords(KeywordTable::canonical())
    }

    /// Uppercase the spellings of `keywords` instead of the canonical set
    pub fn with_keywords(keywords: KeywordTable) -> Self {
        Self {
            rules: rules::line_rules(),
            keywords,
        }
    }

    /// Normalize a whole program
    pub fn process(&self, source: &str) -> String {
        source
            .split('\n')
            .map(|line| self.process_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Normalize a single line. Blank and comment lines are returned untouched.
    pub fn process_line(&self, line: &str) -> String {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            return line.to_string();
        }

        let (cleaned, strings) = extract_strings(trimmed);
        let mut normalized = cleaned.to_lowercase();

        for rule in &self.rules {
            if let Some(rewritten) = rule.apply(&normalized, &self.keywords) {
                normalized = rewritten;
            }
        }
        normalized = rules::apply_word_rules(&normalized);

        for (spelling, _) in self.keywords.entries() {
            normalized = phrase::replace_words(&normalized, spelling, spelling);
        }

        restore_strings(&normalized, &strings)
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace every quoted string with a numbered placeholder. An unterminated
/// string runs to the end of the line.
fn extract_strings(line: &str) -> (String, Vec<String>) {
    let mut cleaned = String::with_capacity(line.len());
    let mut strings = Vec::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        if c != '"' && c != '\'' {
            cleaned.push(c);
            continue;
        }
        let contents: String = chars.by_ref().take_while(|&ch| ch != c).collect();
        cleaned.push_str(&format!("{}{}__", PLACEHOLDER, strings.len()));
        strings.push(contents);
    }

    (cleaned, strings)
}

/// Put the protected strings back, double-quoted. Placeholders are matched
/// ignoring case since the line has been lowercased in between.
fn restore_strings(line: &str, strings: &[String]) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(start) = find_ignore_case(rest, PLACEHOLDER) {
        out.push_str(&rest[..start]);
        let after = &rest[start + PLACEHOLDER.len()..];
        let digits = after.len() - after.trim_start_matches(|c: char| c.is_ascii_digit()).len();

        let restored = after[digits..]
            .starts_with("__")
            .then(|| after[..digits].parse::<usize>().ok())
            .flatten()
            .and_then(|index| strings.get(index));

        match restored {
            Some(contents) => {
                out.push('"');
                out.push_str(contents);
                out.push('"');
                rest = &after[digits + 2..];
            }
            None => {
                out.push_str(&rest[start..start + PLACEHOLDER.len()]);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .char_indices()
        .map(|(i, _)| i)
        .find(|&i| {
            haystack
                .get(i..i + needle.len())
                .is_some_and(|slice| slice.eq_ignore_ascii_case(needle))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Keyword;

    fn process(source: &str) -> String {
        Preprocessor::new().process(source)
    }

    #[test]
    fn test_canonical_source_is_stable() {
        let source = "START\nINPUT x\nSET y = x + 1\nIF y > 5 THEN\nPRINT y\nEND IF\nEND";
        assert_eq!(process(source), source);
    }

    #[test]
    fn test_canonical_queries_are_stable() {
        for line in ["IF CONTAINS s 5 THEN", "WHILE CONTAINS s v DO", "PRINT CONTAINS s 5", "PRINT EMPTY q"] {
            assert_eq!(process(line), line);
        }
        assert_eq!(process("s contains 5"), "CONTAINS s 5");
    }

    #[test]
    fn test_natural_language_program() {
        let source = "begin\nask for x\nshow x\nfinish";
        assert_eq!(process(source), "START\nINPUT x\nPRINT x\nEND");
    }

    #[test]
    fn test_lowercase_keywords_are_uppercased() {
        assert_eq!(process("while x < 3 do"), "WHILE x < 3 DO");
        assert_eq!(process("end for"), "END FOR");
    }

    #[test]
    fn test_strings_are_protected() {
        assert_eq!(
            process(r#"print "If You Push This""#),
            r#"PRINT "If You Push This""#
        );
        assert_eq!(process("show 'a' plus 'b'"), r#"PRINT "a" + "b""#);
    }

    #[test]
    fn test_unterminated_string_is_closed() {
        assert_eq!(process(r#"print "oops"#), r#"PRINT "oops""#);
    }

    #[test]
    fn test_identifiers_are_lowercased() {
        assert_eq!(process("SET Total = Total + 1"), "SET total = total + 1");
    }

    #[test]
    fn test_comparison_and_math_words() {
        assert_eq!(
            process("if x is greater than or equal to y plus 1 then"),
            "IF x >= y + 1 THEN"
        );
    }

    #[test]
    fn test_line_count_is_preserved() {
        let source = "begin\n\n   // note\n  show 1\nfinish\n";
        let output = process(source);
        assert_eq!(output.split('\n').count(), source.split('\n').count());
        assert_eq!(output, "START\n\n   // note\nPRINT 1\nEND\n");
    }

    #[test]
    fn test_custom_keyword_table() {
        let table = KeywordTable::new([("SHOUT", Keyword::Print)]);
        let pre = Preprocessor::with_keywords(table);
        assert_eq!(pre.process_line("shout x"), "SHOUT x");
    }
}
