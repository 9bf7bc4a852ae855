//! Keyword tables
//!
//! The lexer and the preprocessor share one table of keyword spellings. A
//! table is plain data, so callers can build one with alternate spellings.

use super::token::Keyword;

/// Keyword spellings, kept sorted longest first so multi-word keywords such
/// as `END WHILE` win over their prefixes.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: Vec<(String, Keyword)>,
}

impl KeywordTable {
    /// Build a table from arbitrary spellings
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Keyword)>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, Keyword)> = entries
            .into_iter()
            .map(|(spelling, kw)| (spelling.into(), kw))
            .collect();
        // Stable sort keeps declaration order among equal lengths.
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { entries }
    }

    /// The canonical uppercase keyword set
    pub fn canonical() -> Self {
        Self::new(Keyword::ALL.iter().map(|kw| (kw.as_str(), *kw)))
    }

    /// Spellings, longest first
    pub fn entries(&self) -> impl Iterator<Item = (&str, Keyword)> {
        self.entries.iter().map(|(s, kw)| (s.as_str(), *kw))
    }

    /// Whether `word` is one of the spellings, ignoring ASCII case
    pub fn is_keyword(&self, word: &str) -> bool {
        self.entries
            .iter()
            .any(|(spelling, _)| spelling.eq_ignore_ascii_case(word))
    }

    /// Find the longest keyword that starts `text` and ends on a lexer
    /// boundary (whitespace, bracket, paren, comma or end of text).
    pub fn match_prefix(&self, text: &str) -> Option<(Keyword, usize)> {
        self.entries.iter().find_map(|(spelling, kw)| {
            if !text.starts_with(spelling.as_str()) {
                return None;
            }
            match text[spelling.len()..].chars().next() {
                None => Some((*kw, spelling.len())),
                Some(c) if c.is_whitespace() || matches!(c, '[' | ']' | '(' | ',') => {
                    Some((*kw, spelling.len()))
                }
                Some(_) => None,
            }
        })
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_keyword_wins() {
        let table = KeywordTable::canonical();
        assert_eq!(table.match_prefix("END WHILE"), Some((Keyword::EndWhile, 9)));
        assert_eq!(table.match_prefix("END"), Some((Keyword::End, 3)));
        assert_eq!(table.match_prefix("SET_DS s"), Some((Keyword::SetDs, 6)));
        assert_eq!(table.match_prefix("SET x = 1"), Some((Keyword::Set, 3)));
    }

    #[test]
    fn test_keyword_requires_boundary() {
        let table = KeywordTable::canonical();
        assert_eq!(table.match_prefix("FORTUNE"), None);
        assert_eq!(table.match_prefix("ENDFORTUNE"), None);
        assert_eq!(table.match_prefix("SIZE(s)"), Some((Keyword::Size, 4)));
    }

    #[test]
    fn test_is_keyword_ignores_case() {
        let table = KeywordTable::canonical();
        assert!(table.is_keyword("if"));
        assert!(table.is_keyword("PRINT"));
        assert!(table.is_keyword("Contains"));
        assert!(!table.is_keyword("s"));
    }

    #[test]
    fn test_alternate_spellings() {
        let table = KeywordTable::new([("BEGIN", Keyword::Start), ("FINISH", Keyword::End)]);
        assert_eq!(table.match_prefix("BEGIN"), Some((Keyword::Start, 5)));
        assert_eq!(table.match_prefix("START"), None);
    }
}
