//! Phrase templates
//!
//! A tiny anchored matcher for whole-line natural-language rules. Templates
//! are written as plain text with holes:
//!
//! - `{w}` captures a word (`[A-Za-z0-9_]+`)
//! - `{t}` captures any non-empty text
//! - a space matches one or more whitespace characters
//! - `~` matches zero or more whitespace characters
//!
//! Everything else matches literally, ignoring ASCII case. Holes are greedy
//! and backtrack, so `push {t} onto {w}` splits `push a onto b onto c` the
//! same way a greedy regular expression would.

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Word,
    Text,
    Gap,
    OptionalGap,
}

/// A compiled whole-line template
#[derive(Debug, Clone)]
pub struct Phrase {
    pieces: Vec<Piece>,
}

impl Phrase {
    /// Compile a template
    pub fn new(template: &str) -> Self {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(c) = rest.chars().next() {
            let piece = if rest.starts_with("{w}") {
                rest = &rest[3..];
                Some(Piece::Word)
            } else if rest.starts_with("{t}") {
                rest = &rest[3..];
                Some(Piece::Text)
            } else if c == ' ' {
                rest = &rest[1..];
                Some(Piece::Gap)
            } else if c == '~' {
                rest = &rest[1..];
                Some(Piece::OptionalGap)
            } else {
                literal.push(c);
                rest = &rest[c.len_utf8()..];
                None
            };

            if let Some(piece) = piece {
                if !literal.is_empty() {
                    pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                }
                pieces.push(piece);
            }
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Self { pieces }
    }

    /// Whether the template opens with a `{w}` hole
    pub fn starts_with_word(&self) -> bool {
        self.pieces.first() == Some(&Piece::Word)
    }

    /// Match the whole of `text`, returning the captured holes in order
    pub fn captures<'t>(&self, text: &'t str) -> Option<Vec<&'t str>> {
        let mut spans = Vec::new();
        if match_pieces(&self.pieces, text, 0, &mut spans) {
            Some(spans.into_iter().map(|(s, e)| &text[s..e]).collect())
        } else {
            None
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Byte offsets reachable by consuming 1.. chars accepted by `accept`,
/// longest first.
fn run_ends(text: &str, pos: usize, accept: impl Fn(char) -> bool) -> Vec<usize> {
    let mut ends = Vec::new();
    for (offset, c) in text[pos..].char_indices() {
        if !accept(c) {
            break;
        }
        ends.push(pos + offset + c.len_utf8());
    }
    ends.reverse();
    ends
}

fn match_pieces(
    pieces: &[Piece],
    text: &str,
    pos: usize,
    spans: &mut Vec<(usize, usize)>,
) -> bool {
    let Some((piece, rest)) = pieces.split_first() else {
        return pos == text.len();
    };

    match piece {
        Piece::Literal(lit) => {
            let end = pos + lit.len();
            match text.get(pos..end) {
                Some(slice) if slice.eq_ignore_ascii_case(lit) => {
                    match_pieces(rest, text, end, spans)
                }
                _ => false,
            }
        }
        Piece::Gap | Piece::OptionalGap => {
            let mut ends = run_ends(text, pos, char::is_whitespace);
            if *piece == Piece::OptionalGap {
                ends.push(pos);
            }
            ends.into_iter().any(|end| match_pieces(rest, text, end, spans))
        }
        Piece::Word | Piece::Text => {
            let ends = if *piece == Piece::Word {
                run_ends(text, pos, is_word_char)
            } else {
                run_ends(text, pos, |_| true)
            };
            for end in ends {
                spans.push((pos, end));
                if match_pieces(rest, text, end, spans) {
                    return true;
                }
                spans.pop();
            }
            false
        }
    }
}

/// Replace every whole-word occurrence of `phrase` (ASCII case-insensitive)
/// with `replacement`.
pub fn replace_words(text: &str, phrase: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    let mut prev: Option<char> = None;

    while pos < text.len() {
        let end = pos + phrase.len();
        let boundary_before = !prev.is_some_and(is_word_char);
        let candidate = text
            .get(pos..end)
            .filter(|slice| slice.eq_ignore_ascii_case(phrase));

        if boundary_before
            && candidate.is_some()
            && !text[end..].chars().next().is_some_and(is_word_char)
        {
            out.push_str(replacement);
            prev = phrase.chars().last();
            pos = end;
            continue;
        }

        let Some(c) = text[pos..].chars().next() else {
            break;
        };
        out.push(c);
        prev = Some(c);
        pos += c.len_utf8();
    }

    out
}

/// Expand `$1`..`$9` in a replacement template
pub fn expand(template: &str, captures: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$'
            && let Some(index) = chars.peek().and_then(|d| d.to_digit(10))
        {
            chars.next();
            if let Some(value) = (index as usize).checked_sub(1).and_then(|i| captures.get(i)) {
                out.push_str(value);
            }
            continue;
        }
        out.push(c);
    }

    out
}
