//! Pretty error reporting using ariadne
//!
//! Errors only know their line, so each report labels the whole line.

use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::errors::BridgeError;

fn report_parts(error: &BridgeError) -> (String, Option<usize>, &'static str) {
    match error {
        BridgeError::Parser { message, line } => (message.clone(), Some(*line), "Parser error"),
        BridgeError::Semantic { message, line } => {
            (message.clone(), Some(*line), "Semantic error")
        }
        BridgeError::UnsupportedLanguage(_) => (error.message(), None, "Usage error"),
        BridgeError::Internal { message } => (message.clone(), None, "Internal error"),
        BridgeError::Io(e) => (e.to_string(), None, "IO error"),
    }
}

fn build_report(source: &str, error: &BridgeError) -> Report<'static, Range<usize>> {
    let (message, line, kind) = report_parts(error);
    let span = line.map(|l| line_span(source, l)).unwrap_or(0..0);

    let mut report = Report::build(ReportKind::Error, span.clone()).with_message(kind);

    match line {
        Some(l) if l > 0 => {
            report = report.with_label(Label::new(span).with_message(message).with_color(Color::Red));
        }
        _ => {
            report = report.with_note(message);
        }
    }

    report.finish()
}

/// Print an error with source context
pub fn print_error(source: &str, _filename: &str, error: &BridgeError) {
    if let BridgeError::Io(e) = error {
        eprintln!("IO error: {}", e);
        return;
    }

    if let Err(e) = build_report(source, error).eprint(Source::from(source)) {
        eprintln!("{} (failed to render report: {})", error, e);
    }
}

/// Print multiple errors
pub fn print_errors(source: &str, filename: &str, errors: &[BridgeError]) {
    for error in errors {
        print_error(source, filename, error);
    }
}

/// Format an error as a string (for testing)
pub fn format_error(source: &str, _filename: &str, error: &BridgeError) -> String {
    let mut output = Vec::new();
    if build_report(source, error)
        .write(Source::from(source), &mut output)
        .is_err()
    {
        return error.to_string();
    }

    String::from_utf8_lossy(&output).into_owned()
}

/// Byte range of a 1-based line, without its newline.
///
/// Line 0 and lines past the end map to an empty range at the end of the
/// nearest valid position.
pub fn line_span(source: &str, line: usize) -> Range<usize> {
    if line == 0 {
        return 0..0;
    }

    let mut start = 0;
    for (index, text) in source.split('\n').enumerate() {
        let end = start + text.len();
        if index + 1 == line {
            let trimmed_end = if text.ends_with('\r') { end - 1 } else { end };
            return start..trimmed_end;
        }
        start = end + 1;
    }

    source.len()..source.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_span() {
        let source = "START\nPRINT x\nEND";

        assert_eq!(line_span(source, 0), 0..0);
        assert_eq!(line_span(source, 1), 0..5);
        assert_eq!(line_span(source, 2), 6..13);
        assert_eq!(line_span(source, 3), 14..17);
        assert_eq!(line_span(source, 9), 17..17);
    }

    #[test]
    fn test_line_span_ignores_carriage_return() {
        let source = "START\r\nEND\r\n";
        assert_eq!(line_span(source, 1), 0..5);
        assert_eq!(line_span(source, 2), 7..10);
    }

    #[test]
    fn test_format_error_mentions_message() {
        let source = "START\nPRINT y\nEND";
        let err = BridgeError::semantic("Variable 'y' used before declaration", 2);
        let rendered = format_error(source, "test.lb", &err);
        assert!(rendered.contains("Semantic error"));
        assert!(rendered.contains("Variable 'y' used before declaration"));
    }
}
