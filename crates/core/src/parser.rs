//! Delimited question source parsing.

use crate::error::ParseError;
use crate::model::Record;

/// Separates the question from the answer. Only the first occurrence on a line counts.
pub const SEPARATOR: char = ',';

const ESCAPED_NEWLINE: &str = "\\n";

/// Parse newline-separated `question,answer` lines into records.
///
/// Blank lines, lines without a separator and lines with an empty side are
/// skipped silently. Literal `\n` sequences become real newlines.
///
/// # Errors
///
/// Returns `ParseError::EmptyInput` for whitespace-only text and
/// `ParseError::NoRecords` when no line yields a record.
pub fn parse_records(text: &str) -> Result<Vec<Record>, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let records: Vec<Record> = text.split('\n').filter_map(parse_line).collect();

    if records.is_empty() {
        return Err(ParseError::NoRecords);
    }
    Ok(records)
}

fn parse_line(line: &str) -> Option<Record> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (question, answer) = line.split_once(SEPARATOR)?;
    let question = unescape(question);
    let answer = unescape(answer);
    if question.is_empty() || answer.is_empty() {
        return None;
    }
    Some(Record::new(question, answer))
}

fn unescape(raw: &str) -> String {
    raw.replace(ESCAPED_NEWLINE, "\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_lines() {
        let records = parse_records("Q1,A1\nQ2,A2\n\nQ3,A3").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2], Record::new("Q3", "A3"));
    }

    #[test]
    fn splits_on_first_separator_only() {
        let records = parse_records("capital of France?,Paris, France").unwrap();
        assert_eq!(records[0].question(), "capital of France?");
        assert_eq!(records[0].answer(), "Paris, France");
    }

    #[test]
    fn unescapes_newlines() {
        let records = parse_records("What is 2\\n+2?,4").unwrap();
        assert_eq!(records[0].question(), "What is 2\n+2?");
        assert_eq!(records[0].answer(), "4");
    }

    #[test]
    fn trims_sides_and_carriage_returns() {
        let records = parse_records("  Q1 ,  A1  \r\nQ2,A2\r\n").unwrap();
        assert_eq!(records, vec![Record::new("Q1", "A1"), Record::new("Q2", "A2")]);
    }

    #[test]
    fn drops_lines_without_separator_or_with_empty_side() {
        let records = parse_records("no separator\n,answer only\nquestion only,\n  ,  \nQ,A").unwrap();
        assert_eq!(records, vec![Record::new("Q", "A")]);
    }

    #[test]
    fn escape_only_side_is_empty_after_trim() {
        let err = parse_records("\\n,A").unwrap_err();
        assert_eq!(err, ParseError::NoRecords);
    }

    #[test]
    fn empty_input_is_distinct_from_no_records() {
        assert_eq!(parse_records(" \n\t\n").unwrap_err(), ParseError::EmptyInput);
        assert_eq!(parse_records("just text\nmore text").unwrap_err(), ParseError::NoRecords);
    }
}
