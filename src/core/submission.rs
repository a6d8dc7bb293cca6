// MailSift - core/submission.rs
//
// The input gate: line-ending normalisation and emptiness validation.
// Rejected submissions never reach the network layer.

use crate::core::model::Submission;
use crate::util::error::SubmissionError;

/// Normalise raw input-field text and validate it for classification.
///
/// Every `\r\n` pair becomes `\n`; a lone `\r` is left untouched. The
/// result is rejected when it contains no non-whitespace character.
pub fn prepare_submission(raw: &str) -> Result<Submission, SubmissionError> {
    let normalized = raw.replace("\r\n", "\n");
    if normalized.trim().is_empty() {
        return Err(SubmissionError::Empty);
    }
    Ok(Submission::new(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_input() {
        assert_eq!(prepare_submission(""), Err(SubmissionError::Empty));
    }

    #[test]
    fn rejects_whitespace_only_input() {
        assert_eq!(prepare_submission("   \t  "), Err(SubmissionError::Empty));
        assert_eq!(prepare_submission("\n\n\n"), Err(SubmissionError::Empty));
        assert_eq!(
            prepare_submission("\r\n\r\n"),
            Err(SubmissionError::Empty),
            "CRLF-only input normalises to whitespace and must be rejected"
        );
    }

    #[test]
    fn replaces_all_crlf_pairs() {
        let sub = prepare_submission("line one\r\nline two\r\nline three").unwrap();
        assert_eq!(sub.text(), "line one\nline two\nline three");
    }

    #[test]
    fn leaves_lf_only_input_unchanged() {
        let sub = prepare_submission("line one\nline two").unwrap();
        assert_eq!(sub.text(), "line one\nline two");
    }

    #[test]
    fn normalisation_is_idempotent() {
        let once = prepare_submission("a\r\nb\r\nc").unwrap();
        let twice = prepare_submission(once.text()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn preserves_lone_carriage_returns() {
        let sub = prepare_submission("a\rb\r\nc").unwrap();
        assert_eq!(sub.text(), "a\rb\nc");
    }

    #[test]
    fn preserves_surrounding_whitespace_of_valid_input() {
        // Trimming is for validation only; the payload keeps its shape.
        let sub = prepare_submission("  hello  ").unwrap();
        assert_eq!(sub.text(), "  hello  ");
    }
}
