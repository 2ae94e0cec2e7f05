use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::split_at_line_starts;

/// One lettered option, or the answer key quoting one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct McqOption {
    pub label: char,
    pub text: String,
}

/// A multiple-choice question.
///
/// `correct` is copied verbatim from the answer marker. It is not checked
/// against `options`: a key naming an option that was never listed is kept
/// and shown as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedQuestion {
    pub question: String,
    pub options: Vec<McqOption>,
    pub correct: Option<McqOption>,
}

fn question_start_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s").expect("Invalid question start regex"))
}

fn question_text_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s*(.*)").expect("Invalid question text regex"))
}

fn option_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-\s([A-D])\)\s(.*)").expect("Invalid option regex"))
}

fn correct_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\*\*Correct Answer:\s*([A-D])\)\s(.*?)\*\*").expect("Invalid answer regex")
    })
}

fn mcq_shape_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s.*\n\s*-\s*[A-D]\)").expect("Invalid MCQ shape regex"))
}

/// Whether the text opens with a numbered question directly followed by a
/// lettered option line. Used to route rewrites to the MCQ parser.
pub fn looks_like_mcq(text: &str) -> bool {
    mcq_shape_regex().is_match(text.trim_start())
}

/// Parses numbered multiple-choice questions.
///
/// The text is cut before every `<n>. ` line. Text ahead of the first
/// question becomes a question with empty text and no options.
pub fn parse_mcqs(text: &str) -> Vec<ParsedQuestion> {
    split_at_line_starts(text, question_start_regex())
        .into_iter()
        .filter(|chunk| !chunk.trim().is_empty())
        .map(question_of)
        .collect()
}

fn option_of(label: &str, text: &str) -> Option<McqOption> {
    Some(McqOption {
        label: label.chars().next()?,
        text: text.to_string(),
    })
}

fn question_of(chunk: &str) -> ParsedQuestion {
    let question = question_text_regex()
        .captures(chunk)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();

    // Repeated labels are kept: options are positional, not keyed.
    let options = option_regex()
        .captures_iter(chunk)
        .filter_map(|c| option_of(&c[1], c[2].trim_end()))
        .collect();

    let correct = correct_regex()
        .captures(chunk)
        .and_then(|c| option_of(&c[1], &c[2]));

    ParsedQuestion {
        question,
        options,
        correct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn opt(label: char, text: &str) -> McqOption {
        McqOption {
            label,
            text: text.into(),
        }
    }

    #[test]
    fn parses_full_question() {
        let text = "1. What is 2+2?\n- A) 3\n- B) 4\n- C) 5\n- D) 6\n\n**Correct Answer: B) 4**";
        assert_eq!(
            parse_mcqs(text),
            vec![ParsedQuestion {
                question: "What is 2+2?".into(),
                options: vec![opt('A', "3"), opt('B', "4"), opt('C', "5"), opt('D', "6")],
                correct: Some(opt('B', "4")),
            }]
        );
    }

    #[test]
    fn missing_answer_is_tolerated() {
        let qs = parse_mcqs("1. Name the capital of France.\n- A) Paris\n- B) Lyon");
        assert_eq!(qs.len(), 1);
        assert_eq!(qs[0].correct, None);
        assert_eq!(qs[0].options, vec![opt('A', "Paris"), opt('B', "Lyon")]);
    }

    #[test]
    fn splits_multiple_questions() {
        let text = "1. First?\n- A) x\n**Correct Answer: A) x**\n\n2. Second?\n- A) y\n- B) z\n**Correct Answer: B) z**";
        let qs = parse_mcqs(text);
        assert_eq!(qs.len(), 2);
        assert_eq!(qs[0].question, "First?");
        assert_eq!(qs[1].question, "Second?");
        assert_eq!(qs[1].correct, Some(opt('B', "z")));
    }

    #[test]
    fn repeated_labels_are_not_collapsed() {
        let qs = parse_mcqs("1. Q?\n- A) one\n- A) again");
        assert_eq!(qs[0].options, vec![opt('A', "one"), opt('A', "again")]);
    }

    #[test]
    fn answer_key_is_not_cross_checked() {
        let qs = parse_mcqs("1. Q?\n- A) one\n- B) two\n**Correct Answer: D) four**");
        assert_eq!(qs[0].correct, Some(opt('D', "four")));
    }

    #[test]
    fn labels_outside_a_to_d_are_ignored() {
        let qs = parse_mcqs("1. Q?\n- A) one\n- E) five\n**Correct Answer: E) five**");
        assert_eq!(qs[0].options, vec![opt('A', "one")]);
        assert_eq!(qs[0].correct, None);
    }

    #[test]
    fn preamble_becomes_empty_question() {
        let qs = parse_mcqs("Here are your questions:\n1. Q?\n- A) a");
        assert_eq!(qs.len(), 2);
        assert_eq!(qs[0].question, "");
        assert!(qs[0].options.is_empty());
        assert_eq!(qs[1].question, "Q?");
    }

    #[test]
    fn empty_text_has_no_questions() {
        assert!(parse_mcqs("").is_empty());
    }

    #[test]
    fn detects_mcq_shape() {
        assert!(looks_like_mcq("1. Q?\n- A) a\n- B) b"));
        assert!(looks_like_mcq("\n1. Q?\n   -A) tight"));
        assert!(!looks_like_mcq("**Rewritten**\n1. Q?\n- A) a"));
        assert!(!looks_like_mcq("1. Step one\n2. Step two"));
    }
}
