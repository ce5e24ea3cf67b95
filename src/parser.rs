//! Quiz text parser.
//!
//! Questions are written one per numbered line (`1. What is ...`) followed by
//! lettered option lines (`A. ...` through `D. ...`). Answers are written one per
//! line, optionally numbered (`1. B`). Lines that match neither convention are
//! skipped rather than rejected.

use std::fmt;

use crate::models::{label_index, AnswerKey, Question, QuizDefinition, QuizSettings};

/// Parse the questions block into questions in file order.
///
/// A numbered line with no option lines after it still yields a question, with
/// an empty option list.
pub fn parse_questions(text: &str) -> Vec<Question> {
    let mut questions = Vec::new();
    let mut current: Option<Question> = None;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(prompt) = strip_number_marker(line) {
            if let Some(done) = current.take() {
                questions.push(done);
            }
            current = Some(Question::new(prompt));
        } else if let Some(option) = strip_option_marker(line) {
            if let Some(question) = current.as_mut() {
                question.options.push(option.to_string());
            }
        }
    }

    if let Some(done) = current {
        questions.push(done);
    }

    for (index, question) in questions.iter().enumerate() {
        if !question.has_options() {
            tracing::warn!(question = index + 1, "question has no options");
        }
    }
    tracing::debug!(count = questions.len(), "parsed questions");

    questions
}

/// Parse the answers block. Entries are kept verbatim apart from the number
/// marker and surrounding whitespace.
pub fn parse_answers(text: &str) -> AnswerKey {
    let answers: AnswerKey = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| strip_number_marker(line).unwrap_or(line).trim().to_string())
        .collect();

    tracing::debug!(count = answers.len(), "parsed answer key");
    answers
}

/// Build a full definition. A `question_count` of 0 is resolved to the number of
/// parsed questions here, at authoring time.
pub fn parse_quiz_definition(
    questions_text: &str,
    answers_text: &str,
    settings: QuizSettings,
) -> QuizDefinition {
    let questions = parse_questions(questions_text);
    let answer_key = parse_answers(answers_text);

    let question_count = if settings.question_count == 0 {
        questions.len()
    } else {
        settings.question_count
    };

    QuizDefinition {
        questions,
        answer_key,
        settings: QuizSettings {
            question_count,
            ..settings
        },
    }
}

/// A content defect worth showing to the author. None of these block saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityIssue {
    NoOptions { question: usize },
    MissingAnswer { question: usize },
    AnswerOutOfRange { question: usize, answer: String },
    ExtraAnswers { count: usize },
}

impl fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityIssue::NoOptions { question } => {
                write!(f, "question {} has no options", question + 1)
            }
            QualityIssue::MissingAnswer { question } => {
                write!(f, "question {} has no answer", question + 1)
            }
            QualityIssue::AnswerOutOfRange { question, answer } => write!(
                f,
                "answer '{}' for question {} does not match any option",
                answer,
                question + 1
            ),
            QualityIssue::ExtraAnswers { count } => {
                write!(f, "{} answer(s) without a matching question", count)
            }
        }
    }
}

/// Collect data-quality defects in a definition. `question` fields are 0-based.
pub fn quality_report(definition: &QuizDefinition) -> Vec<QualityIssue> {
    let mut issues = Vec::new();

    for (index, question) in definition.questions.iter().enumerate() {
        if !question.has_options() {
            issues.push(QualityIssue::NoOptions { question: index });
        }

        match definition.answer_for(index) {
            None => issues.push(QualityIssue::MissingAnswer { question: index }),
            Some(answer) => {
                let in_range =
                    label_index(answer).is_some_and(|option| option < question.options.len());
                if question.has_options() && !in_range {
                    issues.push(QualityIssue::AnswerOutOfRange {
                        question: index,
                        answer: answer.to_string(),
                    });
                }
            }
        }
    }

    let extra = definition
        .answer_key
        .len()
        .saturating_sub(definition.questions.len());
    if extra > 0 {
        issues.push(QualityIssue::ExtraAnswers { count: extra });
    }

    issues
}

/// `"12. rest"` -> `"rest"`.
fn strip_number_marker(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix('.').map(str::trim_start)
}

/// `"B. rest"` -> `"rest"`. Only A through D are option markers.
fn strip_option_marker(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some('A'..='D'), Some('.')) => Some(chars.as_str().trim_start()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
1. Capital of France?
A. Berlin
B. Paris
C. Rome
D. Madrid

2. Largest planet?
A. Mars
B. Venus
C. Jupiter
D. Saturn
";

    #[test]
    fn test_parses_numbered_questions_with_four_options() {
        let questions = parse_questions(SAMPLE);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].prompt, "Capital of France?");
        assert_eq!(questions[0].options, vec!["Berlin", "Paris", "Rome", "Madrid"]);
        assert_eq!(questions[1].prompt, "Largest planet?");
        assert_eq!(questions[1].options.len(), 4);
        assert_eq!(questions[1].options[2], "Jupiter");
    }

    #[test]
    fn test_many_questions_keep_option_order() {
        let text: String = (1..=12)
            .map(|n| format!("{n}. Q{n}\nA. a{n}\nB. b{n}\nC. c{n}\nD. d{n}\n"))
            .collect();
        let questions = parse_questions(&text);
        assert_eq!(questions.len(), 12);
        for (i, question) in questions.iter().enumerate() {
            let n = i + 1;
            assert_eq!(question.prompt, format!("Q{n}"));
            assert_eq!(
                question.options,
                vec![format!("a{n}"), format!("b{n}"), format!("c{n}"), format!("d{n}")]
            );
        }
    }

    #[test]
    fn test_question_without_options_is_kept() {
        let questions = parse_questions("1. Lonely question\n2. Next\nA. yes\n");
        assert_eq!(questions.len(), 2);
        assert!(questions[0].options.is_empty());
        assert_eq!(questions[1].options, vec!["yes"]);
    }

    #[test]
    fn test_unrecognized_lines_are_ignored() {
        let text = "preamble\nA. orphan option\n1.   Prompt\ncontinued prompt\nE. not an option\nb. lower case\nB.tight\n";
        let questions = parse_questions(text);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "Prompt");
        assert_eq!(questions[0].options, vec!["tight"]);
    }

    #[test]
    fn test_markers_must_start_the_line() {
        let questions = parse_questions("  1. indented\n1. real\n  A. indented option\n");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "real");
        assert!(questions[0].options.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_questions("").is_empty());
        assert!(parse_questions("\n  \n").is_empty());
        assert!(parse_answers("").is_empty());
    }

    #[test]
    fn test_parse_answers_strips_numbers() {
        let answers = parse_answers("1. B\n\n2.C\n   \nD\n10.   A  \n");
        assert_eq!(answers, vec!["B", "C", "D", "A"]);
    }

    #[test]
    fn test_parse_answers_keeps_arbitrary_text() {
        let answers = parse_answers("1. Paris\n2. b\n");
        assert_eq!(answers, vec!["Paris", "b"]);
    }

    #[test]
    fn test_question_count_zero_resolves_to_parsed_count() {
        let definition = parse_quiz_definition(SAMPLE, "1. B\n2. C", QuizSettings::default());
        assert_eq!(definition.settings.question_count, 2);
        assert!(definition.settings.show_answers_at_end);

        let settings = QuizSettings {
            question_count: 1,
            random_order: true,
            show_answers_at_end: false,
        };
        let definition = parse_quiz_definition(SAMPLE, "1. B\n2. C", settings);
        assert_eq!(definition.settings, settings);
        assert_eq!(definition.answer_key, vec!["B", "C"]);
    }

    #[test]
    fn test_quality_report() {
        let definition = parse_quiz_definition(
            "1. ok\nA. x\nB. y\n2. bad key\nA. x\n3. empty\n4. unanswered\nA. x\n",
            "1. B\n2. D\n3. A\n",
            QuizSettings::default(),
        );
        let issues = quality_report(&definition);
        assert_eq!(
            issues,
            vec![
                QualityIssue::AnswerOutOfRange {
                    question: 1,
                    answer: "D".to_string()
                },
                QualityIssue::NoOptions { question: 2 },
                QualityIssue::MissingAnswer { question: 3 },
            ]
        );
        assert_eq!(issues[2].to_string(), "question 4 has no answer");
    }

    #[test]
    fn test_quality_report_extra_answers() {
        let definition = parse_quiz_definition("1. q\nA. a\n", "A\nB\nC\n", QuizSettings::default());
        assert_eq!(
            quality_report(&definition),
            vec![QualityIssue::ExtraAnswers { count: 2 }]
        );
    }
}
