use quiz_master::{
    find_quiz, parse_quiz_definition, save_quiz, CorrectOption, MemoryStore, QuizError,
    QuizSession, QuizSettings, QuizStore, SessionEvent,
};

const QUESTIONS: &str = "\
1. Which keyword declares an immutable binding?
A. let
B. mut
C. var
D. const fn

2. Which type owns a heap-allocated string?
A. &str
B. String
C. char
D. [u8]

3. What does `?` do on an Err value?
A. Panics
B. Ignores it
C. Returns it early
D. Logs it
";

const ANSWERS: &str = "1. A\n2. B\n";

#[test]
fn test_author_save_and_take() {
    let mut store = MemoryStore::new();
    let definition = parse_quiz_definition(QUESTIONS, ANSWERS, QuizSettings::default());
    assert_eq!(definition.settings.question_count, 3);
    save_quiz(&mut store, "Rust basics", definition).unwrap();

    let library = store.load_all().unwrap();
    let quiz = find_quiz(&library, "Rust basics").unwrap();
    let mut session = QuizSession::start(quiz).unwrap();

    assert_eq!(session.submit_answer("A"), SessionEvent::AdvancedToNext);
    assert_eq!(session.submit_answer("B"), SessionEvent::AdvancedToNext);
    assert_eq!(session.submit_answer("C"), SessionEvent::QuizComplete);

    assert!(session.is_final_summary());
    assert_eq!(session.score(), 2);
    assert_eq!(session.correct_option(0), CorrectOption::Text("let"));
    assert_eq!(session.correct_option(2), CorrectOption::NotAvailable);

    let breakdown = session.breakdown();
    assert_eq!(breakdown.len(), 3);
    assert!(!breakdown[2].is_correct);
    assert_eq!(breakdown[2].answer_text, Some("Returns it early"));
}

#[test]
fn test_unknown_title_is_not_found() {
    let store = MemoryStore::new();
    let library = store.load_all().unwrap();
    assert!(matches!(
        find_quiz(&library, "nope"),
        Err(QuizError::QuizNotFound(_))
    ));
}

#[test]
fn test_quiz_without_questions_cannot_start() {
    let definition = parse_quiz_definition("just some notes\n", "1. A\n", QuizSettings::default());
    assert!(definition.questions.is_empty());
    assert_eq!(definition.settings.question_count, 0);

    let err = QuizSession::start(&definition).unwrap_err();
    assert_eq!(QuizError::from(err).to_string(), "this quiz has no questions to answer");
}
