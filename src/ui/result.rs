use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::session::{QuestionOutcome, QuizSession};

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App, session: &QuizSession) {
    let score = session.score();
    let total = session.total_questions();
    let percentage = calculate_percentage(score, total);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], score, total, percentage);
    render_question_breakdown(frame, chunks[2], &session.breakdown(), app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn calculate_percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, score: usize, total: usize, percentage: f64) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("You scored {} out of {}  ({:.0}%)", score, total, percentage),
            Style::default().fg(grade_color(percentage)).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(
    frame: &mut Frame,
    area: Rect,
    outcomes: &[QuestionOutcome<'_>],
    scroll: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(outcomes.len() * 4);

    for (index, outcome) in outcomes.iter().enumerate() {
        let (symbol, color) = if outcome.is_correct {
            ("+", Color::Green)
        } else {
            ("-", Color::Red)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:2}. ", index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(truncate_question(outcome.prompt), Style::default().fg(Color::Gray)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("      Your answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(describe_answer(outcome), Style::default().fg(color).bold()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("      Correct answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                outcome.correct.to_string(),
                Style::default().fg(Color::Green).bold(),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll(((scroll * 4) as u16, 0));
    frame.render_widget(widget, area);
}

fn describe_answer(outcome: &QuestionOutcome<'_>) -> String {
    match (outcome.answer, outcome.answer_text) {
        (Some(label), Some(text)) => format!("{}. {}", label, text),
        (Some(label), None) => label.to_string(),
        (None, _) => "Not answered".to_string(),
    }
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  esc home  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::CorrectOption;

    #[test]
    fn test_percentage_and_grade() {
        assert_eq!(calculate_percentage(0, 0), 0.0);
        assert_eq!(calculate_percentage(3, 4), 75.0);
        assert_eq!(grade_color(100.0), Color::Green);
        assert_eq!(grade_color(49.9), Color::Red);
    }

    #[test]
    fn test_describe_answer() {
        let mut outcome = QuestionOutcome {
            prompt: "Sky?",
            answer: Some("A"),
            answer_text: Some("blue"),
            correct: CorrectOption::NotAvailable,
            is_correct: false,
        };
        assert_eq!(describe_answer(&outcome), "A. blue");
        outcome.answer_text = None;
        assert_eq!(describe_answer(&outcome), "A");
        outcome.answer = None;
        assert_eq!(describe_answer(&outcome), "Not answered");
    }

    #[test]
    fn test_truncate_question() {
        let long = "x".repeat(60);
        assert_eq!(truncate_question(&long).chars().count(), QUESTION_PREVIEW_LENGTH + 3);
        assert_eq!(truncate_question("short"), "short");
    }
}
