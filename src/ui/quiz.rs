use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::option_label;
use crate::session::QuizSession;

pub fn render(frame: &mut Frame, area: Rect, app: &App, session: &QuizSession) {
    let show_feedback = session.results_revealed() && !session.settings().show_answers_at_end;

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(if show_feedback { 4 } else { 0 }),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app.title().unwrap_or_default(), session);
    render_question_text(frame, chunks[1], &session.current_question().prompt);
    render_options(frame, chunks[2], session, app.selected_option());
    if show_feedback {
        render_feedback(frame, chunks[3], session);
    }
    render_controls(frame, chunks[4], session);
}

fn render_progress(frame: &mut Frame, area: Rect, title: &str, session: &QuizSession) {
    let progress = format!(
        "Question {} of {}",
        session.current_question_number(),
        session.total_questions()
    );
    let line = Line::from(vec![
        Span::styled(title, Style::default().fg(Color::Cyan).bold()),
        Span::styled(format!("  ·  {}", progress), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, session: &QuizSession, selected: usize) {
    let question = session.current_question();
    if question.options.is_empty() {
        let widget = Paragraph::new("This question has no options. Use h/l to move on.")
            .fg(Color::Yellow);
        frame.render_widget(widget, area);
        return;
    }

    let recorded = session.answer(session.current_index());
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let label = option_label(index).unwrap_or("?");
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let chosen = if recorded == Some(label) { " *" } else { "" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
            Span::styled(chosen, Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let index = session.current_index();
    let verdict = if session.is_correct(index) {
        Span::styled("Correct!", Style::default().fg(Color::Green).bold())
    } else {
        Span::styled("Incorrect", Style::default().fg(Color::Red).bold())
    };

    let content = vec![
        Line::from(verdict),
        Line::from(vec![
            Span::styled("Correct answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                session.correct_option(index).to_string(),
                Style::default().fg(Color::White).bold(),
            ),
        ]),
    ];

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let controls = if session.settings().show_answers_at_end {
        "j/k choose  ·  enter answer  ·  h/l prev/next  ·  esc home  ·  q quit"
    } else {
        "j/k choose  ·  enter answer  ·  h/l prev/next  ·  f finish  ·  esc home  ·  q quit"
    };
    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
