use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0]);
    render_notice(frame, chunks[1], app.notice());
    render_quiz_list(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ MASTER",
            Style::default().fg(Color::Cyan).bold(),
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

fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    if let Some(notice) = notice {
        let widget = Paragraph::new(notice)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .fg(Color::Red)
            .bold();
        frame.render_widget(widget, area);
    }
}

fn render_quiz_list(frame: &mut Frame, area: Rect, app: &App) {
    if app.library().is_empty() {
        let widget = Paragraph::new("No quizzes available. Create one to get started!")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
        frame.render_widget(widget, area);
        return;
    }

    let lines: Vec<Line> = app
        .library()
        .iter()
        .enumerate()
        .map(|(index, (title, quiz))| {
            let is_selected = index == app.home_selected();
            let style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { ">" } else { " " };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(title.as_str(), style),
                Span::styled(
                    format!("  {} questions", quiz.questions.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k select  ·  enter start  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
