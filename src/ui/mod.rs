mod home;
mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match (app.state, app.session()) {
        (AppState::Quiz, Some(session)) => quiz::render(frame, area, app, session),
        (AppState::Result, Some(session)) => result::render(frame, area, app, session),
        _ => home::render(frame, area, app),
    }
}
