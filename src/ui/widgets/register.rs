// src/ui/widgets/register.rs

use crate::app::App;
use crate::core::password::PasswordRejection;
use crate::ui::widgets::input::render_input;
use rust_i18n::t;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render_register(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let title = t!("register.password").to_string();
    render_input(frame, &title, &app.register.password, true, true, chunks[0]);

    let outcome_line = match &app.register.outcome {
        None => Line::from(t!("register.hint").to_string().dark_gray()),
        Some(Ok(())) => Line::from(Span::styled(
            format!("✓ {}", t!("register.accepted")),
            Style::default().fg(Color::Green).bold(),
        )),
        Some(Err(reason)) => Line::from(Span::styled(
            format!("✗ {}", rejection_text(*reason)),
            Style::default().fg(Color::Red),
        )),
    };
    frame.render_widget(Paragraph::new(outcome_line).wrap(Wrap { trim: true }), chunks[1]);

    let rules = Text::from(vec![
        Line::from(format!("• {}", t!("register.rules.length"))),
        Line::from(format!("• {}", t!("register.rules.digits"))),
        Line::from(format!("• {}", t!("register.rules.symbol"))),
        Line::from(format!("• {}", t!("register.rules.charset"))),
    ]);
    let block = Block::default().borders(Borders::ALL).title(t!("register.rules_title").to_string());
    frame.render_widget(Paragraph::new(rules).block(block), chunks[2]);
}

fn rejection_text(reason: PasswordRejection) -> String {
    match reason {
        PasswordRejection::ForbiddenCharacter => t!("register.rejected.charset"),
        PasswordRejection::TooShort => t!("register.rejected.length"),
        PasswordRejection::NotEnoughDigits => t!("register.rejected.digits"),
        PasswordRejection::MissingSymbol => t!("register.rejected.symbol"),
    }
    .to_string()
}
