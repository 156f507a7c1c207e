// src/ui/widgets/contact.rs

use crate::app::App;
use crate::core::contact::{ContactError, ContactField, ContactConfirmation};
use crate::ui::widgets::input::render_input;
use rust_i18n::t;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

pub fn field_label(field: ContactField) -> String {
    match field {
        ContactField::Name => t!("contact.fields.name"),
        ContactField::Email => t!("contact.fields.email"),
        ContactField::Subject => t!("contact.fields.subject"),
        ContactField::Message => t!("contact.fields.message"),
    }
    .to_string()
}

pub fn render_contact(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(confirmation) = &app.contact.confirmation {
        render_confirmation(frame, confirmation, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let focused = app.contact.focused();
    for (i, field) in ContactField::iter().enumerate() {
        let label = field_label(field);
        let value = app.contact.message.field(field);
        render_input(frame, &label, value, false, field == focused, chunks[i]);
    }

    let status = match &app.contact.error {
        Some(ContactError::Required(field)) => Line::from(Span::styled(
            t!("contact.errors.required", field = field_label(*field)).to_string(),
            Style::default().fg(Color::Red),
        )),
        Some(ContactError::InvalidEmail(email)) => Line::from(Span::styled(
            t!("contact.errors.invalid_email", email = email.as_str()).to_string(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(t!("contact.hint").to_string().dark_gray()),
    };
    frame.render_widget(Paragraph::new(status), chunks[4]);
}

fn render_confirmation(frame: &mut Frame, confirmation: &ContactConfirmation, area: Rect) {
    let text = Text::from(vec![
        Line::from(format!("✓ {}", t!("contact.sent_title")).green().bold()),
        Line::from(""),
        Line::from(
            t!(
                "contact.sent_body",
                name = confirmation.name.as_str(),
                subject = confirmation.subject.as_str()
            )
            .to_string(),
        ),
        Line::from(t!("contact.sent_confirmation", email = confirmation.email.as_str()).to_string()),
        Line::from(""),
        Line::from(t!("contact.not_transmitted").to_string().italic().dark_gray()),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(t!("pages.contact").to_string());
    frame.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: true }), area);
}
