// src/ui/widgets/disclaimer_popup.rs

use crate::ui::layout::centered_rect;
use rust_i18n::t;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    text::Line,
};

/// Renders the startup disclaimer on top of the UI.
///
/// The scan pages only match names and addresses against fixed keyword
/// lists. This popup says so before the user sees any verdict.
pub fn render_disclaimer_popup(frame: &mut Frame, area: Rect) {
    let disclaimer_text = Text::from(vec![
        Line::from(t!("disclaimer.heading").to_string().bold().yellow()),
        Line::from(""),
        Line::from(t!("disclaimer.demo").to_string()),
        Line::from(""),
        Line::from(t!("disclaimer.not_a_product").to_string()),
        Line::from(""),
        Line::from(t!("disclaimer.privacy").to_string()),
        Line::from(""),
        Line::from(vec![
            t!("disclaimer.press").to_string().bold(),
            " Enter ".bold().yellow(),
            t!("disclaimer.to_continue").to_string().bold(),
        ]),
    ]);

    let block = Block::default()
        .title(t!("disclaimer.title").to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let popup_area = centered_rect(70, 60, area);

    let popup = Paragraph::new(disclaimer_text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    // Clear first so the page underneath does not bleed through.
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}
