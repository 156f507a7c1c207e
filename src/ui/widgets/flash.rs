// src/ui/widgets/flash.rs

use crate::app::{App, FlashLevel};
use ratatui::{prelude::*, widgets::Paragraph};

/// Renders one row per live flash message, oldest first.
pub fn render_flashes(frame: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let lines: Vec<Line> = app
        .flashes
        .messages
        .iter()
        .map(|flash| {
            let (icon, color) = match flash.level {
                FlashLevel::Success => ("✓", Color::Green),
                FlashLevel::Info => ("•", Color::Cyan),
                FlashLevel::Warning => ("!", Color::Yellow),
                FlashLevel::Error => ("✗", Color::Red),
            };
            Line::from(vec![
                Span::styled(flash.created_at.format("%H:%M:%S ").to_string(), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{} ", icon), Style::default().fg(color).bold()),
                Span::styled(flash.text.clone(), Style::default().fg(color)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
