// src/ui/widgets/drop_zone.rs

use crate::app::DropZone;
use crate::core::media::format_file_size;
use crate::core::models::SubjectKind;
use rust_i18n::t;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Renders a drop zone: the path being typed or dropped, and below it the
/// current selection or the reason nothing is selected.
pub fn render_drop_zone(frame: &mut Frame, zone: &DropZone, kind: SubjectKind, focused: bool, area: Rect) {
    let (title, empty) = match kind {
        SubjectKind::Image => (t!("scan.image_zone_title"), t!("scan.no_image_selected")),
        _ => (t!("scan.file_zone_title"), t!("scan.no_file_selected")),
    };

    let border_style = if zone.has_file() {
        Style::default().fg(Color::Green)
    } else if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(border_style)
        .title(title.to_string());

    let path_line = if zone.input.is_empty() {
        Line::from(t!("scan.drop_hint").to_string().dark_gray())
    } else {
        Line::from(Span::styled(zone.input.clone(), Style::default().fg(Color::Yellow)))
    };

    let status_line = match (&zone.selected, &zone.error) {
        (Some(file), _) => Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green).bold()),
            Span::styled(file.name.clone(), Style::default().bold()),
            Span::raw(format!("  {}  {}", format_file_size(file.size_bytes), file.mime_type)),
        ]),
        (None, Some(error)) => Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red))),
        (None, None) => Line::from(empty.to_string().dark_gray()),
    };

    frame.render_widget(Paragraph::new(vec![path_line, status_line]).block(block), area);

    if focused {
        let offset = (zone.input.chars().count() as u16).min(area.width.saturating_sub(2));
        frame.set_cursor_position((area.x + offset + 1, area.y + 1));
    }
}
