// src/ui/widgets/input.rs
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};

/// Renders a single-line text input. `masked` hides the characters, and the
/// cursor is only placed when the input has focus.
pub fn render_input(frame: &mut Frame, title: &str, value: &str, masked: bool, focused: bool, area: Rect) {
    let shown = if masked { "•".repeat(value.chars().count()) } else { value.to_string() };
    let border_style = if focused { Style::default().fg(Color::Yellow) } else { Style::default() };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string());
    let input_paragraph = Paragraph::new(shown.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    if focused {
        let offset = (value.chars().count() as u16).min(area.width.saturating_sub(2));
        frame.set_cursor_position((area.x + offset + 1, area.y + 1));
    }
}
