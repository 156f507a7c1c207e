// src/ui/widgets/nav.rs

use crate::app::{App, Page};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};
use strum::IntoEnumIterator;

/// Renders the page navigation. On narrow terminals only the active page is
/// shown behind a menu marker until the menu is expanded.
pub fn render_nav(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" GS-Oasis ");

    if !app.nav.shows_all() {
        let line = Line::from(vec![
            Span::styled("☰ ", Style::default().fg(Color::Yellow)),
            Span::styled(app.page.title(), Style::default().bold()),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let titles: Vec<Line> = Page::iter().map(|p| Line::from(p.title())).collect();
    let selected = Page::iter().position(|p| p == app.page).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(block)
        .select(selected)
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::UNDERLINED))
        .divider("|");
    frame.render_widget(tabs, area);
}
