// src/ui/widgets/home.rs

use crate::app::{App, Section, TIP_COUNT};
use crate::ui::layout::split_columns;
use rust_i18n::t;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

/// Renders the landing page: a section list on the left and the highlighted
/// section on the right.
pub fn render_home(frame: &mut Frame, app: &App, area: Rect) {
    let (menu_area, content_area) = split_columns(area, 30);

    let items: Vec<ListItem> = Section::iter().map(|s| ListItem::new(s.title())).collect();
    let selected = Section::iter().position(|s| s == app.home.section);
    let mut state = ListState::default().with_selected(selected);
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(t!("home.menu_title").to_string()))
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, menu_area, &mut state);

    let block = Block::default().borders(Borders::ALL).title(app.home.section.title());
    let text = match app.home.section {
        Section::Overview => overview_text(),
        Section::SecurityTips => tip_text(app.home.carousel.current),
        Section::QuickActions => actions_text(),
    };
    let content = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(content, content_area);
}

fn overview_text() -> Text<'static> {
    Text::from(vec![
        Line::from(t!("home.overview_title").to_string().bold().cyan()),
        Line::from(""),
        Line::from(t!("home.overview_body").to_string()),
        Line::from(""),
        Line::from(t!("home.overview_demo").to_string().italic().dark_gray()),
    ])
}

fn tip_text(current: usize) -> Text<'static> {
    let key = format!("tips.{}", current % TIP_COUNT);
    let dots: String = (0..TIP_COUNT).map(|i| if i == current { '●' } else { '○' }).collect();
    Text::from(vec![
        Line::from(""),
        Line::from(t!(key.as_str()).to_string()).alignment(Alignment::Center),
        Line::from(""),
        Line::from(dots.cyan()).alignment(Alignment::Center),
        Line::from(
            t!("home.tip_counter", current = current + 1, total = TIP_COUNT).to_string().dark_gray(),
        )
        .alignment(Alignment::Center),
    ])
}

fn actions_text() -> Text<'static> {
    let action = |key: &'static str, label: String| {
        Line::from(vec![
            Span::styled(format!(" [{}] ", key), Style::default().fg(Color::Yellow).bold()),
            Span::raw(label),
        ])
    };
    Text::from(vec![
        Line::from(""),
        action("1", t!("home.actions.scan_link").to_string()),
        action("2", t!("home.actions.scan_file").to_string()),
        action("3", t!("home.actions.scan_image").to_string()),
    ])
}
