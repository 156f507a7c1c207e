// src/ui/widgets/footer.rs

use crate::app::{App, AppState, Page};
use rust_i18n::t;
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &str) -> Span<'static> {
    Span::styled(label.to_string(), Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer, which lists the keys that work on the current page.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    if let AppState::Disclaimer = app.state {
        let line = Line::from(vec![key("Enter"), Span::raw(format!(" {}", t!("footer.acknowledge")))]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        return;
    }

    let page_hint = match app.page {
        Page::Home => t!("footer.home"),
        Page::ScanLink => t!("footer.scan_link"),
        Page::ScanFile | Page::ScanImage => t!("footer.scan_file"),
        Page::Register => t!("footer.register"),
        Page::Contact if app.contact.confirmation.is_some() => t!("footer.contact_sent"),
        Page::Contact => t!("footer.contact"),
    };

    let mut spans = vec![
        key("Tab"),
        Span::raw(format!(" {}  ", t!("footer.next_page"))),
    ];
    if app.nav.compact {
        spans.push(key("Ctrl+N"));
        spans.push(Span::raw(format!(" {}  ", t!("footer.menu"))));
    }
    spans.push(Span::raw(format!("{}  ", page_hint)));
    spans.push(key("Esc"));
    spans.push(Span::raw(format!(" {}", t!("footer.quit"))));

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
