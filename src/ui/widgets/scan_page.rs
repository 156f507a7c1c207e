// src/ui/widgets/scan_page.rs

use crate::app::{App, Page};
use crate::core::models::SubjectKind;
use crate::ui::widgets::{drop_zone::render_drop_zone, input::render_input, verdict_view::render_scan_panel};
use rust_i18n::t;
use ratatui::prelude::*;

/// Renders the link, file or image scanner, depending on the active page.
pub fn render_scan_page(frame: &mut Frame, app: &App, area: Rect) {
    let input_height = if app.page == Page::ScanLink { 3 } else { 4 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(input_height), Constraint::Min(0)])
        .split(area);

    let panel = match app.page {
        Page::ScanFile => {
            render_drop_zone(frame, &app.file.zone, SubjectKind::File, true, chunks[0]);
            &app.file.panel
        }
        Page::ScanImage => {
            render_drop_zone(frame, &app.image.zone, SubjectKind::Image, true, chunks[0]);
            &app.image.panel
        }
        _ => {
            let title = t!("scan.url_input_title").to_string();
            render_input(frame, &title, &app.url.input, false, true, chunks[0]);
            &app.url.panel
        }
    };

    render_scan_panel(frame, panel, app.spinner_frame, chunks[1]);
}
