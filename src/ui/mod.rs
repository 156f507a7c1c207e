// src/ui/mod.rs

use crate::app::{App, AppState, Page};
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let layout = layout::create_layout(area, app.flashes.messages.len() as u16);

    widgets::nav::render_nav(frame, app, layout.nav);

    match app.page {
        Page::Home => widgets::home::render_home(frame, app, layout.body),
        Page::ScanLink | Page::ScanFile | Page::ScanImage => {
            widgets::scan_page::render_scan_page(frame, app, layout.body)
        }
        Page::Register => widgets::register::render_register(frame, app, layout.body),
        Page::Contact => widgets::contact::render_contact(frame, app, layout.body),
    }

    widgets::flash::render_flashes(frame, app, layout.flash);
    widgets::footer::render_footer(frame, app, layout.footer);

    if let AppState::Disclaimer = app.state {
        widgets::disclaimer_popup::render_disclaimer_popup(frame, area);
    }
}
