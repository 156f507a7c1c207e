// src/main.rs

use color_eyre::eyre::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info};

mod app;
mod config;
mod core;
mod logging;
mod ui;

rust_i18n::i18n!("locales", fallback = "en");

use app::{App, AppState, Page};
use config::Settings;

fn main() -> Result<()> {
    color_eyre::install()?;
    // Logging reads the local UTC offset, which only works before other
    // threads exist, so the runtime is built afterwards.
    let log_path = logging::initialize_logging()?;
    let settings = Settings::load()?;
    rust_i18n::set_locale(&settings.locale);
    info!(log = %log_path.display(), locale = %settings.locale, "Starting oasis-scan.");

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(settings));
    if let Err(e) = &result {
        error!(error = %e, "oasis-scan exited with an error.");
    }
    result
}

fn restore_terminal() -> Result<()> {
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableBracketedPaste)?;
    disable_raw_mode()?;
    Ok(())
}

async fn run(settings: Settings) -> Result<()> {
    // --- Setup ---
    let panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        panic_hook(info);
    }));

    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let (tx, mut rx) = mpsc::channel(8);
    let mut app = App::new(settings, tx, Instant::now());
    app.nav.on_resize(terminal.size()?.width);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app)?;
        }

        while let Ok(outcome) = rx.try_recv() {
            app.apply_outcome(outcome, Instant::now());
        }
        app.on_tick(Instant::now());
    }

    // --- Restore Terminal ---
    restore_terminal()?;
    info!("oasis-scan closed.");
    Ok(())
}

fn handle_events(app: &mut App) -> Result<()> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => handle_paste(app, &text),
        Event::Resize(width, _) => app.nav.on_resize(width),
        _ => {}
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.quit(),
            KeyCode::Char('n') => app.nav.toggle(),
            _ => {}
        }
        return;
    }

    if let AppState::Disclaimer = app.state {
        match key.code {
            KeyCode::Enter => app.acknowledge_disclaimer(),
            KeyCode::Esc => app.quit(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab => app.select_page(app.page.next()),
        KeyCode::BackTab => app.select_page(app.page.previous()),
        code => match app.page {
            Page::Home => handle_home_input(app, code),
            Page::ScanLink | Page::ScanFile | Page::ScanImage => handle_scan_input(app, code),
            Page::Register => handle_register_input(app, code),
            Page::Contact => handle_contact_input(app, code),
        },
    }
}

fn handle_paste(app: &mut App, text: &str) {
    if let AppState::Disclaimer = app.state {
        return;
    }
    match app.page {
        Page::ScanFile | Page::ScanImage => app.drop_into_zone(text, Instant::now()),
        Page::ScanLink => app.url.input.push_str(text.trim()),
        Page::Register => app.register.password.push_str(text.trim()),
        Page::Contact if app.contact.confirmation.is_none() => {
            let field = app.contact.focused();
            app.contact.message.field_mut(field).push_str(text);
        }
        _ => {}
    }
}

fn handle_home_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Up => app.home.previous_section(),
        KeyCode::Down => app.home.next_section(),
        KeyCode::Char('1') => app.select_page(Page::ScanLink),
        KeyCode::Char('2') => app.select_page(Page::ScanFile),
        KeyCode::Char('3') => app.select_page(Page::ScanImage),
        _ => {}
    }
}

/// Editing for the single-line inputs of the scan pages; Enter submits.
fn handle_scan_input(app: &mut App, key_code: KeyCode) {
    let page = app.page;
    let input = match page {
        Page::ScanLink => &mut app.url.input,
        Page::ScanFile => &mut app.file.zone.input,
        Page::ScanImage => &mut app.image.zone.input,
        _ => return,
    };
    match key_code {
        KeyCode::Char(c) => input.push(c),
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Delete => match page {
            Page::ScanFile => app.file.zone.clear(),
            Page::ScanImage => app.image.zone.clear(),
            _ => input.clear(),
        },
        KeyCode::Enter => match page {
            Page::ScanLink => app.scan_url(),
            Page::ScanFile => app.scan_file(),
            Page::ScanImage => app.scan_image(),
            _ => {}
        },
        _ => {}
    }
}

fn handle_register_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char(c) => app.register.password.push(c),
        KeyCode::Backspace => {
            app.register.password.pop();
        }
        KeyCode::Enter => app.submit_registration(Instant::now()),
        _ => {}
    }
}

fn handle_contact_input(app: &mut App, key_code: KeyCode) {
    if app.contact.confirmation.is_some() {
        if key_code == KeyCode::Enter {
            app.reset_contact();
        }
        return;
    }
    let field = app.contact.focused();
    match key_code {
        KeyCode::Up => app.contact.focus = Some(field.previous()),
        KeyCode::Down => app.contact.focus = Some(field.next()),
        KeyCode::Char(c) => app.contact.message.field_mut(field).push(c),
        KeyCode::Backspace => {
            app.contact.message.field_mut(field).pop();
        }
        KeyCode::Enter => app.submit_contact(Instant::now()),
        _ => {}
    }
}
