// src/app.rs

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use rust_i18n::t;
use strum::{Display, EnumIter, IntoEnumIterator};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::core::classifier;
use crate::core::contact::{ContactConfirmation, ContactError, ContactField, ContactMessage};
use crate::core::media::{normalize_dropped_path, SelectedFile};
use crate::core::models::{ScanError, ScanSubject, SubjectKind, Verdict};
use crate::core::password::{check_password, PasswordRejection};
use crate::core::scanner::{spawn_scan, ScanOutcome};
use crate::core::task::DelayedTask;

pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Number of tips under `tips.*` in the locale files.
pub const TIP_COUNT: usize = 6;

pub enum AppState {
    /// The startup disclaimer is on screen and swallows input.
    Disclaimer,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Page {
    Home,
    ScanLink,
    ScanFile,
    ScanImage,
    Register,
    Contact,
}

impl Page {
    pub fn title(self) -> String {
        match self {
            Page::Home => t!("pages.home"),
            Page::ScanLink => t!("pages.scan_link"),
            Page::ScanFile => t!("pages.scan_file"),
            Page::ScanImage => t!("pages.scan_image"),
            Page::Register => t!("pages.register"),
            Page::Contact => t!("pages.contact"),
        }
        .to_string()
    }

    pub fn next(self) -> Self {
        let all: Vec<_> = Self::iter().collect();
        let idx = all.iter().position(|p| *p == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all: Vec<_> = Self::iter().collect();
        let idx = all.iter().position(|p| *p == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

// --- Scan panels ---

/// Lifecycle of one scan panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    /// Input was rejected before scanning; never a verdict.
    Warning(ScanError),
    /// The artificial delay is running. Holds the subject label.
    Pending(String),
    Resolved(Verdict),
}

/// Owns the phase of one scan page and the task currently resolving it.
pub struct ScanPanel {
    pub kind: SubjectKind,
    pub phase: ScanPhase,
    ticket: u64,
    task: Option<DelayedTask>,
}

impl ScanPanel {
    pub fn new(kind: SubjectKind) -> Self {
        Self { kind, phase: ScanPhase::Idle, ticket: 0, task: None }
    }

    /// Starts a scan, or shows a warning straight away when the subject is
    /// missing or invalid. A scan already in flight is cancelled.
    pub fn submit(
        &mut self,
        subject: Result<ScanSubject, ScanError>,
        delay: Duration,
        tx: &mpsc::Sender<ScanOutcome>,
    ) {
        self.cancel();
        let subject = match subject.and_then(|s| classifier::validate(&s).map(|_| s)) {
            Ok(subject) => subject,
            Err(e) => {
                warn!(kind = %self.kind, error = %e, "Scan input rejected.");
                self.phase = ScanPhase::Warning(e);
                return;
            }
        };

        self.ticket += 1;
        self.phase = ScanPhase::Pending(subject_label(&subject));
        self.task = Some(spawn_scan(subject, self.ticket, delay, tx.clone()));
    }

    /// Applies an outcome if it belongs to the current submission.
    /// Returns `false` for stale outcomes.
    pub fn resolve(&mut self, outcome: ScanOutcome) -> bool {
        if outcome.ticket != self.ticket || !matches!(self.phase, ScanPhase::Pending(_)) {
            debug!(kind = %self.kind, stale = outcome.ticket, current = self.ticket, "Ignoring stale scan outcome.");
            return false;
        }
        self.task = None;
        self.phase = match outcome.result {
            Ok(verdict) => ScanPhase::Resolved(verdict),
            Err(e) => ScanPhase::Warning(e),
        };
        true
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take().filter(|task| !task.is_finished()) {
            task.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, ScanPhase::Pending(_))
    }
}

fn subject_label(subject: &ScanSubject) -> String {
    match subject {
        ScanSubject::Url { text } => {
            let trimmed = text.trim();
            let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
                trimmed.to_string()
            } else {
                format!("https://{}", trimmed)
            };
            url::Url::parse(&with_scheme)
                .ok()
                .and_then(|u| u.host_str().map(String::from))
                .unwrap_or_else(|| trimmed.to_string())
        }
        ScanSubject::File { name, .. } | ScanSubject::Image { name, .. } => name.clone(),
    }
}

/// The link scanner page.
pub struct UrlPage {
    pub input: String,
    pub panel: ScanPanel,
}

/// A path input that accepts typed or dropped files.
#[derive(Default)]
pub struct DropZone {
    pub input: String,
    pub selected: Option<SelectedFile>,
    pub error: Option<String>,
}

impl DropZone {
    /// Resolves the current input into a selection.
    pub fn select(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        let path = normalize_dropped_path(&self.input);
        match SelectedFile::from_path(&path) {
            Ok(file) => {
                self.input = path.display().to_string();
                self.selected = Some(file);
                self.error = None;
            }
            Err(e) => {
                self.selected = None;
                self.error = Some(e.to_string());
            }
        }
    }

    /// A dropped file arrives as pasted text.
    pub fn drop_text(&mut self, text: &str) {
        self.input = text.trim().to_string();
        self.select();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_file(&self) -> bool {
        self.selected.is_some()
    }

    pub fn subject(&self, kind: SubjectKind) -> Result<ScanSubject, ScanError> {
        let file = self.selected.as_ref().ok_or(ScanError::MissingInput(kind))?;
        Ok(match kind {
            SubjectKind::Image => ScanSubject::image(&file.name, &file.mime_type, file.size_bytes),
            _ => ScanSubject::file(&file.name, &file.mime_type, file.size_bytes),
        })
    }
}

/// The file and image scanner pages.
pub struct FilePage {
    pub zone: DropZone,
    pub panel: ScanPanel,
}

impl FilePage {
    fn new(kind: SubjectKind) -> Self {
        Self { zone: DropZone::default(), panel: ScanPanel::new(kind) }
    }
}

// --- Forms ---

#[derive(Default)]
pub struct RegisterPage {
    pub password: String,
    pub outcome: Option<Result<(), PasswordRejection>>,
}

#[derive(Default)]
pub struct ContactPage {
    pub message: ContactMessage,
    pub focus: Option<ContactField>,
    pub error: Option<ContactError>,
    pub confirmation: Option<ContactConfirmation>,
}

impl ContactPage {
    pub fn focused(&self) -> ContactField {
        self.focus.unwrap_or(ContactField::Name)
    }
}

// --- Home ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Section {
    Overview,
    SecurityTips,
    QuickActions,
}

impl Section {
    pub fn title(self) -> String {
        match self {
            Section::Overview => t!("home.sections.overview"),
            Section::SecurityTips => t!("home.sections.security_tips"),
            Section::QuickActions => t!("home.sections.quick_actions"),
        }
        .to_string()
    }
}

/// Rotating security tips; the active index wraps around.
pub struct TipsCarousel {
    pub current: usize,
    count: usize,
    interval: Duration,
    last_rotation: Instant,
}

impl TipsCarousel {
    pub fn new(count: usize, interval: Duration, now: Instant) -> Self {
        Self { current: 0, count, interval, last_rotation: now }
    }

    /// Advances one tip per elapsed interval.
    pub fn tick(&mut self, now: Instant) {
        if self.count == 0 || self.interval.is_zero() {
            return;
        }
        while now.duration_since(self.last_rotation) >= self.interval {
            self.current = (self.current + 1) % self.count;
            self.last_rotation += self.interval;
        }
    }
}

pub struct HomePage {
    pub section: Section,
    pub carousel: TipsCarousel,
}

impl HomePage {
    pub fn next_section(&mut self) {
        let all: Vec<_> = Section::iter().collect();
        let idx = all.iter().position(|s| *s == self.section).unwrap_or(0);
        self.section = all[(idx + 1) % all.len()];
    }

    pub fn previous_section(&mut self) {
        let all: Vec<_> = Section::iter().collect();
        let idx = all.iter().position(|s| *s == self.section).unwrap_or(0);
        self.section = all[(idx + all.len() - 1) % all.len()];
    }
}

// --- Flash messages ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Flash {
    pub level: FlashLevel,
    pub text: String,
    pub created_at: DateTime<Local>,
    expires_at: Instant,
}

/// Short-lived status messages. Each expires on its own after the TTL.
pub struct FlashBoard {
    pub messages: VecDeque<Flash>,
    ttl: Duration,
}

impl FlashBoard {
    pub const MAX_VISIBLE: usize = 3;

    pub fn new(ttl: Duration) -> Self {
        Self { messages: VecDeque::new(), ttl }
    }

    pub fn push(&mut self, level: FlashLevel, text: impl Into<String>, now: Instant) {
        let text = text.into();
        debug!(?level, %text, "Flash message.");
        self.messages.push_back(Flash { level, text, created_at: Local::now(), expires_at: now + self.ttl });
        while self.messages.len() > Self::MAX_VISIBLE {
            self.messages.pop_front();
        }
    }

    pub fn prune(&mut self, now: Instant) {
        self.messages.retain(|f| f.expires_at > now);
    }
}

// --- Nav ---

/// Page navigation; collapses behind a menu toggle on narrow terminals.
pub struct NavMenu {
    pub compact: bool,
    pub expanded: bool,
    compact_width: u16,
}

impl NavMenu {
    pub fn new(compact_width: u16) -> Self {
        Self { compact: false, expanded: false, compact_width }
    }

    pub fn on_resize(&mut self, width: u16) {
        let compact = width < self.compact_width;
        if compact != self.compact {
            debug!(width, compact, "Nav layout changed.");
            self.compact = compact;
            self.expanded = false;
        }
    }

    pub fn toggle(&mut self) {
        if self.compact {
            self.expanded = !self.expanded;
        }
    }

    /// Whether every page title is shown.
    pub fn shows_all(&self) -> bool {
        !self.compact || self.expanded
    }
}

// --- Application ---

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub page: Page,
    pub settings: Settings,
    pub home: HomePage,
    pub url: UrlPage,
    pub file: FilePage,
    pub image: FilePage,
    pub register: RegisterPage,
    pub contact: ContactPage,
    pub flashes: FlashBoard,
    pub nav: NavMenu,
    pub spinner_frame: usize,
    tx: mpsc::Sender<ScanOutcome>,
}

impl App {
    pub fn new(settings: Settings, tx: mpsc::Sender<ScanOutcome>, now: Instant) -> Self {
        Self {
            should_quit: false,
            state: if settings.show_disclaimer { AppState::Disclaimer } else { AppState::Running },
            page: Page::Home,
            home: HomePage {
                section: Section::Overview,
                carousel: TipsCarousel::new(TIP_COUNT, settings.tip_rotation(), now),
            },
            url: UrlPage { input: String::new(), panel: ScanPanel::new(SubjectKind::Url) },
            file: FilePage::new(SubjectKind::File),
            image: FilePage::new(SubjectKind::Image),
            register: RegisterPage::default(),
            contact: ContactPage::default(),
            flashes: FlashBoard::new(settings.flash_ttl()),
            nav: NavMenu::new(settings.compact_width),
            spinner_frame: 0,
            settings,
            tx,
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.flashes.prune(now);
        self.home.carousel.tick(now);
        if self.any_pending() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn any_pending(&self) -> bool {
        self.url.panel.is_pending() || self.file.panel.is_pending() || self.image.panel.is_pending()
    }

    pub fn acknowledge_disclaimer(&mut self) {
        self.state = AppState::Running;
    }

    pub fn select_page(&mut self, page: Page) {
        if page != self.page {
            debug!(from = %self.page, to = %page, "Switching page.");
            self.page = page;
            self.nav.expanded = false;
        }
    }

    pub fn scan_url(&mut self) {
        let subject = Ok(ScanSubject::url(self.url.input.clone()));
        let delay = self.settings.scan_delay(SubjectKind::Url);
        self.url.panel.submit(subject, delay, &self.tx);
    }

    pub fn scan_file(&mut self) {
        let delay = self.settings.scan_delay(SubjectKind::File);
        let page = &mut self.file;
        page.zone.select();
        page.panel.submit(page.zone.subject(SubjectKind::File), delay, &self.tx);
    }

    pub fn scan_image(&mut self) {
        let delay = self.settings.scan_delay(SubjectKind::Image);
        let page = &mut self.image;
        page.zone.select();
        page.panel.submit(page.zone.subject(SubjectKind::Image), delay, &self.tx);
    }

    /// Drops pasted text into the drop zone of the active scan page.
    pub fn drop_into_zone(&mut self, text: &str, now: Instant) {
        let zone = match self.page {
            Page::ScanFile => &mut self.file.zone,
            Page::ScanImage => &mut self.image.zone,
            _ => return,
        };
        zone.drop_text(text);
        if let Some(error) = zone.error.clone() {
            self.flashes.push(FlashLevel::Warning, error, now);
        }
    }

    /// Routes a finished scan to the panel that started it.
    pub fn apply_outcome(&mut self, outcome: ScanOutcome, now: Instant) {
        let panel = match outcome.kind {
            SubjectKind::Url => &mut self.url.panel,
            SubjectKind::File => &mut self.file.panel,
            SubjectKind::Image => &mut self.image.panel,
        };
        if panel.resolve(outcome) {
            if let ScanPhase::Resolved(verdict) = &panel.phase {
                let text = t!("flash.scan_complete", title = verdict.title.as_str()).to_string();
                self.flashes.push(FlashLevel::Info, text, now);
            }
        }
    }

    pub fn submit_registration(&mut self, now: Instant) {
        let outcome = check_password(&self.register.password);
        match outcome {
            Ok(()) => {
                info!("Registration accepted.");
                self.register.password.clear();
                self.flashes.push(FlashLevel::Success, t!("flash.registration_successful"), now);
            }
            Err(reason) => {
                warn!(%reason, "Registration password rejected.");
                self.flashes.push(FlashLevel::Error, t!("flash.registration_rejected"), now);
            }
        }
        self.register.outcome = Some(outcome);
    }

    pub fn submit_contact(&mut self, now: Instant) {
        match self.contact.message.submit() {
            Ok(confirmation) => {
                info!("Contact message accepted (not transmitted).");
                self.flashes.push(FlashLevel::Success, t!("flash.message_sent"), now);
                self.contact.error = None;
                self.contact.confirmation = Some(confirmation);
            }
            Err(e) => {
                warn!(error = %e, "Contact form rejected.");
                self.contact.error = Some(e);
            }
        }
    }

    pub fn reset_contact(&mut self) {
        self.contact = ContactPage::default();
    }

    pub fn quit(&mut self) {
        self.url.panel.cancel();
        self.file.panel.cancel();
        self.image.panel.cancel();
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{FindingCode, Severity};
    use std::io::Write;

    fn app() -> (App, mpsc::Receiver<ScanOutcome>) {
        let (tx, rx) = mpsc::channel(8);
        (App::new(Settings::instant(), tx, Instant::now()), rx)
    }

    #[tokio::test]
    async fn url_scan_goes_pending_then_resolved() {
        let (mut app, mut rx) = app();
        app.url.input = "http://phishing.example.com/login".into();
        app.scan_url();
        assert_eq!(app.url.panel.phase, ScanPhase::Pending("phishing.example.com".into()));
        assert!(app.any_pending());

        let outcome = rx.recv().await.unwrap();
        app.apply_outcome(outcome, Instant::now());
        match &app.url.panel.phase {
            ScanPhase::Resolved(v) => assert_eq!(v.severity, Severity::Danger),
            other => panic!("unexpected phase {other:?}"),
        }
        assert_eq!(app.flashes.messages.len(), 1);
    }

    #[tokio::test]
    async fn blank_url_warns_without_scanning() {
        let (mut app, mut rx) = app();
        app.url.input = "  ".into();
        app.scan_url();
        assert_eq!(app.url.panel.phase, ScanPhase::Warning(ScanError::MissingInput(SubjectKind::Url)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn missing_file_selection_warns() {
        let (mut app, _rx) = app();
        app.scan_file();
        assert_eq!(app.file.panel.phase, ScanPhase::Warning(ScanError::MissingInput(SubjectKind::File)));
    }

    #[tokio::test]
    async fn non_image_on_image_page_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::File::create(&path).unwrap().write_all(b"hello").unwrap();

        let (mut app, mut rx) = app();
        app.image.zone.drop_text(&format!("'{}'", path.display()));
        assert!(app.image.zone.has_file());
        app.scan_image();
        assert!(matches!(app.image.panel.phase, ScanPhase::Warning(ScanError::InvalidSubject { .. })));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn dropped_file_is_scanned() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.zip");
        std::fs::File::create(&path).unwrap().write_all(&[1u8; 10]).unwrap();

        let (mut app, mut rx) = app();
        app.file.zone.drop_text(&path.display().to_string());
        app.scan_file();
        assert_eq!(app.file.panel.phase, ScanPhase::Pending("archive.zip".into()));

        app.apply_outcome(rx.recv().await.unwrap(), Instant::now());
        match &app.file.panel.phase {
            ScanPhase::Resolved(v) => assert_eq!(v.code, FindingCode::FileCaution),
            other => panic!("unexpected phase {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreadable_drop_leaves_no_selection() {
        let (mut app, _rx) = app();
        app.select_page(Page::ScanFile);
        app.drop_into_zone("/definitely/not/here.exe", Instant::now());
        assert!(!app.file.zone.has_file());
        assert!(app.file.zone.error.is_some());
        assert_eq!(app.flashes.messages.back().map(|f| f.level), Some(FlashLevel::Warning));
    }

    #[tokio::test]
    async fn drops_outside_scan_pages_are_ignored() {
        let (mut app, _rx) = app();
        app.drop_into_zone("/tmp", Instant::now());
        assert!(app.file.zone.input.is_empty());
        assert!(app.flashes.messages.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn resubmitting_supersedes_the_pending_scan() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut app = App::new(Settings { show_disclaimer: false, ..Settings::default() }, tx, Instant::now());

        app.url.input = "scam.biz".into();
        app.scan_url();
        app.url.input = "rust-lang.org".into();
        app.scan_url();

        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.ticket, 2);
        app.apply_outcome(outcome, Instant::now());
        match &app.url.panel.phase {
            ScanPhase::Resolved(v) => assert_eq!(v.severity, Severity::Clean),
            other => panic!("unexpected phase {other:?}"),
        }
    }

    #[tokio::test]
    async fn stale_outcome_is_ignored() {
        let (mut app, _rx) = app();
        app.url.input = "unknown.site".into();
        app.scan_url();
        let stale = ScanOutcome {
            kind: SubjectKind::Url,
            ticket: 0,
            result: Err(ScanError::MissingInput(SubjectKind::Url)),
        };
        app.apply_outcome(stale, Instant::now());
        assert!(app.url.panel.is_pending());
    }

    #[tokio::test]
    async fn registration_checks_policy() {
        let (mut app, _rx) = app();
        let now = Instant::now();
        app.register.password = "abc12345".into();
        app.submit_registration(now);
        assert_eq!(app.register.outcome, Some(Err(PasswordRejection::MissingSymbol)));
        assert_eq!(app.register.password, "abc12345");

        app.register.password = "abc123!@".into();
        app.submit_registration(now);
        assert_eq!(app.register.outcome, Some(Ok(())));
        assert!(app.register.password.is_empty());
        assert_eq!(app.flashes.messages.back().map(|f| f.level), Some(FlashLevel::Success));
    }

    #[tokio::test]
    async fn contact_form_echoes_confirmation() {
        let (mut app, _rx) = app();
        let now = Instant::now();
        app.submit_contact(now);
        assert_eq!(app.contact.error, Some(ContactError::Required(ContactField::Name)));

        app.contact.message = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Demo".into(),
            message: "Hi".into(),
        };
        app.submit_contact(now);
        assert!(app.contact.error.is_none());
        assert_eq!(app.contact.confirmation.as_ref().map(|c| c.name.as_str()), Some("Ada"));
    }

    #[test]
    fn flash_messages_expire_after_ttl() {
        let start = Instant::now();
        let mut board = FlashBoard::new(Duration::from_secs(5));
        board.push(FlashLevel::Info, "one", start);
        board.push(FlashLevel::Info, "two", start + Duration::from_secs(3));

        board.prune(start + Duration::from_secs(4));
        assert_eq!(board.messages.len(), 2);
        board.prune(start + Duration::from_secs(5));
        assert_eq!(board.messages.len(), 1);
        board.prune(start + Duration::from_secs(8));
        assert!(board.messages.is_empty());
    }

    #[test]
    fn flash_board_keeps_the_latest_messages() {
        let now = Instant::now();
        let mut board = FlashBoard::new(Duration::from_secs(5));
        for i in 0..5 {
            board.push(FlashLevel::Info, i.to_string(), now);
        }
        assert_eq!(board.messages.len(), FlashBoard::MAX_VISIBLE);
        assert_eq!(board.messages.front().map(|f| f.text.as_str()), Some("2"));
    }

    #[test]
    fn carousel_rotates_and_wraps() {
        let start = Instant::now();
        let mut carousel = TipsCarousel::new(3, Duration::from_secs(5), start);
        carousel.tick(start + Duration::from_secs(4));
        assert_eq!(carousel.current, 0);
        carousel.tick(start + Duration::from_secs(5));
        assert_eq!(carousel.current, 1);
        carousel.tick(start + Duration::from_secs(15));
        assert_eq!(carousel.current, 0);
    }

    #[test]
    fn nav_collapses_on_narrow_terminals() {
        let mut nav = NavMenu::new(80);
        nav.on_resize(120);
        assert!(nav.shows_all());
        nav.toggle();
        assert!(!nav.expanded);

        nav.on_resize(60);
        assert!(!nav.shows_all());
        nav.toggle();
        assert!(nav.shows_all());

        nav.on_resize(100);
        assert!(nav.shows_all());
        assert!(!nav.expanded);
    }

    #[test]
    fn pages_cycle_in_both_directions() {
        assert_eq!(Page::Home.next(), Page::ScanLink);
        assert_eq!(Page::Contact.next(), Page::Home);
        assert_eq!(Page::Home.previous(), Page::Contact);
    }

    #[test]
    fn home_sections_wrap() {
        let mut home = HomePage {
            section: Section::Overview,
            carousel: TipsCarousel::new(TIP_COUNT, Duration::from_secs(5), Instant::now()),
        };
        home.previous_section();
        assert_eq!(home.section, Section::QuickActions);
        home.next_section();
        assert_eq!(home.section, Section::Overview);
    }
}
