// src/ui/widgets/verdict_view.rs

use crate::app::{ScanPanel, ScanPhase, SPINNER_CHARS};
use crate::core::knowledge_base::get_finding_detail;
use crate::core::models::{ScanError, Severity, SubjectKind, Verdict};
use rust_i18n::t;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
    text::Line,
};

pub fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Danger => Style::default().fg(Color::Red),
        Severity::Caution => Style::default().fg(Color::Yellow),
        Severity::Clean => Style::default().fg(Color::Green),
    }
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Danger | Severity::Caution => "⚠",
        Severity::Clean => "✓",
    }
}

/// Localized text for input that was rejected before scanning.
pub fn warning_text(error: &ScanError) -> String {
    match error {
        ScanError::MissingInput(SubjectKind::Url) => t!("warnings.missing_url").to_string(),
        ScanError::MissingInput(SubjectKind::File) => t!("warnings.missing_file").to_string(),
        ScanError::MissingInput(SubjectKind::Image) => t!("warnings.missing_image").to_string(),
        ScanError::InvalidSubject { name, .. } => t!("warnings.not_an_image", name = name.as_str()).to_string(),
    }
}

/// Renders a scan panel in whichever phase it is in.
pub fn render_scan_panel(frame: &mut Frame, panel: &ScanPanel, spinner_frame: usize, area: Rect) {
    let mut block = Block::default().borders(Borders::ALL).title(t!("scan.result_title").to_string());

    let content = match &panel.phase {
        ScanPhase::Idle => {
            let hint = match panel.kind {
                SubjectKind::Url => t!("scan.idle_url"),
                SubjectKind::File => t!("scan.idle_file"),
                SubjectKind::Image => t!("scan.idle_image"),
            };
            Paragraph::new(hint.to_string().dark_gray()).alignment(Alignment::Center)
        }
        ScanPhase::Warning(error) => {
            block = block.border_style(Style::default().fg(Color::Yellow));
            Paragraph::new(Line::from(vec![
                Span::styled("! ", Style::default().fg(Color::Yellow).bold()),
                Span::raw(warning_text(error)),
            ]))
        }
        ScanPhase::Pending(label) => {
            let spinner_char = SPINNER_CHARS[spinner_frame % SPINNER_CHARS.len()];
            let message = match panel.kind {
                SubjectKind::Url => t!("scan.pending_url", subject = label.as_str()),
                SubjectKind::File => t!("scan.pending_file", subject = label.as_str()),
                SubjectKind::Image => t!("scan.pending_image", subject = label.as_str()),
            };
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", spinner_char), Style::default().fg(Color::Cyan)),
                Span::raw(message.to_string()),
            ]))
            .alignment(Alignment::Center)
        }
        ScanPhase::Resolved(verdict) => {
            block = block.border_style(severity_style(verdict.severity));
            Paragraph::new(verdict_text(verdict))
        }
    };

    frame.render_widget(content.block(block).wrap(Wrap { trim: true }), area);
}

fn verdict_text(verdict: &Verdict) -> Text<'static> {
    let style = severity_style(verdict.severity);
    let label = |key: &str| Span::styled(format!("{}: ", t!(key)), Style::default().bold());

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", severity_icon(verdict.severity), verdict.title),
            style.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(verdict.body.clone()),
    ];
    if let Some(facts) = &verdict.subject {
        let name_key = match get_finding_detail(verdict.code).kind {
            SubjectKind::Image => "scan.label_image",
            _ => "scan.label_file",
        };
        lines.push(Line::from(vec![label(name_key), Span::raw(facts.name.clone())]));
        lines.push(Line::from(vec![label("scan.label_size"), Span::raw(facts.size.clone())]));
    }
    let advice_key = match verdict.severity {
        Severity::Clean => "scan.label_note",
        _ => "scan.label_recommendation",
    };
    lines.push(Line::from(vec![label(advice_key), Span::raw(verdict.recommendation.clone())]));
    Text::from(lines)
}
