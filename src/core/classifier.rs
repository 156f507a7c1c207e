// src/core/classifier.rs

//! Keyword rules behind the scan pages.
//!
//! These rules are naive substring checks for a demo page. They are not a
//! detection engine and must not be presented as one.

use tracing::debug;

use crate::core::knowledge_base::get_finding_detail;
use crate::core::media::format_file_size;
use crate::core::models::{
    FindingCode, ScanError, ScanSubject, SubjectFacts, SubjectKind, Verdict,
};

/// A single test applied to the lowercased fields of a subject.
enum Check {
    /// The name (or URL text) contains one of the keywords.
    Contains(&'static [&'static str]),
    /// The name ends with one of the suffixes.
    EndsWith(&'static [&'static str]),
    /// The MIME type contains the fragment.
    MimeContains(&'static str),
    /// The size is strictly greater than the threshold.
    LargerThan(u64),
}

/// A rule maps a set of checks (any of which may match) to a finding.
struct Rule {
    any_of: &'static [Check],
    finding: FindingCode,
}

const LARGE_IMAGE_BYTES: u64 = 5_000_000;

static URL_RULES: &[Rule] = &[
    Rule {
        any_of: &[Check::Contains(&["phishing", "scam", "free-money"])],
        finding: FindingCode::UrlHighRisk,
    },
    Rule {
        any_of: &[Check::Contains(&["suspicious", "unknown", "redirect"])],
        finding: FindingCode::UrlPotentialRisk,
    },
];

static FILE_RULES: &[Rule] = &[
    Rule {
        any_of: &[
            Check::Contains(&["virus", "malware"]),
            Check::EndsWith(&[".exe", ".bat"]),
        ],
        finding: FindingCode::FileHarmful,
    },
    Rule {
        any_of: &[
            Check::MimeContains("application"),
            Check::EndsWith(&[".zip", ".rar"]),
        ],
        finding: FindingCode::FileCaution,
    },
];

static IMAGE_RULES: &[Rule] = &[
    Rule {
        any_of: &[Check::Contains(&["fake", "deepfake"])],
        finding: FindingCode::ImageManipulated,
    },
    Rule {
        any_of: &[Check::LargerThan(LARGE_IMAGE_BYTES)],
        finding: FindingCode::ImageLargeFile,
    },
];

/// Lowercased view of the fields the rules look at.
struct Fields {
    text: String,
    mime_type: String,
    size_bytes: u64,
}

impl Check {
    fn matches(&self, fields: &Fields) -> bool {
        match self {
            Check::Contains(words) => words.iter().any(|w| fields.text.contains(w)),
            Check::EndsWith(suffixes) => suffixes.iter().any(|s| fields.text.ends_with(s)),
            Check::MimeContains(fragment) => fields.mime_type.contains(fragment),
            Check::LargerThan(limit) => fields.size_bytes > *limit,
        }
    }
}

/// Checks that a subject can be scanned at all.
///
/// Runs before any artificial delay so the caller can show a plain warning
/// instead of a pending scan.
pub fn validate(subject: &ScanSubject) -> Result<(), ScanError> {
    match subject {
        ScanSubject::Url { text } if text.trim().is_empty() => {
            Err(ScanError::MissingInput(SubjectKind::Url))
        }
        ScanSubject::File { name, .. } if name.is_empty() => {
            Err(ScanError::MissingInput(SubjectKind::File))
        }
        ScanSubject::Image { name, .. } if name.is_empty() => {
            Err(ScanError::MissingInput(SubjectKind::Image))
        }
        ScanSubject::Image { name, mime_type, .. } if !mime_type.starts_with("image/") => {
            Err(ScanError::InvalidSubject { name: name.clone(), mime_type: mime_type.clone() })
        }
        _ => Ok(()),
    }
}

/// Maps a subject to a verdict. First matching rule wins; a subject that
/// matches no rule gets the clean finding for its kind.
pub fn classify(subject: &ScanSubject) -> Result<Verdict, ScanError> {
    validate(subject)?;

    let (rules, fallback, fields, facts) = match subject {
        ScanSubject::Url { text } => (
            URL_RULES,
            FindingCode::UrlNoThreats,
            Fields { text: text.to_lowercase(), mime_type: String::new(), size_bytes: 0 },
            None,
        ),
        ScanSubject::File { name, mime_type, size_bytes } => (
            FILE_RULES,
            FindingCode::FileNoThreats,
            Fields {
                text: name.to_lowercase(),
                mime_type: mime_type.to_lowercase(),
                size_bytes: *size_bytes,
            },
            Some(SubjectFacts { name: name.clone(), size: format_file_size(*size_bytes) }),
        ),
        ScanSubject::Image { name, mime_type, size_bytes } => (
            IMAGE_RULES,
            FindingCode::ImageAuthentic,
            Fields {
                text: name.to_lowercase(),
                mime_type: mime_type.to_lowercase(),
                size_bytes: *size_bytes,
            },
            Some(SubjectFacts { name: name.clone(), size: format_file_size(*size_bytes) }),
        ),
    };

    let code = rules
        .iter()
        .find(|rule| rule.any_of.iter().any(|check| check.matches(&fields)))
        .map(|rule| rule.finding)
        .unwrap_or(fallback);
    debug!(kind = %subject.kind(), finding = %code, "Classified subject.");

    Ok(build_verdict(code, facts))
}

fn build_verdict(code: FindingCode, subject: Option<SubjectFacts>) -> Verdict {
    let detail = get_finding_detail(code);
    Verdict {
        severity: detail.severity,
        code,
        title: detail.title(),
        body: detail.body(),
        recommendation: detail.recommendation(),
        subject,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Severity;

    fn url(text: &str) -> Severity {
        classify(&ScanSubject::url(text)).unwrap().severity
    }

    fn file(name: &str, mime: &str) -> Verdict {
        classify(&ScanSubject::file(name, mime, 1024)).unwrap()
    }

    fn image(name: &str, mime: &str, size: u64) -> Result<Verdict, ScanError> {
        classify(&ScanSubject::image(name, mime, size))
    }

    #[test]
    fn url_danger_keywords_in_any_case() {
        for text in [
            "http://phishing.example",
            "https://SCAM.io/login",
            "www.Free-Money.biz",
            "phishing-suspicious-redirect.net",
        ] {
            assert_eq!(url(text), Severity::Danger, "{text}");
        }
    }

    #[test]
    fn url_caution_keywords_without_danger_keywords() {
        for text in ["suspicious.site", "http://UNKNOWN-host.org", "example.com/redirect?to=x"] {
            assert_eq!(url(text), Severity::Caution, "{text}");
        }
    }

    #[test]
    fn url_without_keywords_is_clean() {
        assert_eq!(url("https://www.rust-lang.org"), Severity::Clean);
        assert_eq!(url("free money"), Severity::Clean);
    }

    #[test]
    fn url_verdict_has_no_file_facts() {
        let verdict = classify(&ScanSubject::url("https://example.com")).unwrap();
        assert_eq!(verdict.code, FindingCode::UrlNoThreats);
        assert!(verdict.subject.is_none());
    }

    #[test]
    fn blank_url_is_missing_input() {
        assert_eq!(
            classify(&ScanSubject::url("   ")),
            Err(ScanError::MissingInput(SubjectKind::Url))
        );
        assert_eq!(
            classify(&ScanSubject::url("")),
            Err(ScanError::MissingInput(SubjectKind::Url))
        );
    }

    #[test]
    fn file_rules_follow_listed_order() {
        assert_eq!(file("setup.exe", "").severity, Severity::Danger);
        assert_eq!(file("run.BAT", "text/plain").severity, Severity::Danger);
        assert_eq!(file("MALWARE_report.pdf", "application/pdf").code, FindingCode::FileHarmful);
        assert_eq!(file("archive.zip", "").severity, Severity::Caution);
        assert_eq!(file("backup.rar", "").severity, Severity::Caution);
        assert_eq!(file("report.pdf", "application/pdf").code, FindingCode::FileCaution);
        assert_eq!(file("notes.txt", "text/plain").severity, Severity::Clean);
    }

    #[test]
    fn danger_file_rule_wins_over_application_mime() {
        let verdict = file("setup.exe", "application/x-msdownload");
        assert_eq!(verdict.code, FindingCode::FileHarmful);
    }

    #[test]
    fn file_verdict_echoes_name_and_size() {
        let verdict = classify(&ScanSubject::file("notes.txt", "text/plain", 2048)).unwrap();
        let facts = verdict.subject.unwrap();
        assert_eq!(facts.name, "notes.txt");
        assert_eq!(facts.size, "2.0 KB");
    }

    #[test]
    fn empty_file_name_is_missing_input() {
        assert_eq!(
            classify(&ScanSubject::file("", "text/plain", 10)),
            Err(ScanError::MissingInput(SubjectKind::File))
        );
    }

    #[test]
    fn non_image_mime_is_invalid_subject() {
        let err = image("notes.txt", "text/plain", 100).unwrap_err();
        assert!(matches!(err, ScanError::InvalidSubject { .. }));
    }

    #[test]
    fn image_rules() {
        let fake = image("deepfake_photo.png", "image/png", 1000).unwrap();
        assert_eq!(fake.severity, Severity::Caution);
        assert_eq!(fake.code, FindingCode::ImageManipulated);

        let large = image("holiday.jpg", "image/jpeg", 6_000_001).unwrap();
        assert_eq!(large.code, FindingCode::ImageLargeFile);

        let at_limit = image("holiday.jpg", "image/jpeg", LARGE_IMAGE_BYTES).unwrap();
        assert_eq!(at_limit.severity, Severity::Clean);

        let small = image("cat.png", "image/png", 100).unwrap();
        assert_eq!(small.severity, Severity::Clean);
        assert_eq!(small.code, FindingCode::ImageAuthentic);
    }

    #[test]
    fn classification_is_idempotent() {
        let subject = ScanSubject::image("FAKE.gif", "image/gif", 42);
        let first = classify(&subject).unwrap();
        let second = classify(&subject).unwrap();
        assert_eq!(first, second);
        assert_eq!(subject, ScanSubject::image("FAKE.gif", "image/gif", 42));
    }

    #[test]
    fn validate_accepts_scannable_subjects() {
        assert!(validate(&ScanSubject::url("example.com")).is_ok());
        assert!(validate(&ScanSubject::file("a.bin", "", 0)).is_ok());
        assert!(validate(&ScanSubject::image("a.png", "image/png", 0)).is_ok());
    }
}
