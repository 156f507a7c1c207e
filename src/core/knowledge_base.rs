//! Static table of every finding the classifier can emit.
//! Wording lives in `locales/*.yml`; this table only ties a code to its
//! severity, its subject kind and its translation key.

use crate::core::models::{FindingCode, Severity, SubjectKind};
use rust_i18n::t;

/// Everything the UI needs to present a finding.
pub struct FindingDetail {
    pub code: FindingCode,
    pub kind: SubjectKind,
    pub severity: Severity,
    /// Prefix of the `findings.<key>.*` translation entries.
    key: &'static str,
}

impl FindingDetail {
    pub fn title(&self) -> String {
        self.text("title")
    }

    pub fn body(&self) -> String {
        self.text("body")
    }

    pub fn recommendation(&self) -> String {
        self.text("recommendation")
    }

    fn text(&self, field: &str) -> String {
        let key = format!("findings.{}.{}", self.key, field);
        t!(key.as_str()).to_string()
    }
}

static FINDINGS: &[FindingDetail] = &[
    // --- URL ---
    FindingDetail {
        code: FindingCode::UrlHighRisk,
        kind: SubjectKind::Url,
        severity: Severity::Danger,
        key: "url_high_risk",
    },
    FindingDetail {
        code: FindingCode::UrlPotentialRisk,
        kind: SubjectKind::Url,
        severity: Severity::Caution,
        key: "url_potential_risk",
    },
    FindingDetail {
        code: FindingCode::UrlNoThreats,
        kind: SubjectKind::Url,
        severity: Severity::Clean,
        key: "url_no_threats",
    },
    // --- File ---
    FindingDetail {
        code: FindingCode::FileHarmful,
        kind: SubjectKind::File,
        severity: Severity::Danger,
        key: "file_harmful",
    },
    FindingDetail {
        code: FindingCode::FileCaution,
        kind: SubjectKind::File,
        severity: Severity::Caution,
        key: "file_caution",
    },
    FindingDetail {
        code: FindingCode::FileNoThreats,
        kind: SubjectKind::File,
        severity: Severity::Clean,
        key: "file_no_threats",
    },
    // --- Image ---
    FindingDetail {
        code: FindingCode::ImageManipulated,
        kind: SubjectKind::Image,
        severity: Severity::Caution,
        key: "image_manipulated",
    },
    FindingDetail {
        code: FindingCode::ImageLargeFile,
        kind: SubjectKind::Image,
        severity: Severity::Caution,
        key: "image_large_file",
    },
    FindingDetail {
        code: FindingCode::ImageAuthentic,
        kind: SubjectKind::Image,
        severity: Severity::Clean,
        key: "image_authentic",
    },
];

/// Looks up the detail for a finding code.
///
/// Every `FindingCode` variant has an entry, so this never fails for codes
/// produced by the classifier.
pub fn get_finding_detail(code: FindingCode) -> &'static FindingDetail {
    FINDINGS
        .iter()
        .find(|f| f.code == code)
        .unwrap_or_else(|| unreachable!("finding {code} missing from knowledge base"))
}
