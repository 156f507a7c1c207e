// src/core/models.rs

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use thiserror::Error;

// --- Core Data Models ---

/// Display tier of a verdict. The derived order is `Clean < Caution < Danger`;
/// it only drives styling and is never aggregated across subjects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Clean,
    Caution,
    Danger,
}

/// The kind of subject a scan page handles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum SubjectKind {
    Url,
    File,
    Image,
}

/// The single item evaluated by one scan invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScanSubject {
    Url {
        text: String,
    },
    File {
        name: String,
        mime_type: String,
        size_bytes: u64,
    },
    Image {
        name: String,
        mime_type: String,
        size_bytes: u64,
    },
}

impl ScanSubject {
    pub fn url(text: impl Into<String>) -> Self {
        Self::Url { text: text.into() }
    }

    pub fn file(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self::File { name: name.into(), mime_type: mime_type.into(), size_bytes }
    }

    pub fn image(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self::Image { name: name.into(), mime_type: mime_type.into(), size_bytes }
    }

    pub fn kind(&self) -> SubjectKind {
        match self {
            Self::Url { .. } => SubjectKind::Url,
            Self::File { .. } => SubjectKind::File,
            Self::Image { .. } => SubjectKind::Image,
        }
    }
}

/// Identifies which rule produced a verdict. Each code has exactly one entry
/// in the knowledge base.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingCode {
    UrlHighRisk,
    UrlPotentialRisk,
    UrlNoThreats,
    FileHarmful,
    FileCaution,
    FileNoThreats,
    ImageManipulated,
    ImageLargeFile,
    ImageAuthentic,
}

/// File facts echoed back in file and image verdicts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubjectFacts {
    pub name: String,
    pub size: String,
}

/// The outcome of classifying one subject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Verdict {
    pub severity: Severity,
    pub code: FindingCode,
    pub title: String,
    pub body: String,
    pub recommendation: String,
    pub subject: Option<SubjectFacts>,
}

/// Conditions that stop a scan before any verdict exists. Neither is a scan
/// result and neither should be rendered as one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Please provide a {0} to scan.")]
    MissingInput(SubjectKind),
    #[error("'{name}' is not an image ({mime_type}). Please select an image file.")]
    InvalidSubject { name: String, mime_type: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_danger_above_caution_above_clean() {
        assert!(Severity::Danger > Severity::Caution);
        assert!(Severity::Caution > Severity::Clean);
        assert_eq!(Severity::Caution.to_string(), "caution");
    }

    #[test]
    fn finding_codes_render_as_screaming_snake_case() {
        assert_eq!(FindingCode::UrlHighRisk.to_string(), "URL_HIGH_RISK");
        let code: &'static str = FindingCode::ImageLargeFile.into();
        assert_eq!(code, "IMAGE_LARGE_FILE");
    }

    #[test]
    fn subject_reports_its_kind() {
        assert_eq!(ScanSubject::url("a").kind(), SubjectKind::Url);
        assert_eq!(ScanSubject::file("a", "b", 1).kind(), SubjectKind::File);
        assert_eq!(ScanSubject::image("a", "image/png", 1).kind(), SubjectKind::Image);
    }

    #[test]
    fn missing_input_message_names_the_subject() {
        let err = ScanError::MissingInput(SubjectKind::Url);
        assert_eq!(err.to_string(), "Please provide a url to scan.");
    }
}
