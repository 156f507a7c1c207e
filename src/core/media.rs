// src/core/media.rs

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// A file picked through a drop zone. Only metadata is read, never contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("No file at '{0}'")]
    NotFound(PathBuf),
    #[error("'{0}' is a directory")]
    IsDirectory(PathBuf),
    #[error("Could not read '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

const FALLBACK_MIME: &str = "application/octet-stream";

/// Extension to MIME type, lowercase extensions only.
static MIME_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("svg", "image/svg+xml"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("ico", "image/x-icon"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("csv", "text/csv"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("js", "text/javascript"),
    ("json", "application/json"),
    ("xml", "application/xml"),
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
    ("rar", "application/vnd.rar"),
    ("7z", "application/x-7z-compressed"),
    ("gz", "application/gzip"),
    ("tar", "application/x-tar"),
    ("doc", "application/msword"),
    ("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    ("xls", "application/vnd.ms-excel"),
    ("xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    ("exe", "application/x-msdownload"),
    ("msi", "application/x-msdownload"),
    ("bat", "application/x-bat"),
    ("sh", "application/x-sh"),
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
];

/// Guesses a MIME type from the file extension.
pub fn guess_mime_type(name: &str) -> &'static str {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return FALLBACK_MIME;
    };
    let ext = ext.to_ascii_lowercase();
    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(FALLBACK_MIME)
}

/// Cleans up a path typed or dropped into a drop zone.
///
/// Terminals paste dropped files as quoted paths or `file://` URLs, sometimes
/// with shell escapes for spaces and a trailing newline.
pub fn normalize_dropped_path(raw: &str) -> PathBuf {
    let mut text = raw.trim();
    for quote in ['\'', '"'] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            text = &text[1..text.len() - 1];
        }
    }
    if text.starts_with("file://") {
        if let Some(path) = url::Url::parse(text).ok().and_then(|u| u.to_file_path().ok()) {
            return path;
        }
    }
    PathBuf::from(text.replace("\\ ", " "))
}

impl SelectedFile {
    /// Reads the metadata of `path` into a selection.
    pub fn from_path(path: &Path) -> Result<Self, MediaError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "Could not stat selected file.");
            if e.kind() == std::io::ErrorKind::NotFound {
                MediaError::NotFound(path.to_path_buf())
            } else {
                MediaError::Unreadable { path: path.to_path_buf(), source: e }
            }
        })?;
        if metadata.is_dir() {
            return Err(MediaError::IsDirectory(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let selected = Self {
            mime_type: guess_mime_type(&name).to_string(),
            name,
            size_bytes: metadata.len(),
            path: path.to_path_buf(),
        };
        debug!(name = %selected.name, mime = %selected.mime_type, size = selected.size_bytes, "File selected.");
        Ok(selected)
    }
}

/// Formats a byte count the way the scan pages display it.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} bytes", bytes)
    } else if bytes < 1_048_576 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / 1_048_576.0)
    }
}
