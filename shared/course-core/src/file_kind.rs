//! File classification by extension

use serde::{Deserialize, Serialize};

/// What a file inside a chapter directory is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Playable lesson (.mp4, .webm, ...)
    Video,

    /// Inline text lesson (.html, .md, ...)
    Text,

    /// Caption track paired with a video
    Subtitle,

    /// Downloadable attachment (.pdf, .zip, ...)
    Resource,

    /// Anything else; never materialized
    Unclassified,
}

impl FileKind {
    /// Get human-readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Video => "video",
            FileKind::Text => "text",
            FileKind::Subtitle => "subtitle",
            FileKind::Resource => "resource",
            FileKind::Unclassified => "unclassified",
        }
    }
}

/// Extension lists driving classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionTable {
    pub video: Vec<String>,
    pub text: Vec<String>,
    pub subtitle: Vec<String>,
    pub resource: Vec<String>,
}

impl Default for ExtensionTable {
    fn default() -> Self {
        Self {
            video: to_strings(&["mp4", "webm", "mkv", "avi", "mov"]),
            text: to_strings(&["html", "htm", "txt", "md"]),
            subtitle: to_strings(&["vtt", "srt"]),
            resource: to_strings(&["zip", "rar", "7z", "pdf", "doc", "docx"]),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ExtensionTable {
    /// Classify a filename by its lowercased final extension
    pub fn classify(&self, filename: &str) -> FileKind {
        let Some(ext) = lowercase_extension(filename) else {
            return FileKind::Unclassified;
        };

        let listed = |list: &[String]| list.iter().any(|e| e.eq_ignore_ascii_case(&ext));

        if listed(&self.video) {
            FileKind::Video
        } else if listed(&self.text) {
            FileKind::Text
        } else if listed(&self.subtitle) {
            FileKind::Subtitle
        } else if listed(&self.resource) {
            FileKind::Resource
        } else {
            FileKind::Unclassified
        }
    }
}

/// Text after the last `.`, lowercased. `None` when the name has no dot.
pub fn lowercase_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

/// Split a filename into stem and extension.
///
/// Leading dots belong to the stem, so `".mp4"` has no extension and
/// `"Intro.mp4"` splits into `("Intro", Some("mp4"))`.
pub fn split_extension(filename: &str) -> (&str, Option<&str>) {
    match filename.rfind('.') {
        Some(idx) if filename[..idx].chars().any(|c| c != '.') => {
            (&filename[..idx], Some(&filename[idx + 1..]))
        }
        _ => (filename, None),
    }
}
