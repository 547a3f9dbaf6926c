//! Course document structures

use crate::{CourseCoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Kind of lesson shown to the learner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    Video,
    Text,
}

/// Downloadable file attached to a lesson
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Original filename
    pub title: String,

    /// Remote storage URL
    pub url: String,

    /// Lowercased extension
    #[serde(rename = "type")]
    pub kind: String,
}

/// Single playable or readable unit within a chapter.
///
/// Absent values serialize as explicit `null`; the site reads every key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub title: String,
    pub url: Option<String>,
    pub filename: Option<String>,
    #[serde(rename = "type")]
    pub kind: LessonType,
    pub content: Option<String>,
    pub subtitle: Option<String>,
    pub resources: Vec<Resource>,
}

impl Lesson {
    /// Create a video lesson
    pub fn video(title: String, filename: String, url: String, subtitle: Option<String>) -> Self {
        Self {
            title,
            url: Some(url),
            filename: Some(filename),
            kind: LessonType::Video,
            content: None,
            subtitle,
            resources: Vec::new(),
        }
    }

    /// Create a text lesson backed by a file
    pub fn text(title: String, filename: String, content: TextContent) -> Self {
        Self {
            title,
            url: None,
            filename: Some(filename),
            kind: LessonType::Text,
            content: content.into_option(),
            subtitle: None,
            resources: Vec::new(),
        }
    }

    /// Create a text lesson that only exists to hold resources
    pub fn synthetic(title: String, placeholder: String, first: Resource) -> Self {
        Self {
            title,
            url: None,
            filename: None,
            kind: LessonType::Text,
            content: Some(placeholder),
            subtitle: None,
            resources: vec![first],
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind == LessonType::Video
    }
}

/// Outcome of reading a text lesson's file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextContent {
    Loaded(String),
    Unreadable(String),
}

impl TextContent {
    /// Read a file as UTF-8. Failures become [`TextContent::Unreadable`]
    /// carrying the reason; the caller decides how to report it.
    pub fn read(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => TextContent::Loaded(text),
            Err(e) => TextContent::Unreadable(e.to_string()),
        }
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            TextContent::Loaded(text) => Some(text),
            TextContent::Unreadable(_) => None,
        }
    }
}

/// Top-level grouping of lessons, one per course subdirectory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub lessons: Vec<Lesson>,
}

impl Chapter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lessons: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

/// The generated document: an ordered array of non-empty chapters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseDocument {
    chapters: Vec<Chapter>,
}

impl CourseDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chapter, dropping it if it has no lessons.
    /// Returns whether the chapter was kept.
    pub fn push_chapter(&mut self, chapter: Chapter) -> bool {
        if chapter.is_empty() {
            return false;
        }
        self.chapters.push(chapter);
        true
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.chapters.iter().flat_map(|c| c.lessons.iter())
    }

    pub fn summary(&self) -> CourseSummary {
        CourseSummary::from_document(self)
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the document to `path`, replacing any previous file
    pub fn save(&self, path: &Path) -> Result<()> {
        if path.is_dir() {
            return Err(CourseCoreError::Path(format!(
                "Output path is a directory: {}",
                path.display()
            )));
        }
        std::fs::write(path, self.to_pretty_json()?)?;
        Ok(())
    }
}

/// Counts derived from a finished document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub chapters: usize,
    pub lessons: usize,
    pub videos: usize,
    pub texts: usize,
    pub resources: usize,
    pub subtitled_videos: usize,
}

impl CourseSummary {
    pub fn from_document(document: &CourseDocument) -> Self {
        let mut summary = Self {
            chapters: document.chapters().len(),
            ..Self::default()
        };

        for lesson in document.lessons() {
            summary.lessons += 1;
            summary.resources += lesson.resources.len();
            if lesson.is_video() {
                summary.videos += 1;
                if lesson.subtitle.is_some() {
                    summary.subtitled_videos += 1;
                }
            } else {
                summary.texts += 1;
            }
        }

        summary
    }
}
