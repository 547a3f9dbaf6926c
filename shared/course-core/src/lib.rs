//! Course Core - Shared data structures and utilities for course scanning

pub mod model;
pub mod file_kind;
pub mod natural_sort;

pub use model::{Chapter, CourseDocument, CourseSummary, Lesson, LessonType, Resource, TextContent};
pub use file_kind::{lowercase_extension, split_extension, ExtensionTable, FileKind};
pub use natural_sort::{natural_cmp, sort_naturally, NaturalKey};

/// Result type for Course Core operations
pub type Result<T> = std::result::Result<T, CourseCoreError>;

/// Error types for Course Core operations
#[derive(thiserror::Error, Debug)]
pub enum CourseCoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
