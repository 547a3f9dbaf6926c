//! Course Data Generator
//!
//! Scans a recorded course folder (one subdirectory per chapter) and produces
//! the `course_data.json` document consumed by the course website.

pub mod assembler;
pub mod config;
pub mod generator;
pub mod scanner;
pub mod storage_url;
pub mod writer;

// Re-export main types for easy access
pub use crate::assembler::LessonAssembler;
pub use crate::config::{Config, ConfigBuilder};
pub use crate::generator::{CourseGenerator, GenerationReport};
pub use crate::scanner::{ChapterDir, CourseScanner, ScanError};
pub use crate::storage_url::{generate_url, UrlSynthesizer};
pub use crate::writer::DocumentWriter;
pub use course_core::{
    Chapter, CourseDocument, CourseSummary, ExtensionTable, Lesson, LessonType, Resource,
};
