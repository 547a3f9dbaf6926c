use anyhow::Result;
use course_core::{CourseDocument, CourseSummary};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::assembler::LessonAssembler;
use crate::config::Config;
use crate::scanner::CourseScanner;
use crate::storage_url::UrlSynthesizer;
use crate::writer::DocumentWriter;

/// Outcome of one generator run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub document: CourseDocument,
    pub summary: CourseSummary,
    pub output_path: PathBuf,
    /// False for dry runs
    pub written: bool,
    pub total_time: Duration,
}

/// Scans a course folder and produces its course document
pub struct CourseGenerator {
    config: Config,
    scanner: CourseScanner,
    urls: UrlSynthesizer,
}

impl CourseGenerator {
    pub fn new(config: Config, bucket_url: &str) -> Result<Self> {
        config.validate()?;
        let scanner = CourseScanner::new(config.scan.skip_hidden_chapters);

        Ok(Self {
            config,
            scanner,
            urls: UrlSynthesizer::new(bucket_url),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the document for `course_path` without writing anything
    pub fn scan(&self, course_path: &Path) -> Result<CourseDocument> {
        let root = self.scanner.resolve_root(course_path)?;
        Ok(self.scan_root(&root))
    }

    fn scan_root(&self, root: &Path) -> CourseDocument {
        let chapters = self.scanner.chapters(root);
        let assembler = LessonAssembler::new(&self.config, &self.urls);

        info!("🔍 Scanning course: {}", course_name(root));
        info!("🪣 Bucket URL: {}", self.urls.base());
        info!("📚 Found {} chapters", chapters.len());

        let mut document = CourseDocument::new();
        for dir in &chapters {
            info!("📁 {}", dir.title);
            let files = self.scanner.chapter_files(dir);
            let chapter = assembler.assemble(dir, &files);
            if !document.push_chapter(chapter) {
                debug!("Dropping chapter without lessons: {}", dir.title);
            }
        }

        document
    }

    /// Scan, then write the document into the course root unless `dry_run`
    pub fn run(&self, course_path: &Path, dry_run: bool) -> Result<GenerationReport> {
        let start_time = Instant::now();

        let root = self.scanner.resolve_root(course_path)?;
        let document = self.scan_root(&root);
        let summary = document.summary();

        let writer = DocumentWriter::new(self.config.output.filename.clone());
        let output_path = if dry_run {
            writer.output_path(&root)
        } else {
            writer.write(&document, &root)?
        };

        Ok(GenerationReport {
            document,
            summary,
            output_path,
            written: !dry_run,
            total_time: start_time.elapsed(),
        })
    }
}

fn course_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
