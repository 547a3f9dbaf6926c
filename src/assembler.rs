//! Turns one chapter's files into lessons

use course_core::{
    lowercase_extension, split_extension, Chapter, FileKind, Lesson, Resource, TextContent,
};
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::config::{Config, ScanConfig};
use crate::scanner::ChapterDir;
use crate::storage_url::UrlSynthesizer;

/// Builds lessons for a chapter in a single pass over its sorted files.
///
/// Videos pull in their subtitle, text files are embedded inline, and each
/// resource attaches to whichever lesson was created last. Resources that
/// come before any lesson go into one synthetic resources lesson.
pub struct LessonAssembler<'a> {
    scan: &'a ScanConfig,
    resources_title: &'a str,
    resources_placeholder: &'a str,
    urls: &'a UrlSynthesizer,
}

impl<'a> LessonAssembler<'a> {
    pub fn new(config: &'a Config, urls: &'a UrlSynthesizer) -> Self {
        Self {
            scan: &config.scan,
            resources_title: &config.output.resources_lesson_title,
            resources_placeholder: &config.output.resources_placeholder,
            urls,
        }
    }

    /// Assemble a chapter from `files`, which must already be in natural order
    pub fn assemble(&self, dir: &ChapterDir, files: &[String]) -> Chapter {
        let available: HashSet<&str> = files.iter().map(String::as_str).collect();
        let mut consumed: HashSet<String> = HashSet::new();
        let mut chapter = Chapter::new(dir.title.clone());

        for filename in files {
            if consumed.contains(filename) {
                continue;
            }

            let kind = self.scan.extensions.classify(filename);
            debug!("{} -> {}", filename, kind.as_str());

            match kind {
                FileKind::Video => {
                    let lesson = self.video_lesson(dir, filename, &available, &mut consumed);
                    info!("  🎬 {}", lesson.title);
                    chapter.lessons.push(lesson);
                }
                FileKind::Text => {
                    let lesson = self.text_lesson(dir, filename);
                    info!("  📄 {}", lesson.title);
                    chapter.lessons.push(lesson);
                }
                FileKind::Resource => {
                    let resource = Resource {
                        title: filename.clone(),
                        url: self.urls.file_url(&dir.title, filename),
                        kind: lowercase_extension(filename).unwrap_or_default(),
                    };
                    match chapter.lessons.last_mut() {
                        Some(last) => last.resources.push(resource),
                        None => chapter.lessons.push(Lesson::synthetic(
                            self.resources_title.to_string(),
                            self.resources_placeholder.to_string(),
                            resource,
                        )),
                    }
                    info!("  📦 {}", filename);
                }
                // Subtitles are only reached through their video
                FileKind::Subtitle | FileKind::Unclassified => continue,
            }

            consumed.insert(filename.clone());
        }

        chapter
    }

    fn video_lesson(
        &self,
        dir: &ChapterDir,
        filename: &str,
        available: &HashSet<&str>,
        consumed: &mut HashSet<String>,
    ) -> Lesson {
        let (base, _) = split_extension(filename);

        let subtitle = self.find_subtitle(available, base).map(|subtitle| {
            let url = self.urls.file_url(&dir.title, &subtitle);
            consumed.insert(subtitle);
            url
        });

        Lesson::video(
            base.to_string(),
            filename.to_string(),
            self.urls.file_url(&dir.title, filename),
            subtitle,
        )
    }

    fn text_lesson(&self, dir: &ChapterDir, filename: &str) -> Lesson {
        let path = dir.path.join(filename);
        let content = TextContent::read(&path);
        if let TextContent::Unreadable(reason) = &content {
            warn!("  Could not read {}: {}", path.display(), reason);
        }

        let (base, _) = split_extension(filename);
        Lesson::text(base.to_string(), filename.to_string(), content)
    }

    /// First subtitle pattern that names an existing file wins
    pub fn find_subtitle(&self, available: &HashSet<&str>, base: &str) -> Option<String> {
        self.scan
            .subtitle_candidates(base)
            .into_iter()
            .find(|candidate| available.contains(candidate.as_str()))
    }
}
