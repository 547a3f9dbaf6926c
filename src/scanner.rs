//! Course root validation and chapter/file enumeration

use anyhow::Result;
use course_core::sort_naturally;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Preconditions that abort a run before anything is written
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    #[error("Course path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Course path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// A directory whose files become one chapter's lessons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDir {
    pub title: String,
    pub path: PathBuf,
}

/// Resolves the course root into chapter directories
#[derive(Debug, Clone)]
pub struct CourseScanner {
    skip_hidden: bool,
}

impl Default for CourseScanner {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CourseScanner {
    pub fn new(skip_hidden: bool) -> Self {
        Self { skip_hidden }
    }

    /// Check the course root exists and is a directory.
    ///
    /// The path is kept as given so a symlinked root keeps its own name.
    /// Only paths without a final name (`.`, `..`, `course/..`) are
    /// canonicalized.
    pub fn resolve_root(&self, path: &Path) -> Result<PathBuf> {
        if !path.exists() {
            return Err(ScanError::NotFound(path.to_path_buf()).into());
        }
        if !path.is_dir() {
            return Err(ScanError::NotADirectory(path.to_path_buf()).into());
        }
        if path.file_name().is_some() {
            return Ok(path.to_path_buf());
        }
        Ok(path.canonicalize()?)
    }

    /// Immediate subdirectories in natural order, or the root itself when
    /// there are none
    pub fn chapters(&self, root: &Path) -> Vec<ChapterDir> {
        let mut names: Vec<String> = immediate_entries(root)
            .filter(|(_, is_dir)| *is_dir)
            .map(|(name, _)| name)
            .filter(|name| !(self.skip_hidden && name.starts_with('.')))
            .collect();

        if names.is_empty() {
            debug!("No chapter directories in {}, using the root", root.display());
            return vec![ChapterDir {
                title: root_title(root),
                path: root.to_path_buf(),
            }];
        }

        sort_naturally(&mut names);
        names
            .into_iter()
            .map(|name| ChapterDir {
                path: root.join(&name),
                title: name,
            })
            .collect()
    }

    /// Regular files directly inside a chapter directory, in natural order
    pub fn chapter_files(&self, chapter: &ChapterDir) -> Vec<String> {
        let mut files: Vec<String> = immediate_entries(&chapter.path)
            .filter(|(_, is_dir)| !*is_dir)
            .map(|(name, _)| name)
            .collect();
        sort_naturally(&mut files);
        files
    }
}

/// Names of a directory's children that are regular files or directories
/// (symlinks followed), paired with whether each is a directory
fn immediate_entries(dir: &Path) -> impl Iterator<Item = (String, bool)> + '_ {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter_map(|entry| {
            let file_type = entry.file_type();
            if !file_type.is_dir() && !file_type.is_file() {
                return None;
            }
            match entry.file_name().to_str() {
                Some(name) => Some((name.to_string(), file_type.is_dir())),
                None => {
                    warn!("Skipping non-UTF-8 name: {}", entry.path().display());
                    None
                }
            }
        })
}

fn root_title(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
