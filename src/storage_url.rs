//! Remote storage URL synthesis

use tracing::warn;

/// Build `base/chapter/filename` with each path segment percent-encoded.
///
/// Only RFC 3986 unreserved characters stay literal inside a segment, so a
/// `/` in a chapter or file name is encoded rather than treated as a
/// separator.
pub fn generate_url(base: &str, chapter: &str, filename: &str) -> String {
    format!(
        "{}/{}/{}",
        base,
        urlencoding::encode(chapter),
        urlencoding::encode(filename)
    )
}

/// URL builder bound to one bucket base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSynthesizer {
    base: String,
}

impl UrlSynthesizer {
    /// Trailing slashes are stripped from `base` here, once
    pub fn new(base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();

        if let Err(e) = ::url::Url::parse(&base) {
            warn!("Bucket URL {:?} is not an absolute URL ({}); using it as given", base, e);
        }

        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn file_url(&self, chapter: &str, filename: &str) -> String {
        generate_url(&self.base, chapter, filename)
    }
}
