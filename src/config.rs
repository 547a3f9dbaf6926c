use anyhow::{anyhow, Context, Result};
use course_core::{ExtensionTable, FileKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default name of the generated document inside the course root
pub const DEFAULT_OUTPUT_FILENAME: &str = "course_data.json";

/// Files checked, in order, when no `--config` is given
pub const CONFIG_PATHS: [&str; 2] = [
    "course-generator.toml",
    "config/course-generator.toml",
];

/// Configuration for the course data generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Directory scanning and file classification
    pub scan: ScanConfig,

    /// Generated document settings
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Extension lists per file kind
    pub extensions: ExtensionTable,

    /// Subtitle names probed for each video, in order. `{base}` is the
    /// video filename without its extension.
    pub subtitle_patterns: Vec<String>,

    /// Ignore chapter directories starting with a dot
    pub skip_hidden_chapters: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Filename written inside the course root
    pub filename: String,

    /// Title of the lesson created for resources that precede any lesson
    pub resources_lesson_title: String,

    /// Content of that lesson
    pub resources_placeholder: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: ExtensionTable::default(),
            subtitle_patterns: vec![
                "{base} English.vtt".to_string(),
                "{base}.vtt".to_string(),
                "{base} English.srt".to_string(),
                "{base}.srt".to_string(),
            ],
            skip_hidden_chapters: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            resources_lesson_title: "Resources".to_string(),
            resources_placeholder: "<p>Download the resources below:</p>".to_string(),
        }
    }
}

impl ScanConfig {
    /// Candidate subtitle filenames for a video base name, in probe order
    pub fn subtitle_candidates(&self, base: &str) -> Vec<String> {
        self.subtitle_patterns
            .iter()
            .map(|pattern| pattern.replace("{base}", base))
            .collect()
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Otherwise the first readable
    /// file in [`CONFIG_PATHS`] is used, falling back to defaults. Environment
    /// overrides are applied last in every case.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let mut config = Self::from_file(path)?;
            config.apply_env_overrides();
            return Ok(config);
        }

        for path in &CONFIG_PATHS {
            if let Ok(config_str) = std::fs::read_to_string(path) {
                match toml::from_str::<Config>(&config_str) {
                    Ok(mut config) => {
                        tracing::info!("📄 Loaded configuration from: {}", path);
                        config.apply_env_overrides();
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {}: {}", path, e);
                    }
                }
            }
        }

        Ok(Self::from_env())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::info!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Defaults with environment variable overrides
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `COURSE_GEN_*` overrides using the given variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filename) = lookup("COURSE_GEN_OUTPUT_FILE") {
            self.output.filename = filename;
        }

        if let Some(title) = lookup("COURSE_GEN_RESOURCES_TITLE") {
            self.output.resources_lesson_title = title;
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        std::fs::write(path, config_str)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        tracing::info!("💾 Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let filename = &self.output.filename;
        if filename.trim().is_empty() {
            return Err(anyhow!("output filename must not be empty"));
        }

        if filename.contains('/') || filename.contains('\\') {
            return Err(anyhow!(
                "output filename must be a plain name inside the course folder: {}",
                filename
            ));
        }

        // A rerun would otherwise pick the previous output up as a lesson
        if self.scan.extensions.classify(filename) != FileKind::Unclassified {
            return Err(anyhow!(
                "output filename would be scanned as course content: {}",
                filename
            ));
        }

        if let Some(pattern) = self
            .scan
            .subtitle_patterns
            .iter()
            .find(|p| !p.contains("{base}"))
        {
            return Err(anyhow!("subtitle pattern is missing {{base}}: {}", pattern));
        }

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }

    /// Get runtime configuration summary
    pub fn summary(&self) -> String {
        let ext = &self.scan.extensions;
        format!(
            "Course Generator Configuration:\n\
            - Video: {}\n\
            - Text: {}\n\
            - Subtitle: {}\n\
            - Resource: {}\n\
            - Subtitle patterns: {}\n\
            - Output file: {}",
            ext.video.join(", "),
            ext.text.join(", "),
            ext.subtitle.join(", "),
            ext.resource.join(", "),
            self.scan.subtitle_patterns.join(" | "),
            self.output.filename
        )
    }
}

/// Configuration builder for programmatic config creation
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_output_filename(mut self, filename: impl Into<String>) -> Self {
        self.config.output.filename = filename.into();
        self
    }

    pub fn with_extensions(mut self, extensions: ExtensionTable) -> Self {
        self.config.scan.extensions = extensions;
        self
    }

    pub fn with_subtitle_patterns(mut self, patterns: Vec<String>) -> Self {
        self.config.scan.subtitle_patterns = patterns;
        self
    }

    pub fn with_resources_lesson(
        mut self,
        title: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        self.config.output.resources_lesson_title = title.into();
        self.config.output.resources_placeholder = placeholder.into();
        self
    }

    pub fn skip_hidden_chapters(mut self, skip: bool) -> Self {
        self.config.scan.skip_hidden_chapters = skip;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
