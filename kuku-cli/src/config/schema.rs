//! Configuration schema definitions.
//!
//! Every section has complete defaults, so an empty file (or no file at all)
//! describes a working setup once the two API keys are supplied.

use std::path::PathBuf;

use kuku::audio::{SpeechRequest, VoiceSettings};
use kuku::providers::{ElevenLabsConfig, GeminiConfig};
use kuku::synth::SynthesisSettings;
use serde::{Deserialize, Serialize};

use super::{ConfigError, ConfigResult};

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Text generation service.
    #[serde(default)]
    pub gemini: GeminiSection,

    /// Speech synthesis service.
    #[serde(default)]
    pub elevenlabs: ElevenLabsSection,

    /// Voice identity and tuning.
    #[serde(default)]
    pub voice: VoiceSection,

    /// Where audio ends up.
    #[serde(default)]
    pub output: OutputSection,
}

/// `[gemini]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeminiSection {
    /// API key. `GOOGLE_API_KEY` takes precedence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// API base URL.
    pub base_url: String,
    /// Model name.
    pub model: String,
    /// Request timeout in seconds, `0` disables it.
    pub timeout_secs: u64,
}

impl Default for GeminiSection {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: GeminiConfig::DEFAULT_BASE_URL.to_owned(),
            model: GeminiConfig::DEFAULT_MODEL.to_owned(),
            timeout_secs: GeminiConfig::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// `[elevenlabs]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElevenLabsSection {
    /// API key. `ELEVENLABS_API_KEY` takes precedence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// API base URL.
    pub base_url: String,
    /// Request timeout in seconds, `0` disables it.
    pub timeout_secs: u64,
}

impl Default for ElevenLabsSection {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: ElevenLabsConfig::DEFAULT_BASE_URL.to_owned(),
            timeout_secs: ElevenLabsConfig::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// `[voice]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VoiceSection {
    /// ElevenLabs voice id.
    pub voice_id: String,
    /// ElevenLabs model id.
    pub model_id: String,
    /// Voice consistency, 0.0 to 1.0.
    pub stability: f32,
    /// Similarity to the reference voice, 0.0 to 1.0.
    pub similarity_boost: f32,
}

impl Default for VoiceSection {
    fn default() -> Self {
        Self {
            voice_id: SynthesisSettings::DEFAULT_VOICE_ID.to_owned(),
            model_id: SpeechRequest::DEFAULT_MODEL.to_owned(),
            stability: VoiceSettings::DEFAULT_STABILITY,
            similarity_boost: VoiceSettings::DEFAULT_SIMILARITY_BOOST,
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    /// Audio file written by every successful run.
    pub path: PathBuf,
    /// File name used by `generate --download` when none is given.
    pub download_name: String,
}

impl OutputSection {
    /// Default download file name.
    pub const DEFAULT_DOWNLOAD_NAME: &'static str = "kuku_ai_voice.mp3";
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from(SynthesisSettings::DEFAULT_OUTPUT_PATH),
            download_name: Self::DEFAULT_DOWNLOAD_NAME.to_owned(),
        }
    }
}

impl AppConfig {
    /// Validate the configuration and return any issues found.
    #[must_use]
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if is_blank(self.gemini.api_key.as_deref()) {
            issues.push(ConfigIssue::warning(
                "gemini.api_key",
                "No Gemini key configured. Set GOOGLE_API_KEY.",
            ));
        }
        if is_blank(self.elevenlabs.api_key.as_deref()) {
            issues.push(ConfigIssue::warning(
                "elevenlabs.api_key",
                "No ElevenLabs key configured. Set ELEVENLABS_API_KEY.",
            ));
        }

        if self.gemini.model.trim().is_empty() {
            issues.push(ConfigIssue::error("gemini.model", "Model must not be empty"));
        }
        if self.voice.voice_id.trim().is_empty() {
            issues.push(ConfigIssue::error("voice.voice_id", "Voice id must not be empty"));
        }

        for (path, value) in [
            ("voice.stability", self.voice.stability),
            ("voice.similarity_boost", self.voice.similarity_boost),
        ] {
            if !(0.0..=1.0).contains(&value) {
                issues.push(ConfigIssue::error(path, "Must be between 0.0 and 1.0"));
            }
        }

        if self.output.path.as_os_str().is_empty() {
            issues.push(ConfigIssue::error("output.path", "Output path must not be empty"));
        }

        issues
    }

    /// Check if the configuration is valid (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate()
            .iter()
            .all(|issue| issue.level != IssueLevel::Error)
    }

    /// Merge process environment variables into the configuration.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_from(|name| std::env::var(name).ok())
    }

    /// Merge variables from `lookup` into the configuration.
    ///
    /// Set variables win over values from the file; empty ones are ignored.
    #[must_use]
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = var("GOOGLE_API_KEY") {
            self.gemini.api_key = Some(key);
        }
        if let Some(url) = var("GEMINI_BASE_URL") {
            self.gemini.base_url = url;
        }
        if let Some(model) = var("GEMINI_MODEL") {
            self.gemini.model = model;
        }
        if let Some(key) = var("ELEVENLABS_API_KEY") {
            self.elevenlabs.api_key = Some(key);
        }
        if let Some(url) = var("ELEVENLABS_BASE_URL") {
            self.elevenlabs.base_url = url;
        }
        if let Some(voice) = var("KUKU_VOICE_ID") {
            self.voice.voice_id = voice;
        }
        if let Some(path) = var("KUKU_OUTPUT") {
            self.output.path = PathBuf::from(path);
        }

        self
    }

    /// Client settings for the text generation service.
    ///
    /// # Errors
    ///
    /// Fails if no API key is configured.
    pub fn gemini_config(&self) -> ConfigResult<GeminiConfig> {
        let key = self
            .gemini
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingField("gemini.api_key (GOOGLE_API_KEY)".into()))?;

        Ok(GeminiConfig::new(key)
            .with_base_url(&self.gemini.base_url)
            .with_model(&self.gemini.model)
            .with_timeout(self.gemini.timeout_secs))
    }

    /// Client settings for the speech synthesis service.
    ///
    /// # Errors
    ///
    /// Fails if no API key is configured.
    pub fn elevenlabs_config(&self) -> ConfigResult<ElevenLabsConfig> {
        let key = self
            .elevenlabs
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::MissingField("elevenlabs.api_key (ELEVENLABS_API_KEY)".into())
            })?;

        Ok(ElevenLabsConfig::new(key)
            .with_base_url(&self.elevenlabs.base_url)
            .with_timeout(self.elevenlabs.timeout_secs))
    }

    /// Voice payload and output location for the synthesizer.
    #[must_use]
    pub fn synthesis_settings(&self) -> SynthesisSettings {
        SynthesisSettings::default()
            .with_voice_id(&self.voice.voice_id)
            .with_model_id(&self.voice.model_id)
            .with_voice_settings(VoiceSettings::new(
                self.voice.stability,
                self.voice.similarity_boost,
            ))
            .with_output_path(self.output.path.clone())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// A configuration validation issue.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    /// Issue severity level.
    pub level: IssueLevel,
    /// Configuration path (e.g., "voice.stability").
    pub path: String,
    /// Human-readable message.
    pub message: String,
}

impl ConfigIssue {
    /// Create an error-level issue.
    #[must_use]
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Error,
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a warning-level issue.
    #[must_use]
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Warning,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.level {
            IssueLevel::Error => "ERROR",
            IssueLevel::Warning => "WARN",
        };
        write!(f, "[{prefix}] {}: {}", self.path, self.message)
    }
}

/// Severity level for configuration issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueLevel {
    /// Prevents a run from working.
    Error,
    /// Worth fixing, but not fatal on its own.
    Warning,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_match_the_fixed_constants() {
        let config = AppConfig::default();
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.voice.voice_id, "EXAVITQu4vr4xnSDxMaL");
        assert_eq!(config.voice.model_id, "eleven_monolingual_v1");
        assert!((config.voice.stability - 0.5).abs() < f32::EPSILON);
        assert!((config.voice.similarity_boost - 0.75).abs() < f32::EPSILON);
        assert_eq!(config.output.path, PathBuf::from("ai_audio.mp3"));
        assert_eq!(config.output.download_name, "kuku_ai_voice.mp3");
    }

    #[test]
    fn empty_file_is_the_default_config() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
        assert!(!toml_str.contains("api_key"));
    }

    #[test]
    fn parse_sample_config() {
        let toml_str = r#"
[gemini]
api_key = "from-file"
model = "gemini-2.5-flash"

[voice]
stability = 0.3

[output]
path = "notes/today.mp3"
"#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.timeout_secs, 120);
        assert!((config.voice.stability - 0.3).abs() < f32::EPSILON);
        assert_eq!(config.voice.voice_id, "EXAVITQu4vr4xnSDxMaL");
        assert_eq!(config.output.path, PathBuf::from("notes/today.mp3"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<AppConfig>("[gemini]\nmodle = \"x\"\n").is_err());
    }

    #[test]
    fn environment_overrides_file() {
        let config: AppConfig = toml::from_str("[gemini]\napi_key = \"from-file\"\n").unwrap();
        let config = config.with_env_from(env(&[
            ("GOOGLE_API_KEY", "from-env"),
            ("ELEVENLABS_API_KEY", "xi-env"),
            ("KUKU_OUTPUT", "out.mp3"),
        ]));

        assert_eq!(config.gemini.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.elevenlabs.api_key.as_deref(), Some("xi-env"));
        assert_eq!(config.output.path, PathBuf::from("out.mp3"));
    }

    #[test]
    fn blank_environment_values_are_ignored() {
        let config: AppConfig = toml::from_str("[gemini]\napi_key = \"from-file\"\n").unwrap();
        let config = config.with_env_from(env(&[("GOOGLE_API_KEY", "  ")]));
        assert_eq!(config.gemini.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn default_config_only_warns_about_keys() {
        let config = AppConfig::default();
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.level == IssueLevel::Warning));
        assert!(config.is_valid());
    }

    #[test]
    fn out_of_range_voice_settings_are_errors() {
        let mut config = AppConfig::default();
        config.voice.similarity_boost = 1.5;
        assert!(!config.is_valid());
        assert!(
            config
                .validate()
                .iter()
                .any(|i| i.path == "voice.similarity_boost")
        );
    }

    #[test]
    fn client_configs_require_keys() {
        let config = AppConfig::default();
        assert!(matches!(
            config.gemini_config(),
            Err(ConfigError::MissingField(_))
        ));
        assert!(matches!(
            config.elevenlabs_config(),
            Err(ConfigError::MissingField(_))
        ));
    }

    #[test]
    fn builds_client_configs_and_settings() {
        let config = AppConfig::default().with_env_from(env(&[
            ("GOOGLE_API_KEY", "g"),
            ("ELEVENLABS_API_KEY", "xi"),
            ("KUKU_VOICE_ID", "voice-2"),
        ]));

        let gemini = config.gemini_config().unwrap();
        assert_eq!(gemini.api_key, "g");
        assert_eq!(gemini.model, "gemini-2.0-flash");

        let elevenlabs = config.elevenlabs_config().unwrap();
        assert_eq!(elevenlabs.api_key, "xi");

        let settings = config.synthesis_settings();
        assert_eq!(settings.voice_id, "voice-2");
        assert_eq!(settings.output_path, PathBuf::from("ai_audio.mp3"));
        assert_eq!(settings.voice_settings, VoiceSettings::default());
    }
}
