//! Layered configuration.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from vigil.toml)
//! - User overrides (~/.config/vigil/vigil.toml, then ./vigil.toml)
//! - An explicit file passed on the command line
//! - `VIGIL_<SECTION>__<KEY>` environment variables, highest precedence

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};
use vigil_analysis::Analyzer;
use vigil_error::{ConfigError, VigilResult};
use vigil_rate_limit::RateLimitAdvisor;

const DEFAULT_CONFIG: &str = include_str!("../../../vigil.toml");

/// Moderation endpoint settings.
///
/// ```toml
/// [moderation]
/// model = "omni-moderation-latest"
/// base_url = "https://api.openai.com/v1"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModerationConfig {
    /// Moderation model identifier
    pub model: String,
    /// API root
    pub base_url: String,
    /// Request timeout in seconds, unbounded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ModerationConfig {
    /// Request timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Rate limit advice settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RateLimitSettings {
    /// Remaining-quota fraction below which a wait is advised
    pub threshold: f64,
    /// Sleep for the advised wait before returning
    #[serde(default)]
    pub respect_advice: bool,
}

/// Verdict analysis settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisSettings {
    /// Scores must be strictly greater than this to be reported
    pub score_threshold: f64,
    /// Maximum number of top scores reported
    pub top_n: usize,
}

/// Top-level Vigil configuration.
///
/// # Example
///
/// ```no_run
/// use vigil::VigilConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = VigilConfig::load()?;
/// println!("Moderating with {}", config.moderation.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VigilConfig {
    /// Moderation endpoint settings
    pub moderation: ModerationConfig,
    /// Rate limit advice settings
    pub rate_limit: RateLimitSettings,
    /// Verdict analysis settings
    pub analysis: AnalysisSettings,
}

impl VigilConfig {
    /// Load configuration from a specific file path on top of the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> VigilResult<Self> {
        debug!("Loading configuration from file");

        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?;
        Self::deserialize_validated(config)
    }

    /// Load configuration with precedence: env > explicit file > current dir > home dir > bundled.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> VigilResult<Self> {
        Self::load_with(None)
    }

    /// Like [`VigilConfig::load`], adding a required file above the user configs.
    #[instrument(skip(extra), fields(extra = ?extra.map(Path::display)))]
    pub fn load_with(extra: Option<&Path>) -> VigilResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/vigil/vigil.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("vigil").required(false));

        if let Some(path) = extra {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("VIGIL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| {
            ConfigError::new(format!("Failed to build configuration: {}", e))
        })?;
        Self::deserialize_validated(config)
    }

    fn deserialize_validated(config: Config) -> VigilResult<Self> {
        let parsed: Self = config.try_deserialize().map_err(|e| {
            ConfigError::new(format!("Failed to parse configuration: {}", e))
        })?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Check every value the kernel components would reject.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.moderation.model.trim().is_empty() {
            return Err(ConfigError::new("Moderation model must not be empty"));
        }
        if self.moderation.base_url.trim().is_empty() {
            return Err(ConfigError::new("Moderation base URL must not be empty"));
        }
        self.advisor()?;
        self.analyzer()?;
        Ok(())
    }

    /// Rate limit advisor built from the `[rate_limit]` section.
    pub fn advisor(&self) -> Result<RateLimitAdvisor, ConfigError> {
        RateLimitAdvisor::new(self.rate_limit.threshold)
    }

    /// Verdict analyzer built from the `[analysis]` section.
    pub fn analyzer(&self) -> Result<Analyzer, ConfigError> {
        Analyzer::new(self.analysis.score_threshold, self.analysis.top_n)
    }
}
