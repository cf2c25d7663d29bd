// wallet-core/src/config.rs
//
// Cấu hình cho binary `keygen`
//
// Thứ tự: defaults → biến môi trường → file TOML (nếu có) → CLI flags.
// Giá trị sai ở bất kỳ tầng nào là lỗi, không fallback về default.
// Passphrase BIP-39 không bao giờ đọc từ file.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::crypto::{WordCount, MAX_ACCOUNT_INDEX};
use crate::network::NetworkKind;

/// Environment variable holding the BIP-39 passphrase.
pub const PASSPHRASE_ENV: &str = "KEYGEN_PASSPHRASE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeygenConfig {
    #[serde(default)]
    pub derivation: DerivationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Derivation defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivationConfig {
    pub network: NetworkKind,
    /// Number of consecutive accounts `derive` prints
    pub accounts: u32,
    /// Length of freshly generated mnemonics
    pub word_count: WordCount,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self {
            network: NetworkKind::default(),
            accounts: 1,
            word_count: WordCount::Twelve,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "text".into(),
        }
    }
}

/// Biến môi trường: chưa set → `None`, không phải UTF-8 → lỗi
fn env_var(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("{} is not valid UTF-8", name)),
    }
}

impl KeygenConfig {
    /// Defaults with `KEYGEN_NETWORK`, `KEYGEN_LOG_LEVEL` and
    /// `KEYGEN_LOG_FORMAT` applied. A network tag that does not parse is an
    /// error, never a silent fallback.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(tag) = env_var("KEYGEN_NETWORK")? {
            config.derivation.network = tag
                .parse::<NetworkKind>()
                .with_context(|| format!("KEYGEN_NETWORK={:?} is not a supported network", tag))?;
        }
        if let Some(level) = env_var("KEYGEN_LOG_LEVEL")? {
            config.logging.level = level;
        }
        if let Some(format) = env_var("KEYGEN_LOG_FORMAT")? {
            config.logging.format = format;
        }
        Ok(config)
    }

    /// Built-in defaults overlaid with the file only.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::default().merge_file(path)
    }

    /// Environment first, then the file if given. Keys the file sets win;
    /// keys it omits keep their environment value.
    ///
    /// Not validated yet: the caller applies command-line overrides and then
    /// calls [`KeygenConfig::validate`].
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let config = Self::from_env()?;
        match path {
            Some(path) => config.merge_file(path),
            None => Ok(config),
        }
    }

    fn merge_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let file: toml::Table =
            toml::from_str(&content).with_context(|| "Failed to parse config file as TOML")?;

        let toml::Value::Table(mut merged) = toml::Value::try_from(&self)? else {
            bail!("config did not serialize to a TOML table");
        };
        // Gộp theo từng section: key trong file ghi đè, key thiếu giữ nguyên
        for (section, value) in file {
            match (merged.remove(&section), value) {
                (Some(toml::Value::Table(mut base)), toml::Value::Table(overrides)) => {
                    base.extend(overrides);
                    merged.insert(section, toml::Value::Table(base));
                }
                (_, value) => {
                    merged.insert(section, value);
                }
            }
        }

        toml::Value::Table(merged)
            .try_into()
            .with_context(|| format!("Invalid config file: {:?}", path.as_ref()))
    }

    /// Reject settings that would fail later in the pipeline.
    pub fn validate(&self) -> Result<()> {
        self.validate_range(0)?;
        if !matches!(self.logging.format.as_str(), "json" | "text") {
            bail!(
                "logging.format must be \"json\" or \"text\", got {:?}",
                self.logging.format
            );
        }
        Ok(())
    }

    /// Check that `accounts` wallets starting at `start` stay in the hardened range.
    pub fn validate_range(&self, start: u32) -> Result<()> {
        let accounts = self.derivation.accounts;
        if accounts == 0 {
            bail!("derivation.accounts must be at least 1");
        }
        let last = u64::from(start) + u64::from(accounts) - 1;
        if last > u64::from(MAX_ACCOUNT_INDEX) {
            bail!(
                "accounts {}..={} exceed the maximum account index {}",
                start,
                last,
                MAX_ACCOUNT_INDEX
            );
        }
        Ok(())
    }
}
