//! # Configuration State
//!
//! Stores session configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PROCURE_*`)
//! 2. Config file (`procure.toml`)
//! 3. Defaults (this file)
//!
//! ## Config File Location
//! - Explicit path passed to [`ConfigState::load`]
//! - `PROCURE_CONFIG` environment variable
//! - Platform config dir: `~/.config/procure/procure.toml` on Linux
//!
//! ## Example `procure.toml`
//! ```toml
//! [institution]
//! name = "Technische Hochschule Aschaffenburg"
//!
//! [order]
//! department = "THA"
//! tax_rate = "19"
//! contact_person = "Prof. Biedermann"
//!
//! [card]
//! amount_limit = "5000"
//!
//! [display]
//! currency_symbol = "€"
//! paper_width = 72
//! ```
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use procure_core::order_number::DepartmentCode;
use procure_core::validation::clamp_percentage;
use procure_core::{Money, Percentage, CARD_AMOUNT_LIMIT, DEFAULT_DEPARTMENT};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "PROCURE_CONFIG";

/// Narrowest paper the print view can lay out.
pub const MIN_PAPER_WIDTH: usize = 40;

// =============================================================================
// Sections
// =============================================================================

/// The institution printed on every form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionConfig {
    #[serde(default = "default_institution_name")]
    pub name: String,

    /// Address lines below the name on printouts.
    #[serde(default = "default_institution_address")]
    pub address: Vec<String>,
}

fn default_institution_name() -> String {
    "Technische Hochschule Aschaffenburg".to_string()
}

fn default_institution_address() -> Vec<String> {
    vec![
        "Würzburger Straße 45".to_string(),
        "63743 Aschaffenburg".to_string(),
    ]
}

impl Default for InstitutionConfig {
    fn default() -> Self {
        InstitutionConfig {
            name: default_institution_name(),
            address: default_institution_address(),
        }
    }
}

/// Defaults pre-filled into a fresh order form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDefaults {
    /// Department code used in order numbers.
    #[serde(default = "default_department")]
    pub department: String,

    /// VAT rate in percent.
    #[serde(default = "Percentage::default_tax_rate")]
    pub tax_rate: Percentage,

    #[serde(default = "default_delivery_building")]
    pub delivery_building: String,

    #[serde(default = "default_contact_person")]
    pub contact_person: String,

    #[serde(default = "default_contact_phone")]
    pub contact_phone: String,

    #[serde(default = "default_contact_fax")]
    pub contact_fax: String,

    #[serde(default = "default_chapter")]
    pub chapter: String,

    #[serde(default = "default_title_tg")]
    pub title_tg: String,

    #[serde(default = "default_cost_center")]
    pub cost_center: String,
}

fn default_department() -> String {
    DEFAULT_DEPARTMENT.to_string()
}

fn default_delivery_building() -> String {
    "C2-318".to_string()
}

fn default_contact_person() -> String {
    "Prof. Biedermann".to_string()
}

fn default_contact_phone() -> String {
    "+49 (0)6021-4206-926".to_string()
}

fn default_contact_fax() -> String {
    "+49 (0)6021-4206-600".to_string()
}

fn default_chapter() -> String {
    "1234".to_string()
}

fn default_title_tg() -> String {
    "987654".to_string()
}

fn default_cost_center() -> String {
    "6606105".to_string()
}

impl Default for OrderDefaults {
    fn default() -> Self {
        OrderDefaults {
            department: default_department(),
            tax_rate: Percentage::default_tax_rate(),
            delivery_building: default_delivery_building(),
            contact_person: default_contact_person(),
            contact_phone: default_contact_phone(),
            contact_fax: default_contact_fax(),
            chapter: default_chapter(),
            title_tg: default_title_tg(),
            cost_center: default_cost_center(),
        }
    }
}

/// Virtual credit card settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSettings {
    /// Amounts above this are flagged, not rejected.
    #[serde(default = "default_amount_limit")]
    pub amount_limit: Money,

    #[serde(default = "default_institution_name")]
    pub organization_unit: String,
}

fn default_amount_limit() -> Money {
    Money::from_euros(CARD_AMOUNT_LIMIT)
}

impl Default for CardSettings {
    fn default() -> Self {
        CardSettings {
            amount_limit: default_amount_limit(),
            organization_unit: default_institution_name(),
        }
    }
}

/// Presentation settings for both renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Print view width in characters.
    #[serde(default = "default_paper_width")]
    pub paper_width: usize,
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

fn default_paper_width() -> usize {
    72
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
            paper_width: default_paper_width(),
        }
    }
}

// =============================================================================
// Config State
// =============================================================================

/// Session configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigState {
    #[serde(default)]
    pub institution: InstitutionConfig,

    #[serde(default)]
    pub order: OrderDefaults,

    #[serde(default)]
    pub card: CardSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl ConfigState {
    /// Loads configuration from file and environment.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => {
                info!(?path, "Loading config from file");
                Self::from_file(&path)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration or falls back to defaults on any error.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML config file without applying environment overrides.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.order.department.trim().is_empty() {
            return Err(ConfigError::Invalid("department must not be empty".into()));
        }

        if !self.card.amount_limit.is_positive() {
            return Err(ConfigError::Invalid(format!(
                "card amount limit must be positive, got {}",
                self.card.amount_limit
            )));
        }

        if self.display.paper_width < MIN_PAPER_WIDTH {
            return Err(ConfigError::Invalid(format!(
                "paper_width must be at least {}, got {}",
                MIN_PAPER_WIDTH, self.display.paper_width
            )));
        }

        Ok(())
    }

    /// Applies `PROCURE_*` environment variables on top of the file values.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(department) = var("PROCURE_DEPARTMENT") {
            debug!(department = %department, "Overriding department from environment");
            self.order.department = department;
        }

        if let Some(rate) = var("PROCURE_TAX_RATE") {
            self.order.tax_rate = clamp_percentage(&rate, self.order.tax_rate);
        }

        if let Some(symbol) = var("PROCURE_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }

        if let Some(limit) = var("PROCURE_CARD_LIMIT") {
            match limit.parse::<Money>() {
                Ok(parsed) => self.card.amount_limit = parsed,
                Err(_) => warn!(limit = %limit, "Invalid card limit in environment"),
            }
        }

        if let Some(person) = var("PROCURE_CONTACT_PERSON") {
            self.order.contact_person = person;
        }

        if let Some(width) = var("PROCURE_PAPER_WIDTH") {
            match width.parse::<usize>() {
                Ok(parsed) => self.display.paper_width = parsed,
                Err(_) => warn!(width = %width, "Invalid paper width in environment"),
            }
        }
    }

    /// Gets the default config path.
    fn default_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        directories::ProjectDirs::from("de", "th-ab", "procure")
            .map(|dirs| dirs.config_dir().join("procure.toml"))
    }

    /// The configured department, normalized for order numbers.
    pub fn department(&self) -> DepartmentCode {
        DepartmentCode::new(&self.order.department)
    }

    /// Formats an amount for display: `206.94 €`.
    pub fn format_currency(&self, amount: Money) -> String {
        format!("{} {}", amount, self.display.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.order.department, "THA");
        assert_eq!(config.order.tax_rate, Percentage::from_whole(19));
        assert_eq!(config.order.contact_person, "Prof. Biedermann");
        assert_eq!(config.card.amount_limit, Money::from_euros(5000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(20694)), "206.94 €");
        assert_eq!(config.format_currency(Money::zero()), "0.00 €");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ConfigState::from_toml(
            r#"
            [order]
            department = "inf"
            tax_rate = "7"

            [display]
            paper_width = 60
            "#,
        )
        .unwrap();

        assert_eq!(config.order.department, "inf");
        assert_eq!(config.department().as_str(), "INF");
        assert_eq!(config.order.tax_rate, Percentage::from_whole(7));
        assert_eq!(config.order.delivery_building, "C2-318");
        assert_eq!(config.display.paper_width, 60);
        assert_eq!(config.display.currency_symbol, "€");
    }

    #[test]
    fn test_toml_tax_rate_is_clamped() {
        let config = ConfigState::from_toml(
            r#"
            [order]
            tax_rate = "250"
            "#,
        )
        .unwrap();
        assert_eq!(config.order.tax_rate, Percentage::from_whole(100));
        assert!(config.validate().is_ok());

        let config = ConfigState::from_toml("[order]\ntax_rate = \"-7\"\n").unwrap();
        assert_eq!(config.order.tax_rate, Percentage::zero());
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = ConfigState::from_toml("[order\ndepartment = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PROCURE_DEPARTMENT", "BWL"),
            ("PROCURE_TAX_RATE", "7"),
            ("PROCURE_CARD_LIMIT", "2500"),
            ("PROCURE_PAPER_WIDTH", "wide"),
        ]
        .into_iter()
        .collect();

        let mut config = ConfigState::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.order.department, "BWL");
        assert_eq!(config.order.tax_rate, Percentage::from_whole(7));
        assert_eq!(config.card.amount_limit, Money::from_euros(2500));
        assert_eq!(config.display.paper_width, 72);
    }

    #[test]
    fn test_validation() {
        let mut config = ConfigState::default();
        config.display.paper_width = 20;
        assert!(config.validate().is_err());

        let mut config = ConfigState::default();
        config.order.department = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = ConfigState::default();
        config.card.amount_limit = Money::zero();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip_sections() {
        let toml_str = toml::to_string_pretty(&ConfigState::default()).unwrap();
        assert!(toml_str.contains("[order]"));
        assert!(toml_str.contains("[display]"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("procure-does-not-exist.toml");
        let config = ConfigState::load_or_default(Some(path));
        assert_eq!(config.order.department, "THA");
    }
}
