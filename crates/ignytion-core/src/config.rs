//! Site configuration
//!
//! The configuration is a TOML document compiled into the binary. Every field
//! has a default so a partial document is valid, and a broken one falls back
//! to [`SiteConfig::default`] instead of taking the site down.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::prelude::*;

/// Embedded configuration document
pub const SITE_TOML: &str = include_str!("../site.toml");

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSettings,
    pub release: ReleaseSettings,
    pub content: ContentSettings,
}

/// Identity and contact details
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteSettings {
    pub name: String,
    pub tagline: String,
    pub contact_email: String,
    pub support_email: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: "IGNYTION".to_string(),
            tagline: "Open-source EDA platform for 180nm chip design".to_string(),
            contact_email: "contact@ignytion.com".to_string(),
            support_email: "support@ignytion.com".to_string(),
        }
    }
}

/// The release advertised on the downloads page
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReleaseSettings {
    pub version: String,
    pub date: NaiveDate,
    pub channel: String,
}

impl Default for ReleaseSettings {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or_default(),
            channel: "Latest Stable".to_string(),
        }
    }
}

impl ReleaseSettings {
    /// Release date as shown to visitors, e.g. "January 15, 2025"
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

/// Editable marketing copy pre-filled in the admin content tab
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContentSettings {
    pub hero_title: String,
    pub hero_description: String,
    pub feature_highlight: String,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            hero_title: "Ignite Your Semiconductor Innovation".to_string(),
            hero_description: "IGNYTION delivers powerful software solutions designed \
                               specifically for semiconductor industries."
                .to_string(),
            feature_highlight: "Advanced chip design automation".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a configuration document
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load the embedded configuration, falling back to defaults
    pub fn load() -> Self {
        match Self::parse(SITE_TOML) {
            Ok(config) => {
                debug!("Loaded embedded site configuration");
                config
            }
            Err(e) => {
                warn!("Failed to parse embedded site configuration: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::parse(SITE_TOML).unwrap();
        assert_eq!(config.site.name, "IGNYTION");
        assert_eq!(config.release.version, "1.0.0");
        assert_eq!(config, SiteConfig::load());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SiteConfig::parse(
            r#"
            [site]
            name = "Acme EDA"
            "#,
        )
        .unwrap();
        assert_eq!(config.site.name, "Acme EDA");
        assert_eq!(config.site.support_email, "support@ignytion.com");
        assert_eq!(config.release, ReleaseSettings::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(SiteConfig::parse("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let err = SiteConfig::parse("[release]\ndate = \"not a date\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));

        let err = SiteConfig::parse("[site").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_display_date() {
        assert_eq!(ReleaseSettings::default().display_date(), "January 15, 2025");
    }
}
