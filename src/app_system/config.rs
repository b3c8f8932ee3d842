use std::path::PathBuf;

use crate::domain::SortOption;
use crate::error::ConfigError;

pub const CATALOG_ENV: &str = "STOREFRONT_CATALOG";
pub const MAILBOX_SIZE_ENV: &str = "STOREFRONT_MAILBOX_SIZE";
pub const DEFAULT_SORT_ENV: &str = "STOREFRONT_DEFAULT_SORT";

/// Startup settings for the storefront binary.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// JSON catalog to load. `None` uses the bundled sample catalog.
    pub catalog_path: Option<PathBuf>,
    /// Capacity of the session actor's mailbox.
    pub mailbox_size: usize,
    pub default_sort: SortOption,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            mailbox_size: 100,
            default_sort: SortOption::NameAsc,
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Missing or blank keys keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = value(CATALOG_ENV) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = value(MAILBOX_SIZE_ENV) {
            config.mailbox_size = match raw.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        key: MAILBOX_SIZE_ENV,
                        value: raw,
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Ok(size) => size,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: MAILBOX_SIZE_ENV,
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            };
        }

        if let Some(key) = value(DEFAULT_SORT_ENV) {
            config.default_sort = SortOption::parse(&key);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.mailbox_size, 100);
    }

    #[test]
    fn test_reads_all_keys() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            (CATALOG_ENV, "/srv/products.json"),
            (MAILBOX_SIZE_ENV, " 16 "),
            (DEFAULT_SORT_ENV, "£HtoL"),
        ]))
        .unwrap();

        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/products.json")));
        assert_eq!(config.mailbox_size, 16);
        assert_eq!(config.default_sort, SortOption::PriceDesc);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[(CATALOG_ENV, "  ")])).unwrap();
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_invalid_mailbox_size() {
        let err = StorefrontConfig::from_lookup(lookup(&[(MAILBOX_SIZE_ENV, "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: MAILBOX_SIZE_ENV, .. }));

        let err = StorefrontConfig::from_lookup(lookup(&[(MAILBOX_SIZE_ENV, "0")])).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_unknown_sort_falls_back() {
        let config = StorefrontConfig::from_lookup(lookup(&[(DEFAULT_SORT_ENV, "newest")])).unwrap();
        assert_eq!(config.default_sort, SortOption::NameAsc);
    }
}
