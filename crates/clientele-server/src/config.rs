//! Server configuration read from Shuttle secrets

use anyhow::{bail, Context};
use shuttle_runtime::SecretStore;

pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Runtime settings for the API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bearer token guarding `/api/client`; `None` disables auth
    pub api_key: Option<String>,
    /// Page size used when a listing request omits `size`
    pub default_page_size: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ServerConfig {
    pub fn from_secrets(secrets: &SecretStore) -> anyhow::Result<Self> {
        Self::from_lookup(|key| secrets.get(key))
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> anyhow::Result<Self> {
        let api_key = lookup("CLIENTELE_API_KEY").filter(|key| !key.trim().is_empty());

        let default_page_size = match lookup("CLIENTELE_DEFAULT_PAGE_SIZE") {
            Some(raw) => {
                let size: i64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("CLIENTELE_DEFAULT_PAGE_SIZE is not a number: {raw}"))?;
                if size <= 0 {
                    bail!("CLIENTELE_DEFAULT_PAGE_SIZE must be positive, got {size}");
                }
                size
            }
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            api_key,
            default_page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]).unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_reads_values() {
        let cfg = config(&[
            ("CLIENTELE_API_KEY", "secret"),
            ("CLIENTELE_DEFAULT_PAGE_SIZE", "50"),
        ])
        .unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("secret"));
        assert_eq!(cfg.default_page_size, 50);
    }

    #[test]
    fn test_blank_api_key_disables_auth() {
        let cfg = config(&[("CLIENTELE_API_KEY", "  ")]).unwrap();
        assert_eq!(cfg.api_key, None);
    }

    #[test]
    fn test_rejects_bad_page_size() {
        assert!(config(&[("CLIENTELE_DEFAULT_PAGE_SIZE", "0")]).is_err());
        assert!(config(&[("CLIENTELE_DEFAULT_PAGE_SIZE", "many")]).is_err());
    }
}
