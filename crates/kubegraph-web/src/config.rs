use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use kubegraph_types::GraphLayout;

/// Dashboard server configuration
///
/// Loaded from an optional TOML file; every field has a default so an empty
/// or absent file yields a working dashboard on localhost.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Address the HTTP server binds to
    pub bind: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Title shown in the dashboard header
    pub title: String,

    /// Layout the graph is first rendered with
    pub default_layout: GraphLayout,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8050,
            title: "Kubernetes Cluster Visualization".to_string(),
            default_layout: GraphLayout::Circle,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&raw).context(format!("Failed to parse config file: {}", path.display()))
    }

    /// Socket address string the server binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.listen_addr(), "127.0.0.1:8050");
        assert_eq!(config.default_layout, GraphLayout::Circle);
        assert_eq!(config.title, "Kubernetes Cluster Visualization");
    }

    #[test]
    fn test_parse_partial_file() {
        let config: DashboardConfig =
            toml::from_str("port = 9000\ndefault_layout = \"grid\"").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.default_layout, GraphLayout::Grid);
        assert_eq!(config.bind, "127.0.0.1");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<DashboardConfig>("listen = \"0.0.0.0\"").is_err());
    }
}
