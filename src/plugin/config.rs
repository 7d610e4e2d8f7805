//! Remote-page plugin configuration.
//!
//! ```toml
//! address = "https://github.com/web-infra-dev/deep-dive-into-tla/blob/master/README.md"
//! route = "/tla"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

/// Document fetched when no address is configured.
pub const DEFAULT_ADDRESS: &str =
    "https://raw.githubusercontent.com/ulivz/deep-dive-into-tla/master/README.md";

/// Route the fetched document is mounted at by default.
pub const DEFAULT_ROUTE: &str = "/tla";

/// Configuration for the remote-page plugin.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemotePageConfig {
    /// Address of the remote document.
    pub address: String,
    /// Route the virtual page is mounted at.
    pub route: String,
}

impl Default for RemotePageConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_owned(),
            route: DEFAULT_ROUTE.to_owned(),
        }
    }
}

impl RemotePageConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is not valid TOML for this config.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid remote-page TOML configuration")
    }

    /// The address the fetcher should use.
    ///
    /// GitHub *blob* page URLs are rewritten to their raw-content
    /// equivalent: the blob page serves the HTML viewer, not the document.
    /// Any other address passes through untouched; the fetcher itself
    /// performs no validation.
    #[must_use]
    pub fn fetch_address(&self) -> String {
        normalize_github_blob(&self.address).unwrap_or_else(|| self.address.clone())
    }
}

/// Rewrite `https://github.com/{owner}/{repo}/blob/{ref}/{path}` to
/// `https://raw.githubusercontent.com/{owner}/{repo}/{ref}/{path}`.
fn normalize_github_blob(address: &str) -> Option<String> {
    let url = Url::parse(address).ok()?;
    if url.host_str()? != "github.com" {
        return None;
    }

    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    if segments.len() < 5 || segments[2] != "blob" {
        return None;
    }

    let (owner, repo, git_ref) = (segments[0], segments[1], segments[3]);
    let path = segments[4..].join("/");
    Some(format!(
        "https://raw.githubusercontent.com/{owner}/{repo}/{git_ref}/{path}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_tla_deep_dive() {
        let config = RemotePageConfig::default();
        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.route, "/tla");
    }

    #[test]
    fn parse_empty_config_falls_back_to_defaults() {
        let config = RemotePageConfig::from_toml("").unwrap();
        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.route, DEFAULT_ROUTE);
    }

    #[test]
    fn parse_full_config() {
        let config = RemotePageConfig::from_toml(
            r#"
address = "https://example.com/notes.md"
route = "/notes"
"#,
        )
        .unwrap();
        assert_eq!(config.address, "https://example.com/notes.md");
        assert_eq!(config.route, "/notes");
    }

    #[test]
    fn parse_rejects_malformed_toml() {
        assert!(RemotePageConfig::from_toml("address = ").is_err());
    }

    #[test]
    fn github_blob_addresses_normalize_to_raw() {
        let config = RemotePageConfig {
            address: "https://github.com/web-infra-dev/deep-dive-into-tla/blob/master/README.md"
                .to_owned(),
            route: "/en/post".to_owned(),
        };
        assert_eq!(
            config.fetch_address(),
            "https://raw.githubusercontent.com/web-infra-dev/deep-dive-into-tla/master/README.md"
        );

        let config = RemotePageConfig {
            address:
                "https://github.com/web-infra-dev/deep-dive-into-tla/blob/master/README-zh-CN.md"
                    .to_owned(),
            route: "/zh/post".to_owned(),
        };
        assert_eq!(
            config.fetch_address(),
            "https://raw.githubusercontent.com/web-infra-dev/deep-dive-into-tla/master/README-zh-CN.md"
        );
    }

    #[test]
    fn raw_addresses_pass_through() {
        let config = RemotePageConfig::default();
        assert_eq!(config.fetch_address(), DEFAULT_ADDRESS);
    }

    #[test]
    fn non_blob_github_addresses_pass_through() {
        let address = "https://github.com/web-infra-dev/deep-dive-into-tla";
        let config = RemotePageConfig {
            address: address.to_owned(),
            route: "/tla".to_owned(),
        };
        assert_eq!(config.fetch_address(), address);
    }

    #[test]
    fn unparseable_addresses_pass_through() {
        let config = RemotePageConfig {
            address: "not a url".to_owned(),
            route: "/tla".to_owned(),
        };
        assert_eq!(config.fetch_address(), "not a url");
    }
}
