//! `remote-page` - build-time plugin that injects a remotely hosted document
//! into a static documentation site as a virtual page.
//!
//! # Features
//!
//! - **Fetch**: one HTTPS GET per build, body streamed chunk by chunk and
//!   decoded as UTF-8
//! - **Lifecycle**: pre-build fetch populates a single-slot document cache;
//!   page enumeration reads it with no further I/O
//! - **Failure policy**: any status, transport or stream failure aborts the
//!   build; no retries, no degraded output
//!
//! # Example
//!
//! ```rust,no_run
//! use remote_page::{BuildConfig, RemotePagePlugin, SitePlugin};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut plugin = RemotePagePlugin::new()?;
//!     let config = BuildConfig::default();
//!
//!     plugin.before_build(&config, true).await?;
//!     for page in plugin.add_pages(&config, true)? {
//!         println!("{} ({} bytes)", page.route_path, page.content.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod http_client;
pub mod page;
pub mod plugin;

pub use http_client::{FetchError, FetchResult, RemoteClient};
pub use page::{DocumentState, RemoteDocument, VirtualPage};
pub use plugin::{BuildConfig, PluginError, RemotePageConfig, RemotePagePlugin, SitePlugin};

/// Version of remote-page
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
