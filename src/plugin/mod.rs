//! Build-time plugin surface for the host site generator.
//!
//! The host owns the build pipeline and calls each plugin's lifecycle hooks
//! at defined points: [`SitePlugin::before_build`] once before any page
//! content is collected, then [`SitePlugin::add_pages`] when pages are
//! gathered for rendering. The host guarantees that order and calls each
//! hook at most once per build (enumeration may repeat during a dev serve).
//!
//! # Architecture
//!
//! - [`SitePlugin`]: async trait every build plugin implements
//! - [`RemotePagePlugin`]: fetches one remote document and injects it
//! - [`BuildConfig`]: host build configuration passed into every hook
//!
//! # Example
//!
//! ```rust,no_run
//! use remote_page::{BuildConfig, RemotePagePlugin, SitePlugin};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut plugin = RemotePagePlugin::new()?;
//! let config = BuildConfig::default();
//!
//! plugin.before_build(&config, true).await?;
//! let pages = plugin.add_pages(&config, true)?;
//! assert_eq!(pages.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod remote_page;

pub use config::RemotePageConfig;
pub use remote_page::RemotePagePlugin;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::http_client::FetchError;
use crate::page::VirtualPage;

/// Host build configuration handed to every lifecycle hook.
///
/// Routing, navigation, locales and theming stay on the host side; plugins
/// receive the configuration opaquely and most ignore it.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    /// Site title, when the host has one configured.
    pub title: Option<String>,
    /// Root directory of the documentation sources.
    pub root: Option<PathBuf>,
}

/// Plugin lifecycle errors.
#[derive(Error, Debug)]
pub enum PluginError {
    /// The pre-build fetch failed; the host must abort the build.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A hook observed the document in a state the calling order forbids.
    #[error("{hook} observed the remote document in {state} state")]
    Sequencing {
        hook: &'static str,
        state: &'static str,
    },
}

/// A build-time plugin for the host site generator.
#[async_trait]
pub trait SitePlugin: Send + Sync {
    /// Identifying plugin name.
    fn name(&self) -> &'static str;

    /// Called once before the host collects any page content.
    ///
    /// `is_prod` distinguishes production builds from dev serves.
    ///
    /// # Errors
    ///
    /// An error aborts the entire build; no partial site is produced.
    async fn before_build(
        &mut self,
        config: &BuildConfig,
        is_prod: bool,
    ) -> Result<(), PluginError>;

    /// Called when the host collects the pages to render.
    ///
    /// Must be a pure read of plugin state: no I/O, repeatable, and the
    /// returned pages are identical on every call. The host renders each
    /// page as if a source document existed at its route.
    fn add_pages(
        &self,
        config: &BuildConfig,
        is_prod: bool,
    ) -> Result<Vec<VirtualPage>, PluginError>;
}
