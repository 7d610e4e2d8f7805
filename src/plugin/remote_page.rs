//! The remote-page plugin: fetch one document before the build, serve it as
//! a virtual page during page collection.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::{BuildConfig, PluginError, RemotePageConfig, SitePlugin};
use crate::http_client::{FetchResult, RemoteClient};
use crate::page::{DocumentState, RemoteDocument, VirtualPage};

/// Build plugin that injects a remotely hosted document as a virtual page.
///
/// The instance exclusively owns its document slot: `before_build` is the
/// only writer and `add_pages` the only reader, in that host-guaranteed
/// order, so no synchronization is needed beyond the borrow rules.
pub struct RemotePagePlugin {
    config: RemotePageConfig,
    client: RemoteClient,
    document: RemoteDocument,
}

impl RemotePagePlugin {
    /// Plugin with the default document and route.
    pub fn new() -> FetchResult<Self> {
        Self::with_config(RemotePageConfig::default())
    }

    /// Plugin for a specific document and route.
    pub fn with_config(config: RemotePageConfig) -> FetchResult<Self> {
        let client = RemoteClient::new()?;
        let document = RemoteDocument::new(config.fetch_address());
        Ok(Self {
            config,
            client,
            document,
        })
    }

    /// The owned document slot, for host-side inspection.
    #[must_use]
    pub fn document(&self) -> &RemoteDocument {
        &self.document
    }
}

#[async_trait]
impl SitePlugin for RemotePagePlugin {
    fn name(&self) -> &'static str {
        "remote-page"
    }

    async fn before_build(
        &mut self,
        _config: &BuildConfig,
        _is_prod: bool,
    ) -> Result<(), PluginError> {
        if !self.document.is_pending() {
            warn!(
                state = self.document.state().label(),
                "before_build invoked on an already resolved document"
            );
            return Err(PluginError::Sequencing {
                hook: "before_build",
                state: self.document.state().label(),
            });
        }

        info!(address = self.document.address(), "fetching remote page");
        match self.client.fetch_text(self.document.address()).await {
            Ok(text) => {
                self.document.fulfill(text);
                Ok(())
            }
            Err(e) => {
                // Already logged at the point of detection; mark the slot so
                // later hooks can tell the build was aborted.
                self.document.fail();
                Err(e.into())
            }
        }
    }

    fn add_pages(
        &self,
        _config: &BuildConfig,
        _is_prod: bool,
    ) -> Result<Vec<VirtualPage>, PluginError> {
        match self.document.state() {
            DocumentState::Ready(content) => {
                debug!(
                    route = %self.config.route,
                    bytes = content.len(),
                    "adding virtual page"
                );
                Ok(vec![VirtualPage {
                    route_path: self.config.route.clone(),
                    content: content.clone(),
                }])
            }
            // Pending means the host broke the hook ordering; Failed means
            // the build already aborted and enumeration is unreachable.
            other => Err(PluginError::Sequencing {
                hook: "add_pages",
                state: other.label(),
            }),
        }
    }
}
