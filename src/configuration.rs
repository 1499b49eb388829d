//! 全局配置：进程级共享客户端的配置与获取。
//!
//! Process-wide client.
//!
//! Applications that do not want to thread a client handle through their code
//! call [`configure`] once at startup and use the `shared()` constructors of
//! the resource façades afterwards. Reconfiguring swaps the shared pointer;
//! callers still holding the previous `Arc` keep using it unaffected.

use crate::client::{DocumentAtomClient, DocumentAtomClientBuilder};
use crate::{Error, Result};
use arc_swap::ArcSwapOption;
use std::sync::Arc;
use tracing::info;

static SHARED_CLIENT: ArcSwapOption<DocumentAtomClient> = ArcSwapOption::const_empty();

/// Configure the process-wide client with default timeout (10 s) and retries (3).
pub fn configure(endpoint: impl Into<String>) -> Result<Arc<DocumentAtomClient>> {
    configure_with(DocumentAtomClientBuilder::new().endpoint(endpoint))
}

/// Configure the process-wide client from a builder.
///
/// On error the previously configured client (if any) stays in place.
pub fn configure_with(builder: DocumentAtomClientBuilder) -> Result<Arc<DocumentAtomClient>> {
    let client = Arc::new(builder.build()?);
    info!(
        base_url = client.base_url(),
        timeout_ms = client.timeout().as_millis() as u64,
        retries = client.retries(),
        "document-atom sdk configured"
    );
    SHARED_CLIENT.store(Some(client.clone()));
    Ok(client)
}

/// The process-wide client.
pub fn client() -> Result<Arc<DocumentAtomClient>> {
    SHARED_CLIENT.load_full().ok_or(Error::NotConfigured)
}

/// Whether [`configure`] has been called.
pub fn is_configured() -> bool {
    SHARED_CLIENT.load().is_some()
}

/// Drop the process-wide client. Subsequent `shared()` calls fail with
/// [`Error::NotConfigured`] until [`configure`] is called again.
pub fn reset() -> Option<Arc<DocumentAtomClient>> {
    SHARED_CLIENT.swap(None)
}
