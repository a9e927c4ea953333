//! Endpoint registry — the statically written registration table.
//!
//! The set of portal endpoints is fixed per release, so instead of
//! discovering handler modules at runtime the registry is built once,
//! synchronously, from [`endpoints::endpoint_table`]. Construction is
//! complete before the client is handed out, which removes any "ready"
//! state a caller would otherwise have to await.
//!
//! Registration is first-writer-wins: a duplicate name in the table is a
//! configuration error, logged and surfaced — never a silent overwrite.
//!
//! [`endpoints::endpoint_table`]: crate::endpoints::endpoint_table

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use crate::client::PortalStateInner;
use crate::envelope::ResponseEnvelope;
use crate::error::PortalError;

/// Boxed future returned by an installed handler.
pub type HandlerFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ResponseEnvelope, PortalError>> + Send + 'a>>;

/// An installed handler: adapts JSON params to the typed endpoint
/// function and boxes its future.
pub type HandlerFn = for<'a> fn(&'a PortalStateInner, serde_json::Value) -> HandlerFuture<'a>;

/// One row of the registration table: a unique method name and the
/// handler that implements it.
#[derive(Clone, Copy)]
pub struct EndpointDef {
    pub name: &'static str,
    pub handler: HandlerFn,
}

/// Name → handler map for string-named dispatch.
#[derive(Clone, Debug)]
pub struct EndpointRegistry {
    handlers: HashMap<&'static str, HandlerFn>,
}

impl EndpointRegistry {
    /// Install every definition in `table`, rejecting duplicates.
    pub fn from_table(table: &[EndpointDef]) -> Result<Self, PortalError> {
        let mut handlers: HashMap<&'static str, HandlerFn> =
            HashMap::with_capacity(table.len());
        for def in table {
            if handlers.contains_key(def.name) {
                tracing::warn!(endpoint = def.name, "duplicate endpoint definition rejected");
                return Err(PortalError::Config(format!(
                    "duplicate endpoint definition: {}",
                    def.name
                )));
            }
            handlers.insert(def.name, def.handler);
            tracing::debug!(endpoint = def.name, "installed endpoint");
        }
        Ok(Self { handlers })
    }

    /// All registered method names, sorted for stable output.
    pub fn method_list(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch a string-named call to its handler.
    pub async fn dispatch(
        &self,
        state: &PortalStateInner,
        method: &str,
        params: serde_json::Value,
    ) -> Result<ResponseEnvelope, PortalError> {
        let handler = *self
            .handlers
            .get(method)
            .ok_or_else(|| PortalError::Config(format!("unknown method: {}", method)))?;
        handler(state, params).await
    }
}
