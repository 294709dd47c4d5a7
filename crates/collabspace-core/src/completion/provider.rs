//! The provider the host registers against the engine. Bridges the widget's
//! completion machinery to the remote service.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::client::CompletionClient;
use crate::editor::widget::{CompletionContext, CompletionItem, CompletionProvider};
use crate::error::Result;

/// Completion provider scoped to one binding of one language.
///
/// `generation` is shared with the owning host, which bumps it on every
/// rebind and on unmount. A provider whose `registered_at` no longer matches
/// is stale: it skips the fetch, and a request already in flight when the
/// binding was replaced delivers nothing. That is what keeps completions away
/// from a widget that has since been rebound or disposed.
pub struct RemoteCompletionProvider {
    client: CompletionClient,
    language: String,
    generation: Arc<AtomicU64>,
    registered_at: u64,
}

impl RemoteCompletionProvider {
    pub fn new(
        client: CompletionClient,
        language: impl Into<String>,
        generation: Arc<AtomicU64>,
        registered_at: u64,
    ) -> Self {
        Self {
            client,
            language: language.into(),
            generation,
            registered_at,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    fn is_stale(&self) -> bool {
        self.generation.load(Ordering::SeqCst) != self.registered_at
    }
}

#[async_trait::async_trait]
impl CompletionProvider for RemoteCompletionProvider {
    async fn complete(&self, context: &CompletionContext) -> Result<Vec<CompletionItem>> {
        if self.is_stale() {
            return Ok(Vec::new());
        }
        let items = self.client.complete(&self.language, context).await?;
        // The binding may have been replaced while the request was in flight.
        if self.is_stale() {
            tracing::debug!(
                language = %self.language,
                "dropping {} completions for a stale binding",
                items.len()
            );
            return Ok(Vec::new());
        }
        Ok(items)
    }
}
