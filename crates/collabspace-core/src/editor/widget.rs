//! Narrow interfaces to the editing widget toolkit and its completion
//! machinery. The widget/engine internals live outside this crate; the host
//! only ever talks to them through these traits, and tests swap in mocks.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Invoked with the full updated buffer text on every user edit.
pub type ChangeHandler = Arc<dyn Fn(String) + Send + Sync>;

/// Options handed to the backend when mounting a widget.
#[derive(Debug, Clone)]
pub struct MountOptions {
    pub language: String,
    pub theme: String,
    pub initial_text: String,
}

/// A mounted text-editing widget.
pub trait TextWidget: Send + Sync {
    /// Replace the buffer programmatically. Must NOT fire the change
    /// listener: caller-owned content updates are not user edits.
    fn set_text(&self, text: &str);

    /// Current buffer contents.
    fn text(&self) -> String;

    /// Switch syntax highlighting to `language`.
    fn set_language(&self, language: &str);

    /// Install the user-edit listener. At most one listener is active.
    fn set_change_listener(&self, listener: ChangeHandler);
}

/// The editing engine/runtime a widget belongs to. Required for completion
/// provider registration.
pub trait EditorEngine: Send + Sync {
    fn register_completion_provider(
        &self,
        widget: &Arc<dyn TextWidget>,
        options: ProviderOptions,
    ) -> Result<Box<dyn ProviderRegistration>>;
}

/// Creates widget/engine pairs. Implemented by the embedding toolkit.
pub trait EditorBackend: Send + Sync {
    /// Bring up one widget instance. The two handles are only ever valid
    /// together.
    fn mount(&self, options: &MountOptions)
        -> Result<(Arc<dyn TextWidget>, Arc<dyn EditorEngine>)>;
}

/// A live provider registration. Dropping the handle releases it.
pub trait ProviderRegistration: Send {
    fn language(&self) -> &str;
}

/// Registration options for one completion provider.
pub struct ProviderOptions {
    pub language: String,
    pub provider: Arc<dyn CompletionProvider>,
}

/// Cursor context shipped with a completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionContext {
    pub text_before_cursor: String,
    pub text_after_cursor: String,
    /// 0-based cursor line.
    pub line: u32,
    /// 0-based cursor column.
    pub column: u32,
}

/// A single completion candidate, ordered best-first by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionItem {
    /// The text shown in the popup.
    pub label: String,
    /// The text to insert (falls back to the label).
    pub insert_text: String,
    /// Optional short description shown next to the label.
    pub detail: Option<String>,
}

/// Produces completion candidates for a cursor position. Invoked by the
/// widget's completion machinery, never by the host itself.
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, context: &CompletionContext) -> Result<Vec<CompletionItem>>;
}
