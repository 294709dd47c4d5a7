//! Editor host: owns one mounted widget and the lifecycle of its AI
//! completion binding.
//!
//! The host follows the controlled-component contract: buffer text and
//! language are owned by the caller. The host holds only the widget/engine
//! handles, forwards user edits upward unmodified, and keeps exactly one
//! completion provider registered for the current language. Every language
//! switch releases the old registration before installing the new one, and a
//! shared generation counter keeps in-flight completions from reaching a
//! widget that has since been rebound or disposed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::completion::{CompletionClient, RemoteCompletionProvider};
use crate::config::Settings;
use crate::constants::{defaults, endpoints};
use crate::editor::widget::{
    ChangeHandler, EditorBackend, EditorEngine, MountOptions, ProviderOptions, ProviderRegistration,
    TextWidget,
};
use crate::error::{Result, SpaceError};

/// Construction options for an [`EditorHost`].
#[derive(Debug, Clone)]
pub struct HostOptions {
    pub language: String,
    /// Completion service URL. Defaults to the stock deployment.
    pub endpoint: String,
    pub theme: String,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            language: defaults::LANGUAGE.to_string(),
            endpoint: endpoints::COMPLETION_ENDPOINT.to_string(),
            theme: defaults::THEME.to_string(),
        }
    }
}

impl HostOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            language: defaults::LANGUAGE.to_string(),
            endpoint: settings.completion.endpoint.clone(),
            theme: settings.editor.theme.clone(),
        }
    }
}

struct MountedSession {
    widget: Arc<dyn TextWidget>,
    engine: Arc<dyn EditorEngine>,
}

struct ActiveBinding {
    language: String,
    /// Held for its Drop, which releases the registration against the engine.
    _registration: Box<dyn ProviderRegistration>,
}

/// Hosts one editing widget per instance. A fresh session means a fresh host;
/// the handles captured at mount stay with this host until unmount/drop.
pub struct EditorHost {
    backend: Arc<dyn EditorBackend>,
    options: HostOptions,
    on_change: ChangeHandler,
    client: CompletionClient,
    session: Option<MountedSession>,
    binding: Option<ActiveBinding>,
    language: String,
    /// Bumped on every rebind and on unmount; providers registered under an
    /// older value deliver nothing.
    generation: Arc<AtomicU64>,
}

impl EditorHost {
    pub fn new(
        backend: Arc<dyn EditorBackend>,
        options: HostOptions,
        on_change: ChangeHandler,
    ) -> Self {
        let client = CompletionClient::new(&options.endpoint);
        let language = options.language.clone();
        Self {
            backend,
            options,
            on_change,
            client,
            session: None,
            binding: None,
            language,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Mount the widget and install the first completion binding.
    ///
    /// Mounting is one-shot: a host never remounts. If the backend cannot
    /// produce handles the error propagates and the binder never runs.
    pub fn mount(&mut self, initial_text: &str) -> Result<()> {
        if self.session.is_some() {
            return Err(SpaceError::mount("editor already mounted"));
        }
        let mount_options = MountOptions {
            language: self.language.clone(),
            theme: self.options.theme.clone(),
            initial_text: initial_text.to_string(),
        };
        let (widget, engine) = self.backend.mount(&mount_options)?;
        // Pass-through: no debounce, no buffering, no validation.
        widget.set_change_listener(self.on_change.clone());
        self.session = Some(MountedSession { widget, engine });
        self.rebind();
        Ok(())
    }

    pub fn is_mounted(&self) -> bool {
        self.session.is_some()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Language of the active completion binding, if any.
    pub fn binding_language(&self) -> Option<&str> {
        self.binding.as_ref().map(|b| b.language.as_str())
    }

    /// Push a caller-owned buffer update down to the widget. Never fires
    /// `on_change`; the caller already has this text.
    pub fn set_text(&self, text: &str) {
        if let Some(session) = &self.session {
            session.widget.set_text(text);
        }
    }

    /// Current widget buffer, when mounted.
    pub fn text(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.widget.text())
    }

    /// Switch the session language.
    ///
    /// Setting the current language is a no-op. Before mount the call only
    /// records the value and the first bind picks up the latest one; after
    /// mount the widget is retargeted and the provider rebound.
    pub fn set_language(&mut self, language: &str) {
        if language == self.language {
            return;
        }
        self.language = language.to_string();
        if let Some(session) = &self.session {
            session.widget.set_language(language);
        }
        if self.session.is_some() {
            self.rebind();
        }
    }

    /// Release the binding and drop both handles. Safe to call twice.
    pub fn unmount(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        // Registration released before the handles go away.
        self.binding = None;
        self.session = None;
    }

    /// Drop the previous registration, then install a provider for the
    /// current language. Registration failure downgrades the session to
    /// plain editing: logged, never propagated.
    fn rebind(&mut self) {
        let Some(session) = &self.session else { return };

        // Old binding released first so the engine never holds two.
        self.binding = None;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let provider = Arc::new(RemoteCompletionProvider::new(
            self.client.clone(),
            self.language.clone(),
            self.generation.clone(),
            generation,
        ));
        let options = ProviderOptions {
            language: self.language.clone(),
            provider,
        };
        match session
            .engine
            .register_completion_provider(&session.widget, options)
        {
            Ok(registration) => {
                self.binding = Some(ActiveBinding {
                    language: self.language.clone(),
                    _registration: registration,
                });
            }
            Err(e) => {
                tracing::warn!(language = %self.language, "completion provider registration failed: {e}");
            }
        }
    }
}

impl Drop for EditorHost {
    fn drop(&mut self) {
        self.unmount();
    }
}
