pub mod completion;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod language;

// Re-export key types
pub use completion::{CompletionClient, RemoteCompletionProvider};
pub use config::Settings;
pub use editor::{EditorHost, HostOptions};
pub use error::SpaceError;
