pub mod client;
pub mod provider;

pub use client::CompletionClient;
pub use provider::RemoteCompletionProvider;
