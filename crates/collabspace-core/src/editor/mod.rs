pub mod host;
pub mod widget;

pub use host::{EditorHost, HostOptions};
pub use widget::{
    ChangeHandler, CompletionContext, CompletionItem, CompletionProvider, EditorBackend,
    EditorEngine, MountOptions, ProviderOptions, ProviderRegistration, TextWidget,
};
