//! Editor-host lifecycle tests: mount, language switch, release-before-rebind,
//! stale-completion suppression.
//!
//! These run against an in-memory mock widget toolkit; no display, no
//! network. The mock engine counts live registrations and keeps a high-water
//! mark so any overlap of two bindings is caught.
//!
//! Run: `cargo test --test host_tests`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use collabspace_core::editor::{
    ChangeHandler, CompletionContext, CompletionProvider, EditorBackend, EditorEngine, EditorHost,
    HostOptions, MountOptions, ProviderOptions, ProviderRegistration, TextWidget,
};
use collabspace_core::error::{Result, SpaceError};

// ── Mock widget toolkit ───────────────────────────────────────────────────────

#[derive(Default)]
struct MockWidget {
    text: Mutex<String>,
    language: Mutex<String>,
    listener: Mutex<Option<ChangeHandler>>,
}

impl MockWidget {
    /// Simulate a user keystroke that leaves the buffer at `text`.
    fn simulate_edit(&self, text: &str) {
        *self.text.lock().unwrap() = text.to_string();
        let listener = self.listener.lock().unwrap().clone();
        if let Some(listener) = listener {
            listener(text.to_string());
        }
    }

    fn language(&self) -> String {
        self.language.lock().unwrap().clone()
    }
}

impl TextWidget for MockWidget {
    fn set_text(&self, text: &str) {
        // Programmatic update: deliberately does not fire the listener.
        *self.text.lock().unwrap() = text.to_string();
    }

    fn text(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    fn set_language(&self, language: &str) {
        *self.language.lock().unwrap() = language.to_string();
    }

    fn set_change_listener(&self, listener: ChangeHandler) {
        *self.listener.lock().unwrap() = Some(listener);
    }
}

struct MockEngine {
    live: Arc<AtomicUsize>,
    max_live: Arc<AtomicUsize>,
    total: AtomicUsize,
    /// Most recent provider handed to the engine, so tests can invoke it the
    /// way the widget's completion machinery would.
    last_provider: Mutex<Option<Arc<dyn CompletionProvider>>>,
    fail_registration: bool,
}

impl MockEngine {
    fn new(fail_registration: bool) -> Self {
        Self {
            live: Arc::new(AtomicUsize::new(0)),
            max_live: Arc::new(AtomicUsize::new(0)),
            total: AtomicUsize::new(0),
            last_provider: Mutex::new(None),
            fail_registration,
        }
    }

    fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    fn max_live(&self) -> usize {
        self.max_live.load(Ordering::SeqCst)
    }

    fn total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }

    fn last_provider(&self) -> Arc<dyn CompletionProvider> {
        self.last_provider.lock().unwrap().clone().unwrap()
    }
}

struct MockRegistration {
    language: String,
    live: Arc<AtomicUsize>,
}

impl ProviderRegistration for MockRegistration {
    fn language(&self) -> &str {
        &self.language
    }
}

impl Drop for MockRegistration {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

impl EditorEngine for MockEngine {
    fn register_completion_provider(
        &self,
        _widget: &Arc<dyn TextWidget>,
        options: ProviderOptions,
    ) -> Result<Box<dyn ProviderRegistration>> {
        if self.fail_registration {
            return Err(SpaceError::binding("engine rejected registration"));
        }
        let live = self.live.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_live.fetch_max(live, Ordering::SeqCst);
        self.total.fetch_add(1, Ordering::SeqCst);
        *self.last_provider.lock().unwrap() = Some(options.provider.clone());
        Ok(Box::new(MockRegistration {
            language: options.language,
            live: self.live.clone(),
        }))
    }
}

struct MockBackend {
    widget: Arc<MockWidget>,
    engine: Arc<MockEngine>,
    mounts: AtomicUsize,
    fail_mount: bool,
}

impl EditorBackend for MockBackend {
    fn mount(
        &self,
        options: &MountOptions,
    ) -> Result<(Arc<dyn TextWidget>, Arc<dyn EditorEngine>)> {
        if self.fail_mount {
            return Err(SpaceError::mount("engine unavailable"));
        }
        self.mounts.fetch_add(1, Ordering::SeqCst);
        self.widget.set_text(&options.initial_text);
        self.widget.set_language(&options.language);
        Ok((
            self.widget.clone() as Arc<dyn TextWidget>,
            self.engine.clone() as Arc<dyn EditorEngine>,
        ))
    }
}

// ── Fixture ───────────────────────────────────────────────────────────────────

struct Fixture {
    backend: Arc<MockBackend>,
    widget: Arc<MockWidget>,
    engine: Arc<MockEngine>,
    changes: Arc<Mutex<Vec<String>>>,
}

fn fixture() -> (Fixture, EditorHost) {
    fixture_with(false, false)
}

fn fixture_with(fail_mount: bool, fail_registration: bool) -> (Fixture, EditorHost) {
    let widget = Arc::new(MockWidget::default());
    let engine = Arc::new(MockEngine::new(fail_registration));
    let backend = Arc::new(MockBackend {
        widget: widget.clone(),
        engine: engine.clone(),
        mounts: AtomicUsize::new(0),
        fail_mount,
    });
    let changes: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = changes.clone();
    let on_change: ChangeHandler = Arc::new(move |text| sink.lock().unwrap().push(text));

    let host = EditorHost::new(
        backend.clone(),
        HostOptions {
            language: "javascript".to_string(),
            ..Default::default()
        },
        on_change,
    );
    (
        Fixture {
            backend,
            widget,
            engine,
            changes,
        },
        host,
    )
}

fn context() -> CompletionContext {
    CompletionContext {
        text_before_cursor: "let x = ".to_string(),
        text_after_cursor: String::new(),
        line: 0,
        column: 8,
    }
}

// ── Mount controller ──────────────────────────────────────────────────────────

#[test]
fn mount_creates_one_widget_and_one_binding() {
    let (fx, mut host) = fixture();
    host.mount("let x = 1;").unwrap();

    assert!(host.is_mounted());
    assert_eq!(fx.backend.mounts.load(Ordering::SeqCst), 1);
    assert_eq!(fx.engine.live(), 1);
    assert_eq!(host.binding_language(), Some("javascript"));
    assert_eq!(fx.widget.text(), "let x = 1;");
}

#[test]
fn mount_is_one_shot() {
    let (_fx, mut host) = fixture();
    host.mount("").unwrap();
    assert!(matches!(host.mount(""), Err(SpaceError::Mount(_))));
}

#[test]
fn mount_failure_leaves_binder_idle() {
    let (fx, mut host) = fixture_with(true, false);
    assert!(matches!(host.mount("x"), Err(SpaceError::Mount(_))));
    assert!(!host.is_mounted());
    assert_eq!(host.binding_language(), None);
    assert_eq!(fx.engine.total(), 0);
}

#[test]
fn edit_dispatches_on_change_exactly_once() {
    let (fx, mut host) = fixture();
    host.mount("let x = 1;").unwrap();

    fx.widget.simulate_edit("let x = 1;\n");
    assert_eq!(*fx.changes.lock().unwrap(), vec!["let x = 1;\n".to_string()]);
}

#[test]
fn caller_set_text_does_not_feed_back() {
    let (fx, mut host) = fixture();
    host.mount("a").unwrap();

    host.set_text("b");
    assert_eq!(fx.widget.text(), "b");
    assert!(fx.changes.lock().unwrap().is_empty());
}

// ── Provider binder ───────────────────────────────────────────────────────────

#[test]
fn language_change_rebinds_without_overlap() {
    let (fx, mut host) = fixture();
    host.mount("let x = 1;").unwrap();

    host.set_language("python");
    assert_eq!(host.binding_language(), Some("python"));
    assert_eq!(fx.widget.language(), "python");
    assert_eq!(fx.engine.live(), 1);
    assert_eq!(fx.engine.total(), 2);
    // Old registration released before the new one was installed.
    assert_eq!(fx.engine.max_live(), 1);
}

#[test]
fn same_language_is_a_noop() {
    let (fx, mut host) = fixture();
    host.mount("").unwrap();

    host.set_language("javascript");
    assert_eq!(fx.engine.total(), 1);
    assert_eq!(host.binding_language(), Some("javascript"));
}

#[test]
fn premount_language_change_latest_wins() {
    let (fx, mut host) = fixture();
    host.set_language("python");
    host.set_language("rust");
    assert_eq!(fx.engine.total(), 0);

    host.mount("fn main() {}").unwrap();
    assert_eq!(host.binding_language(), Some("rust"));
    assert_eq!(fx.engine.total(), 1);
}

#[test]
fn binding_failure_is_swallowed_and_editing_survives() {
    let (fx, mut host) = fixture_with(false, true);
    host.mount("let x = 1;").unwrap();

    assert!(host.is_mounted());
    assert_eq!(host.binding_language(), None);

    fx.widget.simulate_edit("let x = 2;");
    assert_eq!(*fx.changes.lock().unwrap(), vec!["let x = 2;".to_string()]);
}

#[test]
fn unmount_releases_the_binding() {
    let (fx, mut host) = fixture();
    host.mount("").unwrap();
    assert_eq!(fx.engine.live(), 1);

    host.unmount();
    assert!(!host.is_mounted());
    assert_eq!(host.binding_language(), None);
    assert_eq!(fx.engine.live(), 0);
}

#[test]
fn drop_releases_the_binding() {
    let (fx, host) = {
        let (fx, mut host) = fixture();
        host.mount("").unwrap();
        (fx, host)
    };
    assert_eq!(fx.engine.live(), 1);
    drop(host);
    assert_eq!(fx.engine.live(), 0);
}

// ── Stale-completion suppression ──────────────────────────────────────────────

#[tokio::test]
async fn stale_provider_delivers_nothing_after_unmount() {
    let (fx, mut host) = fixture();
    host.mount("").unwrap();
    let provider = fx.engine.last_provider();

    host.unmount();
    // The generation bumped at unmount makes the provider bail out before it
    // ever touches the network.
    let items = provider.complete(&context()).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn stale_provider_delivers_nothing_after_language_switch() {
    let (fx, mut host) = fixture();
    host.mount("").unwrap();
    let old_provider = fx.engine.last_provider();

    host.set_language("python");
    let items = old_provider.complete(&context()).await.unwrap();
    assert!(items.is_empty());
}

// ── End-to-end scenario ───────────────────────────────────────────────────────

#[test]
fn scenario_javascript_to_python_then_keystroke() {
    let (fx, mut host) = fixture();
    host.mount("let x = 1;").unwrap();
    assert_eq!(host.binding_language(), Some("javascript"));

    host.set_language("python");
    assert_eq!(host.binding_language(), Some("python"));
    assert_eq!(fx.engine.max_live(), 1);

    fx.widget.simulate_edit("let x = 1;\n");
    assert_eq!(*fx.changes.lock().unwrap(), vec!["let x = 1;\n".to_string()]);
}
