use skillboard_core::identity::{ConfiguredIdentity, IdentityProvider};
use skillboard_core::paths;
use skillboard_core::store::{ConsultantStore, FileStore};
use skillboard_core::submission::SubmissionLog;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

const WATCH_INTERVAL: Duration = Duration::from_millis(800);

/// Which part of the board changed. Sent to SSE subscribers as the payload
/// of an `update` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    Consultants,
    Submissions,
}

impl BoardEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            BoardEvent::Consultants => "consultants",
            BoardEvent::Submissions => "submissions",
        }
    }
}

/// Aborts the file watcher when the last clone of the state is dropped.
struct WatcherGuard(JoinHandle<()>);

impl Drop for WatcherGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
    pub store: Arc<dyn ConsultantStore>,
    pub identity: Arc<dyn IdentityProvider>,
    /// One log per board so concurrent submission writes are serialized.
    pub submissions: Arc<SubmissionLog>,
    pub event_tx: broadcast::Sender<BoardEvent>,
    _watcher: Option<Arc<WatcherGuard>>,
}

impl AppState {
    /// File-backed store and configured identity under `root`.
    pub fn new(root: PathBuf) -> Self {
        let store = Arc::new(FileStore::open(&root));
        let identity = Arc::new(ConfiguredIdentity::new(&root));
        Self::with_collaborators(root, store, identity)
    }

    pub fn with_collaborators(
        root: PathBuf,
        store: Arc<dyn ConsultantStore>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        let (tx, _) = broadcast::channel(64);

        // CLI edits to the consultant file reach connected clients too.
        // Skipped outside a runtime.
        let watcher = tokio::runtime::Handle::try_current().is_ok().then(|| {
            let file = paths::consultants_path(&root);
            let handle = tokio::spawn(watch_consultants(file, tx.clone(), WATCH_INTERVAL));
            Arc::new(WatcherGuard(handle))
        });

        Self {
            submissions: Arc::new(SubmissionLog::open(&root)),
            root,
            store,
            identity,
            event_tx: tx,
            _watcher: watcher,
        }
    }
}

async fn modified(file: &Path) -> Option<SystemTime> {
    tokio::fs::metadata(file).await.ok()?.modified().ok()
}

/// Poll `file` and send [`BoardEvent::Consultants`] whenever its mtime moves.
/// The mtime at start is the baseline, so an untouched file stays silent.
async fn watch_consultants(
    file: PathBuf,
    tx: broadcast::Sender<BoardEvent>,
    every: Duration,
) {
    let mut last = modified(&file).await;
    loop {
        tokio::time::sleep(every).await;
        let current = modified(&file).await;
        if current.is_some() && current != last {
            last = current;
            let _ = tx.send(BoardEvent::Consultants);
        }
    }
}
