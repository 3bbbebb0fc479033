//! Development Tools
//!
//! Live reload for debug builds. A watcher thread turns file changes under
//! the templates and static directories into broadcast pings, and every
//! open page listens for them on `/__livereload`.

use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
};
use notify::{Config, Event as FsEvent, RecommendedWatcher, RecursiveMode, Watcher};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, error, info};

use crate::state::AppState;

/// Askama templates, relative to this crate.
const TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Editors save in bursts; changes this close together reload once.
const SETTLE: Duration = Duration::from_millis(150);

/// SSE endpoint for live reload.
pub async fn livereload_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (tx, rx) = tokio::sync::mpsc::channel::<Result<Event, Infallible>>(16);

    if let Some(reloader) = state.reloader() {
        let mut pings = reloader.subscribe();
        tokio::spawn(async move {
            while pings.recv().await.is_ok() {
                if tx.send(Ok(Event::default().data("reload"))).await.is_err() {
                    break;
                }
            }
        });
    }

    Sse::new(ReceiverStream::new(rx)).keep_alive(KeepAlive::default())
}

/// True for changes a browser reload would pick up. Minified CSS is
/// written by the build and editor swap files are noise.
pub(crate) fn triggers_reload(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    !(name.ends_with(".min.css") || name.ends_with('~') || name.ends_with(".swp") || name.starts_with(".#"))
}

fn is_reload_event(event: &FsEvent) -> bool {
    (event.kind.is_modify() || event.kind.is_create() || event.kind.is_remove())
        && event.paths.iter().any(|p| triggers_reload(p))
}

/// Spawn the file watcher thread.
///
/// Template edits only show up once the binary is rebuilt; static files
/// reload immediately.
pub fn spawn_file_watcher(state: AppState) {
    let roots: Vec<PathBuf> = vec![PathBuf::from(TEMPLATE_DIR), state.config().public_dir.clone()];

    std::thread::spawn(move || {
        let (tx, rx) = mpsc::channel();
        let mut watcher = match RecommendedWatcher::new(tx, Config::default()) {
            Ok(watcher) => watcher,
            Err(e) => {
                error!("Failed to create file watcher, live reload disabled: {}", e);
                return;
            }
        };

        for root in roots.iter().filter(|r| r.exists()) {
            match watcher.watch(root, RecursiveMode::Recursive) {
                Ok(()) => info!("Watching {} for changes", root.display()),
                Err(e) => error!("Failed to watch {}: {}", root.display(), e),
            }
        }

        loop {
            match rx.recv() {
                Ok(Ok(event)) if is_reload_event(&event) => {
                    debug!("File change detected: {:?}", event.paths);
                    // Swallow the rest of the burst.
                    loop {
                        match rx.recv_timeout(SETTLE) {
                            Ok(_) => continue,
                            Err(RecvTimeoutError::Timeout) => break,
                            Err(RecvTimeoutError::Disconnected) => return,
                        }
                    }
                    if let Some(reloader) = state.reloader() {
                        // No open pages means no receivers; nothing to do.
                        let _ = reloader.send(());
                    }
                }
                Ok(Ok(_)) => {}
                Ok(Err(e)) => error!("Watch error: {:?}", e),
                Err(_) => {
                    debug!("File watcher stopped");
                    break;
                }
            }
        }
    });
}
