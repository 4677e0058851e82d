use std::io;

use tracing::Level;

/// Initialize the global tracing subscriber with a compact stderr
/// formatter. While the garden occupies the alternate screen the output
/// is only visible when stderr is redirected, which is exactly when it is
/// wanted. Safe to call multiple times; subsequent calls are no-ops.
///
/// `GARDEN_LOG` selects the max level (`error`..`trace`); default `info`.
pub fn init_default() {
    let level = std::env::var("GARDEN_LOG")
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}
