use std::any::Any;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    // RUST_LOG=linkfarm_core=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout belongs to the listing; logs go to stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// Text of a panic payload, if it carried any.
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown cause"
    }
}

/// Glob naming every link directory this tag can leave under `root`.
pub fn leftover_pattern(root: &Path, tag: &str) -> PathBuf {
    root.join(format!("{tag}.*"))
}

/// A panic skips teardown, so point the user at whatever may be left behind.
pub fn install_panic_hook(root: &Path, tag: &str) {
    let leftovers = leftover_pattern(root, tag);
    std::panic::set_hook(Box::new(move |info| {
        let at = info
            .location()
            .map_or_else(String::new, |l| format!(" at {}:{}", l.file(), l.line()));
        tracing::error!(
            leftovers = %leftovers.display(),
            "linkfarm crashed{at}: {}; link directories may remain",
            panic_message(info.payload())
        );
    }));
}
