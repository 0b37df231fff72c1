use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Serves the bundled front-end; unknown paths fall back to `index.html`
/// so client-side routes survive a reload.
pub fn frontend(public_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join("index.html")))
}
