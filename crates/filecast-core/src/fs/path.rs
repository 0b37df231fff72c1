//! Mapping client-supplied relative paths onto the served base directory.

use std::path::{Component, Path, PathBuf};

/// Joins `relative` onto `base` without ever leaving `base`.
///
/// The join is purely lexical: `.` components and leading `/` are ignored,
/// and `..` drops the previously pushed component but stops at `base`.
/// An empty `relative` resolves to `base` itself.
///
/// ```
/// use filecast_core::resolve;
/// use std::path::Path;
///
/// let base = Path::new("/srv/media");
/// assert_eq!(resolve(base, "movies/clip.mp4"), Path::new("/srv/media/movies/clip.mp4"));
/// assert_eq!(resolve(base, "../../etc/passwd"), Path::new("/srv/media/etc/passwd"));
/// ```
pub fn resolve(base: &Path, relative: &str) -> PathBuf {
    let mut pushed: Vec<&std::ffi::OsStr> = Vec::new();

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(name) => pushed.push(name),
            Component::ParentDir => {
                pushed.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    let mut result = base.to_path_buf();
    result.extend(pushed);
    result
}
