//! `~` expansion for paths given on the command line or in the config file.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => Some(""),
        Some(r) if r.starts_with('/') || r.starts_with('\\') => Some(&r[1..]),
        _ => None,
    };

    match (rest, dirs::home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(r), Some(home)) => home.join(r),
        _ => PathBuf::from(path),
    }
}
