//! Locating viewer executables shipped next to the host.

use std::path::{Path, PathBuf};

/// Directory containing the running executable.
pub fn app_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Search the usual install layouts for `exe_name`, in order:
///
/// 1. `<app_dir>/<exe_name>`
/// 2. `<app_dir>/<folder>/<exe_name>`
/// 3. `<app_dir>/../<folder>/<exe_name>` (development layout)
/// 4. `<app_dir>/../<exe_name>`
pub fn discover_executable(app_dir: &Path, folder: &str, exe_name: &str) -> Option<PathBuf> {
    let mut candidates = vec![app_dir.join(exe_name), app_dir.join(folder).join(exe_name)];
    if let Some(parent) = app_dir.parent() {
        candidates.push(parent.join(folder).join(exe_name));
        candidates.push(parent.join(exe_name));
    }

    let found = candidates.into_iter().find(|candidate| candidate.is_file());
    match &found {
        Some(path) => tracing::debug!("found {exe_name} at {}", path.display()),
        None => tracing::debug!("{exe_name} not found near {}", app_dir.display()),
    }
    found
}
