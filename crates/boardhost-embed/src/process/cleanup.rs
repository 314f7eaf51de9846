//! Filesystem side effects around viewer processes.
//!
//! Nothing here returns an error to the caller's caller: cleanup failures are
//! logged and swallowed, staging failures become a launch error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use boardhost_common::SessionId;

/// Crash-log folders to purge before launching a viewer whose profile asks for it.
pub fn log_dirs(app_data_folder: &str, exe: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(local) = dirs::data_local_dir() {
        dirs.push(local.join(app_data_folder));
    }
    if let Some(exe_dir) = exe.parent() {
        dirs.push(exe_dir.join("logs"));
    }
    dirs
}

pub fn purge_logs(dirs: &[PathBuf]) {
    for dir in dirs {
        if dir.is_dir() {
            match fs::remove_dir_all(dir) {
                Ok(()) => tracing::debug!(dir = %dir.display(), "cleaned viewer logs"),
                Err(e) => tracing::debug!(dir = %dir.display(), "failed to clean viewer logs: {e}"),
            }
        }
    }
}

/// Copy the install directory of `exe` into `<root>/<session>/` and return
/// the path of the copied executable.
pub fn stage_install(exe: &Path, root: &Path, session: &SessionId) -> io::Result<PathBuf> {
    let install = exe
        .parent()
        .ok_or_else(|| io::Error::other("executable has no parent directory"))?;
    let file_name = exe
        .file_name()
        .ok_or_else(|| io::Error::other("executable has no file name"))?;

    let target = root.join(session.as_str());
    copy_dir(install, &target)?;
    tracing::debug!(from = %install.display(), to = %target.display(), "staged isolated install");
    Ok(target.join(file_name))
}

fn copy_dir(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let dest = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}

/// The session directory created by [`stage_install`] for a staged executable.
pub fn staging_dir(staged_exe: &Path) -> Option<PathBuf> {
    staged_exe.parent().map(Path::to_path_buf)
}

/// Best-effort recursive delete.
pub fn remove_dir_quietly(dir: &Path) {
    if !dir.exists() {
        return;
    }
    if let Err(e) = fs::remove_dir_all(dir) {
        tracing::debug!(dir = %dir.display(), "failed to remove directory: {e}");
    }
}

/// Delete `dir` only when it has no entries left. Never touches content the
/// host did not create.
pub fn remove_dir_if_empty(dir: &Path) {
    if !dir.is_dir() {
        return;
    }
    if let Err(e) = fs::remove_dir(dir) {
        tracing::debug!(dir = %dir.display(), "kept non-empty directory: {e}");
    }
}
