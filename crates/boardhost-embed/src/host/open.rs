//! Opening files: duplicate detection, launch, and hand-off to the resolver.

use std::path::{Path, PathBuf};

use boardhost_common::errors::LaunchError;
use boardhost_common::{SessionId, TabId};

use super::core::EmbeddingHost;
use super::types::{HostEvent, OpenOutcome};
use crate::process::cleanup;
use crate::process::{LaunchCommand, ProcessHandle};
use crate::resolver::{self, WindowTarget};
use crate::session::{EmbeddingSession, SessionState};
use crate::viewer::{ViewerKind, WindowSource};

impl EmbeddingHost {
    /// Open `path`, in `viewer` or the default viewer for its extension.
    ///
    /// A file that is already open (same path ignoring case, same viewer when
    /// one is given) selects its tab instead. Otherwise the file goes into
    /// the selected tab if that tab is empty, else into a new tab.
    pub fn open_file(
        &mut self,
        path: &Path,
        viewer: Option<ViewerKind>,
    ) -> Result<OpenOutcome, LaunchError> {
        if let Some(tab) = self.registry.find_by_path(path, viewer) {
            tracing::info!(tab = %tab, file = %path.display(), "file already open");
            self.select_tab(tab);
            return Ok(OpenOutcome::Existing(tab));
        }

        let kind = viewer.unwrap_or_else(|| ViewerKind::for_path(path));
        let selected = self.tabs.selected_id();
        let reusable = self.tabs.selected().is_empty() && !self.registry.contains(selected);
        let tab = if reusable {
            selected
        } else {
            self.tabs.push_empty()
        };
        self.launch_into(tab, path, kind)
            .map(|()| OpenOutcome::Launched(tab))
    }

    /// Replace whatever `tab` shows with `viewer` opening `path`.
    pub fn open_in_tab(
        &mut self,
        tab: TabId,
        path: &Path,
        viewer: ViewerKind,
    ) -> Result<OpenOutcome, LaunchError> {
        if !self.tabs.contains(tab) {
            tracing::debug!(tab = %tab, "open-with target is gone; opening normally");
            return self.open_file(path, Some(viewer));
        }
        self.launch_into(tab, path, viewer)
            .map(|()| OpenOutcome::Launched(tab))
    }

    /// Open several files in order. Failures do not stop the rest.
    pub fn open_files(
        &mut self,
        paths: &[PathBuf],
        viewer: Option<ViewerKind>,
    ) -> Vec<Result<OpenOutcome, LaunchError>> {
        paths
            .iter()
            .map(|path| self.open_file(path, viewer))
            .collect()
    }

    fn launch_into(
        &mut self,
        tab: TabId,
        path: &Path,
        kind: ViewerKind,
    ) -> Result<(), LaunchError> {
        let result = self.start_session(tab, path, kind);
        self.apply_selection();
        result
    }

    fn start_session(
        &mut self,
        tab: TabId,
        path: &Path,
        kind: ViewerKind,
    ) -> Result<(), LaunchError> {
        let profile = kind.profile();
        let Some(exe) = self.locator.locate(kind) else {
            tracing::error!(viewer = %kind, "viewer executable not found");
            self.ws.show_alert(
                self.alert_owner(),
                &format!("{} Not Found", profile.display_name),
                &format!(
                    "{exe} not found!\n\nPlease place {exe} in the same folder as this application.",
                    exe = profile.exe_name
                ),
            );
            return Err(LaunchError::ExecutableMissing {
                viewer: profile.display_name.to_string(),
            });
        };

        // One session per tab: the previous viewer goes first.
        if let Some(previous) = self.registry.remove(tab) {
            tracing::info!(tab = %tab, viewer = %previous.viewer(), "replacing viewer");
            self.retire(previous);
        }
        self.release_stray(tab);

        if let Some(folder) = profile.log_cleanup {
            cleanup::purge_logs(&cleanup::log_dirs(folder, &exe));
        }

        let session_id = SessionId::new();
        let (program, staging_dir) = if self.settings.isolate(kind) {
            match cleanup::stage_install(&exe, &self.settings.temp_root, &session_id) {
                Ok(staged) => {
                    let dir = cleanup::staging_dir(&staged);
                    self.staged_dirs.extend(dir.clone());
                    (staged, dir)
                }
                Err(e) => {
                    let err = LaunchError::Staging {
                        viewer: profile.display_name.to_string(),
                        message: e.to_string(),
                    };
                    self.abandon_tab(tab);
                    self.alert_launch_failure(&err);
                    return Err(err);
                }
            }
        } else {
            (exe, None)
        };

        let surface = self.create_surface();
        let command = LaunchCommand::for_viewer(profile, &program, path, surface);
        let child = match self.launcher.launch(&command) {
            Ok(child) => child,
            Err(source) => {
                self.destroy_surface(surface);
                if let Some(dir) = &staging_dir {
                    cleanup::remove_dir_quietly(dir);
                }
                let err = LaunchError::Spawn {
                    viewer: profile.display_name.to_string(),
                    source,
                };
                self.abandon_tab(tab);
                self.alert_launch_failure(&err);
                return Err(err);
            }
        };

        let exit_tx = self.events_tx.clone();
        let exit_session = session_id.clone();
        let process = ProcessHandle::spawn_watcher(&self.runtime, child, move || {
            let _ = exit_tx.send(HostEvent::ProcessExited {
                tab,
                session: exit_session,
            });
        });
        let pid = process.pid();
        let exited = process.exit_flag();

        let mut session = EmbeddingSession::new(tab, kind, path.to_path_buf(), process, surface)
            .with_id(session_id.clone())
            .with_staging_dir(staging_dir);
        session.advance(SessionState::Resolving);
        self.registry.insert(session);
        self.tabs.set_viewer(tab, kind, path);
        self.tabs.select(tab);
        self.recent.record(path);
        tracing::info!(tab = %tab, viewer = %kind, pid, file = %path.display(), "viewer launched");

        let target = match profile.window_source {
            WindowSource::ProcessWindow => WindowTarget::Process(pid),
            WindowSource::ContainerChild => WindowTarget::ChildOf(surface),
        };
        let policy = self
            .settings
            .retry
            .with_initial_delay(self.settings.startup_delay(kind));
        let ws = self.ws.clone();
        let events = self.events_tx.clone();
        self.runtime.spawn(async move {
            let resolution = resolver::resolve(ws, target, exited, policy).await;
            let _ = events.send(HostEvent::Resolved {
                tab,
                session: session_id,
                resolution,
            });
        });
        Ok(())
    }

    /// A failed launch leaves `tab` without a session; show it as empty so
    /// the next open can reuse it.
    fn abandon_tab(&mut self, tab: TabId) {
        self.tabs.set_start(tab);
    }

    fn alert_launch_failure(&self, err: &LaunchError) {
        tracing::error!("launch failed: {err}");
        self.ws
            .show_alert(self.alert_owner(), "Error", &format!("Error opening viewer: {err}"));
    }
}
