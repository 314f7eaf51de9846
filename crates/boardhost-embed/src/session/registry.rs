use std::collections::BTreeMap;
use std::path::Path;

use boardhost_common::{SessionId, TabId};

use super::EmbeddingSession;
use crate::viewer::ViewerKind;

/// Tab identity to live session. Owned by the host and only touched on the UI thread.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: BTreeMap<TabId, EmbeddingSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `session` for its tab, returning any session it displaced.
    pub fn insert(&mut self, session: EmbeddingSession) -> Option<EmbeddingSession> {
        self.sessions.insert(session.tab(), session)
    }

    pub fn get(&self, tab: TabId) -> Option<&EmbeddingSession> {
        self.sessions.get(&tab)
    }

    pub fn get_mut(&mut self, tab: TabId) -> Option<&mut EmbeddingSession> {
        self.sessions.get_mut(&tab)
    }

    /// The session on `tab`, but only if it is still the session `id`.
    pub fn current_mut(&mut self, tab: TabId, id: &SessionId) -> Option<&mut EmbeddingSession> {
        self.sessions.get_mut(&tab).filter(|s| s.id() == id)
    }

    /// Remove the session on `tab`. A second removal is a no-op returning `None`.
    pub fn remove(&mut self, tab: TabId) -> Option<EmbeddingSession> {
        self.sessions.remove(&tab)
    }

    pub fn contains(&self, tab: TabId) -> bool {
        self.sessions.contains_key(&tab)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn tabs(&self) -> Vec<TabId> {
        self.sessions.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmbeddingSession> {
        self.sessions.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut EmbeddingSession> {
        self.sessions.values_mut()
    }

    /// Remove every session, in tab order.
    pub fn drain(&mut self) -> Vec<EmbeddingSession> {
        std::mem::take(&mut self.sessions).into_values().collect()
    }

    /// The tab already showing `path`, compared case-insensitively, optionally
    /// restricted to one viewer.
    pub fn find_by_path(&self, path: &Path, viewer: Option<ViewerKind>) -> Option<TabId> {
        let wanted = path_key(path);
        self.sessions
            .values()
            .find(|s| {
                path_key(s.file_path()) == wanted && viewer.map_or(true, |v| v == s.viewer())
            })
            .map(EmbeddingSession::tab)
    }
}

pub(crate) fn path_key(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{scripted_process, TestRuntime};
    use boardhost_platform::WindowHandle;
    use std::path::PathBuf;

    fn session(rt: &TestRuntime, tab: u32, viewer: ViewerKind, path: &str) -> EmbeddingSession {
        EmbeddingSession::new(
            TabId(tab),
            viewer,
            PathBuf::from(path),
            scripted_process(rt),
            WindowHandle::NULL,
        )
    }

    #[test]
    fn duplicate_lookup_ignores_case() {
        let rt = TestRuntime::new();
        let mut registry = SessionRegistry::new();
        registry.insert(session(&rt, 1, ViewerKind::BoardViewer, "C:/Boards/Main.brd"));

        assert_eq!(
            registry.find_by_path(Path::new("c:/boards/MAIN.BRD"), None),
            Some(TabId(1))
        );
        assert_eq!(
            registry.find_by_path(
                Path::new("c:/boards/main.brd"),
                Some(ViewerKind::OpenBoardView)
            ),
            None
        );
        assert_eq!(
            registry.find_by_path(Path::new("c:/boards/other.brd"), None),
            None
        );
    }

    #[test]
    fn removal_happens_once() {
        let rt = TestRuntime::new();
        let mut registry = SessionRegistry::new();
        registry.insert(session(&rt, 2, ViewerKind::SumatraPdf, "a.pdf"));

        assert!(registry.remove(TabId(2)).is_some());
        assert!(registry.remove(TabId(2)).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn stale_session_ids_do_not_match() {
        let rt = TestRuntime::new();
        let mut registry = SessionRegistry::new();
        let old = session(&rt, 3, ViewerKind::BoardViewer, "a.brd");
        let old_id = old.id().clone();
        registry.insert(old);
        let displaced = registry.insert(session(&rt, 3, ViewerKind::OpenBoardView, "a.brd"));

        assert_eq!(displaced.map(|s| s.id().clone()), Some(old_id.clone()));
        assert!(registry.current_mut(TabId(3), &old_id).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn drain_empties_in_tab_order() {
        let rt = TestRuntime::new();
        let mut registry = SessionRegistry::new();
        registry.insert(session(&rt, 5, ViewerKind::BoardViewer, "b.brd"));
        registry.insert(session(&rt, 4, ViewerKind::BoardViewer, "a.brd"));

        let drained: Vec<_> = registry.drain().iter().map(|s| s.tab()).collect();
        assert_eq!(drained, vec![TabId(4), TabId(5)]);
        assert!(registry.is_empty());
    }
}
