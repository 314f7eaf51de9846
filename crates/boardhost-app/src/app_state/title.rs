//! Window title management: reflects the selected tab and the latest notice.

use boardhost_embed::TabStrip;

use super::core::BoardhostApp;

// =============================================================================
// WINDOW TITLE
// =============================================================================

impl BoardhostApp {
    /// Update the window title if what it shows has changed.
    ///
    /// Format: "{title} - {selected tab} ({n} tabs) | {notice}"
    pub(super) fn update_window_title(&mut self) {
        let notice = self.host.latest_notice().map(|n| n.message.clone());
        let title = compose_title(&self.config.window.title, self.host.tabs(), notice.as_deref());
        if title == self.title {
            return;
        }
        if let Some(ref window) = self.window {
            window.set_title(&title);
        }
        self.title = title;
    }
}

pub(super) fn compose_title(base: &str, tabs: &TabStrip, notice: Option<&str>) -> String {
    let mut title = format!("{base} - {}", tabs.selected().title);
    if tabs.len() > 1 {
        title.push_str(&format!(" ({} tabs)", tabs.len()));
    }
    if let Some(notice) = notice {
        title.push_str(" | ");
        title.push_str(notice);
    }
    title
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::core::test_support::fresh_app;
    use boardhost_embed::tabs::NEW_TAB_TITLE;

    #[test]
    fn single_tab_title() {
        let tabs = TabStrip::new();
        assert_eq!(
            compose_title("Boardhost", &tabs, None),
            format!("Boardhost - {NEW_TAB_TITLE}")
        );
    }

    #[test]
    fn tab_count_and_notice() {
        let mut tabs = TabStrip::new();
        tabs.push_empty();
        assert_eq!(
            compose_title("Boardhost", &tabs, Some("BoardViewer process exited")),
            format!("Boardhost - {NEW_TAB_TITLE} (2 tabs) | BoardViewer process exited")
        );
    }

    #[test]
    fn update_title_without_window_does_not_panic() {
        let mut app = fresh_app();

        // window is None on a fresh app, title is still tracked
        app.update_window_title();
        assert!(app.title.starts_with("Boardhost - "));
        app.shutdown();
    }
}
