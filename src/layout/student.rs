use super::{href_with_flags, EXPANDED_SIDEBAR_WIDTH};
use crate::navigation::{NavigationEntry, NavigationEvent, OverflowPanel, PanelState};

/// Learner frame: fixed sidebar on wide viewports, tab bar with an
/// overflow panel on narrow ones, and a floating assistant launcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudentShell {
    overflow: OverflowPanel,
    assistant_open: bool,
}

impl StudentShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(more_open: bool, assistant_open: bool) -> Self {
        let state = if more_open {
            PanelState::Open
        } else {
            PanelState::Closed
        };
        Self {
            overflow: OverflowPanel::with_state(state),
            assistant_open,
        }
    }

    /// The sidebar never collapses.
    pub fn content_offset(&self) -> u16 {
        EXPANDED_SIDEBAR_WIDTH
    }

    pub fn overflow(&self) -> &OverflowPanel {
        &self.overflow
    }

    pub fn toggle_more(&mut self) {
        self.overflow.toggle();
    }

    pub fn select_overflow(&mut self, entry: &NavigationEntry) -> Option<NavigationEvent> {
        self.overflow.select(entry)
    }

    pub fn dismiss_overflow(&mut self) {
        self.overflow.dismiss_outside();
    }

    pub fn is_assistant_open(&self) -> bool {
        self.assistant_open
    }

    pub fn toggle_assistant(&mut self) {
        self.assistant_open = !self.assistant_open;
    }

    /// Link to `path`. Navigating closes the overflow panel; the assistant
    /// stays as it was.
    pub fn href(&self, path: &str) -> String {
        href_with_flags(path, &[("assistant", self.assistant_open)])
    }

    /// Link to `path` rendered with this exact state.
    pub fn state_href(&self, path: &str) -> String {
        href_with_flags(
            path,
            &[("more", self.overflow.is_open()), ("assistant", self.assistant_open)],
        )
    }
}
