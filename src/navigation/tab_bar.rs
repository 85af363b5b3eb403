//! Compact tab bar for narrow viewports.
//!
//! When there are more destinations than fit, the bar shows the first
//! `max_inline - 1` and a "More" tab opening an [`OverflowPanel`] with the
//! rest.

use super::{flatten_links, NavigationEntry, NavigationEvent};
use tracing::debug;

/// Open state of the overflow panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// The "More" sheet. Closed → open only through [`OverflowPanel::toggle`];
/// selecting an entry or pressing outside closes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverflowPanel {
    state: PanelState,
}

impl OverflowPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a panel from a previous render.
    pub fn with_state(state: PanelState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    /// The "More" tab was pressed.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        };
        debug!("Overflow panel {:?}", self.state);
    }

    /// An entry inside the panel was pressed: close, then navigate.
    /// Groups carry no target and only close the panel.
    pub fn select(&mut self, entry: &NavigationEntry) -> Option<NavigationEvent> {
        self.state = PanelState::Closed;
        entry.target.map(|target| NavigationEvent { target })
    }

    /// A press landed outside the panel.
    pub fn dismiss_outside(&mut self) {
        self.state = PanelState::Closed;
    }
}

/// Split of the destinations into direct tabs and overflow entries.
#[derive(Debug, Clone)]
pub struct TabBar<'a> {
    direct: Vec<&'a NavigationEntry>,
    overflow: Vec<&'a NavigationEntry>,
}

impl<'a> TabBar<'a> {
    pub const DEFAULT_MAX_INLINE: usize = 5;

    /// `max_inline` counts the "More" tab itself and is raised to 2 so
    /// that at least one direct tab remains.
    pub fn new(entries: &'a [NavigationEntry], max_inline: usize) -> Self {
        let max_inline = max_inline.max(2);
        let mut direct = flatten_links(entries);

        let overflow = if direct.len() > max_inline {
            direct.split_off(max_inline - 1)
        } else {
            Vec::new()
        };

        Self { direct, overflow }
    }

    pub fn direct(&self) -> &[&'a NavigationEntry] {
        &self.direct
    }

    pub fn overflow(&self) -> &[&'a NavigationEntry] {
        &self.overflow
    }

    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }

    /// "More" is highlighted while its panel is open or while the current
    /// page is one of the overflow destinations.
    pub fn is_more_active(&self, current_path: &str, panel: &OverflowPanel) -> bool {
        panel.is_open() || self.overflow.iter().any(|entry| entry.is_active(current_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::student_navigation;

    fn targets(entries: &[&NavigationEntry]) -> Vec<&'static str> {
        entries.iter().filter_map(|entry| entry.target).collect()
    }

    // ==================== Panel State Tests ====================

    #[test]
    fn test_panel_starts_closed() {
        let panel = OverflowPanel::new();
        assert_eq!(panel.state(), PanelState::Closed);
        assert!(!panel.is_open());
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut panel = OverflowPanel::new();
        panel.toggle();
        assert!(panel.is_open());
        panel.toggle();
        assert!(!panel.is_open());
    }

    #[test]
    fn test_select_closes_and_navigates() {
        let entries = student_navigation();
        let mut panel = OverflowPanel::with_state(PanelState::Open);

        let event = panel.select(&entries[6]);

        assert_eq!(
            event,
            Some(NavigationEvent {
                target: "/student/messages"
            })
        );
        assert_eq!(panel.state(), PanelState::Closed);
    }

    #[test]
    fn test_dismiss_outside_closes() {
        let mut panel = OverflowPanel::with_state(PanelState::Open);
        panel.dismiss_outside();
        assert!(!panel.is_open());

        // Already closed stays closed.
        panel.dismiss_outside();
        assert!(!panel.is_open());
    }

    // ==================== Split Tests ====================

    #[test]
    fn test_split_with_default_max_inline() {
        let entries = student_navigation();
        let bar = TabBar::new(&entries, TabBar::DEFAULT_MAX_INLINE);

        assert_eq!(
            targets(bar.direct()),
            vec![
                "/student/dashboard",
                "/student/programs",
                "/student/courses",
                "/student/assignments",
            ]
        );
        assert_eq!(
            targets(bar.overflow()),
            vec![
                "/student/grades",
                "/student/calendar",
                "/student/messages",
                "/student/profile",
                "/student/settings",
            ]
        );
    }

    #[test]
    fn test_no_more_tab_when_everything_fits() {
        let entries = student_navigation();
        let bar = TabBar::new(&entries[..5], 5);
        assert_eq!(bar.direct().len(), 5);
        assert!(!bar.has_overflow());
    }

    #[test]
    fn test_max_inline_is_raised_to_two() {
        let entries = student_navigation();
        let bar = TabBar::new(&entries, 0);
        assert_eq!(bar.direct().len(), 1);
        assert_eq!(bar.overflow().len(), entries.len() - 1);
    }

    // ==================== More Tab Tests ====================

    #[test]
    fn test_more_active_when_overflow_entry_current() {
        let entries = student_navigation();
        let bar = TabBar::new(&entries, 5);
        let panel = OverflowPanel::new();

        assert!(bar.is_more_active("/student/profile", &panel));
        assert!(bar.is_more_active("/student/grades/term-1", &panel));
        assert!(!bar.is_more_active("/student/courses", &panel));
    }

    #[test]
    fn test_more_active_while_panel_open() {
        let entries = student_navigation();
        let bar = TabBar::new(&entries, 5);
        let panel = OverflowPanel::with_state(PanelState::Open);

        assert!(bar.is_more_active("/student/dashboard", &panel));
    }
}
