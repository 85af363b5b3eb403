//! Navigation chrome: entries, active-state detection, the sidebar, the
//! mobile tab bar with its overflow panel, and the language toggle.
//!
//! Targets are opaque path strings supplied by the router. The only thing
//! this module does with them is the prefix comparison in [`is_path_active`].

mod menu;
mod sidebar;
mod tab_bar;
mod toggle;

pub use menu::{admin_navigation, student_navigation};
pub use sidebar::{Sidebar, SidebarEvent, SidebarProps};
pub use tab_bar::{OverflowPanel, PanelState, TabBar};
pub use toggle::LanguageToggle;

use crate::i18n::Translator;

/// A navigation entry.
///
/// An entry without a target is a group-opening control; it owns a list of
/// secondary entries shown when the group is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    /// Phrase key of the visible label
    pub label_key: &'static str,

    /// Icon name, passed through to the icon renderer
    pub icon: &'static str,

    /// Destination path, `None` for groups
    pub target: Option<&'static str>,

    /// Secondary entries of a group
    pub children: Vec<NavigationEntry>,
}

impl NavigationEntry {
    pub fn link(label_key: &'static str, icon: &'static str, target: &'static str) -> Self {
        Self {
            label_key,
            icon,
            target: Some(target),
            children: Vec::new(),
        }
    }

    pub fn group(
        label_key: &'static str,
        icon: &'static str,
        children: Vec<NavigationEntry>,
    ) -> Self {
        Self {
            label_key,
            icon,
            target: None,
            children,
        }
    }

    pub fn is_group(&self) -> bool {
        self.target.is_none()
    }

    /// A link is active when `current` is its target or lies below it; a
    /// group is active when any of its children is.
    pub fn is_active(&self, current: &str) -> bool {
        match self.target {
            Some(target) => is_path_active(current, target),
            None => self.children.iter().any(|child| child.is_active(current)),
        }
    }

    /// Localized label.
    pub fn label(&self, translator: &Translator) -> &'static str {
        translator.translate(self.label_key)
    }
}

/// Request to navigate, emitted by sidebar and tab bar interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEvent {
    pub target: &'static str,
}

/// `current` equals `target`, or continues it after a `/` boundary.
///
/// `/student/programs/101` is under `/student/programs` but not under
/// `/student/program`.
pub fn is_path_active(current: &str, target: &str) -> bool {
    current == target
        || current
            .strip_prefix(target)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Links in display order, with groups replaced by their children.
pub fn flatten_links(entries: &[NavigationEntry]) -> Vec<&NavigationEntry> {
    let mut links = Vec::new();
    for entry in entries {
        if entry.is_group() {
            links.extend(flatten_links(&entry.children));
        } else {
            links.push(entry);
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn reports_group() -> NavigationEntry {
        NavigationEntry::group(
            "Reports",
            "bar-chart",
            vec![
                NavigationEntry::link("Analytics", "pie-chart", "/admin/reports/analytics"),
                NavigationEntry::link("Certificates", "award", "/admin/reports/certificates"),
            ],
        )
    }

    // ==================== Active Path Tests ====================

    #[test]
    fn test_exact_match_is_active() {
        assert!(is_path_active("/student/programs", "/student/programs"));
    }

    #[test]
    fn test_subpage_is_active() {
        assert!(is_path_active("/student/programs/101", "/student/programs"));
        assert!(is_path_active("/student/programs/101/modules/3", "/student/programs"));
    }

    #[test]
    fn test_prefix_without_separator_is_not_active() {
        assert!(!is_path_active("/student/programs/101", "/student/program"));
        assert!(!is_path_active("/student/programs-archive", "/student/programs"));
    }

    #[test]
    fn test_parent_path_is_not_active() {
        assert!(!is_path_active("/student", "/student/programs"));
    }

    #[test]
    fn test_root_target_only_matches_exactly() {
        assert!(is_path_active("/", "/"));
        assert!(!is_path_active("/student", "/"));
    }

    // ==================== Entry Tests ====================

    #[test]
    fn test_link_entry_active_state() {
        let entry = NavigationEntry::link("My Programs", "layers", "/student/programs");
        assert!(!entry.is_group());
        assert!(entry.is_active("/student/programs/101"));
        assert!(!entry.is_active("/student/courses"));
    }

    #[test]
    fn test_group_active_when_child_active() {
        let group = reports_group();
        assert!(group.is_group());
        assert!(group.is_active("/admin/reports/analytics"));
        assert!(group.is_active("/admin/reports/certificates/2024"));
        assert!(!group.is_active("/admin/reports"));
    }

    #[test]
    fn test_label_is_localized() {
        let entry = NavigationEntry::link("Grades", "award", "/student/grades");
        assert_eq!(entry.label(&Translator::new(Language::ENGLISH)), "Grades");
        assert_eq!(entry.label(&Translator::new(Language::AMHARIC)), "ውጤቶች");
    }

    #[test]
    fn test_flatten_links_expands_groups_in_order() {
        let entries = vec![
            NavigationEntry::link("Dashboard", "home", "/admin/dashboard"),
            reports_group(),
            NavigationEntry::link("Settings", "settings", "/admin/settings"),
        ];
        let targets: Vec<_> = flatten_links(&entries)
            .iter()
            .filter_map(|entry| entry.target)
            .collect();
        assert_eq!(
            targets,
            vec![
                "/admin/dashboard",
                "/admin/reports/analytics",
                "/admin/reports/certificates",
                "/admin/settings",
            ]
        );
    }
}
