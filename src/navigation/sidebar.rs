//! Sidebar navigation.
//!
//! The sidebar owns only which groups the user has expanded. Collapse and
//! mobile-drawer state belong to the enclosing shell and arrive through
//! [`SidebarProps`]; user actions on them go back up as [`SidebarEvent`]s.

use super::{NavigationEntry, NavigationEvent};
use tracing::debug;

/// Shell state passed down into the sidebar for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarProps<'a> {
    pub current_path: &'a str,
    pub collapsed: bool,
    pub mobile_open: bool,
}

impl<'a> SidebarProps<'a> {
    /// Fixed, always-expanded sidebar.
    pub fn expanded(current_path: &'a str) -> Self {
        Self {
            current_path,
            collapsed: false,
            mobile_open: false,
        }
    }

    /// Labels are hidden only in the collapsed desktop rail. The mobile
    /// drawer always shows them.
    pub fn shows_labels(&self) -> bool {
        !self.collapsed || self.mobile_open
    }
}

/// Requests from the sidebar to its shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    ToggleCollapsed,
    CloseMobile,
    Navigate(NavigationEvent),
}

#[derive(Debug, Clone)]
pub struct Sidebar {
    entries: Vec<NavigationEntry>,
    open_groups: Vec<&'static str>,
}

impl Sidebar {
    pub fn new(entries: Vec<NavigationEntry>) -> Self {
        Self {
            entries,
            open_groups: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    /// Flip a group between expanded and folded. Unknown keys are ignored.
    pub fn toggle_group(&mut self, label_key: &str) {
        let Some(group) = self
            .entries
            .iter()
            .find(|entry| entry.is_group() && entry.label_key == label_key)
        else {
            debug!("Ignoring toggle for unknown group {:?}", label_key);
            return;
        };

        if let Some(position) = self.open_groups.iter().position(|key| *key == group.label_key) {
            self.open_groups.remove(position);
        } else {
            self.open_groups.push(group.label_key);
        }
    }

    /// A group shows its children when the user opened it or when one of
    /// them is the current page.
    pub fn is_group_expanded(&self, group: &NavigationEntry, current_path: &str) -> bool {
        self.open_groups.contains(&group.label_key) || group.is_active(current_path)
    }

    /// Handle a click on the entry labelled `label_key`.
    ///
    /// Groups toggle in place and produce no event. Links produce a
    /// navigation request for the shell.
    pub fn activate(&mut self, label_key: &str) -> Option<SidebarEvent> {
        let target = find_entry(&self.entries, label_key)?.target;
        match target {
            Some(target) => Some(SidebarEvent::Navigate(NavigationEvent { target })),
            None => {
                self.toggle_group(label_key);
                None
            }
        }
    }
}

fn find_entry<'a>(entries: &'a [NavigationEntry], label_key: &str) -> Option<&'a NavigationEntry> {
    entries.iter().find_map(|entry| {
        if entry.label_key == label_key {
            Some(entry)
        } else {
            find_entry(&entry.children, label_key)
        }
    })
}
