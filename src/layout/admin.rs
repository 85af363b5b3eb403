use super::{href_with_flags, COLLAPSED_SIDEBAR_WIDTH, EXPANDED_SIDEBAR_WIDTH};
use crate::navigation::{NavigationEvent, SidebarEvent, SidebarProps};
use tracing::debug;

/// Administrative frame: collapsible sidebar, mobile drawer, header with
/// search and notifications.
///
/// `collapsed` (desktop rail) and `mobile_open` (drawer) are independent;
/// neither operation touches the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminShell {
    collapsed: bool,
    mobile_open: bool,
    search_query: String,
    unread_notifications: u32,
}

impl AdminShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(collapsed: bool, mobile_open: bool) -> Self {
        Self {
            collapsed,
            mobile_open,
            ..Self::default()
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
        debug!("Admin sidebar collapsed: {}", self.collapsed);
    }

    pub fn open_mobile(&mut self) {
        self.mobile_open = true;
    }

    pub fn close_mobile(&mut self) {
        self.mobile_open = false;
    }

    /// Apply a sidebar request. Navigating from the drawer closes it.
    pub fn apply(&mut self, event: SidebarEvent) -> Option<NavigationEvent> {
        match event {
            SidebarEvent::ToggleCollapsed => {
                self.toggle_collapsed();
                None
            }
            SidebarEvent::CloseMobile => {
                self.close_mobile();
                None
            }
            SidebarEvent::Navigate(navigation) => {
                self.close_mobile();
                Some(navigation)
            }
        }
    }

    /// Left offset of the content region, tracking the sidebar width.
    pub fn content_offset(&self) -> u16 {
        if self.collapsed {
            COLLAPSED_SIDEBAR_WIDTH
        } else {
            EXPANDED_SIDEBAR_WIDTH
        }
    }

    pub fn sidebar_props<'a>(&self, current_path: &'a str) -> SidebarProps<'a> {
        SidebarProps {
            current_path,
            collapsed: self.collapsed,
            mobile_open: self.mobile_open,
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn unread_notifications(&self) -> u32 {
        self.unread_notifications
    }

    pub fn set_unread_notifications(&mut self, count: u32) {
        self.unread_notifications = count;
    }

    /// Link to `path` that keeps the rail state. The drawer is not carried
    /// over: following a link closes it.
    pub fn href(&self, path: &str) -> String {
        href_with_flags(path, &[("collapsed", self.collapsed)])
    }

    /// Link to `path` rendered with this exact state.
    pub fn state_href(&self, path: &str) -> String {
        href_with_flags(path, &[("collapsed", self.collapsed), ("menu", self.mobile_open)])
    }
}
