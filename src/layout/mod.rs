//! The two page frames: the administrative shell and the learner shell.
//!
//! Shells hold UI state only (collapse, drawer, overflow panel). Everything
//! they show is derived per render from that state, the current path and
//! the language context.

mod admin;
mod student;

pub use admin::AdminShell;
pub use student::StudentShell;

/// Sidebar width with labels, in CSS pixels.
pub const EXPANDED_SIDEBAR_WIDTH: u16 = 256;

/// Icon-only rail width, in CSS pixels.
pub const COLLAPSED_SIDEBAR_WIDTH: u16 = 80;

/// `path` with `flags` appended as `name=true` query pairs. Unset flags are
/// left out so the default state has clean URLs.
pub(crate) fn href_with_flags(path: &str, flags: &[(&str, bool)]) -> String {
    let pairs: Vec<String> = flags
        .iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| format!("{}=true", name))
        .collect();

    if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, pairs.join("&"))
    }
}
