//! The fixed destination sets of the two audiences.

use super::NavigationEntry;

/// Administrative sidebar entries.
pub fn admin_navigation() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::link("Dashboard", "layout-dashboard", "/admin/dashboard"),
        NavigationEntry::link("Programs", "layers", "/admin/programs"),
        NavigationEntry::link("Courses", "book-open", "/admin/courses"),
        NavigationEntry::link("Students", "graduation-cap", "/admin/students"),
        NavigationEntry::link("Instructors", "users", "/admin/instructors"),
        NavigationEntry::link("Enrollments", "clipboard-list", "/admin/enrollments"),
        NavigationEntry::link("Payments", "credit-card", "/admin/payments"),
        NavigationEntry::group(
            "Reports",
            "bar-chart",
            vec![
                NavigationEntry::link("Analytics", "pie-chart", "/admin/reports/analytics"),
                NavigationEntry::link("Certificates", "award", "/admin/reports/certificates"),
            ],
        ),
        NavigationEntry::link("Settings", "settings", "/admin/settings"),
    ]
}

/// Learner sidebar and tab bar entries.
pub fn student_navigation() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::link("Dashboard", "layout-dashboard", "/student/dashboard"),
        NavigationEntry::link("My Programs", "layers", "/student/programs"),
        NavigationEntry::link("My Courses", "book-open", "/student/courses"),
        NavigationEntry::link("Assignments", "clipboard-check", "/student/assignments"),
        NavigationEntry::link("Grades", "award", "/student/grades"),
        NavigationEntry::link("Calendar", "calendar", "/student/calendar"),
        NavigationEntry::link("Messages", "message-square", "/student/messages"),
        NavigationEntry::link("Profile", "user", "/student/profile"),
        NavigationEntry::link("Settings", "settings", "/student/settings"),
    ]
}
