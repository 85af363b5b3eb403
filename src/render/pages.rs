//! Full pages for the two shells.

use super::components::{render_language_toggle, render_sidebar, render_tab_bar};
use super::{document, escape_html};
use crate::i18n::{Scope, Translator, UsageError};
use crate::layout::{AdminShell, StudentShell};
use crate::navigation::{flatten_links, NavigationEntry, Sidebar, SidebarProps, TabBar};

/// Administrative page for `current_path`.
pub fn render_admin_page(
    scope: &Scope,
    shell: &AdminShell,
    sidebar: &Sidebar,
    current_path: &str,
) -> Result<String, UsageError> {
    let language = scope.language()?;
    let translator = language.translator();
    let props = shell.sidebar_props(current_path);
    let link_href = |target: &str| shell.href(target);

    let brand = translator.t("Admin Panel");
    let heading = page_heading(&translator, sidebar.entries(), current_path, brand);

    let mut toggled = shell.clone();
    toggled.toggle_collapsed();
    let (collapse_label, collapse_icon) = if shell.is_collapsed() {
        (translator.t("Expand sidebar"), "chevrons-right")
    } else {
        (translator.t("Collapse sidebar"), "chevrons-left")
    };

    let mut opened = shell.clone();
    opened.open_mobile();
    let mut closed = shell.clone();
    closed.close_mobile();

    let width = shell.content_offset();
    let mut body = format!(
        "<aside class=\"sidebar\" style=\"width: {width}px\">\n\
         <div class=\"sidebar-brand\" data-icon=\"graduation-cap\">{brand}</div>\n\
         <a class=\"sidebar-collapse\" href=\"{collapse_href}\" data-icon=\"{collapse_icon}\" title=\"{collapse_label}\"></a>\n",
        brand = escape_html(brand),
        collapse_href = escape_html(&toggled.state_href(current_path)),
        collapse_label = escape_html(collapse_label),
    );
    if shell.is_mobile_open() {
        body.push_str(&format!(
            "<a class=\"sidebar-close\" href=\"{}\" data-icon=\"x\" title=\"{}\"></a>\n",
            escape_html(&closed.state_href(current_path)),
            escape_html(translator.t("Close menu")),
        ));
    }
    body.push_str(&render_sidebar(scope, sidebar, &props, &link_href)?);
    body.push_str("</aside>\n");

    if shell.is_mobile_open() {
        body.push_str(&format!(
            "<a class=\"drawer-backdrop\" href=\"{}\" aria-label=\"{}\"></a>\n",
            escape_html(&closed.state_href(current_path)),
            escape_html(translator.t("Close menu")),
        ));
    }

    body.push_str(&format!(
        "<div class=\"content\" style=\"margin-left: {width}px\">\n<header class=\"topbar\">\n\
         <a class=\"menu-button\" href=\"{menu_href}\" data-icon=\"menu\" title=\"{menu_label}\"></a>\n",
        menu_href = escape_html(&opened.state_href(current_path)),
        menu_label = escape_html(translator.t("Open menu")),
    ));
    body.push_str(&search_form(&translator, shell, current_path));
    body.push_str(&render_language_toggle(
        scope,
        &shell.state_href(current_path),
    )?);
    body.push_str(&notification_bell(&translator, shell.unread_notifications()));
    body.push_str(&format!(
        "</header>\n<main>\n<h1>{}</h1>\n</main>\n</div>\n",
        escape_html(heading)
    ));

    let attrs = format!(
        "class=\"admin-shell\" data-collapsed=\"{}\" data-mobile-open=\"{}\"",
        shell.is_collapsed(),
        shell.is_mobile_open()
    );
    let title = format!("{} | {}", heading, brand);

    Ok(document(language.current(), &title, &attrs, &body))
}

/// Learner page for `current_path`, with a tab bar of at most `max_inline`
/// tabs.
pub fn render_student_page(
    scope: &Scope,
    shell: &StudentShell,
    sidebar: &Sidebar,
    current_path: &str,
    max_inline: usize,
) -> Result<String, UsageError> {
    let language = scope.language()?;
    let translator = language.translator();
    let props = SidebarProps::expanded(current_path);
    let link_href = |target: &str| shell.href(target);

    let brand = translator.t("Student Portal");
    let heading = page_heading(&translator, sidebar.entries(), current_path, brand);
    let width = shell.content_offset();

    let mut body = format!(
        "<aside class=\"sidebar\" style=\"width: {width}px\">\n\
         <div class=\"sidebar-brand\" data-icon=\"graduation-cap\">{}</div>\n",
        escape_html(brand),
    );
    body.push_str(&render_sidebar(scope, sidebar, &props, &link_href)?);
    body.push_str("</aside>\n");

    body.push_str(&format!(
        "<div class=\"content\" style=\"margin-left: {width}px\">\n<header class=\"topbar\">\n\
         <span class=\"greeting\">{}</span>\n",
        escape_html(translator.t("Welcome back")),
    ));
    body.push_str(&render_language_toggle(
        scope,
        &shell.state_href(current_path),
    )?);
    body.push_str(&format!(
        "</header>\n<main>\n<h1>{}</h1>\n</main>\n</div>\n",
        escape_html(heading)
    ));

    let mut more_toggled = *shell;
    more_toggled.toggle_more();
    let mut dismissed = *shell;
    dismissed.dismiss_overflow();
    let bar = TabBar::new(sidebar.entries(), max_inline);
    body.push_str(&render_tab_bar(
        scope,
        &bar,
        shell.overflow(),
        current_path,
        &link_href,
        &more_toggled.state_href(current_path),
        &dismissed.state_href(current_path),
    )?);

    let mut assistant_toggled = *shell;
    assistant_toggled.toggle_assistant();
    let assistant_label = escape_html(translator.t("Learning Assistant"));
    body.push_str(&format!(
        "<a class=\"assistant-launcher\" href=\"{}\" data-icon=\"message-circle\" title=\"{}\" aria-expanded=\"{}\"></a>\n",
        escape_html(&assistant_toggled.state_href(current_path)),
        escape_html(translator.t("Ask the assistant")),
        shell.is_assistant_open(),
    ));
    if shell.is_assistant_open() {
        body.push_str(&format!(
            "<aside class=\"assistant-panel\" aria-label=\"{assistant_label}\">\n\
             <h2>{assistant_label}</h2>\n<div id=\"chat-bot\"></div>\n</aside>\n"
        ));
    }

    let attrs = format!(
        "class=\"student-shell\" data-more-open=\"{}\" data-assistant-open=\"{}\"",
        shell.overflow().is_open(),
        shell.is_assistant_open()
    );
    let title = format!("{} | {}", heading, brand);

    Ok(document(language.current(), &title, &attrs, &body))
}

/// Label of the active destination, or `fallback` when none matches.
fn page_heading(
    translator: &Translator,
    entries: &[NavigationEntry],
    current_path: &str,
    fallback: &'static str,
) -> &'static str {
    flatten_links(entries)
        .into_iter()
        .find(|entry| entry.is_active(current_path))
        .map(|entry| entry.label(translator))
        .unwrap_or(fallback)
}

fn search_form(translator: &Translator, shell: &AdminShell, current_path: &str) -> String {
    let keep_collapsed = if shell.is_collapsed() {
        "<input type=\"hidden\" name=\"collapsed\" value=\"true\">"
    } else {
        ""
    };

    format!(
        "<form class=\"search\" method=\"get\" action=\"{action}\" role=\"search\">{keep_collapsed}\
         <input type=\"search\" name=\"q\" value=\"{value}\" placeholder=\"{placeholder}\" data-icon=\"search\"></form>\n",
        action = escape_html(current_path),
        value = escape_html(shell.search_query()),
        placeholder = escape_html(translator.t("Search...")),
    )
}

fn notification_bell(translator: &Translator, unread: u32) -> String {
    let badge = match unread {
        0 => String::new(),
        1..=99 => format!("<span class=\"badge\">{}</span>", unread),
        _ => "<span class=\"badge\">99+</span>".to_string(),
    };

    format!(
        "<button class=\"notifications\" type=\"button\" data-icon=\"bell\" title=\"{}\">{}</button>\n",
        escape_html(translator.t("Notifications")),
        badge
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, LanguageProvider, DEFAULT_STORAGE_KEY};
    use crate::navigation::{admin_navigation, student_navigation};
    use crate::storage::MemoryStorage;

    fn in_language<R>(language: Language, render: impl FnOnce(&Scope) -> R) -> R {
        let storage = MemoryStorage::with_item(DEFAULT_STORAGE_KEY, language.code());
        LanguageProvider::new(storage, DEFAULT_STORAGE_KEY).render(render)
    }

    fn admin(shell: &AdminShell, path: &str, language: Language) -> String {
        let sidebar = Sidebar::new(admin_navigation());
        in_language(language, |scope| {
            render_admin_page(scope, shell, &sidebar, path).unwrap()
        })
    }

    fn student(shell: &StudentShell, path: &str, language: Language) -> String {
        let sidebar = Sidebar::new(student_navigation());
        in_language(language, |scope| {
            render_student_page(scope, shell, &sidebar, path, TabBar::DEFAULT_MAX_INLINE).unwrap()
        })
    }

    // ==================== Admin Page Tests ====================

    #[test]
    fn test_admin_page_english() {
        let html = admin(&AdminShell::new(), "/admin/courses", Language::ENGLISH);

        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<title>Courses | Admin Panel</title>"));
        assert!(html.contains("<h1>Courses</h1>"));
        assert!(html.contains("style=\"margin-left: 256px\""));
        assert!(html.contains("title=\"Collapse sidebar\""));
        assert!(html.contains("href=\"/admin/courses?collapsed=true\""));
        assert!(!html.contains("drawer-backdrop"));
    }

    #[test]
    fn test_admin_page_amharic() {
        let html = admin(&AdminShell::new(), "/admin/courses", Language::AMHARIC);

        assert!(html.contains("<html lang=\"am\">"));
        assert!(html.contains("<h1>ኮርሶች</h1>"));
        assert!(html.contains("የአስተዳዳሪ ፓነል"));
        assert!(html.contains("placeholder=\"ፈልግ...\""));
        assert!(html.contains(">English</button>"));
    }

    #[test]
    fn test_admin_collapsed_rail() {
        let shell = AdminShell::with_state(true, false);
        let html = admin(&shell, "/admin/payments", Language::ENGLISH);

        assert!(html.contains("data-collapsed=\"true\""));
        assert!(html.contains("style=\"margin-left: 80px\""));
        assert!(html.contains("title=\"Expand sidebar\""));
        // Links keep the rail collapsed.
        assert!(html.contains("href=\"/admin/settings?collapsed=true\""));
        assert!(html.contains("name=\"collapsed\" value=\"true\""));
    }

    #[test]
    fn test_admin_mobile_drawer() {
        let shell = AdminShell::with_state(false, true);
        let html = admin(&shell, "/admin/dashboard", Language::ENGLISH);

        assert!(html.contains("<a class=\"drawer-backdrop\" href=\"/admin/dashboard\""));
        assert!(html.contains("data-mobile-open=\"true\""));
        // Sidebar links close the drawer.
        assert!(html.contains("href=\"/admin/programs\""));
    }

    #[test]
    fn test_admin_search_and_badge() {
        let mut shell = AdminShell::new();
        shell.set_search_query("<script>");
        shell.set_unread_notifications(3);
        let html = admin(&shell, "/admin/students", Language::ENGLISH);

        assert!(html.contains("value=\"&lt;script&gt;\""));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<span class=\"badge\">3</span>"));
    }

    #[test]
    fn test_admin_unknown_path_uses_brand_heading() {
        let html = admin(&AdminShell::new(), "/admin", Language::ENGLISH);
        assert!(html.contains("<h1>Admin Panel</h1>"));
    }

    #[test]
    fn test_notification_badge_caps() {
        let translator = Translator::new(Language::ENGLISH);
        assert!(!notification_bell(&translator, 0).contains("badge"));
        assert!(notification_bell(&translator, 250).contains(">99+</span>"));
    }

    #[test]
    fn test_pages_outside_provider_fail() {
        let scope = Scope::detached();
        let admin_sidebar = Sidebar::new(admin_navigation());
        let student_sidebar = Sidebar::new(student_navigation());

        assert_eq!(
            render_admin_page(&scope, &AdminShell::new(), &admin_sidebar, "/admin/dashboard"),
            Err(UsageError::MissingProvider)
        );
        assert_eq!(
            render_student_page(&scope, &StudentShell::new(), &student_sidebar, "/student", 5),
            Err(UsageError::MissingProvider)
        );
    }

    // ==================== Student Page Tests ====================

    #[test]
    fn test_student_page_english() {
        let html = student(&StudentShell::new(), "/student/programs/101", Language::ENGLISH);

        assert!(html.contains("<h1>My Programs</h1>"));
        assert!(html.contains("Welcome back"));
        assert!(html.contains("<nav class=\"tab-bar\""));
        assert!(html.contains("href=\"/student/programs/101?more=true\""));
        assert!(!html.contains("class=\"sheet\""));
        assert!(!html.contains("assistant-panel"));
    }

    #[test]
    fn test_student_page_with_open_panels() {
        let shell = StudentShell::with_state(true, true);
        let html = student(&shell, "/student/dashboard", Language::AMHARIC);

        assert!(html.contains("<h1>ዳሽቦርድ</h1>"));
        assert!(html.contains("class=\"sheet\""));
        assert!(html.contains("<aside class=\"assistant-panel\" aria-label=\"የትምህርት ረዳት\">"));
        assert!(html.contains("<div id=\"chat-bot\"></div>"));
        // Overflow entries navigate with the panel closed.
        assert!(html.contains("href=\"/student/grades?assistant=true\""));
        assert!(html.contains("<a class=\"sheet-backdrop\" href=\"/student/dashboard?assistant=true\""));
    }
}
