//! Shared chrome: sidebar navigation, tab bar with overflow sheet, language
//! toggle.

use super::escape_html;
use crate::i18n::{Scope, Translator, UsageError};
use crate::navigation::{
    LanguageToggle, NavigationEntry, OverflowPanel, Sidebar, SidebarProps, TabBar,
};

/// Builds the `href` of a navigation target in the current shell state.
pub type LinkHref<'a> = &'a dyn Fn(&str) -> String;

/// Sidebar entry list. Groups render as `<details>` so they fold without
/// scripting; they start open when expanded or holding the current page.
pub fn render_sidebar(
    scope: &Scope,
    sidebar: &Sidebar,
    props: &SidebarProps,
    link_href: LinkHref,
) -> Result<String, UsageError> {
    let translator = scope.translator()?;

    let mut html = format!(
        "<nav class=\"sidebar-nav\" aria-label=\"{}\">\n<ul>\n",
        escape_html(translator.t("Main navigation"))
    );
    for entry in sidebar.entries() {
        html.push_str(&sidebar_item(&translator, sidebar, entry, props, link_href));
    }
    html.push_str("</ul>\n</nav>\n");

    Ok(html)
}

fn sidebar_item(
    translator: &Translator,
    sidebar: &Sidebar,
    entry: &NavigationEntry,
    props: &SidebarProps,
    link_href: LinkHref,
) -> String {
    let label = escape_html(entry.label(translator));
    let active = entry.is_active(props.current_path);
    let class = if active { "nav-link active" } else { "nav-link" };
    let label_class = if props.shows_labels() {
        "nav-label"
    } else {
        "nav-label sr-only"
    };

    match entry.target {
        Some(target) => format!(
            "<li><a class=\"{class}\" href=\"{href}\" data-icon=\"{icon}\" title=\"{label}\"{current}>\
             <span class=\"{label_class}\">{label}</span></a></li>\n",
            href = escape_html(&link_href(target)),
            icon = entry.icon,
            current = aria_current(active),
        ),
        None => {
            let open = if sidebar.is_group_expanded(entry, props.current_path) {
                " open"
            } else {
                ""
            };
            let children: String = entry
                .children
                .iter()
                .map(|child| sidebar_item(translator, sidebar, child, props, link_href))
                .collect();
            format!(
                "<li class=\"nav-group\"><details{open}>\
                 <summary class=\"{class}\" data-icon=\"{icon}\" title=\"{label}\">\
                 <span class=\"{label_class}\">{label}</span></summary>\n\
                 <ul>\n{children}</ul>\n</details></li>\n",
                icon = entry.icon,
            )
        }
    }
}

/// Bottom tab bar, plus the overflow sheet while the panel is open.
///
/// `more_href` toggles the panel; `dismiss_href` is the same page with the
/// panel closed and backs both the close button and the backdrop.
pub fn render_tab_bar(
    scope: &Scope,
    bar: &TabBar,
    panel: &OverflowPanel,
    current_path: &str,
    link_href: LinkHref,
    more_href: &str,
    dismiss_href: &str,
) -> Result<String, UsageError> {
    let translator = scope.translator()?;

    let mut html = format!(
        "<nav class=\"tab-bar\" aria-label=\"{}\">\n<ul>\n",
        escape_html(translator.t("Main navigation"))
    );
    for entry in bar.direct() {
        html.push_str(&tab_item(&translator, entry, current_path, link_href));
    }

    if bar.has_overflow() {
        let more_active = bar.is_more_active(current_path, panel);
        html.push_str(&format!(
            "<li><a class=\"{class}\" href=\"{href}\" data-icon=\"more-horizontal\" aria-expanded=\"{expanded}\">\
             <span class=\"tab-label\">{label}</span></a></li>\n",
            class = if more_active { "tab active" } else { "tab" },
            href = escape_html(more_href),
            expanded = panel.is_open(),
            label = escape_html(translator.t("More")),
        ));
    }
    html.push_str("</ul>\n</nav>\n");

    if bar.has_overflow() && panel.is_open() {
        let close = escape_html(translator.t("Close"));
        let dismiss = escape_html(dismiss_href);
        let more = escape_html(translator.t("More"));

        html.push_str(&format!(
            "<a class=\"sheet-backdrop\" href=\"{dismiss}\" aria-label=\"{close}\"></a>\n\
             <div class=\"sheet\" role=\"dialog\" aria-label=\"{more}\">\n\
             <div class=\"sheet-header\"><h2>{more}</h2>\
             <a class=\"sheet-close\" href=\"{dismiss}\" data-icon=\"x\" aria-label=\"{close}\"></a></div>\n<ul>\n"
        ));
        for entry in bar.overflow() {
            html.push_str(&tab_item(&translator, entry, current_path, link_href));
        }
        html.push_str("</ul>\n</div>\n");
    }

    Ok(html)
}

fn tab_item(
    translator: &Translator,
    entry: &NavigationEntry,
    current_path: &str,
    link_href: LinkHref,
) -> String {
    let Some(target) = entry.target else {
        return String::new();
    };
    let active = entry.is_active(current_path);

    format!(
        "<li><a class=\"{class}\" href=\"{href}\" data-icon=\"{icon}\"{current}>\
         <span class=\"tab-label\">{label}</span></a></li>\n",
        class = if active { "tab active" } else { "tab" },
        href = escape_html(&link_href(target)),
        icon = entry.icon,
        current = aria_current(active),
        label = escape_html(entry.label(translator)),
    )
}

/// Form posting to the toggle endpoint, returning to `redirect` afterwards.
pub fn render_language_toggle(scope: &Scope, redirect: &str) -> Result<String, UsageError> {
    let toggle = LanguageToggle::new(scope)?;
    let translator = scope.translator()?;

    Ok(format!(
        "<form class=\"language-toggle\" method=\"post\" action=\"/language/toggle\">\
         <input type=\"hidden\" name=\"redirect\" value=\"{redirect}\">\
         <button type=\"submit\" data-icon=\"globe\" title=\"{title}\" lang=\"{lang}\">{label}</button></form>\n",
        redirect = escape_html(redirect),
        title = escape_html(translator.t("Language")),
        lang = toggle.target().code(),
        label = escape_html(toggle.label()),
    ))
}

fn aria_current(active: bool) -> &'static str {
    if active {
        " aria-current=\"page\""
    } else {
        ""
    }
}
