//! HTML markup for the shells.
//!
//! Every render function takes the [`Scope`](crate::i18n::Scope) it renders
//! in and fails with [`UsageError`](crate::i18n::UsageError) when that scope
//! has no language provider. Icons are emitted as `data-icon` names for the
//! client-side icon set to pick up.

mod components;
mod pages;

pub use components::{render_language_toggle, render_sidebar, render_tab_bar};
pub use pages::{render_admin_page, render_student_page};

use crate::i18n::Language;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// Wrap `body` (already escaped markup) in a complete document.
pub(crate) fn document(language: Language, title: &str, body_attrs: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n</head>\n<body {body_attrs}>\n{body}</body>\n</html>\n",
        lang = language.code(),
        title = escape_html(title),
        body_attrs = body_attrs,
        body = body,
    )
}
