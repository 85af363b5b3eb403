//! Preview binary - renders a shell page to stdout without starting the server
//!
//! Usage:
//!   cargo run --bin preview -- /student/grades           # Render a page
//!   cargo run --bin preview -- /admin/courses --collapsed
//!   cargo run --bin preview -- --toggle /student/grades  # Flip the language first
//!   cargo run --bin preview -- --check                   # Validate the phrase table
//!
//! Page flags: --collapsed, --menu (admin); --more, --assistant (student)
//!
//! The chosen language is persisted in a JSON file so it survives between
//! runs, the way the browser cookie does for the server.
//!
//! Optional environment variables:
//! - PREVIEW_STORAGE_DIR (defaults to .lms-shell)
//! - LANGUAGE_STORAGE_KEY (defaults to language)
//! - TAB_BAR_MAX_INLINE (defaults to 5)
//! - ADMIN_NOTIFICATION_COUNT (defaults to 0)

use anyhow::{bail, Result};
use lms_shell::config::Config;
use lms_shell::i18n::{LanguageProvider, TranslationTable, TranslationValidator};
use lms_shell::layout::{AdminShell, StudentShell};
use lms_shell::navigation::{admin_navigation, student_navigation, LanguageToggle, Sidebar};
use lms_shell::render::{render_admin_page, render_student_page};
use lms_shell::storage::FileStorage;
use tracing::info;

const DEFAULT_PATH: &str = "/student/dashboard";

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the page
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lms_shell=info".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let has_flag = |flag: &str| args.iter().any(|arg| arg == flag);

    if has_flag("--check") {
        return check_translations();
    }

    let config = Config::from_env()?;
    let storage_dir =
        std::env::var("PREVIEW_STORAGE_DIR").unwrap_or_else(|_| ".lms-shell".to_string());
    let storage = FileStorage::new(&storage_dir);
    info!("Using preview storage at {}", storage.path().display());

    let path = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .map(String::as_str)
        .unwrap_or(DEFAULT_PATH);

    let provider = LanguageProvider::new(storage, &config.language_storage_key);

    let html = provider.render(|scope| {
        if has_flag("--toggle") {
            LanguageToggle::new(scope)?.activate();
        }

        if path == "/admin" || path.starts_with("/admin/") {
            let mut shell = AdminShell::with_state(has_flag("--collapsed"), has_flag("--menu"));
            shell.set_unread_notifications(config.admin_notification_count);
            let sidebar = Sidebar::new(admin_navigation());
            render_admin_page(scope, &shell, &sidebar, path)
        } else {
            let shell = StudentShell::with_state(has_flag("--more"), has_flag("--assistant"));
            let sidebar = Sidebar::new(student_navigation());
            render_student_page(scope, &shell, &sidebar, path, config.tab_bar_max_inline)
        }
    })?;

    print!("{}", html);
    Ok(())
}

fn check_translations() -> Result<()> {
    let table = TranslationTable::builtin();
    let report = TranslationValidator::validate(table);

    println!("Checked {} phrases", table.len());
    for message in &report.errors {
        println!("error: {}", message);
    }
    for message in &report.warnings {
        println!("warning: {}", message);
    }

    if report.has_errors() {
        bail!("Translation table has {} errors", report.errors.len());
    }
    if report.is_clean() {
        println!("No issues found");
    }
    Ok(())
}
