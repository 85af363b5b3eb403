//! HTTP surface: serves both shells, the language toggle endpoint, health
//! and metrics.
//!
//! The language store is single-threaded. Each request builds its own
//! provider over the request's cookies inside a synchronous helper, so no
//! store is ever held across an `.await`.

use crate::config::Config;
use crate::i18n::{LanguageProvider, MetricsReport, TranslationMetrics, UsageError};
use crate::layout::{AdminShell, StudentShell};
use crate::navigation::{admin_navigation, student_navigation, LanguageToggle, Sidebar};
use crate::render::{render_admin_page, render_student_page};
use crate::storage::CookieStorage;
use anyhow::{Context, Result};
use axum::extract::{Form, Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Deserializer};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
}

/// Admin shell state carried in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    #[serde(default, deserialize_with = "flag")]
    pub collapsed: bool,
    #[serde(default, deserialize_with = "flag")]
    pub menu: bool,
    #[serde(default)]
    pub q: String,
}

/// Student shell state carried in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct StudentQuery {
    #[serde(default, deserialize_with = "flag")]
    pub more: bool,
    #[serde(default, deserialize_with = "flag")]
    pub assistant: bool,
}

/// Hand-typed query flags: `true`, `1`, `yes` and `on` set the flag, any
/// other value clears it instead of rejecting the request.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    ))
}

#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    #[serde(default)]
    pub redirect: String,
}

pub fn router(config: Config) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(root))
        .route("/admin", get(admin_page))
        .route("/admin/*rest", get(admin_page))
        .route("/student", get(student_page))
        .route("/student/*rest", get(student_page))
        .route("/language/toggle", post(toggle_language))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl+C.
pub async fn serve(config: Config) -> Result<()> {
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}

// ==================== Handlers ====================

async fn root() -> Redirect {
    Redirect::to("/student/dashboard")
}

async fn health() -> &'static str {
    "OK"
}

async fn metrics() -> Json<MetricsReport> {
    Json(TranslationMetrics::global().report())
}

async fn admin_page(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<AdminQuery>,
) -> Response {
    let cookies = cookie_header(&headers);
    page_response(render_admin(&state.config, cookies.as_deref(), uri.path(), query))
}

async fn student_page(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<StudentQuery>,
) -> Response {
    let cookies = cookie_header(&headers);
    page_response(render_student(&state.config, cookies.as_deref(), uri.path(), query))
}

async fn toggle_language(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ToggleForm>,
) -> Response {
    let cookies = cookie_header(&headers);

    let set_cookies = match toggle_cookie_language(&state.config, cookies.as_deref()) {
        Ok(set_cookies) => set_cookies,
        Err(e) => return usage_error_response(e),
    };

    let mut response = Redirect::to(safe_redirect(&form.redirect)).into_response();
    for cookie in set_cookies {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => warn!("Dropping Set-Cookie header that is not a valid header value: {}", e),
        }
    }
    response
}

// ==================== Request Helpers ====================

fn render_admin(
    config: &Config,
    cookies: Option<&str>,
    path: &str,
    query: AdminQuery,
) -> Result<String, UsageError> {
    let provider = LanguageProvider::new(
        CookieStorage::from_header(cookies, config.language_cookie_max_age),
        &config.language_storage_key,
    );

    let mut shell = AdminShell::with_state(query.collapsed, query.menu);
    shell.set_search_query(query.q);
    shell.set_unread_notifications(config.admin_notification_count);
    let sidebar = Sidebar::new(admin_navigation());

    provider.render(|scope| render_admin_page(scope, &shell, &sidebar, path))
}

fn render_student(
    config: &Config,
    cookies: Option<&str>,
    path: &str,
    query: StudentQuery,
) -> Result<String, UsageError> {
    let provider = LanguageProvider::new(
        CookieStorage::from_header(cookies, config.language_cookie_max_age),
        &config.language_storage_key,
    );

    let shell = StudentShell::with_state(query.more, query.assistant);
    let sidebar = Sidebar::new(student_navigation());

    provider.render(|scope| {
        render_student_page(scope, &shell, &sidebar, path, config.tab_bar_max_inline)
    })
}

/// Flip the locale stored in the request's cookies and return the
/// `Set-Cookie` values to send back.
fn toggle_cookie_language(config: &Config, cookies: Option<&str>) -> Result<Vec<String>, UsageError> {
    let jar = Rc::new(RefCell::new(CookieStorage::from_header(
        cookies,
        config.language_cookie_max_age,
    )));
    let provider = LanguageProvider::with_shared_storage(jar.clone(), &config.language_storage_key);

    provider.render(|scope| LanguageToggle::new(scope).map(|toggle| toggle.activate()))?;

    let set_cookies = jar.borrow().set_cookie_headers().to_vec();
    Ok(set_cookies)
}

/// All `Cookie` headers of the request joined into one list.
fn cookie_header(headers: &HeaderMap) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join("; "))
    }
}

/// Only same-site absolute paths are followed; anything else goes to `/`.
/// Browsers read `\` as `/`, so `/\host` would leave the site.
fn safe_redirect(target: &str) -> &str {
    let same_site = target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\');
    if same_site && target.chars().all(|c| c.is_ascii_graphic()) {
        target
    } else {
        "/"
    }
}

fn page_response(result: Result<String, UsageError>) -> Response {
    match result {
        Ok(html) => Html(html).into_response(),
        Err(e) => usage_error_response(e),
    }
}

fn usage_error_response(e: UsageError) -> Response {
    error!("Shell rendered without a language provider: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
