use anyhow::Result;
use lms_shell::config::Config;
use lms_shell::i18n::{TranslationTable, TranslationValidator};
use lms_shell::web;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lms_shell=info".parse()?),
        )
        .init();

    info!("Starting LMS shell server");

    let config = Config::from_env()?;

    // Authoring gaps only degrade text, so they are reported, not fatal.
    let table = TranslationTable::builtin();
    let report = TranslationValidator::validate(table);
    for message in &report.errors {
        error!("Translation table: {}", message);
    }
    for message in &report.warnings {
        warn!("Translation table: {}", message);
    }
    info!(
        "Loaded {} phrases ({} errors, {} warnings)",
        table.len(),
        report.errors.len(),
        report.warnings.len()
    );

    web::serve(config).await
}
