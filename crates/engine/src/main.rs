//! Raid ledger engine - main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod infrastructure;
mod use_cases;

use app::App;
use infrastructure::{catalog, scheduler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "raidledger_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting raid ledger engine");

    let app = Arc::new(App::in_memory());
    catalog::seed_default_catalog(&*app.repositories.raid).await?;

    // Regenerate checklists for whoever is already on the roster, then keep
    // them fresh across Wednesday boundaries.
    for character in app.repositories.character.list().await? {
        if let Err(e) = app
            .use_cases
            .generate_checklist
            .execute(character.id)
            .await
        {
            tracing::warn!(character = %character.name, error = %e, "startup checklist generation failed");
        }
    }

    let reset_handle = scheduler::spawn_weekly_reset(
        Arc::clone(&app.use_cases.weekly_reset),
        Arc::clone(&app.clock),
    );

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    reset_handle.abort();
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
