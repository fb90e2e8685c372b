//! Copies evaluations saved by the local JSON fallback into the configured
//! remote backend (Postgres or Supabase).
//!
//! Usage:
//!   DATABASE_URL=postgres://... cargo run --bin import-local -- data/avaliacoes.json
//!
//! Records keep their id and creation time when the target accepts them.
//! Ids that already exist remotely are skipped, so the import can be rerun.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rust_avaliacoes::config::{Config, PersistenceMode};
use rust_avaliacoes::persistence::{self, EvaluationRepository, LocalRepository};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_avaliacoes=info,import_local=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let source_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.local_store_path.clone());

    let mode = config.persistence_mode();
    if let PersistenceMode::Local { .. } = mode {
        bail!("No remote backend configured; set DATABASE_URL or SUPABASE_URL/SUPABASE_ANON_KEY");
    }

    let source = LocalRepository::new(&source_path);
    let target = persistence::connect(&mode)
        .await
        .context("Failed to connect to target backend")?;

    let records = source
        .list()
        .await
        .with_context(|| format!("Failed to read {}", source_path.display()))?;
    tracing::info!(
        "Importing {} evaluations from {} into {}",
        records.len(),
        source_path.display(),
        target.backend_name()
    );

    let mut imported = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    // oldest first so the remote creation order matches the local one
    for record in records.into_iter().rev() {
        let label = record.id.clone().unwrap_or_default();

        if let Some(id) = record.id.as_deref() {
            match target.get_by_id(id).await {
                Ok(Some(_)) => {
                    tracing::info!("Skipping {}: already present", id);
                    skipped += 1;
                    continue;
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("Lookup of {} failed, importing anyway: {}", id, e),
            }
        }

        if let Err(e) = record.validate() {
            tracing::warn!("Skipping {}: {}", label, e);
            skipped += 1;
            continue;
        }

        match target.create(record).await {
            Ok(created) => {
                tracing::info!(
                    "Imported {} -> {}",
                    label,
                    created.id.as_deref().unwrap_or_default()
                );
                imported += 1;
            }
            Err(e) => {
                tracing::error!("Failed to import {}: {}", label, e);
                failed += 1;
            }
        }
    }

    tracing::info!(
        "Import finished: imported={}, skipped={}, failed={}",
        imported,
        skipped,
        failed
    );
    if failed > 0 {
        bail!("{} evaluations failed to import", failed);
    }
    Ok(())
}
