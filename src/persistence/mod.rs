//! Persistence gateway for evaluation records

pub mod local;
pub mod postgres;
pub mod supabase;

pub use local::LocalRepository;
pub use postgres::PostgresRepository;
pub use supabase::SupabaseRepository;

use std::sync::Arc;

use crate::config::PersistenceMode;
use crate::db::create_pool;
use crate::error::AppResult;
use crate::models::{EvaluationPatch, EvaluationRecord};

/// Table (or local blob key) holding the evaluations.
pub const TABLE_NAME: &str = "avaliacoes";

/// Storage of evaluation records. One implementation is chosen at startup.
#[tonic::async_trait]
pub trait EvaluationRepository: Send + Sync {
    /// Inserts the record and returns it with id and creation time assigned.
    async fn create(&self, record: EvaluationRecord) -> AppResult<EvaluationRecord>;

    /// All records, newest first.
    async fn list(&self) -> AppResult<Vec<EvaluationRecord>>;

    async fn get_by_id(&self, id: &str) -> AppResult<Option<EvaluationRecord>>;

    /// Applies a partial update.
    async fn update(&self, id: &str, patch: &EvaluationPatch) -> AppResult<()>;

    /// Overwrites every field of the record except id and creation time.
    async fn replace(&self, id: &str, record: &EvaluationRecord) -> AppResult<()>;

    async fn delete(&self, id: &str) -> AppResult<()>;

    fn backend_name(&self) -> &'static str;
}

/// Builds the repository for the configured mode.
pub async fn connect(mode: &PersistenceMode) -> AppResult<Arc<dyn EvaluationRepository>> {
    let repository: Arc<dyn EvaluationRepository> = match mode {
        PersistenceMode::Postgres { database_url } => {
            let pool = create_pool(database_url).await?;
            Arc::new(PostgresRepository::new(pool))
        }
        PersistenceMode::Supabase { url, anon_key } => {
            Arc::new(SupabaseRepository::new(url.clone(), anon_key.clone())?)
        }
        PersistenceMode::Local { path } => Arc::new(LocalRepository::new(path.clone())),
    };
    tracing::info!("Persistence backend: {}", repository.backend_name());
    Ok(repository)
}

/// Newest first; records without a timestamp go last. Ties keep the most
/// recently appended record in front.
pub(crate) fn sort_newest_first(records: &mut [EvaluationRecord]) {
    records.reverse();
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
