use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::models::{EvaluationPatch, EvaluationRecord};

use super::{sort_newest_first, EvaluationRepository};

/// Fallback backend: every record lives in one JSON array file.
pub struct LocalRepository {
    path: PathBuf,
    // serialises read-modify-write cycles on the file
    lock: Mutex<()>,
}

impl LocalRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> AppResult<Vec<EvaluationRecord>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_all(&self, records: &[EvaluationRecord]) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Millisecond timestamp id, bumped until it is unused.
    fn next_id(records: &[EvaluationRecord]) -> String {
        let mut candidate = Utc::now().timestamp_millis();
        while records
            .iter()
            .any(|r| r.id.as_deref() == Some(candidate.to_string().as_str()))
        {
            candidate += 1;
        }
        candidate.to_string()
    }
}

#[tonic::async_trait]
impl EvaluationRepository for LocalRepository {
    async fn create(&self, mut record: EvaluationRecord) -> AppResult<EvaluationRecord> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all().await?;

        record.id = Some(Self::next_id(&records));
        record.created_at = Some(Utc::now().to_rfc3339());
        records.push(record.clone());
        self.write_all(&records).await?;

        tracing::info!(
            "Local create: id={}, path={}",
            record.id.as_deref().unwrap_or_default(),
            self.path.display()
        );
        Ok(record)
    }

    async fn list(&self) -> AppResult<Vec<EvaluationRecord>> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all().await?;
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<EvaluationRecord>> {
        let _guard = self.lock.lock().await;
        let records = self.read_all().await?;
        Ok(records.into_iter().find(|r| r.id.as_deref() == Some(id)))
    }

    async fn update(&self, id: &str, patch: &EvaluationPatch) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all().await?;
        let record = records
            .iter_mut()
            .find(|r| r.id.as_deref() == Some(id))
            .ok_or_else(|| AppError::NotFound(format!("avaliação {}", id)))?;
        patch.apply_to(record);
        self.write_all(&records).await?;
        tracing::info!("Local update: id={}", id);
        Ok(())
    }

    async fn replace(&self, id: &str, record: &EvaluationRecord) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all().await?;
        let slot = records
            .iter_mut()
            .find(|r| r.id.as_deref() == Some(id))
            .ok_or_else(|| AppError::NotFound(format!("avaliação {}", id)))?;
        let created_at = slot.created_at.take();
        *slot = EvaluationRecord {
            id: Some(id.to_string()),
            created_at,
            ..record.clone()
        };
        self.write_all(&records).await?;
        tracing::info!("Local replace: id={}", id);
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all().await?;
        let before = records.len();
        records.retain(|r| r.id.as_deref() != Some(id));
        if records.len() != before {
            self.write_all(&records).await?;
            tracing::info!("Local delete: id={}", id);
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cliente: &str) -> EvaluationRecord {
        EvaluationRecord::new("2024-03-10", cliente, "Onix", "Carlos")
    }

    #[tokio::test]
    async fn test_missing_file_lists_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = LocalRepository::new(dir.path().join("nested/avaliacoes.json"));
        assert!(repo.list().await.unwrap().is_empty());
        assert!(repo.get_by_id("1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/avaliacoes.json");
        let repo = LocalRepository::new(&path);

        let first = repo.create(record("Maria")).await.unwrap();
        let second = repo.create(record("João")).await.unwrap();
        assert!(first.id.is_some());
        assert!(first.created_at.is_some());
        assert_ne!(first.id, second.id);

        let reopened = LocalRepository::new(&path);
        let listed = reopened.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].cliente_nome, "João");
    }

    #[tokio::test]
    async fn test_update_replace_delete() {
        let dir = tempfile::tempdir().unwrap();
        let repo = LocalRepository::new(dir.path().join("avaliacoes.json"));
        let created = repo.create(record("Maria")).await.unwrap();
        let id = created.id.clone().unwrap();

        repo.update(&id, &EvaluationPatch::sale(true, None, Some("R$ 1".into())))
            .await
            .unwrap();
        assert!(repo.get_by_id(&id).await.unwrap().unwrap().vendido);

        let mut edited = record("Maria Clara");
        edited.id = Some("ignored".to_string());
        repo.replace(&id, &edited).await.unwrap();
        let stored = repo.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.cliente_nome, "Maria Clara");
        assert_eq!(stored.id.as_deref(), Some(id.as_str()));
        assert_eq!(stored.created_at, created.created_at);
        assert!(!stored.vendido);

        repo.delete(&id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let repo = LocalRepository::new(dir.path().join("avaliacoes.json"));
        let err = repo
            .update("missing", &EvaluationPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_reads_records_written_by_web_client() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avaliacoes.json");
        std::fs::write(
            &path,
            r#"[{"id":"1700000000000","created_at":"2023-11-14T22:13:20.000Z",
                "data_avaliacao":"2023-11-14","cliente_nome":"Rita","veiculo_modelo":"Kwid",
                "avaliador_nome":"Bruno","veiculo_manual":true,"fotos":[],"danos_mapeados":["capo"]}]"#,
        )
        .unwrap();
        let repo = LocalRepository::new(&path);
        let records = repo.list().await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].veiculo_manual);
        assert_eq!(records[0].danos_mapeados, vec!["capo"]);
    }
}
