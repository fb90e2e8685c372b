use reqwest::Method;

use crate::error::{AppError, AppResult};
use crate::http_client::{ensure_success, SupabaseHttp};
use crate::models::{EvaluationPatch, EvaluationRecord};

use super::{EvaluationRepository, TABLE_NAME};

/// Hosted backend: the `avaliacoes` table through Supabase's PostgREST API.
pub struct SupabaseRepository {
    http: SupabaseHttp,
}

impl SupabaseRepository {
    pub fn new(url: String, anon_key: String) -> AppResult<Self> {
        Ok(Self {
            http: SupabaseHttp::new(url, anon_key)?,
        })
    }

    fn table_url(&self) -> String {
        self.http.rest_url(TABLE_NAME)
    }

    fn id_filter(id: &str) -> (&'static str, String) {
        ("id", format!("eq.{}", id))
    }

    /// PATCH with `return=representation`, failing when no row matched `id`.
    async fn patch_row<T: serde::Serialize + ?Sized>(
        &self,
        id: &str,
        body: &T,
        context: &str,
    ) -> AppResult<()> {
        let response = self
            .http
            .request(Method::PATCH, &self.table_url())
            .header("Prefer", "return=representation")
            .query(&[Self::id_filter(id)])
            .json(body)
            .send()
            .await?;
        let response = ensure_success(response, context).await?;
        let rows: Vec<serde_json::Value> = response.json().await?;
        require_row(&rows, id)
    }
}

/// PostgREST answers an unmatched filter with an empty array, not an error.
fn require_row(rows: &[serde_json::Value], id: &str) -> AppResult<()> {
    if rows.is_empty() {
        Err(AppError::NotFound(format!("avaliação {}", id)))
    } else {
        Ok(())
    }
}

#[tonic::async_trait]
impl EvaluationRepository for SupabaseRepository {
    async fn create(&self, record: EvaluationRecord) -> AppResult<EvaluationRecord> {
        let response = self
            .http
            .request(Method::POST, &self.table_url())
            .header("Prefer", "return=representation")
            .json(&[&record])
            .send()
            .await?;
        let response = ensure_success(response, "Supabase insert").await?;
        let mut inserted: Vec<EvaluationRecord> = response.json().await?;
        let created = inserted
            .pop()
            .ok_or_else(|| AppError::Persistence("Supabase insert returned no rows".into()))?;

        tracing::info!(
            "Supabase create: id={}",
            created.id.as_deref().unwrap_or_default()
        );
        Ok(created)
    }

    async fn list(&self) -> AppResult<Vec<EvaluationRecord>> {
        let response = self
            .http
            .request(Method::GET, &self.table_url())
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        let response = ensure_success(response, "Supabase list").await?;
        Ok(response.json().await?)
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<EvaluationRecord>> {
        let response = self
            .http
            .request(Method::GET, &self.table_url())
            .query(&[("select", "*".to_string()), Self::id_filter(id)])
            .send()
            .await?;
        let response = ensure_success(response, "Supabase get").await?;
        let mut rows: Vec<EvaluationRecord> = response.json().await?;
        Ok(rows.pop())
    }

    async fn update(&self, id: &str, patch: &EvaluationPatch) -> AppResult<()> {
        if patch.is_empty() {
            return match self.get_by_id(id).await? {
                Some(_) => Ok(()),
                None => Err(AppError::NotFound(format!("avaliação {}", id))),
            };
        }
        self.patch_row(id, patch, "Supabase update").await?;
        tracing::info!("Supabase update: id={}", id);
        Ok(())
    }

    async fn replace(&self, id: &str, record: &EvaluationRecord) -> AppResult<()> {
        // identity columns stay as the server assigned them
        let body = EvaluationRecord {
            id: None,
            created_at: None,
            ..record.clone()
        };
        self.patch_row(id, &body, "Supabase replace").await?;
        tracing::info!("Supabase replace: id={}", id);
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let response = self
            .http
            .request(Method::DELETE, &self.table_url())
            .query(&[Self::id_filter(id)])
            .send()
            .await?;
        ensure_success(response, "Supabase delete").await?;
        tracing::info!("Supabase delete: id={}", id);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "supabase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_and_filter() {
        let repo =
            SupabaseRepository::new("https://abc.supabase.co".into(), "anon".into()).unwrap();
        assert_eq!(repo.table_url(), "https://abc.supabase.co/rest/v1/avaliacoes");
        assert_eq!(
            SupabaseRepository::id_filter("42"),
            ("id", "eq.42".to_string())
        );
        assert_eq!(repo.backend_name(), "supabase");
    }

    #[test]
    fn test_unmatched_patch_is_not_found() {
        let err = require_row(&[], "404").unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "avaliação 404"));

        let rows = vec![serde_json::json!({ "id": "42", "vendido": true })];
        assert!(require_row(&rows, "42").is_ok());
    }
}
