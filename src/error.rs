use thiserror::Error;
use tonic::Status;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Preencha os campos obrigatórios: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Backend failures that callers only see as a generic message.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            AppError::Database(_)
                | AppError::Http(_)
                | AppError::Json(_)
                | AppError::Io(_)
                | AppError::Persistence(_)
        )
    }
}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        if err.is_persistence_failure() {
            tracing::error!("Persistence failure: {}", err);
            return Status::internal("Erro ao salvar avaliação");
        }
        let message = err.to_string();
        match err {
            AppError::Validation(_) => Status::invalid_argument(message),
            AppError::NotFound(msg) => Status::not_found(msg),
            AppError::InvalidInput(msg) => Status::invalid_argument(msg),
            AppError::Upload(msg) => Status::invalid_argument(format!("Upload error: {}", msg)),
            AppError::Storage(msg) => Status::internal(format!("Storage error: {}", msg)),
            _ => Status::internal(message),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_validation_lists_every_field() {
        let err = AppError::Validation(vec!["cliente_nome".into(), "veiculo_modelo".into()]);
        assert_eq!(
            err.to_string(),
            "Preencha os campos obrigatórios: cliente_nome, veiculo_modelo"
        );
        let status: Status = err.into();
        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[test]
    fn test_persistence_errors_become_generic_internal() {
        let status: Status = AppError::Persistence("connection refused".into()).into();
        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), "Erro ao salvar avaliação");
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        let status: Status = AppError::NotFound("avaliação 42".into()).into();
        assert_eq!(status.code(), Code::NotFound);
    }
}
