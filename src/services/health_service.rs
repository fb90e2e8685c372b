use tonic::{Request, Response, Status};

use crate::proto::health::{
    health_server::Health, HealthCheckRequest, HealthCheckResponse,
    health_check_response::ServingStatus,
};

#[derive(Debug)]
pub struct HealthServiceImpl {
    backend: &'static str,
}

impl HealthServiceImpl {
    pub fn new(backend: &'static str) -> Self {
        Self { backend }
    }

    fn serving(&self) -> HealthCheckResponse {
        HealthCheckResponse {
            status: ServingStatus::Serving.into(),
            backend: self.backend.to_string(),
        }
    }
}

#[tonic::async_trait]
impl Health for HealthServiceImpl {
    async fn check(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        Ok(Response::new(self.serving()))
    }

    type WatchStream = tokio_stream::wrappers::ReceiverStream<Result<HealthCheckResponse, Status>>;

    async fn watch(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<Self::WatchStream>, Status> {
        let (tx, rx) = tokio::sync::mpsc::channel(1);
        let response = self.serving();

        tokio::spawn(async move {
            let _ = tx.send(Ok(response)).await;
        });

        Ok(Response::new(tokio_stream::wrappers::ReceiverStream::new(rx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_stream::StreamExt;

    #[tokio::test]
    async fn test_check_reports_backend() {
        let svc = HealthServiceImpl::new("local");
        let res = svc
            .check(Request::new(HealthCheckRequest::default()))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(res.status, i32::from(ServingStatus::Serving));
        assert_eq!(res.backend, "local");
    }

    #[tokio::test]
    async fn test_watch_emits_status() {
        let svc = HealthServiceImpl::new("postgres");
        let mut stream = svc
            .watch(Request::new(HealthCheckRequest::default()))
            .await
            .unwrap()
            .into_inner();
        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first.backend, "postgres");
    }
}
