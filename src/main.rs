use std::net::SocketAddr;

use rust_avaliacoes::config::{Config, PersistenceMode};
use rust_avaliacoes::persistence;
use rust_avaliacoes::proto::evaluations::evaluation_service_server::EvaluationServiceServer;
use rust_avaliacoes::proto::evaluations::photo_service_server::PhotoServiceServer;
use rust_avaliacoes::proto::health::health_server::HealthServer;
use rust_avaliacoes::services::{EvaluationServiceImpl, HealthServiceImpl, PhotoServiceImpl};
use rust_avaliacoes::storage::select_image_store;

use tonic::transport::Server;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Include file descriptor for gRPC reflection
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("avaliacoes_descriptor");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_avaliacoes=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting rust-avaliacoes gRPC server...");

    let mode = config.persistence_mode();
    tracing::info!("Persistence mode: {}", mode.name());
    if let PersistenceMode::Local { path } = &mode {
        tracing::warn!(
            "No remote backend configured, storing evaluations in {}",
            path.display()
        );
    }
    let repository = persistence::connect(&mode).await?;
    let images = select_image_store(&config)?;

    // Create services
    let health_service = HealthServiceImpl::new(repository.backend_name());
    let evaluation_service = EvaluationServiceImpl::new(repository);
    let photo_service = PhotoServiceImpl::new(images);

    // CORS layer for gRPC-Web
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any)
        .expose_headers(Any);

    let reflection_service = ReflectionBuilder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!("Listening on {}", addr);

    Server::builder()
        .accept_http1(true) // Required for gRPC-Web
        .layer(cors)
        .layer(tonic_web::GrpcWebLayer::new())
        .add_service(reflection_service)
        .add_service(EvaluationServiceServer::new(evaluation_service))
        .add_service(PhotoServiceServer::new(photo_service))
        .add_service(HealthServer::new(health_service))
        .serve(addr)
        .await?;

    Ok(())
}
