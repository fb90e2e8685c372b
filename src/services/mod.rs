pub mod evaluation_service;
pub mod health_service;
pub mod photo_service;

pub use evaluation_service::EvaluationServiceImpl;
pub use health_service::HealthServiceImpl;
pub use photo_service::PhotoServiceImpl;
