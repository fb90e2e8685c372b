pub mod config;
pub mod damage_map;
pub mod db;
pub mod error;
pub mod filter;
pub mod http_client;
pub mod models;
pub mod persistence;
pub mod proto;
pub mod report;
pub mod services;
pub mod sheet;
pub mod storage;
pub mod store;

pub use config::Config;
pub use error::{AppError, AppResult};
