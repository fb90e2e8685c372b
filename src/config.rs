use std::env;
use std::path::PathBuf;

/// Values shipped in `.env.example` that mean "not configured yet".
const PLACEHOLDER_VALUES: &[&str] = &[
    "your-supabase-url",
    "https://placeholder.supabase.co",
    "your-supabase-anon-key",
    "placeholder-key",
];

pub const DEFAULT_LOCAL_STORE_PATH: &str = "data/avaliacoes.json";
pub const DEFAULT_LOCAL_IMAGE_DIR: &str = "data/images";
pub const DEFAULT_STORAGE_BUCKET: &str = "images";

/// Which persistence backend the server talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceMode {
    Postgres { database_url: String },
    Supabase { url: String, anon_key: String },
    Local { path: PathBuf },
}

impl PersistenceMode {
    pub fn name(&self) -> &'static str {
        match self {
            PersistenceMode::Postgres { .. } => "postgres",
            PersistenceMode::Supabase { .. } => "supabase",
            PersistenceMode::Local { .. } => "local",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct R2Settings {
    pub bucket: String,
    pub account_id: String,
    pub access_key: String,
    pub secret_key: String,
    pub public_url: String,
}

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: Option<String>,
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    pub supabase_storage_bucket: String,
    pub local_store_path: PathBuf,
    pub local_image_dir: PathBuf,
    pub cloudinary_cloud_name: Option<String>,
    pub cloudinary_upload_preset: Option<String>,
    pub r2: Option<R2Settings>,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenvy::dotenv().ok();

        let r2 = match (
            configured("R2_BUCKET"),
            configured("R2_ACCOUNT_ID"),
            configured("R2_ACCESS_KEY"),
            configured("R2_SECRET_KEY"),
        ) {
            (Some(bucket), Some(account_id), Some(access_key), Some(secret_key)) => {
                let public_url = configured("R2_PUBLIC_URL")
                    .unwrap_or_else(|| format!("https://{}.r2.dev", bucket));
                Some(R2Settings {
                    bucket,
                    account_id,
                    access_key,
                    secret_key,
                    public_url,
                })
            }
            _ => None,
        };

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "50051".to_string())
                .parse()
                .unwrap_or(50051),
            database_url: configured("DATABASE_URL"),
            supabase_url: configured("SUPABASE_URL"),
            supabase_anon_key: configured("SUPABASE_ANON_KEY"),
            supabase_storage_bucket: configured("SUPABASE_STORAGE_BUCKET")
                .unwrap_or_else(|| DEFAULT_STORAGE_BUCKET.to_string()),
            local_store_path: configured("LOCAL_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOCAL_STORE_PATH)),
            local_image_dir: configured("LOCAL_IMAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOCAL_IMAGE_DIR)),
            cloudinary_cloud_name: configured("CLOUDINARY_CLOUD_NAME"),
            cloudinary_upload_preset: configured("CLOUDINARY_UPLOAD_PRESET"),
            r2,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Picks the persistence backend: a direct database URL wins, then
    /// Supabase credentials, then the local JSON file.
    pub fn persistence_mode(&self) -> PersistenceMode {
        if let Some(database_url) = &self.database_url {
            return PersistenceMode::Postgres {
                database_url: database_url.clone(),
            };
        }
        match self.supabase_credentials() {
            Some((url, anon_key)) => PersistenceMode::Supabase { url, anon_key },
            None => PersistenceMode::Local {
                path: self.local_store_path.clone(),
            },
        }
    }

    pub fn cloudinary_settings(&self) -> Option<(String, String)> {
        let cloud_name = self
            .cloudinary_cloud_name
            .as_deref()
            .filter(|v| !is_placeholder(v))?;
        let preset = self
            .cloudinary_upload_preset
            .as_deref()
            .filter(|v| !is_placeholder(v))?;
        Some((cloud_name.to_string(), preset.to_string()))
    }

    pub fn supabase_credentials(&self) -> Option<(String, String)> {
        let url = self.supabase_url.as_deref().filter(|v| !is_placeholder(v))?;
        let key = self
            .supabase_anon_key
            .as_deref()
            .filter(|v| !is_placeholder(v))?;
        Some((url.trim_end_matches('/').to_string(), key.to_string()))
    }
}

pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || PLACEHOLDER_VALUES.contains(&value)
}

fn configured(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
