use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use medlytics_lambda::config::{ApiConfig, StoreBackend};
use medlytics_lambda::state::AppState;
use medlytics_storage::store::{AnalysisStore, MemoryStore, S3Store};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;

    let store: Arc<dyn AnalysisStore> = match config.store {
        StoreBackend::S3 => {
            let s3 = medlytics_storage::client::build_client().await;
            Arc::new(S3Store::new(s3, config.bucket.clone()))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store, analyses will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    if config.jwt_secret.is_none() {
        tracing::warn!("MEDLYTICS_JWT_SECRET not set, only anonymous requests will be accepted");
    }

    tracing::info!(bucket = %config.bucket, store = ?config.store, "starting medlytics api");

    let state = AppState::new(store, config.jwt_secret);
    lambda_http::run(medlytics_lambda::app(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
