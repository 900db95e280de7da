use std::collections::HashMap;

use medlytics_lambda::config::{ApiConfig, ConfigError, StoreBackend};

fn config(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ApiConfig::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn defaults() {
    let config = config(&[]).unwrap();
    assert_eq!(config.bucket, "medlytics");
    assert_eq!(config.store, StoreBackend::S3);
    assert_eq!(config.jwt_secret, None);
}

#[test]
fn reads_every_variable() {
    let config = config(&[
        ("MEDLYTICS_BUCKET", "medlytics-prod"),
        ("MEDLYTICS_STORE", "Memory"),
        ("MEDLYTICS_JWT_SECRET", "s3cret"),
    ])
    .unwrap();
    assert_eq!(config.bucket, "medlytics-prod");
    assert_eq!(config.store, StoreBackend::Memory);
    assert_eq!(config.jwt_secret.as_deref(), Some("s3cret"));
}

#[test]
fn blank_values_count_as_unset() {
    let config = config(&[("MEDLYTICS_BUCKET", ""), ("MEDLYTICS_JWT_SECRET", "  ")]).unwrap();
    assert_eq!(config.bucket, "medlytics");
    assert_eq!(config.jwt_secret, None);
}

#[test]
fn rejects_unknown_store() {
    let err = config(&[("MEDLYTICS_STORE", "dynamodb")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidStore(ref s) if s == "dynamodb"));
}
