//! Analysis persistence.
//!
//! Records are stored as JSON under the keys built by
//! [`medlytics_core::storage_keys`].
//! An owner's history is everything under their prefix for one kind.

use std::collections::BTreeMap;

use async_trait::async_trait;
use aws_sdk_s3::Client;
use tokio::sync::RwLock;
use uuid::Uuid;

use medlytics_core::models::analysis::{AnalysisKind, AnalysisRecord};
use medlytics_core::storage_keys;

use crate::error::StorageError;
use crate::objects;

#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Persist a record under its kind, owner and id.
    async fn save(&self, record: &AnalysisRecord) -> Result<(), StorageError>;

    /// Fetch one of an owner's records. `NotFound` when the owner has no
    /// record with that id.
    async fn get(&self, kind: AnalysisKind, owner_id: Option<&str>, id: Uuid) -> Result<AnalysisRecord, StorageError>;

    /// All of an owner's records of one kind, newest first.
    async fn history(&self, kind: AnalysisKind, owner_id: Option<&str>) -> Result<Vec<AnalysisRecord>, StorageError>;
}

/// Newest first; equal timestamps fall back to id order so listings are stable.
pub fn sort_newest_first(records: &mut [AnalysisRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
}

fn record_key(record: &AnalysisRecord) -> String {
    storage_keys::analysis(record.kind, record.owner_id.as_deref(), record.id)
}

/// S3-backed store.
#[derive(Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl AnalysisStore for S3Store {
    async fn save(&self, record: &AnalysisRecord) -> Result<(), StorageError> {
        let key = record_key(record);
        let body = serde_json::to_vec(record)?;
        objects::put_object(&self.client, &self.bucket, &key, body, Some("application/json")).await?;
        tracing::info!(key = %key, kind = %record.kind, "analysis saved");
        Ok(())
    }

    async fn get(&self, kind: AnalysisKind, owner_id: Option<&str>, id: Uuid) -> Result<AnalysisRecord, StorageError> {
        let key = storage_keys::analysis(kind, owner_id, id);
        let body = objects::get_object(&self.client, &self.bucket, &key).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn history(&self, kind: AnalysisKind, owner_id: Option<&str>) -> Result<Vec<AnalysisRecord>, StorageError> {
        let prefix = storage_keys::history_prefix(kind, owner_id);
        let keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;

        let mut records = Vec::with_capacity(keys.len());
        for key in &keys {
            let body = objects::get_object(&self.client, &self.bucket, key).await?;
            records.push(serde_json::from_slice(&body)?);
        }
        sort_newest_first(&mut records);

        tracing::info!(prefix = %prefix, count = records.len(), "analysis history loaded");
        Ok(records)
    }
}

/// In-memory store holding the same JSON bytes under the same keys as
/// [`S3Store`].
#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl AnalysisStore for MemoryStore {
    async fn save(&self, record: &AnalysisRecord) -> Result<(), StorageError> {
        let key = record_key(record);
        let body = serde_json::to_vec(record)?;
        self.objects.write().await.insert(key.clone(), body);
        tracing::info!(key = %key, kind = %record.kind, "analysis saved");
        Ok(())
    }

    async fn get(&self, kind: AnalysisKind, owner_id: Option<&str>, id: Uuid) -> Result<AnalysisRecord, StorageError> {
        let key = storage_keys::analysis(kind, owner_id, id);
        let objects = self.objects.read().await;
        let body = objects.get(&key).ok_or_else(|| StorageError::NotFound { key: key.clone() })?;
        Ok(serde_json::from_slice(body)?)
    }

    async fn history(&self, kind: AnalysisKind, owner_id: Option<&str>) -> Result<Vec<AnalysisRecord>, StorageError> {
        let prefix = storage_keys::history_prefix(kind, owner_id);
        let objects = self.objects.read().await;

        let mut records = objects
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .map(|(_, body)| serde_json::from_slice(body))
            .collect::<Result<Vec<AnalysisRecord>, _>>()?;
        sort_newest_first(&mut records);

        tracing::info!(prefix = %prefix, count = records.len(), "analysis history loaded");
        Ok(records)
    }
}
