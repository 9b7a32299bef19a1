//! Asset store collaborator
//!
//! The core never queries storage on its own; side effects go through this
//! trait, and the embedding service must make them atomic with the status
//! commit (row lock or compare-and-swap on the record's status).

use async_trait::async_trait;
use dashmap::DashMap;

use crate::entity::asset::Asset;

/// Storage mutations the workflow executor may trigger.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn get(&self, asset_id: i64) -> anyhow::Result<Option<Asset>>;

    async fn exists(&self, asset_id: i64) -> anyhow::Result<bool> {
        Ok(self.get(asset_id).await?.is_some())
    }

    /// Permanently remove the asset. Fails if it does not exist.
    async fn delete(&self, asset_id: i64) -> anyhow::Result<()>;

    /// Reassign the asset to a new owning location. Fails if it does not
    /// exist.
    async fn set_location(&self, asset_id: i64, location: &str) -> anyhow::Result<()>;
}

/// In-memory implementation backing tests and single-process deployments.
#[derive(Default)]
pub struct MemoryAssetStore {
    assets: DashMap<i64, Asset>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, asset: Asset) {
        self.assets.insert(asset.id, asset);
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn get(&self, asset_id: i64) -> anyhow::Result<Option<Asset>> {
        Ok(self.assets.get(&asset_id).map(|a| a.clone()))
    }

    async fn delete(&self, asset_id: i64) -> anyhow::Result<()> {
        self.assets
            .remove(&asset_id)
            .map(|_| ())
            .ok_or_else(|| anyhow::anyhow!("asset {} not found", asset_id))
    }

    async fn set_location(&self, asset_id: i64, location: &str) -> anyhow::Result<()> {
        let mut asset = self
            .assets
            .get_mut(&asset_id)
            .ok_or_else(|| anyhow::anyhow!("asset {} not found", asset_id))?;
        asset.location = Some(location.to_string());
        Ok(())
    }
}
