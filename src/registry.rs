// Read-only material lookup, built once before any planet is evaluated
use std::collections::HashMap;

use crate::client::FioSource;
use crate::error::{Result, ShippingError};
use crate::models::Material;

#[derive(Debug, Clone, Default)]
pub struct MaterialRegistry {
    materials: HashMap<String, Material>,
}

impl MaterialRegistry {
    /// Index materials by ticker. A repeated ticker keeps the last entry.
    pub fn from_materials(materials: Vec<Material>) -> Self {
        let materials = materials
            .into_iter()
            .map(|material| (material.ticker.clone(), material))
            .collect();
        Self { materials }
    }

    /// Fetch the full material list once from the collaborator.
    pub async fn load(source: &dyn FioSource) -> Result<Self> {
        let materials = source.get_all_materials().await?;
        let registry = Self::from_materials(materials);
        if registry.is_empty() {
            tracing::warn!("⚠️ Material registry is empty, every ticker lookup will fail");
        } else {
            tracing::debug!("📚 Loaded {} materials into registry", registry.len());
        }
        Ok(registry)
    }

    pub fn get(&self, ticker: &str) -> Result<&Material> {
        self.materials
            .get(ticker)
            .ok_or_else(|| ShippingError::UnknownMaterial(ticker.to_string()))
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
