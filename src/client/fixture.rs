// Offline data source backed by an in-memory snapshot or a JSON file
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::client::FioSource;
use crate::error::{Result, ShippingError};
use crate::models::{Material, ProductionLine, Storage, StorageItem};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixturePlanet {
    pub id: String,
    #[serde(default)]
    pub production_lines: Vec<ProductionLine>,
    #[serde(default)]
    pub storage: Vec<StorageItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureSource {
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub planets: Vec<FixturePlanet>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let fixture_error = |message: String| ShippingError::Fixture {
            path: path.display().to_string(),
            message,
        };

        let content = fs::read_to_string(path).map_err(|e| fixture_error(e.to_string()))?;
        let source: FixtureSource = serde_json::from_str(&content).map_err(|e| fixture_error(e.to_string()))?;
        tracing::info!(
            "📂 Loaded fixture {} ({} planets, {} materials)",
            path.display(),
            source.planets.len(),
            source.materials.len()
        );
        Ok(source)
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }

    /// Register a planet. Planets are reported in insertion order.
    pub fn with_planet(mut self, id: &str, production_lines: Vec<ProductionLine>, storage: Vec<StorageItem>) -> Self {
        self.planets.push(FixturePlanet {
            id: id.to_string(),
            production_lines,
            storage,
        });
        self
    }

    fn planet(&self, id: &str) -> Option<&FixturePlanet> {
        self.planets.iter().find(|planet| planet.id == id)
    }
}

#[async_trait]
impl FioSource for FixtureSource {
    async fn get_all_materials(&self) -> Result<Vec<Material>> {
        Ok(self.materials.clone())
    }

    async fn get_player_planets(&self) -> Result<Vec<String>> {
        Ok(self.planets.iter().map(|planet| planet.id.clone()).collect())
    }

    async fn get_production_lines(&self, planet: &str) -> Result<Vec<ProductionLine>> {
        Ok(self
            .planet(planet)
            .map(|p| p.production_lines.clone())
            .unwrap_or_default())
    }

    async fn get_storage(&self, planet: &str) -> Result<Storage> {
        Ok(self
            .planet(planet)
            .map(|p| Storage::new(p.storage.clone()))
            .unwrap_or_default())
    }
}
