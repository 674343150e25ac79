// Client module - Collaborators that feed the shipping calculator
pub mod api;
pub mod fixture;

pub use api::FioClient;
pub use fixture::{FixturePlanet, FixtureSource};

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Material, ProductionLine, Storage};

/// Data the calculator needs from the outside world. Fetch failures are
/// terminal for the whole batch; implementations handle retries themselves.
#[async_trait]
pub trait FioSource: Send + Sync {
    async fn get_all_materials(&self) -> Result<Vec<Material>>;

    /// Planet natural ids, in the order tasks should be concatenated.
    async fn get_player_planets(&self) -> Result<Vec<String>>;

    /// Empty when the planet has no production.
    async fn get_production_lines(&self, planet: &str) -> Result<Vec<ProductionLine>>;

    async fn get_storage(&self, planet: &str) -> Result<Storage>;
}
