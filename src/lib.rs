// FIO Shipping Planner Library
// Turns planetary production and storage into prioritised shipping tasks

pub mod models;
pub mod client;
pub mod operations;
pub mod registry;
pub mod error;
pub mod config;
pub mod logging;
pub mod report;

// Re-export commonly used types
pub use models::{
    Material, ProductionLine, ProductionOrder, RecipeIo, ShipClass, ShippingTask, ShippingTaskType, Storage,
    StorageItem,
};

pub use client::{FioClient, FioSource, FixtureSource};
pub use config::ShippingConfig;
pub use error::{Result, ShippingError};
pub use operations::{PlanetPlan, ShippingCalculator, plan_planet, sort_tasks};
pub use registry::MaterialRegistry;

// Constants
pub const MS_PER_DAY: f64 = 86_400_000.0;
