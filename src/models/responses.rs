use serde::Deserialize;

use crate::models::{Material, ProductionLine, ProductionOrder, RecipeIo, Storage, StorageItem};

// FIO REST payloads. Field names follow the upstream PascalCase schema.

#[derive(Debug, Deserialize)]
pub struct MaterialData {
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Weight")]
    pub weight: f64,
    #[serde(rename = "Volume")]
    pub volume: f64,
}

#[derive(Debug, Deserialize)]
pub struct RecipeIoData {
    #[serde(rename = "MaterialTicker")]
    pub material_ticker: String,
    #[serde(rename = "MaterialAmount")]
    pub material_amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct OrderData {
    #[serde(rename = "Inputs", default)]
    pub inputs: Vec<RecipeIoData>,
    #[serde(rename = "Outputs", default)]
    pub outputs: Vec<RecipeIoData>,
    #[serde(rename = "DurationMs")]
    pub duration_ms: i64,
    #[serde(rename = "CompletedPercentage")]
    pub completed_percentage: Option<f64>,
    #[serde(rename = "IsHalted")]
    pub is_halted: bool,
    #[serde(rename = "Recurring")]
    pub recurring: bool,
    #[serde(rename = "StartedEpochMs")]
    pub started_epoch_ms: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ProductionLineData {
    #[serde(rename = "PlanetNaturalId")]
    pub planet_natural_id: String,
    #[serde(rename = "PlanetName")]
    pub planet_name: String,
    #[serde(rename = "Type")]
    pub line_type: String,
    #[serde(rename = "Orders", default)]
    pub orders: Vec<OrderData>,
}

#[derive(Debug, Deserialize)]
pub struct StorageItemData {
    #[serde(rename = "MaterialTicker")]
    pub material_ticker: String,
    #[serde(rename = "MaterialAmount")]
    pub material_amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct StorageData {
    #[serde(rename = "StorageItems", default)]
    pub storage_items: Vec<StorageItemData>,
}

impl From<MaterialData> for Material {
    fn from(data: MaterialData) -> Self {
        Material {
            ticker: data.ticker,
            name: data.name,
            weight: data.weight,
            volume: data.volume,
        }
    }
}

impl From<RecipeIoData> for RecipeIo {
    fn from(data: RecipeIoData) -> Self {
        RecipeIo {
            ticker: data.material_ticker,
            amount: data.material_amount,
        }
    }
}

impl From<OrderData> for ProductionOrder {
    fn from(data: OrderData) -> Self {
        ProductionOrder {
            inputs: data.inputs.into_iter().map(RecipeIo::from).collect(),
            outputs: data.outputs.into_iter().map(RecipeIo::from).collect(),
            duration_ms: data.duration_ms,
            completed_percentage: data.completed_percentage.unwrap_or(0.0),
            is_halted: data.is_halted,
            recurring: data.recurring,
            started_epoch_ms: data.started_epoch_ms,
        }
    }
}

impl From<ProductionLineData> for ProductionLine {
    fn from(data: ProductionLineData) -> Self {
        ProductionLine {
            planet_natural_id: data.planet_natural_id,
            planet_name: data.planet_name,
            line_type: data.line_type,
            orders: data.orders.into_iter().map(ProductionOrder::from).collect(),
        }
    }
}

impl From<StorageData> for Storage {
    fn from(data: StorageData) -> Self {
        Storage::new(
            data.storage_items
                .into_iter()
                .map(|item| StorageItem {
                    ticker: item.material_ticker,
                    amount: item.material_amount,
                })
                .collect(),
        )
    }
}
