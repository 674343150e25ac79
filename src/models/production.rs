use serde::{Deserialize, Serialize};

/// One (ticker, amount) entry of a recipe's inputs or outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIo {
    pub ticker: String,
    pub amount: f64,
}

impl RecipeIo {
    pub fn new(ticker: &str, amount: f64) -> Self {
        Self {
            ticker: ticker.to_string(),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionOrder {
    pub inputs: Vec<RecipeIo>,
    pub outputs: Vec<RecipeIo>,
    pub duration_ms: i64,
    #[serde(default)]
    pub completed_percentage: f64,
    #[serde(default)]
    pub is_halted: bool,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub started_epoch_ms: Option<i64>,
}

impl ProductionOrder {
    /// Recurring, running order with no progress recorded yet.
    pub fn recurring(inputs: Vec<RecipeIo>, outputs: Vec<RecipeIo>, duration_ms: i64) -> Self {
        Self {
            inputs,
            outputs,
            duration_ms,
            completed_percentage: 0.0,
            is_halted: false,
            recurring: true,
            started_epoch_ms: None,
        }
    }

    /// Only recurring orders that are not halted feed the steady-state rates.
    pub fn contributes_to_rates(&self) -> bool {
        self.recurring && !self.is_halted
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionLine {
    pub planet_natural_id: String,
    pub planet_name: String,
    #[serde(rename = "type")]
    pub line_type: String,
    pub orders: Vec<ProductionOrder>,
}

impl ProductionLine {
    pub fn new(planet_natural_id: &str, planet_name: &str, line_type: &str, orders: Vec<ProductionOrder>) -> Self {
        Self {
            planet_natural_id: planet_natural_id.to_string(),
            planet_name: planet_name.to_string(),
            line_type: line_type.to_string(),
            orders,
        }
    }
}
