use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub ticker: String,
    pub name: String,
    /// Mass per unit (t)
    pub weight: f64,
    /// Volume per unit (m³)
    pub volume: f64,
}

impl Material {
    pub fn new(ticker: &str, name: &str, weight: f64, volume: f64) -> Self {
        Self {
            ticker: ticker.to_string(),
            name: name.to_string(),
            weight,
            volume,
        }
    }
}
