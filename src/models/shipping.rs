use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Cargo vessel classes available for planetary supply runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipClass {
    /// Large cargo bay, balanced
    #[serde(rename = "LCB")]
    Lcb,
    /// Weight-optimised cargo bay
    #[serde(rename = "WCB")]
    Wcb,
    /// Volume-optimised cargo bay
    #[serde(rename = "VCB")]
    Vcb,
}

impl ShipClass {
    /// Evaluation order. Ties in autonomy go to the earlier entry.
    pub const ALL: [ShipClass; 3] = [ShipClass::Lcb, ShipClass::Wcb, ShipClass::Vcb];

    pub fn weight_capacity(self) -> f64 {
        match self {
            ShipClass::Lcb => 2000.0,
            ShipClass::Wcb => 3000.0,
            ShipClass::Vcb => 1000.0,
        }
    }

    pub fn volume_capacity(self) -> f64 {
        match self {
            ShipClass::Lcb => 2000.0,
            ShipClass::Wcb => 1000.0,
            ShipClass::Vcb => 3000.0,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ShipClass::Lcb => "LCB",
            ShipClass::Wcb => "WCB",
            ShipClass::Vcb => "VCB",
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Flow direction of a shipment. The derived ordering puts imports first,
/// which is what the task list sort relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShippingTaskType {
    #[serde(rename = "import")]
    Import,
    #[serde(rename = "export")]
    Export,
}

impl fmt::Display for ShippingTaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShippingTaskType::Import => f.write_str("import"),
            ShippingTaskType::Export => f.write_str("export"),
        }
    }
}

/// One shipload recommendation for a planet. Built by the task builder only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingTask {
    #[serde(rename = "type")]
    task_type: ShippingTaskType,
    ship_class: ShipClass,
    planet_name: String,
    planet_id: String,
    materials: BTreeMap<String, u64>,
    due_date: NaiveDate,
}

impl ShippingTask {
    pub(crate) fn new(
        task_type: ShippingTaskType,
        ship_class: ShipClass,
        planet_name: String,
        planet_id: String,
        materials: BTreeMap<String, u64>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            task_type,
            ship_class,
            planet_name,
            planet_id,
            materials,
            due_date,
        }
    }

    pub fn task_type(&self) -> ShippingTaskType {
        self.task_type
    }

    pub fn ship_class(&self) -> ShipClass {
        self.ship_class
    }

    pub fn planet_name(&self) -> &str {
        &self.planet_name
    }

    pub fn planet_id(&self) -> &str {
        &self.planet_id
    }

    /// Shipload per ticker; every amount is at least 1.
    pub fn materials(&self) -> &BTreeMap<String, u64> {
        &self.materials
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}
