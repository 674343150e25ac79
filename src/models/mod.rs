// Models module - Domain records and FIO wire payloads

pub mod material;
pub mod production;
pub mod storage;
pub mod shipping;
pub mod responses;

pub use material::*;
pub use production::*;
pub use storage::*;
pub use shipping::*;
