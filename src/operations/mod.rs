// Operations module - The shipping calculation pipeline

pub mod rates;
pub mod net_flow;
pub mod ship_selector;
pub mod task_builder;
pub mod shipping_calculator;

pub use rates::*;
pub use net_flow::*;
pub use ship_selector::*;
pub use task_builder::*;
pub use shipping_calculator::*;
