pub mod calculations;
pub mod catalogue;
pub mod comparison;
pub mod models;

pub use models::*;
