pub mod analysis;
pub mod demographics;
pub mod risk;
