pub mod data;
pub mod rules;

pub use data::{set_once, DocumentRecord};
pub use rules::{default_regions, Region, RegionField, Script};
