//! Per-pot watering and growth
//!
//! Each pot grows a flower while the watering can hovers over it, and
//! blooms once after an uninterrupted watering run.

mod plant;
mod layout;

pub use plant::{Plant, PlantState, Bloom};
pub use layout::layout_plants;
