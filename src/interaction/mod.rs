pub mod pointer;
pub mod watering_can;

pub use pointer::Pointer;
pub use watering_can::WateringCan;
