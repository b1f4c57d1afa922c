pub mod vec2;
pub mod random;

pub use vec2::Vec2;
pub use random::Lcg;
