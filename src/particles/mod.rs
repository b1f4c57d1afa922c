pub mod droplets;

pub use droplets::{Droplet, DropletSystem};
