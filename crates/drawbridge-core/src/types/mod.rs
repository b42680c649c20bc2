//! Native resource types that cross the scripting boundary.

mod color;
mod image;

pub use color::Color;
pub use image::{CacheMode, NativeImage};
