pub mod caption;
pub mod catalog;
pub mod generation;
pub mod image;
pub mod params;

pub use caption::*;
pub use catalog::*;
pub use generation::*;
pub use image::*;
pub use params::*;
