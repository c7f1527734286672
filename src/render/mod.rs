pub mod axis;
pub mod binner;
pub mod format;
pub mod frame;
pub mod raster;

pub use binner::BinSet;
pub use format::format_general;
pub use frame::{NO_COUNTS, Renderer};
