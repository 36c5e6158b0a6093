mod colors;
mod styles;

pub use colors::{BORDER_INVALID, BORDER_NEUTRAL};
pub use styles::GLOBAL_STYLES;
