pub mod format;
pub mod primitive;

pub use format::*;
