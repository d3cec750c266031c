pub mod invocation;
pub mod usage;

pub use invocation::*;
pub use usage::*;
