pub mod common;
pub mod in_memory;

pub use common::*;
pub use in_memory::*;
