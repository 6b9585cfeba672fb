mod alloc;
mod array;
mod bitmask;
mod buffer;
mod types;
mod util;

pub mod builder;


pub use alloc::*;
pub use array::*;
pub use bitmask::*;
pub use buffer::*;
pub use types::*;
