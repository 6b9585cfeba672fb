mod decoder;
mod error;
mod parse;


pub use decoder::*;
pub use error::*;
