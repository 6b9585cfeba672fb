use crate::alloc::AllocError;
use crate::array::ArrayRef;
use crate::types::DataType;


pub mod bitmask;
pub mod native;
pub mod nullmask;
mod aliases;
mod any;
mod boolean;
mod primitive;


pub use aliases::*;
pub use any::*;
pub use boolean::*;
pub use primitive::*;


pub(crate) const MIN_CAPACITY: usize = 1 << 5;


/// Common surface of all array builders.
pub trait ArrayBuilder {
    fn data_type(&self) -> DataType;

    fn len(&self) -> usize;

    fn null_count(&self) -> usize;

    fn capacity(&self) -> usize;

    fn byte_size(&self) -> usize;

    fn reserve(&mut self, additional: usize) -> Result<(), AllocError>;

    fn resize(&mut self, new_capacity: usize) -> Result<(), AllocError>;

    fn append_null(&mut self) -> Result<(), AllocError>;

    fn clear(&mut self);

    /// Freezes the accumulated values into an immutable array and resets
    /// the builder to its initial, unallocated state.
    fn finish(&mut self) -> ArrayRef;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
