use crate::types::DataType;
use std::any::Any;
use std::sync::Arc;


mod boolean;
mod primitive;


pub use boolean::*;
pub use primitive::*;


pub type ArrayRef = Arc<dyn Array>;


/// A frozen, immutable column of values.
///
/// Arrays are cheap to clone and can be shared across threads.
pub trait Array: Send + Sync + std::fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    fn data_type(&self) -> DataType;

    fn len(&self) -> usize;

    fn null_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
