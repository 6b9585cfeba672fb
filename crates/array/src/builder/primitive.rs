use crate::alloc::{default_allocator, AllocError, Allocator};
use crate::array::{ArrayRef, PrimitiveArray};
use crate::builder::native::NativeBuilder;
use crate::builder::nullmask::NullmaskBuilder;
use crate::builder::{ArrayBuilder, MIN_CAPACITY};
use crate::types::{DataType, PrimitiveType};
use std::marker::PhantomData;
use std::sync::Arc;


pub struct PrimitiveBuilder<T: PrimitiveType> {
    nulls: NullmaskBuilder,
    values: NativeBuilder<T::Native>,
    phantom_data: PhantomData<T>
}


impl <T: PrimitiveType> PrimitiveBuilder<T> {
    pub fn new() -> Self {
        Self::new_in(default_allocator())
    }

    pub fn new_in(allocator: Arc<dyn Allocator>) -> Self {
        Self {
            nulls: NullmaskBuilder::new_in(allocator.clone()),
            values: NativeBuilder::new_in(allocator),
            phantom_data: PhantomData::default()
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn null_count(&self) -> usize {
        self.nulls.null_count()
    }

    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    pub fn byte_size(&self) -> usize {
        self.values.byte_size() + self.nulls.byte_size()
    }

    pub fn values(&self) -> &[T::Native] {
        self.values.values()
    }

    pub fn reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        self.values.reserve(additional)?;
        self.nulls.reserve(additional)
    }

    pub fn resize(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        let target = std::cmp::max(
            std::cmp::max(new_capacity, MIN_CAPACITY),
            self.len()
        );
        self.values.set_capacity(target)?;
        self.nulls.set_capacity(target)
    }

    #[inline]
    pub fn append(&mut self, value: T::Native) -> Result<(), AllocError> {
        self.reserve(1)?;
        self.nulls.append(true)?;
        self.values.append(value)
    }

    /// Appends a null slot. The value buffer receives a zero value,
    /// so it stays in lockstep with the validity bitmap.
    pub fn append_null(&mut self) -> Result<(), AllocError> {
        self.reserve(1)?;
        self.nulls.append(false)?;
        self.values.append(T::Native::default())
    }

    pub fn append_option(&mut self, value: Option<T::Native>) -> Result<(), AllocError> {
        match value {
            Some(value) => self.append(value),
            None => self.append_null()
        }
    }

    /// Appends values paired with a validity slice. An empty `validity`
    /// marks all values as valid. Panics when the slices are non-empty
    /// and their lengths differ.
    pub fn append_values(&mut self, values: &[T::Native], validity: &[bool]) -> Result<(), AllocError> {
        assert!(
            validity.is_empty() || validity.len() == values.len(),
            "value and validity slices have different lengths"
        );
        self.reserve(values.len())?;
        if validity.is_empty() {
            self.nulls.append_many(true, values.len())?;
        } else {
            self.nulls.append_slice(validity)?;
        }
        self.values.append_slice(values)
    }

    pub fn append_slice(&mut self, values: &[T::Native]) -> Result<(), AllocError> {
        self.reserve(values.len())?;
        self.nulls.append_many(true, values.len())?;
        self.values.append_slice(values)
    }

    pub fn clear(&mut self) {
        self.nulls.clear();
        self.values.clear()
    }

    pub fn finish(&mut self) -> PrimitiveArray<T> {
        let nulls = self.nulls.finish();
        let values = self.values.finish();
        PrimitiveArray::new(values, nulls)
    }
}


impl <T: PrimitiveType> ArrayBuilder for PrimitiveBuilder<T> {
    fn data_type(&self) -> DataType {
        T::DATA_TYPE
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn null_count(&self) -> usize {
        self.null_count()
    }

    fn capacity(&self) -> usize {
        self.capacity()
    }

    fn byte_size(&self) -> usize {
        self.byte_size()
    }

    fn reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        self.reserve(additional)
    }

    fn resize(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        self.resize(new_capacity)
    }

    fn append_null(&mut self) -> Result<(), AllocError> {
        self.append_null()
    }

    fn clear(&mut self) {
        self.clear()
    }

    fn finish(&mut self) -> ArrayRef {
        Arc::new(self.finish())
    }
}


impl <T: PrimitiveType> Default for PrimitiveBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod test {
    use crate::builder::{Int64Builder, MIN_CAPACITY};


    #[test]
    fn test_null_slots_hold_zero_values() {
        let mut builder = Int64Builder::new();
        builder.append(5).unwrap();
        builder.append_null().unwrap();
        builder.append_option(None).unwrap();
        builder.append_option(Some(7)).unwrap();
        assert_eq!(builder.values(), &[5, 0, 0, 7]);
        assert_eq!(builder.null_count(), 2);
    }

    #[test]
    #[should_panic(expected = "value and validity slices have different lengths")]
    fn test_append_values_length_mismatch() {
        let mut builder = Int64Builder::new();
        builder.append_values(&[1, 2, 3], &[true, false]).unwrap();
    }

    #[test]
    fn test_finish_resets_to_unallocated() {
        let mut builder = Int64Builder::new();
        builder.append_slice(&[1, 2, 3]).unwrap();
        assert!(builder.capacity() >= 3);

        let array = builder.finish();
        assert_eq!(array.len(), 3);

        assert_eq!(builder.len(), 0);
        assert_eq!(builder.null_count(), 0);
        assert_eq!(builder.capacity(), 0);
        assert_eq!(builder.byte_size(), 0);
    }

    #[test]
    fn test_resize_never_drops_accumulated_values() {
        let mut builder = Int64Builder::new();
        builder.append_slice(&[1, 2, 3, 4, 5]).unwrap();
        builder.resize(2).unwrap();
        assert_eq!(builder.len(), 5);
        assert_eq!(builder.capacity(), MIN_CAPACITY);
        assert_eq!(builder.values(), &[1, 2, 3, 4, 5]);
    }
}
