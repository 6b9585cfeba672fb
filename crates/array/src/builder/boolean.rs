use crate::alloc::{default_allocator, AllocError, Allocator};
use crate::array::{ArrayRef, BooleanArray};
use crate::builder::bitmask::BitmaskBuilder;
use crate::builder::nullmask::NullmaskBuilder;
use crate::builder::{ArrayBuilder, MIN_CAPACITY};
use crate::types::DataType;
use std::sync::Arc;


pub struct BooleanBuilder {
    nulls: NullmaskBuilder,
    values: BitmaskBuilder
}


impl BooleanBuilder {
    pub fn new() -> Self {
        Self::new_in(default_allocator())
    }

    pub fn new_in(allocator: Arc<dyn Allocator>) -> Self {
        Self {
            nulls: NullmaskBuilder::new_in(allocator.clone()),
            values: BitmaskBuilder::new_in(allocator)
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
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
    pub fn append(&mut self, value: bool) -> Result<(), AllocError> {
        self.reserve(1)?;
        self.nulls.append(true)?;
        self.values.append(value)
    }

    pub fn append_null(&mut self) -> Result<(), AllocError> {
        self.reserve(1)?;
        self.nulls.append(false)?;
        self.values.append(false)
    }

    pub fn append_option(&mut self, value: Option<bool>) -> Result<(), AllocError> {
        match value {
            Some(value) => self.append(value),
            None => self.append_null()
        }
    }

    /// Appends values paired with a validity slice. An empty `validity`
    /// marks all values as valid. Panics when the slices are non-empty
    /// and their lengths differ.
    pub fn append_values(&mut self, values: &[bool], validity: &[bool]) -> Result<(), AllocError> {
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

    pub fn append_slice(&mut self, values: &[bool]) -> Result<(), AllocError> {
        self.reserve(values.len())?;
        self.nulls.append_many(true, values.len())?;
        self.values.append_slice(values)
    }

    pub fn clear(&mut self) {
        self.nulls.clear();
        self.values.clear()
    }

    pub fn finish(&mut self) -> BooleanArray {
        let nulls = self.nulls.finish();
        let values = self.values.finish();
        BooleanArray::new(values, nulls)
    }
}


impl ArrayBuilder for BooleanBuilder {
    fn data_type(&self) -> DataType {
        DataType::Boolean
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


impl Default for BooleanBuilder {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod test {
    use super::BooleanBuilder;


    #[test]
    fn test_nulls_clear_the_value_bit() {
        let mut builder = BooleanBuilder::new();
        builder.append(true).unwrap();
        builder.append_null().unwrap();
        builder.append(false).unwrap();
        builder.append_option(Some(true)).unwrap();
        assert_eq!(builder.len(), 4);
        assert_eq!(builder.null_count(), 1);

        let array = builder.finish();
        assert_eq!(array.len(), 4);
        assert_eq!(array.null_count(), 1);
        assert_eq!(array.value(0), true);
        assert_eq!(array.value(1), false);
        assert!(array.is_null(1));
        assert_eq!(array.value(2), false);
        assert_eq!(array.value(3), true);
    }

    #[test]
    fn test_append_values_with_validity() {
        let mut builder = BooleanBuilder::new();
        builder.append_values(&[true, true, false], &[true, false, true]).unwrap();
        builder.append_slice(&[false, true]).unwrap();

        let array = builder.finish();
        assert_eq!(array.len(), 5);
        assert_eq!(array.null_count(), 1);
        assert!(array.is_valid(0));
        assert!(array.is_null(1));
        assert!(array.is_valid(2));
    }
}
