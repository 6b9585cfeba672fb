use crate::alloc::{default_allocator, AllocError, Allocator};
use crate::buffer::{MutableBuffer, ScalarBuffer};
use crate::builder::MIN_CAPACITY;
use crate::types::{bytes_of, Native};
use std::marker::PhantomData;
use std::sync::Arc;


pub struct NativeBuilder<T: Native> {
    buffer: MutableBuffer,
    phantom_data: PhantomData<T>
}


impl <T: Native> NativeBuilder<T> {
    pub fn new() -> Self {
        Self::new_in(default_allocator())
    }

    pub fn new_in(allocator: Arc<dyn Allocator>) -> Self {
        Self {
            buffer: MutableBuffer::new_in(allocator),
            phantom_data: PhantomData::default()
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len() / T::WIDTH
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn byte_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity() / T::WIDTH
    }

    pub fn values(&self) -> &[T] {
        let bytes = self.buffer.as_slice();
        if bytes.is_empty() {
            return &[];
        }
        unsafe {
            std::slice::from_raw_parts(bytes.as_ptr() as *const T, bytes.len() / T::WIDTH)
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear()
    }

    pub fn reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        let required = self.len() + additional;
        if required <= self.capacity() {
            return Ok(());
        }
        let new_capacity = std::cmp::max(
            required.checked_next_power_of_two().unwrap_or(required),
            MIN_CAPACITY
        );
        self.set_capacity(new_capacity)
    }

    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), AllocError> {
        let byte_capacity = capacity
            .checked_mul(T::WIDTH)
            .ok_or_else(|| AllocError::new(usize::MAX))?;
        self.buffer.set_capacity(byte_capacity)
    }

    #[inline]
    pub fn append(&mut self, value: T) -> Result<(), AllocError> {
        self.buffer.extend_from_slice(bytes_of(std::slice::from_ref(&value)))
    }

    pub fn append_many(&mut self, value: T, count: usize) -> Result<(), AllocError> {
        self.reserve(count)?;
        let bytes = bytes_of(std::slice::from_ref(&value));
        for _ in 0..count {
            self.buffer.extend_from_slice(bytes)?;
        }
        Ok(())
    }

    pub fn append_slice(&mut self, values: &[T]) -> Result<(), AllocError> {
        self.buffer.extend_from_slice(bytes_of(values))
    }

    pub fn finish(&mut self) -> ScalarBuffer<T> {
        let empty = MutableBuffer::new_in(self.buffer.allocator().clone());
        let buffer = std::mem::replace(&mut self.buffer, empty);
        ScalarBuffer::new(buffer.freeze())
    }
}


impl <T: Native> Default for NativeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod test {
    use super::NativeBuilder;
    use crate::builder::MIN_CAPACITY;


    #[test]
    fn test_reserve_keeps_power_of_two_capacity() {
        let mut builder = NativeBuilder::<i64>::new();
        assert_eq!(builder.capacity(), 0);

        builder.reserve(1).unwrap();
        assert_eq!(builder.capacity(), MIN_CAPACITY);

        builder.reserve(MIN_CAPACITY + 1).unwrap();
        assert_eq!(builder.capacity(), MIN_CAPACITY * 2);

        builder.reserve(100).unwrap();
        assert_eq!(builder.capacity(), 128);
    }

    #[test]
    fn test_append_and_finish() {
        let mut builder = NativeBuilder::<i32>::new();
        builder.append(1).unwrap();
        builder.append_slice(&[2, 3, 4]).unwrap();
        builder.append_many(0, 2).unwrap();
        assert_eq!(builder.len(), 6);
        assert_eq!(builder.values(), &[1, 2, 3, 4, 0, 0]);

        let values = builder.finish();
        assert_eq!(values.as_slice(), &[1, 2, 3, 4, 0, 0]);
        assert_eq!(builder.len(), 0);
        assert_eq!(builder.capacity(), 0);
    }
}
