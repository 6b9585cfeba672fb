use crate::alloc::{default_allocator, AllocError, Allocator, ALIGNMENT};
use crate::types::Native;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ops::Deref;
use std::ptr::NonNull;
use std::sync::Arc;


#[inline]
fn dangling() -> NonNull<u8> {
    // aligned placeholder for the unallocated state, never dereferenced
    unsafe { NonNull::new_unchecked(ALIGNMENT as *mut u8) }
}


/// Growable byte buffer with a single owner.
///
/// No memory is allocated until the first reservation and all growth
/// is reported to the caller via [`AllocError`].
pub struct MutableBuffer {
    ptr: NonNull<u8>,
    len: usize,
    capacity: usize,
    allocator: Arc<dyn Allocator>
}


unsafe impl Send for MutableBuffer {}
unsafe impl Sync for MutableBuffer {}


impl MutableBuffer {
    pub fn new() -> Self {
        Self::new_in(default_allocator())
    }

    pub fn new_in(allocator: Arc<dyn Allocator>) -> Self {
        Self {
            ptr: dangling(),
            len: 0,
            capacity: 0,
            allocator
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn allocator(&self) -> &Arc<dyn Allocator> {
        &self.allocator
    }

    pub fn as_slice(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    /// Makes sure there is capacity for at least `additional` more bytes,
    /// growing to the next power of two when the current region is too small.
    pub fn reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(AllocError::new(usize::MAX))?;

        if required <= self.capacity {
            return Ok(())
        }

        let new_capacity = std::cmp::max(
            required.checked_next_power_of_two().unwrap_or(required),
            ALIGNMENT
        );
        self.set_capacity(new_capacity)
    }

    /// Sets the capacity to exactly `new_capacity` bytes, never below the
    /// current length. Shrinking to a zero capacity returns the region
    /// to the allocator.
    pub fn set_capacity(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        let new_capacity = std::cmp::max(new_capacity, self.len);
        if new_capacity == self.capacity {
            return Ok(())
        }

        if new_capacity == 0 {
            unsafe { self.allocator.free(self.ptr, self.capacity) }
            self.ptr = dangling();
            self.capacity = 0;
            return Ok(())
        }

        let ptr = if self.capacity == 0 {
            self.allocator.allocate(new_capacity)?
        } else {
            unsafe { self.allocator.reallocate(self.ptr, self.capacity, new_capacity)? }
        };

        self.ptr = ptr;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Sets the length to `new_len`, filling any new bytes with `value`.
    pub fn resize(&mut self, new_len: usize, value: u8) -> Result<(), AllocError> {
        if new_len > self.len {
            self.reserve(new_len - self.len)?;
            unsafe {
                std::ptr::write_bytes(self.ptr.as_ptr().add(self.len), value, new_len - self.len)
            }
        }
        self.len = new_len;
        Ok(())
    }

    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> Result<(), AllocError> {
        self.reserve(bytes.len())?;
        unsafe {
            std::ptr::copy_nonoverlapping(
                bytes.as_ptr(),
                self.ptr.as_ptr().add(self.len),
                bytes.len()
            )
        }
        self.len += bytes.len();
        Ok(())
    }

    pub fn truncate(&mut self, len: usize) {
        self.len = std::cmp::min(self.len, len)
    }

    pub fn clear(&mut self) {
        self.len = 0
    }

    /// Freezes the buffer into an immutable, reference counted [`Buffer`],
    /// trimming spare capacity first.
    pub fn freeze(mut self) -> Buffer {
        // a failed shrink only leaves spare capacity behind
        let _ = self.set_capacity(self.len);

        let this = ManuallyDrop::new(self);
        let allocator = unsafe { std::ptr::read(&this.allocator) };
        Buffer {
            len: this.len,
            data: Arc::new(BufferData {
                ptr: this.ptr,
                size: this.capacity,
                allocator
            })
        }
    }
}


impl Default for MutableBuffer {
    fn default() -> Self {
        Self::new()
    }
}


impl Deref for MutableBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}


impl Drop for MutableBuffer {
    fn drop(&mut self) {
        if self.capacity > 0 {
            unsafe { self.allocator.free(self.ptr, self.capacity) }
        }
    }
}


struct BufferData {
    ptr: NonNull<u8>,
    size: usize,
    allocator: Arc<dyn Allocator>
}


unsafe impl Send for BufferData {}
unsafe impl Sync for BufferData {}


impl Drop for BufferData {
    fn drop(&mut self) {
        if self.size > 0 {
            unsafe { self.allocator.free(self.ptr, self.size) }
        }
    }
}


/// Immutable byte buffer shared by atomic reference counting.
#[derive(Clone)]
pub struct Buffer {
    data: Arc<BufferData>,
    len: usize
}


impl Buffer {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.data.ptr.as_ptr(), self.len) }
    }

    /// Tells whether two buffers view the same allocation.
    pub fn ptr_eq(&self, other: &Buffer) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}


impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}


/// Typed read view over a frozen [`Buffer`].
#[derive(Clone)]
pub struct ScalarBuffer<T> {
    buffer: Buffer,
    phantom_data: PhantomData<T>
}


impl <T: Native> ScalarBuffer<T> {
    pub fn new(buffer: Buffer) -> Self {
        assert_eq!(
            buffer.len() % T::WIDTH,
            0,
            "buffer length is not a multiple of the value width"
        );
        Self {
            buffer,
            phantom_data: PhantomData::default()
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len() / T::WIDTH
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        let bytes = self.buffer.as_slice();
        if bytes.is_empty() {
            return &[]
        }
        unsafe { std::slice::from_raw_parts(bytes.as_ptr().cast(), bytes.len() / T::WIDTH) }
    }

    pub fn inner(&self) -> &Buffer {
        &self.buffer
    }
}


impl <T: Native> Deref for ScalarBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}


#[cfg(test)]
mod test {
    use super::MutableBuffer;
    use crate::alloc::ALIGNMENT;


    #[test]
    fn test_growth_and_freeze() {
        let mut buffer = MutableBuffer::new();
        assert_eq!(buffer.capacity(), 0);

        buffer.extend_from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(buffer.capacity(), ALIGNMENT);
        assert_eq!(buffer.as_ptr() as usize % ALIGNMENT, 0);

        buffer.resize(100, 0xAB).unwrap();
        assert_eq!(buffer.len(), 100);
        assert_eq!(buffer.capacity(), 128);
        assert_eq!(buffer[3], 0xAB);

        let frozen = buffer.freeze();
        assert_eq!(frozen.len(), 100);
        assert_eq!(&frozen[..3], &[1, 2, 3]);

        let shared = frozen.clone();
        assert!(shared.ptr_eq(&frozen));
    }
}
