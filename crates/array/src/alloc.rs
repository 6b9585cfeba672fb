use std::alloc::Layout;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use thiserror::Error;


/// Alignment of every memory region handed out by an [`Allocator`].
pub const ALIGNMENT: usize = 64;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to allocate {size} bytes of array memory")]
pub struct AllocError {
    size: usize
}


impl AllocError {
    pub(crate) fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }
}


/// Allocation strategy behind array memory.
///
/// Regions are [`ALIGNMENT`]-aligned and sized exactly as requested.
/// Requests are never zero-sized.
pub trait Allocator: Send + Sync + 'static {
    fn allocate(&self, size: usize) -> Result<NonNull<u8>, AllocError>;

    /// # Safety
    /// `ptr` must denote a live region of `old_size` bytes obtained from this allocator.
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_size: usize,
        new_size: usize
    ) -> Result<NonNull<u8>, AllocError>;

    /// # Safety
    /// `ptr` must denote a live region of `size` bytes obtained from this allocator.
    unsafe fn free(&self, ptr: NonNull<u8>, size: usize);
}


/// [`Allocator`] backed by the global system allocator.
pub struct SystemAllocator;


impl Allocator for SystemAllocator {
    fn allocate(&self, size: usize) -> Result<NonNull<u8>, AllocError> {
        let layout = Layout::from_size_align(size, ALIGNMENT).map_err(|_| AllocError::new(size))?;
        let ptr = unsafe { std::alloc::alloc(layout) };
        NonNull::new(ptr).ok_or(AllocError::new(size))
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_size: usize,
        new_size: usize
    ) -> Result<NonNull<u8>, AllocError>
    {
        Layout::from_size_align(new_size, ALIGNMENT).map_err(|_| AllocError::new(new_size))?;
        let old_layout = Layout::from_size_align_unchecked(old_size, ALIGNMENT);
        let new_ptr = std::alloc::realloc(ptr.as_ptr(), old_layout, new_size);
        NonNull::new(new_ptr).ok_or(AllocError::new(new_size))
    }

    unsafe fn free(&self, ptr: NonNull<u8>, size: usize) {
        let layout = Layout::from_size_align_unchecked(size, ALIGNMENT);
        std::alloc::dealloc(ptr.as_ptr(), layout)
    }
}


/// Wraps another allocator and keeps count of live bytes.
pub struct TrackingAllocator {
    inner: Arc<dyn Allocator>,
    allocated: AtomicUsize
}


impl TrackingAllocator {
    pub fn new() -> Self {
        Self::wrap(Arc::new(SystemAllocator))
    }

    pub fn wrap(inner: Arc<dyn Allocator>) -> Self {
        Self {
            inner,
            allocated: AtomicUsize::new(0)
        }
    }

    pub fn allocated_bytes(&self) -> usize {
        self.allocated.load(Ordering::Relaxed)
    }
}


impl Default for TrackingAllocator {
    fn default() -> Self {
        Self::new()
    }
}


impl Allocator for TrackingAllocator {
    fn allocate(&self, size: usize) -> Result<NonNull<u8>, AllocError> {
        let ptr = self.inner.allocate(size)?;
        self.allocated.fetch_add(size, Ordering::Relaxed);
        Ok(ptr)
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_size: usize,
        new_size: usize
    ) -> Result<NonNull<u8>, AllocError>
    {
        let new_ptr = self.inner.reallocate(ptr, old_size, new_size)?;
        if new_size >= old_size {
            self.allocated.fetch_add(new_size - old_size, Ordering::Relaxed);
        } else {
            self.allocated.fetch_sub(old_size - new_size, Ordering::Relaxed);
        }
        Ok(new_ptr)
    }

    unsafe fn free(&self, ptr: NonNull<u8>, size: usize) {
        self.allocated.fetch_sub(size, Ordering::Relaxed);
        self.inner.free(ptr, size)
    }
}


pub fn default_allocator() -> Arc<dyn Allocator> {
    static DEFAULT: OnceLock<Arc<dyn Allocator>> = OnceLock::new();
    DEFAULT.get_or_init(|| Arc::new(SystemAllocator)).clone()
}
