use crate::alloc::{default_allocator, AllocError, Allocator};
use crate::bitmask::Nullmask;
use crate::builder::bitmask::BitmaskBuilder;
use std::sync::Arc;


/// Validity bitmap under construction.
///
/// Stays unallocated until the first null arrives. All-valid prefixes
/// are materialized lazily at that point.
pub struct NullmaskBuilder {
    nulls: BitmaskBuilder,
    len: usize,
    null_count: usize,
    capacity: usize,
    has_nulls: bool
}


impl NullmaskBuilder {
    pub fn new() -> Self {
        Self::new_in(default_allocator())
    }

    pub fn new_in(allocator: Arc<dyn Allocator>) -> Self {
        Self {
            nulls: BitmaskBuilder::new_in(allocator),
            len: 0,
            null_count: 0,
            capacity: 0,
            has_nulls: false
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn null_count(&self) -> usize {
        self.null_count
    }

    pub fn byte_size(&self) -> usize {
        self.nulls.byte_size()
    }

    pub fn capacity(&self) -> usize {
        if self.has_nulls {
            self.nulls.capacity()
        } else {
            self.capacity
        }
    }

    pub fn clear(&mut self) {
        self.nulls.clear();
        self.len = 0;
        self.null_count = 0;
        self.has_nulls = false
    }

    pub fn reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        if self.has_nulls {
            self.nulls.reserve(additional)
        } else {
            self.capacity = std::cmp::max(self.capacity, self.len + additional);
            Ok(())
        }
    }

    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), AllocError> {
        if self.has_nulls {
            self.nulls.set_capacity(capacity)
        } else {
            self.capacity = capacity;
            Ok(())
        }
    }

    pub fn append(&mut self, is_valid: bool) -> Result<(), AllocError> {
        match (self.has_nulls, is_valid) {
            (true, val) => {
                self.nulls.append(val)?;
                if !val {
                    self.null_count += 1
                }
            },
            (false, true) => {},
            (false, false) => {
                self.init_nulls(1)?;
                self.nulls.append(false)?;
                self.null_count += 1
            }
        }
        self.len += 1;
        Ok(())
    }

    pub fn append_many(&mut self, is_valid: bool, count: usize) -> Result<(), AllocError> {
        if count == 0 {
            return Ok(());
        }
        match (self.has_nulls, is_valid) {
            (true, val) => {
                self.nulls.append_many(val, count)?;
                if !val {
                    self.null_count += count
                }
            },
            (false, true) => {},
            (false, false) => {
                self.init_nulls(count)?;
                self.nulls.append_many(false, count)?;
                self.null_count += count
            }
        }
        self.len += count;
        Ok(())
    }

    pub fn append_slice(&mut self, validity: &[bool]) -> Result<(), AllocError> {
        if validity.is_empty() {
            return Ok(());
        }
        let invalid = validity.iter().filter(|is_valid| !**is_valid).count();
        if self.has_nulls {
            self.nulls.append_slice(validity)?;
        } else if invalid > 0 {
            self.init_nulls(validity.len())?;
            self.nulls.append_slice(validity)?;
        }
        self.null_count += invalid;
        self.len += validity.len();
        Ok(())
    }

    fn init_nulls(&mut self, additional: usize) -> Result<(), AllocError> {
        self.nulls.reserve(std::cmp::max(self.capacity, self.len + additional))?;
        self.nulls.append_many(true, self.len)?;
        self.has_nulls = true;
        Ok(())
    }

    pub fn finish(&mut self) -> Option<Nullmask> {
        let null_count = std::mem::take(&mut self.null_count);
        self.len = 0;
        self.capacity = 0;
        if self.has_nulls {
            self.has_nulls = false;
            Some(Nullmask::new(self.nulls.finish(), null_count))
        } else {
            self.nulls.clear();
            None
        }
    }
}


impl Default for NullmaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}
