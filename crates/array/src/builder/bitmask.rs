use crate::alloc::{default_allocator, AllocError, Allocator};
use crate::bitmask::Bitmask;
use crate::buffer::MutableBuffer;
use crate::util::bit_tools;
use std::sync::Arc;


pub struct BitmaskBuilder {
    buffer: MutableBuffer,
    len: usize
}


impl BitmaskBuilder {
    pub fn new() -> Self {
        Self::new_in(default_allocator())
    }

    pub fn new_in(allocator: Arc<dyn Allocator>) -> Self {
        Self {
            buffer: MutableBuffer::new_in(allocator),
            len: 0
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn byte_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity() * 8
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.len = 0
    }

    pub fn reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        let new_byte_len = bit_tools::ceil(self.len + additional, 8);
        self.buffer.reserve(new_byte_len.saturating_sub(self.buffer.len()))
    }

    pub fn set_capacity(&mut self, bits: usize) -> Result<(), AllocError> {
        self.buffer.set_capacity(bit_tools::ceil(bits, 8))
    }

    #[inline]
    fn grow(&mut self, additional: usize) -> Result<(), AllocError> {
        let new_byte_len = bit_tools::ceil(self.len + additional, 8);
        self.buffer.resize(new_byte_len, 0)
    }

    #[inline]
    pub fn append(&mut self, val: bool) -> Result<(), AllocError> {
        self.grow(1)?;
        if val {
            bit_tools::set_bit(self.buffer.as_slice_mut(), self.len);
        }
        self.len += 1;
        Ok(())
    }

    pub fn append_many(&mut self, val: bool, count: usize) -> Result<(), AllocError> {
        let new_len = self.len + count;
        let new_byte_len = bit_tools::ceil(new_len, 8);
        if val {
            let cur_remainder = self.len % 8;
            let new_remainder = new_len % 8;

            if cur_remainder != 0 {
                // Pad last byte with 1s
                *self.buffer.as_slice_mut().last_mut().unwrap() |= !((1 << cur_remainder) - 1)
            }

            self.buffer.truncate(bit_tools::ceil(self.len, 8));
            self.buffer.resize(new_byte_len, 0xFF)?;

            if new_remainder != 0 {
                // Clear remaining bits
                *self.buffer.as_slice_mut().last_mut().unwrap() &= (1 << new_remainder) - 1
            }
        } else if new_byte_len > self.buffer.len() {
            self.buffer.resize(new_byte_len, 0)?;
        }
        self.len = new_len;
        Ok(())
    }

    pub fn append_slice(&mut self, flags: &[bool]) -> Result<(), AllocError> {
        self.grow(flags.len())?;
        let data = self.buffer.as_slice_mut();
        for (i, &flag) in flags.iter().enumerate() {
            if flag {
                bit_tools::set_bit(data, self.len + i);
            }
        }
        self.len += flags.len();
        Ok(())
    }

    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    pub fn finish(&mut self) -> Bitmask {
        let empty = MutableBuffer::new_in(self.buffer.allocator().clone());
        let buffer = std::mem::replace(&mut self.buffer, empty);
        let len = std::mem::take(&mut self.len);
        Bitmask::new(buffer.freeze(), len)
    }
}


impl Default for BitmaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod test {
    use super::BitmaskBuilder;
    use proptest::prelude::*;


    #[derive(Debug, Clone)]
    enum Op {
        Append(bool),
        AppendMany(bool, usize),
        AppendSlice(Vec<bool>)
    }


    fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
        prop::collection::vec(
            prop_oneof![
                any::<bool>().prop_map(Op::Append),
                (any::<bool>(), 0..100usize).prop_map(|(val, count)| Op::AppendMany(val, count)),
                prop::collection::vec(any::<bool>(), 0..100).prop_map(Op::AppendSlice)
            ],
            0..50
        )
    }

    proptest! {
        #[test]
        fn test_append_ops(ops in arb_ops()) {
            let mut builder = BitmaskBuilder::new();
            let mut model: Vec<bool> = Vec::new();

            for op in ops.iter() {
                match op {
                    Op::Append(val) => {
                        builder.append(*val).unwrap();
                        model.push(*val);
                    },
                    Op::AppendMany(val, count) => {
                        builder.append_many(*val, *count).unwrap();
                        model.extend(std::iter::repeat(*val).take(*count));
                    },
                    Op::AppendSlice(flags) => {
                        builder.append_slice(flags).unwrap();
                        model.extend_from_slice(flags);
                    }
                }
            }

            prop_assert_eq!(builder.len(), model.len());

            let mask = builder.finish();
            prop_assert_eq!(mask.len(), model.len());
            for (i, val) in model.iter().enumerate() {
                prop_assert_eq!(mask.bit(i), *val);
            }
            prop_assert_eq!(mask.set_bits(), model.iter().filter(|val| **val).count());
        }
    }
}
