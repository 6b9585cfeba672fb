use crate::buffer::Buffer;
use crate::util::bit_tools;


/// Immutable bit-packed bitmap.
#[derive(Clone)]
pub struct Bitmask {
    buffer: Buffer,
    len: usize
}


impl Bitmask {
    pub(crate) fn new(buffer: Buffer, len: usize) -> Self {
        assert!(buffer.len() >= bit_tools::ceil(len, 8));
        Self { buffer, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        assert!(i < self.len);
        bit_tools::get_bit(&self.buffer, i)
    }

    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of bits set to 1.
    pub fn set_bits(&self) -> usize {
        bit_tools::count_set_bits(&self.buffer, self.len)
    }
}


/// Validity bitmap of an array. A set bit marks a valid slot.
#[derive(Clone)]
pub struct Nullmask {
    bits: Bitmask,
    null_count: usize
}


impl Nullmask {
    pub(crate) fn new(bits: Bitmask, null_count: usize) -> Self {
        Self { bits, null_count }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn null_count(&self) -> usize {
        self.null_count
    }

    #[inline]
    pub fn is_valid(&self, i: usize) -> bool {
        self.bits.bit(i)
    }

    #[inline]
    pub fn is_null(&self, i: usize) -> bool {
        !self.is_valid(i)
    }

    pub fn bitmask(&self) -> &Bitmask {
        &self.bits
    }

    pub fn data(&self) -> &[u8] {
        self.bits.data()
    }
}
