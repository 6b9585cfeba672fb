pub(crate) mod bit_tools {
    #[inline]
    pub fn ceil(value: usize, divisor: usize) -> usize {
        value / divisor + (value % divisor > 0) as usize
    }

    #[inline]
    pub fn get_bit(data: &[u8], i: usize) -> bool {
        data[i / 8] & (1 << (i % 8)) != 0
    }

    #[inline]
    pub fn set_bit(data: &mut [u8], i: usize) {
        data[i / 8] |= 1 << (i % 8)
    }

    pub fn count_set_bits(data: &[u8], len: usize) -> usize {
        let full_bytes = len / 8;
        let remainder = len % 8;

        let mut count: usize = data[..full_bytes]
            .iter()
            .map(|byte| byte.count_ones() as usize)
            .sum();

        if remainder > 0 {
            count += (data[full_bytes] & ((1 << remainder) - 1)).count_ones() as usize
        }

        count
    }
}
