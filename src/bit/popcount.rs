/// Population count, the number of set bits in a value.
pub trait PopCount {
    fn pop_count(self) -> usize;
}

// Parallel bit count. Each step widens the per-group tallies, pairs into
// nibbles into bytes, and the final multiply sums the byte tallies into the
// top byte. The multiply overflows by construction, so it must wrap.
macro_rules! swar_impl {
    ($word_type:ty) => {
        impl PopCount for $word_type {
            #[inline]
            fn pop_count(self) -> usize {
                // 0b0101..., 0b0011..., 0x0F0F... repeated across the width.
                const PAIR_MASK: $word_type = !0 / 3;
                const NIBBLE_MASK: $word_type = !0 / 5;
                const BYTE_MASK: $word_type = !0 / 17;
                const BYTE_SUM: $word_type = !0 / 255;

                let mut tallies = self;
                tallies -= (tallies >> 1) & PAIR_MASK;
                tallies = (tallies & NIBBLE_MASK) + ((tallies >> 2) & NIBBLE_MASK);
                tallies = (tallies + (tallies >> 4)) & BYTE_MASK;
                (tallies.wrapping_mul(BYTE_SUM) >> (<$word_type>::BITS - 8)) as usize
            }
        }
    };
}

swar_impl!(u16);
swar_impl!(u32);
swar_impl!(u64);

impl PopCount for u8 {
    #[inline]
    fn pop_count(self) -> usize {
        u32::from(self).pop_count()
    }
}
