use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr, Sub};

/// The number of bits in a value of a fixed-width type.
pub trait BitLength {
    fn bit_len(&self) -> usize;
    const BIT_LEN: usize;
}

macro_rules! bit_length_impl {
    ($word_type:ty) => {
        impl BitLength for $word_type {
            fn bit_len(&self) -> usize {
                Self::BIT_LEN
            }
            const BIT_LEN: usize = <$word_type>::BITS as usize;
        }
    };
}

bit_length_impl!(u8);
bit_length_impl!(u16);
bit_length_impl!(u32);
bit_length_impl!(u64);

/// Standard unsigned integer types, as characterized by their operator traits.
pub trait UnsignedInt
where
    Self: From<bool>
        + BitLength
        + Not<Output = Self>
        + Copy
        + Default
        + Shl<usize, Output = Self>
        + Shr<usize, Output = Self>
        + Sub<Output = Self>
        + PartialEq
        + BitAnd<Self, Output = Self>
        + BitOr<Self, Output = Self>
        + BitXor<Self, Output = Self>,
{
}

impl<T> UnsignedInt for T where
    T: From<bool>
        + BitLength
        + Copy
        + Not<Output = T>
        + Default
        + Shl<usize, Output = Self>
        + Shr<usize, Output = Self>
        + Sub<Output = T>
        + PartialEq
        + BitAnd<T, Output = T>
        + BitOr<T, Output = T>
        + BitXor<T, Output = T>
{
}

#[inline]
pub(crate) fn one<Word: UnsignedInt>() -> Word {
    Word::from(true)
}

#[inline]
pub(crate) fn zero<Word: UnsignedInt>() -> Word {
    Word::default()
}
