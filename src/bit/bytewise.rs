/// Packing and unpacking of wider words into their big-endian bytes.
///
/// The first array element holds the most significant byte of the word:
///
/// ```
/// use ubits::Bytewise;
///
/// assert_eq!(u32::combine_bytes([0xDE, 0xAD, 0xBE, 0xEF]), 0xDEADBEEF);
/// assert_eq!(0xDEADBEEFu32.split_bytes(), [0xDE, 0xAD, 0xBE, 0xEF]);
/// ```
pub trait Bytewise
where
    Self: Sized,
{
    type Bytes;

    #[must_use]
    fn combine_bytes(bytes: Self::Bytes) -> Self;

    #[must_use]
    fn split_bytes(self) -> Self::Bytes;
}

macro_rules! bytewise_impl {
    ($word_type:ty, $byte_count:expr) => {
        impl Bytewise for $word_type {
            type Bytes = [u8; $byte_count];

            #[inline]
            fn combine_bytes(bytes: Self::Bytes) -> Self {
                let mut value: $word_type = 0;
                for (index, byte) in bytes.into_iter().enumerate() {
                    let shift = <$word_type>::BITS as usize - 8 - 8 * index;
                    value |= <$word_type>::from(byte) << shift;
                }
                value
            }

            #[inline]
            fn split_bytes(self) -> Self::Bytes {
                let mut bytes = [0u8; $byte_count];
                for (index, byte) in bytes.iter_mut().enumerate() {
                    let shift = <$word_type>::BITS as usize - 8 - 8 * index;
                    *byte = (self >> shift) as u8;
                }
                bytes
            }
        }
    };
}

bytewise_impl!(u32, 4);
bytewise_impl!(u64, 8);
