use std::fmt;

use crate::bit::bitfield::BitField;
use crate::bit::unsigned::{UnsignedInt, one, zero};

/// Error returned when a bit string has fewer characters left than the bit
/// width of the value being read.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct IndexOutOfRangeError;

impl fmt::Display for IndexOutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bit string ended before the full bit width was read")
    }
}

impl std::error::Error for IndexOutOfRangeError {}

/// Conversions between unsigned integers and their text renderings.
///
/// A bit string spells out every bit of the value, most significant first, so
/// its length always equals the bit width of the type:
///
/// ```
/// use ubits::BitStringCodec;
///
/// assert_eq!(181u8.bit_string(), "10110101");
/// assert_eq!(u8::from_bit_string("10110101"), Ok(181));
/// assert_eq!(181u8.hex_string(), "B5");
/// ```
///
/// Parsing treats `'1'` as a set bit and any other character as an unset bit,
/// and reads exactly as many characters as the type has bits. Extra trailing
/// characters are ignored:
///
/// ```
/// use ubits::{BitStringCodec, IndexOutOfRangeError};
///
/// assert_eq!(u8::from_bit_string("1011101101011100"), Ok(0xBB));
/// assert_eq!(u8::from_bit_string_at("xx10110101", 2), Ok(181));
/// assert_eq!(u8::from_bit_string("101"), Err(IndexOutOfRangeError));
/// ```
pub trait BitStringCodec
where
    Self: UnsignedInt + fmt::UpperHex,
{
    /// Renders every bit of the value, most significant bit first.
    #[must_use]
    fn bit_string(self) -> String {
        let mut rendered = String::with_capacity(Self::BIT_LEN);
        for pos in (0..Self::BIT_LEN).rev() {
            rendered.push(if self.bit_at(pos) == one::<Self>() { '1' } else { '0' });
        }
        rendered
    }

    /// Reads a value from the first `BIT_LEN` characters of `source`.
    fn from_bit_string(source: &str) -> Result<Self, IndexOutOfRangeError> {
        Self::from_bit_string_at(source, 0)
    }

    /// Reads a value from the `BIT_LEN` characters of `source` starting at
    /// `read_index`.
    fn from_bit_string_at(source: &str, read_index: usize) -> Result<Self, IndexOutOfRangeError> {
        let mut characters = source.chars().skip(read_index);
        let mut value = zero::<Self>();
        for pos in (0..Self::BIT_LEN).rev() {
            match characters.next() {
                Some('1') => value = value.set_bit_at(pos),
                Some(_) => {}
                None => return Err(IndexOutOfRangeError),
            }
        }
        Ok(value)
    }

    /// Renders the value as uppercase hexadecimal without leading zeros.
    #[must_use]
    fn hex_string(self) -> String {
        format!("{self:X}")
    }
}

impl<T> BitStringCodec for T where T: UnsignedInt + fmt::UpperHex {}
