use crate::bit::unsigned::{UnsignedInt, one, zero};

/// Single-bit reads and writes on an unsigned integer, addressed by position.
///
/// Position `0` is the least significant bit and position `BIT_LEN - 1` is the
/// most significant bit. Positions at or above the bit width are not checked
/// here; they follow the shift behavior of the underlying type, which panics in
/// debug builds.
///
/// ```
/// use ubits::BitField;
///
/// let flags: u8 = 0;
/// let flags = flags.set_bit_at(3);
/// assert_eq!(flags, 8);
/// assert_eq!(flags.bit_at(3), 1);
/// assert_eq!(flags.unset_bit_at(3), 0);
/// ```
pub trait BitField
where
    Self: UnsignedInt,
{
    /// Returns the bit at `pos` as `0` or `1` of the same type.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `pos` is not less than the bit width.
    #[inline]
    #[must_use]
    fn bit_at(self, pos: usize) -> Self {
        (self >> pos) & one::<Self>()
    }

    /// Returns a copy with the bit at `pos` set to `1`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `pos` is not less than the bit width.
    #[inline]
    #[must_use]
    fn set_bit_at(self, pos: usize) -> Self {
        self | one::<Self>() << pos
    }

    /// Returns a copy with the bit at `pos` set to `0`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `pos` is not less than the bit width.
    #[inline]
    #[must_use]
    fn unset_bit_at(self, pos: usize) -> Self {
        self & !(one::<Self>() << pos)
    }

    /// Returns a copy with the bit at `pos` flipped.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `pos` is not less than the bit width.
    #[inline]
    #[must_use]
    fn toggle_bit_at(self, pos: usize) -> Self {
        self ^ one::<Self>() << pos
    }

    /// `true` for any non-zero value.
    #[inline]
    fn as_bool(self) -> bool {
        self != zero::<Self>()
    }

    /// `true` when exactly one bit is set. Zero is not a power of two.
    #[inline]
    fn is_power_of_two(self) -> bool {
        self != zero::<Self>() && self & (self - one::<Self>()) == zero::<Self>()
    }
}

impl<T> BitField for T where T: UnsignedInt {}
