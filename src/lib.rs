//! Bit-level primitives for fixed-width unsigned integers.
//!
//! Every operation is exposed as an extension trait implemented for `u8`, `u16`,
//! `u32` and `u64`, so bit queries read as plain method calls on the value:
//!
//! ```
//! use ubits::{BitField, BitStringCodec, PopCount};
//!
//! let flags: u16 = 0b1011_1011_0101_1100;
//! assert_eq!(flags.pop_count(), 10);
//! assert_eq!(flags.bit_string(), "1011101101011100");
//! assert_eq!(u16::from_bit_string("1011101101011100"), Ok(flags));
//! assert_eq!(flags.set_bit_at(0).bit_at(0), 1);
//! ```

pub mod bit;

pub use bit::{BitField, BitLength, BitStringCodec, Bytewise, IndexOutOfRangeError, PopCount};
