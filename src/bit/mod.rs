pub use bitfield::BitField;
pub use bitstring::{BitStringCodec, IndexOutOfRangeError};
pub use bytewise::Bytewise;
pub use popcount::PopCount;
pub use unsigned::BitLength;

pub mod bitfield;
pub mod bitstring;
pub mod bytewise;
pub mod popcount;
pub mod unsigned;
