//! # Binary datum format
//!
//! Every typed value is converted into a [`Datum`] tree before it is written.
//! A written `Datum` is self-describing: its first byte is a [`DatumType`] tag.
//! Tags are never reused; a retired kind keeps its number.
//!
//! `Null`, `Bool`, `I64` and `F64` have bodies of known size, so no length is written.
//! Every other kind writes `datum_body_len` right after the tag. Containers carry it too,
//! and a reader rejects a container whose members do not fill exactly that many bytes.
//!
//! Integers, floats and lengths are little-endian. Names are UTF-8.
//!
//! ```text
//! struct Datum::Null {
//!     datum_type:     u8,
//! }
//!
//! struct Datum::Bool {
//!     datum_type:     u8,
//!     datum_body:     u8,     // 0 or 1
//! }
//!
//! struct Datum::I64 or Datum::F64 {
//!     datum_type:     u8,
//!     datum_body:     [u8; 8],
//! }
//!
//! struct Datum::Bytes or Datum::Str {
//!     datum_type:         u8,
//!     datum_body_len:     u32,
//!     datum_body:         [u8; datum_body_len],
//! }
//!
//! struct Datum::Seq {
//!     datum_type:         u8,
//!     datum_body_len:     u32,
//!     datum_body:         {
//!         members_count:      u32,
//!         member_0:           Datum::*,
//!         member_1:           Datum::*,
//!         ...
//!     }
//! }
//!
//! struct Datum::Record {
//!     datum_type:         u8,
//!     datum_body_len:     u32,
//!     datum_body:         {
//!         name_len:           u32,
//!         name:               [u8; name_len],
//!         members_count:      u32,
//!         member_0:           {
//!             field_name_len:     u32,
//!             field_name:         [u8; field_name_len],
//!             field_value:        Datum::*,
//!         },
//!         ...
//!     }
//! }
//! ```

mod datum;
mod datum_type;
mod lengths;

pub use datum::*;
pub use datum_type::*;
use lengths::*;

/// Nesting depth beyond which a `Datum` is neither written nor read.
pub const DEFAULT_MAX_DEPTH: usize = 64;
