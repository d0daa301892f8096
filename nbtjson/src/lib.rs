//! nbtjson reads and writes the binary NBT tag format and maps it to a JSON
//! text form. Three wire dialects are supported, see [`Variant`].
//!
//! * For the decoder see [`de`], for the encoder see [`ser`].
//! * For the in-memory tree see [`Value`] and [`Document`].
//! * For NBT array types see [`ByteArray`], [`IntArray`], and [`LongArray`].
//! * The [`json`] and [`gzip`] modules are adapters that sit outside the
//!   binary codec. The codec itself does no I/O and never logs.
//!
//! # Quick example
//!
//! ```
//! use nbtjson::{nbt, Document, Variant};
//!
//! let doc = Document::new("", nbt!({
//!     "name": "Steve",
//!     "health": 20i16,
//!     "pos": [1.0f64, 64.0f64, -3.5f64],
//! }));
//!
//! let bytes = nbtjson::to_bytes(&doc, Variant::Big).unwrap();
//! let back = nbtjson::from_bytes(&bytes, Variant::Big).unwrap();
//! assert_eq!(doc, back);
//! ```
//!
//! # Wire variants
//!
//! The dialect is picked per call and threaded through every primitive read
//! and write. Mixing dialects within one document is not possible.
//!
//! ```
//! use nbtjson::{Document, Value, Variant};
//!
//! let doc = Document::new("", Value::Int(1));
//! assert_eq!(
//!     nbtjson::to_bytes(&doc, Variant::Big).unwrap(),
//!     [3, 0, 0, 0, 0, 0, 1]
//! );
//! assert_eq!(
//!     nbtjson::to_bytes(&doc, Variant::Little).unwrap(),
//!     [3, 0, 0, 1, 0, 0, 0]
//! );
//! ```

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod de;
pub mod error;
pub mod gzip;
pub mod json;
pub mod ser;

mod arrays;
mod input;
mod macros;
mod value;
mod variant;

pub use arrays::*;
pub use de::{from_bytes, from_bytes_prefix, from_bytes_with_opts, DeOpts};
pub use ser::{to_bytes, to_writer};
pub use value::*;
pub use variant::*;

#[cfg(test)]
mod test;

/// An NBT tag kind. This does not carry the value or the name of the data.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other objects, all of the same kind.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

// Crates exist to generate this code for us, but would add to our compile
// times, so we instead write it out manually. The tags will very rarely change.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
            Tag::IntArray => 11,
            Tag::LongArray => 12,
        }
    }
}

impl Tag {
    /// The type name used for this kind in the JSON text form.
    pub fn name(self) -> &'static str {
        match self {
            Tag::End => "end",
            Tag::Byte => "byte",
            Tag::Short => "short",
            Tag::Int => "int",
            Tag::Long => "long",
            Tag::Float => "float",
            Tag::Double => "double",
            Tag::ByteArray => "byteArray",
            Tag::String => "string",
            Tag::List => "list",
            Tag::Compound => "compound",
            Tag::IntArray => "intArray",
            Tag::LongArray => "longArray",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tag {
    type Err = error::Error;

    fn from_str(s: &str) -> error::Result<Self> {
        use Tag::*;
        Ok(match s {
            "end" => End,
            "byte" => Byte,
            "short" => Short,
            "int" => Int,
            "long" => Long,
            "float" => Float,
            "double" => Double,
            "byteArray" => ByteArray,
            "string" => String,
            "list" => List,
            "compound" => Compound,
            "intArray" => IntArray,
            "longArray" => LongArray,
            other => return Err(error::Error::text(format!("unknown tag type {:?}", other))),
        })
    }
}
