use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The wire dialect of a document. Fixes integer endianness and the width of
/// string and name length prefixes for the whole document.
///
/// | Variant         | scalars       | string/name prefix | array/list counts |
/// |-----------------|---------------|--------------------|-------------------|
/// | `big`           | big-endian    | `u16` big-endian   | `i32` big-endian  |
/// | `little`        | little-endian | `u16` little-endian| `i32` big-endian  |
/// | `littleVariant` | little-endian | `i32` little-endian| `i32` big-endian  |
///
/// Array and list counts are always big-endian, whatever the variant.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Variant {
    #[default]
    #[serde(rename = "big")]
    Big,
    #[serde(rename = "little")]
    Little,
    #[serde(rename = "littleVariant")]
    LittleVariant,
}

/// How a variant encodes string and name lengths.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Prefix {
    U16,
    I32,
}

impl Prefix {
    /// Number of bytes the prefix occupies on the wire.
    pub fn width(self) -> usize {
        match self {
            Prefix::U16 => 2,
            Prefix::I32 => 4,
        }
    }

    /// Largest byte length the prefix can describe.
    pub fn max_len(self) -> usize {
        match self {
            Prefix::U16 => u16::MAX as usize,
            Prefix::I32 => i32::MAX as usize,
        }
    }
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Big, Variant::Little, Variant::LittleVariant];

    pub fn is_little_endian(self) -> bool {
        !matches!(self, Variant::Big)
    }

    pub fn prefix(self) -> Prefix {
        match self {
            Variant::Big | Variant::Little => Prefix::U16,
            Variant::LittleVariant => Prefix::I32,
        }
    }

    /// The spelling used on the command line and in serialized config.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Big => "big",
            Variant::Little => "little",
            Variant::LittleVariant => "littleVariant",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Variant::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| {
                Error::text(format!(
                    "unknown variant {:?}, expected one of big, little, littleVariant",
                    s
                ))
            })
    }
}
