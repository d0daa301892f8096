//! Gzip wrapping for NBT files. This sits outside the codec: the decoder and
//! encoder only ever see the plain bytes.
//!
//! ```
//! use nbtjson::gzip;
//!
//! let raw = [0x0a, 0x00, 0x00, 0x00];
//! let packed = gzip::compress(&raw).unwrap();
//! assert!(gzip::is_gzip(&packed));
//! assert_eq!(&*gzip::decompress_if_gzip(&packed).unwrap(), &raw[..]);
//! ```
use std::borrow::Cow;
use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::Result;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Whether `data` starts with the gzip magic bytes.
pub fn is_gzip(data: &[u8]) -> bool {
    data.starts_with(&GZIP_MAGIC)
}

/// Inflate `data` if it is gzip compressed, otherwise hand it back as is.
pub fn decompress_if_gzip(data: &[u8]) -> Result<Cow<'_, [u8]>> {
    if !is_gzip(data) {
        return Ok(Cow::Borrowed(data));
    }

    let mut out = vec![];
    GzDecoder::new(data).read_to_end(&mut out)?;
    Ok(Cow::Owned(out))
}

/// Gzip `data` at the default compression level.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
