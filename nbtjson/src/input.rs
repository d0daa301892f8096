use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{Error, Result};
use crate::{Prefix, Tag, Variant};

/// Byte slice being decoded, plus how far into it we are. All primitive
/// reads go through here so every error can report its offset.
pub(crate) struct Slice<'de> {
    data: &'de [u8],
    pos: usize,
    variant: Variant,
}

impl<'de> Slice<'de> {
    pub(crate) fn new(data: &'de [u8], variant: Variant) -> Self {
        Self {
            data,
            pos: 0,
            variant,
        }
    }

    /// Number of bytes consumed so far.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn consume(&mut self, n: usize) -> Result<&'de [u8]> {
        let start = self.pos;
        let end = start.saturating_add(n);
        if end <= self.data.len() {
            self.pos = end;
            Ok(&self.data[start..end])
        } else {
            Err(Error::unexpected_eof(self.data.len()))
        }
    }

    pub(crate) fn consume_byte(&mut self) -> Result<u8> {
        Ok(self.consume(1)?[0])
    }

    pub(crate) fn consume_tag(&mut self) -> Result<Tag> {
        let offset = self.pos;
        let tag = self.consume_byte()?;
        Tag::try_from(tag).map_err(|_| Error::invalid_tag(offset, tag))
    }

    pub(crate) fn consume_i8(&mut self) -> Result<i8> {
        Ok(self.consume_byte()? as i8)
    }

    pub(crate) fn consume_i16(&mut self) -> Result<i16> {
        let bs = self.consume(2)?;
        Ok(match self.variant.is_little_endian() {
            true => LittleEndian::read_i16(bs),
            false => BigEndian::read_i16(bs),
        })
    }

    pub(crate) fn consume_i32(&mut self) -> Result<i32> {
        let bs = self.consume(4)?;
        Ok(match self.variant.is_little_endian() {
            true => LittleEndian::read_i32(bs),
            false => BigEndian::read_i32(bs),
        })
    }

    pub(crate) fn consume_i64(&mut self) -> Result<i64> {
        let bs = self.consume(8)?;
        Ok(match self.variant.is_little_endian() {
            true => LittleEndian::read_i64(bs),
            false => BigEndian::read_i64(bs),
        })
    }

    pub(crate) fn consume_f32(&mut self) -> Result<f32> {
        let bs = self.consume(4)?;
        Ok(match self.variant.is_little_endian() {
            true => LittleEndian::read_f32(bs),
            false => BigEndian::read_f32(bs),
        })
    }

    pub(crate) fn consume_f64(&mut self) -> Result<f64> {
        let bs = self.consume(8)?;
        Ok(match self.variant.is_little_endian() {
            true => LittleEndian::read_f64(bs),
            false => BigEndian::read_f64(bs),
        })
    }

    /// Element count of a list or array. Always a big-endian i32, whatever
    /// the variant. Negative counts are rejected here.
    pub(crate) fn consume_size(&mut self) -> Result<usize> {
        let offset = self.pos;
        let size = BigEndian::read_i32(self.consume(4)?);
        size.try_into().map_err(|_| Error::negative_size(offset, size))
    }

    fn consume_str_len(&mut self) -> Result<usize> {
        let offset = self.pos;
        match self.variant.prefix() {
            Prefix::U16 => {
                let bs = self.consume(2)?;
                Ok(match self.variant.is_little_endian() {
                    true => LittleEndian::read_u16(bs),
                    false => BigEndian::read_u16(bs),
                } as usize)
            }
            Prefix::I32 => {
                let len = LittleEndian::read_i32(self.consume(4)?);
                len.try_into().map_err(|_| Error::negative_size(offset, len))
            }
        }
    }

    /// A length-prefixed UTF-8 string, used for both names and String
    /// payloads.
    pub(crate) fn consume_str(&mut self) -> Result<String> {
        let len = self.consume_str_len()?;
        let offset = self.pos;
        let bs = self.consume(len)?;
        std::str::from_utf8(bs)
            .map(str::to_owned)
            .map_err(|_| Error::nonunicode_string(offset, bs))
    }

    /// Raw bytes of a ByteArray.
    pub(crate) fn consume_bytes(&mut self, n: usize) -> Result<&'de [u8]> {
        self.consume(n)
    }
}
