//! Encoding a [`Document`] into NBT bytes.
//!
//! The encoder mirrors the decoder. Whether a tag is written with a name is
//! decided by where it sits in the tree: the document root and compound
//! children are named, list elements are not.
//!
//! ```
//! use nbtjson::{nbt, Document, Variant};
//!
//! let doc = Document::new("", nbt!({}));
//! let bytes = nbtjson::to_bytes(&doc, Variant::Big).unwrap();
//! assert_eq!(bytes, [0x0a, 0x00, 0x00, 0x00]);
//! ```
//!
//! Encoding only fails with [`Error::InvalidTree`] when the tree cannot be
//! represented: a list whose elements differ in kind, or a string, name,
//! list or array too long for its length field. Trees nesting lists and
//! compounds deeper than [`DEFAULT_MAX_DEPTH`] are refused too, so anything
//! written here decodes again with default options.
//!
//! [`Error::InvalidTree`]: crate::error::Error::InvalidTree
//! [`DEFAULT_MAX_DEPTH`]: crate::de::DEFAULT_MAX_DEPTH
use std::io::Write;

use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};

use crate::de::DEFAULT_MAX_DEPTH;
use crate::error::{Error, Result};
use crate::{CompoundMap, Document, Prefix, Tag, Value, Variant};

/// Encode a document into a new byte vector.
pub fn to_bytes(doc: &Document, variant: Variant) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    to_writer(&mut out, doc, variant)?;
    Ok(out)
}

/// Encode a document into any writer. Nothing is buffered, so wrap slow
/// writers in a `BufWriter`.
pub fn to_writer<W: Write>(mut writer: W, doc: &Document, variant: Variant) -> Result<()> {
    writer.write_tag(doc.value.tag())?;
    writer.write_size_prefixed_str(&doc.name, variant)?;
    writer.write_value(&doc.value, variant, 0)
}

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag.into())?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, s: &str, variant: Variant) -> Result<()> {
        let prefix = variant.prefix();
        if s.len() > prefix.max_len() {
            return Err(Error::invalid_tree(format!(
                "string of {} bytes is too long for the {} variant (max {})",
                s.len(),
                variant,
                prefix.max_len(),
            )));
        }

        match (prefix, variant.is_little_endian()) {
            (Prefix::U16, false) => self.write_u16::<BigEndian>(s.len() as u16)?,
            (Prefix::U16, true) => self.write_u16::<LittleEndian>(s.len() as u16)?,
            (Prefix::I32, false) => self.write_i32::<BigEndian>(s.len() as i32)?,
            (Prefix::I32, true) => self.write_i32::<LittleEndian>(s.len() as i32)?,
        }
        self.write_all(s.as_bytes())?;
        Ok(())
    }

    /// List and array counts are big-endian in every variant.
    fn write_len(&mut self, len: usize) -> Result<()> {
        let len: i32 = len.try_into().map_err(|_| {
            Error::invalid_tree(format!("len {} too large for an i32 count", len))
        })?;
        self.write_i32::<BigEndian>(len)?;
        Ok(())
    }

    fn write_i16_as(&mut self, v: i16, variant: Variant) -> Result<()> {
        let mut buf = [0; 2];
        match variant.is_little_endian() {
            true => LittleEndian::write_i16(&mut buf, v),
            false => BigEndian::write_i16(&mut buf, v),
        }
        self.write_all(&buf)?;
        Ok(())
    }

    fn write_i32_as(&mut self, v: i32, variant: Variant) -> Result<()> {
        let mut buf = [0; 4];
        match variant.is_little_endian() {
            true => LittleEndian::write_i32(&mut buf, v),
            false => BigEndian::write_i32(&mut buf, v),
        }
        self.write_all(&buf)?;
        Ok(())
    }

    fn write_i64_as(&mut self, v: i64, variant: Variant) -> Result<()> {
        let mut buf = [0; 8];
        match variant.is_little_endian() {
            true => LittleEndian::write_i64(&mut buf, v),
            false => BigEndian::write_i64(&mut buf, v),
        }
        self.write_all(&buf)?;
        Ok(())
    }

    fn write_f32_as(&mut self, v: f32, variant: Variant) -> Result<()> {
        let mut buf = [0; 4];
        match variant.is_little_endian() {
            true => LittleEndian::write_f32(&mut buf, v),
            false => BigEndian::write_f32(&mut buf, v),
        }
        self.write_all(&buf)?;
        Ok(())
    }

    fn write_f64_as(&mut self, v: f64, variant: Variant) -> Result<()> {
        let mut buf = [0; 8];
        match variant.is_little_endian() {
            true => LittleEndian::write_f64(&mut buf, v),
            false => BigEndian::write_f64(&mut buf, v),
        }
        self.write_all(&buf)?;
        Ok(())
    }

    /// Write the payload of a value. The kind byte and name, where the
    /// position needs them, are the caller's job. `depth` counts the lists
    /// and compounds enclosing `value`.
    ///
    /// This recurses once per nesting level, per-kind work lives in the
    /// helpers below.
    fn write_value(&mut self, value: &Value, variant: Variant, depth: usize) -> Result<()> {
        match value {
            Value::List(items) => {
                check_depth(depth)?;
                self.write_list(value.list_tag().unwrap_or(Tag::End), items, variant, depth)
            }
            Value::Compound(map) => {
                check_depth(depth)?;
                self.write_compound(map, variant, depth)
            }
            leaf => self.write_leaf(leaf, variant),
        }
    }

    fn write_list(
        &mut self,
        element_tag: Tag,
        items: &[Value],
        variant: Variant,
        depth: usize,
    ) -> Result<()> {
        if let Some((i, odd)) = items
            .iter()
            .enumerate()
            .find(|(_, v)| v.tag() != element_tag)
        {
            return Err(Error::invalid_tree(format!(
                "list of {} has element {} of type {}",
                element_tag,
                i,
                odd.tag(),
            )));
        }

        self.write_tag(element_tag)?;
        self.write_len(items.len())?;
        for item in items {
            self.write_value(item, variant, depth + 1)?;
        }
        Ok(())
    }

    fn write_compound(&mut self, map: &CompoundMap, variant: Variant, depth: usize) -> Result<()> {
        for (name, child) in map {
            self.write_tag(child.tag())?;
            self.write_size_prefixed_str(name, variant)?;
            self.write_value(child, variant, depth + 1)?;
        }
        self.write_tag(Tag::End)
    }

    fn write_leaf(&mut self, value: &Value, variant: Variant) -> Result<()> {
        match value {
            Value::Byte(v) => self.write_i8(*v)?,
            Value::Short(v) => self.write_i16_as(*v, variant)?,
            Value::Int(v) => self.write_i32_as(*v, variant)?,
            Value::Long(v) => self.write_i64_as(*v, variant)?,
            Value::Float(v) => self.write_f32_as(*v, variant)?,
            Value::Double(v) => self.write_f64_as(*v, variant)?,
            Value::String(s) => self.write_size_prefixed_str(s, variant)?,
            Value::ByteArray(bs) => {
                self.write_len(bs.len())?;
                let bytes: Vec<u8> = bs.iter().map(|b| *b as u8).collect();
                self.write_all(&bytes)?;
            }
            Value::IntArray(is) => {
                self.write_len(is.len())?;
                for i in is.iter() {
                    self.write_i32_as(*i, variant)?;
                }
            }
            Value::LongArray(ls) => {
                self.write_len(ls.len())?;
                for l in ls.iter() {
                    self.write_i64_as(*l, variant)?;
                }
            }
            Value::List(_) | Value::Compound(_) => {
                unreachable!("containers go through write_value")
            }
        }
        Ok(())
    }
}

/// `depth` is the number of containers around the one about to be written.
fn check_depth(depth: usize) -> Result<()> {
    if depth >= DEFAULT_MAX_DEPTH {
        return Err(Error::invalid_tree(format!(
            "nesting deeper than {} levels",
            DEFAULT_MAX_DEPTH
        )));
    }
    Ok(())
}

impl<T> WriteNbt for T where T: Write {}
