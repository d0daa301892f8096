//! Decoding NBT bytes into a [`Document`].
//!
//! Decoding is a single recursive-descent pass over an in-memory slice. The
//! [`Variant`] given at the top is used for every primitive read below it.
//! Any fault aborts the whole decode with [`Error::MalformedInput`], carrying
//! the byte offset where it was detected. No partial tree is ever returned.
//!
//! ```
//! use nbtjson::{de, Variant};
//!
//! // An empty compound named "" in the big-endian dialect.
//! let doc = de::from_bytes(&[0x0a, 0x00, 0x00, 0x00], Variant::Big).unwrap();
//! assert_eq!(doc.name, "");
//! assert!(doc.value.as_compound().unwrap().is_empty());
//! ```
//!
//! Trailing bytes after the document are not an error. Use
//! [`from_bytes_prefix`] to find out where the document ended.
//!
//! [`Error::MalformedInput`]: crate::error::Error::MalformedInput

use crate::error::{Error, Result};
use crate::input::Slice;
use crate::{ByteArray, CompoundMap, Document, IntArray, LongArray, Tag, Value, Variant};

/// Nesting limit used by default when decoding, and always when encoding.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for customizing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeOpts {
    pub(crate) max_depth: usize,
    pub(crate) max_seq_len: usize,
}

impl DeOpts {
    /// Create new options. This object follows a builder pattern.
    pub fn new() -> Self {
        Default::default()
    }

    /// Maximum nesting of lists and compounds. Deeper input is rejected as
    /// malformed. Default is [`DEFAULT_MAX_DEPTH`], the deepest tree the
    /// encoder will write.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    /// Maximum number of elements a list or array may declare. The format
    /// itself allows up to `i32::MAX`.
    pub fn max_seq_len(mut self, value: usize) -> Self {
        self.max_seq_len = value;
        self
    }
}

impl Default for DeOpts {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_seq_len: i32::MAX as usize,
        }
    }
}

/// Decode a document from `input`, ignoring any bytes after it.
pub fn from_bytes(input: &[u8], variant: Variant) -> Result<Document> {
    from_bytes_prefix(input, variant).map(|(doc, _)| doc)
}

/// Decode a document from the start of `input`, returning it along with the
/// number of bytes it occupied.
pub fn from_bytes_prefix(input: &[u8], variant: Variant) -> Result<(Document, usize)> {
    from_bytes_with_opts(input, variant, DeOpts::default())
}

/// As [`from_bytes_prefix`], with decode limits.
pub fn from_bytes_with_opts(
    input: &[u8],
    variant: Variant,
    opts: DeOpts,
) -> Result<(Document, usize)> {
    let mut de = Decoder {
        input: Slice::new(input, variant),
        opts,
    };

    let offset = de.input.position();
    let tag = de.input.consume_tag()?;
    if tag == Tag::End {
        return Err(Error::malformed(
            offset,
            "invalid nbt: document starts with an end tag",
        ));
    }

    let name = de.input.consume_str()?;
    let value = de.value(tag)?;
    Ok((Document { name, value }, de.input.position()))
}

struct Decoder<'de> {
    input: Slice<'de>,
    opts: DeOpts,
}

/// A list or compound still being filled. Nesting lives on the heap, so deep
/// input costs no call stack.
enum Frame {
    List {
        element_tag: Tag,
        remaining: usize,
        items: Vec<Value>,
    },
    Compound {
        map: CompoundMap,
        // Name of the child currently being read.
        name: String,
    },
}

impl<'de> Decoder<'de> {
    /// Read the payload of a tag whose kind byte (and name, if any) has
    /// already been consumed.
    fn value(&mut self, tag: Tag) -> Result<Value> {
        let mut stack = Vec::new();
        let mut done = self.open(tag, &mut stack)?;

        loop {
            if let Some(value) = done.take() {
                match stack.last_mut() {
                    None => return Ok(value),
                    Some(Frame::List { items, .. }) => items.push(value),
                    Some(Frame::Compound { map, name }) => {
                        map.insert(std::mem::take(name), value);
                    }
                }
            }

            let next = match stack.last_mut() {
                Some(Frame::List {
                    element_tag,
                    remaining,
                    ..
                }) => match *remaining {
                    0 => None,
                    _ => {
                        *remaining -= 1;
                        Some(*element_tag)
                    }
                },
                Some(Frame::Compound { name, .. }) => match self.input.consume_tag()? {
                    Tag::End => None,
                    tag => {
                        *name = self.input.consume_str()?;
                        Some(tag)
                    }
                },
                None => unreachable!("containers are only opened onto the stack"),
            };

            done = match next {
                Some(tag) => self.open(tag, &mut stack)?,
                None => match stack.pop() {
                    Some(Frame::List { items, .. }) => Some(Value::List(items)),
                    Some(Frame::Compound { map, .. }) => Some(Value::Compound(map)),
                    None => None,
                },
            };
        }
    }

    /// Start reading a value. Leaves are read whole and returned. Lists and
    /// compounds are pushed onto `stack` to be filled by the caller.
    fn open(&mut self, tag: Tag, stack: &mut Vec<Frame>) -> Result<Option<Value>> {
        Ok(Some(match tag {
            Tag::Byte => Value::Byte(self.input.consume_i8()?),
            Tag::Short => Value::Short(self.input.consume_i16()?),
            Tag::Int => Value::Int(self.input.consume_i32()?),
            Tag::Long => Value::Long(self.input.consume_i64()?),
            Tag::Float => Value::Float(self.input.consume_f32()?),
            Tag::Double => Value::Double(self.input.consume_f64()?),
            Tag::String => Value::String(self.input.consume_str()?),
            Tag::ByteArray => {
                let size = self.size(1)?;
                let bs = self.input.consume_bytes(size)?;
                Value::ByteArray(ByteArray::new(bs.iter().map(|b| *b as i8).collect()))
            }
            Tag::IntArray => {
                let size = self.size(4)?;
                let mut data = Vec::with_capacity(size);
                for _ in 0..size {
                    data.push(self.input.consume_i32()?);
                }
                Value::IntArray(IntArray::new(data))
            }
            Tag::LongArray => {
                let size = self.size(8)?;
                let mut data = Vec::with_capacity(size);
                for _ in 0..size {
                    data.push(self.input.consume_i64()?);
                }
                Value::LongArray(LongArray::new(data))
            }
            Tag::List => {
                let offset = self.input.position();
                let element_tag = self.input.consume_tag()?;

                // A list of End has no payload per element, so a non-empty
                // one would be an easy way to claim a huge list for free. Empty
                // lists are commonly written this way though.
                let size = match element_tag {
                    Tag::End => match self.input.consume_size()? {
                        0 => 0,
                        size => {
                            return Err(Error::malformed(
                                offset,
                                format!("list of type 'end' with non-zero size {}", size),
                            ))
                        }
                    },
                    _ => self.size(1)?,
                };

                self.enter(offset, stack.len())?;
                stack.push(Frame::List {
                    element_tag,
                    remaining: size,
                    items: Vec::with_capacity(size),
                });
                return Ok(None);
            }
            Tag::Compound => {
                self.enter(self.input.position(), stack.len())?;
                stack.push(Frame::Compound {
                    map: CompoundMap::new(),
                    name: String::new(),
                });
                return Ok(None);
            }
            // Never reached from a document: lists of End are always empty
            // and compounds stop at End. Kept as an error for completeness.
            Tag::End => {
                return Err(Error::malformed(
                    self.input.position(),
                    "unexpected end tag, was expecting payload of a value",
                ))
            }
        }))
    }

    /// Read a list or array count. A count the rest of the input cannot hold
    /// at `elem_width` bytes per element is reported as truncation up front,
    /// before anything is allocated for it.
    fn size(&mut self, elem_width: usize) -> Result<usize> {
        let offset = self.input.position();
        let size = self.input.consume_size()?;

        if size > self.opts.max_seq_len {
            return Err(Error::malformed(
                offset,
                format!(
                    "size ({}) greater than max sequence length ({})",
                    size, self.opts.max_seq_len,
                ),
            ));
        }

        let possible = self.input.remaining() / elem_width;
        if size > possible {
            return Err(Error::unexpected_eof(
                self.input.position() + self.input.remaining(),
            ));
        }

        Ok(size)
    }

    fn enter(&self, offset: usize, depth: usize) -> Result<()> {
        if depth >= self.opts.max_depth {
            return Err(Error::malformed(
                offset,
                format!("nesting deeper than {} levels", self.opts.max_depth),
            ));
        }
        Ok(())
    }
}
