use indexmap::IndexMap;

use crate::{ByteArray, IntArray, LongArray, Tag};

/// Children of a compound, in insertion order.
pub type CompoundMap = IndexMap<String, Value>;

/// Value is a complete NBT value. It owns its data. Compounds and Lists are
/// recursively owned by their parent, so the tree cannot contain cycles.
///
/// Names only exist on the children of a compound, where they are the keys of
/// the [`CompoundMap`]. List elements are unnamed. The name of the top-level
/// tag lives in [`Document`].
///
/// ```
/// # use nbtjson::{nbt, Value};
/// let v = nbt!({ "DataVersion": 3465, "Pos": [0.5f64, 64.0f64, 0.5f64] });
///
/// match &v["DataVersion"] {
///     Value::Int(ver) => assert_eq!(*ver, 3465),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(ByteArray),
    IntArray(IntArray),
    LongArray(LongArray),
    /// Elements must all have the same kind for the list to be encodable.
    List(Vec<Value>),
    Compound(CompoundMap),
}

/// A complete NBT document: the top-level value and the name it is stored
/// under. The name is usually the empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub name: String,
    pub value: Value,
}

impl Document {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// A document whose root is a compound, which is what almost every NBT
    /// file contains.
    pub fn compound(name: impl Into<String>, map: CompoundMap) -> Self {
        Self::new(name, Value::Compound(map))
    }
}

impl Value {
    /// The kind of tag this value is written as.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::String(_) => Tag::String,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
        }
    }

    /// The element kind of a list: the kind of its first element, or `End`
    /// for an empty list. `None` if this is not a list.
    pub fn list_tag(&self) -> Option<Tag> {
        match self {
            Value::List(items) => Some(items.first().map_or(Tag::End, Value::tag)),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&CompoundMap> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    /// Look up a child of a compound by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_compound().and_then(|c| c.get(key))
    }
}

impl std::ops::Index<&str> for Value {
    type Output = Value;

    /// Panics if this is not a compound or the key is missing, like indexing a
    /// map directly.
    fn index(&self, key: &str) -> &Value {
        match self.get(key) {
            Some(v) => v,
            None => panic!("no key {:?} in nbt value", key),
        }
    }
}

#[cfg(feature = "arbitrary1")]
fn het_list<'a, T, F>(u: &mut arbitrary::Unstructured<'a>, f: F) -> arbitrary::Result<Vec<Value>>
where
    F: FnMut(T) -> Value,
    T: arbitrary::Arbitrary<'a>,
{
    Ok(u.arbitrary_iter::<T>()?
        .collect::<arbitrary::Result<Vec<_>>>()?
        .into_iter()
        .map(f)
        .collect())
}

#[cfg(feature = "arbitrary1")]
fn arb_compound(u: &mut arbitrary::Unstructured) -> arbitrary::Result<CompoundMap> {
    let len = u.arbitrary_len::<(String, u8)>()?;
    let mut map = CompoundMap::with_capacity(len);
    for _ in 0..len {
        map.insert(u.arbitrary()?, u.arbitrary()?);
    }
    Ok(map)
}

#[cfg(feature = "arbitrary1")]
fn arb_list(u: &mut arbitrary::Unstructured) -> arbitrary::Result<Vec<Value>> {
    use Value::*;

    Ok(match u.arbitrary::<Tag>()? {
        Tag::End => vec![],
        Tag::Byte => het_list(u, Byte)?,
        Tag::Short => het_list(u, Short)?,
        Tag::Int => het_list(u, Int)?,
        Tag::Long => het_list(u, Long)?,
        Tag::Float => het_list(u, Float)?,
        Tag::Double => het_list(u, Double)?,
        Tag::ByteArray => het_list(u, ByteArray)?,
        Tag::String => het_list(u, String)?,
        Tag::IntArray => het_list(u, IntArray)?,
        Tag::LongArray => het_list(u, LongArray)?,
        Tag::List => {
            let len = u.arbitrary_len::<u8>()?;
            let mut v = vec![];
            for _ in 0..len {
                v.push(List(arb_list(u)?));
            }
            v
        }
        Tag::Compound => {
            let len = u.arbitrary_len::<u8>()?;
            let mut v = vec![];
            for _ in 0..len {
                v.push(Compound(arb_compound(u)?));
            }
            v
        }
    })
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Value {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        use Value::*;

        Ok(match u.arbitrary::<Tag>()? {
            Tag::End => return Err(arbitrary::Error::IncorrectFormat),
            Tag::Byte => Byte(u.arbitrary()?),
            Tag::Short => Short(u.arbitrary()?),
            Tag::Int => Int(u.arbitrary()?),
            Tag::Long => Long(u.arbitrary()?),
            Tag::Float => Float(u.arbitrary()?),
            Tag::Double => Double(u.arbitrary()?),
            Tag::ByteArray => ByteArray(u.arbitrary()?),
            Tag::String => String(u.arbitrary()?),
            Tag::IntArray => IntArray(u.arbitrary()?),
            Tag::LongArray => LongArray(u.arbitrary()?),
            Tag::Compound => Compound(arb_compound(u)?),

            // Lists need to all be the same type.
            Tag::List => List(arb_list(u)?),
        })
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Value {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(LongArray, LongArray);
from!(Vec<Value>, List);
from!(CompoundMap, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

// ------------- PartialEq with primitives -------------

fn eq_i64(value: &Value, other: i64) -> bool {
    value.as_i64().map_or(false, |i| i == other)
}

fn eq_f64(value: &Value, other: f64) -> bool {
    value.as_f64().map_or(false, |i| i == other)
}

fn eq_str(value: &Value, other: &str) -> bool {
    value.as_str().map_or(false, |i| i == other)
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        eq_str(self, other)
    }
}

impl<'a> PartialEq<&'a str> for Value {
    fn eq(&self, other: &&str) -> bool {
        eq_str(self, other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        eq_str(self, other.as_str())
    }
}

macro_rules! partialeq_numeric {
    ($($eq:ident [$($ty:ty)*])*) => {
        $($(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    $eq(self, *other as _)
                }
            }

            impl PartialEq<Value> for $ty {
                fn eq(&self, other: &Value) -> bool {
                    $eq(other, *self as _)
                }
            }
        )*)*
    }
}

partialeq_numeric! {
    eq_i64[i8 i16 i32 i64]
    eq_f64[f32 f64]
}
