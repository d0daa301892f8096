//! Mapping between a [`Document`] and its JSON text form.
//!
//! Every tag is written as an object carrying its type name and its value:
//!
//! ```json
//! {
//!   "type": "compound",
//!   "name": "",
//!   "value": {
//!     "health": { "type": "short", "value": 20 },
//!     "seed": { "type": "long", "value": [0, 42] },
//!     "pos": { "type": "list", "value": { "type": "double", "value": [1.5, 64.0, -3.5] } }
//!   }
//! }
//! ```
//!
//! * Compound values are objects from child name to `{type, value}`.
//! * List values are `{type, value}` where `type` is the element type and
//!   `value` an array of bare element payloads. Empty lists have element type
//!   `"end"`.
//! * Longs are written as `[high, low]` pairs of signed 32-bit halves, so
//!   readers that treat every number as a double lose nothing. A plain integer
//!   or a decimal string is accepted when reading.
//! * Floats that are not finite are written as `null` and read back as NaN.
//!
//! ```
//! use nbtjson::{json, nbt, Document};
//!
//! let doc = Document::new("", nbt!({ "seed": 42i64 }));
//! let text = json::to_string_pretty(&doc).unwrap();
//! assert_eq!(json::from_str(&text).unwrap(), doc);
//! ```
use serde_json::{json, Map, Number, Value as Json};

use crate::error::{Error, Result};
use crate::{ByteArray, CompoundMap, Document, IntArray, LongArray, Tag, Value};

/// Convert a document to its JSON form.
pub fn to_json(doc: &Document) -> Json {
    json!({
        "type": doc.value.tag().name(),
        "name": doc.name,
        "value": payload(&doc.value),
    })
}

/// Pretty JSON text with two space indentation.
pub fn to_string_pretty(doc: &Document) -> Result<String> {
    serde_json::to_string_pretty(&to_json(doc)).map_err(|e| Error::text(e.to_string()))
}

/// Build a document from its JSON form. A missing root `name` is taken as the
/// empty string.
pub fn from_json(json: &Json) -> Result<Document> {
    let path = "$";
    let obj = json
        .as_object()
        .ok_or_else(|| Error::text(format!("{}: expected an object", path)))?;

    let tag = type_of(obj, path)?;
    let name = match obj.get("name") {
        None | Some(Json::Null) => String::new(),
        Some(Json::String(s)) => s.clone(),
        Some(_) => return Err(Error::text(format!("{}.name: expected a string", path))),
    };
    let value = field(obj, "value", path)?;

    Ok(Document {
        name,
        value: value_from(tag, value, &format!("{}.value", path))?,
    })
}

/// Parse JSON text and build a document from it.
pub fn from_str(s: &str) -> Result<Document> {
    let json: Json = serde_json::from_str(s).map_err(|e| Error::text(e.to_string()))?;
    from_json(&json)
}

fn payload(value: &Value) -> Json {
    match value {
        Value::Byte(v) => json!(v),
        Value::Short(v) => json!(v),
        Value::Int(v) => json!(v),
        Value::Long(v) => long_to_json(*v),
        Value::Float(v) => float_to_json(*v as f64),
        Value::Double(v) => float_to_json(*v),
        Value::String(v) => json!(v),
        Value::ByteArray(v) => json!(v.as_slice()),
        Value::IntArray(v) => json!(v.as_slice()),
        Value::LongArray(v) => Json::Array(v.iter().map(|l| long_to_json(*l)).collect()),
        Value::List(items) => json!({
            "type": value.list_tag().unwrap_or(Tag::End).name(),
            "value": items.iter().map(payload).collect::<Vec<_>>(),
        }),
        Value::Compound(map) => Json::Object(
            map.iter()
                .map(|(k, v)| {
                    (
                        k.clone(),
                        json!({
                            "type": v.tag().name(),
                            "value": payload(v),
                        }),
                    )
                })
                .collect(),
        ),
    }
}

fn long_to_json(v: i64) -> Json {
    json!([(v >> 32) as i32, v as i32])
}

fn float_to_json(v: f64) -> Json {
    Number::from_f64(v).map_or(Json::Null, Json::Number)
}

fn field<'a>(obj: &'a Map<String, Json>, key: &str, path: &str) -> Result<&'a Json> {
    obj.get(key)
        .ok_or_else(|| Error::text(format!("{}: missing field {:?}", path, key)))
}

fn type_of(obj: &Map<String, Json>, path: &str) -> Result<Tag> {
    let ty = field(obj, "type", path)?
        .as_str()
        .ok_or_else(|| Error::text(format!("{}.type: expected a string", path)))?;
    ty.parse()
        .map_err(|e: Error| Error::text(format!("{}.type: {}", path, detail(e))))
}

fn detail(e: Error) -> String {
    match e {
        Error::Text { detail } => detail,
        other => other.to_string(),
    }
}

fn value_from(tag: Tag, json: &Json, path: &str) -> Result<Value> {
    Ok(match tag {
        Tag::Byte => Value::Byte(int(json, path)?),
        Tag::Short => Value::Short(int(json, path)?),
        Tag::Int => Value::Int(int(json, path)?),
        Tag::Long => Value::Long(long(json, path)?),
        Tag::Float => Value::Float(float(json, path)? as f32),
        Tag::Double => Value::Double(float(json, path)?),
        Tag::String => Value::String(
            json.as_str()
                .ok_or_else(|| Error::text(format!("{}: expected a string", path)))?
                .to_owned(),
        ),
        Tag::ByteArray => Value::ByteArray(
            array(json, path)?
                .iter()
                .enumerate()
                .map(|(i, v)| int::<i8>(v, &format!("{}[{}]", path, i)))
                .collect::<Result<ByteArray>>()?,
        ),
        Tag::IntArray => Value::IntArray(
            array(json, path)?
                .iter()
                .enumerate()
                .map(|(i, v)| int::<i32>(v, &format!("{}[{}]", path, i)))
                .collect::<Result<IntArray>>()?,
        ),
        Tag::LongArray => Value::LongArray(
            array(json, path)?
                .iter()
                .enumerate()
                .map(|(i, v)| long(v, &format!("{}[{}]", path, i)))
                .collect::<Result<LongArray>>()?,
        ),
        Tag::List => {
            let obj = json
                .as_object()
                .ok_or_else(|| Error::text(format!("{}: expected a list object", path)))?;
            let element_tag = type_of(obj, path)?;
            let items = array(field(obj, "value", path)?, &format!("{}.value", path))?;

            if element_tag == Tag::End && !items.is_empty() {
                return Err(Error::text(format!(
                    "{}: list of type end must be empty",
                    path
                )));
            }

            Value::List(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| value_from(element_tag, v, &format!("{}.value[{}]", path, i)))
                    .collect::<Result<Vec<_>>>()?,
            )
        }
        Tag::Compound => {
            let obj = json
                .as_object()
                .ok_or_else(|| Error::text(format!("{}: expected an object", path)))?;
            let mut map = CompoundMap::with_capacity(obj.len());
            for (name, child) in obj {
                let child_path = format!("{}.{}", path, name);
                let child = child
                    .as_object()
                    .ok_or_else(|| Error::text(format!("{}: expected an object", child_path)))?;
                let tag = type_of(child, &child_path)?;
                let value = field(child, "value", &child_path)?;
                map.insert(
                    name.clone(),
                    value_from(tag, value, &format!("{}.value", child_path))?,
                );
            }
            Value::Compound(map)
        }
        Tag::End => return Err(Error::text(format!("{}: end is not a value type", path))),
    })
}

fn array<'a>(json: &'a Json, path: &str) -> Result<&'a Vec<Json>> {
    json.as_array()
        .ok_or_else(|| Error::text(format!("{}: expected an array", path)))
}

fn int<T: TryFrom<i64>>(json: &Json, path: &str) -> Result<T> {
    let v = json
        .as_i64()
        .ok_or_else(|| Error::text(format!("{}: expected an integer", path)))?;
    T::try_from(v).map_err(|_| Error::text(format!("{}: {} is out of range", path, v)))
}

fn float(json: &Json, path: &str) -> Result<f64> {
    match json {
        Json::Null => Ok(f64::NAN),
        _ => json
            .as_f64()
            .ok_or_else(|| Error::text(format!("{}: expected a number", path))),
    }
}

fn long(json: &Json, path: &str) -> Result<i64> {
    match json {
        Json::Array(pair) if pair.len() == 2 => {
            let hi: i32 = int(&pair[0], &format!("{}[0]", path))?;
            // The low half is the raw bits, so accept it signed or unsigned.
            let lo = pair[1]
                .as_i64()
                .filter(|lo| (i32::MIN as i64..=u32::MAX as i64).contains(lo))
                .ok_or_else(|| Error::text(format!("{}[1]: expected a 32-bit integer", path)))?;
            Ok(((hi as i64) << 32) | (lo as u32 as i64))
        }
        Json::String(s) => s
            .parse()
            .map_err(|_| Error::text(format!("{}: {:?} is not a long", path, s))),
        _ => json
            .as_i64()
            .ok_or_else(|| Error::text(format!("{}: expected a long", path))),
    }
}
