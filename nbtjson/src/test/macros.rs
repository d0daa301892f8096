use crate::{nbt, ByteArray, CompoundMap, IntArray, LongArray, Value};

#[test]
fn leaves_and_arrays() {
    assert_eq!(nbt!(1_i8), Value::Byte(1));
    assert_eq!(nbt!(1_u8), Value::Byte(1));
    assert_eq!(nbt!(1_i16), Value::Short(1));
    assert_eq!(nbt!(1_u16), Value::Short(1));
    assert_eq!(nbt!(1), Value::Int(1));
    assert_eq!(nbt!(1_u32), Value::Int(1));
    assert_eq!(nbt!(1_i64), Value::Long(1));
    assert_eq!(nbt!(1_u64), Value::Long(1));
    assert_eq!(nbt!(1_f32), Value::Float(1.0));
    assert_eq!(nbt!(1.0), Value::Double(1.0));
    assert_eq!(nbt!(true), Value::Byte(1));
    assert_eq!(nbt!(false), Value::Byte(0));

    assert_eq!(nbt!("string"), Value::String("string".to_owned()));
    assert_eq!(
        nbt!("string".to_owned()),
        Value::String("string".to_owned())
    );

    assert_eq!(nbt!([]), Value::List(vec![]));
    assert_eq!(
        nbt!([1, 3]),
        Value::List(vec![Value::Int(1), Value::Int(3)])
    );

    assert_eq!(nbt!({}), Value::Compound(CompoundMap::new()));
    assert_eq!(
        nbt!({
            "key1": "value1",
            "key2": 42,
            "key3": [4, 2],
        }),
        Value::Compound(CompoundMap::from_iter([
            ("key1".to_owned(), Value::String("value1".to_owned())),
            ("key2".to_owned(), Value::Int(42)),
            (
                "key3".to_owned(),
                Value::List(vec![Value::Int(4), Value::Int(2)])
            ),
        ]))
    );

    assert_eq!(nbt!([B;]), Value::ByteArray(ByteArray::new(vec![])));
    assert_eq!(nbt!([I;]), Value::IntArray(IntArray::new(vec![])));
    assert_eq!(nbt!([L;]), Value::LongArray(LongArray::new(vec![])));
    assert_eq!(
        nbt!([B; 1, 2, 3]),
        Value::ByteArray(ByteArray::new(vec![1, 2, 3]))
    );
    assert_eq!(
        nbt!([I;1,2,3]),
        Value::IntArray(IntArray::new(vec![1, 2, 3]))
    );
    assert_eq!(
        nbt!([L; 1, 2, 3,]),
        Value::LongArray(LongArray::new(vec![1, 2, 3]))
    );
}

#[test]
fn nested() {
    let value = nbt!({
        "list": [[1i8], [], [[2, 3]]],
        "compound": {
            "inner": { "x": -1 },
            "arr": [I; 5],
        },
        "compounds": [{ "a": 1 }, {}],
    });

    assert_eq!(value["list"].as_list().unwrap().len(), 3);
    assert_eq!(value["list"].as_list().unwrap()[2], nbt!([[2, 3]]));
    assert_eq!(value["compound"]["inner"]["x"], -1);
    assert_eq!(value["compound"]["arr"], nbt!([I; 5]));
    assert_eq!(value["compounds"].as_list().unwrap()[1], nbt!({}));
}

#[test]
fn keys_keep_written_order() {
    let value = nbt!({ "b": 1, "a": 2, "c": 3 });
    let keys: Vec<_> = value.as_compound().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["b", "a", "c"]);
}

#[test]
fn expressions_as_values() {
    let name = String::from("steve");
    let health = 20i16;
    assert_eq!(
        nbt!({ "name": name.clone(), "health": health * 2, "max": i32::MAX }),
        Value::Compound(CompoundMap::from_iter([
            ("name".to_owned(), Value::String(name)),
            ("health".to_owned(), Value::Short(40)),
            ("max".to_owned(), Value::Int(i32::MAX)),
        ]))
    );
}
