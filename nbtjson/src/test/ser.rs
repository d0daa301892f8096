use super::builder::Builder;
use crate::error::{Error, Result};
use crate::{nbt, to_bytes, to_writer, CompoundMap, Document, Tag, Value, Variant};

fn root(value: Value) -> Document {
    Document::new("", value)
}

#[test]
fn empty_root_compound_big() -> Result<()> {
    let bs = to_bytes(&root(nbt!({})), Variant::Big)?;
    assert_eq!(bs, [0x0a, 0x00, 0x00, 0x00]);
    Ok(())
}

#[test]
fn empty_root_compound_every_variant() -> Result<()> {
    assert_eq!(
        to_bytes(&root(nbt!({})), Variant::Little)?,
        [0x0a, 0x00, 0x00, 0x00]
    );
    assert_eq!(
        to_bytes(&root(nbt!({})), Variant::LittleVariant)?,
        [0x0a, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
    Ok(())
}

#[test]
fn golden_big() -> Result<()> {
    let doc = Document::new(
        "hi",
        nbt!({
            "s": 258i16,
            "l": [1i8, 2i8],
        }),
    );

    #[rustfmt::skip]
    let expected = [
        0x0a, 0x00, 0x02, b'h', b'i',
        0x02, 0x00, 0x01, b's', 0x01, 0x02,
        0x09, 0x00, 0x01, b'l', 0x01, 0x00, 0x00, 0x00, 0x02, 0x01, 0x02,
        0x00,
    ];
    assert_eq!(to_bytes(&doc, Variant::Big)?, expected);
    Ok(())
}

#[test]
fn golden_little() -> Result<()> {
    let doc = Document::new(
        "hi",
        nbt!({
            "s": 258i16,
            "l": [1i8, 2i8],
        }),
    );

    #[rustfmt::skip]
    let expected = [
        0x0a, 0x02, 0x00, b'h', b'i',
        0x02, 0x01, 0x00, b's', 0x02, 0x01,
        0x09, 0x01, 0x00, b'l', 0x01, 0x00, 0x00, 0x00, 0x02, 0x01, 0x02,
        0x00,
    ];
    assert_eq!(to_bytes(&doc, Variant::Little)?, expected);
    Ok(())
}

#[test]
fn golden_little_variant() -> Result<()> {
    let doc = Document::new(
        "hi",
        nbt!({
            "str": "ab",
            "ints": [I; 1],
        }),
    );

    #[rustfmt::skip]
    let expected = [
        0x0a, 0x02, 0x00, 0x00, 0x00, b'h', b'i',
        0x08, 0x03, 0x00, 0x00, 0x00, b's', b't', b'r', 0x02, 0x00, 0x00, 0x00, b'a', b'b',
        0x0b, 0x04, 0x00, 0x00, 0x00, b'i', b'n', b't', b's', 0x00, 0x00, 0x00, 0x01,
        0x01, 0x00, 0x00, 0x00,
        0x00,
    ];
    assert_eq!(to_bytes(&doc, Variant::LittleVariant)?, expected);
    Ok(())
}

#[test]
fn matches_builder_for_every_kind() -> Result<()> {
    for v in Variant::ALL {
        let doc = root(nbt!({
            "b": 1i8,
            "s": -2i16,
            "i": 3,
            "l": -4i64,
            "f": 0.5f32,
            "d": 0.25,
            "str": "text",
            "ba": [B; 1, 2],
            "ia": [I; 3, 4],
            "la": [L; 5, 6],
            "list": ["a", "b"],
            "c": { "x": 1i8 },
        }));

        let expected = Builder::new(v)
            .start_compound("")
            .byte("b", 1)
            .short("s", -2)
            .int("i", 3)
            .long("l", -4)
            .float("f", 0.5)
            .double("d", 0.25)
            .string("str", "text")
            .byte_array("ba", &[1, 2])
            .int_array("ia", &[3, 4])
            .long_array("la", &[5, 6])
            .start_list("list", Tag::String, 2)
            .string_payload("a")
            .string_payload("b")
            .start_compound("c")
            .byte("x", 1)
            .end_compound()
            .end_compound()
            .build();

        assert_eq!(to_bytes(&doc, v)?, expected, "variant {}", v);
    }
    Ok(())
}

#[test]
fn empty_list_written_as_end() -> Result<()> {
    let bs = to_bytes(&root(nbt!({ "e": [] })), Variant::Big)?;
    let expected = Builder::new(Variant::Big)
        .start_compound("")
        .start_list("e", Tag::End, 0)
        .end_compound()
        .build();
    assert_eq!(bs, expected);
    Ok(())
}

#[test]
fn list_elements_are_unnamed() -> Result<()> {
    let bs = to_bytes(&root(nbt!({ "l": [{}, {}] })), Variant::Big)?;
    let expected = Builder::new(Variant::Big)
        .start_compound("")
        .start_list("l", Tag::Compound, 2)
        .start_anon_compound()
        .end_compound()
        .start_anon_compound()
        .end_compound()
        .end_compound()
        .build();
    assert_eq!(bs, expected);
    Ok(())
}

#[test]
fn heterogeneous_list_is_invalid() {
    let doc = root(nbt!({ "l": [1, "two"] }));
    let err = to_bytes(&doc, Variant::Big).unwrap_err();
    assert!(err.is_invalid_tree());
    match err {
        Error::InvalidTree { reason } => assert!(reason.contains("element 1")),
        _ => unreachable!(),
    }
}

#[test]
fn heterogeneous_nested_list_is_invalid() {
    let doc = root(nbt!({ "l": [[1], [[2]]] }));
    // Lists of lists may hold lists of different kinds, but inner lists must
    // still be homogeneous themselves.
    assert!(to_bytes(&doc, Variant::Big).is_ok());

    let doc = root(nbt!({ "l": [[1, 2i8]] }));
    assert!(to_bytes(&doc, Variant::Big).unwrap_err().is_invalid_tree());
}

#[test]
fn name_too_long_for_u16_prefix() {
    let long = "x".repeat(u16::MAX as usize + 1);
    let mut map = CompoundMap::new();
    map.insert(long.clone(), Value::Byte(0));
    let doc = Document::compound("", map);

    assert!(to_bytes(&doc, Variant::Big).unwrap_err().is_invalid_tree());
    assert!(to_bytes(&doc, Variant::Little).unwrap_err().is_invalid_tree());
    // The 32-bit prefix has room for it.
    assert!(to_bytes(&doc, Variant::LittleVariant).is_ok());

    let doc = root(Value::String(long));
    assert!(to_bytes(&doc, Variant::Big).unwrap_err().is_invalid_tree());
}

#[test]
fn longest_u16_string_is_fine() -> Result<()> {
    let doc = root(Value::String("x".repeat(u16::MAX as usize)));
    let bs = to_bytes(&doc, Variant::Big)?;
    assert_eq!(bs.len(), 1 + 2 + 2 + u16::MAX as usize);
    Ok(())
}

#[test]
fn writer_matches_bytes() -> Result<()> {
    let doc = root(nbt!({ "a": [L; 1, 2], "b": "c" }));
    let mut out = vec![];
    to_writer(&mut out, &doc, Variant::Little)?;
    assert_eq!(out, to_bytes(&doc, Variant::Little)?);
    Ok(())
}

#[test]
fn writer_errors_become_io() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "broken"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = to_writer(Broken, &root(nbt!({})), Variant::Big).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
