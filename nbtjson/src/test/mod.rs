use std::convert::TryFrom;

use crate::{Tag, Variant};

mod macros;
mod ser;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
            assert_eq!(Tag::try_from($val as u8), Ok(Tag::$tag));
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        assert!(Tag::try_from(value).is_err())
    }
}

#[test]
fn tag_names_parse_back() {
    for value in 0..=12u8 {
        let tag = Tag::try_from(value).unwrap();
        assert_eq!(tag.name().parse::<Tag>().unwrap(), tag);
    }
    assert!("Compound".parse::<Tag>().is_err());
}

#[test]
fn variant_spellings() {
    assert_eq!("big".parse::<Variant>().unwrap(), Variant::Big);
    assert_eq!("little".parse::<Variant>().unwrap(), Variant::Little);
    assert_eq!(
        "littleVariant".parse::<Variant>().unwrap(),
        Variant::LittleVariant
    );
    assert!("littleVarint".parse::<Variant>().is_err());
    assert_eq!(Variant::default(), Variant::Big);

    for v in Variant::ALL {
        assert_eq!(v.to_string().parse::<Variant>().unwrap(), v);
    }
}

#[test]
fn variant_serde_uses_cli_spelling() {
    let s = serde_json::to_string(&Variant::LittleVariant).unwrap();
    assert_eq!(s, "\"littleVariant\"");
    let v: Variant = serde_json::from_str("\"little\"").unwrap();
    assert_eq!(v, Variant::Little);
}
