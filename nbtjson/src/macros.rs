// Follows the shape of serde_json's `json!` macro, trimmed down for NBT.
// https://github.com/serde-rs/json/blob/829175e6069fb16672875f125f6afdd7c6da1dec/src/macros.rs
//
// serde_json is MIT licensed.

/// Produce a [`Value`][`crate::Value`] using JSON/SNBT-like syntax.
///
/// ```rust
/// use nbtjson::nbt;
/// let _ = nbt!({
///     "key1": "value1",
///     "key2": 42,
///     "key3": [4, 2],
/// });
/// ```
///
/// Compound keys need quoted strings. Compounds keep the order the keys are
/// written in. Leaf expressions go through `Value::from`, so integer literals
/// default to `Int` and float literals to `Double`; use suffixes such as
/// `1i8` or `0.5f32` for other kinds.
///
/// NBT arrays use SNBT syntax:
///
/// ```rust
/// # use nbtjson::nbt;
/// let _ = nbt!({
///     "bytes": [B; 1, 2, 3],
///     "ints": [I; 1, 2, 3],
///     "longs": [L; 1, 2, 3],
/// });
/// ```
#[macro_export(local_inner_macros)]
macro_rules! nbt {
    ($($nbt:tt)+) => {
        nbt_internal!($($nbt)+)
    };
}

#[macro_export(local_inner_macros)]
#[doc(hidden)]
macro_rules! nbt_internal {
    // Lists: munch one element at a time into $elems.
    (@list [$($elems:expr,)*]) => {
        nbt_internal_vec![$($elems,)*]
    };

    (@list [$($elems:expr),*]) => {
        nbt_internal_vec![$($elems),*]
    };

    (@list [$($elems:expr,)*] [$($list:tt)*] $($rest:tt)*) => {
        nbt_internal!(@list [$($elems,)* nbt_internal!([$($list)*])] $($rest)*)
    };

    (@list [$($elems:expr,)*] {$($map:tt)*} $($rest:tt)*) => {
        nbt_internal!(@list [$($elems,)* nbt_internal!({$($map)*})] $($rest)*)
    };

    (@list [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        nbt_internal!(@list [$($elems,)* nbt_internal!($next),] $($rest)*)
    };

    (@list [$($elems:expr,)*] $last:expr) => {
        nbt_internal!(@list [$($elems,)* nbt_internal!($last)])
    };

    (@list [$($elems:expr),*] , $($rest:tt)*) => {
        nbt_internal!(@list [$($elems,)*] $($rest)*)
    };

    // Compounds: $map is the map being filled, the first group collects the
    // key tokens, the second group is the input still to munch.
    (@compound $map:ident () ()) => {};

    (@compound $map:ident [$key:expr] ($value:expr) , $($rest:tt)*) => {
        let _ = $map.insert(::std::string::String::from($key), $value);
        nbt_internal!(@compound $map () ($($rest)*));
    };

    (@compound $map:ident [$key:expr] ($value:expr)) => {
        let _ = $map.insert(::std::string::String::from($key), $value);
    };

    (@compound $map:ident ($key:expr) (: [$($list:tt)*] $($rest:tt)*)) => {
        nbt_internal!(@compound $map [$key] (nbt_internal!([$($list)*])) $($rest)*);
    };

    (@compound $map:ident ($key:expr) (: {$($inner:tt)*} $($rest:tt)*)) => {
        nbt_internal!(@compound $map [$key] (nbt_internal!({$($inner)*})) $($rest)*);
    };

    (@compound $map:ident ($key:expr) (: $value:expr , $($rest:tt)*)) => {
        nbt_internal!(@compound $map [$key] (nbt_internal!($value)) , $($rest)*);
    };

    (@compound $map:ident ($key:expr) (: $value:expr)) => {
        nbt_internal!(@compound $map [$key] (nbt_internal!($value)));
    };

    (@compound $map:ident () ($key:literal $($rest:tt)*)) => {
        nbt_internal!(@compound $map ($key) ($($rest)*));
    };

    // Arrays.
    ([B; $($elems:expr),* $(,)?]) => {
        $crate::Value::ByteArray($crate::ByteArray::new(nbt_internal_vec![$($elems),*]))
    };

    ([I; $($elems:expr),* $(,)?]) => {
        $crate::Value::IntArray($crate::IntArray::new(nbt_internal_vec![$($elems),*]))
    };

    ([L; $($elems:expr),* $(,)?]) => {
        $crate::Value::LongArray($crate::LongArray::new(nbt_internal_vec![$($elems),*]))
    };

    ([]) => {
        $crate::Value::List(nbt_internal_vec![])
    };

    ([ $($tt:tt)+ ]) => {
        $crate::Value::List(nbt_internal!(@list [] $($tt)+))
    };

    ({}) => {
        $crate::Value::Compound($crate::CompoundMap::new())
    };

    ({ $($tt:tt)+ }) => {
        $crate::Value::Compound({
            let mut map = $crate::CompoundMap::new();
            nbt_internal!(@compound map () ($($tt)+));
            map
        })
    };

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

// The nbt_internal macro above cannot invoke vec directly because it uses
// local_inner_macros. A vec invocation there would resolve to $crate::vec.
#[macro_export]
#[doc(hidden)]
macro_rules! nbt_internal_vec {
    ($($content:tt)*) => {
        vec![$($content)*]
    };
}
