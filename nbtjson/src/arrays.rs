use std::ops::Deref;

macro_rules! nbt_array {
    ($(#[$doc:meta])* $name:ident, $elem:ty) => {
        $(#[$doc])*
        #[derive(Debug, Default, Clone, PartialEq)]
        #[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
        pub struct $name {
            data: Vec<$elem>,
        }

        impl $name {
            pub fn new(data: Vec<$elem>) -> Self {
                Self { data }
            }

            /// Get the underlying vector of elements.
            pub fn into_inner(self) -> Vec<$elem> {
                self.data
            }
        }

        impl Deref for $name {
            type Target = Vec<$elem>;

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(data: Vec<$elem>) -> Self {
                Self::new(data)
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                Self::new(iter.into_iter().collect())
            }
        }
    };
}

nbt_array!(
    /// NBT ByteArray. Kept apart from a list of bytes so the distinction
    /// survives a round trip.
    ByteArray,
    i8
);

nbt_array!(
    /// NBT IntArray.
    IntArray,
    i32
);

nbt_array!(
    /// NBT LongArray.
    LongArray,
    i64
);
