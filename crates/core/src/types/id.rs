//! Newtype IDs for type-safe entity references.
//!
//! The backend serves primary keys as integers, but seed data and some
//! serializers emit them as numeric strings. Every ID type accepts both
//! forms on input and always writes a plain integer.

use serde::{Deserialize, Deserializer, de::Error as _};

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize` as a plain integer
/// - `Deserialize` from an integer or a numeric string
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Display`, `FromStr`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use shopfront_core::define_id;
/// define_id!(CouponId);
///
/// let id: CouponId = serde_json::from_str("\"7\"").unwrap();
/// assert_eq!(id, CouponId::new(7));
/// assert_eq!(serde_json::to_string(&id).unwrap(), "7");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::types::id::deserialize_raw_id(deserializer).map(Self)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse::<i32>().map(Self)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

/// Deserialize an integer primary key that may arrive as a number or a
/// numeric string.
///
/// Used by [`define_id!`]; not meant to be called directly.
///
/// # Errors
///
/// Returns an error if the value is neither an integer nor a string holding one.
#[doc(hidden)]
pub fn deserialize_raw_id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i32),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid id: {text:?}"))),
    }
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(ReviewId);
define_id!(OrderId);
define_id!(OrderItemId);
define_id!(UserId);
