//! Strongly-typed identifier wrappers.
//!
//! Each entity kind gets its own newtype over `i64`, so a game id can never
//! be passed where a player id is expected. The API is inconsistent about
//! representation — identifiers arrive as JSON integers on some resources
//! and as strings of digits on others — so the shared decode logic accepts
//! both. The logic exists exactly once, in the `define_id!` macro.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire representation of an identifier: integer or numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from a raw integer.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the wrapped integer.
            #[must_use]
            pub const fn raw(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            /// Parses an optionally signed decimal string.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i64(self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                match RawId::deserialize(deserializer)? {
                    RawId::Int(value) => Ok(Self(value)),
                    RawId::Text(text) => text.parse::<i64>().map(Self).map_err(|e| {
                        serde::de::Error::custom(format!(
                            concat!("invalid ", stringify!($name), " string: {}"),
                            e
                        ))
                    }),
                }
            }
        }
    };
}

define_id! {
    /// Identifier of an NHL game.
    ///
    /// Game ids are 10-digit numbers shaped `YYYYTTNNNN`: season start year,
    /// game type (01 preseason, 02 regular, 03 playoffs, 04 all-star), and
    /// game number.
    GameId
}

define_id! {
    /// Identifier of an NHL player.
    PlayerId
}

define_id! {
    /// Identifier of an NHL team.
    TeamId
}

define_id! {
    /// Identifier of an NHL franchise (historical team lineage).
    FranchiseId
}

define_id! {
    /// Identifier of a play-by-play event within a game.
    EventId
}
