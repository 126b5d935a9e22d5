//! Shared value types for Atoll.
//!
//! This crate defines the vocabulary the placement engine speaks:
//! [`Token`] (a point on the circular keyspace, with wrap-safe distance
//! arithmetic), [`InstanceId`] (a replication endpoint) and [`ZoneId`]
//! (a fault domain grouping instances).
//!
//! All types are immutable values: cheap to clone, compared by content,
//! and safe to share across threads.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A point on the circular keyspace `[0, 2^32)`.
///
/// The ring modulus is the full `u32` range, so every circular operation
/// reduces to wrapping arithmetic: there is no representable value outside
/// the keyspace.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Token(u32);

impl Token {
    /// The largest representable token, `2^32 - 1`.
    pub const MAX: Token = Token(u32::MAX);

    /// Create a token from its position on the ring.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Return the raw ring position.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Clockwise distance from `self` to `other`.
    ///
    /// This is `other - self` modulo the ring size: `other - self` when
    /// `other >= self`, and `(2^32 - self) + other` when the walk crosses
    /// the ring origin. `distance(a, a)` is 0.
    ///
    /// Every comparison between ring positions must go through this method;
    /// ordering tokens with `<`/`>` is meaningless across the wrap point.
    pub const fn distance(self, other: Token) -> u32 {
        other.0.wrapping_sub(self.0)
    }
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

// ---------------------------------------------------------------------------
// Identifier types
// ---------------------------------------------------------------------------

macro_rules! define_label {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_label!(
    /// Opaque identifier for a replication endpoint.
    ///
    /// An instance may own many tokens on the ring. Instances are compared
    /// by equality only; the engine attaches no meaning to the contents.
    InstanceId
);

define_label!(
    /// Opaque identifier for a fault domain.
    ///
    /// Each instance belongs to exactly one zone. Zone-aware placement
    /// spreads replicas across distinct zones.
    ZoneId
);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
