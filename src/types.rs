//! Type-safe metric values using the newtype pattern
//!
//! Counter values are wrapped in newtypes so packet counts and byte counts
//! in either direction cannot be mixed up at call sites. All wrappers
//! serialize transparently as their inner integer, keeping the snapshot
//! schema flat for downstream telemetry consumers.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Validation errors for identity types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("link id cannot be empty or whitespace")]
    EmptyLinkId,
}

/// Define a u64-based counter newtype with the standard operations
macro_rules! counter_type {
    (
        $(#[$meta:meta])*
        $name:ident, $noun:literal
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const ZERO: Self = Self(0);

            #[must_use]
            #[inline]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            #[must_use]
            #[inline]
            pub const fn get(self) -> u64 {
                self.0
            }

            #[must_use]
            #[inline]
            pub const fn saturating_sub(self, other: Self) -> Self {
                Self(self.0.saturating_sub(other.0))
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", self.0, $noun)
            }
        }
    };
}

counter_type! {
    /// Number of packets transmitted or received on a link
    PacketCount, "packets"
}

counter_type! {
    /// Bytes sent on a link (local → remote)
    BytesSent, "bytes"
}

counter_type! {
    /// Bytes received on a link (remote → local)
    BytesReceived, "bytes"
}

/// Opaque identity of one RPC connection/session
///
/// A label carried through into every snapshot unchanged; the only
/// invariant enforced at construction is that it is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LinkId(String);

impl LinkId {
    /// Create a new link id after validation
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyLinkId);
        }
        Ok(Self(id))
    }

    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LinkId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LinkId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for LinkId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packet_count_roundtrip() {
        let count = PacketCount::new(2);
        assert_eq!(count.get(), 2);
        assert_eq!(u64::from(count), 2);
        assert_eq!(PacketCount::from(2u64), count);
    }

    #[test]
    fn test_counter_saturating_sub() {
        let a = BytesSent::new(10);
        let b = BytesSent::new(25);
        assert_eq!(a.saturating_sub(b), BytesSent::ZERO);
        assert_eq!(b.saturating_sub(a).get(), 15);
    }

    #[test]
    fn test_counter_display() {
        assert_eq!(PacketCount::new(3).to_string(), "3 packets");
        assert_eq!(BytesReceived::new(150).to_string(), "150 bytes");
    }

    #[test]
    fn test_link_id_valid() {
        let id = LinkId::new("conn-7").unwrap();
        assert_eq!(id.as_str(), "conn-7");
        assert_eq!(id.to_string(), "conn-7");
    }

    #[test]
    fn test_link_id_rejects_empty() {
        assert_eq!(LinkId::new(""), Err(ValidationError::EmptyLinkId));
        assert_eq!(LinkId::new("   "), Err(ValidationError::EmptyLinkId));
    }

    #[test]
    fn test_link_id_try_from() {
        assert!(LinkId::try_from("rpc-1".to_string()).is_ok());
        assert!(LinkId::try_from(String::new()).is_err());
    }
}
