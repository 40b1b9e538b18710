//! MemberId - Discord snowflake identifying a chat-platform member
//!
//! Structure:
//! - Bits 63-22: Timestamp (milliseconds since the Discord epoch)
//! - Bits 21-17: Worker ID
//! - Bits 16-12: Process ID
//! - Bits 11-0:  Increment

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Discord member ID (64-bit snowflake)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MemberId(i64);

impl MemberId {
    /// Discord epoch: 2015-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_420_070_400_000;

    /// Create a new MemberId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Extract timestamp (milliseconds since Unix epoch)
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> 22) + Self::EPOCH
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, MemberIdParseError> {
        match s.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(MemberId(id)),
            _ => Err(MemberIdParseError::InvalidFormat),
        }
    }
}

/// Error when parsing a MemberId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MemberIdParseError {
    #[error("invalid member id format")]
    InvalidFormat,
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MemberId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<MemberId> for i64 {
    fn from(id: MemberId) -> Self {
        id.0
    }
}

impl std::str::FromStr for MemberId {
    type Err = MemberIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MemberId::parse(s)
    }
}

// Serialize as string for JSON (JavaScript BigInt safety)
impl Serialize for MemberId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for MemberId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct MemberIdVisitor;

        impl Visitor<'_> for MemberIdVisitor {
            type Value = MemberId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer representing a Discord member ID")
            }

            fn visit_i64<E>(self, value: i64) -> Result<MemberId, E>
            where
                E: de::Error,
            {
                Ok(MemberId(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<MemberId, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(MemberId)
                    .map_err(|_| de::Error::custom("member id out of range"))
            }

            fn visit_str<E>(self, value: &str) -> Result<MemberId, E>
            where
                E: de::Error,
            {
                value
                    .parse::<i64>()
                    .map(MemberId)
                    .map_err(|_| de::Error::custom("invalid member id string"))
            }
        }

        deserializer.deserialize_any(MemberIdVisitor)
    }
}
