//! LMSI local mobile station identities
//!
//! Opaque 4-octet values with no digit semantics; any byte pattern is
//! legal. All zeros is the "no value" sentinel.

use crate::errors::{InvalidDataError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Local Mobile Station Identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Lmsi([u8; 4]);

impl Lmsi {
    /// Decode from exactly 4 octets.
    pub fn decode(b: &[u8]) -> Result<Self> {
        let octets: [u8; 4] = b
            .try_into()
            .map_err(|_| InvalidDataError::new("LMSI", b.to_vec()))?;
        Ok(Self(octets))
    }

    /// All-zero sentinel.
    pub fn is_empty(&self) -> bool {
        self.0 == [0; 4]
    }

    /// Independent copy of the octets.
    pub fn bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl fmt::Display for Lmsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl Serialize for Lmsi {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Lmsi {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Ok(Self::default());
        }
        let bytes = hex::decode(&s)
            .map_err(|_| InvalidDataError::new("LMSI", s.as_bytes()))
            .map_err(serde::de::Error::custom)?;
        Self::decode(&bytes).map_err(serde::de::Error::custom)
    }
}
