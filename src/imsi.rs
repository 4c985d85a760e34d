//! IMSI subscriber identities (ITU-T E.212)
//!
//! Stored as the digit string rather than packed bytes: the length
//! rule is 5 to 15 characters and the MCC/MNC accessors are character
//! slices, so the text form is the natural representation. The packed
//! projection is derived on demand.

use crate::errors::{InvalidDataError, Result};
use crate::tbcd::Tbcd;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// International Mobile Subscriber Identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Imsi(String);

impl Imsi {
    /// Parse from a digit string: ASCII digits only, 5 to 15 of them.
    pub fn parse(s: &str) -> Result<Self> {
        if !s.bytes().all(|b| b.is_ascii_digit()) || s.len() < 5 || s.len() > 15 {
            return Err(InvalidDataError::new("IMSI", s.as_bytes()));
        }
        Ok(Self(s.to_owned()))
    }

    /// Decode from TBCD-packed bytes. Renders through the TBCD codec
    /// and re-validates as text, so malformed packed input and
    /// malformed text share one validation path.
    pub fn from_bytes(b: &[u8]) -> Result<Self> {
        let tbcd = Tbcd::from_bytes(b)?;
        if tbcd.is_empty() {
            return Err(InvalidDataError::new("IMSI", b.to_vec()));
        }
        Self::parse(&tbcd.to_string())
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for the interchange zero value; a parsed IMSI always
    /// has at least 5 digits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Mobile country code: the first 3 digits, `""` if too short.
    pub fn mcc(&self) -> &str {
        self.0.get(0..3).unwrap_or("")
    }

    /// 2-digit mobile network code, `""` if too short.
    pub fn mnc2(&self) -> &str {
        self.0.get(3..5).unwrap_or("")
    }

    /// 3-digit mobile network code, `""` if too short.
    pub fn mnc3(&self) -> &str {
        self.0.get(3..6).unwrap_or("")
    }

    /// TBCD-packed projection of the digit string.
    pub fn tbcd(&self) -> Tbcd {
        // digits were validated at construction, so this cannot fail
        Tbcd::parse(&self.0).unwrap_or_default()
    }

    /// Independent copy of the TBCD-packed octets.
    pub fn bytes(&self) -> Vec<u8> {
        self.tbcd().bytes()
    }
}

impl fmt::Display for Imsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Imsi {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Imsi {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Ok(Self::default());
        }
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
