//! E.164 international telephone numbers

use crate::errors::{InvalidDataError, Result};
use crate::tbcd::Tbcd;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// ITU-T E.164 maximum number length
const MAX_DIGITS: usize = 15;

/// E.164 number, TBCD-packed, at most 15 digits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct E164 {
    tbcd: Tbcd,
}

impl E164 {
    /// Parse from a digit string.
    pub fn parse(s: &str) -> Result<Self> {
        let tbcd = Tbcd::parse(s)?;
        if tbcd.digit_count() > MAX_DIGITS {
            return Err(InvalidDataError::new("E164", s.as_bytes()));
        }
        Ok(Self { tbcd })
    }

    /// Decode from TBCD-packed bytes.
    pub fn from_bytes(b: &[u8]) -> Result<Self> {
        let tbcd = Tbcd::from_bytes(b)?;
        if tbcd.digit_count() > MAX_DIGITS {
            return Err(InvalidDataError::new("E164", b.to_vec()));
        }
        Ok(Self { tbcd })
    }

    /// Number of digits.
    pub fn digit_count(&self) -> usize {
        self.tbcd.digit_count()
    }

    /// True when no digits are held.
    pub fn is_empty(&self) -> bool {
        self.tbcd.is_empty()
    }

    /// Independent copy of the TBCD-packed octets.
    pub fn bytes(&self) -> Vec<u8> {
        self.tbcd.bytes()
    }
}

impl fmt::Display for E164 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tbcd, f)
    }
}

impl Serialize for E164 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.tbcd.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for E164 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Ok(Self::default());
        }
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifteen_digits_accepted() {
        let n = E164::parse("123456789012345").unwrap();
        assert_eq!(n.digit_count(), 15);
        assert_eq!(n.to_string(), "123456789012345");
    }

    #[test]
    fn test_sixteen_digits_rejected() {
        assert!(E164::parse("1234567890123456").is_err());
    }

    #[test]
    fn test_byte_decode_enforces_ceiling() {
        let fifteen = Tbcd::parse("123456789012345").unwrap().bytes();
        assert_eq!(E164::from_bytes(&fifteen).unwrap().digit_count(), 15);

        let sixteen = Tbcd::parse("1234567890123456").unwrap().bytes();
        assert!(E164::from_bytes(&sixteen).is_err());
    }

    #[test]
    fn test_byte_decode_validates_filler() {
        assert!(E164::from_bytes(&[0xF1, 0x23]).is_err());
    }

    #[test]
    fn test_bytes_round_trip() {
        let n = E164::parse("818012345678").unwrap();
        assert_eq!(E164::from_bytes(&n.bytes()).unwrap(), n);
    }

    #[test]
    fn test_json_round_trip() {
        let n = E164::parse("2348012345678").unwrap();
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, "\"2348012345678\"");
        let back: E164 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }

    #[test]
    fn test_json_empty_decodes_to_zero_value() {
        let n: E164 = serde_json::from_str("\"\"").unwrap();
        assert!(n.is_empty());
    }
}
