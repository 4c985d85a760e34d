//! TBCD (Telephony Binary Coded Decimal) digit codec
//!
//! TS 29.002 TBCD-STRING: digits from `0-9 * # a b c`, packed two per
//! octet. Bits 4321 of octet n encode digit 2n, bits 8765 encode digit
//! 2n+1, with 0xF as filler in the final high nibble when the digit
//! count is odd.

use crate::errors::{InvalidDataError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write};

/// Filler nibble, legal only in the high half of the last octet
const FILLER: u8 = 0x0f;

/// Packed TBCD digit string.
///
/// Owns its buffer; construction and extraction always copy, so the
/// value never aliases a caller's buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tbcd(Vec<u8>);

fn nibble(c: char) -> Option<u8> {
    Some(match c {
        '0'..='9' => c as u8 - b'0',
        '*' => 0x0a,
        '#' => 0x0b,
        'a' | 'A' => 0x0c,
        'b' | 'B' => 0x0d,
        'c' | 'C' => 0x0e,
        _ => return None,
    })
}

fn digit(n: u8) -> Option<char> {
    Some(match n {
        0x00..=0x09 => (b'0' + n) as char,
        0x0a => '*',
        0x0b => '#',
        0x0c => 'a',
        0x0d => 'b',
        0x0e => 'c',
        // filler contributes no character
        _ => return None,
    })
}

impl Tbcd {
    /// Parse a digit string into packed form.
    ///
    /// NUL is rejected: it is reserved internally as the filler
    /// sentinel when the digit count is odd.
    pub fn parse(s: &str) -> Result<Self> {
        if s.contains('\0') {
            return Err(InvalidDataError::new("TBCD", s.as_bytes()));
        }
        let count = s.chars().count();
        let mut packed = vec![0u8; count.div_ceil(2)];
        for (i, c) in s.chars().enumerate() {
            let v = nibble(c).ok_or_else(|| InvalidDataError::new("TBCD", s.as_bytes()))?;
            packed[i / 2] |= if i % 2 == 1 { v << 4 } else { v };
        }
        if count % 2 == 1 {
            packed[count / 2] |= FILLER << 4;
        }
        Ok(Self(packed))
    }

    /// Validate and copy a packed buffer.
    ///
    /// A filler nibble anywhere but the high half of the last octet is
    /// rejected: filler followed by more digits is meaningless.
    pub fn from_bytes(b: &[u8]) -> Result<Self> {
        if let Some((last, head)) = b.split_last() {
            for &octet in head {
                if octet & 0xf0 == 0xf0 || octet & 0x0f == 0x0f {
                    return Err(InvalidDataError::new("TBCD", b.to_vec()));
                }
            }
            if last & 0x0f == 0x0f {
                return Err(InvalidDataError::new("TBCD", b.to_vec()));
            }
        }
        Ok(Self(b.to_vec()))
    }

    /// Number of digits held, excluding any trailing filler.
    pub fn digit_count(&self) -> usize {
        let mut n = self.0.len() * 2;
        if let Some(last) = self.0.last() {
            if last & 0xf0 == 0xf0 {
                n -= 1;
            }
        }
        n
    }

    /// True when no digits are held.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Independent copy of the packed octets.
    pub fn bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl fmt::Display for Tbcd {
    /// Renders the digit string; the empty value renders as `"N/A"`.
    /// Callers needing a true round trip should check `is_empty` first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("N/A");
        }
        for &octet in &self.0 {
            for n in [octet & 0x0f, octet >> 4] {
                if let Some(c) = digit(n) {
                    f.write_char(c)?;
                }
            }
        }
        Ok(())
    }
}

impl Serialize for Tbcd {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.0.is_empty() {
            serializer.serialize_str("")
        } else {
            serializer.serialize_str(&self.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for Tbcd {
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
    fn test_parse_odd_digits() {
        let t = Tbcd::parse("123").unwrap();
        assert_eq!(t.bytes(), vec![0x21, 0xF3]);
        assert_eq!(t.digit_count(), 3);
        assert_eq!(t.to_string(), "123");
    }

    #[test]
    fn test_parse_even_digits() {
        let t = Tbcd::parse("1234567890").unwrap();
        assert_eq!(t.bytes(), vec![0x21, 0x43, 0x65, 0x87, 0x09]);
        assert_eq!(t.digit_count(), 10);
        assert_eq!(t.to_string(), "1234567890");
    }

    #[test]
    fn test_full_alphabet_round_trip() {
        for s in ["0123456789*#abc", "*#", "c", "9*9"] {
            assert_eq!(Tbcd::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_uppercase_folds_to_lowercase() {
        assert_eq!(Tbcd::parse("ABC").unwrap().to_string(), "abc");
    }

    #[test]
    fn test_invalid_character_rejected() {
        assert!(Tbcd::parse("12d").is_err());
        assert!(Tbcd::parse("+123").is_err());
    }

    #[test]
    fn test_embedded_nul_rejected() {
        assert!(Tbcd::parse("12\u{0}3").is_err());
    }

    #[test]
    fn test_from_bytes_round_trip() {
        let b = vec![0x21, 0x43, 0xF5];
        let t = Tbcd::from_bytes(&b).unwrap();
        assert_eq!(t.to_string(), "12345");
        assert_eq!(Tbcd::parse(&t.to_string()).unwrap().bytes(), b);
    }

    #[test]
    fn test_misplaced_filler_rejected() {
        // filler in a non-final octet, either nibble
        assert!(Tbcd::from_bytes(&[0x1F, 0x23]).is_err());
        assert!(Tbcd::from_bytes(&[0xF1, 0x23]).is_err());
        // filler in the last octet's low nibble
        assert!(Tbcd::from_bytes(&[0x21, 0x3F]).is_err());
    }

    #[test]
    fn test_trailing_filler_accepted() {
        assert_eq!(Tbcd::from_bytes(&[0x21, 0xF3]).unwrap().digit_count(), 3);
    }

    #[test]
    fn test_empty_renders_sentinel() {
        let t = Tbcd::from_bytes(&[]).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.digit_count(), 0);
        assert_eq!(t.to_string(), "N/A");
    }

    #[test]
    fn test_bytes_are_independent() {
        let t = Tbcd::parse("1234").unwrap();
        let mut b = t.bytes();
        b[0] = 0xFF;
        assert_eq!(t.bytes(), vec![0x21, 0x43]);
    }

    #[test]
    fn test_json_round_trip() {
        let t = Tbcd::parse("123*#").unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"123*#\"");
        let back: Tbcd = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_json_empty_decodes_to_zero_value() {
        let t: Tbcd = serde_json::from_str("\"\"").unwrap();
        assert!(t.is_empty());
    }
}
