//! Tagged enumerations shared by the identifier types
//!
//! Each enumeration is a closed set of wire-byte values with a reserved
//! unknown/zero member. Byte decode is total so that composite wire
//! parsing stays resilient to tag values from newer protocol revisions;
//! keyword decode is partial, because unchecked text must never
//! silently become "unknown".

use crate::errors::{InvalidDataError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Numbering plan parameter for global titles (ITU-T / MAP assignment).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NumberingPlan {
    #[default]
    Unknown,
    /// ISDN/telephony (ITU-T E.163, E.164)
    Telephony,
    Generic,
    /// Data (ITU-T X.121)
    Data,
    /// Telex (ITU-T F.69)
    Telex,
    /// Maritime mobile (ITU-T E.210, E.211)
    Maritime,
    /// Land mobile (ITU-T E.212)
    LandMobile,
    /// ISDN/mobile (ITU-T E.214)
    IsdnMobile,
    National,
    Private,
    /// European radio messaging system
    Ermes,
    /// Internet IP
    Internal,
    NetworkSpecific,
    /// WAP client id
    Wap,
    /// Wire value outside the defined set, kept for display
    Undefined(u8),
}

impl NumberingPlan {
    /// Decode a wire byte. Total: unmapped values become `Undefined`.
    pub fn from_byte(v: u8) -> Self {
        match v {
            0x00 => Self::Unknown,
            0x01 => Self::Telephony,
            0x02 => Self::Generic,
            0x03 => Self::Data,
            0x04 => Self::Telex,
            0x05 => Self::Maritime,
            0x06 => Self::LandMobile,
            0x07 => Self::IsdnMobile,
            0x08 => Self::National,
            0x09 => Self::Private,
            0x0a => Self::Ermes,
            0x0d => Self::Internal,
            0x0e => Self::NetworkSpecific,
            0x12 => Self::Wap,
            other => Self::Undefined(other),
        }
    }

    /// Wire byte value
    pub fn byte(&self) -> u8 {
        match self {
            Self::Unknown => 0x00,
            Self::Telephony => 0x01,
            Self::Generic => 0x02,
            Self::Data => 0x03,
            Self::Telex => 0x04,
            Self::Maritime => 0x05,
            Self::LandMobile => 0x06,
            Self::IsdnMobile => 0x07,
            Self::National => 0x08,
            Self::Private => 0x09,
            Self::Ermes => 0x0a,
            Self::Internal => 0x0d,
            Self::NetworkSpecific => 0x0e,
            Self::Wap => 0x12,
            Self::Undefined(v) => *v,
        }
    }
}

impl fmt::Display for NumberingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown"),
            Self::Telephony => f.write_str("telephony"),
            Self::Generic => f.write_str("generic"),
            Self::Data => f.write_str("data"),
            Self::Telex => f.write_str("telex"),
            Self::Maritime => f.write_str("maritime"),
            Self::LandMobile => f.write_str("land_mobile"),
            Self::IsdnMobile => f.write_str("isdn_mobile"),
            Self::National => f.write_str("national"),
            Self::Private => f.write_str("private"),
            Self::Ermes => f.write_str("ermes"),
            Self::Internal => f.write_str("internal"),
            Self::NetworkSpecific => f.write_str("network_specific"),
            Self::Wap => f.write_str("wap"),
            Self::Undefined(v) => write!(f, "undefined({v})"),
        }
    }
}

impl FromStr for NumberingPlan {
    type Err = InvalidDataError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "unknown" => Self::Unknown,
            "telephony" => Self::Telephony,
            "generic" => Self::Generic,
            "data" => Self::Data,
            "telex" => Self::Telex,
            "maritime" => Self::Maritime,
            "land_mobile" => Self::LandMobile,
            "isdn_mobile" => Self::IsdnMobile,
            "national" => Self::National,
            "private" => Self::Private,
            "ermes" => Self::Ermes,
            "internal" => Self::Internal,
            "network_specific" => Self::NetworkSpecific,
            "wap" => Self::Wap,
            _ => return Err(InvalidDataError::new("NumberingPlan", s.as_bytes())),
        })
    }
}

/// Nature of address parameter for global titles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NatureOfAddress {
    #[default]
    Unknown,
    International,
    /// National significant number
    National,
    /// Reserved for national use (network specific in MAP)
    NetworkSpecific,
    Subscriber,
    Alphanumeric,
    /// Abbreviated (speed dial) number
    Abbreviated,
    /// Wire value outside the defined set, kept for display
    Undefined(u8),
}

impl NatureOfAddress {
    /// Decode a wire byte. Total: unmapped values become `Undefined`.
    pub fn from_byte(v: u8) -> Self {
        match v {
            0x00 => Self::Unknown,
            0x01 => Self::International,
            0x02 => Self::National,
            0x03 => Self::NetworkSpecific,
            0x04 => Self::Subscriber,
            0x05 => Self::Alphanumeric,
            0x06 => Self::Abbreviated,
            other => Self::Undefined(other),
        }
    }

    /// Wire byte value
    pub fn byte(&self) -> u8 {
        match self {
            Self::Unknown => 0x00,
            Self::International => 0x01,
            Self::National => 0x02,
            Self::NetworkSpecific => 0x03,
            Self::Subscriber => 0x04,
            Self::Alphanumeric => 0x05,
            Self::Abbreviated => 0x06,
            Self::Undefined(v) => *v,
        }
    }
}

impl fmt::Display for NatureOfAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown"),
            Self::International => f.write_str("international"),
            Self::National => f.write_str("national"),
            Self::NetworkSpecific => f.write_str("network_specific"),
            Self::Subscriber => f.write_str("subscriber"),
            Self::Alphanumeric => f.write_str("alphanumeric"),
            Self::Abbreviated => f.write_str("abbreviated"),
            Self::Undefined(v) => write!(f, "undefined({v})"),
        }
    }
}

impl FromStr for NatureOfAddress {
    type Err = InvalidDataError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "unknown" => Self::Unknown,
            "international" => Self::International,
            "national" => Self::National,
            "network_specific" => Self::NetworkSpecific,
            "subscriber" => Self::Subscriber,
            "alphanumeric" => Self::Alphanumeric,
            "abbreviated" => Self::Abbreviated,
            _ => return Err(InvalidDataError::new("NatureOfAddress", s.as_bytes())),
        })
    }
}

/// Subsystem number: the protocol subsystem addressed within SCCP
/// routing. Wire values are the Q.713 assignments, not the variant
/// order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SubsystemNumber {
    #[default]
    Unknown,
    Mgmt,
    Hlr,
    Vlr,
    Msc,
    Eir,
}

impl SubsystemNumber {
    /// Q.713 wire value
    pub fn wire(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Mgmt => 1,
            Self::Hlr => 6,
            Self::Vlr => 7,
            Self::Msc => 8,
            Self::Eir => 9,
        }
    }

    /// Decode a wire value. Total: unmapped values become `Unknown`.
    pub fn from_wire(v: u8) -> Self {
        match v {
            1 => Self::Mgmt,
            6 => Self::Hlr,
            7 => Self::Vlr,
            8 => Self::Msc,
            9 => Self::Eir,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for SubsystemNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unknown => "unknown",
            Self::Mgmt => "mgmt",
            Self::Hlr => "hlr",
            Self::Vlr => "vlr",
            Self::Msc => "msc",
            Self::Eir => "eir",
        })
    }
}

impl FromStr for SubsystemNumber {
    type Err = InvalidDataError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "unknown" => Self::Unknown,
            "mgmt" => Self::Mgmt,
            "hlr" => Self::Hlr,
            "vlr" => Self::Vlr,
            "msc" => Self::Msc,
            "eir" => Self::Eir,
            _ => return Err(InvalidDataError::new("SubsystemNumber", s.as_bytes())),
        })
    }
}

macro_rules! keyword_serde {
    ($ty:ident) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                if s.is_empty() {
                    return Ok(Self::default());
                }
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

keyword_serde!(NumberingPlan);
keyword_serde!(NatureOfAddress);
keyword_serde!(SubsystemNumber);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_plan_byte_decode_is_total() {
        for v in 0..=255u8 {
            let np = NumberingPlan::from_byte(v);
            assert_eq!(np.byte(), v);
            if let NumberingPlan::Undefined(raw) = np {
                assert_eq!(np.to_string(), format!("undefined({raw})"));
            }
        }
    }

    #[test]
    fn test_numbering_plan_name_bijection() {
        let defined = [
            NumberingPlan::Unknown,
            NumberingPlan::Telephony,
            NumberingPlan::Generic,
            NumberingPlan::Data,
            NumberingPlan::Telex,
            NumberingPlan::Maritime,
            NumberingPlan::LandMobile,
            NumberingPlan::IsdnMobile,
            NumberingPlan::National,
            NumberingPlan::Private,
            NumberingPlan::Ermes,
            NumberingPlan::Internal,
            NumberingPlan::NetworkSpecific,
            NumberingPlan::Wap,
        ];
        for np in defined {
            assert_eq!(np.to_string().parse::<NumberingPlan>().unwrap(), np);
            assert_eq!(NumberingPlan::from_byte(np.byte()), np);
        }
    }

    #[test]
    fn test_unrecognized_keyword_fails() {
        assert!("telefony".parse::<NumberingPlan>().is_err());
        assert!("undefined(11)".parse::<NumberingPlan>().is_err());
        assert!("intl".parse::<NatureOfAddress>().is_err());
        assert!("smsc".parse::<SubsystemNumber>().is_err());
    }

    #[test]
    fn test_nature_of_address_round_trip() {
        for v in 0..=255u8 {
            assert_eq!(NatureOfAddress::from_byte(v).byte(), v);
        }
        assert_eq!(
            "international".parse::<NatureOfAddress>().unwrap(),
            NatureOfAddress::International
        );
    }

    #[test]
    fn test_ssn_wire_values() {
        assert_eq!(SubsystemNumber::Hlr.wire(), 6);
        assert_eq!(SubsystemNumber::from_wire(6), SubsystemNumber::Hlr);
        assert_eq!(SubsystemNumber::from_wire(8), SubsystemNumber::Msc);
        // unmapped wire values fall back to the zero member
        assert_eq!(SubsystemNumber::from_wire(147), SubsystemNumber::Unknown);
        assert_eq!(SubsystemNumber::from_wire(0), SubsystemNumber::Unknown);
    }

    #[test]
    fn test_ssn_json() {
        let json = serde_json::to_string(&SubsystemNumber::Vlr).unwrap();
        assert_eq!(json, "\"vlr\"");
        let back: SubsystemNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SubsystemNumber::Vlr);
        let empty: SubsystemNumber = serde_json::from_str("\"\"").unwrap();
        assert_eq!(empty, SubsystemNumber::Unknown);
    }
}
