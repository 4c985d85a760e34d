//! SCCP Global Title addressing

use crate::errors::{InvalidDataError, Result};
use crate::tbcd::Tbcd;
use crate::types::{NatureOfAddress, NumberingPlan};
use bytes::{BufMut, BytesMut};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Global Title: an SCCP routing address combining a nature-of-address
/// tag, a numbering-plan tag, and a TBCD digit field.
///
/// The three fields are the authoritative in-memory model; the packed
/// single-octet header form is an optional wire codec layered on top
/// (`encode`/`decode`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlobalTitle {
    /// Nature of address
    #[serde(default)]
    pub nature_of_address: NatureOfAddress,
    /// Numbering plan
    #[serde(default)]
    pub numbering_plan: NumberingPlan,
    /// Address digits
    #[serde(default)]
    pub digits: Tbcd,
}

impl GlobalTitle {
    /// True when the digit field holds no digits, whatever the tags.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Encode with the packed header: byte 0 is
    /// `0x80 | (nature_of_address << 4) | numbering_plan`, followed by
    /// the TBCD digit octets.
    ///
    /// The header carries the nature of address in 3 bits and the
    /// numbering plan in 4; a tag value that does not fit (`Wap`, or an
    /// `Undefined` byte past the nibble) is rejected rather than
    /// silently truncated.
    pub fn encode(&self) -> Result<BytesMut> {
        let na = self.nature_of_address.byte();
        let np = self.numbering_plan.byte();
        if na > 0x07 || np > 0x0F {
            return Err(InvalidDataError::new("GlobalTitle", vec![na, np]));
        }
        let digits = self.digits.bytes();
        let mut buf = BytesMut::with_capacity(1 + digits.len());
        buf.put_u8(0x80 | (na << 4) | np);
        buf.put_slice(&digits);
        Ok(buf)
    }

    /// Decode the packed header form. Fails on an empty buffer or a
    /// clear top bit; unknown tag nibbles decode totally so that tag
    /// values from newer protocol revisions still parse.
    pub fn decode(b: &[u8]) -> Result<Self> {
        let (&header, digits) = b
            .split_first()
            .ok_or_else(|| InvalidDataError::new("GlobalTitle", b.to_vec()))?;
        if header & 0x80 == 0 {
            return Err(InvalidDataError::new("GlobalTitle", b.to_vec()));
        }

        let nature_of_address = NatureOfAddress::from_byte((header >> 4) & 0x07);
        let numbering_plan = NumberingPlan::from_byte(header & 0x0F);
        if let NatureOfAddress::Undefined(v) = nature_of_address {
            debug!(value = v, "unrecognized nature of address in GT header");
        }
        if let NumberingPlan::Undefined(v) = numbering_plan {
            debug!(value = v, "unrecognized numbering plan in GT header");
        }

        Ok(Self {
            nature_of_address,
            numbering_plan,
            digits: Tbcd::from_bytes(digits)?,
        })
    }
}

impl fmt::Display for GlobalTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.digits, self.nature_of_address, self.numbering_plan
        )
    }
}
