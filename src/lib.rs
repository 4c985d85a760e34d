//! # Brivas Teldata
//!
//! Value types and binary codecs for the telecom identifiers used in
//! SS7/SIGTRAN signaling (TS 29.002 / ITU-T addressing):
//!
//! - **TBCD** - packed-decimal digit strings
//! - **E164** - international telephone numbers, at most 15 digits
//! - **IMSI** - subscriber identities, 5 to 15 digits
//! - **GlobalTitle** - SCCP routing addresses
//! - **LMSI** - opaque 4-octet local identifiers
//! - **SubsystemNumber** - SCCP subsystem tags (HLR, VLR, MSC, ...)
//!
//! Every type decodes from wire bytes, renders as a string, and
//! serializes back deterministically. Values are immutable once
//! constructed and own their buffers, so they are safe to share across
//! threads without coordination.
//!
//! ## Example
//! ```rust,ignore
//! use brivas_teldata::{GlobalTitle, NatureOfAddress, NumberingPlan, Tbcd};
//!
//! let gt = GlobalTitle {
//!     nature_of_address: NatureOfAddress::International,
//!     numbering_plan: NumberingPlan::Telephony,
//!     digits: Tbcd::parse("2348012345678")?,
//! };
//! let wire = gt.encode()?;
//! assert_eq!(GlobalTitle::decode(&wire)?, gt);
//! ```

pub mod e164;
pub mod errors;
pub mod global_title;
pub mod imsi;
pub mod lmsi;
pub mod tbcd;
pub mod types;

// Re-exports
pub use e164::E164;
pub use errors::{InvalidDataError, Result};
pub use global_title::GlobalTitle;
pub use imsi::Imsi;
pub use lmsi::Lmsi;
pub use tbcd::Tbcd;
pub use types::{NatureOfAddress, NumberingPlan, SubsystemNumber};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
