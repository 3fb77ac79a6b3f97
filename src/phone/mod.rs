//! Phone number validation and metadata.
//!
//! Parsing and numbering-plan lookups are delegated to a
//! [`PhoneMetadataProvider`]; this module owns the input checks and the
//! mapping of provider output into an immutable [`PhoneRecord`].

mod provider;
mod types;
mod validator;

pub use provider::{PhoneMetadata, PhoneMetadataProvider, PhonenumberProvider};
pub use types::{LineType, PhoneRecord};
pub use validator::{normalize_number, NumberValidator};
