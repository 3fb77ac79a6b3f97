//! Phone record data structures.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Coarse classification of a number's assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum LineType {
    #[serde(rename = "Unknown")]
    Unknown,
    #[serde(rename = "Fixed line")]
    FixedLine,
    #[serde(rename = "Mobile")]
    Mobile,
    #[serde(rename = "Fixed line or mobile")]
    FixedOrMobile,
    #[serde(rename = "Other")]
    Other,
}

impl LineType {
    /// Maps a provider line-type code through the fixed table
    /// 0 Unknown, 1 FixedLine, 2 Mobile, 3 FixedOrMobile, anything else Other.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => LineType::Unknown,
            1 => LineType::FixedLine,
            2 => LineType::Mobile,
            3 => LineType::FixedOrMobile,
            _ => LineType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineType::Unknown => "Unknown",
            LineType::FixedLine => "Fixed line",
            LineType::Mobile => "Mobile",
            LineType::FixedOrMobile => "Fixed line or mobile",
            LineType::Other => "Other",
        }
    }
}

impl std::fmt::Display for LineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one validated phone number.
///
/// Only produced by [`NumberValidator::validate`](super::NumberValidator::validate)
/// and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhoneRecord {
    raw_number: String,
    country_name: String,
    region_description: String,
    carrier_name: String,
    time_zones: BTreeSet<String>,
    line_type: LineType,
}

impl PhoneRecord {
    pub(crate) fn new(
        raw_number: String,
        country_name: String,
        region_description: String,
        carrier_name: String,
        time_zones: BTreeSet<String>,
        line_type: LineType,
    ) -> Self {
        Self {
            raw_number,
            country_name,
            region_description,
            carrier_name,
            time_zones,
            line_type,
        }
    }

    /// Normalized number: `+` followed by digits only.
    pub fn raw_number(&self) -> &str {
        &self.raw_number
    }

    /// Country name, empty when unknown.
    pub fn country_name(&self) -> &str {
        &self.country_name
    }

    /// Region or city description, empty when unknown.
    pub fn region_description(&self) -> &str {
        &self.region_description
    }

    /// Carrier name, empty when unknown.
    pub fn carrier_name(&self) -> &str {
        &self.carrier_name
    }

    /// IANA time zone identifiers, possibly empty.
    pub fn time_zones(&self) -> &BTreeSet<String> {
        &self.time_zones
    }

    pub fn line_type(&self) -> LineType {
        self.line_type
    }
}
