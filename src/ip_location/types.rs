//! IP location data structures.

use serde::{Deserialize, Serialize};

use crate::config::{NOT_RETRIEVED, UNKNOWN};

/// City/region/country reported for an IP address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpGeo {
    pub city: String,
    pub region: String,
    pub country: String,
}

impl std::fmt::Display for IpGeo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.city, self.region, self.country)
    }
}

/// Outcome of the optional IP enrichment step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum IpLocation {
    /// IP enrichment was not requested.
    #[default]
    NotRetrieved,
    /// `"city, region, country"`
    Located(String),
    /// The lookup was attempted and failed; carries the reason.
    Unknown(String),
}

impl IpLocation {
    /// The resolved description, if any.
    pub fn located(&self) -> Option<&str> {
        match self {
            IpLocation::Located(description) => Some(description),
            _ => None,
        }
    }
}

impl std::fmt::Display for IpLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IpLocation::NotRetrieved => f.write_str(NOT_RETRIEVED),
            IpLocation::Located(description) => f.write_str(description),
            IpLocation::Unknown(reason) => write!(f, "{} ({})", UNKNOWN, reason),
        }
    }
}
