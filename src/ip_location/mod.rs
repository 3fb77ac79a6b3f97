//! Best-effort location of the caller's own public IP.
//!
//! Failures here never fail a lookup; they surface as
//! [`IpLocation::Unknown`].

mod locator;
mod types;

pub use locator::{IpApiLocator, IpLocator};
pub use types::{IpGeo, IpLocation};
