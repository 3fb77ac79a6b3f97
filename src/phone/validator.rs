//! Phone number validation.

use std::sync::LazyLock;

use regex::Regex;

use super::provider::PhoneMetadataProvider;
use super::types::{LineType, PhoneRecord};
use crate::error_handling::ValidationError;

/// Visual separators people type inside numbers.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-().]").expect("separator pattern is valid"));

static INTERNATIONAL_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\d+$").expect("digit pattern is valid"));

const PARSE_HINT: &str =
    "Error parsing phone number. Ensure it starts with '+' and contains only digits.";

/// Trims the input and strips separators (spaces, `-`, `.`, parentheses).
pub fn normalize_number(raw: &str) -> String {
    SEPARATORS.replace_all(raw.trim(), "").into_owned()
}

/// Validates raw phone number strings and builds [`PhoneRecord`]s.
///
/// Has no side effects; all numbering-plan knowledge lives in the provider.
#[derive(Debug, Clone)]
pub struct NumberValidator<P> {
    provider: P,
    locale: String,
}

impl<P: PhoneMetadataProvider> NumberValidator<P> {
    pub fn new(provider: P, locale: impl Into<String>) -> Self {
        Self {
            provider,
            locale: locale.into(),
        }
    }

    /// Validates `raw` and returns its metadata.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the number does not start with `+`
    /// - `ParseError` if it contains anything but digits after the `+`, or the
    ///   provider cannot parse it (the provider's message is passed through)
    /// - `InvalidNumber` if the provider reports it as not assignable
    pub fn validate(&self, raw: &str) -> Result<PhoneRecord, ValidationError> {
        let number = normalize_number(raw);
        if !number.starts_with('+') {
            return Err(ValidationError::InvalidFormat);
        }
        if !INTERNATIONAL_DIGITS.is_match(&number) {
            return Err(ValidationError::ParseError(PARSE_HINT.to_string()));
        }

        let parsed = self
            .provider
            .parse(&number)
            .map_err(ValidationError::ParseError)?;
        if !self.provider.is_valid(&parsed) {
            return Err(ValidationError::InvalidNumber);
        }

        let meta = self.provider.describe(&parsed, &self.locale);
        Ok(PhoneRecord::new(
            number,
            meta.country_name,
            meta.region_description,
            meta.carrier_name,
            meta.time_zones,
            LineType::from_code(meta.line_type_code),
        ))
    }
}
