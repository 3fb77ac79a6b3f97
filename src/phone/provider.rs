//! Phone metadata provider seam and the `phonenumber`-backed implementation.

use std::collections::BTreeSet;

use isocountry::CountryCode;
use phonenumber::metadata::DATABASE;
use phonenumber::{PhoneNumber, Type};

/// Everything the validator needs to know about a parsed number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneMetadata {
    pub country_name: String,
    pub region_description: String,
    pub carrier_name: String,
    pub time_zones: BTreeSet<String>,
    /// Numeric line-type code, see [`LineType::from_code`](super::LineType::from_code)
    pub line_type_code: i32,
}

/// External numbering-plan capability.
///
/// Implementations parse a normalized `+<digits>` string, report whether the
/// number is assignable, and describe it in the requested locale.
pub trait PhoneMetadataProvider {
    /// The provider's parsed number representation.
    type Number;

    /// Parses a normalized number. The error is the provider's own message.
    fn parse(&self, number: &str) -> Result<Self::Number, String>;

    /// Whether the parsed number is a valid assignable number.
    fn is_valid(&self, number: &Self::Number) -> bool;

    /// Country, region, carrier, time zone and line-type lookups.
    fn describe(&self, number: &Self::Number, locale: &str) -> PhoneMetadata;
}

impl<P: PhoneMetadataProvider + ?Sized> PhoneMetadataProvider for &P {
    type Number = P::Number;

    fn parse(&self, number: &str) -> Result<Self::Number, String> {
        (**self).parse(number)
    }

    fn is_valid(&self, number: &Self::Number) -> bool {
        (**self).is_valid(number)
    }

    fn describe(&self, number: &Self::Number, locale: &str) -> PhoneMetadata {
        (**self).describe(number, locale)
    }
}

/// Provider backed by the `phonenumber` crate's bundled numbering-plan metadata.
///
/// That metadata covers validity, line type and region; it has no carrier,
/// geographic description or time zone tables, so those come back empty.
/// Country names are English regardless of locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhonenumberProvider;

impl PhoneMetadataProvider for PhonenumberProvider {
    type Number = PhoneNumber;

    fn parse(&self, number: &str) -> Result<PhoneNumber, String> {
        phonenumber::parse(None, number).map_err(|e| e.to_string())
    }

    fn is_valid(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn describe(&self, number: &PhoneNumber, locale: &str) -> PhoneMetadata {
        if !locale.eq_ignore_ascii_case("en") {
            log::debug!("Locale {} not available, using English names", locale);
        }

        let country_name = number
            .country()
            .id()
            .map(|id| country_name_for(&format!("{:?}", id)))
            .unwrap_or_default();

        PhoneMetadata {
            country_name,
            line_type_code: line_type_code(number.number_type(&DATABASE)),
            ..Default::default()
        }
    }
}

/// English display name for an ISO 3166 alpha-2 region id, empty when unknown.
///
/// `isocountry` carries the formal ISO names ("United States of America",
/// "Korea (Republic of)"); regions whose common name differs are listed here.
fn country_name_for(alpha2: &str) -> String {
    let common = match alpha2 {
        "BO" => "Bolivia",
        "BN" => "Brunei",
        "BQ" => "Caribbean Netherlands",
        "BS" => "Bahamas",
        "CD" => "Congo - Kinshasa",
        "CG" => "Congo - Brazzaville",
        "CI" => "Côte d’Ivoire",
        "CZ" => "Czechia",
        "FK" => "Falkland Islands",
        "FM" => "Micronesia",
        "GB" => "United Kingdom",
        "GM" => "Gambia",
        "HK" => "Hong Kong",
        "IR" => "Iran",
        "KP" => "North Korea",
        "KR" => "South Korea",
        "LA" => "Laos",
        "MD" => "Moldova",
        "MF" => "St. Martin",
        "MK" => "North Macedonia",
        "MO" => "Macao",
        "NL" => "Netherlands",
        "PS" => "Palestinian Territories",
        "RU" => "Russia",
        "SH" => "St. Helena",
        "SX" => "Sint Maarten",
        "SY" => "Syria",
        "TW" => "Taiwan",
        "TZ" => "Tanzania",
        "US" => "United States",
        "VA" => "Vatican City",
        "VE" => "Venezuela",
        "VG" => "British Virgin Islands",
        "VI" => "U.S. Virgin Islands",
        "VN" => "Vietnam",
        _ => {
            return CountryCode::for_alpha2(alpha2)
                .map(|code| code.name().to_string())
                .unwrap_or_default()
        }
    };
    common.to_string()
}

/// Encodes a `phonenumber::Type` in the fixed line-type code table.
fn line_type_code(number_type: Type) -> i32 {
    match number_type {
        Type::Unknown => 0,
        Type::FixedLine => 1,
        Type::Mobile => 2,
        Type::FixedLineOrMobile => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phone::LineType;

    #[test]
    fn test_line_type_codes_round_trip_through_table() {
        assert_eq!(LineType::from_code(line_type_code(Type::Unknown)), LineType::Unknown);
        assert_eq!(
            LineType::from_code(line_type_code(Type::FixedLine)),
            LineType::FixedLine
        );
        assert_eq!(LineType::from_code(line_type_code(Type::Mobile)), LineType::Mobile);
        assert_eq!(
            LineType::from_code(line_type_code(Type::FixedLineOrMobile)),
            LineType::FixedOrMobile
        );
        assert_eq!(LineType::from_code(line_type_code(Type::TollFree)), LineType::Other);
    }

    #[test]
    fn test_phonenumber_provider_parses_us_number() {
        let provider = PhonenumberProvider;
        let number = provider.parse("+14155552671").expect("parses");
        let meta = provider.describe(&number, "en");
        assert_eq!(meta.country_name, "United States");
    }

    #[test]
    fn test_phonenumber_provider_uses_common_country_names() {
        let provider = PhonenumberProvider;
        for (number, expected) in [
            ("+442071838750", "United Kingdom"),
            ("+821012345678", "South Korea"),
            ("+74951234567", "Russia"),
            ("+33612345678", "France"),
        ] {
            let parsed = provider.parse(number).expect("parses");
            assert_eq!(provider.describe(&parsed, "en").country_name, expected, "{number}");
        }
    }

    #[test]
    fn test_country_name_for_falls_back_to_iso_name() {
        assert_eq!(country_name_for("US"), "United States");
        assert_eq!(country_name_for("DE"), "Germany");
        assert_eq!(country_name_for("ZZ"), "");
    }

    #[test]
    fn test_phonenumber_provider_rejects_garbage() {
        assert!(PhonenumberProvider.parse("+").is_err());
    }
}
