// Shared fakes for the external collaborators and pipeline setup.
//
// Each test file pulls this in with `#[path]`, so not every item is used everywhere.
#![allow(dead_code)]

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use phone_locator::error_handling::{GeocodeError, IpLookupError};
use phone_locator::geocode::{GeoCache, GeoResolver, GeoResult};
use phone_locator::history::HistoryStore;
use phone_locator::ip_location::{IpGeo, IpLocator};
use phone_locator::phone::{NumberValidator, PhoneMetadata, PhoneMetadataProvider};
use phone_locator::app::Session;
use phone_locator::LookupPipeline;

/// Numbering plan with a handful of known numbers. Anything else parses but
/// is reported as unassigned.
pub struct FakeProvider;

impl PhoneMetadataProvider for FakeProvider {
    type Number = String;

    fn parse(&self, number: &str) -> Result<String, String> {
        if number.starts_with("+0") {
            return Err("Invalid country code".to_string());
        }
        Ok(number.to_string())
    }

    fn is_valid(&self, number: &String) -> bool {
        describe_known(number).is_some()
    }

    fn describe(&self, number: &String, _locale: &str) -> PhoneMetadata {
        describe_known(number).unwrap_or_default()
    }
}

fn describe_known(number: &str) -> Option<PhoneMetadata> {
    let meta = match number {
        "+14155552671" => PhoneMetadata {
            country_name: "United States".into(),
            region_description: "San Francisco, CA".into(),
            carrier_name: "AT&T".into(),
            time_zones: BTreeSet::from(["America/Los_Angeles".to_string()]),
            line_type_code: 2,
        },
        "+442071838750" => PhoneMetadata {
            country_name: "United Kingdom".into(),
            region_description: "London".into(),
            carrier_name: String::new(),
            time_zones: BTreeSet::from(["Europe/London".to_string()]),
            line_type_code: 1,
        },
        "+33612345678" => PhoneMetadata {
            country_name: "France".into(),
            region_description: String::new(),
            carrier_name: "Orange".into(),
            time_zones: BTreeSet::from(["Europe/Paris".to_string()]),
            line_type_code: 2,
        },
        // Valid but with nothing to geocode
        "+8818000000" => PhoneMetadata {
            line_type_code: 9,
            ..Default::default()
        },
        _ => return None,
    };
    Some(meta)
}

pub fn san_francisco() -> GeoResult {
    GeoResult {
        latitude: 37.77,
        longitude: -122.42,
        confidence: Some(7),
        bounds: None,
    }
}

/// Resolver returning a fixed answer (or `NoResults`) and counting calls.
#[derive(Clone)]
pub struct CountingResolver {
    pub calls: Arc<AtomicUsize>,
    pub queries: Arc<std::sync::Mutex<Vec<String>>>,
    answer: Option<GeoResult>,
}

impl CountingResolver {
    pub fn returning(answer: GeoResult) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            queries: Arc::new(std::sync::Mutex::new(Vec::new())),
            answer: Some(answer),
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            queries: Arc::new(std::sync::Mutex::new(Vec::new())),
            answer: None,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeoResolver for CountingResolver {
    async fn resolve(&self, query: &str) -> Result<GeoResult, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        self.answer.clone().ok_or(GeocodeError::NoResults)
    }
}

/// IP locator that either succeeds with a fixed place or reports failure.
pub struct FakeIpLocator {
    pub calls: Arc<AtomicUsize>,
    succeed: bool,
}

impl FakeIpLocator {
    pub fn ok() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            succeed: true,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            succeed: false,
        }
    }
}

#[async_trait]
impl IpLocator for FakeIpLocator {
    async fn locate(&self) -> Result<IpGeo, IpLookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.succeed {
            Ok(IpGeo {
                city: "Oakland".into(),
                region: "California".into(),
                country: "United States".into(),
            })
        } else {
            Err(IpLookupError::Failed)
        }
    }
}

pub type TestPipeline = LookupPipeline<FakeProvider, CountingResolver, FakeIpLocator>;
pub type TestSession = Session<FakeProvider, CountingResolver, FakeIpLocator>;

/// Pipeline whose cache and history live in `dir`.
pub fn build_pipeline(
    dir: &Path,
    resolver: CountingResolver,
    ip_locator: FakeIpLocator,
) -> TestPipeline {
    LookupPipeline::new(
        NumberValidator::new(FakeProvider, "en"),
        resolver,
        ip_locator,
        GeoCache::load(dir.join("geocode_cache.json")),
        HistoryStore::load(dir.join("history.json")),
    )
}
