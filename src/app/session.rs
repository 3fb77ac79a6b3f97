//! A lookup session: the pipeline plus the side outputs of each lookup.

use std::path::PathBuf;

use log::warn;

use crate::config::{Config, LookupOptionsArgs};
use crate::error_handling::{InfoType, LookupError, ProcessingStats};
use crate::export::append_lookup_row;
use crate::geocode::GeoResolver;
use crate::ip_location::{IpLocation, IpLocator};
use crate::lookup::{LookupPipeline, LookupResult};
use crate::map::{locate_ip_marker, MapView};
use crate::phone::PhoneMetadataProvider;

/// A successful lookup and the map written for it, if any.
#[derive(Debug)]
pub struct Tracked {
    pub result: LookupResult,
    pub map_file: Option<PathBuf>,
}

/// Runs lookups, writes the per-lookup CSV row and map, and counts outcomes.
pub struct Session<P, G, I> {
    pipeline: LookupPipeline<P, G, I>,
    config: Config,
    stats: ProcessingStats,
}

impl<P, G, I> Session<P, G, I>
where
    P: PhoneMetadataProvider,
    G: GeoResolver,
    I: IpLocator,
{
    pub fn new(pipeline: LookupPipeline<P, G, I>, config: Config) -> Self {
        Self {
            pipeline,
            config,
            stats: ProcessingStats::new(),
        }
    }

    /// Looks up one number.
    ///
    /// Failures writing the CSV row or the map are logged and do not fail the
    /// lookup.
    pub async fn track(
        &mut self,
        raw: &str,
        args: &LookupOptionsArgs,
    ) -> Result<Tracked, LookupError> {
        let options = args.lookup_options();
        let result = match self.pipeline.lookup(raw, &options).await {
            Ok(result) => result,
            Err(e) => {
                self.stats.increment_error(e.error_type());
                return Err(e);
            }
        };
        self.record(&result, options.include_ip);

        if !args.no_export {
            if let Some(entry) = self.pipeline.history().all().last() {
                if let Err(e) = append_lookup_row(&self.config.lookup_export_path, entry) {
                    warn!("Failed to append lookup row: {:#}", e);
                }
            }
        }

        let map_file = if args.no_map {
            None
        } else {
            let ip_position = locate_ip_marker(self.pipeline.resolver(), &result.ip_location).await;
            let view = MapView::for_lookup(&result, ip_position);
            match view.save(&self.config.map_path) {
                Ok(()) => Some(self.config.map_path.clone()),
                Err(e) => {
                    warn!("{:#}", e);
                    None
                }
            }
        };

        Ok(Tracked { result, map_file })
    }

    fn record(&mut self, result: &LookupResult, include_ip: bool) {
        self.stats.record_success();
        self.stats.increment_info(if result.cache_hit {
            InfoType::CacheHit
        } else {
            InfoType::CacheMiss
        });
        if include_ip {
            match result.ip_location {
                IpLocation::Located(_) => self.stats.increment_info(InfoType::IpLocated),
                _ => self.stats.increment_info(InfoType::IpUnknown),
            }
        }
    }

    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    pub fn pipeline(&self) -> &LookupPipeline<P, G, I> {
        &self.pipeline
    }
}
