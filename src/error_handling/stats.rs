//! Lookup session statistics.
//!
//! Counts failures by category and notable events (cache hits, IP lookups)
//! over the lifetime of a CLI session.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType};

/// Per-session counters. All types are initialized to zero on creation.
#[derive(Debug)]
pub struct ProcessingStats {
    succeeded: usize,
    errors: HashMap<ErrorType, usize>,
    info: HashMap<InfoType, usize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        ProcessingStats {
            succeeded: 0,
            errors: ErrorType::iter().map(|e| (e, 0)).collect(),
            info: InfoType::iter().map(|i| (i, 0)).collect(),
        }
    }

    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn increment_error(&mut self, error: ErrorType) {
        *self.errors.entry(error).or_insert(0) += 1;
    }

    pub fn increment_info(&mut self, info_type: InfoType) {
        *self.info.entry(info_type).or_insert(0) += 1;
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(&error).copied().unwrap_or(0)
    }

    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info.get(&info_type).copied().unwrap_or(0)
    }

    pub fn total_errors(&self) -> usize {
        self.errors.values().sum()
    }

    pub fn total_info(&self) -> usize {
        self.info.values().sum()
    }

    /// Total lookups attempted (successes plus failures).
    pub fn total(&self) -> usize {
        self.succeeded + self.total_errors()
    }
}
