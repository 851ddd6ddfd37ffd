use serde::{Deserialize, Serialize};

use crate::bloom::BloomFilter;
use crate::consts::{DEFAULT_BLUR_RADIUS, DEFAULT_DOWNSAMPLE_RATIO, DEFAULT_THRESHOLD};

/// Persisted bloom parameters. The host's process-wide defaults and its
/// per-scene record both use this shape and these field names.
///
/// `highlight_only` is runtime state only and deliberately has no field
/// here: the host has never persisted it, and stored scenes must keep
/// loading with the flag off.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BloomSettings {
    pub blur_radius: usize,
    pub threshold: f64,
    pub downsampling_ratio: usize,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self {
            blur_radius: DEFAULT_BLUR_RADIUS,
            threshold: DEFAULT_THRESHOLD,
            downsampling_ratio: DEFAULT_DOWNSAMPLE_RATIO,
        }
    }
}

impl BloomSettings {
    /// Construct a filter from this record.
    pub fn build_filter(&self) -> BloomFilter {
        BloomFilter::new(self.downsampling_ratio, self.blur_radius, self.threshold)
    }

    /// Capture a filter's current numeric state for persistence.
    pub fn capture(filter: &BloomFilter) -> Self {
        Self {
            blur_radius: filter.blur_radius(),
            threshold: filter.threshold(),
            downsampling_ratio: filter.down_sample_ratio(),
        }
    }
}
