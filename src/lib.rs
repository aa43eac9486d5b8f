//! Hue-balanced color histograms for seeding palette quantizers.
//!
//! [`ColorHistogram`] counts packed colors from a [`PixelSource`] and ranks
//! them by frequency, while [`HueStatistics`] makes sure colors from rare hue
//! regions (a small logo, a single saturated accent) still make it into the
//! candidate list.
//!
//! ```
//! use zenhist::{ColorHistogram, PixelBuffer, SampleMethod, pack_rgba};
//!
//! let mut colors = vec![pack_rgba(128, 128, 128, 255); 96];
//! colors.extend([pack_rgba(255, 0, 0, 255); 4]);
//! let image = PixelBuffer::from_packed(colors, 10, 10).unwrap();
//!
//! let mut hist = ColorHistogram::new(SampleMethod::Global, 1);
//! hist.sample(&image);
//! let candidates = hist.importance_sorted_colors().unwrap();
//! assert!(candidates.contains(&pack_rgba(255, 0, 0, 255)));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod boxes;
pub mod error;
pub mod histogram;
pub mod hsl;
pub mod hue_stats;
pub mod pixels;
pub mod sort;

pub use error::HistogramError;
pub use histogram::{ColorCounts, ColorHistogram};
pub use hue_stats::HueStatistics;
pub use pixels::{PixelBuffer, PixelSource, pack_rgba, unpack_rgba};

/// How pixels are turned into histogram counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMethod {
    /// Count every pixel in one global pass. Candidates are the most frequent
    /// colors plus rare-hue injections.
    #[default]
    Global,
    /// Count per spatial box and only keep colors that are locally dense in
    /// at least one box. Protects small distinct features from being drowned
    /// out by global frequency.
    Boxed,
}

impl SampleMethod {
    /// Parse the numeric method id: 1 = global, 2 = boxed.
    pub fn from_id(id: u8) -> Result<Self, HistogramError> {
        match id {
            1 => Ok(Self::Global),
            2 => Ok(Self::Boxed),
            other => Err(HistogramError::UnknownMethod(other)),
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Self::Global => 1,
            Self::Boxed => 2,
        }
    }
}

impl TryFrom<u8> for SampleMethod {
    type Error = HistogramError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

/// Configuration for building a [`ColorHistogram`].
#[derive(Debug, Clone)]
pub struct HistogramConfig {
    /// Sampling strategy.
    pub method: SampleMethod,
    /// Target palette size. The ranked candidate pool and the per-hue
    /// retention threshold are both four times this.
    pub colors: usize,
    /// Box width for [`SampleMethod::Boxed`].
    pub box_width: usize,
    /// Box height for [`SampleMethod::Boxed`].
    pub box_height: usize,
    /// Promotion threshold for a full box. Scaled by box area, never below 2.
    pub box_pixels: usize,
    /// Number of angular hue groups, not counting the achromatic group.
    pub hue_groups: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            method: SampleMethod::Global,
            colors: 256,
            box_width: 64,
            box_height: 64,
            box_pixels: 2,
            hue_groups: 10,
        }
    }
}

impl HistogramConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: SampleMethod) -> Self {
        self.method = method;
        self
    }

    pub fn colors(mut self, n: usize) -> Self {
        self.colors = n;
        self
    }

    pub fn box_size(mut self, width: usize, height: usize) -> Self {
        self.box_width = width;
        self.box_height = height;
        self
    }

    pub fn box_pixels(mut self, n: usize) -> Self {
        self.box_pixels = n;
        self
    }

    pub fn hue_groups(mut self, n: usize) -> Self {
        self.hue_groups = n;
        self
    }

    pub fn validate(&self) -> Result<(), HistogramError> {
        if self.box_width == 0 || self.box_height == 0 {
            return Err(HistogramError::InvalidBoxSize {
                width: self.box_width,
                height: self.box_height,
            });
        }
        if self.hue_groups == 0 {
            return Err(HistogramError::InvalidHueGroups(self.hue_groups));
        }
        Ok(())
    }
}
