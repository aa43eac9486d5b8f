extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::boxes::{Rect, make_boxes};
use crate::error::HistogramError;
use crate::hue_stats::HueStatistics;
use crate::pixels::PixelSource;
use crate::sort::sorted_by_frequency;
use crate::{HistogramConfig, SampleMethod};

/// Packed color → occurrence count.
pub type ColorCounts = BTreeMap<u32, u32>;

/// Frequency histogram of packed colors with hue-diversity bookkeeping.
///
/// Sampling feeds every pixel through [`HueStatistics`] and into a global
/// count map. [`importance_sorted_colors`](Self::importance_sorted_colors)
/// then ranks the map by frequency and makes sure colors from rare hue
/// groups are part of the result.
#[derive(Debug, Clone)]
pub struct ColorHistogram {
    method: SampleMethod,
    /// Size of the frequency-ranked pool before tie extension and hue injection.
    init_colors: usize,
    box_width: usize,
    box_height: usize,
    box_pixels: usize,
    hue_stats: HueStatistics,
    histogram: ColorCounts,
}

impl ColorHistogram {
    /// Histogram with default box size and hue groups for a palette of `colors` entries.
    pub fn new(method: SampleMethod, colors: usize) -> Self {
        let config = HistogramConfig::new().method(method).colors(colors);
        Self::from_valid_config(&config)
    }

    pub fn with_config(config: &HistogramConfig) -> Result<Self, HistogramError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: &HistogramConfig) -> Self {
        let pool = config.colors.saturating_mul(4);
        let min_hue_cols = u32::try_from(pool).unwrap_or(u32::MAX);
        Self {
            method: config.method,
            init_colors: pool,
            box_width: config.box_width,
            box_height: config.box_height,
            box_pixels: config.box_pixels,
            hue_stats: HueStatistics::new(config.hue_groups, min_hue_cols),
            histogram: ColorCounts::new(),
        }
    }

    /// Accumulate statistics from `pixels`. Repeated calls add to the same histogram.
    pub fn sample<P: PixelSource + ?Sized>(&mut self, pixels: &P) {
        match self.method {
            SampleMethod::Global => self.sample_global(pixels),
            SampleMethod::Boxed => self.sample_boxed(pixels),
        }
    }

    /// Count every pixel once.
    fn sample_global<P: PixelSource + ?Sized>(&mut self, pixels: &P) {
        for i in 0..pixels.len() {
            let color = pixels.color(i);
            self.hue_stats.check(color);
            *self.histogram.entry(color).or_insert(0) += 1;
        }
        log::debug!(
            "global sampling: {} pixels, {} unique colors",
            pixels.len(),
            self.histogram.len()
        );
    }

    /// Count colors per box; a color only enters the global histogram once it
    /// is dense enough inside some box.
    fn sample_boxed<P: PixelSource + ?Sized>(&mut self, pixels: &P) {
        let width = pixels.width();
        let boxes = make_boxes(width, pixels.height(), self.box_width, self.box_height);
        let mut promoted = 0usize;

        for rect in &boxes {
            let threshold = self.promotion_threshold(rect);
            let mut local = ColorCounts::new();

            for i in rect.indices(width) {
                let color = pixels.color(i);
                self.hue_stats.check(color);

                if let Some(count) = self.histogram.get_mut(&color) {
                    *count += 1;
                    continue;
                }

                let count = local.entry(color).or_insert(0);
                *count += 1;
                if *count >= threshold {
                    let count = *count;
                    local.remove(&color);
                    self.histogram.insert(color, count);
                    promoted += 1;
                    log::trace!("promoted {color:#010x} in box at ({}, {})", rect.x, rect.y);
                }
            }
        }

        self.hue_stats.inject_into_map(&mut self.histogram);
        log::debug!(
            "boxed sampling: {} boxes, {promoted} promotions, {} colors",
            boxes.len(),
            self.histogram.len()
        );
    }

    /// Local count a color needs within `rect` to be promoted.
    ///
    /// Scales `box_pixels` by the box's area relative to a full box (rounded
    /// half up), never below 2.
    fn promotion_threshold(&self, rect: &Rect) -> u32 {
        let full = self.box_width * self.box_height;
        let scale = (2 * rect.area() + full) / (2 * full);
        let threshold = scale.saturating_mul(self.box_pixels).max(2);
        u32::try_from(threshold).unwrap_or(u32::MAX)
    }

    /// Candidate colors, most important first.
    ///
    /// Returns `None` if nothing has been sampled. For [`SampleMethod::Global`]
    /// the top `init_colors` entries are kept, extended by every entry tied in
    /// frequency with the last one kept, then colors from rare hue groups are
    /// appended. For [`SampleMethod::Boxed`] the whole histogram is returned,
    /// since hue injection already happened while sampling.
    pub fn importance_sorted_colors(&self) -> Option<Vec<u32>> {
        let sorted = sorted_by_frequency(&self.histogram);
        if sorted.is_empty() {
            return None;
        }

        let colors = match self.method {
            SampleMethod::Global => {
                let limit = sorted.len().min(self.init_colors);
                let mut colors = sorted[..limit].to_vec();

                if let Some(&last) = colors.last() {
                    let freq = self.frequency(last);
                    colors.extend(
                        sorted[limit..]
                            .iter()
                            .take_while(|&&c| self.frequency(c) == freq),
                    );
                }

                let ranked = colors.len();
                self.hue_stats.inject_into_list(&mut colors);
                log::debug!(
                    "candidates: {ranked} ranked of {}, {} after hue injection",
                    sorted.len(),
                    colors.len()
                );
                colors
            }
            SampleMethod::Boxed => sorted,
        };

        Some(colors)
    }

    fn frequency(&self, color: u32) -> u32 {
        self.histogram.get(&color).copied().unwrap_or(0)
    }

    /// Raw color counts gathered so far.
    pub fn histogram(&self) -> &ColorCounts {
        &self.histogram
    }

    pub fn hue_stats(&self) -> &HueStatistics {
        &self.hue_stats
    }

    pub fn method(&self) -> SampleMethod {
        self.method
    }

    pub fn init_colors(&self) -> usize {
        self.init_colors
    }

    /// Number of distinct colors in the histogram.
    pub fn len(&self) -> usize {
        self.histogram.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }
}
