extern crate alloc;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

use crate::hsl::{hue_group, rgb_to_hsl};

/// Per-bucket hue counter with the colors seen while the bucket was still rare.
#[derive(Debug, Clone, Default)]
struct HueGroup {
    count: u32,
    retained: Vec<u32>,
}

/// Hue-bucketed statistics that remember colors from under-represented hues.
///
/// Every sampled color lands in one of `num_groups + 1` buckets: bucket 0
/// for achromatic colors (r == g == b) and buckets `1..=num_groups` for
/// equal angular slices of the hue circle. A bucket keeps every color it
/// sees until its count passes `min_cols`; buckets that never pass it are
/// "rare" and their colors can be injected back into a candidate set.
#[derive(Debug, Clone)]
pub struct HueStatistics {
    num_groups: usize,
    min_cols: u32,
    groups: Vec<HueGroup>,
    groups_full: usize,
    /// Every bucket has reached `min_cols`; `check` is a no-op from here on.
    saturated: bool,
}

impl HueStatistics {
    /// `num_groups` is clamped to at least 1 so chromatic colors always
    /// have a bucket.
    pub fn new(num_groups: usize, min_cols: u32) -> Self {
        let num_groups = num_groups.max(1);
        Self {
            num_groups,
            min_cols,
            groups: alloc::vec![HueGroup::default(); num_groups + 1],
            groups_full: 0,
            saturated: false,
        }
    }

    /// Record one sampled color. Alpha is ignored for classification.
    pub fn check(&mut self, color: u32) {
        if self.saturated {
            return;
        }

        let r = color as u8;
        let g = (color >> 8) as u8;
        let b = (color >> 16) as u8;
        let idx = self.group_index(r, g, b);
        let min = self.min_cols;
        let group = &mut self.groups[idx];

        group.count += 1;
        if group.count > min {
            return;
        }
        if group.count == min {
            self.groups_full += 1;
            if self.groups_full == self.num_groups + 1 {
                self.saturated = true;
                log::trace!("all {} hue groups reached {min} colors", self.num_groups + 1);
            }
        }
        group.retained.push(color);
    }

    fn group_index(&self, r: u8, g: u8, b: u8) -> usize {
        if r == g && g == b {
            0
        } else {
            1 + hue_group(rgb_to_hsl(r, g, b).h, self.num_groups)
        }
    }

    /// Append retained colors of rare groups that are not yet in `colors`.
    ///
    /// Existing entries keep their positions; new colors go at the end in
    /// group order.
    pub fn inject_into_list(&self, colors: &mut Vec<u32>) {
        let mut present: BTreeSet<u32> = colors.iter().copied().collect();
        let before = colors.len();
        for group in self.rare() {
            for &color in &group.retained {
                if present.insert(color) {
                    colors.push(color);
                }
            }
        }
        log::debug!("hue injection appended {} colors", colors.len() - before);
    }

    /// Add one occurrence to `counts` for every retained color of a rare group.
    ///
    /// Retained duplicates are counted once per occurrence.
    pub fn inject_into_map(&self, counts: &mut BTreeMap<u32, u32>) {
        let mut injected = 0usize;
        for group in self.rare() {
            for &color in &group.retained {
                *counts.entry(color).or_insert(0) += 1;
                injected += 1;
            }
        }
        log::debug!("hue injection added {injected} occurrences");
    }

    fn is_rare(&self, group: &HueGroup) -> bool {
        group.count <= self.min_cols
    }

    fn rare(&self) -> impl Iterator<Item = &HueGroup> {
        self.rare_groups().map(move |i| &self.groups[i])
    }

    /// Indices of groups whose count never exceeded `min_cols`.
    pub fn rare_groups(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups
            .iter()
            .enumerate()
            .filter(move |(_, g)| self.is_rare(g))
            .map(|(i, _)| i)
    }

    pub fn num_groups(&self) -> usize {
        self.num_groups
    }

    pub fn min_cols(&self) -> u32 {
        self.min_cols
    }

    /// Colors counted into group `index`, or 0 for an out-of-range index.
    pub fn group_count(&self, index: usize) -> u32 {
        self.groups.get(index).map_or(0, |g| g.count)
    }

    /// Colors retained by group `index`, in sampling order.
    pub fn retained(&self, index: usize) -> &[u32] {
        match self.groups.get(index) {
            Some(g) => &g.retained,
            None => &[],
        }
    }

    pub fn is_saturated(&self) -> bool {
        self.saturated
    }
}
