use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistogramError {
    #[error("pixel buffer length {len} does not match dimensions {width}x{height}")]
    DimensionMismatch {
        len: usize,
        width: usize,
        height: usize,
    },

    #[error("unknown sampling method {0}, expected 1 (global) or 2 (boxed)")]
    UnknownMethod(u8),

    #[error("box size must be non-zero, got {width}x{height}")]
    InvalidBoxSize { width: usize, height: usize },

    #[error("hue_groups must be at least 1, got {0}")]
    InvalidHueGroups(usize),
}
