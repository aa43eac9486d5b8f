extern crate alloc;
use alloc::vec::Vec;

/// An axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self { x, y, w, h }
    }

    pub const fn area(&self) -> usize {
        self.w * self.h
    }

    /// Linear indices of this rectangle's pixels inside a parent of width
    /// `parent_width`, row by row.
    pub fn indices(self, parent_width: usize) -> impl Iterator<Item = usize> {
        (0..self.h).flat_map(move |row| {
            let start = (self.y + row) * parent_width + self.x;
            start..start + self.w
        })
    }
}

/// Tile a `width`x`height` image with `box_w`x`box_h` boxes in row-major order.
///
/// Boxes on the right and bottom edges are clipped to the remaining space.
/// Returns no boxes if any dimension is zero.
pub fn make_boxes(width: usize, height: usize, box_w: usize, box_h: usize) -> Vec<Rect> {
    if width == 0 || height == 0 || box_w == 0 || box_h == 0 {
        return Vec::new();
    }

    let mut boxes = Vec::with_capacity(width.div_ceil(box_w) * height.div_ceil(box_h));
    for y in (0..height).step_by(box_h) {
        let h = box_h.min(height - y);
        for x in (0..width).step_by(box_w) {
            boxes.push(Rect::new(x, y, box_w.min(width - x), h));
        }
    }
    boxes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_tiling() {
        let boxes = make_boxes(128, 64, 64, 64);
        assert_eq!(boxes, vec![Rect::new(0, 0, 64, 64), Rect::new(64, 0, 64, 64)]);
    }

    #[test]
    fn edge_boxes_clipped() {
        let boxes = make_boxes(100, 70, 64, 64);
        assert_eq!(
            boxes,
            vec![
                Rect::new(0, 0, 64, 64),
                Rect::new(64, 0, 36, 64),
                Rect::new(0, 64, 64, 6),
                Rect::new(64, 64, 36, 6),
            ]
        );
    }

    #[test]
    fn image_smaller_than_box() {
        assert_eq!(make_boxes(10, 5, 64, 64), vec![Rect::new(0, 0, 10, 5)]);
    }

    #[test]
    fn covers_every_pixel_once() {
        let (w, h) = (37, 23);
        let mut seen = vec![0u8; w * h];
        for rect in make_boxes(w, h, 8, 5) {
            for i in rect.indices(w) {
                seen[i] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn indices_respect_offset() {
        let rect = Rect::new(1, 2, 2, 2);
        let idx: Vec<usize> = rect.indices(5).collect();
        assert_eq!(idx, vec![11, 12, 16, 17]);
    }

    #[test]
    fn zero_dimensions() {
        assert!(make_boxes(0, 10, 64, 64).is_empty());
        assert!(make_boxes(10, 0, 64, 64).is_empty());
        assert!(make_boxes(10, 10, 0, 64).is_empty());
    }
}
