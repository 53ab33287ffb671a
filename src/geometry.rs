//! Geometry primitives and the pure mapping functions used by the
//! transition engine.
//!
//! Everything here is side-effect free: rectangles are plain values in the
//! shared transition-container coordinate space (origin top-left, y down),
//! and the progress/scale mappings are clamped linear interpolations.

/// A point in the transition container's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height. Degenerate heights yield an aspect of 1.0 so that
    /// downstream fit math stays finite.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height <= f32::EPSILON {
            1.0
        } else {
            self.width / self.height
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// A rect of the same size centered on `center`.
    pub fn with_center(&self, center: Point) -> Self {
        Self {
            x: center.x - self.width * 0.5,
            y: center.y - self.height * 0.5,
            ..*self
        }
    }

    /// Scale width and height by `factor`, keeping the center fixed.
    pub fn scaled_about_center(&self, factor: f32) -> Self {
        let center = self.center();
        Self {
            x: 0.0,
            y: 0.0,
            width: self.width * factor,
            height: self.height * factor,
        }
        .with_center(center)
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Largest rectangle with aspect ratio `source_aspect` that fits centered
/// inside `dest`, letterboxed top/bottom when the source is wider than the
/// destination and left/right otherwise.
pub fn fit_rect(source_aspect: f32, dest: Rect) -> Rect {
    let dest_aspect = dest.size().aspect_ratio();
    let touches_sides = source_aspect > dest_aspect;

    if touches_sides {
        let height = dest.width / source_aspect;
        let y = dest.y + (dest.height - height) * 0.5;
        Rect::new(dest.x, y, dest.width, height)
    } else {
        let width = dest.height * source_aspect;
        let x = dest.x + (dest.width - width) * 0.5;
        Rect::new(x, dest.y, width, dest.height)
    }
}

/// Map a drag distance to a completion fraction in `[0, 1]`. Negative
/// distances (dragging away from the dismissal direction) are zero
/// progress.
///
/// `max_delta` must be positive; that is a caller contract, not a
/// recoverable condition. Release builds clamp defensively.
pub fn clamped_progress(delta: f32, max_delta: f32) -> f32 {
    debug_assert!(max_delta > 0.0, "clamped_progress: max_delta must be > 0");
    if max_delta <= 0.0 {
        return 0.0;
    }
    (delta.max(0.0) / max_delta).clamp(0.0, 1.0)
}

/// Map a completion fraction to a scale factor, 1.0 at progress 0 shrinking
/// linearly to `min_scale` at progress 1.
pub fn scale_from_progress(progress: f32, min_scale: f32) -> f32 {
    1.0 - progress * (1.0 - min_scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    #[test]
    fn test_fit_rect_wide_source_letterboxes_top_bottom() {
        let dest = Rect::new(0.0, 0.0, 400.0, 800.0);
        let fitted = fit_rect(2.0, dest);

        assert_eq!(fitted.width, 400.0);
        assert_eq!(fitted.height, 200.0);
        // Centered vertically
        assert_eq!(fitted.y, 300.0);
        assert_eq!(fitted.x, 0.0);
    }

    #[test]
    fn test_fit_rect_tall_source_letterboxes_left_right() {
        let dest = Rect::new(0.0, 0.0, 400.0, 800.0);
        let fitted = fit_rect(0.25, dest);

        assert_eq!(fitted.height, 800.0);
        assert_eq!(fitted.width, 200.0);
        assert_eq!(fitted.x, 100.0);
        assert_eq!(fitted.y, 0.0);
    }

    #[test]
    fn test_fit_rect_preserves_aspect_and_centering() {
        let dests = [
            Rect::new(0.0, 0.0, 390.0, 844.0),
            Rect::new(10.0, 20.0, 300.0, 300.0),
            Rect::new(-50.0, 5.0, 1024.0, 768.0),
        ];
        let aspects = [0.1, 0.5625, 1.0, 1.5, 4.0 / 3.0, 10.0];

        for dest in dests {
            for aspect in aspects {
                let fitted = fit_rect(aspect, dest);

                // Aspect preserved
                let got = fitted.width / fitted.height;
                assert!(
                    (got - aspect).abs() < TOLERANCE * aspect.max(1.0),
                    "aspect {} became {}",
                    aspect,
                    got
                );
                // One dimension matches dest, the other fits inside
                let width_match = (fitted.width - dest.width).abs() < TOLERANCE;
                let height_match = (fitted.height - dest.height).abs() < TOLERANCE;
                assert!(width_match || height_match);
                assert!(fitted.width <= dest.width + TOLERANCE);
                assert!(fitted.height <= dest.height + TOLERANCE);
                // Centered in dest
                let dc = dest.center();
                let fc = fitted.center();
                assert!((dc.x - fc.x).abs() < TOLERANCE);
                assert!((dc.y - fc.y).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_fit_rect_nonzero_origin() {
        let dest = Rect::new(100.0, 50.0, 200.0, 400.0);
        let fitted = fit_rect(1.0, dest);
        assert_eq!(fitted.width, 200.0);
        assert_eq!(fitted.height, 200.0);
        assert_eq!(fitted.x, 100.0);
        assert_eq!(fitted.y, 150.0);
    }

    #[test]
    fn test_clamped_progress_endpoints() {
        assert_eq!(clamped_progress(0.0, 200.0), 0.0);
        assert_eq!(clamped_progress(200.0, 200.0), 1.0);
        assert_eq!(clamped_progress(5000.0, 200.0), 1.0);
    }

    #[test]
    fn test_clamped_progress_negative_delta_is_zero() {
        assert_eq!(clamped_progress(-30.0, 200.0), 0.0);
        assert_eq!(clamped_progress(-0.001, 200.0), 0.0);
        assert_eq!(clamped_progress(f32::NEG_INFINITY, 200.0), 0.0);
    }

    #[test]
    fn test_clamped_progress_monotonic() {
        let mut last = 0.0;
        for step in 0..=50 {
            let delta = step as f32 * 10.0;
            let progress = clamped_progress(delta, 200.0);
            assert!(progress >= last);
            last = progress;
        }
    }

    #[test]
    fn test_scale_from_progress_linear() {
        assert_eq!(scale_from_progress(0.0, 0.68), 1.0);
        assert_eq!(scale_from_progress(1.0, 0.68), 0.68);
        assert!((scale_from_progress(0.5, 0.68) - 0.84).abs() < TOLERANCE);
    }

    #[test]
    fn test_scaled_about_center() {
        let rect = Rect::new(0.0, 0.0, 100.0, 200.0);
        let scaled = rect.scaled_about_center(0.5);
        assert_eq!(scaled.width, 50.0);
        assert_eq!(scaled.height, 100.0);
        assert_eq!(scaled.center(), rect.center());
    }

    #[test]
    fn test_with_center_and_offset() {
        let rect = Rect::new(0.0, 0.0, 40.0, 40.0);
        let moved = rect.with_center(Point::new(100.0, 100.0));
        assert_eq!(moved.x, 80.0);
        assert_eq!(moved.y, 80.0);
        assert_eq!(moved.offset(5.0, -5.0), Rect::new(85.0, 75.0, 40.0, 40.0));
    }
}
