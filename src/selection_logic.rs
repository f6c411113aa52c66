// src/selection_logic.rs
// Pure drag handling, no window types in here.

/// Axis-aligned box in image pixels. Width and height are always > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    /// Returns `None` for zero or negative sizes.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Option<Rect> {
        if w <= 0 || h <= 0 {
            return None;
        }
        Some(Rect { x, y, w: w as u32, h: h as u32 })
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }

    /// Part of the box inside a `width` x `height` image, if any.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<Rect> {
        let x0 = (self.x as i64).max(0);
        let y0 = (self.y as i64).max(0);
        let x1 = self.right().min(width as i64);
        let y1 = self.bottom().min(height as i64);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect {
            x: x0 as i32,
            y: y0 as i32,
            w: (x1 - x0) as u32,
            h: (y1 - y0) as u32,
        })
    }

    pub fn to_imageproc(self) -> imageproc::rect::Rect {
        imageproc::rect::Rect::at(self.x, self.y).of_size(self.w, self.h)
    }
}

/// In-progress drag. Only the origin is known until the button is released.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    origin: Option<(i32, i32)>,
}

impl Selection {
    pub fn new() -> Self {
        Selection { origin: None }
    }

    /// A second press before a release just moves the origin.
    pub fn press(&mut self, x: i32, y: i32) {
        self.origin = Some((x, y));
    }

    /// Finishes the drag. Drags that do not go down and to the right are dropped,
    /// as are drags too wide to measure.
    pub fn release(&mut self, x: i32, y: i32) -> Option<Rect> {
        let (ox, oy) = self.origin.take()?;
        Rect::new(ox, oy, x.checked_sub(ox)?, y.checked_sub(oy)?)
    }
}
