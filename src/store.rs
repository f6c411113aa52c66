//! Committed boxes per brush and the active brush.

use crate::brush::Brush;
use crate::selection_logic::Rect;

/// Boxes drawn on one image, grouped by brush in insertion order.
#[derive(Debug, Clone)]
pub struct BoxStore {
    width: u32,
    height: u32,
    active: Brush,
    boxes: [Vec<Rect>; Brush::COUNT],
}

impl BoxStore {
    /// Empty store for a `width` x `height` image, brush one active.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            active: Brush::default(),
            boxes: Default::default(),
        }
    }

    pub fn active(&self) -> Brush {
        self.active
    }

    pub fn select_brush(&mut self, brush: Brush) {
        self.active = brush;
        log::info!("Changed brush to: {}", brush);
    }

    /// Appends `rect` to the active brush, clipped to the image.
    ///
    /// Returns `false` when nothing of the box lies inside the image.
    pub fn commit(&mut self, rect: Rect) -> bool {
        let Some(clamped) = rect.clamp_to(self.width, self.height) else {
            log::debug!("Dropped box outside the image: {:?}", rect);
            return false;
        };
        if clamped != rect {
            log::debug!("Clamped box {:?} to {:?}", rect, clamped);
        }

        let brush = self.active;
        let list = &mut self.boxes[brush.index()];
        list.push(clamped);
        log::info!(
            "[BRUSH ID: {}] New Rect: {}, {} <LEN BRUSH: {}>",
            brush,
            clamped.w,
            clamped.h,
            list.len()
        );
        true
    }

    /// Removes the newest box of the active brush. Returns `false` if it had none.
    pub fn undo(&mut self) -> bool {
        let brush = self.active;
        match self.boxes[brush.index()].pop() {
            Some(_) => {
                log::info!("UNDO for brush: {}", brush);
                true
            }
            None => false,
        }
    }

    pub fn boxes(&self, brush: Brush) -> &[Rect] {
        &self.boxes[brush.index()]
    }

    /// Brushes with their boxes in ascending brush order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (Brush, &[Rect])> {
        Brush::ALL.into_iter().map(move |b| (b, self.boxes(b)))
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(x, y, w, h).unwrap()
    }

    #[test]
    fn test_commit_appends_to_active_brush() {
        let mut store = BoxStore::new(100, 100);
        assert!(store.commit(rect(0, 0, 10, 10)));
        assert!(store.commit(rect(5, 5, 10, 10)));
        assert_eq!(store.boxes(Brush::One), &[rect(0, 0, 10, 10), rect(5, 5, 10, 10)]);
        assert!(store.boxes(Brush::Two).is_empty());
    }

    #[test]
    fn test_commit_clamps_to_image() {
        let mut store = BoxStore::new(50, 40);
        assert!(store.commit(rect(40, 30, 20, 20)));
        assert_eq!(store.boxes(Brush::One), &[rect(40, 30, 10, 10)]);

        assert!(!store.commit(rect(60, 0, 5, 5)));
        assert_eq!(store.boxes(Brush::One).len(), 1);
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut store = BoxStore::new(10, 10);
        assert!(!store.undo());
        assert!(!store.undo());
        assert!(store.is_empty());
    }

    #[test]
    fn test_undo_is_lifo() {
        let mut store = BoxStore::new(100, 100);
        store.commit(rect(0, 0, 1, 1));
        store.commit(rect(2, 2, 1, 1));
        assert!(store.undo());
        assert_eq!(store.boxes(Brush::One), &[rect(0, 0, 1, 1)]);
    }

    #[test]
    fn test_switching_brush_keeps_other_boxes() {
        let mut store = BoxStore::new(100, 100);
        store.commit(rect(0, 0, 5, 5));
        store.select_brush(Brush::Four);
        store.commit(rect(10, 10, 5, 5));

        assert!(store.undo());
        assert!(!store.undo());
        assert_eq!(store.boxes(Brush::One), &[rect(0, 0, 5, 5)]);
        assert!(store.boxes(Brush::Four).is_empty());
        assert_eq!(store.active(), Brush::Four);
    }

    #[test]
    fn test_iter_is_in_brush_order() {
        let store = BoxStore::new(1, 1);
        let order: Vec<Brush> = store.iter().map(|(b, _)| b).collect();
        assert_eq!(order, Brush::ALL.to_vec());
    }
}
