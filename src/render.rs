//! Preview rendering: brush outlines over a copy of the source image.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;

use crate::brush::Palette;
use crate::selection_logic::Rect;
use crate::store::BoxStore;

/// Draws every stored box as an outline of `thickness` pixels.
///
/// Brushes are drawn in ascending order, so a later brush covers an earlier
/// one where outlines overlap. `base` is left untouched.
pub fn render(base: &RgbImage, store: &BoxStore, palette: &Palette, thickness: u32) -> RgbImage {
    let mut frame = base.clone();
    for (brush, boxes) in store.iter() {
        let color = palette.color(brush);
        for rect in boxes {
            draw_thick_outline(&mut frame, *rect, color, thickness);
        }
    }
    frame
}

/// Strokes are centered on the box edge, matching a pen of the given width.
fn draw_thick_outline(frame: &mut RgbImage, rect: Rect, color: Rgb<u8>, thickness: u32) {
    let thickness = thickness.max(1) as i64;
    let first = -(thickness / 2);
    for grow in first..first + thickness {
        let w = rect.w as i64 + 2 * grow;
        let h = rect.h as i64 + 2 * grow;
        if w <= 0 || h <= 0 {
            continue;
        }
        let ring = imageproc::rect::Rect::at(rect.x - grow as i32, rect.y - grow as i32)
            .of_size(w as u32, h as u32);
        draw_hollow_rect_mut(frame, ring, color);
    }
}

/// Packs pixels as `0x00RRGGBB` for the window buffer.
pub fn to_frame_buffer(frame: &RgbImage) -> Vec<u32> {
    frame
        .pixels()
        .map(|Rgb([r, g, b])| ((*r as u32) << 16) | ((*g as u32) << 8) | (*b as u32))
        .collect()
}
