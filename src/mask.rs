//! Binary masks built from the stored boxes, one per non-empty brush.

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_rect_mut;

use crate::brush::Brush;
use crate::error::LabelError;
use crate::store::BoxStore;

pub const MASK_EXTENSION: &str = "jpg";

const FOREGROUND: Luma<u8> = Luma([255]);

/// Mask for a single brush.
#[derive(Debug, Clone)]
pub struct Mask {
    pub brush: Brush,
    pub image: GrayImage,
}

/// One mask per brush that has boxes, in ascending brush order with no gaps.
///
/// Each mask has the store's image size, 0 everywhere except inside the
/// brush's boxes which are 255.
pub fn build_masks(store: &BoxStore) -> Vec<Mask> {
    let (width, height) = store.dimensions();
    store
        .iter()
        .filter(|(_, boxes)| !boxes.is_empty())
        .map(|(brush, boxes)| {
            let mut image = GrayImage::new(width, height);
            for rect in boxes {
                draw_filled_rect_mut(&mut image, rect.to_imageproc(), FOREGROUND);
            }
            Mask { brush, image }
        })
        .collect()
}

/// `<stem>_output<index>.jpg`
pub fn mask_file_name(stem: &str, index: usize) -> String {
    format!("{stem}_output{index}.{MASK_EXTENSION}")
}

/// Writes masks into `dir`, creating it if needed. Returns the written paths in order.
pub fn write_masks(masks: &[Mask], dir: &Path, stem: &str) -> Result<Vec<PathBuf>, LabelError> {
    if masks.is_empty() {
        return Ok(Vec::new());
    }
    fs::create_dir_all(dir).map_err(|source| LabelError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(masks.len());
    for (index, mask) in masks.iter().enumerate() {
        let path = dir.join(mask_file_name(stem, index));
        mask.image.save(&path).map_err(|source| LabelError::Write {
            path: path.clone(),
            source,
        })?;
        log::debug!("Wrote mask for brush {} to {}", mask.brush, path.display());
        written.push(path);
    }
    Ok(written)
}
