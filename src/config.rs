use std::path::PathBuf;

use crate::brush::Palette;
use crate::keybindings::KeyBindings;

/// Outline width used for the preview.
pub const DEFAULT_THICKNESS: u32 = 3;

/// Settings shared by every file in a run.
#[derive(Debug, Clone)]
pub struct LabelerConfig {
    /// Where masks are written. Created on first save.
    pub output_dir: PathBuf,
    pub palette: Palette,
    pub bindings: KeyBindings,
    pub thickness: u32,
}

impl Default for LabelerConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            palette: Palette::default(),
            bindings: KeyBindings::default(),
            thickness: DEFAULT_THICKNESS,
        }
    }
}

impl LabelerConfig {
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}
