//! Per-file labeling session.
//!
//! [`Session`] is the pure state machine: it takes one input event at a time
//! and says what the caller should do next. [`run_session`] drives it against
//! a [`Frontend`], which is the window in the real program and a script in
//! tests.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::config::LabelerConfig;
use crate::error::LabelError;
use crate::keybindings::{Command, KeyBindings};
use crate::mask::{build_masks, write_masks};
use crate::render::render;
use crate::selection_logic::Selection;
use crate::store::BoxStore;

/// Input delivered by the frontend, in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Press { x: i32, y: i32 },
    Release { x: i32, y: i32 },
    Key(char),
}

/// What the driver has to do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Redraw,
    Quit,
    Save,
}

/// Where a file's session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Quit,
    Saved(Vec<PathBuf>),
}

/// Display side of a session.
pub trait Frontend {
    fn show(&mut self, frame: &RgbImage) -> Result<(), LabelError>;

    /// Blocks until the next event. `None` means the window is gone.
    fn wait_event(&mut self) -> Result<Option<Event>, LabelError>;
}

#[derive(Debug, Clone)]
pub struct Session {
    store: BoxStore,
    selection: Selection,
    bindings: KeyBindings,
}

impl Session {
    pub fn new(width: u32, height: u32, bindings: KeyBindings) -> Self {
        Self {
            store: BoxStore::new(width, height),
            selection: Selection::new(),
            bindings,
        }
    }

    pub fn store(&self) -> &BoxStore {
        &self.store
    }

    pub fn handle(&mut self, event: Event) -> Outcome {
        match event {
            Event::Press { x, y } => {
                self.selection.press(x, y);
                Outcome::Continue
            }
            Event::Release { x, y } => match self.selection.release(x, y) {
                Some(rect) if self.store.commit(rect) => Outcome::Redraw,
                Some(_) => Outcome::Continue,
                None => {
                    log::debug!("Discarded empty drag ending at ({x}, {y})");
                    Outcome::Continue
                }
            },
            Event::Key(key) => match self.bindings.command_for_key(key) {
                Some(Command::Quit) => Outcome::Quit,
                Some(Command::Save) => Outcome::Save,
                Some(Command::Undo) if self.store.undo() => Outcome::Redraw,
                Some(Command::Undo) => Outcome::Continue,
                Some(Command::SelectBrush(brush)) => {
                    self.store.select_brush(brush);
                    Outcome::Continue
                }
                None => Outcome::Continue,
            },
        }
    }
}

pub fn load_image(path: &Path) -> Result<RgbImage, LabelError> {
    let image = image::open(path).map_err(|source| LabelError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgb8())
}

/// Base name without directory or extension, used to name the masks.
pub fn output_stem(path: &Path) -> Result<String, LabelError> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| LabelError::InvalidInput(path.to_path_buf()))
}

/// Loads `path`, opens a frontend sized to it and labels it until quit or save.
///
/// Nothing is shown if the image cannot be loaded.
pub fn label_file<F, O>(
    path: &Path,
    config: &LabelerConfig,
    open_frontend: O,
) -> Result<FileOutcome, LabelError>
where
    F: Frontend,
    O: FnOnce(&Path, u32, u32) -> Result<F, LabelError>,
{
    let image = load_image(path)?;
    let stem = output_stem(path)?;
    let mut frontend = open_frontend(path, image.width(), image.height())?;
    run_session(&image, path, &stem, config, &mut frontend)
}

pub fn run_session<F: Frontend>(
    image: &RgbImage,
    path: &Path,
    stem: &str,
    config: &LabelerConfig,
    frontend: &mut F,
) -> Result<FileOutcome, LabelError> {
    let (width, height) = image.dimensions();
    let mut session = Session::new(width, height, config.bindings.clone());
    frontend.show(image)?;

    loop {
        let Some(event) = frontend.wait_event()? else {
            log::info!("Window closed, QUIT without saving: {}", path.display());
            return Ok(FileOutcome::Quit);
        };

        match session.handle(event) {
            Outcome::Continue => {}
            Outcome::Redraw => {
                let frame = render(image, session.store(), &config.palette, config.thickness);
                frontend.show(&frame)?;
            }
            Outcome::Quit => {
                log::info!("QUIT without saving: {}", path.display());
                return Ok(FileOutcome::Quit);
            }
            Outcome::Save => {
                if session.store().is_empty() {
                    log::info!("No boxes drawn for {}", path.display());
                }
                let masks = build_masks(session.store());
                let written = write_masks(&masks, &config.output_dir, stem)?;
                log::info!("SAVED {} outputs for {}", written.len(), path.display());
                return Ok(FileOutcome::Saved(written));
            }
        }
    }
}
