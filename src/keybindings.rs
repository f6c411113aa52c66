//! Key bindings for the labeling window.
//!
//! Keys arrive as lowercase characters; the window adapter is responsible for
//! turning its native key codes into these.

use crate::brush::Brush;

/// What a key press asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Save,
    Undo,
    SelectBrush(Brush),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub quit: char,
    pub save: char,
    pub undo: char,
    /// Brush hotkeys, index 0 selects brush one.
    pub brushes: [char; Brush::COUNT],
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: 'q',
            save: 's',
            undo: 'u',
            brushes: ['1', '2', '3', '4', '5'],
        }
    }
}

impl KeyBindings {
    pub fn command_for_key(&self, key: char) -> Option<Command> {
        if key == self.quit {
            Some(Command::Quit)
        } else if key == self.save {
            Some(Command::Save)
        } else if key == self.undo {
            Some(Command::Undo)
        } else {
            self.brushes
                .iter()
                .position(|&hotkey| hotkey == key)
                .and_then(Brush::from_index)
                .map(Command::SelectBrush)
        }
    }

    /// Key table for the help text.
    pub fn help(&self) -> String {
        let first = self.brushes[0];
        let last = self.brushes[Brush::COUNT - 1];
        format!(
            "Key binds:\n\
             \t{}\t: quit the current image without saving\n\
             \t{}\t: save the bit mask images to the output dir\n\
             \t{}\t: undo the last selection for the current brush\n\
             \t{}-{}\t: change the brush\n",
            self.quit, self.save, self.undo, first, last
        )
    }
}
